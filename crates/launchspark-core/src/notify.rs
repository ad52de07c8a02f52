//! User-facing outcome notifications.
//!
//! The controller is handed a [`Notifier`] at construction and reports every
//! submission outcome through it. Success is transient (a popup that closes
//! itself), failure is blocking (a dialog the user dismisses); how either is
//! rendered is up to the implementation.

/// A notification the controller emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

/// Receives submission outcomes.
pub trait Notifier: Send + Sync {
    /// The endpoint accepted the submission.
    fn success(&self, message: &str);

    /// The submission failed, either rejected by the endpoint or lost in
    /// transport.
    fn failure(&self, message: &str);

    /// Dispatch a [`Notice`] to the matching method.
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::Success(m) => self.success(m),
            Notice::Failure(m) => self.failure(m),
        }
    }
}

/// A [`Notifier`] built from two closures.
///
/// ```
/// use launchspark_core::FnNotifier;
/// use launchspark_core::Notifier;
///
/// let notifier = FnNotifier::new(
///     |msg: &str| assert_eq!(msg, "sent"),
///     |msg: &str| assert_eq!(msg, "failed"),
/// );
/// notifier.success("sent");
/// notifier.failure("failed");
/// ```
pub struct FnNotifier<S, F> {
    on_success: S,
    on_failure: F,
}

impl<S, F> FnNotifier<S, F>
where
    S: Fn(&str) + Send + Sync,
    F: Fn(&str) + Send + Sync,
{
    pub fn new(on_success: S, on_failure: F) -> Self {
        Self {
            on_success,
            on_failure,
        }
    }
}

impl<S, F> Notifier for FnNotifier<S, F>
where
    S: Fn(&str) + Send + Sync,
    F: Fn(&str) + Send + Sync,
{
    fn success(&self, message: &str) {
        (self.on_success)(message);
    }

    fn failure(&self, message: &str) {
        (self.on_failure)(message);
    }
}

impl<S, F> std::fmt::Debug for FnNotifier<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnNotifier").finish_non_exhaustive()
    }
}
