//! Lead form controller.
//!
//! One [`LeadFormController`] drives one open form through
//! `Editing -> Submitting -> {Submitted | Editing}`. It owns the field
//! values, the error map and the in-flight flag; the endpoint and the
//! notifier are injected at construction.
//!
//! At most one request per controller is ever outstanding. A `submit` that
//! arrives while another is awaiting its response is dropped and reported
//! as [`SubmitOutcome::Busy`]; nothing is queued and nothing is retried.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};

use crate::endpoint::{Payload, SubmissionEndpoint};
use crate::form::{ErrorMap, FormState};
use crate::notify::{Notice, Notifier};
use crate::portfolio::PortfolioItem;
use crate::schema::FormSchema;
use crate::validate::validate;

/// Failure message used when the endpoint call did not complete.
pub const NETWORK_ERROR_MESSAGE: &str = "A network error occurred. Please try again.";

/// Lifecycle of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting edits. Initial state, and the state after a failed attempt.
    Editing,
    /// A request is awaiting its response.
    Submitting,
    /// The endpoint accepted the lead. Terminal.
    Submitted,
}

/// What a call to [`LeadFormController::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; see [`LeadFormController::errors`].
    Invalid,
    /// Another submission was already in flight, so this one was dropped.
    Busy,
    /// The form was already submitted.
    AlreadySubmitted,
    /// The endpoint accepted the lead.
    Accepted { message: String },
    /// The endpoint declined the lead.
    Rejected { message: String },
    /// The endpoint call did not complete.
    NetworkError,
}

impl SubmitOutcome {
    /// The notification this outcome is reported with, if any.
    #[must_use]
    pub fn notice(&self) -> Option<Notice> {
        match self {
            Self::Accepted { message } => Some(Notice::Success(message.clone())),
            Self::Rejected { message } => Some(Notice::Failure(message.clone())),
            Self::NetworkError => Some(Notice::Failure(NETWORK_ERROR_MESSAGE.to_owned())),
            Self::Invalid | Self::Busy | Self::AlreadySubmitted => None,
        }
    }
}

struct Inner {
    values: FormState,
    errors: ErrorMap,
    phase: Phase,
}

/// Validates and submits one lead form.
pub struct LeadFormController {
    schema: FormSchema,
    /// Fixed payload entries that are not user-editable fields.
    context: Vec<(String, String)>,
    endpoint: Arc<dyn SubmissionEndpoint>,
    notifier: Arc<dyn Notifier>,
    inner: Mutex<Inner>,
    in_flight: AtomicBool,
}

impl LeadFormController {
    /// Open `schema` with every field at its initial value.
    #[must_use]
    pub fn new(
        schema: FormSchema,
        endpoint: Arc<dyn SubmissionEndpoint>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            schema,
            context: Vec::new(),
            endpoint,
            notifier,
            inner: Mutex::new(Inner {
                values: FormState::new(&schema),
                errors: ErrorMap::new(),
                phase: Phase::Editing,
            }),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Open the replication form for a portfolio item.
    #[must_use]
    pub fn replication(
        item: &PortfolioItem,
        endpoint: Arc<dyn SubmissionEndpoint>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self::new(FormSchema::replication(), endpoint, notifier)
            .with_context(item.replication_context())
    }

    /// Add fixed payload entries sent with every submission.
    #[must_use]
    pub fn with_context(mut self, entries: impl IntoIterator<Item = (String, String)>) -> Self {
        self.context.extend(entries);
        self
    }

    #[must_use]
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// Overwrite one field and clear any error recorded for it.
    ///
    /// Unknown field names and edits to a submitted form are ignored.
    pub fn update_field(&self, name: &str, value: impl Into<String>) {
        if self.schema.field(name).is_none() {
            warn!(form = %self.schema.operation(), field = name, "ignoring unknown field");
            return;
        }

        let mut inner = self.lock();
        if inner.phase == Phase::Submitted {
            debug!(field = name, "form already submitted, edit ignored");
            return;
        }
        inner.values.set(name, value);
        inner.errors.clear(name);
    }

    /// Recompute the error map from the current values.
    ///
    /// The stored map is always replaced. Returns `true` if no field has an
    /// error.
    pub fn validate(&self) -> bool {
        let mut inner = self.lock();
        inner.errors = validate(&self.schema, &inner.values);
        inner.errors.is_empty()
    }

    /// Validate and, if valid, send the lead to the endpoint.
    ///
    /// Every outcome except [`SubmitOutcome::Invalid`], [`SubmitOutcome::Busy`]
    /// and [`SubmitOutcome::AlreadySubmitted`] is also reported through the
    /// notifier. The in-flight flag is cleared before this returns, and also
    /// if the returned future is dropped early.
    pub async fn submit(&self) -> SubmitOutcome {
        if self.phase() == Phase::Submitted {
            return SubmitOutcome::AlreadySubmitted;
        }
        if !self.validate() {
            debug!(form = %self.schema.operation(), "validation failed, not submitting");
            return SubmitOutcome::Invalid;
        }
        let Some(_flight) = InFlight::acquire(self) else {
            debug!(form = %self.schema.operation(), "submission already in flight, dropping");
            return SubmitOutcome::Busy;
        };

        // Another caller may have completed between the phase check above
        // and taking the flag.
        let payload = {
            let mut inner = self.lock();
            if inner.phase == Phase::Submitted {
                return SubmitOutcome::AlreadySubmitted;
            }
            inner.phase = Phase::Submitting;
            self.build_payload(&inner.values)
        };

        let operation = self.schema.operation();
        debug!(form = %operation, path = operation.path(), "submitting lead");

        let outcome = match self.endpoint.submit(operation, &payload).await {
            Ok(resp) if resp.is_success() => {
                let message = resp.message_or(operation.success_fallback()).to_owned();
                self.lock().phase = Phase::Submitted;
                info!(form = %operation, "lead accepted");
                SubmitOutcome::Accepted { message }
            }
            Ok(resp) => {
                let message = resp.message_or(operation.failure_fallback()).to_owned();
                self.lock().phase = Phase::Editing;
                warn!(form = %operation, code = resp.code, message = %message, "lead rejected");
                SubmitOutcome::Rejected { message }
            }
            Err(e) => {
                self.lock().phase = Phase::Editing;
                warn!(form = %operation, error = %e, "lead submission did not complete");
                SubmitOutcome::NetworkError
            }
        };
        if let Some(notice) = outcome.notice() {
            self.notifier.notify(&notice);
        }
        outcome
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lock().phase
    }

    /// Whether a request is currently awaiting its response.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn value(&self, name: &str) -> String {
        self.lock().values.get(name).to_owned()
    }

    #[must_use]
    pub fn values(&self) -> FormState {
        self.lock().values.clone()
    }

    #[must_use]
    pub fn errors(&self) -> ErrorMap {
        self.lock().errors.clone()
    }

    /// The request body the current values would produce.
    #[must_use]
    pub fn payload(&self) -> Payload {
        self.build_payload(&self.lock().values)
    }

    /// Rename each field to its payload key. Values are passed through
    /// untouched.
    fn build_payload(&self, values: &FormState) -> Payload {
        let mut payload: Payload = self
            .context
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for field in self.schema.fields() {
            payload.insert(field.payload_key.to_owned(), values.get(field.name).to_owned());
        }
        payload
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for LeadFormController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadFormController")
            .field("operation", &self.schema.operation())
            .field("phase", &self.phase())
            .field("in_flight", &self.is_submitting())
            .finish_non_exhaustive()
    }
}

/// Holds the in-flight flag for the duration of one request.
struct InFlight<'a> {
    controller: &'a LeadFormController,
}

impl<'a> InFlight<'a> {
    fn acquire(controller: &'a LeadFormController) -> Option<Self> {
        controller
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { controller })
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        {
            let mut inner = self.controller.lock();
            if inner.phase == Phase::Submitting {
                inner.phase = Phase::Editing;
            }
        }
        self.controller.in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    use tokio::sync::Notify;

    use super::*;
    use crate::endpoint::ApiResponse;
    use crate::error::EndpointError;
    use crate::portfolio;
    use crate::schema::Operation;

    enum Script {
        Respond(ApiResponse),
        Fail,
    }

    struct ScriptedEndpoint {
        script: Script,
        calls: AtomicUsize,
        last: Mutex<Option<(Operation, Payload)>>,
    }

    impl ScriptedEndpoint {
        fn new(script: Script) -> Arc<Self> {
            Arc::new(Self {
                script,
                calls: AtomicUsize::new(0),
                last: Mutex::new(None),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_payload(&self) -> Payload {
            self.last.lock().unwrap().clone().unwrap().1
        }
    }

    #[async_trait::async_trait]
    impl SubmissionEndpoint for ScriptedEndpoint {
        async fn submit(
            &self,
            operation: Operation,
            payload: &Payload,
        ) -> Result<ApiResponse, EndpointError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some((operation, payload.clone()));
            match &self.script {
                Script::Respond(resp) => Ok(resp.clone()),
                Script::Fail => Err(EndpointError::Transport {
                    reason: "connection refused".to_owned(),
                }),
            }
        }
    }

    /// Holds every request until `release` is notified.
    struct GatedEndpoint {
        calls: AtomicUsize,
        entered: Notify,
        release: Notify,
    }

    #[async_trait::async_trait]
    impl SubmissionEndpoint for GatedEndpoint {
        async fn submit(&self, _: Operation, _: &Payload) -> Result<ApiResponse, EndpointError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.entered.notify_one();
            self.release.notified().await;
            Ok(ApiResponse::accepted("ok"))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: Mutex<Vec<Notice>>,
    }

    impl RecordingNotifier {
        fn notices(&self) -> Vec<Notice> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.notices.lock().unwrap().push(Notice::Success(message.to_owned()));
        }

        fn failure(&self, message: &str) {
            self.notices.lock().unwrap().push(Notice::Failure(message.to_owned()));
        }
    }

    fn quote_controller(
        endpoint: Arc<dyn SubmissionEndpoint>,
    ) -> (LeadFormController, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let controller = LeadFormController::new(FormSchema::quote(), endpoint, notifier.clone());
        (controller, notifier)
    }

    fn fill_quote(controller: &LeadFormController) {
        controller.update_field("name", "Ada Lovelace");
        controller.update_field("email", "ada@example.com");
        controller.update_field("mobile", "+1 234-567-8901");
        controller.update_field("pages", "4-6");
        controller.update_field("budget", "500-1000");
        controller.update_field("details", "A portfolio site with a blog.");
    }

    #[test]
    fn starts_editing_with_no_errors() {
        let (controller, _) =
            quote_controller(ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("ok"))));
        assert_eq!(controller.phase(), Phase::Editing);
        assert!(controller.errors().is_empty());
        assert!(!controller.is_submitting());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let (controller, _) =
            quote_controller(ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("ok"))));
        assert!(!controller.validate());
        let before = controller.errors();
        assert!(before.contains("name") && before.contains("email"));

        // Still invalid, but cleared optimistically until the next pass.
        controller.update_field("email", "not-an-email");

        let after = controller.errors();
        assert!(!after.contains("email"));
        assert_eq!(after.len(), before.len() - 1);
        assert_eq!(after.get("name"), before.get("name"));
    }

    #[test]
    fn validate_replaces_the_error_map() {
        let (controller, _) =
            quote_controller(ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("ok"))));
        controller.update_field("name", "Ada");
        assert!(!controller.validate());
        assert!(!controller.errors().contains("name"));

        fill_quote(&controller);
        controller.update_field("mobile", "12");
        assert!(!controller.validate());
        let errors = controller.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains("mobile"));

        controller.update_field("mobile", "0123456789");
        assert!(controller.validate());
        assert!(controller.errors().is_empty());
    }

    #[test]
    fn unknown_field_is_ignored() {
        let (controller, _) =
            quote_controller(ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("ok"))));
        controller.update_field("favourite_colour", "green");
        assert!(!controller.payload().contains_key("favourite_colour"));
        assert_eq!(controller.value("favourite_colour"), "");
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_endpoint() {
        let endpoint = ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("ok")));
        let (controller, notifier) = quote_controller(endpoint.clone());

        assert_eq!(controller.submit().await, SubmitOutcome::Invalid);
        assert_eq!(endpoint.calls(), 0);
        assert_eq!(controller.phase(), Phase::Editing);
        assert!(notifier.notices().is_empty());
        assert!(controller.errors().contains("name"));
    }

    #[tokio::test]
    async fn accepted_lead_moves_to_submitted() {
        let endpoint = ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("ok")));
        let (controller, notifier) = quote_controller(endpoint.clone());
        fill_quote(&controller);

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Accepted { message: "ok".to_owned() });
        assert_eq!(controller.phase(), Phase::Submitted);
        assert_eq!(notifier.notices(), vec![Notice::Success("ok".to_owned())]);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn submitted_form_is_terminal() {
        let endpoint = ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("ok")));
        let (controller, _) = quote_controller(endpoint.clone());
        fill_quote(&controller);
        controller.submit().await;

        controller.update_field("name", "Someone Else");
        assert_eq!(controller.value("name"), "Ada Lovelace");
        assert_eq!(controller.submit().await, SubmitOutcome::AlreadySubmitted);
        assert_eq!(endpoint.calls(), 1);
    }

    #[tokio::test]
    async fn rejected_lead_stays_editable() {
        let endpoint =
            ScriptedEndpoint::new(Script::Respond(ApiResponse::rejected("Budget too low")));
        let (controller, notifier) = quote_controller(endpoint.clone());
        fill_quote(&controller);
        let values_before = controller.values();

        let outcome = controller.submit().await;

        assert_eq!(outcome, SubmitOutcome::Rejected { message: "Budget too low".to_owned() });
        assert_eq!(controller.phase(), Phase::Editing);
        assert_eq!(controller.values(), values_before);
        assert!(controller.errors().is_empty());
        assert_eq!(notifier.notices(), vec![Notice::Failure("Budget too low".to_owned())]);
        assert!(!controller.is_submitting());
    }

    #[tokio::test]
    async fn rejection_without_message_uses_form_fallback() {
        let mut resp = ApiResponse::rejected("");
        resp.message = None;
        let (controller, notifier) = quote_controller(ScriptedEndpoint::new(Script::Respond(resp)));
        fill_quote(&controller);

        controller.submit().await;

        assert_eq!(
            notifier.notices(),
            vec![Notice::Failure("Failed to send quote request.".to_owned())]
        );
    }

    #[tokio::test]
    async fn acceptance_without_message_uses_form_fallback() {
        let mut resp = ApiResponse::accepted("");
        resp.message = None;
        let (controller, notifier) = quote_controller(ScriptedEndpoint::new(Script::Respond(resp)));
        fill_quote(&controller);

        controller.submit().await;

        assert_eq!(notifier.notices(), vec![Notice::Success("Quote request sent!".to_owned())]);
    }

    #[tokio::test]
    async fn status_failure_is_a_rejection_naming_the_status() {
        let endpoint = ScriptedEndpoint::new(Script::Respond(ApiResponse::from_status(500)));
        let (controller, notifier) = quote_controller(endpoint);
        fill_quote(&controller);

        let outcome = controller.submit().await;

        let SubmitOutcome::Rejected { message } = outcome else {
            unreachable!("expected rejection, got {outcome:?}");
        };
        assert!(message.contains("500"));
        assert_eq!(controller.phase(), Phase::Editing);
        assert!(matches!(&notifier.notices()[..], [Notice::Failure(m)] if m.contains("500")));
    }

    #[tokio::test]
    async fn transport_failure_reports_generic_message() {
        let endpoint = ScriptedEndpoint::new(Script::Fail);
        let (controller, notifier) = quote_controller(endpoint.clone());
        fill_quote(&controller);

        assert_eq!(controller.submit().await, SubmitOutcome::NetworkError);
        assert_eq!(controller.phase(), Phase::Editing);
        assert_eq!(notifier.notices(), vec![Notice::Failure(NETWORK_ERROR_MESSAGE.to_owned())]);
        assert!(!controller.is_submitting());

        // The flag was released, so a manual retry goes out.
        assert_eq!(controller.submit().await, SubmitOutcome::NetworkError);
        assert_eq!(endpoint.calls(), 2);
    }

    #[tokio::test]
    async fn second_submit_while_in_flight_is_dropped() {
        let endpoint = Arc::new(GatedEndpoint {
            calls: AtomicUsize::new(0),
            entered: Notify::new(),
            release: Notify::new(),
        });
        let (controller, notifier) = quote_controller(endpoint.clone());
        fill_quote(&controller);

        let (first, second) = tokio::join!(controller.submit(), async {
            endpoint.entered.notified().await;
            assert!(controller.is_submitting());
            assert_eq!(controller.phase(), Phase::Submitting);
            let second = controller.submit().await;
            endpoint.release.notify_one();
            second
        });

        assert_eq!(first, SubmitOutcome::Accepted { message: "ok".to_owned() });
        assert_eq!(second, SubmitOutcome::Busy);
        assert_eq!(endpoint.calls.load(Ordering::SeqCst), 1);
        assert_eq!(notifier.notices().len(), 1);
    }

    #[tokio::test]
    async fn abandoned_submission_releases_the_flag() {
        let endpoint = Arc::new(GatedEndpoint {
            calls: AtomicUsize::new(0),
            entered: Notify::new(),
            release: Notify::new(),
        });
        let (controller, notifier) = quote_controller(endpoint.clone());
        fill_quote(&controller);

        let timed_out = tokio::time::timeout(Duration::from_millis(20), controller.submit()).await;

        assert!(timed_out.is_err());
        assert!(!controller.is_submitting());
        assert_eq!(controller.phase(), Phase::Editing);
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_submits_send_exactly_one_lead() {
        for _ in 0..200 {
            let endpoint = ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("ok")));
            let (controller, notifier) = quote_controller(endpoint.clone());
            fill_quote(&controller);
            let controller = Arc::new(controller);

            let tasks: Vec<_> = (0..8)
                .map(|_| {
                    let controller = Arc::clone(&controller);
                    tokio::spawn(async move {
                        let mut accepted = 0;
                        for _ in 0..25 {
                            if matches!(controller.submit().await, SubmitOutcome::Accepted { .. }) {
                                accepted += 1;
                            }
                        }
                        accepted
                    })
                })
                .collect();

            let mut accepted = 0;
            for task in tasks {
                accepted += task.await.unwrap();
            }

            assert_eq!(endpoint.calls(), 1);
            assert_eq!(accepted, 1);
            assert_eq!(notifier.notices(), vec![Notice::Success("ok".to_owned())]);
            assert_eq!(controller.phase(), Phase::Submitted);
            assert!(!controller.is_submitting());
        }
    }

    #[test]
    fn only_endpoint_outcomes_carry_a_notice() {
        let accepted = SubmitOutcome::Accepted { message: "sent".to_owned() };
        let rejected = SubmitOutcome::Rejected { message: "no".to_owned() };
        assert_eq!(accepted.notice(), Some(Notice::Success("sent".to_owned())));
        assert_eq!(rejected.notice(), Some(Notice::Failure("no".to_owned())));
        assert_eq!(
            SubmitOutcome::NetworkError.notice(),
            Some(Notice::Failure(NETWORK_ERROR_MESSAGE.to_owned()))
        );
        for quiet in [
            SubmitOutcome::Invalid,
            SubmitOutcome::Busy,
            SubmitOutcome::AlreadySubmitted,
        ] {
            assert_eq!(quiet.notice(), None);
        }
    }

    #[tokio::test]
    async fn quote_payload_renames_fields() {
        let endpoint = ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("ok")));
        let (controller, _) = quote_controller(endpoint.clone());
        fill_quote(&controller);
        controller.submit().await;

        let payload = endpoint.last_payload();
        let keys: Vec<_> = payload.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "budgetRange",
                "email",
                "fullName",
                "mobileNumber",
                "numberOfPages",
                "projectDescription"
            ]
        );
        assert_eq!(payload["fullName"], "Ada Lovelace");
        assert_eq!(payload["mobileNumber"], "+1 234-567-8901");
        assert_eq!(payload["budgetRange"], "500-1000");
    }

    #[tokio::test]
    async fn payload_values_are_not_trimmed() {
        let endpoint = ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("ok")));
        let (controller, _) = quote_controller(endpoint.clone());
        fill_quote(&controller);
        controller.update_field("name", "  Ada  ");
        controller.submit().await;

        assert_eq!(endpoint.last_payload()["fullName"], "  Ada  ");
    }

    #[tokio::test]
    async fn contact_form_sends_default_service() {
        let endpoint = ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("sent")));
        let notifier = Arc::new(RecordingNotifier::default());
        let controller = LeadFormController::new(FormSchema::contact(), endpoint.clone(), notifier);
        controller.update_field("name", "Grace Hopper");
        controller.update_field("email", "grace@example.com");
        controller.update_field("mobile", "0123456789");
        controller.update_field("inquiry", "I need a new landing page.");

        controller.submit().await;

        let (operation, payload) = endpoint.last.lock().unwrap().clone().unwrap();
        assert_eq!(operation, Operation::Contact);
        assert_eq!(payload["serviceOfInterest"], "launchpad");
        assert_eq!(payload["projectDescription"], "I need a new landing page.");
    }

    #[tokio::test]
    async fn replication_payload_carries_project_context() {
        let endpoint = ScriptedEndpoint::new(Script::Respond(ApiResponse::accepted("ok")));
        let notifier = Arc::new(RecordingNotifier::default());
        let item = portfolio::find(2).unwrap();
        let controller = LeadFormController::replication(item, endpoint.clone(), notifier);
        controller.update_field("name", "Grace Hopper");
        controller.update_field("email", "grace@example.com");
        controller.update_field("mobile", "0123456789");

        assert_eq!(controller.submit().await, SubmitOutcome::Accepted { message: "ok".to_owned() });

        let payload = endpoint.last_payload();
        assert_eq!(payload["projectName"], "Apex Legal Advisors");
        assert_eq!(payload["estimatedPrice"], "$900 - $1500");
        assert_eq!(payload["additionalNotes"], "");
    }
}
