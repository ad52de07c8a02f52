//! Core library for `LaunchSpark` lead capture.
//!
//! Contains the per-form field tables, the validation rules, the form state
//! and error maps, and the [`LeadFormController`](controller::LeadFormController)
//! that drives the validate-then-submit workflow. The remote API and the
//! user-facing notifications are reached only through the
//! [`SubmissionEndpoint`](endpoint::SubmissionEndpoint) and
//! [`Notifier`](notify::Notifier) traits, so this crate performs no I/O.

pub mod controller;
pub mod endpoint;
pub mod error;
pub mod form;
pub mod notify;
pub mod portfolio;
pub mod schema;
pub mod validate;

pub use controller::{LeadFormController, Phase, SubmitOutcome};
pub use endpoint::{ApiResponse, Payload, SubmissionEndpoint};
pub use error::EndpointError;
pub use form::{ErrorMap, FormState};
pub use notify::{FnNotifier, Notice, Notifier};
pub use schema::{FormSchema, Operation};
