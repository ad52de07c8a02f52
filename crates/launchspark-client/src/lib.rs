//! HTTP submission endpoint for `LaunchSpark` lead forms.
//!
//! [`HttpEndpoint`] implements [`launchspark_core::SubmissionEndpoint`] over
//! a `reqwest` client. Every operation is a JSON `POST` to
//! `{base_url}{operation path}`.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use launchspark_client::{ClientConfig, HttpEndpoint};
//! use launchspark_core::{FnNotifier, FormSchema, LeadFormController};
//!
//! # async fn example() -> Result<(), launchspark_client::ClientError> {
//! let endpoint = HttpEndpoint::new(ClientConfig::from_env())?;
//! let notifier = FnNotifier::new(|_: &str| {}, |_: &str| {});
//! let form = LeadFormController::new(FormSchema::quote(), Arc::new(endpoint), Arc::new(notifier));
//! form.update_field("name", "Ada Lovelace");
//! let _outcome = form.submit().await;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;

pub use client::HttpEndpoint;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::ClientError;
