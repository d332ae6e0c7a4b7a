//! Davenlist email delivery.
//!
//! The notifier collaborator of the lifecycle engine:
//!
//! - [`Mailer`] — async SMTP transport via `lettre`, configured from the
//!   environment ([`EmailConfig::from_env`]).
//! - [`weekly`] — plain-text rendering of the assembled weekly digest.
//! - [`EmailError`] — delivery failures, reported to the boundary as a
//!   secondary warning and never rolling back a committed mutation.

pub mod error;
pub mod mailer;
pub mod weekly;

pub use error::EmailError;
pub use mailer::{EmailConfig, Mailer};
