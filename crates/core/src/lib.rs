//! Davenlist domain logic.
//!
//! Pure, I/O-free building blocks shared by the persistence and HTTP layers:
//!
//! - [`types`] — shared type aliases (`DbId`, `Timestamp`, `DayDate`).
//! - [`error`] — the [`CoreError`](error::CoreError) domain error enum.
//! - [`validation`] — field-level validation (email, name, phone patterns).
//! - [`lifecycle`] — the prayer-request lifecycle policy: name trimming,
//!   paired-category validation, ownership checks, expiry computation.
//! - [`notices`] — admin notification formatting (pure text assembly).
//! - [`parasha`] — the static weekly Torah-reading period registry.
//! - [`digest`] — weekly digest assembly (grouping by category).

pub mod digest;
pub mod error;
pub mod lifecycle;
pub mod notices;
pub mod parasha;
pub mod types;
pub mod validation;
