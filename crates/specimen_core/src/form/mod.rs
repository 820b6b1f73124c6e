//! Entry form boundary: parse, validate and prefill submissions.
//!
//! # Responsibility
//! - Convert untyped form values into a validated `NewRecord`.
//! - Generate project-name placeholders for a freshly reset form.
//!
//! # Invariants
//! - Nothing in this module touches session state.
//! - Out-of-range values are rejected, never clamped.

pub mod placeholder;
pub mod validator;
