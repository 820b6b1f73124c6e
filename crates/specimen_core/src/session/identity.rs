//! Session display label.
//!
//! # Invariants
//! - Format is `User-NNN` with `NNN` uniformly drawn from `[100, 999]`.
//! - Drawn once at session start; there is no setter.

use rand::Rng;
use std::fmt::{Display, Formatter};

const IDENTITY_PREFIX: &str = "User-";
const IDENTITY_MIN: u16 = 100;
const IDENTITY_MAX: u16 = 999;

/// Read-only label shown next to the entry count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionIdentity(String);

impl SessionIdentity {
    /// Draws a label with the thread-local generator.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Draws a label from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let number = rng.gen_range(IDENTITY_MIN..=IDENTITY_MAX);
        Self(format!("{IDENTITY_PREFIX}{number}"))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for SessionIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}
