//! Project-name placeholders for a reset entry form.

use rand::Rng;

const PLACEHOLDER_PREFIX: &str = "P-";
const PLACEHOLDER_MIN: u16 = 1000;
const PLACEHOLDER_MAX: u16 = 9999;

/// Draws a fresh `P-NNNN` placeholder with the thread-local generator.
pub fn project_placeholder() -> String {
    project_placeholder_with(&mut rand::thread_rng())
}

/// Draws a fresh `P-NNNN` placeholder from `rng`.
pub fn project_placeholder_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let number = rng.gen_range(PLACEHOLDER_MIN..=PLACEHOLDER_MAX);
    format!("{PLACEHOLDER_PREFIX}{number}")
}
