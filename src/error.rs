//! Shared error plumbing.
//!
//! Every domain error enum implements [`ErrorCode`] so handlers and logs can
//! carry a stable, grepable code next to the human-readable message.

/// Stable machine-readable code for an error value.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}

/// Neutral notice shown when a selection cannot be resolved.
pub const UNAVAILABLE_NOTICE: &str = "That option is unavailable. Please try again.";
