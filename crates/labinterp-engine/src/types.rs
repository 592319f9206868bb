//! Engine-specific error types.

use thiserror::Error;

/// Errors that can occur during result interpretation.
///
/// The engine has a single failure mode: a test with no reference
/// ranges configured. Every other code path is total over its input
/// domain — boundary values classify as normal and unrecognized test
/// identities fall back to generic text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No candidate reference range exists for the test.
    ///
    /// This signals a configuration problem in the upstream reference
    /// data, not a recoverable runtime condition; callers should surface
    /// it as an actionable message rather than defaulting to an
    /// arbitrary range.
    #[error("no reference range available for interpretation")]
    NoRangeAvailable,
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
