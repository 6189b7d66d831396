//! Error types.

use thiserror::Error;

/// Failure reported by an expression evaluator for a single sample.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The expression references a name with no binding.
    #[error("undefined identifier '{0}'")]
    UndefinedIdent(String),
    /// The expression could not be parsed.
    #[error("malformed expression: {0}")]
    Malformed(String),
    /// Evaluation produced NaN or an infinity.
    #[error("result is not a finite number: {0}")]
    NonFinite(f64),
    /// Any other evaluator-specific failure.
    #[error("{0}")]
    Other(String),
}

/// Invalid sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// The step between samples must be finite and positive.
    #[error("sample step must be finite and positive, got {0}")]
    InvalidStep(f64),
    /// The sweep would produce more samples than the configured limit.
    #[error("sweep over +/-{half_width} with step {step} exceeds {max} samples")]
    TooManySamples {
        /// Requested half-width.
        half_width: u32,
        /// Requested step.
        step: f64,
        /// Largest allowed number of sample intervals.
        max: u64,
    },
    /// The density divisor must be non-zero.
    #[error("sample density must be non-zero")]
    ZeroDensity,
}
