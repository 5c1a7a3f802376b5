//! # Error Types
//!
//! Structured error types for composite_core. Every invalid input is reported
//! as a typed, recoverable value with enough context for both humans and
//! LLMs to understand and correct the offending entry. The library never
//! panics on bad input.
//!
//! ## Example
//!
//! ```rust
//! use composite_core::errors::{ValidationError, ValidationResult};
//!
//! fn check_modulus(e_gpa: f64) -> ValidationResult<()> {
//!     if e_gpa <= 0.0 {
//!         return Err(ValidationError::out_of_bounds_property(
//!             "youngs_modulus_gpa",
//!             e_gpa.to_string(),
//!             "Young's modulus must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for composite_core operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Structured error type for registry, validation, and engine operations.
///
/// Each variant provides specific context about what went wrong. All
/// variants are deterministic user-input failures: there is no retry logic
/// and no partial result is ever produced alongside one of these.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ValidationError {
    /// A name field was empty or whitespace-only
    #[error("Name must not be empty for {kind}")]
    EmptyName { kind: String },

    /// A numeric property is outside its physical bounds
    #[error("Out-of-bounds value for '{field}': {value} - {reason}")]
    OutOfBoundsProperty {
        field: String,
        value: String,
        reason: String,
    },

    /// A volume-fraction assignment references a name absent from the registry
    #[error("Unknown {kind}: '{name}' is not in the registry")]
    UnknownConstituent { kind: String, name: String },

    /// An individual volume fraction is outside [0, 1]
    #[error("Volume fraction for '{name}' is {fraction}, outside [0, 1]")]
    FractionOutOfRange { name: String, fraction: f64 },

    /// Combined volume fractions do not sum to 1.0 within tolerance
    #[error("Volume fractions must sum to 1.0 (current: {total:.2})")]
    FractionSumMismatch { total: f64 },

    /// Inputs passed validation but would produce a division fault
    #[error("Degenerate input: {reason}")]
    DegenerateInput { reason: String },
}

impl ValidationError {
    /// Create an EmptyName error
    pub fn empty_name(kind: impl Into<String>) -> Self {
        ValidationError::EmptyName { kind: kind.into() }
    }

    /// Create an OutOfBoundsProperty error
    pub fn out_of_bounds_property(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        ValidationError::OutOfBoundsProperty {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownConstituent error
    pub fn unknown_constituent(kind: impl Into<String>, name: impl Into<String>) -> Self {
        ValidationError::UnknownConstituent {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create a FractionOutOfRange error
    pub fn fraction_out_of_range(name: impl Into<String>, fraction: f64) -> Self {
        ValidationError::FractionOutOfRange {
            name: name.into(),
            fraction,
        }
    }

    /// Create a FractionSumMismatch error carrying the actual total
    pub fn fraction_sum_mismatch(total: f64) -> Self {
        ValidationError::FractionSumMismatch { total }
    }

    /// Create a DegenerateInput error
    pub fn degenerate_input(reason: impl Into<String>) -> Self {
        ValidationError::DegenerateInput {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::EmptyName { .. } => "EMPTY_NAME",
            ValidationError::OutOfBoundsProperty { .. } => "OUT_OF_BOUNDS_PROPERTY",
            ValidationError::UnknownConstituent { .. } => "UNKNOWN_CONSTITUENT",
            ValidationError::FractionOutOfRange { .. } => "FRACTION_OUT_OF_RANGE",
            ValidationError::FractionSumMismatch { .. } => "FRACTION_SUM_MISMATCH",
            ValidationError::DegenerateInput { .. } => "DEGENERATE_INPUT",
        }
    }
}
