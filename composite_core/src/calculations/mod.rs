//! # Micromechanics Calculations
//!
//! Calculation modules follow a common pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - a result type (JSON-serializable)
//! - `calculate(input, registry) -> Result<_, ValidationError>` - Pure function
//!
//! ## Available Calculations
//!
//! - [`homogenization`] - Generalized rule-of-mixtures ply homogenization

pub mod homogenization;

pub use homogenization::{calculate, CompositeMaterial, HomogenizationInput};
