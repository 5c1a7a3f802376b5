//! # composite_core - Composite Micromechanics Calculation Engine
//!
//! `composite_core` is the computational heart of Plyforge, turning named
//! fiber and matrix constituents with volume fractions into homogenized
//! orthotropic ply properties via the generalized rule of mixtures. All
//! inputs and outputs are JSON-serializable, making it ideal for
//! integration with AI assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless core**: Pure functions that take input and return results
//! - **Explicit ownership**: All mutable state lives in a [`session::Session`]
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use composite_core::calculations::HomogenizationInput;
//! use composite_core::constituents::ConstituentProperties;
//! use composite_core::fractions::VolumeFractions;
//! use composite_core::session::Session;
//!
//! let mut session = Session::new("Jane Engineer");
//! session
//!     .add_fiber(ConstituentProperties::new("Carbon", 230.0, 0.2, 90.0, 1.8))
//!     .unwrap();
//! session
//!     .add_matrix(ConstituentProperties::new("Epoxy", 3.5, 0.35, 1.3, 1.2))
//!     .unwrap();
//!
//! let input = HomogenizationInput {
//!     name: "Carbon/Epoxy".to_string(),
//!     fiber_fractions: VolumeFractions::new().with_fraction("Carbon", 0.6),
//!     matrix_fractions: VolumeFractions::new().with_fraction("Epoxy", 0.4),
//! };
//!
//! let ply = session.define_composite(&input).unwrap();
//! println!("E1 = {:.2} GPa, density = {:.2} g/cm3", ply.e1_gpa, ply.density_g_cm3);
//! ```
//!
//! ## Modules
//!
//! - [`constituents`] - Fiber/matrix property records and the registry
//! - [`fractions`] - Volume-fraction assignments and admissibility checks
//! - [`calculations`] - Rule-of-mixtures homogenization
//! - [`equations`] - Per-property formula and mixture-rule metadata
//! - [`session`] - Session container and composite definitions store
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod constituents;
pub mod equations;
pub mod errors;
pub mod fractions;
pub mod session;

// Re-export commonly used types at crate root for convenience
pub use calculations::{CompositeMaterial, HomogenizationInput};
pub use constituents::{ConstituentProperties, ConstituentRegistry};
pub use errors::{ValidationError, ValidationResult};
pub use fractions::VolumeFractions;
pub use session::Session;
