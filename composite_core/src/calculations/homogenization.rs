//! # Ply Homogenization
//!
//! Computes effective orthotropic ply properties from fiber and matrix
//! constituents using the generalized (multi-constituent) rule of mixtures.
//! Every selected fiber and matrix is treated symmetrically as a constituent
//! with a volume fraction.
//!
//! ## Assumptions
//!
//! - Unidirectional lamina; direction 1 along the fibers, 2 transverse
//! - Linear elastic constituents, perfect bonding
//! - Stiffness-dominated properties (E1, nu12, rho) follow the linear
//!   (Voigt, iso-strain) rule; compliance-dominated ones (E2, G12) follow
//!   the harmonic (Reuss, iso-stress) rule; nu21 follows from orthotropic
//!   reciprocity
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use composite_core::calculations::homogenization::{calculate, HomogenizationInput};
//! use composite_core::constituents::{ConstituentProperties, ConstituentRegistry};
//! use composite_core::fractions::VolumeFractions;
//!
//! let mut registry = ConstituentRegistry::new();
//! registry
//!     .add_fiber(ConstituentProperties::new("Carbon", 230.0, 0.2, 90.0, 1.8))
//!     .unwrap();
//! registry
//!     .add_matrix(ConstituentProperties::new("Epoxy", 3.5, 0.35, 1.3, 1.2))
//!     .unwrap();
//!
//! let input = HomogenizationInput {
//!     name: "Carbon/Epoxy".to_string(),
//!     fiber_fractions: VolumeFractions::new().with_fraction("Carbon", 0.6),
//!     matrix_fractions: VolumeFractions::new().with_fraction("Epoxy", 0.4),
//! };
//!
//! let ply = calculate(&input, &registry).unwrap();
//! println!("E1 = {:.2} GPa", ply.e1_gpa);
//! println!("nu21 = {:.4}", ply.nu21);
//! ```

use serde::{Deserialize, Serialize};

use crate::constituents::{ConstituentProperties, ConstituentRegistry};
use crate::equations::PlyProperty;
use crate::errors::{ValidationError, ValidationResult};
use crate::fractions::{self, VolumeFractions};

/// Input parameters for a ply homogenization.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Carbon/Epoxy",
///   "fiber_fractions": { "Carbon": 0.6 },
///   "matrix_fractions": { "Epoxy": 0.4 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomogenizationInput {
    /// Name for the resulting composite (e.g., "Carbon/Epoxy")
    pub name: String,

    /// Volume fraction per selected fiber
    pub fiber_fractions: VolumeFractions,

    /// Volume fraction per selected matrix
    pub matrix_fractions: VolumeFractions,
}

impl HomogenizationInput {
    /// Validate the composite name and the volume-fraction assignment.
    pub fn validate(&self, registry: &ConstituentRegistry) -> ValidationResult<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_name("composite"));
        }
        fractions::validate(&self.fiber_fractions, &self.matrix_fractions, registry)
    }
}

/// Homogenized orthotropic ply properties.
///
/// The constituent selections that produced the record are retained for
/// traceability. Values are a snapshot taken at computation time: if a
/// constituent is later overwritten in the registry, this record does not
/// change; recompute under the same name to refresh it.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Carbon/Epoxy",
///   "e1_gpa": 139.4,
///   "e2_gpa": 8.55,
///   "g12_gpa": 3.18,
///   "nu12": 0.26,
///   "nu21": 0.0159,
///   "density_g_cm3": 1.56,
///   "fiber_constituents": { "Carbon": 0.6 },
///   "matrix_constituents": { "Epoxy": 0.4 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeMaterial {
    /// Composite name, unique within the definitions store
    pub name: String,

    /// Longitudinal modulus E1 (GPa)
    pub e1_gpa: f64,

    /// Transverse modulus E2 (GPa)
    pub e2_gpa: f64,

    /// In-plane shear modulus G12 (GPa)
    pub g12_gpa: f64,

    /// Major Poisson's ratio ν12
    pub nu12: f64,

    /// Minor Poisson's ratio ν21 = ν12·E2/E1
    pub nu21: f64,

    /// Homogenized density (g/cm³)
    pub density_g_cm3: f64,

    /// Fiber selection this record was derived from
    pub fiber_constituents: VolumeFractions,

    /// Matrix selection this record was derived from
    pub matrix_constituents: VolumeFractions,
}

impl CompositeMaterial {
    /// Value of one homogenized property, for generic table rendering.
    pub fn property(&self, property: PlyProperty) -> f64 {
        match property {
            PlyProperty::LongitudinalModulus => self.e1_gpa,
            PlyProperty::TransverseModulus => self.e2_gpa,
            PlyProperty::InPlaneShearModulus => self.g12_gpa,
            PlyProperty::MajorPoissonsRatio => self.nu12,
            PlyProperty::MinorPoissonsRatio => self.nu21,
            PlyProperty::Density => self.density_g_cm3,
        }
    }
}

/// Running sums for the generalized rule of mixtures.
#[derive(Debug, Default)]
struct MixtureSums {
    e1_gpa: f64,
    inv_e2: f64,
    inv_g12: f64,
    nu12: f64,
    density_g_cm3: f64,
}

impl MixtureSums {
    /// Fold one constituent in. A zero fraction contributes zero to every
    /// sum; there is no special-casing.
    fn accumulate(&mut self, props: &ConstituentProperties, fraction: f64) {
        self.e1_gpa += props.youngs_modulus_gpa * fraction;
        self.inv_e2 += fraction / props.youngs_modulus_gpa;
        self.inv_g12 += fraction / props.shear_modulus_gpa;
        self.nu12 += props.poissons_ratio * fraction;
        self.density_g_cm3 += props.density_g_cm3 * fraction;
    }
}

/// Compute homogenized ply properties for the given constituent selection.
///
/// This is a pure function: on failure nothing is produced and no store is
/// touched. Constituents are folded in registry insertion order (fibers,
/// then matrices) so the floating-point result is reproducible for a given
/// registry state.
///
/// # Errors
///
/// * [`ValidationError::EmptyName`] - composite name is blank
/// * any validator failure (unknown constituent, fraction out of range,
///   fraction sum mismatch)
/// * [`ValidationError::DegenerateInput`] - a harmonic denominator came out
///   zero, which the sum check excludes for physical inputs
pub fn calculate(
    input: &HomogenizationInput,
    registry: &ConstituentRegistry,
) -> ValidationResult<CompositeMaterial> {
    input.validate(registry)?;

    let mut sums = MixtureSums::default();
    for props in registry.fibers() {
        if let Some(fraction) = input.fiber_fractions.get(&props.name) {
            sums.accumulate(props, fraction);
        }
    }
    for props in registry.matrices() {
        if let Some(fraction) = input.matrix_fractions.get(&props.name) {
            sums.accumulate(props, fraction);
        }
    }

    if sums.inv_e2 == 0.0 || sums.inv_g12 == 0.0 {
        return Err(ValidationError::degenerate_input(
            "harmonic denominator is zero; total selected volume is zero",
        ));
    }

    let e1_gpa = sums.e1_gpa;
    let e2_gpa = 1.0 / sums.inv_e2;
    let g12_gpa = 1.0 / sums.inv_g12;
    let nu12 = sums.nu12;
    let nu21 = nu12 * e2_gpa / e1_gpa;

    Ok(CompositeMaterial {
        name: input.name.clone(),
        e1_gpa,
        e2_gpa,
        g12_gpa,
        nu12,
        nu21,
        density_g_cm3: sums.density_g_cm3,
        fiber_constituents: input.fiber_fractions.clone(),
        matrix_constituents: input.matrix_fractions.clone(),
    })
}
