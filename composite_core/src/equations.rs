//! # Mixture Rule Reference
//!
//! Metadata for the homogenized ply properties: which averaging rule each
//! one uses and the plain-text formula behind it. Front-ends use this to
//! render results tables with the producing formula next to each value,
//! keeping the engine auditable without duplicating strings per UI.
//!
//! ## Usage
//!
//! ```rust
//! use composite_core::equations::PlyProperty;
//!
//! for property in PlyProperty::ALL {
//!     let meta = property.metadata();
//!     println!("{} ({}) = {}", meta.name, meta.symbol, meta.formula_plain);
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Averaging scheme behind a homogenized property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MixtureRule {
    /// Linear (iso-strain) rule: the property is volume-additive
    Voigt,
    /// Harmonic (iso-stress) rule: the property's compliance is volume-additive
    Reuss,
    /// Derived from the orthotropic reciprocity relation ν12/E1 = ν21/E2
    Reciprocity,
}

impl MixtureRule {
    /// Display name for results tables
    pub fn display_name(&self) -> &'static str {
        match self {
            MixtureRule::Voigt => "Linear (Voigt)",
            MixtureRule::Reuss => "Harmonic (Reuss)",
            MixtureRule::Reciprocity => "Reciprocity",
        }
    }
}

/// The six homogenized orthotropic ply properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlyProperty {
    /// E1, stiffness along the fiber direction
    LongitudinalModulus,
    /// E2, stiffness across the fiber direction
    TransverseModulus,
    /// G12, in-plane shear stiffness
    InPlaneShearModulus,
    /// ν12, strain coupling from direction 1 into 2
    MajorPoissonsRatio,
    /// ν21, strain coupling from direction 2 into 1
    MinorPoissonsRatio,
    /// ρ, homogenized mass density
    Density,
}

/// Metadata describing one ply property and the formula that produces it.
#[derive(Debug, Clone)]
pub struct PropertyMetadata {
    /// Human-readable name (e.g., "Longitudinal Modulus")
    pub name: &'static str,
    /// Conventional symbol (e.g., "E1")
    pub symbol: &'static str,
    /// Units, or "-" for dimensionless
    pub units: &'static str,
    /// The generalized rule-of-mixtures formula in plain text
    pub formula_plain: &'static str,
    /// Which averaging scheme the formula embodies
    pub rule: MixtureRule,
    /// One-line physical rationale
    pub description: &'static str,
}

impl PlyProperty {
    /// All properties in conventional reporting order
    pub const ALL: [PlyProperty; 6] = [
        PlyProperty::LongitudinalModulus,
        PlyProperty::TransverseModulus,
        PlyProperty::InPlaneShearModulus,
        PlyProperty::MajorPoissonsRatio,
        PlyProperty::MinorPoissonsRatio,
        PlyProperty::Density,
    ];

    /// Get the full metadata for this property
    pub fn metadata(&self) -> PropertyMetadata {
        match self {
            PlyProperty::LongitudinalModulus => PropertyMetadata {
                name: "Longitudinal Modulus",
                symbol: "E1",
                units: "GPa",
                formula_plain: "E1 = sum(E_i * V_i)",
                rule: MixtureRule::Voigt,
                description: "Longitudinal stiffness is volume-additive across constituents",
            },
            PlyProperty::TransverseModulus => PropertyMetadata {
                name: "Transverse Modulus",
                symbol: "E2",
                units: "GPa",
                formula_plain: "E2 = 1 / sum(V_i / E_i)",
                rule: MixtureRule::Reuss,
                description: "Transverse compliance, not stiffness, is volume-additive",
            },
            PlyProperty::InPlaneShearModulus => PropertyMetadata {
                name: "In-Plane Shear Modulus",
                symbol: "G12",
                units: "GPa",
                formula_plain: "G12 = 1 / sum(V_i / G_i)",
                rule: MixtureRule::Reuss,
                description: "Shear compliance is volume-additive",
            },
            PlyProperty::MajorPoissonsRatio => PropertyMetadata {
                name: "Major Poisson's Ratio",
                symbol: "nu12",
                units: "-",
                formula_plain: "nu12 = sum(nu_i * V_i)",
                rule: MixtureRule::Voigt,
                description: "Poisson coupling is volume-additive",
            },
            PlyProperty::MinorPoissonsRatio => PropertyMetadata {
                name: "Minor Poisson's Ratio",
                symbol: "nu21",
                units: "-",
                formula_plain: "nu21 = nu12 * E2 / E1",
                rule: MixtureRule::Reciprocity,
                description: "Follows from nu12/E1 = nu21/E2 for an orthotropic lamina",
            },
            PlyProperty::Density => PropertyMetadata {
                name: "Density",
                symbol: "rho",
                units: "g/cm3",
                formula_plain: "rho = sum(rho_i * V_i)",
                rule: MixtureRule::Voigt,
                description: "Mass is volume-additive",
            },
        }
    }
}
