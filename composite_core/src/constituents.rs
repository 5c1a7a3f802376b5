//! # Constituent Database
//!
//! Property records for the raw constituents of a composite ply: fibers
//! (carbon, glass, aramid, ...) and matrices (epoxy, polyester, PEEK, ...).
//! Fiber and matrix names are independent namespaces held by a single
//! [`ConstituentRegistry`].
//!
//! All properties use SI-derived engineering units: moduli in GPa, density
//! in g/cm³, Poisson's ratio dimensionless.
//!
//! ## Example
//!
//! ```rust
//! use composite_core::constituents::{ConstituentProperties, ConstituentRegistry};
//!
//! let mut registry = ConstituentRegistry::new();
//! registry
//!     .add_fiber(ConstituentProperties::new("Carbon", 230.0, 0.2, 90.0, 1.8))
//!     .unwrap();
//!
//! let carbon = registry.fiber("Carbon").unwrap();
//! assert_eq!(carbon.youngs_modulus_gpa, 230.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// Which namespace a constituent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstituentKind {
    /// Reinforcing fiber
    Fiber,
    /// Binding matrix
    Matrix,
}

impl ConstituentKind {
    /// Both kinds, for UI iteration
    pub const ALL: [ConstituentKind; 2] = [ConstituentKind::Fiber, ConstituentKind::Matrix];

    /// Lowercase display name ("fiber" / "matrix")
    pub fn display_name(&self) -> &'static str {
        match self {
            ConstituentKind::Fiber => "fiber",
            ConstituentKind::Matrix => "matrix",
        }
    }
}

impl std::fmt::Display for ConstituentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Elastic and mass properties of a single fiber or matrix constituent.
///
/// The same record shape serves both kinds; the registry keeps them in
/// separate collections.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "Carbon",
///   "youngs_modulus_gpa": 230.0,
///   "poissons_ratio": 0.2,
///   "shear_modulus_gpa": 90.0,
///   "density_g_cm3": 1.8
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstituentProperties {
    /// Unique name within its kind (e.g., "Carbon", "Epoxy")
    pub name: String,

    /// Young's modulus E (GPa), must be positive
    pub youngs_modulus_gpa: f64,

    /// Poisson's ratio ν, must be within [0, 0.5]
    pub poissons_ratio: f64,

    /// Shear modulus G (GPa), must be positive
    pub shear_modulus_gpa: f64,

    /// Density ρ (g/cm³), must be positive
    pub density_g_cm3: f64,
}

impl ConstituentProperties {
    /// Create a new constituent property record.
    pub fn new(
        name: impl Into<String>,
        youngs_modulus_gpa: f64,
        poissons_ratio: f64,
        shear_modulus_gpa: f64,
        density_g_cm3: f64,
    ) -> Self {
        ConstituentProperties {
            name: name.into(),
            youngs_modulus_gpa,
            poissons_ratio,
            shear_modulus_gpa,
            density_g_cm3,
        }
    }

    /// Validate name and numeric bounds.
    ///
    /// Enforced here rather than at the input widgets so the registry stays
    /// consistent regardless of which front-end feeds it.
    pub fn validate(&self, kind: ConstituentKind) -> ValidationResult<()> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_name(kind.display_name()));
        }
        if !(self.youngs_modulus_gpa > 0.0) {
            return Err(ValidationError::out_of_bounds_property(
                "youngs_modulus_gpa",
                self.youngs_modulus_gpa.to_string(),
                "Young's modulus must be positive",
            ));
        }
        if !(self.poissons_ratio >= 0.0 && self.poissons_ratio <= 0.5) {
            return Err(ValidationError::out_of_bounds_property(
                "poissons_ratio",
                self.poissons_ratio.to_string(),
                "Poisson's ratio must be within [0, 0.5]",
            ));
        }
        if !(self.shear_modulus_gpa > 0.0) {
            return Err(ValidationError::out_of_bounds_property(
                "shear_modulus_gpa",
                self.shear_modulus_gpa.to_string(),
                "Shear modulus must be positive",
            ));
        }
        if !(self.density_g_cm3 > 0.0) {
            return Err(ValidationError::out_of_bounds_property(
                "density_g_cm3",
                self.density_g_cm3.to_string(),
                "Density must be positive",
            ));
        }
        Ok(())
    }
}

/// Insertion-ordered store of fiber and matrix property records.
///
/// Created empty at session start; records are only ever added (re-adding a
/// name overwrites the stored values, last-write-wins). Overwrites keep the
/// record's original position so tabular displays stay stable.
///
/// Lookup is linear; registries hold a handful of constituents, not
/// thousands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConstituentRegistry {
    fibers: Vec<ConstituentProperties>,
    matrices: Vec<ConstituentProperties>,
}

impl ConstituentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or overwrite a fiber record.
    ///
    /// Fails with [`ValidationError::EmptyName`] or
    /// [`ValidationError::OutOfBoundsProperty`] without touching the store.
    pub fn add_fiber(&mut self, props: ConstituentProperties) -> ValidationResult<()> {
        props.validate(ConstituentKind::Fiber)?;
        Self::upsert(&mut self.fibers, props);
        Ok(())
    }

    /// Add or overwrite a matrix record. Identical contract to [`Self::add_fiber`].
    pub fn add_matrix(&mut self, props: ConstituentProperties) -> ValidationResult<()> {
        props.validate(ConstituentKind::Matrix)?;
        Self::upsert(&mut self.matrices, props);
        Ok(())
    }

    fn upsert(records: &mut Vec<ConstituentProperties>, props: ConstituentProperties) {
        match records.iter_mut().find(|r| r.name == props.name) {
            Some(existing) => *existing = props,
            None => records.push(props),
        }
    }

    /// All fiber records in insertion order. Empty is a valid result.
    pub fn fibers(&self) -> &[ConstituentProperties] {
        &self.fibers
    }

    /// All matrix records in insertion order. Empty is a valid result.
    pub fn matrices(&self) -> &[ConstituentProperties] {
        &self.matrices
    }

    /// Look up a fiber by name.
    pub fn fiber(&self, name: &str) -> Option<&ConstituentProperties> {
        self.fibers.iter().find(|r| r.name == name)
    }

    /// Look up a matrix by name.
    pub fn matrix(&self, name: &str) -> Option<&ConstituentProperties> {
        self.matrices.iter().find(|r| r.name == name)
    }

    /// Look up a constituent in the namespace selected by `kind`.
    pub fn constituent(&self, kind: ConstituentKind, name: &str) -> Option<&ConstituentProperties> {
        match kind {
            ConstituentKind::Fiber => self.fiber(name),
            ConstituentKind::Matrix => self.matrix(name),
        }
    }

    pub fn fiber_count(&self) -> usize {
        self.fibers.len()
    }

    pub fn matrix_count(&self) -> usize {
        self.matrices.len()
    }

    /// True when neither namespace has any records.
    pub fn is_empty(&self) -> bool {
        self.fibers.is_empty() && self.matrices.is_empty()
    }
}
