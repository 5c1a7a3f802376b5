//! # Volume Fractions
//!
//! Name → volume-fraction assignments and the admissibility checks that run
//! before any homogenization. A computation takes two assignments, one over
//! fibers and one over matrices; the combined total must equal 1.0 within
//! [`SUM_TOLERANCE`].
//!
//! ## Example
//!
//! ```rust
//! use composite_core::constituents::{ConstituentProperties, ConstituentRegistry};
//! use composite_core::fractions::{validate, VolumeFractions};
//!
//! let mut registry = ConstituentRegistry::new();
//! registry
//!     .add_fiber(ConstituentProperties::new("Carbon", 230.0, 0.2, 90.0, 1.8))
//!     .unwrap();
//! registry
//!     .add_matrix(ConstituentProperties::new("Epoxy", 3.5, 0.35, 1.3, 1.2))
//!     .unwrap();
//!
//! let fibers = VolumeFractions::new().with_fraction("Carbon", 0.6);
//! let matrices = VolumeFractions::new().with_fraction("Epoxy", 0.4);
//!
//! assert!(validate(&fibers, &matrices, &registry).is_ok());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constituents::{ConstituentKind, ConstituentRegistry};
use crate::errors::{ValidationError, ValidationResult};

/// Absolute tolerance on the combined fiber+matrix volume-fraction total.
pub const SUM_TOLERANCE: f64 = 0.01;

/// A mapping from constituent name to volume fraction in [0, 1].
///
/// Entries are kept in name order so serialization and tabular display are
/// deterministic. Zero-valued entries are legal; they contribute nothing to
/// the homogenized result but are retained for traceability.
///
/// ## JSON Example
///
/// ```json
/// { "Carbon": 0.55, "Glass": 0.05 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VolumeFractions {
    fractions: BTreeMap<String, f64>,
}

impl VolumeFractions {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert for constructing assignments inline.
    pub fn with_fraction(mut self, name: impl Into<String>, fraction: f64) -> Self {
        self.set(name, fraction);
        self
    }

    /// Insert or replace the fraction for `name`.
    pub fn set(&mut self, name: impl Into<String>, fraction: f64) {
        self.fractions.insert(name.into(), fraction);
    }

    /// Fraction assigned to `name`, if any.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.fractions.get(name).copied()
    }

    /// All entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fractions.iter().map(|(name, vf)| (name.as_str(), *vf))
    }

    /// Entries with a strictly positive fraction, for composition displays.
    pub fn positive(&self) -> impl Iterator<Item = (&str, f64)> {
        self.iter().filter(|(_, vf)| *vf > 0.0)
    }

    /// Sum of all fractions in this assignment.
    pub fn total(&self) -> f64 {
        self.fractions.values().sum()
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }
}

/// Check that a fiber+matrix volume-fraction assignment is physically
/// admissible against the given registry.
///
/// Fails with:
/// - [`ValidationError::UnknownConstituent`] if a name is absent from the
///   corresponding registry namespace,
/// - [`ValidationError::FractionOutOfRange`] if an individual fraction is
///   outside [0, 1] (defensive; entry widgets already clamp),
/// - [`ValidationError::FractionSumMismatch`] if the combined total deviates
///   from 1.0 by more than [`SUM_TOLERANCE`] (the error carries the actual
///   total for display).
///
/// On success the assignment is accepted as-is.
pub fn validate(
    fibers: &VolumeFractions,
    matrices: &VolumeFractions,
    registry: &ConstituentRegistry,
) -> ValidationResult<()> {
    validate_entries(ConstituentKind::Fiber, fibers, registry)?;
    validate_entries(ConstituentKind::Matrix, matrices, registry)?;

    let total = fibers.total() + matrices.total();
    if (total - 1.0).abs() > SUM_TOLERANCE {
        return Err(ValidationError::fraction_sum_mismatch(total));
    }
    Ok(())
}

fn validate_entries(
    kind: ConstituentKind,
    assignment: &VolumeFractions,
    registry: &ConstituentRegistry,
) -> ValidationResult<()> {
    for (name, fraction) in assignment.iter() {
        if registry.constituent(kind, name).is_none() {
            return Err(ValidationError::unknown_constituent(
                kind.display_name(),
                name,
            ));
        }
        if !(0.0..=1.0).contains(&fraction) {
            return Err(ValidationError::fraction_out_of_range(name, fraction));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constituents::ConstituentProperties;

    fn test_registry() -> ConstituentRegistry {
        let mut registry = ConstituentRegistry::new();
        registry
            .add_fiber(ConstituentProperties::new("Carbon", 230.0, 0.2, 90.0, 1.8))
            .unwrap();
        registry
            .add_fiber(ConstituentProperties::new("Glass", 72.0, 0.22, 30.0, 2.54))
            .unwrap();
        registry
            .add_matrix(ConstituentProperties::new("Epoxy", 3.5, 0.35, 1.3, 1.2))
            .unwrap();
        registry
    }

    #[test]
    fn test_valid_assignment() {
        let registry = test_registry();
        let fibers = VolumeFractions::new().with_fraction("Carbon", 0.6);
        let matrices = VolumeFractions::new().with_fraction("Epoxy", 0.4);
        assert!(validate(&fibers, &matrices, &registry).is_ok());
    }

    #[test]
    fn test_zero_entries_permitted() {
        let registry = test_registry();
        let fibers = VolumeFractions::new()
            .with_fraction("Carbon", 0.6)
            .with_fraction("Glass", 0.0);
        let matrices = VolumeFractions::new().with_fraction("Epoxy", 0.4);
        assert!(validate(&fibers, &matrices, &registry).is_ok());
    }

    #[test]
    fn test_unknown_fiber_rejected() {
        let registry = test_registry();
        let fibers = VolumeFractions::new().with_fraction("Kevlar", 0.6);
        let matrices = VolumeFractions::new().with_fraction("Epoxy", 0.4);

        let error = validate(&fibers, &matrices, &registry).unwrap_err();
        assert_eq!(error.error_code(), "UNKNOWN_CONSTITUENT");
        assert!(error.to_string().contains("Kevlar"));
    }

    #[test]
    fn test_fiber_name_not_found_in_matrix_namespace() {
        let registry = test_registry();
        // "Carbon" exists only as a fiber; referencing it as a matrix fails
        let fibers = VolumeFractions::new().with_fraction("Glass", 0.6);
        let matrices = VolumeFractions::new().with_fraction("Carbon", 0.4);
        let error = validate(&fibers, &matrices, &registry).unwrap_err();
        assert_eq!(error.error_code(), "UNKNOWN_CONSTITUENT");
    }

    #[test]
    fn test_fraction_out_of_range() {
        let registry = test_registry();
        let fibers = VolumeFractions::new().with_fraction("Carbon", 1.2);
        let matrices = VolumeFractions::new().with_fraction("Epoxy", -0.2);
        let error = validate(&fibers, &matrices, &registry).unwrap_err();
        assert_eq!(error.error_code(), "FRACTION_OUT_OF_RANGE");
    }

    #[test]
    fn test_sum_tolerance_boundaries() {
        let registry = test_registry();
        let matrices = |vf: f64| VolumeFractions::new().with_fraction("Epoxy", vf);
        let fibers = |vf: f64| VolumeFractions::new().with_fraction("Carbon", vf);

        // 0.991 and 1.009 are within 0.01 of 1.0
        assert!(validate(&fibers(0.591), &matrices(0.4), &registry).is_ok());
        assert!(validate(&fibers(0.609), &matrices(0.4), &registry).is_ok());

        // 0.98 and 1.02 are not
        let low = validate(&fibers(0.58), &matrices(0.4), &registry).unwrap_err();
        match low {
            ValidationError::FractionSumMismatch { total } => {
                assert!((total - 0.98).abs() < 1e-12)
            }
            other => panic!("expected FractionSumMismatch, got {:?}", other),
        }
        let high = validate(&fibers(0.62), &matrices(0.4), &registry).unwrap_err();
        assert_eq!(high.error_code(), "FRACTION_SUM_MISMATCH");
    }

    #[test]
    fn test_total_and_positive_view() {
        let fractions = VolumeFractions::new()
            .with_fraction("Carbon", 0.55)
            .with_fraction("Glass", 0.0)
            .with_fraction("Aramid", 0.05);

        assert!((fractions.total() - 0.6).abs() < 1e-12);
        assert_eq!(fractions.len(), 3);

        let positive: Vec<&str> = fractions.positive().map(|(name, _)| name).collect();
        assert_eq!(positive, vec!["Aramid", "Carbon"]);
    }

    #[test]
    fn test_set_replaces() {
        let mut fractions = VolumeFractions::new().with_fraction("Carbon", 0.5);
        fractions.set("Carbon", 0.6);
        assert_eq!(fractions.get("Carbon"), Some(0.6));
        assert_eq!(fractions.len(), 1);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let fractions = VolumeFractions::new()
            .with_fraction("Carbon", 0.6)
            .with_fraction("Glass", 0.0);

        let json = serde_json::to_string(&fractions).unwrap();
        assert_eq!(json, r#"{"Carbon":0.6,"Glass":0.0}"#);

        let roundtrip: VolumeFractions = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, fractions);
    }
}
