//! # Session Data Structures
//!
//! The `Session` struct is the explicit owner of all per-session state: the
//! constituent registry and the composite definitions derived from it. There
//! is no ambient global state; construction and drop are the session
//! lifecycle.
//!
//! ## Structure
//!
//! ```text
//! Session
//! ├── meta: SessionMetadata (version, analyst, timestamps)
//! ├── registry: ConstituentRegistry (fiber + matrix records)
//! └── composites: CompositeDefinitions (computed ply records by name)
//! ```
//!
//! ## Example
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
//! let ply = session.define_composite(&input).unwrap();
//! assert!(ply.e1_gpa > 100.0);
//! assert_eq!(session.composite_count(), 1);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::homogenization::{self, CompositeMaterial, HomogenizationInput};
use crate::constituents::{ConstituentProperties, ConstituentRegistry};
use crate::errors::ValidationResult;

/// Current schema version for serialized sessions
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Insertion-ordered store of computed composites, keyed by name.
///
/// Populated only on successful computation. Redefining a name replaces the
/// stored record entirely, in place, so listings stay stable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompositeDefinitions {
    entries: Vec<CompositeMaterial>,
}

impl CompositeDefinitions {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a record under its name.
    pub fn insert(&mut self, composite: CompositeMaterial) {
        match self.entries.iter_mut().find(|c| c.name == composite.name) {
            Some(existing) => *existing = composite,
            None => self.entries.push(composite),
        }
    }

    /// Look up a record by name.
    pub fn get(&self, name: &str) -> Option<&CompositeMaterial> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[CompositeMaterial] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Session metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    /// Name of the analyst running the session
    pub analyst: String,

    /// When the session was created
    pub created: DateTime<Utc>,

    /// When the session was last modified
    pub modified: DateTime<Utc>,
}

/// Root container for one analysis session.
///
/// Owns the registry and the definitions store exclusively. Sessions are
/// independent of each other; nothing is shared across them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session metadata (version, analyst, timestamps)
    pub meta: SessionMetadata,

    /// Fiber and matrix property records
    pub registry: ConstituentRegistry,

    /// Composites computed during this session
    pub composites: CompositeDefinitions,
}

impl Session {
    /// Create a new empty session.
    pub fn new(analyst: impl Into<String>) -> Self {
        let now = Utc::now();
        Session {
            meta: SessionMetadata {
                version: SCHEMA_VERSION.to_string(),
                analyst: analyst.into(),
                created: now,
                modified: now,
            },
            registry: ConstituentRegistry::new(),
            composites: CompositeDefinitions::new(),
        }
    }

    /// Add or overwrite a fiber record in the session registry.
    pub fn add_fiber(&mut self, props: ConstituentProperties) -> ValidationResult<()> {
        self.registry.add_fiber(props)?;
        self.touch();
        Ok(())
    }

    /// Add or overwrite a matrix record in the session registry.
    pub fn add_matrix(&mut self, props: ConstituentProperties) -> ValidationResult<()> {
        self.registry.add_matrix(props)?;
        self.touch();
        Ok(())
    }

    /// Compute a composite and store it under its name.
    ///
    /// On any validation failure the definitions store is left untouched
    /// and the error is returned for display. On success the stored record
    /// is returned; recomputing under an existing name replaces the old
    /// record entirely.
    pub fn define_composite(
        &mut self,
        input: &HomogenizationInput,
    ) -> ValidationResult<CompositeMaterial> {
        let composite = homogenization::calculate(input, &self.registry)?;
        self.composites.insert(composite.clone());
        self.touch();
        Ok(composite)
    }

    /// Look up a stored composite by name.
    pub fn composite(&self, name: &str) -> Option<&CompositeMaterial> {
        self.composites.get(name)
    }

    /// Number of stored composites.
    pub fn composite_count(&self) -> usize {
        self.composites.len()
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractions::VolumeFractions;

    fn seeded_session() -> Session {
        let mut session = Session::new("Test Analyst");
        session
            .add_fiber(ConstituentProperties::new("Carbon", 230.0, 0.2, 90.0, 1.8))
            .unwrap();
        session
            .add_matrix(ConstituentProperties::new("Epoxy", 3.5, 0.35, 1.3, 1.2))
            .unwrap();
        session
    }

    fn carbon_epoxy(name: &str, fiber_vf: f64, matrix_vf: f64) -> HomogenizationInput {
        HomogenizationInput {
            name: name.to_string(),
            fiber_fractions: VolumeFractions::new().with_fraction("Carbon", fiber_vf),
            matrix_fractions: VolumeFractions::new().with_fraction("Epoxy", matrix_vf),
        }
    }

    #[test]
    fn test_session_creation() {
        let session = Session::new("Jane Engineer");
        assert_eq!(session.meta.analyst, "Jane Engineer");
        assert_eq!(session.meta.version, SCHEMA_VERSION);
        assert!(session.registry.is_empty());
        assert!(session.composites.is_empty());
    }

    #[test]
    fn test_define_and_lookup() {
        let mut session = seeded_session();
        let ply = session
            .define_composite(&carbon_epoxy("Carbon/Epoxy", 0.6, 0.4))
            .unwrap();

        assert_eq!(session.composite_count(), 1);
        let stored = session.composite("Carbon/Epoxy").unwrap();
        assert_eq!(stored, &ply);
        assert!(session.composite("Glass/Epoxy").is_none());
    }

    #[test]
    fn test_failed_definition_leaves_store_untouched() {
        let mut session = seeded_session();
        session
            .define_composite(&carbon_epoxy("Carbon/Epoxy", 0.6, 0.4))
            .unwrap();

        let mut bad = carbon_epoxy("Boron/Epoxy", 0.6, 0.4);
        bad.fiber_fractions = VolumeFractions::new().with_fraction("Boron", 0.6);
        let error = session.define_composite(&bad).unwrap_err();

        assert_eq!(error.error_code(), "UNKNOWN_CONSTITUENT");
        assert_eq!(session.composite_count(), 1);
        assert!(session.composite("Boron/Epoxy").is_none());
    }

    #[test]
    fn test_redefinition_replaces_record_entirely() {
        let mut session = seeded_session();
        session
            .add_fiber(ConstituentProperties::new("Glass", 72.0, 0.22, 30.0, 2.54))
            .unwrap();

        session
            .define_composite(&carbon_epoxy("Laminate", 0.6, 0.4))
            .unwrap();

        // Redefine under the same name with a different fiber selection
        let replacement = HomogenizationInput {
            name: "Laminate".to_string(),
            fiber_fractions: VolumeFractions::new().with_fraction("Glass", 0.5),
            matrix_fractions: VolumeFractions::new().with_fraction("Epoxy", 0.5),
        };
        session.define_composite(&replacement).unwrap();

        assert_eq!(session.composite_count(), 1);
        let stored = session.composite("Laminate").unwrap();
        assert!(stored.fiber_constituents.get("Carbon").is_none());
        assert_eq!(stored.fiber_constituents.get("Glass"), Some(0.5));
    }

    #[test]
    fn test_composite_snapshot_survives_constituent_overwrite() {
        let mut session = seeded_session();
        let original = session
            .define_composite(&carbon_epoxy("Carbon/Epoxy", 0.6, 0.4))
            .unwrap();

        // Overwriting the fiber does not alter the stored composite
        session
            .add_fiber(ConstituentProperties::new("Carbon", 300.0, 0.2, 95.0, 1.8))
            .unwrap();
        assert_eq!(session.composite("Carbon/Epoxy").unwrap(), &original);

        // Recomputation picks up the new values
        let refreshed = session
            .define_composite(&carbon_epoxy("Carbon/Epoxy", 0.6, 0.4))
            .unwrap();
        assert!(refreshed.e1_gpa > original.e1_gpa);
    }

    #[test]
    fn test_definitions_keep_insertion_order() {
        let mut session = seeded_session();
        session
            .define_composite(&carbon_epoxy("First", 0.6, 0.4))
            .unwrap();
        session
            .define_composite(&carbon_epoxy("Second", 0.5, 0.5))
            .unwrap();
        session
            .define_composite(&carbon_epoxy("First", 0.55, 0.45))
            .unwrap();

        let names: Vec<&str> = session
            .composites
            .all()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Second"]);
        assert_eq!(
            session.composite("First").unwrap().fiber_constituents.get("Carbon"),
            Some(0.55)
        );
    }

    #[test]
    fn test_mutation_touches_modified() {
        let mut session = seeded_session();
        let before = session.meta.modified;
        session
            .define_composite(&carbon_epoxy("Carbon/Epoxy", 0.6, 0.4))
            .unwrap();
        assert!(session.meta.modified >= before);
    }

    #[test]
    fn test_session_serialization() {
        let mut session = seeded_session();
        session
            .define_composite(&carbon_epoxy("Carbon/Epoxy", 0.6, 0.4))
            .unwrap();

        let json = serde_json::to_string_pretty(&session).unwrap();
        assert!(json.contains("Test Analyst"));
        assert!(json.contains("Carbon/Epoxy"));

        let roundtrip: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.meta.analyst, "Test Analyst");
        assert_eq!(roundtrip.composite_count(), 1);
        assert_eq!(
            roundtrip.composite("Carbon/Epoxy").unwrap().e1_gpa,
            session.composite("Carbon/Epoxy").unwrap().e1_gpa
        );
    }
}
