//! Sample record domain model.
//!
//! # Responsibility
//! - Define the immutable record appended to a session store.
//! - Map materials to and from their display labels.
//!
//! # Invariants
//! - `project_name` is non-empty and already normalized.
//! - `concrete_strength_mpa` lies in `[15, 100]`, `max_load_kn` is `>= 0`.
//! - Both invariants are established by `form::validator`, never re-checked here.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Session-local record identifier, assigned as `count + 1` on append.
pub type RecordId = u64;

/// Closed set of materials offered by the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    #[serde(rename = "Reinforced Concrete")]
    ReinforcedConcrete,
    #[serde(rename = "Structural Steel")]
    StructuralSteel,
    #[serde(rename = "Glued Laminated Timber")]
    GluedLaminatedTimber,
    #[serde(rename = "Masonry")]
    Masonry,
    #[serde(rename = "Other")]
    Other,
}

/// Every material in form display order.
pub const ALL_MATERIALS: [Material; 5] = [
    Material::ReinforcedConcrete,
    Material::StructuralSteel,
    Material::GluedLaminatedTimber,
    Material::Masonry,
    Material::Other,
];

impl Material {
    /// Stable label used by the form, the table and the wire format.
    pub fn label(self) -> &'static str {
        match self {
            Self::ReinforcedConcrete => "Reinforced Concrete",
            Self::StructuralSteel => "Structural Steel",
            Self::GluedLaminatedTimber => "Glued Laminated Timber",
            Self::Masonry => "Masonry",
            Self::Other => "Other",
        }
    }

    /// Parses an exact display label. Matching is case-sensitive.
    pub fn from_label(value: &str) -> Option<Self> {
        ALL_MATERIALS
            .iter()
            .copied()
            .find(|material| material.label() == value)
    }
}

impl Display for Material {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated sample that has not been assigned an id yet.
///
/// Produced only by `form::validator::validate_submission`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub project_name: String,
    pub material: Material,
    #[serde(rename = "concreteStrengthMPa")]
    pub concrete_strength_mpa: f64,
    #[serde(rename = "maxLoadKN")]
    pub max_load_kn: f64,
    pub latitude: f64,
    pub longitude: f64,
}

/// One stored sample. Immutable once appended.
///
/// Serialize-only; the store builds records from validated input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub project_name: String,
    pub material: Material,
    #[serde(rename = "concreteStrengthMPa")]
    pub concrete_strength_mpa: f64,
    #[serde(rename = "maxLoadKN")]
    pub max_load_kn: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Record {
    /// Attaches a store-assigned id to a validated record.
    pub(crate) fn from_new(id: RecordId, record: NewRecord) -> Self {
        Self {
            id,
            project_name: record.project_name,
            material: record.material,
            concrete_strength_mpa: record.concrete_strength_mpa,
            max_load_kn: record.max_load_kn,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Material, NewRecord, Record, ALL_MATERIALS};

    #[test]
    fn labels_parse_back_to_the_same_material() {
        for material in ALL_MATERIALS {
            assert_eq!(Material::from_label(material.label()), Some(material));
        }
    }

    #[test]
    fn from_label_is_case_sensitive() {
        assert_eq!(Material::from_label("masonry"), None);
        assert_eq!(Material::from_label("Structural steel"), None);
    }

    #[test]
    fn record_serializes_with_wire_names() {
        let record = Record::from_new(
            3,
            NewRecord {
                project_name: "Pont-Nord-01".to_string(),
                material: Material::StructuralSteel,
                concrete_strength_mpa: 35.0,
                max_load_kn: 800.0,
                latitude: 48.85,
                longitude: 2.35,
            },
        );
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["id"], 3);
        assert_eq!(json["projectName"], "Pont-Nord-01");
        assert_eq!(json["material"], "Structural Steel");
        assert_eq!(json["concreteStrengthMPa"], 35.0);
        assert_eq!(json["maxLoadKN"], 800.0);
        assert_eq!(json["latitude"], 48.85);
    }
}
