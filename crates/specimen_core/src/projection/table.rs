//! Tabular listing projection.
//!
//! # Invariants
//! - One row per record, in insertion order.
//! - Column order is fixed by `TABLE_COLUMNS`.

use crate::model::record::{Material, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Column labels in display order.
pub const TABLE_COLUMNS: [&str; 7] = [
    "ID",
    "Project Name",
    "Material",
    "Strength (MPa)",
    "Load (kN)",
    "Latitude",
    "Longitude",
];

/// One display-ready table row. Field names serialize as column labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    #[serde(rename = "ID")]
    pub id: RecordId,
    #[serde(rename = "Project Name")]
    pub project_name: String,
    #[serde(rename = "Material")]
    pub material: Material,
    #[serde(rename = "Strength (MPa)")]
    pub strength_mpa: f64,
    #[serde(rename = "Load (kN)")]
    pub load_kn: f64,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl DisplayRow {
    /// Cell values as text, aligned with `TABLE_COLUMNS`.
    pub fn cells(&self) -> [String; 7] {
        [
            self.id.to_string(),
            self.project_name.clone(),
            self.material.label().to_string(),
            self.strength_mpa.to_string(),
            self.load_kn.to_string(),
            self.latitude.to_string(),
            self.longitude.to_string(),
        ]
    }
}

impl From<&Record> for DisplayRow {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            project_name: record.project_name.clone(),
            material: record.material,
            strength_mpa: record.concrete_strength_mpa,
            load_kn: record.max_load_kn,
            latitude: record.latitude,
            longitude: record.longitude,
        }
    }
}

/// Projects every record to a display row, preserving order.
pub fn project_table(records: &[Record]) -> Vec<DisplayRow> {
    records.iter().map(DisplayRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::{project_table, DisplayRow, TABLE_COLUMNS};
    use crate::model::record::{Material, Record};

    fn record(id: u64, material: Material) -> Record {
        Record {
            id,
            project_name: format!("P-{id}"),
            material,
            concrete_strength_mpa: 40.0,
            max_load_kn: 250.5,
            latitude: -33.9,
            longitude: 151.2,
        }
    }

    #[test]
    fn empty_snapshot_projects_to_zero_rows() {
        assert!(project_table(&[]).is_empty());
    }

    #[test]
    fn rows_keep_insertion_order_without_filtering() {
        let records = vec![
            record(1, Material::Masonry),
            record(2, Material::Other),
            record(3, Material::StructuralSteel),
        ];
        let ids: Vec<u64> = project_table(&records).iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn cells_follow_column_order() {
        let row = DisplayRow::from(&record(4, Material::GluedLaminatedTimber));
        let cells = row.cells();
        assert_eq!(cells.len(), TABLE_COLUMNS.len());
        assert_eq!(
            cells,
            [
                "4".to_string(),
                "P-4".to_string(),
                "Glued Laminated Timber".to_string(),
                "40".to_string(),
                "250.5".to_string(),
                "-33.9".to_string(),
                "151.2".to_string(),
            ]
        );
    }
}
