//! Strength-versus-load scatter projection.
//!
//! # Responsibility
//! - Keep only the materials shown on the comparison chart.
//! - Substitute the effective strength used on the shared strength axis.
//!
//! # Invariants
//! - Only Reinforced Concrete and Structural Steel points are emitted.
//! - Steel points always carry `STEEL_PLACEHOLDER_STRENGTH_MPA`.
//! - No plotted material means `PlotView::Empty`, never an empty point list.

use crate::model::record::{Material, Record};
use serde::{Deserialize, Serialize};

/// Fixed strength for steel samples; the form does not measure steel strength.
pub const STEEL_PLACEHOLDER_STRENGTH_MPA: f64 = 60.0;

pub const PLOT_TITLE: &str = "Material Strength vs. Load";
pub const X_AXIS_LABEL: &str = "Strength (MPa)";
pub const Y_AXIS_LABEL: &str = "Load (kN)";
pub const EMPTY_PLOT_MESSAGE: &str =
    "No Reinforced Concrete or Structural Steel samples to plot yet.";

/// One scatter point ready for chart rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotPoint {
    pub effective_strength: f64,
    #[serde(rename = "maxLoadKN")]
    pub max_load_kn: f64,
    pub material: Material,
}

/// Plot projection output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PlotView {
    /// Nothing to chart; the renderer shows `EMPTY_PLOT_MESSAGE` instead.
    Empty,
    /// Non-empty point sequence in record order.
    Points { points: Vec<PlotPoint> },
}

impl PlotView {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Points to chart; empty slice for `PlotView::Empty`.
    pub fn points(&self) -> &[PlotPoint] {
        match self {
            Self::Empty => &[],
            Self::Points { points } => points.as_slice(),
        }
    }
}

/// Returns the charted strength for `record`, or `None` when not plotted.
pub fn effective_strength(record: &Record) -> Option<f64> {
    match record.material {
        Material::ReinforcedConcrete => Some(record.concrete_strength_mpa),
        Material::StructuralSteel => Some(STEEL_PLACEHOLDER_STRENGTH_MPA),
        Material::GluedLaminatedTimber | Material::Masonry | Material::Other => None,
    }
}

/// Projects a snapshot to scatter points.
pub fn project_plot(records: &[Record]) -> PlotView {
    let points: Vec<PlotPoint> = records
        .iter()
        .filter_map(|record| {
            effective_strength(record).map(|strength| PlotPoint {
                effective_strength: strength,
                max_load_kn: record.max_load_kn,
                material: record.material,
            })
        })
        .collect();

    if points.is_empty() {
        PlotView::Empty
    } else {
        PlotView::Points { points }
    }
}
