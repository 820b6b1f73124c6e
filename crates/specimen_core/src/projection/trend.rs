//! Per-material trend lines for the strength/load chart.
//!
//! Rendering support only: the plot projection itself never fits lines.

use crate::model::record::Material;
use crate::projection::plot::PlotPoint;
use serde::{Deserialize, Serialize};

/// Ordinary least-squares fit `load = slope * strength + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendLine {
    pub material: Material,
    pub slope: f64,
    pub intercept: f64,
    /// Strength range covered by the series, for drawing the segment.
    pub min_strength: f64,
    pub max_strength: f64,
}

impl TrendLine {
    pub fn load_at(&self, strength: f64) -> f64 {
        self.slope * strength + self.intercept
    }
}

/// Fits one line per material present, in order of first appearance.
///
/// Series with fewer than two points or no strength variance are skipped.
pub fn trend_lines(points: &[PlotPoint]) -> Vec<TrendLine> {
    let mut materials: Vec<Material> = Vec::new();
    for point in points {
        if !materials.contains(&point.material) {
            materials.push(point.material);
        }
    }

    materials
        .into_iter()
        .filter_map(|material| {
            let series: Vec<&PlotPoint> = points
                .iter()
                .filter(|point| point.material == material)
                .collect();
            fit_series(material, &series)
        })
        .collect()
}

fn fit_series(material: Material, series: &[&PlotPoint]) -> Option<TrendLine> {
    if series.len() < 2 {
        return None;
    }

    let n = series.len() as f64;
    let mean_x = series.iter().map(|p| p.effective_strength).sum::<f64>() / n;
    let mean_y = series.iter().map(|p| p.max_load_kn).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for point in series {
        let dx = point.effective_strength - mean_x;
        sxx += dx * dx;
        sxy += dx * (point.max_load_kn - mean_y);
    }
    // Steel always sits at one strength, so its series usually stops here.
    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let (min_strength, max_strength) = series.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), point| (lo.min(point.effective_strength), hi.max(point.effective_strength)),
    );

    Some(TrendLine {
        material,
        slope,
        intercept: mean_y - slope * mean_x,
        min_strength,
        max_strength,
    })
}
