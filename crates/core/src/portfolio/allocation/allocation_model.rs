//! Allocation and donut-chart models for the asset-class breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::portfolio::snapshot::AssetClass;

/// Share of one asset class within total portfolio value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRow {
    pub asset_class: AssetClass,
    /// Display name of the class
    pub name: String,
    /// Market value in USD
    pub value: Decimal,
    /// Percentage of total market value (0-100)
    pub percent: Decimal,
    /// Color for visualization (hex code)
    pub color: String,
}

/// Legend rows in canonical class order. Empty when the portfolio has no
/// positive value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAllocation {
    pub rows: Vec<AllocationRow>,
    /// Total market value the percentages were computed against
    pub total_value: Decimal,
}

impl AssetAllocation {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn percent_sum(&self) -> Decimal {
        self.rows.iter().map(|row| row.percent).sum()
    }
}

/// One wedge of the donut chart.
///
/// `arc` and `offset` are lengths along the circumference (the form SVG
/// stroke dash arrays take); `rotation` is the wedge's start angle in
/// degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSegment {
    pub asset_class: AssetClass,
    pub name: String,
    pub value: Decimal,
    pub percent: Decimal,
    pub arc: f64,
    pub offset: f64,
    pub rotation: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartModel {
    pub segments: Vec<ChartSegment>,
    /// Angles (degrees) of the boundaries between wedges
    pub separators: Vec<f64>,
    pub radius: f64,
    /// Arc length consumed by the segments; zero for an empty chart
    pub circumference: f64,
    pub start_angle: f64,
}

impl ChartModel {
    /// Chart for a portfolio with nothing to show. Callers render a
    /// placeholder ring.
    pub fn empty() -> Self {
        ChartModel::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn arc_sum(&self) -> f64 {
        self.segments.iter().map(|s| s.arc).sum()
    }
}
