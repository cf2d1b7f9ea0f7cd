//! Builds legend rows and donut-chart geometry from an [`AssetBreakdown`].
//!
//! The chart is derived from the legend rows, never from the breakdown's
//! percentages directly, so legend and wedges always agree.

use log::{debug, warn};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::{AllocationRow, AssetAllocation, ChartModel, ChartSegment};
use crate::constants::{
    ALLOCATION_EPSILON, CHART_CIRCUMFERENCE, CHART_RADIUS, CHART_START_ANGLE_DEG,
};
use crate::portfolio::breakdown::AssetBreakdown;
use crate::portfolio::positions::percent_of;
use crate::portfolio::snapshot::AssetClass;

/// Legend rows in canonical class order.
///
/// Classes whose market value is at or below [`ALLOCATION_EPSILON`] are
/// omitted rather than rendered as zero.
pub fn build_asset_allocation(breakdown: &AssetBreakdown) -> AssetAllocation {
    let total_value = breakdown.total_market_value;
    if total_value <= Decimal::ZERO {
        return AssetAllocation {
            rows: Vec::new(),
            total_value,
        };
    }

    let rows: Vec<AllocationRow> = AssetClass::ALL
        .iter()
        .filter_map(|class| {
            let value = breakdown.market_value(*class);
            if value <= ALLOCATION_EPSILON {
                return None;
            }
            Some(AllocationRow {
                asset_class: *class,
                name: class.label().to_string(),
                value,
                percent: percent_of(value, total_value),
                color: class.color().to_string(),
            })
        })
        .collect();

    debug!(
        "Built asset allocation: {} rows over total {}",
        rows.len(),
        total_value
    );
    AssetAllocation { rows, total_value }
}

fn to_degrees(offset: f64, circumference: f64) -> f64 {
    (CHART_START_ANGLE_DEG + offset / circumference * 360.0).rem_euclid(360.0)
}

/// Lays the allocation rows out contiguously around the donut.
///
/// Arcs are proportional to each row's percent and together consume the
/// whole circumference; the last wedge closes the ring exactly so float
/// drift never leaves a gap. `breakdown` must come from the same
/// calculation pass as `allocation`; segment values are read from it.
pub fn build_chart_from_legend_data(
    allocation: &AssetAllocation,
    breakdown: &AssetBreakdown,
) -> ChartModel {
    if allocation.total_value != breakdown.total_market_value {
        warn!(
            "Allocation total {} does not match breakdown total {}; inputs come from different passes",
            allocation.total_value, breakdown.total_market_value
        );
    }

    let weights: Vec<f64> = allocation
        .rows
        .iter()
        .map(|row| row.percent.to_f64().unwrap_or(0.0).max(0.0))
        .collect();
    let weight_sum: f64 = weights.iter().sum();
    if allocation.is_empty() || weight_sum <= 0.0 || !weight_sum.is_finite() {
        return ChartModel::empty();
    }

    let circumference = CHART_CIRCUMFERENCE;
    let last = allocation.rows.len() - 1;
    let mut offset = 0.0;
    let mut segments = Vec::with_capacity(allocation.rows.len());

    for (i, (row, weight)) in allocation.rows.iter().zip(weights).enumerate() {
        let arc = if i == last {
            circumference - offset
        } else {
            weight / weight_sum * circumference
        };
        segments.push(ChartSegment {
            asset_class: row.asset_class,
            name: row.name.clone(),
            value: breakdown.market_value(row.asset_class),
            percent: row.percent,
            arc,
            offset,
            rotation: to_degrees(offset, circumference),
            color: row.color.clone(),
        });
        offset += arc;
    }

    // A single wedge is the whole ring and has no boundary to mark.
    let separators = if segments.len() > 1 {
        segments.iter().map(|s| s.rotation).collect()
    } else {
        Vec::new()
    };

    ChartModel {
        segments,
        separators,
        radius: CHART_RADIUS,
        circumference,
        start_angle: CHART_START_ANGLE_DEG,
    }
}
