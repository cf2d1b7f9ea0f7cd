//! Portfolio valuation: snapshot -> position math -> breakdown -> allocation.

pub mod allocation;
pub mod breakdown;
pub mod positions;
pub mod snapshot;

pub use allocation::{
    build_asset_allocation, build_chart_from_legend_data, AllocationRow, AssetAllocation,
    ChartModel, ChartSegment,
};
pub use breakdown::{calculate_asset_breakdown, AssetBreakdown, ClassTotals, PortfolioSummary};
pub use positions::{annualized_return, pnl_percent};
pub use snapshot::{AssetClass, OptionRight, PortfolioSnapshot, Position};
