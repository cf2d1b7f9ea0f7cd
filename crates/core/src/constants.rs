use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Contract multiplier for listed equity options
pub const OPTION_CONTRACT_MULTIPLIER: Decimal = dec!(100);

/// Allocation rows at or below this market value are rounding noise and are omitted
pub const ALLOCATION_EPSILON: Decimal = dec!(0.000001);

/// Donut chart radius used by the dashboard
pub const CHART_RADIUS: f64 = 80.0;

/// Total arc length available to donut chart segments (2 * PI * radius)
pub const CHART_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * CHART_RADIUS;

/// Angle (degrees) where the first chart segment starts; -90 is twelve o'clock
pub const CHART_START_ANGLE_DEG: f64 = -90.0;

/// Days per year used for annualizing returns
pub const DAYS_PER_YEAR: f64 = 365.0;
