// Reports module - grouped aggregations over the classified portfolio

pub mod composition;
pub mod performance;
pub mod timeseries;

pub use composition::{composition, CompositionRow};
pub use performance::{
    performance_by_asset_class, quarterly_performance, summary_metrics, AssetClassPerformance,
    QuarterlyPerformance, SummaryMetrics,
};
pub use timeseries::{asset_class_trends, time_series, TimeSeriesPoint, TrendPoint};

use rust_decimal::Decimal;

/// Percentage ratio with the shared zero guard.
///
/// A non-positive denominator yields 0 rather than an error, so a period
/// with no beginning NAV reads as flat instead of failing.
pub(crate) fn ratio_pct(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator > Decimal::ZERO {
        (numerator / denominator) * Decimal::from(100)
    } else {
        Decimal::ZERO
    }
}
