//! Dashboard payload
//!
//! The named result sets the template embeds as JSON for the client-side
//! charts. Field spelling follows the source workbook's column names
//! because the chart bindings read them directly. Decimal values convert
//! to f64 here and nowhere else; all aggregation math stays in Decimal.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::portfolio::Portfolio;
use crate::reports::{
    self, AssetClassPerformance, CompositionRow, QuarterlyPerformance, SummaryMetrics,
    TimeSeriesPoint, TrendPoint,
};

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn date_string(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Run metadata shown in the dashboard header
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    pub generated_date: String,
    pub data_period: String,
    pub total_records: usize,
    pub alternatives_records: usize,
}

/// Scalar snapshot behind the summary cards
#[derive(Debug, Clone, Serialize)]
pub struct KeyMetrics {
    pub total_nav: f64,
    pub total_income: f64,
    pub total_contributions: f64,
    pub total_distributions: f64,
    pub weighted_return_pct: f64,
    pub num_securities: usize,
    pub num_asset_classes: usize,
    pub as_of_date: Option<String>,
}

impl From<&SummaryMetrics> for KeyMetrics {
    fn from(metrics: &SummaryMetrics) -> Self {
        KeyMetrics {
            total_nav: to_f64(metrics.total_nav),
            total_income: to_f64(metrics.total_income),
            total_contributions: to_f64(metrics.total_contributions),
            total_distributions: to_f64(metrics.total_distributions),
            weighted_return_pct: to_f64(metrics.weighted_return_pct),
            num_securities: metrics.num_securities,
            num_asset_classes: metrics.num_asset_classes,
            as_of_date: metrics.as_of_date.map(date_string),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompositionEntry {
    #[serde(rename = "Asset_Class")]
    pub asset_class: String,
    #[serde(rename = "Total_NAV")]
    pub total_nav: f64,
    #[serde(rename = "Num_Securities")]
    pub num_securities: usize,
    #[serde(rename = "Percentage")]
    pub percentage: f64,
}

impl From<&CompositionRow> for CompositionEntry {
    fn from(row: &CompositionRow) -> Self {
        CompositionEntry {
            asset_class: row.asset_class.clone(),
            total_nav: to_f64(row.total_nav),
            num_securities: row.num_securities,
            percentage: to_f64(row.percentage),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimeSeriesEntry {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "End_NAV")]
    pub end_nav: f64,
    #[serde(rename = "Net_Investment_Income")]
    pub net_investment_income: f64,
    #[serde(rename = "Contributions")]
    pub contributions: f64,
    #[serde(rename = "Distributions")]
    pub distributions: f64,
    #[serde(rename = "Category")]
    pub category: String,
}

impl From<&TimeSeriesPoint> for TimeSeriesEntry {
    fn from(point: &TimeSeriesPoint) -> Self {
        TimeSeriesEntry {
            date: date_string(point.date),
            end_nav: to_f64(point.end_nav),
            net_investment_income: to_f64(point.net_investment_income),
            contributions: to_f64(point.contributions),
            distributions: to_f64(point.distributions),
            category: point.category.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrendEntry {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Asset_Class")]
    pub asset_class: String,
    #[serde(rename = "End_NAV")]
    pub end_nav: f64,
}

impl From<&TrendPoint> for TrendEntry {
    fn from(point: &TrendPoint) -> Self {
        TrendEntry {
            date: date_string(point.date),
            asset_class: point.asset_class.clone(),
            end_nav: to_f64(point.end_nav),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceEntry {
    #[serde(rename = "Asset_Class")]
    pub asset_class: String,
    #[serde(rename = "End_NAV")]
    pub end_nav: f64,
    #[serde(rename = "Beg_NAV")]
    pub beg_nav: f64,
    #[serde(rename = "Total_Return")]
    pub total_return: f64,
    #[serde(rename = "Net_Investment_Income")]
    pub net_investment_income: f64,
    #[serde(rename = "Contributions")]
    pub contributions: f64,
    #[serde(rename = "Distributions")]
    pub distributions: f64,
    #[serde(rename = "Return_Pct")]
    pub return_pct: f64,
}

impl From<&AssetClassPerformance> for PerformanceEntry {
    fn from(row: &AssetClassPerformance) -> Self {
        PerformanceEntry {
            asset_class: row.asset_class.clone(),
            end_nav: to_f64(row.end_nav),
            beg_nav: to_f64(row.beg_nav),
            total_return: to_f64(row.total_return),
            net_investment_income: to_f64(row.net_investment_income),
            contributions: to_f64(row.contributions),
            distributions: to_f64(row.distributions),
            return_pct: to_f64(row.return_pct),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuarterlyEntry {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "End_NAV")]
    pub end_nav: f64,
    #[serde(rename = "Beg_NAV")]
    pub beg_nav: f64,
    #[serde(rename = "Total_Return")]
    pub total_return: f64,
    #[serde(rename = "Net_Investment_Income")]
    pub net_investment_income: f64,
    #[serde(rename = "Contributions")]
    pub contributions: f64,
    #[serde(rename = "Distributions")]
    pub distributions: f64,
    #[serde(rename = "Return_Pct")]
    pub return_pct: f64,
    #[serde(rename = "Income_Yield")]
    pub income_yield: f64,
}

impl From<&QuarterlyPerformance> for QuarterlyEntry {
    fn from(row: &QuarterlyPerformance) -> Self {
        QuarterlyEntry {
            date: date_string(row.date),
            end_nav: to_f64(row.end_nav),
            beg_nav: to_f64(row.beg_nav),
            total_return: to_f64(row.total_return),
            net_investment_income: to_f64(row.net_investment_income),
            contributions: to_f64(row.contributions),
            distributions: to_f64(row.distributions),
            return_pct: to_f64(row.return_pct),
            income_yield: to_f64(row.income_yield),
        }
    }
}

/// Complete payload embedded into the dashboard document
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub metadata: Metadata,
    pub key_metrics: KeyMetrics,
    pub composition: Vec<CompositionEntry>,
    pub alternatives_timeseries: Vec<TimeSeriesEntry>,
    pub non_alternatives_timeseries: Vec<TimeSeriesEntry>,
    pub asset_class_trends: Vec<TrendEntry>,
    pub performance_by_asset_class: Vec<PerformanceEntry>,
    pub quarterly_performance: Vec<QuarterlyEntry>,
}

impl DashboardData {
    /// Assemble every result set from the classified portfolio.
    ///
    /// `generated_at` is injected by the caller so rendering stays a pure
    /// function of the payload.
    pub fn build(portfolio: &Portfolio, generated_at: NaiveDateTime) -> Self {
        let metrics = reports::summary_metrics(portfolio);
        let (alts_series, non_alts_series) = reports::time_series(portfolio);

        let data_period = match portfolio.alternatives_date_range() {
            Some((min, max)) => format!("{} to {}", date_string(min), date_string(max)),
            None => "n/a".to_string(),
        };

        DashboardData {
            metadata: Metadata {
                generated_date: generated_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                data_period,
                total_records: portfolio.len(),
                alternatives_records: portfolio.alternatives().count(),
            },
            key_metrics: KeyMetrics::from(&metrics),
            composition: reports::composition(portfolio, None)
                .iter()
                .map(CompositionEntry::from)
                .collect(),
            alternatives_timeseries: alts_series.iter().map(TimeSeriesEntry::from).collect(),
            non_alternatives_timeseries: non_alts_series
                .iter()
                .map(TimeSeriesEntry::from)
                .collect(),
            asset_class_trends: reports::asset_class_trends(portfolio)
                .iter()
                .map(TrendEntry::from)
                .collect(),
            performance_by_asset_class: reports::performance_by_asset_class(portfolio)
                .iter()
                .map(PerformanceEntry::from)
                .collect(),
            quarterly_performance: reports::quarterly_performance(portfolio)
                .iter()
                .map(QuarterlyEntry::from)
                .collect(),
        }
    }
}
