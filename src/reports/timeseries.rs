//! NAV and cash-flow trends over time
//!
//! Per-date sums for each category, and per-(date, asset class) NAV sums
//! for the Alternatives book. BTreeMap grouping keys give ascending date
//! order without a separate sort.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::portfolio::{InvestmentRecord, Portfolio};
use crate::taxonomy::AssetCategory;

/// Per-date sums for one category
#[derive(Debug, Clone)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub end_nav: Decimal,
    pub net_investment_income: Decimal,
    pub contributions: Decimal,
    pub distributions: Decimal,
    pub category: AssetCategory,
}

/// Per-(date, asset class) NAV sum
#[derive(Debug, Clone)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub asset_class: String,
    pub end_nav: Decimal,
}

/// NAV/income/cash-flow time series for Alternatives and Non-Alternatives
pub fn time_series(portfolio: &Portfolio) -> (Vec<TimeSeriesPoint>, Vec<TimeSeriesPoint>) {
    (
        series_for(portfolio.alternatives(), AssetCategory::Alternative),
        series_for(portfolio.non_alternatives(), AssetCategory::NonAlternative),
    )
}

fn series_for<'a>(
    records: impl Iterator<Item = &'a InvestmentRecord>,
    category: AssetCategory,
) -> Vec<TimeSeriesPoint> {
    let mut by_date: BTreeMap<NaiveDate, (Decimal, Decimal, Decimal, Decimal)> = BTreeMap::new();

    for record in records {
        let entry = by_date.entry(record.date).or_default();
        entry.0 += record.end_nav;
        entry.1 += record.net_investment_income;
        entry.2 += record.contributions;
        entry.3 += record.distributions;
    }

    by_date
        .into_iter()
        .map(
            |(date, (end_nav, net_investment_income, contributions, distributions))| {
                TimeSeriesPoint {
                    date,
                    end_nav,
                    net_investment_income,
                    contributions,
                    distributions,
                    category,
                }
            },
        )
        .collect()
}

/// Alternatives NAV trends broken out by asset class, ordered by
/// (date, asset class)
pub fn asset_class_trends(portfolio: &Portfolio) -> Vec<TrendPoint> {
    let mut by_key: BTreeMap<(NaiveDate, &str), Decimal> = BTreeMap::new();

    for record in portfolio.alternatives() {
        *by_key
            .entry((record.date, record.asset_class.as_str()))
            .or_default() += record.end_nav;
    }

    by_key
        .into_iter()
        .map(|((date, asset_class), end_nav)| TrendPoint {
            date,
            asset_class: asset_class.to_string(),
            end_nav,
        })
        .collect()
}
