//! Performance metrics for the Alternatives book
//!
//! Latest-quarter performance by asset class, quarterly performance over
//! every date present, and the scalar summary snapshot the dashboard cards
//! are built from. All ratios share the zero guard from the reports root:
//! a group with no positive beginning NAV reads as 0, never an error.

use chrono::NaiveDate;
use itertools::Itertools;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::portfolio::{InvestmentRecord, Portfolio};
use crate::reports::ratio_pct;

/// Per-asset-class sums and return for the most recent date
#[derive(Debug, Clone)]
pub struct AssetClassPerformance {
    pub asset_class: String,
    pub end_nav: Decimal,
    pub beg_nav: Decimal,
    pub total_return: Decimal,
    pub net_investment_income: Decimal,
    pub contributions: Decimal,
    pub distributions: Decimal,
    pub return_pct: Decimal,
}

/// Per-date sums and ratios across all dates present
#[derive(Debug, Clone)]
pub struct QuarterlyPerformance {
    pub date: NaiveDate,
    pub end_nav: Decimal,
    pub beg_nav: Decimal,
    pub total_return: Decimal,
    pub net_investment_income: Decimal,
    pub contributions: Decimal,
    pub distributions: Decimal,
    pub return_pct: Decimal,
    pub income_yield: Decimal,
}

/// Scalar snapshot of the Alternatives book at the most recent date
#[derive(Debug, Clone, Default)]
pub struct SummaryMetrics {
    pub total_nav: Decimal,
    pub total_income: Decimal,
    pub total_contributions: Decimal,
    pub total_distributions: Decimal,
    pub weighted_return_pct: Decimal,
    pub num_securities: usize,
    pub num_asset_classes: usize,
    pub as_of_date: Option<NaiveDate>,
}

/// Running sums for one aggregation group
#[derive(Debug, Default)]
struct GroupSums {
    end_nav: Decimal,
    beg_nav: Decimal,
    total_return: Decimal,
    net_investment_income: Decimal,
    contributions: Decimal,
    distributions: Decimal,
}

impl GroupSums {
    fn add(&mut self, record: &InvestmentRecord) {
        self.end_nav += record.end_nav;
        self.beg_nav += record.beg_nav;
        self.total_return += record.total_return();
        self.net_investment_income += record.net_investment_income;
        self.contributions += record.contributions;
        self.distributions += record.distributions;
    }
}

/// Performance by asset class over the most recent date, sorted by
/// descending return percentage
pub fn performance_by_asset_class(portfolio: &Portfolio) -> Vec<AssetClassPerformance> {
    let as_of = match portfolio.latest_alternatives_date() {
        Some(date) => date,
        None => return Vec::new(),
    };

    let mut by_class: BTreeMap<&str, GroupSums> = BTreeMap::new();
    for record in portfolio.alternatives().filter(|r| r.date == as_of) {
        by_class
            .entry(record.asset_class.as_str())
            .or_default()
            .add(record);
    }

    let mut rows: Vec<AssetClassPerformance> = by_class
        .into_iter()
        .map(|(asset_class, sums)| AssetClassPerformance {
            asset_class: asset_class.to_string(),
            return_pct: ratio_pct(sums.total_return, sums.beg_nav),
            end_nav: sums.end_nav,
            beg_nav: sums.beg_nav,
            total_return: sums.total_return,
            net_investment_income: sums.net_investment_income,
            contributions: sums.contributions,
            distributions: sums.distributions,
        })
        .collect();

    rows.sort_by(|a, b| b.return_pct.cmp(&a.return_pct));
    rows
}

/// Quarterly performance over every date present, ascending
pub fn quarterly_performance(portfolio: &Portfolio) -> Vec<QuarterlyPerformance> {
    let mut by_date: BTreeMap<NaiveDate, GroupSums> = BTreeMap::new();
    for record in portfolio.alternatives() {
        by_date.entry(record.date).or_default().add(record);
    }

    by_date
        .into_iter()
        .map(|(date, sums)| QuarterlyPerformance {
            date,
            return_pct: ratio_pct(sums.total_return, sums.beg_nav),
            income_yield: ratio_pct(sums.net_investment_income, sums.beg_nav),
            end_nav: sums.end_nav,
            beg_nav: sums.beg_nav,
            total_return: sums.total_return,
            net_investment_income: sums.net_investment_income,
            contributions: sums.contributions,
            distributions: sums.distributions,
        })
        .collect()
}

/// Summary snapshot for the most recent date.
///
/// The weighted return is total gain over total beginning NAV across all
/// records at that date, not an average of per-class returns. An empty
/// portfolio yields zeroed metrics with no as-of date.
pub fn summary_metrics(portfolio: &Portfolio) -> SummaryMetrics {
    let as_of = match portfolio.latest_alternatives_date() {
        Some(date) => date,
        None => return SummaryMetrics::default(),
    };

    let mut sums = GroupSums::default();
    let recent: Vec<&InvestmentRecord> = portfolio
        .alternatives()
        .filter(|r| r.date == as_of)
        .collect();
    for record in &recent {
        sums.add(record);
    }

    SummaryMetrics {
        total_nav: sums.end_nav,
        total_income: sums.net_investment_income,
        total_contributions: sums.contributions,
        total_distributions: sums.distributions,
        weighted_return_pct: ratio_pct(sums.total_return, sums.beg_nav),
        num_securities: recent.iter().map(|r| r.security.as_str()).unique().count(),
        num_asset_classes: recent
            .iter()
            .map(|r| r.asset_class.as_str())
            .unique()
            .count(),
        as_of_date: Some(as_of),
    }
}
