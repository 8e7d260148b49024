//! Portfolio records and classification
//!
//! Converts raw spreadsheet holdings into classified investment records
//! and exposes the two category projections the aggregations run over.
//! Classification is total: every record lands in exactly one category,
//! with unrecognized asset classes folded into Non-Alternatives.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::{info, warn};

use crate::importers::RawHolding;
use crate::taxonomy::{self, AssetCategory};

/// A single classified investment record.
///
/// Immutable once built; `category` is the only field derived from the
/// spreadsheet data.
#[derive(Debug, Clone)]
pub struct InvestmentRecord {
    pub date: NaiveDate,
    pub asset_class: String,
    pub security: String,
    pub beg_nav: Decimal,
    pub end_nav: Decimal,
    pub contributions: Decimal,
    pub distributions: Decimal,
    pub net_investment_income: Decimal,
    pub category: AssetCategory,
}

impl InvestmentRecord {
    /// Total return including cash flow components
    pub fn total_return(&self) -> Decimal {
        self.end_nav - self.beg_nav - self.contributions + self.distributions
    }

    /// Return percentage over beginning NAV. Zero when `beg_nav <= 0`.
    pub fn return_pct(&self) -> Decimal {
        if self.beg_nav > Decimal::ZERO {
            (self.total_return() / self.beg_nav) * Decimal::from(100)
        } else {
            Decimal::ZERO
        }
    }

    /// Raw change in NAV over the period
    pub fn nav_change(&self) -> Decimal {
        self.end_nav - self.beg_nav
    }

    pub fn is_alternative(&self) -> bool {
        self.category == AssetCategory::Alternative
    }
}

/// Classified portfolio: one record table with two read-only category views
#[derive(Debug, Default)]
pub struct Portfolio {
    records: Vec<InvestmentRecord>,
}

impl Portfolio {
    /// Classify raw holdings into a portfolio.
    ///
    /// Asset classes in neither taxonomy set fold into Non-Alternatives;
    /// each distinct unknown class name is logged once so the gap is
    /// visible without changing the aggregation behavior.
    pub fn classify(raw: Vec<RawHolding>) -> Self {
        let mut unknown: BTreeMap<String, usize> = BTreeMap::new();

        let records: Vec<InvestmentRecord> = raw
            .into_iter()
            .map(|holding| {
                let category = match taxonomy::lookup(&holding.asset_class) {
                    Some(category) => category,
                    None => {
                        *unknown.entry(holding.asset_class.clone()).or_insert(0) += 1;
                        AssetCategory::NonAlternative
                    }
                };
                InvestmentRecord {
                    date: holding.date,
                    asset_class: holding.asset_class,
                    security: holding.security,
                    beg_nav: holding.beg_nav,
                    end_nav: holding.end_nav,
                    contributions: holding.contributions,
                    distributions: holding.distributions,
                    net_investment_income: holding.net_investment_income,
                    category,
                }
            })
            .collect();

        for (class, count) in &unknown {
            warn!(
                "asset class '{}' is in neither taxonomy set; {} record(s) treated as Non-Alternatives",
                class, count
            );
        }

        let portfolio = Portfolio { records };
        info!(
            "Classified {} records: {} Alternatives, {} Non-Alternatives",
            portfolio.len(),
            portfolio.alternatives().count(),
            portfolio.non_alternatives().count()
        );
        portfolio
    }

    pub fn records(&self) -> &[InvestmentRecord] {
        &self.records
    }

    /// Read-only projection of the Alternatives records
    pub fn alternatives(&self) -> impl Iterator<Item = &InvestmentRecord> {
        self.records
            .iter()
            .filter(|r| r.category == AssetCategory::Alternative)
    }

    /// Read-only projection of the Non-Alternatives records
    pub fn non_alternatives(&self) -> impl Iterator<Item = &InvestmentRecord> {
        self.records
            .iter()
            .filter(|r| r.category == AssetCategory::NonAlternative)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent date among Alternatives records, if any
    pub fn latest_alternatives_date(&self) -> Option<NaiveDate> {
        self.alternatives().map(|r| r.date).max()
    }

    /// First and last dates among Alternatives records
    pub fn alternatives_date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.alternatives().map(|r| r.date).min()?;
        let max = self.alternatives().map(|r| r.date).max()?;
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn holding(asset_class: &str, beg: Decimal, end: Decimal) -> RawHolding {
        RawHolding {
            date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            asset_class: asset_class.to_string(),
            security: "SEC-1".to_string(),
            beg_nav: beg,
            end_nav: end,
            contributions: Decimal::ZERO,
            distributions: Decimal::ZERO,
            net_investment_income: Decimal::ZERO,
        }
    }

    #[test]
    fn test_return_pct_simple_gain() {
        let portfolio = Portfolio::classify(vec![holding("Private Equity", dec!(100), dec!(110))]);
        let record = &portfolio.records()[0];
        assert_eq!(record.total_return(), dec!(10));
        assert_eq!(record.return_pct(), dec!(10));
    }

    #[test]
    fn test_return_pct_zero_beg_nav_guard() {
        let mut raw = holding("Private Equity", dec!(0), dec!(50));
        raw.contributions = dec!(50);
        let portfolio = Portfolio::classify(vec![raw]);
        let record = &portfolio.records()[0];
        // Funded entirely by contributions: no gain, and no division by zero
        assert_eq!(record.total_return(), Decimal::ZERO);
        assert_eq!(record.return_pct(), Decimal::ZERO);
    }

    #[test]
    fn test_distributions_count_toward_return() {
        let mut raw = holding("Real Estate", dec!(200), dec!(180));
        raw.distributions = dec!(30);
        let portfolio = Portfolio::classify(vec![raw]);
        let record = &portfolio.records()[0];
        assert_eq!(record.total_return(), dec!(10));
        assert_eq!(record.return_pct(), dec!(5));
    }

    #[test]
    fn test_classification_partition_is_total() {
        let portfolio = Portfolio::classify(vec![
            holding("Private Equity", dec!(1), dec!(1)),
            holding("Cash", dec!(1), dec!(1)),
            holding("Stamps", dec!(1), dec!(1)),
        ]);
        assert_eq!(portfolio.len(), 3);
        assert_eq!(
            portfolio.alternatives().count() + portfolio.non_alternatives().count(),
            portfolio.len()
        );
        // Unknown class folds into Non-Alternatives
        assert_eq!(portfolio.non_alternatives().count(), 2);
    }

    #[test]
    fn test_empty_portfolio_has_no_dates() {
        let portfolio = Portfolio::classify(Vec::new());
        assert!(portfolio.is_empty());
        assert_eq!(portfolio.latest_alternatives_date(), None);
        assert_eq!(portfolio.alternatives_date_range(), None);
    }

    #[test]
    fn test_nav_change() {
        let portfolio = Portfolio::classify(vec![holding("Hedge Funds", dec!(75), dec!(90))]);
        assert_eq!(portfolio.records()[0].nav_change(), dec!(15));
    }
}
