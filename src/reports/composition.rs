//! Portfolio composition by asset class
//!
//! Snapshot of the Alternatives book at a single date: per-class NAV,
//! distinct security count, and share of the Alternatives total.

use chrono::NaiveDate;
use itertools::Itertools;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::portfolio::Portfolio;
use crate::reports::ratio_pct;

/// One asset class's slice of the Alternatives book
#[derive(Debug, Clone)]
pub struct CompositionRow {
    pub asset_class: String,
    pub total_nav: Decimal,
    pub num_securities: usize,
    pub percentage: Decimal,
}

/// Composition of the Alternatives book at `as_of` (default: latest date
/// present). Rows are ordered by descending NAV; ordering among exact NAV
/// ties is unspecified but stable within a run.
pub fn composition(portfolio: &Portfolio, as_of: Option<NaiveDate>) -> Vec<CompositionRow> {
    let as_of = match as_of.or_else(|| portfolio.latest_alternatives_date()) {
        Some(date) => date,
        None => return Vec::new(),
    };

    let mut by_class: BTreeMap<&str, (Decimal, Vec<&str>)> = BTreeMap::new();
    for record in portfolio.alternatives().filter(|r| r.date == as_of) {
        let entry = by_class
            .entry(record.asset_class.as_str())
            .or_insert((Decimal::ZERO, Vec::new()));
        entry.0 += record.end_nav;
        entry.1.push(record.security.as_str());
    }

    let total_nav: Decimal = by_class.values().map(|(nav, _)| *nav).sum();

    let mut rows: Vec<CompositionRow> = by_class
        .into_iter()
        .map(|(asset_class, (nav, securities))| CompositionRow {
            asset_class: asset_class.to_string(),
            total_nav: nav,
            num_securities: securities.into_iter().unique().count(),
            percentage: ratio_pct(nav, total_nav),
        })
        .collect();

    rows.sort_by(|a, b| b.total_nav.cmp(&a.total_nav));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importers::RawHolding;
    use rust_decimal_macros::dec;

    fn holding(date: (i32, u32, u32), class: &str, security: &str, end_nav: Decimal) -> RawHolding {
        RawHolding {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            asset_class: class.to_string(),
            security: security.to_string(),
            beg_nav: end_nav,
            end_nav,
            contributions: Decimal::ZERO,
            distributions: Decimal::ZERO,
            net_investment_income: Decimal::ZERO,
        }
    }

    #[test]
    fn test_composition_sums_and_percentages() {
        let portfolio = Portfolio::classify(vec![
            holding((2024, 3, 31), "Private Equity", "PE-1", dec!(600)),
            holding((2024, 3, 31), "Private Equity", "PE-2", dec!(200)),
            holding((2024, 3, 31), "Real Estate", "RE-1", dec!(200)),
        ]);

        let rows = composition(&portfolio, None);
        assert_eq!(rows.len(), 2);

        // Descending NAV order
        assert_eq!(rows[0].asset_class, "Private Equity");
        assert_eq!(rows[0].total_nav, dec!(800));
        assert_eq!(rows[0].num_securities, 2);
        assert_eq!(rows[0].percentage, dec!(80));
        assert_eq!(rows[1].percentage, dec!(20));

        // Percentages sum to 100, NAV matches the Alternatives total
        let pct_sum: Decimal = rows.iter().map(|r| r.percentage).sum();
        assert_eq!(pct_sum, dec!(100));
        let nav_sum: Decimal = rows.iter().map(|r| r.total_nav).sum();
        assert_eq!(nav_sum, dec!(1000));
    }

    #[test]
    fn test_composition_uses_latest_date_by_default() {
        let portfolio = Portfolio::classify(vec![
            holding((2024, 3, 31), "Private Equity", "PE-1", dec!(100)),
            holding((2024, 6, 30), "Private Equity", "PE-1", dec!(150)),
        ]);

        let rows = composition(&portfolio, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_nav, dec!(150));
    }

    #[test]
    fn test_composition_at_explicit_date() {
        let portfolio = Portfolio::classify(vec![
            holding((2024, 3, 31), "Private Equity", "PE-1", dec!(100)),
            holding((2024, 6, 30), "Private Equity", "PE-1", dec!(150)),
        ]);

        let as_of = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let rows = composition(&portfolio, Some(as_of));
        assert_eq!(rows[0].total_nav, dec!(100));
    }

    #[test]
    fn test_composition_counts_distinct_securities() {
        let portfolio = Portfolio::classify(vec![
            holding((2024, 3, 31), "Hedge Funds", "HF-1", dec!(50)),
            holding((2024, 3, 31), "Hedge Funds", "HF-1", dec!(50)),
            holding((2024, 3, 31), "Hedge Funds", "HF-2", dec!(50)),
        ]);

        let rows = composition(&portfolio, None);
        assert_eq!(rows[0].num_securities, 2);
    }

    #[test]
    fn test_composition_ignores_non_alternatives() {
        let portfolio = Portfolio::classify(vec![
            holding((2024, 3, 31), "Private Equity", "PE-1", dec!(100)),
            holding((2024, 3, 31), "Cash", "CASH-1", dec!(900)),
        ]);

        let rows = composition(&portfolio, None);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].percentage, dec!(100));
    }

    #[test]
    fn test_composition_empty_portfolio() {
        let portfolio = Portfolio::classify(Vec::new());
        assert!(composition(&portfolio, None).is_empty());
    }

    #[test]
    fn test_composition_zero_total_nav_guard() {
        let portfolio = Portfolio::classify(vec![holding(
            (2024, 3, 31),
            "Private Equity",
            "PE-1",
            Decimal::ZERO,
        )]);

        let rows = composition(&portfolio, None);
        assert_eq!(rows[0].percentage, Decimal::ZERO);
    }
}
