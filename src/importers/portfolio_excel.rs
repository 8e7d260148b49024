use anyhow::{Context, Result};
use calamine::{open_workbook, Data, DataType, Reader, Xlsx};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::DashboardError;

/// Sheet the portfolio table must live on
pub const PORTFOLIO_SHEET: &str = "FRL_Portfolio";

/// Raw holding row parsed from the workbook, before classification
#[derive(Debug, Clone)]
pub struct RawHolding {
    pub date: NaiveDate,
    pub asset_class: String,
    pub security: String,
    pub beg_nav: Decimal,
    pub end_nav: Decimal,
    pub contributions: Decimal,
    pub distributions: Decimal,
    pub net_investment_income: Decimal,
}

/// Column positions for the required portfolio columns
#[derive(Debug, Clone)]
struct ColumnMapping {
    date: Option<usize>,
    asset_class: Option<usize>,
    security: Option<usize>,
    beg_nav: Option<usize>,
    end_nav: Option<usize>,
    contributions: Option<usize>,
    distributions: Option<usize>,
    net_investment_income: Option<usize>,
}

impl ColumnMapping {
    /// Create column mapping by scanning the header row.
    ///
    /// Header match is case-insensitive on the normalized column names the
    /// source workbook uses (Date, Asset_Class, Security, Beg_NAV, End_NAV,
    /// Contributions, Distributions, Net_Investment_Income).
    fn from_header(header: &[Data]) -> Self {
        let mut mapping = ColumnMapping {
            date: None,
            asset_class: None,
            security: None,
            beg_nav: None,
            end_nav: None,
            contributions: None,
            distributions: None,
            net_investment_income: None,
        };

        for (idx, cell) in header.iter().enumerate() {
            let text = cell.to_string().trim().to_lowercase();
            match text.as_str() {
                "date" => mapping.date = Some(idx),
                "asset_class" => mapping.asset_class = Some(idx),
                "security" => mapping.security = Some(idx),
                "beg_nav" => mapping.beg_nav = Some(idx),
                "end_nav" => mapping.end_nav = Some(idx),
                "contributions" => mapping.contributions = Some(idx),
                "distributions" => mapping.distributions = Some(idx),
                "net_investment_income" => mapping.net_investment_income = Some(idx),
                _ => {}
            }
        }

        mapping
    }

    /// Names of required columns absent from the header
    fn missing_columns(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push("Date");
        }
        if self.asset_class.is_none() {
            missing.push("Asset_Class");
        }
        if self.security.is_none() {
            missing.push("Security");
        }
        if self.beg_nav.is_none() {
            missing.push("Beg_NAV");
        }
        if self.end_nav.is_none() {
            missing.push("End_NAV");
        }
        if self.contributions.is_none() {
            missing.push("Contributions");
        }
        if self.distributions.is_none() {
            missing.push("Distributions");
        }
        if self.net_investment_income.is_none() {
            missing.push("Net_Investment_Income");
        }
        missing
    }
}

/// Parse the portfolio workbook into raw holdings.
///
/// Load failures are fatal: a missing `FRL_Portfolio` sheet, missing
/// required columns, or an unparseable date or amount on any data row all
/// abort the run so no dashboard is built from partial data. Fully blank
/// rows are skipped.
pub fn parse_portfolio_excel<P: AsRef<Path>>(file_path: P) -> Result<Vec<RawHolding>> {
    let path = file_path.as_ref();
    info!("Parsing portfolio workbook: {:?}", path);

    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open workbook {:?}", path))?;

    if !workbook
        .sheet_names()
        .iter()
        .any(|n| n.as_str() == PORTFOLIO_SHEET)
    {
        return Err(DashboardError::DataLoad(format!(
            "sheet '{}' not found in workbook (sheets present: {})",
            PORTFOLIO_SHEET,
            workbook.sheet_names().join(", ")
        ))
        .into());
    }

    let range = workbook
        .worksheet_range(PORTFOLIO_SHEET)
        .context("Failed to read worksheet")?;

    let mut rows = range.rows().enumerate();

    let header = match rows.next() {
        Some((_, header)) => header,
        None => {
            return Err(DashboardError::DataLoad(format!(
                "sheet '{}' is empty; no header row with the required columns",
                PORTFOLIO_SHEET
            ))
            .into())
        }
    };

    let mapping = ColumnMapping::from_header(header);
    let missing = mapping.missing_columns();
    if !missing.is_empty() {
        return Err(DashboardError::DataLoad(format!(
            "required columns missing from '{}': {}",
            PORTFOLIO_SHEET,
            missing.join(", ")
        ))
        .into());
    }
    debug!("Column mapping: {:?}", mapping);

    let mut holdings = Vec::new();

    for (idx, row) in rows {
        if row.iter().all(|cell| cell.is_empty()) {
            continue;
        }

        let holding = parse_row(row, &mapping).map_err(|e| {
            DashboardError::DataLoad(format!("row {}: {}", idx + 1, e))
        })?;
        holdings.push(holding);
    }

    info!("Parsed {} holdings from '{}'", holdings.len(), PORTFOLIO_SHEET);
    Ok(holdings)
}

/// Parse a single data row into a RawHolding
fn parse_row(row: &[Data], mapping: &ColumnMapping) -> Result<RawHolding> {
    let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i));

    let date_cell = cell(mapping.date).unwrap_or(&Data::Empty);
    let date = parse_date(date_cell)?;

    let asset_class = cell(mapping.asset_class)
        .map(|c| c.to_string().trim().to_string())
        .unwrap_or_default();
    let security = cell(mapping.security)
        .map(|c| c.to_string().trim().to_string())
        .unwrap_or_default();

    Ok(RawHolding {
        date,
        asset_class,
        security,
        beg_nav: parse_amount(cell(mapping.beg_nav))?,
        end_nav: parse_amount(cell(mapping.end_nav))?,
        contributions: parse_amount(cell(mapping.contributions))?,
        distributions: parse_amount(cell(mapping.distributions))?,
        net_investment_income: parse_amount(cell(mapping.net_investment_income))?,
    })
}

/// Parse date from Excel serial datetimes or common string formats
fn parse_date(cell: &Data) -> Result<NaiveDate> {
    match cell {
        Data::DateTime(dt) => {
            let days_since_epoch = dt.as_f64().floor() as i64;
            let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
                .ok_or_else(|| anyhow::anyhow!("Invalid Excel epoch"))?;
            excel_epoch
                .checked_add_signed(chrono::Duration::days(days_since_epoch))
                .ok_or_else(|| anyhow::anyhow!("Date overflow"))
        }
        _ => {
            let date_str = cell.to_string();
            let trimmed = date_str.trim();

            for format in ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"] {
                if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                    return Ok(date);
                }
            }

            Err(anyhow::anyhow!("Could not parse date: {}", date_str))
        }
    }
}

/// Parse a monetary amount. Blank cells read as zero; strings may carry
/// currency decoration ($, commas, spaces).
fn parse_amount(cell: Option<&Data>) -> Result<Decimal> {
    let cell = match cell {
        Some(c) => c,
        None => return Ok(Decimal::ZERO),
    };

    match cell {
        Data::Empty => Ok(Decimal::ZERO),
        Data::Int(i) => Ok(Decimal::from(*i)),
        Data::Float(f) => Decimal::from_f64_retain(*f)
            .ok_or_else(|| anyhow::anyhow!("Invalid decimal: {}", f)),
        _ => {
            let text = cell
                .to_string()
                .replace('$', "")
                .replace(',', "")
                .replace(' ', "");

            if text.is_empty() {
                return Ok(Decimal::ZERO);
            }

            Decimal::from_str(&text)
                .with_context(|| format!("Failed to parse amount: {}", cell))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_date_iso_format() {
        let result = parse_date(&Data::String("2024-03-31".to_string())).unwrap();
        assert_eq!(result, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn test_parse_date_us_format() {
        let result = parse_date(&Data::String("03/31/2024".to_string())).unwrap();
        assert_eq!(result, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date(&Data::String("Q1 2024".to_string())).is_err());
    }

    #[test]
    fn test_parse_amount_currency_decoration() {
        let cell = Data::String("$1,234,567.89".to_string());
        assert_eq!(parse_amount(Some(&cell)).unwrap(), dec!(1234567.89));
    }

    #[test]
    fn test_parse_amount_blank_is_zero() {
        assert_eq!(parse_amount(Some(&Data::Empty)).unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount(None).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_negative_float() {
        let cell = Data::Float(-250.5);
        assert_eq!(parse_amount(Some(&cell)).unwrap(), dec!(-250.5));
    }

    #[test]
    fn test_column_mapping_reports_missing() {
        let header = vec![
            Data::String("Date".to_string()),
            Data::String("Asset_Class".to_string()),
            Data::String("Security".to_string()),
        ];
        let mapping = ColumnMapping::from_header(&header);
        let missing = mapping.missing_columns();
        assert!(missing.contains(&"Beg_NAV"));
        assert!(missing.contains(&"End_NAV"));
        assert!(missing.contains(&"Net_Investment_Income"));
        assert!(!missing.contains(&"Date"));
    }

    #[test]
    fn test_column_mapping_is_case_insensitive() {
        let header = vec![
            Data::String("DATE".to_string()),
            Data::String("asset_class".to_string()),
        ];
        let mapping = ColumnMapping::from_header(&header);
        assert_eq!(mapping.date, Some(0));
        assert_eq!(mapping.asset_class, Some(1));
    }
}
