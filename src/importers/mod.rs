// Import module - portfolio workbook parsers

pub mod portfolio_excel;

use anyhow::{anyhow, Result};
use std::path::Path;
use tracing::info;

pub use portfolio_excel::RawHolding;

/// Import portfolio holdings from a spreadsheet file
pub fn import_file<P: AsRef<Path>>(file_path: P) -> Result<Vec<RawHolding>> {
    let path = file_path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| anyhow!("File has no extension"))?
        .to_lowercase();

    info!("Importing portfolio file: {:?} (type: {})", path, extension);

    match extension.as_str() {
        "xlsx" | "xls" => portfolio_excel::parse_portfolio_excel(path),
        _ => Err(anyhow!(
            "Unsupported file format: {}. Supported formats: .xlsx, .xls",
            extension
        )),
    }
}
