// Dashboard module - payload assembly and static document generation

pub mod payload;
pub mod render;

pub use payload::DashboardData;
pub use render::render;

use anyhow::Result;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::DashboardError;
use crate::importers;
use crate::portfolio::Portfolio;
use crate::reports::{self, CompositionRow, SummaryMetrics};

/// Default output filename for the generated dashboard
pub const DEFAULT_OUTPUT: &str = "alternatives_dashboard.html";

/// What a generation run produced, for display by the caller
#[derive(Debug)]
pub struct GenerateSummary {
    pub total_records: usize,
    pub alternatives_records: usize,
    pub data_period: String,
    pub metrics: SummaryMetrics,
    pub composition: Vec<CompositionRow>,
    pub output_path: PathBuf,
}

/// Run the full pipeline: load, classify, aggregate, render, write.
///
/// The payload is stamped with the current local time; everything after
/// that stamp is deterministic. Any existing file at `output` is
/// overwritten.
pub fn generate<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<GenerateSummary> {
    let raw = importers::import_file(input)?;
    let portfolio = Portfolio::classify(raw);

    let data = DashboardData::build(&portfolio, Local::now().naive_local());
    write_dashboard(&data, output.as_ref())?;

    Ok(GenerateSummary {
        total_records: portfolio.len(),
        alternatives_records: portfolio.alternatives().count(),
        data_period: data.metadata.data_period.clone(),
        metrics: reports::summary_metrics(&portfolio),
        composition: reports::composition(&portfolio, None),
        output_path: output.as_ref().to_path_buf(),
    })
}

/// Render the payload and write the document to `path`, overwriting any
/// existing file
pub fn write_dashboard(data: &DashboardData, path: &Path) -> Result<()> {
    let html = render(data)?;

    fs::write(path, html)
        .map_err(|e| DashboardError::Write(format!("{}: {}", path.display(), e)))?;

    info!("Dashboard saved to {:?}", path);
    Ok(())
}
