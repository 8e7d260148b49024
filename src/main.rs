use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};
use tracing::warn;

use altsdash::dashboard::{generate, GenerateSummary, DEFAULT_OUTPUT};
use altsdash::platform;
use altsdash::utils::{format_billions, format_millions, format_percent, format_thousands};

#[derive(Parser)]
#[command(
    name = "altsdash",
    version,
    about = "Generate the Alternatives portfolio dashboard from a quarterly workbook"
)]
struct Cli {
    /// Path to the portfolio workbook (prompted for when omitted)
    input: Option<PathBuf>,

    /// Output path for the generated dashboard
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Skip opening the dashboard in the default viewer
    #[arg(long)]
    no_open: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    // Initialize logging (filter from RUST_LOG, quiet by default)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let input = match cli.input {
        Some(path) => path,
        None => platform::prompt_for_input_path()?,
    };

    let summary = generate(&input, &cli.output)?;
    print_summary(&summary);

    if !cli.no_open {
        if let Err(e) = platform::open_in_viewer(&summary.output_path) {
            warn!("Could not open dashboard in viewer: {:#}", e);
            println!(
                "\n{} Open the dashboard manually: {}",
                "ℹ".blue().bold(),
                summary.output_path.display()
            );
        }
    }

    Ok(())
}

/// Print the run summary: classification counts, key metrics, and a
/// composition preview table
fn print_summary(summary: &GenerateSummary) {
    println!(
        "\n{} Loaded {} records ({} Alternatives), period {}\n",
        "✓".green().bold(),
        format_thousands(summary.total_records),
        format_thousands(summary.alternatives_records),
        summary.data_period
    );

    let metrics = &summary.metrics;
    if let Some(as_of) = metrics.as_of_date {
        println!("Alternatives snapshot as of {}:", as_of);
        println!("  Total End NAV:    {}", format_billions(metrics.total_nav, 2));
        println!(
            "  Weighted Return:  {}",
            format_percent(metrics.weighted_return_pct, 2)
        );
        println!(
            "  Investment Income: {}",
            format_millions(metrics.total_income, 1)
        );
        println!(
            "  Securities:       {} across {} asset classes\n",
            metrics.num_securities, metrics.num_asset_classes
        );
    } else {
        println!("{} No Alternatives records found\n", "ℹ".blue().bold());
    }

    #[derive(Tabled)]
    struct CompositionPreview {
        #[tabled(rename = "Asset Class")]
        asset_class: String,
        #[tabled(rename = "Total NAV")]
        total_nav: String,
        #[tabled(rename = "% of Portfolio")]
        percentage: String,
        #[tabled(rename = "Securities")]
        securities: String,
    }

    if !summary.composition.is_empty() {
        let preview: Vec<CompositionPreview> = summary
            .composition
            .iter()
            .map(|row| CompositionPreview {
                asset_class: row.asset_class.clone(),
                total_nav: format_billions(row.total_nav, 3),
                percentage: format_percent(row.percentage, 1),
                securities: row.num_securities.to_string(),
            })
            .collect();

        let table = Table::new(preview).with(Style::rounded()).to_string();
        println!("{}", table);
    }

    println!(
        "\n{} Dashboard saved to: {}",
        "✓".green().bold(),
        summary.output_path.display()
    );
}
