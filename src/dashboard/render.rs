//! Dashboard rendering
//!
//! Fills the embedded HTML template with the payload JSON, the summary
//! metric cards, and the two server-rendered tables. Rendering is a pure
//! function of the payload: the same `DashboardData` always produces the
//! same document.

use anyhow::Result;

use crate::dashboard::payload::{CompositionEntry, DashboardData, KeyMetrics, PerformanceEntry};
use crate::utils::format_thousands;

const TEMPLATE: &str = include_str!("template.html");

const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;

/// Render the complete dashboard document
pub fn render(data: &DashboardData) -> Result<String> {
    let payload_json = serde_json::to_string(data)?;

    let mut tpl = TEMPLATE.to_string();
    tpl = tpl.replace("{{data_period}}", &data.metadata.data_period);
    tpl = tpl.replace("{{generated_date}}", &data.metadata.generated_date);
    tpl = tpl.replace(
        "{{alternatives_records}}",
        &format_thousands(data.metadata.alternatives_records),
    );
    tpl = tpl.replace("{{metric_cards}}", &build_metric_cards(&data.key_metrics));
    tpl = tpl.replace(
        "{{composition_table}}",
        &build_composition_table(&data.composition),
    );
    tpl = tpl.replace(
        "{{performance_table}}",
        &build_performance_table(&data.performance_by_asset_class),
    );
    tpl = tpl.replace("{{payload_json}}", &payload_json);

    Ok(tpl)
}

fn build_metric_cards(metrics: &KeyMetrics) -> String {
    let as_of = metrics.as_of_date.as_deref().unwrap_or("-");

    let mut cards = String::new();
    cards.push_str(&format!(
        "<div class=\"metric-card\">\
         <h3>Total End NAV</h3>\
         <div class=\"value\">${:.2}B</div>\
         <div class=\"subtext\">Quarter Ended: {}</div>\
         </div>",
        metrics.total_nav / BILLION,
        as_of
    ));
    cards.push_str(&format!(
        "<div class=\"metric-card\">\
         <h3>Weighted Return</h3>\
         <div class=\"value\">{:.2}%</div>\
         <div class=\"subtext\">Most Recent Quarter</div>\
         </div>",
        metrics.weighted_return_pct
    ));
    cards.push_str(&format!(
        "<div class=\"metric-card\">\
         <h3>Total Securities</h3>\
         <div class=\"value\">{}</div>\
         <div class=\"subtext\">Across {} Asset Classes</div>\
         </div>",
        metrics.num_securities, metrics.num_asset_classes
    ));
    cards.push_str(&format!(
        "<div class=\"metric-card\">\
         <h3>Net Investment Income</h3>\
         <div class=\"value\">${:.1}M</div>\
         <div class=\"subtext\">Most Recent Quarter</div>\
         </div>",
        metrics.total_income / MILLION
    ));
    cards
}

fn build_composition_table(rows: &[CompositionEntry]) -> String {
    let mut html = String::new();
    html.push_str(
        "<table class=\"data-table\"><thead><tr>\
         <th>Asset Class</th>\
         <th>Total NAV</th>\
         <th>% of Portfolio</th>\
         <th>Number of Securities</th>\
         </tr></thead><tbody>",
    );

    for row in rows {
        html.push_str(&format!(
            "<tr>\
             <td><strong>{}</strong></td>\
             <td>${:.3}B</td>\
             <td>{:.1}%</td>\
             <td>{}</td>\
             </tr>",
            escape_html(&row.asset_class),
            row.total_nav / BILLION,
            row.percentage,
            row.num_securities
        ));
    }

    html.push_str("</tbody></table>");
    html
}

fn build_performance_table(rows: &[PerformanceEntry]) -> String {
    let mut html = String::new();
    html.push_str(
        "<table class=\"data-table\"><thead><tr>\
         <th>Asset Class</th>\
         <th>Ending NAV</th>\
         <th>Return %</th>\
         <th>Investment Income</th>\
         <th>Contributions</th>\
         <th>Distributions</th>\
         </tr></thead><tbody>",
    );

    for row in rows {
        let return_class = if row.return_pct >= 0.0 {
            "positive"
        } else {
            "negative"
        };
        html.push_str(&format!(
            "<tr>\
             <td><strong>{}</strong></td>\
             <td>${:.3}B</td>\
             <td class=\"{}\">{:.2}%</td>\
             <td>${:.2}M</td>\
             <td>${:.2}M</td>\
             <td>${:.2}M</td>\
             </tr>",
            escape_html(&row.asset_class),
            row.end_nav / BILLION,
            return_class,
            row.return_pct,
            row.net_investment_income / MILLION,
            row.contributions / MILLION,
            row.distributions / MILLION
        ));
    }

    html.push_str("</tbody></table>");
    html
}

/// Minimal escaping for asset class names landing in table cells
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
