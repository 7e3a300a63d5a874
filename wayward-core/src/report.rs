// Report generation from an analysis result

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use wayward_engine::journey::{JourneyResult, JourneyStatus, MissingLinkCause};
use wayward_engine::AnalysisResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "markdown" | "md" => Some(ReportFormat::Markdown),
            _ => None,
        }
    }
}

/// Conventional CLI exit code for an analysis that ran to completion:
/// 0 when no route is orphaned and every journey is complete, 1 otherwise.
/// Configuration and invariant errors never reach this function; the caller
/// maps those to 2.
pub fn exit_code(result: &AnalysisResult) -> i32 {
    let journeys_complete = result
        .journeys
        .iter()
        .all(|journey| journey.status == JourneyStatus::Complete);

    if result.orphans.is_empty() && journeys_complete {
        0
    } else {
        1
    }
}

pub fn generate_text_report(result: &AnalysisResult, source: &str) -> String {
    let mut report = String::new();

    // Header
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("                        WAYWARD NAVIGATION REPORT\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    report.push_str(&format!("Source:        {}\n", source));
    report.push_str(&format!("Routes:        {}\n", result.route_count()));
    report.push_str(&format!("Reachable:     {}\n", result.reachable.len()));
    report.push_str(&format!("Orphans:       {}\n", result.orphans.len()));
    report.push_str(&format!("Dead ends:     {}\n", result.dead_ends.len()));
    report.push_str(&format!(
        "Health score:  {:.1} / 10\n",
        result.health_score
    ));
    report.push('\n');

    if !result.orphans.is_empty() {
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        report.push_str("ORPHANED ROUTES\n");
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
        report.push_str("Declared but unreachable from any entry point:\n\n");
        for path in &result.orphans {
            report.push_str(&format!("  [ORPHAN]   {}\n", path));
        }
        report.push('\n');
    }

    if !result.dead_ends.is_empty() {
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        report.push_str("DEAD-END ROUTES\n");
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
        report.push_str("Reachable but offering no way onward:\n\n");
        for path in &result.dead_ends {
            report.push_str(&format!("  [DEAD END] {}\n", path));
        }
        report.push('\n');
    }

    if !result.journeys.is_empty() {
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        report.push_str("JOURNEYS\n");
        report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

        for journey in &result.journeys {
            report.push_str(&format_journey_lines(journey));
            report.push('\n');
        }
    }

    // Footer
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("                              End of Report\n");
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    report.push_str("\nGenerated by Wayward - navigation graph validation\n\n");

    report
}

fn format_journey_lines(journey: &JourneyResult) -> String {
    let mut lines = String::new();

    lines.push_str(&format!(
        "[{}] {}  ({:.0}% covered)\n",
        journey.status.as_str().to_uppercase(),
        journey.name,
        journey.coverage * 100.0
    ));

    for link in &journey.missing_links {
        let note = match link.cause {
            MissingLinkCause::AbsentEdge => "no link",
            MissingLinkCause::UnknownRoute => "unknown route",
        };
        lines.push_str(&format!(
            "  missing: {} -> {}  ({})\n",
            link.from, link.to, note
        ));
    }

    lines
}

pub fn generate_json_report(
    result: &AnalysisResult,
    source: &str,
) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": "Wayward",
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": chrono::Utc::now().to_rfc3339(),
                "format": "json",
                "source": source,
            },
            "summary": {
                "total_routes": result.route_count(),
                "reachable": result.reachable.len(),
                "orphans": result.orphans.len(),
                "dead_ends": result.dead_ends.len(),
                "journeys_checked": result.journeys.len(),
                "health_score": result.health_score,
            },
            "routes": {
                "reachable": result.reachable,
                "orphans": result.orphans,
                "dead_ends": result.dead_ends,
            },
            "journeys": result.journeys,
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn generate_markdown_report(result: &AnalysisResult, source: &str) -> String {
    let mut report = String::new();

    report.push_str("# Wayward Navigation Report\n\n");
    report.push_str(&format!("Source: `{}`\n\n", source));

    report.push_str("## Summary\n\n");
    report.push_str(&format!("- Routes: {}\n", result.route_count()));
    report.push_str(&format!("- Reachable: {}\n", result.reachable.len()));
    report.push_str(&format!("- Orphans: {}\n", result.orphans.len()));
    report.push_str(&format!("- Dead ends: {}\n", result.dead_ends.len()));
    report.push_str(&format!(
        "- Health score: **{:.1} / 10**\n\n",
        result.health_score
    ));

    if !result.orphans.is_empty() {
        report.push_str("## Orphaned routes\n\n");
        for path in &result.orphans {
            report.push_str(&format!("- `{}`\n", path));
        }
        report.push('\n');
    }

    if !result.dead_ends.is_empty() {
        report.push_str("## Dead-end routes\n\n");
        for path in &result.dead_ends {
            report.push_str(&format!("- `{}`\n", path));
        }
        report.push('\n');
    }

    if !result.journeys.is_empty() {
        report.push_str("## Journeys\n\n");
        report.push_str("| Journey | Status | Coverage | Missing links |\n");
        report.push_str("|---------|--------|----------|---------------|\n");
        for journey in &result.journeys {
            let missing = if journey.missing_links.is_empty() {
                "—".to_string()
            } else {
                journey
                    .missing_links
                    .iter()
                    .map(|link| format!("`{}` → `{}`", link.from, link.to))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            report.push_str(&format!(
                "| {} | {} | {:.0}% | {} |\n",
                journey.name,
                journey.status.as_str(),
                journey.coverage * 100.0,
                missing
            ));
        }
        report.push('\n');
    }

    report
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
