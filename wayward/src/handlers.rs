use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use wayward_core::registry;
use wayward_core::report::{self, ReportFormat};
use wayward_engine::journey::JourneyResult;
use wayward_engine::model::Journey;
use wayward_engine::reachability::{AllowedTerminals, EntryPoints};
use wayward_engine::{journey, AnalysisResult, Analyzer, JourneyStatus, NavGraph};

/// Expand a user-supplied path (tilde included) into a concrete path.
pub fn resolve_input_path(raw: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw.to_string_lossy().as_ref()).as_ref())
}

/// Repeatable CLI values override the manifest's declaration; absent flags
/// fall back to it.
pub fn collect_routes_override(args: &ArgMatches, id: &str, fallback: &[String]) -> Vec<String> {
    match args.get_many::<String>(id) {
        Some(values) => values.cloned().collect(),
        None => fallback.to_vec(),
    }
}

/// Render an analysis result in the requested report format.
pub fn render_report(result: &AnalysisResult, format: &ReportFormat, source: &str) -> Result<String> {
    let rendered = match format {
        ReportFormat::Text => report::generate_text_report(result, source),
        ReportFormat::Json => {
            report::generate_json_report(result, source).context("serializing JSON report")?
        }
        ReportFormat::Markdown => report::generate_markdown_report(result, source),
    };
    Ok(rendered)
}

pub fn handle_check(args: &ArgMatches, quiet: bool) -> i32 {
    tracing_subscriber::fmt::init();

    let spinner = if quiet {
        None
    } else {
        Some(progress_spinner("Analyzing navigation graph..."))
    };

    let outcome = run_check(args);

    if let Some(ref pb) = spinner {
        pb.finish_and_clear();
    }

    match outcome {
        Ok((result, rendered)) => {
            match args.get_one::<PathBuf>("output") {
                Some(path) => {
                    if let Err(e) = report::save_report(&rendered, path) {
                        eprintln!(
                            "{} failed to write report to {}: {}",
                            "✗".red().bold(),
                            path.display(),
                            e
                        );
                        return 2;
                    }
                    if !quiet {
                        println!("{} Report saved to {}", "✓".green(), path.display());
                    }
                }
                None => print!("{rendered}"),
            }

            if !quiet {
                print_verdict(&result);
            }

            report::exit_code(&result)
        }
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            2
        }
    }
}

fn run_check(args: &ArgMatches) -> Result<(AnalysisResult, String)> {
    let routes_path = resolve_input_path(args.get_one::<PathBuf>("routes").unwrap());
    let manifest = registry::load_route_manifest(&routes_path)
        .with_context(|| format!("loading route manifest {}", routes_path.display()))?;

    let journeys: Option<Vec<Journey>> = match args.get_one::<PathBuf>("journeys") {
        Some(raw) => {
            let path = resolve_input_path(raw);
            let loaded = registry::load_journey_registry(&path)
                .with_context(|| format!("loading journey registry {}", path.display()))?;
            Some(loaded.journeys)
        }
        None => None,
    };

    let entry_paths = collect_routes_override(args, "entry", &manifest.entry_points);
    let terminal_paths = collect_routes_override(args, "terminal", &manifest.allowed_terminals);

    let graph =
        NavGraph::build(manifest.routes, manifest.links).context("building navigation graph")?;
    let entries = EntryPoints::new(entry_paths).context("configuring entry points")?;
    let analyzer = Analyzer::new(entries).with_terminals(AllowedTerminals::new(terminal_paths));

    let result = analyzer
        .run(&graph, journeys.as_deref())
        .context("analyzing navigation graph")?;

    let format = ReportFormat::from_str(args.get_one::<String>("format").unwrap())
        .unwrap_or(ReportFormat::Text);
    let source = routes_path.display().to_string();
    let rendered = render_report(&result, &format, &source)?;

    Ok((result, rendered))
}

fn print_verdict(result: &AnalysisResult) {
    let journeys_complete = result
        .journeys
        .iter()
        .all(|journey| journey.status == JourneyStatus::Complete);

    println!();
    if result.orphans.is_empty() && journeys_complete {
        println!(
            "{} {} routes analyzed, none orphaned — health {:.1}/10",
            "✓".green().bold(),
            result.route_count(),
            result.health_score
        );
    } else {
        println!(
            "{} {} orphaned, {} incomplete journey(s) — health {:.1}/10",
            "⚠".yellow().bold(),
            result.orphans.len(),
            result
                .journeys
                .iter()
                .filter(|journey| journey.status == JourneyStatus::Partial)
                .count(),
            result.health_score
        );
    }
}

pub fn handle_journeys(args: &ArgMatches, quiet: bool) -> i32 {
    tracing_subscriber::fmt::init();

    match run_journeys(args) {
        Ok(results) => {
            if results.is_empty() {
                if !quiet {
                    println!("No journeys declared.");
                }
                return 0;
            }

            for journey in &results {
                let status = match journey.status {
                    JourneyStatus::Complete => "✓".green().bold(),
                    JourneyStatus::Partial => "⚠".yellow().bold(),
                };
                println!(
                    "{} {}  {:.0}% covered",
                    status,
                    journey.name,
                    journey.coverage * 100.0
                );
                for link in &journey.missing_links {
                    println!(
                        "    missing: {} {} {}",
                        link.from,
                        "->".bright_black(),
                        link.to
                    );
                }
            }

            let all_complete = results
                .iter()
                .all(|journey| journey.status == JourneyStatus::Complete);
            if all_complete { 0 } else { 1 }
        }
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            2
        }
    }
}

fn run_journeys(args: &ArgMatches) -> Result<Vec<JourneyResult>> {
    let routes_path = resolve_input_path(args.get_one::<PathBuf>("routes").unwrap());
    let manifest = registry::load_route_manifest(&routes_path)
        .with_context(|| format!("loading route manifest {}", routes_path.display()))?;

    let journeys_path = resolve_input_path(args.get_one::<PathBuf>("journeys").unwrap());
    let loaded = registry::load_journey_registry(&journeys_path)
        .with_context(|| format!("loading journey registry {}", journeys_path.display()))?;

    let graph =
        NavGraph::build(manifest.routes, manifest.links).context("building navigation graph")?;

    Ok(journey::validate(&graph, &loaded.journeys))
}

fn progress_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(msg.to_string());
    pb
}
