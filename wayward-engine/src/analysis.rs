use crate::error::{AnalysisError, Result};
use crate::graph::NavGraph;
use crate::journey::{self, JourneyResult};
use crate::model::Journey;
use crate::reachability::{self, AllowedTerminals, EntryPoints, Reachability};
use crate::score;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::info;

/// The terminal, read-only output of an analysis run.
///
/// `reachable`, `orphans`, and `dead_ends` are disjoint and together cover
/// every route in the graph exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub reachable: BTreeSet<String>,
    pub orphans: BTreeSet<String>,
    pub dead_ends: BTreeSet<String>,
    pub journeys: Vec<JourneyResult>,
    pub health_score: f64,
}

impl AnalysisResult {
    pub fn route_count(&self) -> usize {
        self.reachable.len() + self.orphans.len() + self.dead_ends.len()
    }
}

/// Façade over the analysis pipeline: reachability, journey validation,
/// scoring, and result assembly.
pub struct Analyzer {
    entries: EntryPoints,
    terminals: AllowedTerminals,
    deadline: Option<Instant>,
}

impl Analyzer {
    pub fn new(entries: EntryPoints) -> Self {
        Self {
            entries,
            terminals: AllowedTerminals::none(),
            deadline: None,
        }
    }

    pub fn with_terminals(mut self, terminals: AllowedTerminals) -> Self {
        self.terminals = terminals;
        self
    }

    /// Bound analysis wall-clock time; checked at each node-visit boundary
    /// of the traversal.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Run the full pipeline against an immutable graph.
    ///
    /// Pass `None` for `journeys` when no journey registry was supplied;
    /// the health score then omits the journey penalty term. An empty slice
    /// is treated the same way, avoiding a zero-journey average.
    pub fn run(&self, graph: &NavGraph, journeys: Option<&[Journey]>) -> Result<AnalysisResult> {
        info!(
            routes = graph.node_count(),
            links = graph.edge_count(),
            entry_points = self.entries.len(),
            "starting navigation analysis"
        );

        let reachability =
            reachability::analyze(graph, &self.entries, &self.terminals, self.deadline)?;
        verify_partition(graph, &reachability)?;

        let journey_results = journeys
            .map(|journeys| journey::validate(graph, journeys))
            .unwrap_or_default();
        let avg_coverage = average_coverage(&journey_results);

        let health_score = score::health_score(
            reachability.orphans.len(),
            reachability.dead_ends.len(),
            avg_coverage,
        );

        info!(
            orphans = reachability.orphans.len(),
            dead_ends = reachability.dead_ends.len(),
            journeys = journey_results.len(),
            health_score,
            "analysis complete"
        );

        Ok(AnalysisResult {
            reachable: reachability.reachable,
            orphans: reachability.orphans,
            dead_ends: reachability.dead_ends,
            journeys: journey_results,
            health_score,
        })
    }
}

fn average_coverage(results: &[JourneyResult]) -> Option<f64> {
    if results.is_empty() {
        return None;
    }
    let total: f64 = results.iter().map(|result| result.coverage).sum();
    Some(total / results.len() as f64)
}

/// Every route must land in exactly one of the three sets. A violation is a
/// defect in the engine itself and aborts the run; it is never silently
/// corrected.
fn verify_partition(graph: &NavGraph, reachability: &Reachability) -> Result<()> {
    for path in graph.paths() {
        let memberships = reachability.reachable.contains(path) as usize
            + reachability.orphans.contains(path) as usize
            + reachability.dead_ends.contains(path) as usize;
        if memberships != 1 {
            return Err(AnalysisError::InvariantViolation(format!(
                "route {path} classified {memberships} times"
            )));
        }
    }

    let classified = reachability.reachable.len()
        + reachability.orphans.len()
        + reachability.dead_ends.len();
    if classified != graph.node_count() {
        return Err(AnalysisError::InvariantViolation(format!(
            "{classified} routes classified, graph declares {}",
            graph.node_count()
        )));
    }

    Ok(())
}
