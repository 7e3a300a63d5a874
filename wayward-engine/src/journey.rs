use crate::graph::NavGraph;
use crate::model::Journey;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyStatus {
    Complete,
    Partial,
}

impl JourneyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyStatus::Complete => "complete",
            JourneyStatus::Partial => "partial",
        }
    }
}

/// Why a consecutive step pair is not backed by the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingLinkCause {
    /// Both steps are declared routes but no directed edge connects them.
    AbsentEdge,
    /// At least one step names a route absent from the graph, e.g. a journey
    /// referencing a since-removed page. A data-quality finding, not an error.
    UnknownRoute,
}

/// A consecutive step pair present in a journey but absent from the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingLink {
    pub from: String,
    pub to: String,
    pub cause: MissingLinkCause,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneyResult {
    pub name: String,
    pub status: JourneyStatus,
    pub coverage: f64,
    pub missing_links: Vec<MissingLink>,
}

/// Check every declared journey against the graph.
///
/// Each journey is validated independently; one broken journey never
/// prevents reporting on the rest.
pub fn validate(graph: &NavGraph, journeys: &[Journey]) -> Vec<JourneyResult> {
    journeys
        .iter()
        .map(|journey| validate_journey(graph, journey))
        .collect()
}

/// Walk a journey's consecutive step pairs, checking each for a directed
/// edge in the graph. Direction matters; a reverse edge does not satisfy a
/// pair. Missing links are listed in walk order, so the first entry is the
/// first break encountered from the journey's start.
pub fn validate_journey(graph: &NavGraph, journey: &Journey) -> JourneyResult {
    let total = journey.steps.len().saturating_sub(1);
    let mut missing_links = Vec::new();

    for pair in journey.steps.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        if !graph.contains(from) || !graph.contains(to) {
            missing_links.push(MissingLink {
                from: from.clone(),
                to: to.clone(),
                cause: MissingLinkCause::UnknownRoute,
            });
        } else if !graph.has_edge(from, to) {
            missing_links.push(MissingLink {
                from: from.clone(),
                to: to.clone(),
                cause: MissingLinkCause::AbsentEdge,
            });
        }
    }

    let satisfied = total - missing_links.len();
    let coverage = if total == 0 {
        // The registry loader rejects single-step journeys; a pairless
        // journey is vacuously covered.
        1.0
    } else {
        satisfied as f64 / total as f64
    };
    let status = if missing_links.is_empty() {
        JourneyStatus::Complete
    } else {
        JourneyStatus::Partial
    };

    JourneyResult {
        name: journey.name.clone(),
        status,
        coverage,
        missing_links,
    }
}
