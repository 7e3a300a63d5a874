use crate::error::{AnalysisError, Result};
use crate::graph::NavGraph;
use petgraph::Direction;
use std::collections::{BTreeSet, HashSet, VecDeque};
use std::time::Instant;
use tracing::debug;

/// Route paths designated as traversal roots. Must be non-empty; an empty
/// entry set is a configuration error, not an implicit "all nodes are roots".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPoints {
    paths: BTreeSet<String>,
}

impl EntryPoints {
    pub fn new(paths: impl IntoIterator<Item = String>) -> Result<Self> {
        let paths: BTreeSet<String> = paths.into_iter().collect();
        if paths.is_empty() {
            return Err(AnalysisError::EmptyEntryPoints);
        }
        Ok(Self { paths })
    }

    /// The conventional single entry point, `/`.
    pub fn root() -> Self {
        Self {
            paths: BTreeSet::from(["/".to_string()]),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Route paths permitted to have zero outbound edges without being flagged
/// as dead-ends (logout, error pages, and the like). May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedTerminals {
    paths: BTreeSet<String>,
}

impl AllowedTerminals {
    pub fn new(paths: impl IntoIterator<Item = String>) -> Self {
        Self {
            paths: paths.into_iter().collect(),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// The conventional terminal pages: logout and error routes.
    pub fn conventional() -> Self {
        Self::new(
            ["/logout", "/error", "/404", "/500"]
                .into_iter()
                .map(String::from),
        )
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

/// Classification of every route into exactly one of three disjoint sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Reachability {
    pub reachable: BTreeSet<String>,
    pub orphans: BTreeSet<String>,
    pub dead_ends: BTreeSet<String>,
}

/// Traverse the graph from the union of all entry points and classify every
/// route as reachable, orphaned, or a dead-end.
///
/// Orphan status is about inbound reachability only; a route with outbound
/// edges but no inbound path from any entry point is still an orphan.
/// Dead-ends are reachable routes with no outbound edges, excluding allowed
/// terminals; unreachable routes are reported as orphans, never dead-ends.
///
/// The optional `deadline` is checked at each node-visit boundary so a
/// caller embedding the engine can bound analysis time on adversarially
/// large graphs.
pub fn analyze(
    graph: &NavGraph,
    entries: &EntryPoints,
    terminals: &AllowedTerminals,
    deadline: Option<Instant>,
) -> Result<Reachability> {
    let mut frontier = VecDeque::with_capacity(entries.len());
    let mut visited = HashSet::with_capacity(graph.node_count());

    for path in entries.iter() {
        let Some(ix) = graph.index_of(path) else {
            return Err(AnalysisError::UnknownEntryPoint {
                path: path.to_string(),
            });
        };
        if visited.insert(ix) {
            frontier.push_back(ix);
        }
    }

    // Breadth-first from all entry points at once. Only set membership
    // matters, so the order is immaterial; the visited set guards against
    // cycles.
    while let Some(ix) = frontier.pop_front() {
        if let Some(deadline) = deadline
            && Instant::now() >= deadline
        {
            return Err(AnalysisError::Timeout {
                visited: visited.len(),
            });
        }
        for next in graph.inner().neighbors_directed(ix, Direction::Outgoing) {
            if visited.insert(next) {
                frontier.push_back(next);
            }
        }
    }

    let mut reachable = BTreeSet::new();
    let mut orphans = BTreeSet::new();
    let mut dead_ends = BTreeSet::new();

    for ix in graph.inner().node_indices() {
        let path = &graph.inner()[ix].path;
        if !visited.contains(&ix) {
            orphans.insert(path.clone());
        } else if graph
            .inner()
            .neighbors_directed(ix, Direction::Outgoing)
            .next()
            .is_none()
            && !terminals.contains(path)
        {
            dead_ends.insert(path.clone());
        } else {
            reachable.insert(path.clone());
        }
    }

    debug!(
        reachable = reachable.len(),
        orphans = orphans.len(),
        dead_ends = dead_ends.len(),
        "reachability analysis complete"
    );

    Ok(Reachability {
        reachable,
        orphans,
        dead_ends,
    })
}
