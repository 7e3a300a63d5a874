use crate::error::{AnalysisError, Result};
use crate::model::{LinkEdge, LinkKind, RouteNode};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// The assembled navigation graph. Immutable once built; every later stage
/// of the pipeline borrows it read-only.
///
/// Nodes and edges live in a petgraph `DiGraph`, which gives both adjacency
/// directions; `index` maps route paths to node indices for O(1) average
/// lookup.
#[derive(Debug)]
pub struct NavGraph {
    graph: DiGraph<RouteNode, LinkKind>,
    index: HashMap<String, NodeIndex>,
}

impl NavGraph {
    /// Assemble a graph from extracted route and link facts.
    ///
    /// Rejects duplicate route paths and edges whose endpoints are not
    /// declared routes. Exact duplicate edges (same from, to, kind) are
    /// deduplicated silently; independent extractions of the same link are
    /// expected.
    pub fn build(nodes: Vec<RouteNode>, edges: Vec<LinkEdge>) -> Result<Self> {
        let mut graph = DiGraph::with_capacity(nodes.len(), edges.len());
        let mut index = HashMap::with_capacity(nodes.len());

        for node in nodes {
            if index.contains_key(&node.path) {
                return Err(AnalysisError::DuplicateNode { path: node.path });
            }
            let path = node.path.clone();
            let ix = graph.add_node(node);
            index.insert(path, ix);
        }

        let mut seen: HashSet<(NodeIndex, NodeIndex, LinkKind)> =
            HashSet::with_capacity(edges.len());
        for edge in edges {
            let LinkEdge { from, to, kind } = edge;
            let Some(&source) = index.get(&from) else {
                return Err(AnalysisError::DanglingEdge {
                    missing: from.clone(),
                    from,
                    to,
                });
            };
            let Some(&target) = index.get(&to) else {
                return Err(AnalysisError::DanglingEdge {
                    missing: to.clone(),
                    from,
                    to,
                });
            };
            if seen.insert((source, target, kind)) {
                graph.add_edge(source, target, kind);
            }
        }

        debug!(
            routes = graph.node_count(),
            links = graph.edge_count(),
            "navigation graph built"
        );

        Ok(Self { graph, index })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    pub fn route(&self, path: &str) -> Option<&RouteNode> {
        self.index
            .get(path)
            .and_then(|&ix| self.graph.node_weight(ix))
    }

    /// Iterate over every declared route path.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(|node| node.path.as_str())
    }

    /// Whether a directed edge `from -> to` exists, regardless of link kind.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&source), Some(&target)) => self.graph.find_edge(source, target).is_some(),
            _ => false,
        }
    }

    pub fn successors(&self, path: &str) -> Vec<&str> {
        self.adjacent(path, Direction::Outgoing)
    }

    pub fn predecessors(&self, path: &str) -> Vec<&str> {
        self.adjacent(path, Direction::Incoming)
    }

    pub fn out_degree(&self, path: &str) -> usize {
        self.index
            .get(path)
            .map(|&ix| {
                self.graph
                    .neighbors_directed(ix, Direction::Outgoing)
                    .count()
            })
            .unwrap_or(0)
    }

    fn adjacent(&self, path: &str, direction: Direction) -> Vec<&str> {
        let Some(&ix) = self.index.get(path) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(ix, direction)
            .filter_map(|adjacent| self.graph.node_weight(adjacent))
            .map(|node| node.path.as_str())
            .collect()
    }

    pub(crate) fn index_of(&self, path: &str) -> Option<NodeIndex> {
        self.index.get(path).copied()
    }

    pub(crate) fn inner(&self) -> &DiGraph<RouteNode, LinkKind> {
        &self.graph
    }
}
