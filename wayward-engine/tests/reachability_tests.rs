// Tests for reachability classification: reachable, orphaned, dead-end

use std::collections::BTreeSet;
use std::time::{Duration, Instant};
use wayward_engine::error::AnalysisError;
use wayward_engine::model::{LinkEdge, RouteNode};
use wayward_engine::reachability::{self, AllowedTerminals, EntryPoints};
use wayward_engine::NavGraph;

fn routes(paths: &[&str]) -> Vec<RouteNode> {
    paths.iter().map(|path| RouteNode::new(*path)).collect()
}

fn set(paths: &[&str]) -> BTreeSet<String> {
    paths.iter().map(|path| path.to_string()).collect()
}

fn login_graph() -> NavGraph {
    NavGraph::build(
        routes(&["/", "/login", "/dashboard"]),
        vec![
            LinkEdge::new("/", "/login"),
            LinkEdge::new("/login", "/dashboard"),
        ],
    )
    .unwrap()
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_linear_chain_dead_end_without_terminals() {
    let graph = login_graph();
    let result = reachability::analyze(
        &graph,
        &EntryPoints::root(),
        &AllowedTerminals::none(),
        None,
    )
    .unwrap();

    assert_eq!(result.reachable, set(&["/", "/login"]));
    assert!(result.orphans.is_empty());
    assert_eq!(result.dead_ends, set(&["/dashboard"]));
}

#[test]
fn test_declared_terminal_is_not_a_dead_end() {
    let graph = login_graph();
    let terminals = AllowedTerminals::new(["/dashboard".to_string()]);
    let result =
        reachability::analyze(&graph, &EntryPoints::root(), &terminals, None).unwrap();

    assert!(result.dead_ends.is_empty());
    assert_eq!(result.reachable, set(&["/", "/login", "/dashboard"]));
}

#[test]
fn test_unlinked_route_is_an_orphan() {
    let graph = NavGraph::build(
        routes(&["/", "/login", "/dashboard", "/legacy"]),
        vec![
            LinkEdge::new("/", "/login"),
            LinkEdge::new("/login", "/dashboard"),
        ],
    )
    .unwrap();

    let result = reachability::analyze(
        &graph,
        &EntryPoints::root(),
        &AllowedTerminals::none(),
        None,
    )
    .unwrap();

    assert_eq!(result.orphans, set(&["/legacy"]));
}

#[test]
fn test_orphan_with_outbound_edges_is_still_an_orphan() {
    // /island links into the reachable set but nothing links to it.
    let graph = NavGraph::build(
        routes(&["/", "/about", "/island"]),
        vec![
            LinkEdge::new("/", "/about"),
            LinkEdge::new("/island", "/about"),
        ],
    )
    .unwrap();

    let result = reachability::analyze(
        &graph,
        &EntryPoints::root(),
        &AllowedTerminals::none(),
        None,
    )
    .unwrap();

    assert_eq!(result.orphans, set(&["/island"]));
    // Never double-reported as a dead-end.
    assert!(!result.dead_ends.contains("/island"));
}

#[test]
fn test_cycle_terminates_and_is_reachable() {
    let graph = NavGraph::build(
        routes(&["/", "/a", "/b"]),
        vec![
            LinkEdge::new("/", "/a"),
            LinkEdge::new("/a", "/b"),
            LinkEdge::new("/b", "/a"),
        ],
    )
    .unwrap();

    let result = reachability::analyze(
        &graph,
        &EntryPoints::root(),
        &AllowedTerminals::none(),
        None,
    )
    .unwrap();

    assert_eq!(result.reachable, set(&["/", "/a", "/b"]));
    assert!(result.orphans.is_empty());
    assert!(result.dead_ends.is_empty());
}

#[test]
fn test_multiple_entry_points_union() {
    let graph = NavGraph::build(
        routes(&["/", "/admin", "/admin/users", "/about"]),
        vec![
            LinkEdge::new("/", "/about"),
            LinkEdge::new("/admin", "/admin/users"),
        ],
    )
    .unwrap();

    let entries = EntryPoints::new(["/".to_string(), "/admin".to_string()]).unwrap();
    let result =
        reachability::analyze(&graph, &entries, &AllowedTerminals::none(), None).unwrap();

    assert!(result.orphans.is_empty());
    assert_eq!(result.dead_ends, set(&["/about", "/admin/users"]));
}

// ============================================================================
// Configuration Error Tests
// ============================================================================

#[test]
fn test_unknown_entry_point_rejected() {
    let graph = login_graph();
    let entries = EntryPoints::new(["/typo".to_string()]).unwrap();

    let result = reachability::analyze(&graph, &entries, &AllowedTerminals::none(), None);
    assert_eq!(
        result.unwrap_err(),
        AnalysisError::UnknownEntryPoint {
            path: "/typo".to_string()
        }
    );
}

#[test]
fn test_empty_entry_set_rejected() {
    let result = EntryPoints::new(Vec::<String>::new());
    assert_eq!(result.unwrap_err(), AnalysisError::EmptyEntryPoints);
}

// ============================================================================
// Partition Invariant Tests
// ============================================================================

#[test]
fn test_sets_partition_all_routes() {
    let graph = NavGraph::build(
        routes(&["/", "/a", "/b", "/c", "/orphan", "/leaf"]),
        vec![
            LinkEdge::new("/", "/a"),
            LinkEdge::new("/a", "/b"),
            LinkEdge::new("/b", "/c"),
            LinkEdge::new("/c", "/"),
            LinkEdge::new("/a", "/leaf"),
        ],
    )
    .unwrap();

    let result = reachability::analyze(
        &graph,
        &EntryPoints::root(),
        &AllowedTerminals::none(),
        None,
    )
    .unwrap();

    let mut union = BTreeSet::new();
    union.extend(result.reachable.iter().cloned());
    union.extend(result.orphans.iter().cloned());
    union.extend(result.dead_ends.iter().cloned());

    assert_eq!(
        union.len(),
        result.reachable.len() + result.orphans.len() + result.dead_ends.len(),
        "sets must be pairwise disjoint"
    );
    assert_eq!(union, set(&["/", "/a", "/b", "/c", "/orphan", "/leaf"]));
}

#[test]
fn test_adding_inbound_edge_removes_orphan() {
    let nodes = routes(&["/", "/about", "/legacy"]);
    let edges = vec![
        LinkEdge::new("/", "/about"),
        LinkEdge::new("/about", "/"),
    ];

    let before = NavGraph::build(nodes.clone(), edges.clone()).unwrap();
    let result = reachability::analyze(
        &before,
        &EntryPoints::root(),
        &AllowedTerminals::none(),
        None,
    )
    .unwrap();
    assert!(result.orphans.contains("/legacy"));

    let mut more_edges = edges;
    more_edges.push(LinkEdge::new("/about", "/legacy"));
    let after = NavGraph::build(nodes, more_edges).unwrap();
    let result = reachability::analyze(
        &after,
        &EntryPoints::root(),
        &AllowedTerminals::none(),
        None,
    )
    .unwrap();

    assert!(!result.orphans.contains("/legacy"));
    // No outbound edges, so the former orphan is now a dead-end.
    assert!(result.dead_ends.contains("/legacy"));
}

// ============================================================================
// Deadline Tests
// ============================================================================

#[test]
fn test_expired_deadline_aborts_traversal() {
    let graph = login_graph();
    let expired = Instant::now() - Duration::from_secs(1);

    let result = reachability::analyze(
        &graph,
        &EntryPoints::root(),
        &AllowedTerminals::none(),
        Some(expired),
    );

    assert!(matches!(
        result.unwrap_err(),
        AnalysisError::Timeout { .. }
    ));
}

#[test]
fn test_generous_deadline_completes() {
    let graph = login_graph();
    let deadline = Instant::now() + Duration::from_secs(60);

    let result = reachability::analyze(
        &graph,
        &EntryPoints::root(),
        &AllowedTerminals::none(),
        Some(deadline),
    );

    assert!(result.is_ok());
}
