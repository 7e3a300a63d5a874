// Tests for route manifest and journey registry loading

use std::io::Write;
use tempfile::NamedTempFile;
use wayward_core::registry::{load_journey_registry, load_route_manifest, RegistryError};
use wayward_engine::model::{LinkKind, RouteKind};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

// ============================================================================
// Route Manifest Tests
// ============================================================================

#[test]
fn test_load_full_manifest() {
    let file = write_temp(
        r#"{
            "routes": [
                {"path": "/", "source_ref": "app/page.tsx", "kind": "static"},
                {"path": "/products/:id", "kind": "dynamic"}
            ],
            "links": [
                {"from": "/", "to": "/products/:id", "kind": "navigational"}
            ],
            "entry_points": ["/"],
            "allowed_terminals": ["/logout"]
        }"#,
    );

    let manifest = load_route_manifest(file.path()).unwrap();

    assert_eq!(manifest.routes.len(), 2);
    assert_eq!(manifest.routes[0].source_ref.as_deref(), Some("app/page.tsx"));
    assert_eq!(manifest.routes[1].kind, RouteKind::Dynamic);
    assert_eq!(manifest.links.len(), 1);
    assert_eq!(manifest.entry_points, vec!["/"]);
    assert_eq!(manifest.allowed_terminals, vec!["/logout"]);
}

#[test]
fn test_manifest_defaults_applied() {
    let file = write_temp(
        r#"{
            "routes": [{"path": "/"}],
            "links": []
        }"#,
    );

    let manifest = load_route_manifest(file.path()).unwrap();

    assert_eq!(manifest.routes[0].kind, RouteKind::Static);
    assert!(manifest.routes[0].source_ref.is_none());
    assert_eq!(manifest.entry_points, vec!["/"]);
    assert_eq!(
        manifest.allowed_terminals,
        vec!["/logout", "/error", "/404", "/500"]
    );
}

#[test]
fn test_link_kind_defaults_to_navigational() {
    let file = write_temp(
        r#"{
            "routes": [{"path": "/"}, {"path": "/about"}],
            "links": [{"from": "/", "to": "/about"}]
        }"#,
    );

    let manifest = load_route_manifest(file.path()).unwrap();
    assert_eq!(manifest.links[0].kind, LinkKind::Navigational);
}

#[test]
fn test_missing_manifest_file() {
    let result = load_route_manifest(std::path::Path::new("/nonexistent/routes.json"));
    assert!(matches!(result.unwrap_err(), RegistryError::Io { .. }));
}

#[test]
fn test_malformed_manifest_names_the_file() {
    let file = write_temp("{ not json");
    let err = load_route_manifest(file.path()).unwrap_err();

    assert!(matches!(err, RegistryError::Parse { .. }));
    assert!(err.to_string().contains("failed to parse"));
}

// ============================================================================
// Journey Registry Tests
// ============================================================================

#[test]
fn test_load_journey_registry() {
    let file = write_temp(
        r#"{
            "journeys": [
                {"name": "auth", "steps": ["/", "/login", "/dashboard"]},
                {"name": "checkout", "steps": ["/cart", "/checkout"]}
            ]
        }"#,
    );

    let registry = load_journey_registry(file.path()).unwrap();

    assert_eq!(registry.journeys.len(), 2);
    assert_eq!(registry.journeys[0].name, "auth");
    assert_eq!(registry.journeys[0].steps.len(), 3);
}

#[test]
fn test_empty_registry_is_valid() {
    let file = write_temp(r#"{"journeys": []}"#);
    let registry = load_journey_registry(file.path()).unwrap();
    assert!(registry.journeys.is_empty());
}

#[test]
fn test_single_step_journey_rejected() {
    let file = write_temp(
        r#"{"journeys": [{"name": "stub", "steps": ["/"]}]}"#,
    );

    let err = load_journey_registry(file.path()).unwrap_err();
    match err {
        RegistryError::ShortJourney { name } => assert_eq!(name, "stub"),
        other => panic!("expected ShortJourney, got {other:?}"),
    }
}

#[test]
fn test_duplicate_journey_name_rejected() {
    let file = write_temp(
        r#"{
            "journeys": [
                {"name": "auth", "steps": ["/", "/login"]},
                {"name": "auth", "steps": ["/login", "/dashboard"]}
            ]
        }"#,
    );

    let err = load_journey_registry(file.path()).unwrap_err();
    match err {
        RegistryError::DuplicateJourney { name } => assert_eq!(name, "auth"),
        other => panic!("expected DuplicateJourney, got {other:?}"),
    }
}
