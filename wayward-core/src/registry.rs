// Loading of the normalized route manifest and the journey registry.
//
// Both files hold pre-normalized facts produced by a framework-specific
// extractor; nothing here parses application source.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wayward_engine::model::{Journey, LinkEdge, RouteNode};

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("journey '{name}' must declare at least two steps")]
    ShortJourney { name: String },

    #[error("duplicate journey name: {name}")]
    DuplicateJourney { name: String },
}

/// The normalized route facts for one application: routes, the links between
/// them, and the traversal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteManifest {
    #[serde(default)]
    pub routes: Vec<RouteNode>,
    #[serde(default)]
    pub links: Vec<LinkEdge>,
    #[serde(default = "default_entry_points")]
    pub entry_points: Vec<String>,
    #[serde(default = "default_allowed_terminals")]
    pub allowed_terminals: Vec<String>,
}

/// The conventional sole entry point.
fn default_entry_points() -> Vec<String> {
    vec!["/".to_string()]
}

/// The conventional pages allowed to have no outbound links.
fn default_allowed_terminals() -> Vec<String> {
    ["/logout", "/error", "/404", "/500"]
        .into_iter()
        .map(String::from)
        .collect()
}

pub fn load_route_manifest(path: &Path) -> Result<RouteManifest, RegistryError> {
    let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| RegistryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Named journeys declared by a human. Loaded once per analysis run; never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyRegistry {
    #[serde(default)]
    pub journeys: Vec<Journey>,
}

pub fn load_journey_registry(path: &Path) -> Result<JourneyRegistry, RegistryError> {
    let content = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let registry: JourneyRegistry =
        serde_json::from_str(&content).map_err(|source| RegistryError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    // A single-step journey has no consecutive pairs to check; it is invalid
    // input here, not in the engine.
    let mut names = HashSet::with_capacity(registry.journeys.len());
    for journey in &registry.journeys {
        if journey.steps.len() < 2 {
            return Err(RegistryError::ShortJourney {
                name: journey.name.clone(),
            });
        }
        if !names.insert(journey.name.as_str()) {
            return Err(RegistryError::DuplicateJourney {
                name: journey.name.clone(),
            });
        }
    }

    Ok(registry)
}
