use serde::{Deserialize, Serialize};

/// How a route path is declared. Dynamic routes carry parameter placeholders
/// (e.g. `/products/:id`) but are ordinary nodes for graph purposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteKind {
    #[default]
    Static,
    Dynamic,
}

impl RouteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::Static => "static",
            RouteKind::Dynamic => "dynamic",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// A user-visible navigational link (anchor, menu item, button).
    #[default]
    Navigational,
    /// A programmatic transition (router push, redirect in code).
    Programmatic,
}

impl LinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkKind::Navigational => "navigational",
            LinkKind::Programmatic => "programmatic",
        }
    }
}

/// A declared navigable page or endpoint, identified by its unique path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    pub path: String,
    /// Where the route is defined (file, line, registry key). Carried through
    /// unexamined; used only for reporting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<String>,
    #[serde(default)]
    pub kind: RouteKind,
}

impl RouteNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source_ref: None,
            kind: RouteKind::Static,
        }
    }

    pub fn with_source_ref(mut self, source_ref: impl Into<String>) -> Self {
        self.source_ref = Some(source_ref.into());
        self
    }

    pub fn with_kind(mut self, kind: RouteKind) -> Self {
        self.kind = kind;
        self
    }
}

/// A directed navigational connection between two declared routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkEdge {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub kind: LinkKind,
}

impl LinkEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: LinkKind::Navigational,
        }
    }

    pub fn with_kind(mut self, kind: LinkKind) -> Self {
        self.kind = kind;
        self
    }
}

/// A named ordered sequence of route paths representing an intended user
/// flow. The registry loader guarantees `steps.len() >= 2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    pub name: String,
    pub steps: Vec<String>,
}

impl Journey {
    pub fn new(name: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }
}
