pub mod analysis;
pub mod error;
pub mod graph;
pub mod journey;
pub mod model;
pub mod reachability;
pub mod score;

pub use analysis::{AnalysisResult, Analyzer};
pub use error::AnalysisError;
pub use graph::NavGraph;
pub use journey::{JourneyResult, JourneyStatus, MissingLink, MissingLinkCause};
pub use model::{Journey, LinkEdge, LinkKind, RouteKind, RouteNode};
pub use reachability::{AllowedTerminals, EntryPoints, Reachability};
pub use score::health_score;
