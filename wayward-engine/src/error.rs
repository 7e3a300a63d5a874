use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("duplicate route declared: {path}")]
    DuplicateNode { path: String },

    #[error("link {from} -> {to} references unknown route: {missing}")]
    DanglingEdge {
        from: String,
        to: String,
        missing: String,
    },

    #[error("unknown entry point: {path}")]
    UnknownEntryPoint { path: String },

    #[error("entry point set must not be empty")]
    EmptyEntryPoints,

    #[error("analysis deadline exceeded after visiting {visited} routes")]
    Timeout { visited: usize },

    #[error("analysis invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
