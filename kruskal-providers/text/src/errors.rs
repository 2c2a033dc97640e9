use kruskal_core::{GraphError, WEIGHT_CEILING};
use thiserror::Error;

/// Errors raised while loading a graph document.
///
/// Line numbers are one-based and count every physical line, including
/// comments and blank lines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextGraphProviderError {
    #[error("graph document is empty")]
    EmptyInput,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected `<nodes> <edges> <directed 0|1> <weighted 0|1>` but found `{found}`")]
    MalformedHeader { line: usize, found: String },
    #[error("line {line}: header declares a directed graph")]
    DirectedGraph { line: usize },
    #[error("expected {expected} node names but found {found}")]
    MissingNodes { expected: usize, found: usize },
    #[error("line {line}: node name `{found}` must be a single token")]
    InvalidNodeName { line: usize, found: String },
    #[error("expected {expected} edges but found {found}")]
    MissingEdges { expected: usize, found: usize },
    #[error("line {line}: expected `<from> <to> [<weight>]` but found `{found}`")]
    MalformedEdge { line: usize, found: String },
    #[error("line {line}: content after the declared edges")]
    TrailingContent { line: usize },
    #[error("line {line}: unknown node `{name}`")]
    UnknownNode { line: usize, name: String },
    #[error("line {line}: weighted graph edge has no weight")]
    MissingWeight { line: usize },
    #[error("line {line}: unweighted graph edge carries a weight")]
    UnexpectedWeight { line: usize },
    #[error("line {line}: `{token}` is not a weight below {ceiling}", ceiling = WEIGHT_CEILING)]
    InvalidWeight { line: usize, token: String },
    #[error("line {line}: edge `{from} {to}` is declared twice")]
    DuplicateEdge {
        line: usize,
        from: String,
        to: String,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl TextGraphProviderError {
    /// Stable identifier for the error variant.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "TEXT_EMPTY_INPUT",
            Self::Io(_) => "TEXT_IO",
            Self::MalformedHeader { .. } => "TEXT_MALFORMED_HEADER",
            Self::DirectedGraph { .. } => "TEXT_DIRECTED_GRAPH",
            Self::MissingNodes { .. } => "TEXT_MISSING_NODES",
            Self::InvalidNodeName { .. } => "TEXT_INVALID_NODE_NAME",
            Self::MissingEdges { .. } => "TEXT_MISSING_EDGES",
            Self::MalformedEdge { .. } => "TEXT_MALFORMED_EDGE",
            Self::TrailingContent { .. } => "TEXT_TRAILING_CONTENT",
            Self::UnknownNode { .. } => "TEXT_UNKNOWN_NODE",
            Self::MissingWeight { .. } => "TEXT_MISSING_WEIGHT",
            Self::UnexpectedWeight { .. } => "TEXT_UNEXPECTED_WEIGHT",
            Self::InvalidWeight { .. } => "TEXT_INVALID_WEIGHT",
            Self::DuplicateEdge { .. } => "TEXT_DUPLICATE_EDGE",
            Self::Graph(_) => "TEXT_GRAPH",
        }
    }
}
