//! Graph provider for line-based UTF-8 documents.
//!
//! A document starts with a `<nodes> <edges> <directed 0|1> <weighted 0|1>`
//! header, lists one node name per line, then one `<from> <to> [<weight>]`
//! line per edge. Blank lines and lines starting with `#` are ignored.

mod errors;
mod parser;

use std::io::BufRead;

use kruskal_core::Graph;
use tracing::{debug, instrument};

use crate::parser::DirectedPolicy;

pub use crate::errors::TextGraphProviderError;

/// Graph loaded from a text document.
#[derive(Clone, Debug)]
pub struct TextGraphProvider {
    name: String,
    graph: Graph,
}

impl TextGraphProvider {
    /// Reads a graph document from `reader`.
    ///
    /// # Errors
    /// Returns [`TextGraphProviderError`] when reading fails or the document
    /// is malformed.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    /// use kruskal_providers_text::TextGraphProvider;
    ///
    /// let doc = "3 2 0 1\na\nb\nc\na b 4\nb c 1\n";
    /// let provider = TextGraphProvider::try_from_reader("demo", Cursor::new(doc))?;
    /// assert_eq!(provider.graph().node_count(), 3);
    /// assert_eq!(provider.graph().edge_count(), 2);
    /// # Ok::<(), kruskal_providers_text::TextGraphProviderError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, TextGraphProviderError> {
        Self::load(name.into(), reader, DirectedPolicy::Load)
    }

    /// Reads a graph document that must describe an undirected graph.
    ///
    /// A directed header is rejected as soon as it is read; node and edge
    /// lines are never parsed and no matrix is allocated.
    ///
    /// # Errors
    /// Returns [`TextGraphProviderError::DirectedGraph`] for a directed
    /// header, and any other [`TextGraphProviderError`] for unreadable or
    /// malformed undirected documents.
    ///
    /// # Examples
    /// ```
    /// use kruskal_providers_text::{TextGraphProvider, TextGraphProviderError};
    ///
    /// let doc = "2 1 1 1\np\nq\np nowhere 1\n";
    /// let err = TextGraphProvider::try_undirected_from_reader("demo", doc.as_bytes())
    ///     .expect_err("directed header must be rejected");
    /// assert!(matches!(err, TextGraphProviderError::DirectedGraph { line: 1 }));
    /// ```
    pub fn try_undirected_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, TextGraphProviderError> {
        Self::load(name.into(), reader, DirectedPolicy::Reject)
    }

    /// Parses a graph document held in memory.
    ///
    /// # Errors
    /// Returns [`TextGraphProviderError`] when the document is malformed.
    pub fn parse(name: impl Into<String>, text: &str) -> Result<Self, TextGraphProviderError> {
        Self::load(name.into(), text.as_bytes(), DirectedPolicy::Load)
    }

    #[instrument(name = "provider.text.load", err, skip(reader), fields(source = %name))]
    fn load<R: BufRead>(
        name: String,
        reader: R,
        policy: DirectedPolicy,
    ) -> Result<Self, TextGraphProviderError> {
        let graph = parser::parse_graph(reader, policy)?;
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            directed = graph.kind().directed,
            "graph document loaded"
        );
        Ok(Self { name, graph })
    }

    /// Name given to the document.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The loaded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Consumes the provider, returning the loaded graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}
