//! Line-oriented parser for graph documents.

use std::io::BufRead;

use kruskal_core::{AdjacencyMatrix, Graph, GraphKind, NodeList, WEIGHT_CEILING, Weight};
use tracing::trace;

use crate::TextGraphProviderError;

/// Weight given to every edge of an unweighted graph.
pub(crate) const UNIT_WEIGHT: Weight = 1;

/// A non-blank, non-comment line with its one-based line number.
struct Significant {
    line: usize,
    text: String,
}

struct Header {
    node_count: usize,
    edge_count: usize,
    kind: GraphKind,
}

/// Whether a directed header is loaded or rejected on sight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DirectedPolicy {
    Load,
    Reject,
}

pub(crate) fn parse_graph<R: BufRead>(
    reader: R,
    policy: DirectedPolicy,
) -> Result<Graph, TextGraphProviderError> {
    let mut lines = SignificantLines::new(reader);
    let first = lines.next().transpose()?.ok_or(TextGraphProviderError::EmptyInput)?;
    let header = parse_header(&first)?;
    if header.kind.directed && policy == DirectedPolicy::Reject {
        return Err(TextGraphProviderError::DirectedGraph { line: first.line });
    }

    // Sized by the lines actually read; the header count is untrusted.
    let mut names = Vec::new();
    for found in 0..header.node_count {
        let entry = lines.next().transpose()?.ok_or(TextGraphProviderError::MissingNodes {
            expected: header.node_count,
            found,
        })?;
        names.push(node_name(entry)?);
    }
    let nodes = NodeList::new(names)?;

    let mut matrix = AdjacencyMatrix::new(header.node_count);
    for found in 0..header.edge_count {
        let entry = lines.next().transpose()?.ok_or(TextGraphProviderError::MissingEdges {
            expected: header.edge_count,
            found,
        })?;
        add_edge(&entry, header.kind, &nodes, &mut matrix)?;
    }

    if let Some(extra) = lines.next().transpose()? {
        return Err(TextGraphProviderError::TrailingContent { line: extra.line });
    }

    Ok(Graph::new(header.kind, nodes, matrix)?)
}

/// Lazily yields non-blank, non-comment lines so parsing can stop early.
struct SignificantLines<R> {
    lines: std::iter::Enumerate<std::io::Lines<R>>,
}

impl<R: BufRead> SignificantLines<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines().enumerate(),
        }
    }
}

impl<R: BufRead> Iterator for SignificantLines<R> {
    type Item = std::io::Result<Significant>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(err) => return Some(Err(err)),
            };
            let text = line.trim();
            if text.is_empty() || text.starts_with('#') {
                continue;
            }
            return Some(Ok(Significant {
                line: index + 1,
                text: text.to_owned(),
            }));
        }
        None
    }
}

fn parse_header(entry: &Significant) -> Result<Header, TextGraphProviderError> {
    let malformed = || TextGraphProviderError::MalformedHeader {
        line: entry.line,
        found: entry.text.clone(),
    };
    let tokens: Vec<&str> = entry.text.split_whitespace().collect();
    let [nodes, edges, directed, weighted] = tokens.as_slice() else {
        return Err(malformed());
    };
    Ok(Header {
        node_count: nodes.parse().map_err(|_| malformed())?,
        edge_count: edges.parse().map_err(|_| malformed())?,
        kind: GraphKind {
            directed: flag(directed).ok_or_else(malformed)?,
            weighted: flag(weighted).ok_or_else(malformed)?,
        },
    })
}

fn flag(token: &str) -> Option<bool> {
    match token {
        "0" => Some(false),
        "1" => Some(true),
        _ => None,
    }
}

fn node_name(entry: Significant) -> Result<String, TextGraphProviderError> {
    if entry.text.split_whitespace().nth(1).is_some() {
        return Err(TextGraphProviderError::InvalidNodeName {
            line: entry.line,
            found: entry.text,
        });
    }
    Ok(entry.text)
}

fn add_edge(
    entry: &Significant,
    kind: GraphKind,
    nodes: &NodeList,
    matrix: &mut AdjacencyMatrix,
) -> Result<(), TextGraphProviderError> {
    let line = entry.line;
    let tokens: Vec<&str> = entry.text.split_whitespace().collect();
    let (from, to, weight_token) = match tokens.as_slice() {
        [from, to] => (*from, *to, None),
        [from, to, weight] => (*from, *to, Some(*weight)),
        _ => {
            return Err(TextGraphProviderError::MalformedEdge {
                line,
                found: entry.text.clone(),
            });
        }
    };

    let source = lookup(nodes, from, line)?;
    let target = lookup(nodes, to, line)?;
    let weight = match (kind.weighted, weight_token) {
        (true, Some(token)) => parse_weight(token, line)?,
        (true, None) => return Err(TextGraphProviderError::MissingWeight { line }),
        (false, None) => UNIT_WEIGHT,
        (false, Some(_)) => return Err(TextGraphProviderError::UnexpectedWeight { line }),
    };

    if source == target {
        trace!(line, node = from, "self-loop ignored");
        return Ok(());
    }
    if matrix.contains(source, target) || (!kind.directed && matrix.contains(target, source)) {
        return Err(TextGraphProviderError::DuplicateEdge {
            line,
            from: from.to_owned(),
            to: to.to_owned(),
        });
    }

    if kind.directed {
        matrix.set(source, target, weight)?;
    } else {
        matrix.connect(source, target, weight)?;
    }
    Ok(())
}

fn lookup(nodes: &NodeList, name: &str, line: usize) -> Result<usize, TextGraphProviderError> {
    nodes
        .index_of(name)
        .ok_or_else(|| TextGraphProviderError::UnknownNode {
            line,
            name: name.to_owned(),
        })
}

fn parse_weight(token: &str, line: usize) -> Result<Weight, TextGraphProviderError> {
    token
        .parse::<Weight>()
        .ok()
        .filter(|weight| *weight < WEIGHT_CEILING)
        .ok_or_else(|| TextGraphProviderError::InvalidWeight {
            line,
            token: token.to_owned(),
        })
}
