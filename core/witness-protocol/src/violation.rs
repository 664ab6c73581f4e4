use core::fmt;
use crate::ids::VertexId;
use crate::model::Edge;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Named structural checks a path validator can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckKind {
    Legality,
    OutDegree,
    InDegree,
    Duplicates,
    SymmetricDuplicates,
    StartEdge,
    TerminalEdge,
    /// Opt-in: the path must visit every grid vertex exactly once.
    Completeness,
}

impl CheckKind {
    /// The local well-formedness checks, in the order they run.
    pub const DEFAULT: [CheckKind; 7] = [
        CheckKind::Legality,
        CheckKind::OutDegree,
        CheckKind::InDegree,
        CheckKind::Duplicates,
        CheckKind::SymmetricDuplicates,
        CheckKind::StartEdge,
        CheckKind::TerminalEdge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CheckKind::Legality => "legality",
            CheckKind::OutDegree => "out-degree",
            CheckKind::InDegree => "in-degree",
            CheckKind::Duplicates => "duplicates",
            CheckKind::SymmetricDuplicates => "symmetric-duplicates",
            CheckKind::StartEdge => "start-edge",
            CheckKind::TerminalEdge => "terminal-edge",
            CheckKind::Completeness => "completeness",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single structural problem found in an answer's edge set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Violation {
    IllegalEdge(Edge),
    MultipleOutgoingEdges { vertex: VertexId, edges: Vec<Edge> },
    MultipleIncomingEdges { vertex: VertexId, edges: Vec<Edge> },
    DuplicateEdge(Edge),
    /// Both orientations present; endpoints stored smaller first.
    SymmetricDuplicateEdge(VertexId, VertexId),
    MissingStartEdge,
    AmbiguousStartEdge { edges: Vec<Edge> },
    MissingTerminalEdge(VertexId),
    AmbiguousTerminalEdge(VertexId),
    IncompletePath { visited: usize, expected: usize },
    /// The walk from vertex 0 came back to a vertex it had already left.
    PathRevisits(VertexId),
    /// Edges the walk from vertex 0 never used.
    StrayEdges { edges: Vec<Edge> },
}

impl Violation {
    /// The check that produces this kind of violation.
    pub fn check(&self) -> CheckKind {
        match self {
            Violation::IllegalEdge(_) => CheckKind::Legality,
            Violation::MultipleOutgoingEdges { .. } => CheckKind::OutDegree,
            Violation::MultipleIncomingEdges { .. } => CheckKind::InDegree,
            Violation::DuplicateEdge(_) => CheckKind::Duplicates,
            Violation::SymmetricDuplicateEdge(..) => CheckKind::SymmetricDuplicates,
            Violation::MissingStartEdge | Violation::AmbiguousStartEdge { .. } => CheckKind::StartEdge,
            Violation::MissingTerminalEdge(_) | Violation::AmbiguousTerminalEdge(_) => {
                CheckKind::TerminalEdge
            }
            Violation::IncompletePath { .. }
            | Violation::PathRevisits(_)
            | Violation::StrayEdges { .. } => CheckKind::Completeness,
        }
    }
}

fn write_edges(f: &mut fmt::Formatter<'_>, edges: &[Edge]) -> fmt::Result {
    for (i, edge) in edges.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", edge)?;
    }
    Ok(())
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::IllegalEdge(edge) => write!(f, "edge {} is not on the grid", edge),
            Violation::MultipleOutgoingEdges { vertex, edges } => {
                write!(f, "multiple edges start at {}: ", vertex)?;
                write_edges(f, edges)
            }
            Violation::MultipleIncomingEdges { vertex, edges } => {
                write!(f, "multiple edges terminate at {}: ", vertex)?;
                write_edges(f, edges)
            }
            Violation::DuplicateEdge(edge) => write!(f, "edge {} appears more than once", edge),
            Violation::SymmetricDuplicateEdge(u, v) => {
                write!(f, "edges ({},{}) and ({},{}) are symmetric", u, v, v, u)
            }
            Violation::MissingStartEdge => f.write_str("missing an edge from vertex 0"),
            Violation::AmbiguousStartEdge { edges } => {
                f.write_str("more than one edge from vertex 0: ")?;
                write_edges(f, edges)
            }
            Violation::MissingTerminalEdge(v) => write!(f, "no edge terminates at {}", v),
            Violation::AmbiguousTerminalEdge(v) => {
                write!(f, "more than one edge terminates at {}", v)
            }
            Violation::IncompletePath { visited, expected } => {
                write!(f, "path visits {} of {} vertices", visited, expected)
            }
            Violation::PathRevisits(v) => write!(f, "path returns to {}", v),
            Violation::StrayEdges { edges } => {
                f.write_str("edges off the path from vertex 0: ")?;
                write_edges(f, edges)
            }
        }
    }
}
