use std::collections::{BTreeMap, HashSet};
use std::fmt;

use tracing::warn;
use witness_protocol::{Edge, VertexId};

use crate::grammar::{classify_edge, EdgeShape};
use crate::parser::parse_atoms;
use crate::token::Atom;

/// One answer set reported by the solver.
///
/// Every view below is recomputed from the atom sequence on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    index: u32,
    atoms: Vec<Atom>,
}

impl SearchResult {
    pub fn new(index: u32, atoms: Vec<Atom>) -> Self {
        Self { index, atoms }
    }

    /// Parses the atom line that follows an `Answer: <index>` header.
    pub fn from_line(index: u32, line: &str) -> Self {
        Self::new(index, parse_atoms(line))
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// All atoms, duplicates included.
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Unique atom strings. `edge(0,1)` and `edge(1,4)` are distinct.
    pub fn distinct_predicate_string_count(&self) -> usize {
        self.atoms.iter().map(Atom::as_str).collect::<HashSet<_>>().len()
    }

    /// Atom counts keyed by predicate name. Values sum to `atom_count()`.
    pub fn predicate_name_histogram(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for atom in &self.atoms {
            *counts.entry(atom.predicate_name().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Edges in atom order, duplicates preserved.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for atom in &self.atoms {
            match classify_edge(atom.as_str()) {
                EdgeShape::Edge(edge) => edges.push(edge),
                EdgeShape::Malformed => {
                    warn!(answer = %self.index, atom = %atom, "skipping malformed edge atom");
                }
                EdgeShape::NotEdge => {}
            }
        }
        edges
    }

    /// Atoms that start with `edge(` but do not parse as an edge.
    pub fn malformed_edge_atoms(&self) -> Vec<&Atom> {
        self.atoms
            .iter()
            .filter(|atom| classify_edge(atom.as_str()) == EdgeShape::Malformed)
            .collect()
    }

    /// `[u1, v1, u2, v2, ...]` over `edges()`.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.edges()
            .into_iter()
            .flat_map(|edge| [edge.from, edge.to])
            .collect()
    }

    /// Largest vertex id mentioned by any edge; `None` without edges.
    pub fn max_vertex(&self) -> Option<VertexId> {
        self.vertices().into_iter().max()
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchResult {}", self.index)
    }
}
