use std::collections::{HashMap, HashSet};

use petgraph::graphmap::DiGraphMap;
use tracing::debug;
use witness_parser::SearchResult;
use witness_protocol::{CheckKind, Edge, VertexId, Violation};

use crate::graph::GridGraph;

/// Runs an ordered list of named checks over an answer's edges.
///
/// Checks are independent: every check runs even if an earlier one failed,
/// and the violations come back in check order.
#[derive(Debug, Clone)]
pub struct PathValidator<'g> {
    grid: &'g GridGraph,
    checks: Vec<CheckKind>,
}

impl<'g> PathValidator<'g> {
    pub fn new(grid: &'g GridGraph) -> Self {
        Self::with_checks(grid, CheckKind::DEFAULT.to_vec())
    }

    pub fn with_checks(grid: &'g GridGraph, checks: Vec<CheckKind>) -> Self {
        Self { grid, checks }
    }

    /// Appends `check` to the end of the list unless it is already there.
    pub fn with_check(mut self, check: CheckKind) -> Self {
        if !self.checks.contains(&check) {
            self.checks.push(check);
        }
        self
    }

    pub fn checks(&self) -> &[CheckKind] {
        &self.checks
    }

    pub fn grid(&self) -> &GridGraph {
        self.grid
    }

    pub fn validate(&self, edges: &[Edge]) -> Vec<Violation> {
        let mut violations = Vec::new();

        for check in &self.checks {
            let found = run_check(*check, self.grid, edges);
            if !found.is_empty() {
                debug!(check = check.name(), count = found.len(), "check failed");
            }
            violations.extend(found);
        }

        violations
    }

    pub fn validate_result(&self, result: &SearchResult) -> Vec<Violation> {
        self.validate(&result.edges())
    }
}

/// Validates with the default check list.
pub fn validate_path(result: &SearchResult, grid: &GridGraph) -> Vec<Violation> {
    PathValidator::new(grid).validate_result(result)
}

fn run_check(check: CheckKind, grid: &GridGraph, edges: &[Edge]) -> Vec<Violation> {
    match check {
        CheckKind::Legality => check_legality(grid, edges),
        CheckKind::OutDegree => group_by_vertex(edges, |e| e.from)
            .into_iter()
            .filter(|(_, group)| group.len() > 1)
            .map(|(vertex, edges)| Violation::MultipleOutgoingEdges { vertex, edges })
            .collect(),
        CheckKind::InDegree => group_by_vertex(edges, |e| e.to)
            .into_iter()
            .filter(|(_, group)| group.len() > 1)
            .map(|(vertex, edges)| Violation::MultipleIncomingEdges { vertex, edges })
            .collect(),
        CheckKind::Duplicates => check_duplicates(edges),
        CheckKind::SymmetricDuplicates => check_symmetric(edges),
        CheckKind::StartEdge => check_start(grid, edges),
        CheckKind::TerminalEdge => check_terminal(edges),
        CheckKind::Completeness => check_completeness(grid, edges),
    }
}

fn check_legality(grid: &GridGraph, edges: &[Edge]) -> Vec<Violation> {
    edges
        .iter()
        .filter(|edge| !grid.contains_edge(**edge))
        .map(|edge| Violation::IllegalEdge(*edge))
        .collect()
}

/// Edges grouped by `key`, groups in order of first appearance.
fn group_by_vertex(edges: &[Edge], key: impl Fn(&Edge) -> VertexId) -> Vec<(VertexId, Vec<Edge>)> {
    let mut groups: Vec<(VertexId, Vec<Edge>)> = Vec::new();
    let mut slot: HashMap<VertexId, usize> = HashMap::new();

    for edge in edges {
        let vertex = key(edge);
        let idx = *slot.entry(vertex).or_insert_with(|| {
            groups.push((vertex, Vec::new()));
            groups.len() - 1
        });
        groups[idx].1.push(*edge);
    }

    groups
}

fn check_duplicates(edges: &[Edge]) -> Vec<Violation> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut violations = Vec::new();

    for edge in edges {
        if !seen.insert(*edge) && reported.insert(*edge) {
            violations.push(Violation::DuplicateEdge(*edge));
        }
    }
    violations
}

fn check_symmetric(edges: &[Edge]) -> Vec<Violation> {
    let present: HashSet<Edge> = edges.iter().copied().collect();
    let mut reported = HashSet::new();
    let mut violations = Vec::new();

    for edge in edges {
        // A self-loop is its own reverse; that is a plain duplicate at most.
        if edge.from == edge.to || !present.contains(&edge.reversed()) {
            continue;
        }
        let (low, high) = edge.canonical();
        if reported.insert((low, high)) {
            violations.push(Violation::SymmetricDuplicateEdge(low, high));
        }
    }
    violations
}

fn check_start(grid: &GridGraph, edges: &[Edge]) -> Vec<Violation> {
    let present: Vec<Edge> = grid
        .outgoing(VertexId(0))
        .into_iter()
        .filter(|candidate| edges.contains(candidate))
        .collect();

    match present.len() {
        0 => vec![Violation::MissingStartEdge],
        1 => Vec::new(),
        _ => vec![Violation::AmbiguousStartEdge { edges: present }],
    }
}

fn check_terminal(edges: &[Edge]) -> Vec<Violation> {
    // No edges means no vertices, so there is no terminal to pin down.
    let Some(max) = edges.iter().flat_map(|e| [e.from, e.to]).max() else {
        return Vec::new();
    };

    match edges.iter().filter(|e| e.to == max).count() {
        0 => vec![Violation::MissingTerminalEdge(max)],
        1 => Vec::new(),
        _ => vec![Violation::AmbiguousTerminalEdge(max)],
    }
}

fn check_completeness(grid: &GridGraph, edges: &[Edge]) -> Vec<Violation> {
    let expected = grid.vertex_count();
    let mut path: DiGraphMap<VertexId, ()> =
        DiGraphMap::from_edges(edges.iter().map(|e| (e.from, e.to)));
    path.add_node(VertexId(0));

    let mut violations = Vec::new();
    let mut walked = HashSet::new();
    let mut seen = HashSet::from([VertexId(0)]);
    let mut current = VertexId(0);

    // Follow the unique successor; a dead end or a branch ends the walk.
    loop {
        let mut successors = path.neighbors(current);
        let (Some(next), None) = (successors.next(), successors.next()) else {
            break;
        };
        walked.insert(Edge { from: current, to: next });
        if !seen.insert(next) {
            violations.push(Violation::PathRevisits(next));
            break;
        }
        current = next;
    }

    let visited = seen.iter().filter(|v| (v.0 as usize) < expected).count();
    if visited < expected {
        violations.push(Violation::IncompletePath { visited, expected });
    }

    // Each walked edge accounts for its first occurrence only.
    let stray: Vec<Edge> = edges.iter().copied().filter(|e| !walked.remove(e)).collect();
    if !stray.is_empty() {
        violations.push(Violation::StrayEdges { edges: stray });
    }

    violations
}
