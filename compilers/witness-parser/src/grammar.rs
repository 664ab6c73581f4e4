//! Grammar for a single atom.
//!
//! ```text
//! atom      := name ( "(" args ")" )?
//! edge_atom := "edge(" integer "," integer ")"      anchored at both ends
//! ```
//!
//! Only the predicate name and the `edge` shape are interpreted; other
//! argument lists are left as text.

use nom::{
    bytes::complete::{tag, take_till},
    character::complete::{char, u32 as vertex_number},
    combinator::{eof, map},
    sequence::{pair, separated_pair, terminated},
    IResult,
};
use witness_protocol::Edge;

pub const EDGE_PREDICATE: &str = "edge";

/// Result of reading an atom as an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeShape {
    /// The atom does not start with `edge(`.
    NotEdge,
    Edge(Edge),
    /// Starts with `edge(` but the arguments are not two integers.
    Malformed,
}

fn name(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '(')(input)
}

fn edge_open(input: &str) -> IResult<&str, &str> {
    terminated(tag(EDGE_PREDICATE), char('('))(input)
}

fn edge_args(input: &str) -> IResult<&str, Edge> {
    terminated(
        map(
            separated_pair(vertex_number, char(','), vertex_number),
            |(from, to)| Edge::new(from, to),
        ),
        pair(char(')'), eof),
    )(input)
}

/// Everything before the first `(`, or the whole atom when it has no arguments.
pub fn predicate_name(atom: &str) -> &str {
    match name(atom) {
        Ok((_, name)) => name,
        Err(_) => atom,
    }
}

pub fn classify_edge(atom: &str) -> EdgeShape {
    match edge_open(atom) {
        Err(_) => EdgeShape::NotEdge,
        Ok((args, _)) => match edge_args(args) {
            Ok((_, edge)) => EdgeShape::Edge(edge),
            Err(_) => EdgeShape::Malformed,
        },
    }
}

/// The edge an atom asserts, if it is exactly `edge(<int>,<int>)`.
pub fn parse_edge(atom: &str) -> Option<Edge> {
    match classify_edge(atom) {
        EdgeShape::Edge(edge) => Some(edge),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_name() {
        assert_eq!(predicate_name("edge(0,1)"), "edge");
        assert_eq!(predicate_name("colour(3,red)"), "colour");
        assert_eq!(predicate_name("done"), "done");
        assert_eq!(predicate_name("(0,1)"), "");
    }

    #[test]
    fn test_edge_is_anchored_at_start() {
        assert_eq!(classify_edge("edge(3,6)"), EdgeShape::Edge(Edge::new(3, 6)));
        assert_eq!(classify_edge("xedge(3,6)"), EdgeShape::NotEdge);
        assert_eq!(classify_edge("edges(3,6)"), EdgeShape::NotEdge);
        assert_eq!(classify_edge("edge"), EdgeShape::NotEdge);
    }

    #[test]
    fn test_edge_requires_two_integers() {
        assert_eq!(classify_edge("edge(a,1)"), EdgeShape::Malformed);
        assert_eq!(classify_edge("edge(0,1"), EdgeShape::Malformed);
        assert_eq!(classify_edge("edge(0,1,2)"), EdgeShape::Malformed);
        assert_eq!(classify_edge("edge(-1,2)"), EdgeShape::Malformed);
        assert_eq!(classify_edge("edge(0, 1)"), EdgeShape::Malformed);
        assert_eq!(classify_edge("edge(0,1)x"), EdgeShape::Malformed);
        assert_eq!(classify_edge("edge(99999999999,1)"), EdgeShape::Malformed);
    }
}
