pub mod graph;
pub mod validator;

pub use graph::GridGraph;
pub use validator::{validate_path, PathValidator};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use witness_parser::{parse_solver_output, SearchResult};
    use witness_protocol::{CheckKind, Edge, VertexId, Violation};

    fn check(line: &str) -> Vec<Violation> {
        validate_path(&SearchResult::from_line(1, line), GridGraph::standard())
    }

    #[test]
    fn test_round_trip_straight_path() {
        assert!(check("edge(0,1) edge(1,4) edge(4,7) edge(7,8)").is_empty());
    }

    #[test]
    fn test_two_start_edges() {
        assert!(check("edge(0,1) edge(0,3)")
            .iter()
            .any(|v| matches!(v, Violation::AmbiguousStartEdge { .. })));
    }

    #[test]
    fn test_mirrored_edge() {
        assert!(check("edge(0,1) edge(1,0)")
            .contains(&Violation::SymmetricDuplicateEdge(VertexId(0), VertexId(1))));
    }

    #[test]
    fn test_off_grid_edge() {
        assert!(check("edge(0,9)").contains(&Violation::IllegalEdge(Edge::new(0, 9))));
    }

    #[test]
    fn test_empty_answer_does_not_panic() {
        assert_eq!(check(""), vec![Violation::MissingStartEdge]);
        // Non-edge atoms only
        assert_eq!(check("colour(0,red) done"), vec![Violation::MissingStartEdge]);
    }

    #[test]
    fn test_transcript_end_to_end() {
        let transcript = "\
Solving...
Answer: 1
edge(0,3) edge(3,4) edge(4,5) edge(5,8) colour(4,red)
Answer: 2
edge(0,1) edge(1,2) edge(2,1)
SATISFIABLE
";
        let results = parse_solver_output(transcript).unwrap();
        let grid = GridGraph::standard();
        let verdicts: Vec<Vec<Violation>> =
            results.iter().map(|sr| validate_path(sr, grid)).collect();

        assert!(verdicts[0].is_empty());
        assert!(verdicts[1].contains(&Violation::SymmetricDuplicateEdge(VertexId(1), VertexId(2))));
        assert!(verdicts[1].contains(&Violation::MultipleIncomingEdges {
            vertex: VertexId(1),
            edges: vec![Edge::new(0, 1), Edge::new(2, 1)],
        }));
    }

    #[test]
    fn test_grid_size_changes_legality() {
        let wide = GridGraph::with_dimensions(3, 4).unwrap();
        let sr = SearchResult::from_line(1, "edge(0,1) edge(1,2) edge(2,3)");

        // (2,3) wraps a row on 3x3 but is a horizontal step on 3x4
        assert!(validate_path(&sr, &wide).is_empty());
        assert!(validate_path(&sr, GridGraph::standard())
            .contains(&Violation::IllegalEdge(Edge::new(2, 3))));
    }

    fn snake_paths() -> impl Strategy<Value = Vec<Edge>> {
        // A few legal 3x3 paths from 0 to 8, some covering every cell
        let paths: Vec<Vec<u32>> = vec![
            vec![0, 1, 2, 5, 4, 3, 6, 7, 8],
            vec![0, 3, 6, 7, 4, 1, 2, 5, 8],
            vec![0, 1, 4, 3, 6, 7, 8],
            vec![0, 3, 4, 1, 2, 5, 8],
        ];
        prop::sample::select(paths).prop_map(|cells| {
            cells.windows(2).map(|w| Edge::new(w[0], w[1])).collect()
        })
    }

    proptest! {
        #[test]
        fn test_valid_paths_hold_all_properties(path in snake_paths(), shuffle in any::<prop::sample::Index>()) {
            // Atom order does not matter to any check
            let mut edges = path;
            let len = edges.len();
            edges.rotate_left(shuffle.index(len));

            let grid = GridGraph::standard();
            prop_assert!(PathValidator::new(grid).validate(&edges).is_empty());

            for edge in &edges {
                prop_assert!(grid.contains_edge(*edge));
            }
            let starts = edges.iter().filter(|e| e.from == VertexId(0)).count();
            prop_assert_eq!(starts, 1);
        }

        #[test]
        fn test_reversing_an_edge_is_always_caught(path in snake_paths(), pick in any::<prop::sample::Index>()) {
            let mut edges = path;
            let extra = edges[pick.index(edges.len())].reversed();
            edges.push(extra);

            let found = PathValidator::new(GridGraph::standard()).validate(&edges);
            prop_assert!(found.iter().any(|v| v.check() == CheckKind::SymmetricDuplicates));
        }
    }
}
