use petgraph::graph::{Graph, NodeIndex};
use petgraph::Undirected;
use std::sync::OnceLock;
use witness_protocol::{Edge, GridError, GridSpec, VertexId};

/// Grid cells joined to their orthogonal neighbours, plus the derived table
/// of legal directed moves.
#[derive(Debug, Clone)]
pub struct GridGraph {
    spec: GridSpec,
    graph: Graph<VertexId, (), Undirected>,
    /// Both orientations of every grid edge, sorted.
    table: Vec<Edge>,
}

static STANDARD_GRID: OnceLock<GridGraph> = OnceLock::new();

impl GridGraph {
    pub fn new(spec: GridSpec) -> Self {
        let mut graph = Graph::new_undirected();
        let nodes: Vec<NodeIndex> = (0..spec.cell_count())
            .map(|cell| graph.add_node(VertexId(cell)))
            .collect();
        let node = |vertex: VertexId| nodes[vertex.0 as usize];

        // Right and down neighbours cover every adjacency once
        for row in 0..spec.rows() {
            for col in 0..spec.cols() {
                let here = node(spec.cell(row, col));
                if col + 1 < spec.cols() {
                    graph.add_edge(here, node(spec.cell(row, col + 1)), ());
                }
                if row + 1 < spec.rows() {
                    graph.add_edge(here, node(spec.cell(row + 1, col)), ());
                }
            }
        }

        let mut table: Vec<Edge> = graph
            .edge_indices()
            .filter_map(|e| graph.edge_endpoints(e))
            .flat_map(|(a, b)| {
                let edge = Edge { from: graph[a], to: graph[b] };
                [edge, edge.reversed()]
            })
            .collect();
        table.sort();

        Self { spec, graph, table }
    }

    pub fn with_dimensions(rows: u32, cols: u32) -> Result<Self, GridError> {
        Ok(Self::new(GridSpec::new(rows, cols)?))
    }

    /// The shared 3x3 grid, built on first use.
    pub fn standard() -> &'static GridGraph {
        STANDARD_GRID.get_or_init(|| GridGraph::new(GridSpec::STANDARD))
    }

    pub fn spec(&self) -> GridSpec {
        self.spec
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn adjacency_table(&self) -> &[Edge] {
        &self.table
    }

    pub fn contains_edge(&self, edge: Edge) -> bool {
        self.table.binary_search(&edge).is_ok()
    }

    /// Table entries starting at `vertex`.
    pub fn outgoing(&self, vertex: VertexId) -> Vec<Edge> {
        self.table.iter().copied().filter(|e| e.from == vertex).collect()
    }
}
