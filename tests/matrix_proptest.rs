//! Property tests driving random operation sequences against two oracles:
//! a `HashSet` of edge pairs and a petgraph `DiGraphMap`.

use std::collections::HashSet;

use bitgraph::{BitAdjacencyMatrix, MatrixError};
use petgraph::graphmap::DiGraphMap;
use proptest::prelude::*;

const INITIAL_NODES: usize = 4;
const MAX_NODES: usize = 40;

#[derive(Debug, Clone)]
enum Operation {
    Add(usize, usize),
    Remove(usize, usize),
    Has(usize, usize),
    Grow(usize),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    let coord = 0..MAX_NODES + 2;
    prop_oneof![
        4 => (coord.clone(), coord.clone()).prop_map(|(f, t)| Operation::Add(f, t)),
        2 => (coord.clone(), coord.clone()).prop_map(|(f, t)| Operation::Remove(f, t)),
        3 => (coord.clone(), coord).prop_map(|(f, t)| Operation::Has(f, t)),
        1 => (1..8usize).prop_map(Operation::Grow),
    ]
}

proptest! {
    #[test]
    fn matches_edge_set_oracles(ops in proptest::collection::vec(operation_strategy(), 1..200)) {
        let mut matrix = BitAdjacencyMatrix::with_nodes(INITIAL_NODES).unwrap();
        let mut oracle: HashSet<(usize, usize)> = HashSet::new();
        let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();

        for op in ops {
            let nodes = matrix.node_count();
            match op {
                Operation::Add(from, to) => {
                    let result = matrix.add_edge(from, to);
                    if from < nodes && to < nodes {
                        prop_assert_eq!(result, Ok(()));
                        oracle.insert((from, to));
                        let _ = graph.add_edge(from, to, ());
                    } else {
                        prop_assert!(
                            matches!(result, Err(MatrixError::NodeOutOfRange { .. })),
                            "expected NodeOutOfRange error"
                        );
                    }
                }
                Operation::Remove(from, to) => {
                    let result = matrix.remove_edge(from, to);
                    if from < nodes && to < nodes {
                        prop_assert_eq!(result, Ok(()));
                        oracle.remove(&(from, to));
                        let _ = graph.remove_edge(from, to);
                    } else {
                        prop_assert!(
                            matches!(result, Err(MatrixError::NodeOutOfRange { .. })),
                            "expected NodeOutOfRange error"
                        );
                    }
                }
                Operation::Has(from, to) => {
                    prop_assert_eq!(matrix.has_edge(from, to), oracle.contains(&(from, to)));
                }
                Operation::Grow(extra) => {
                    let target = (nodes + extra).min(MAX_NODES);
                    if target > nodes {
                        matrix.resize(target).unwrap();
                        prop_assert_eq!(matrix.node_count(), target);
                        // Growth preserves every stored edge.
                        for &(from, to) in &oracle {
                            prop_assert!(matrix.has_edge(from, to));
                        }
                    }
                }
            }

            prop_assert_eq!(matrix.byte_width(), matrix.node_count().div_ceil(8));
            prop_assert_eq!(
                matrix.as_bytes().len(),
                matrix.node_count() * matrix.byte_width()
            );
        }

        // Final sweep: every representable pair agrees with both oracles.
        prop_assert_eq!(matrix.edge_count(), oracle.len());
        for from in 0..matrix.node_count() {
            for to in 0..matrix.node_count() {
                let expected = oracle.contains(&(from, to));
                prop_assert_eq!(matrix.has_edge(from, to), expected);
                prop_assert_eq!(graph.contains_edge(from, to), expected);
            }
        }

        let edges: Vec<_> = matrix.edges().collect();
        let mut sorted_oracle: Vec<_> = oracle.iter().copied().collect();
        sorted_oracle.sort_unstable();
        prop_assert_eq!(edges, sorted_oracle);
    }

    #[test]
    fn serde_round_trips_arbitrary_graphs(
        nodes in 1..24usize,
        edges in proptest::collection::vec((0..24usize, 0..24usize), 0..64),
    ) {
        let mut matrix = BitAdjacencyMatrix::with_nodes(nodes).unwrap();
        for (from, to) in edges {
            if from < nodes && to < nodes {
                matrix.add_edge(from, to).unwrap();
            }
        }

        let json = serde_json::to_string(&matrix).unwrap();
        let decoded: BitAdjacencyMatrix = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, matrix);
    }
}
