//! Builds a small directed graph and prints its edges.

use anyhow::Result;
use bitgraph::BitAdjacencyMatrix;

fn main() -> Result<()> {
    let mut graph = BitAdjacencyMatrix::with_nodes(4)?;

    graph.add_edge(0, 1)?;
    graph.add_edge(0, 2)?;
    graph.add_edge(2, 3)?;

    if graph.has_edge(0, 1) {
        println!("edge exists from 0 to 1");
    }
    if !graph.has_edge(1, 0) {
        println!("no edge exists from 1 to 0");
    }

    graph.remove_edge(0, 1)?;
    if !graph.has_edge(0, 1) {
        println!("removed edge from 0 to 1");
    }

    println!("\nlist of all edges");
    for (from, to) in graph.edges() {
        println!("{from} -> {to}");
    }

    Ok(())
}
