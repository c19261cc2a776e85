//! # `bitgraph` - Bit-Packed Dense Adjacency Matrices
//!
//! A dense directed-graph adjacency structure that stores each edge as a
//! single bit rather than a byte or word. For `V` nodes the backing buffer
//! holds `V * ceil(V / 8)` bytes, giving O(1) edge existence queries and
//! mutation at O(V²) bit space.
//!
//! ## Guarantees
//!
//! ### Layout
//! - **Stable bit layout**: the edge `r -> c` always lives at byte
//!   `r * byte_width + c / 8`, bit `c % 8` (LSB-first), row-major. The serde
//!   representation and [`BitAdjacencyMatrix::as_bytes`] expose exactly this
//!   layout.
//! - **Derived width**: `byte_width == ceil(node_count / 8)` after every
//!   successful operation, checked at the single point where layouts are
//!   constructed.
//!
//! ### Ownership
//! - **Single buffer owner**: the matrix owns its packed buffer exclusively;
//!   resize builds the replacement buffer first and releases the old one only
//!   after adopting the new shape, as one unit.
//! - **No partial mutation**: every fallible operation either completes or
//!   leaves the matrix exactly as it was, including allocation failure,
//!   which surfaces as a typed error instead of aborting.
//!
//! ### Addressing discipline
//! Two addressing modes share the buffer and are kept as separate, named
//! functions: edge-bit addressing for edge operations, and raw-cell (whole
//! byte) addressing used only by resize migration. See [`MatrixLayout`].
//!
//! ## Concurrency
//!
//! The matrix is a single-owner, single-threaded structure. Mutation requires
//! `&mut self`, so the compiler already serializes resize against edge
//! operations; callers that share a matrix across threads wrap it in their
//! own lock. The crate adds no internal synchronization.
//!
//! ## Example
//!
//! ```rust
//! use bitgraph::BitAdjacencyMatrix;
//!
//! let mut graph = BitAdjacencyMatrix::with_nodes(4)?;
//!
//! graph.add_edge(0, 1)?;
//! graph.add_edge(0, 2)?;
//! graph.add_edge(2, 3)?;
//!
//! assert!(graph.has_edge(0, 1));
//! assert!(!graph.has_edge(1, 0));
//!
//! // Growing preserves every stored edge.
//! graph.resize(9)?;
//! assert!(graph.has_edge(2, 3));
//! graph.add_edge(8, 7)?;
//!
//! assert_eq!(graph.edges().count(), 4);
//! # Ok::<(), bitgraph::MatrixError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod error;
pub mod iter;
pub mod layout;
pub mod matrix;

pub use buffer::PackedBuffer;
pub use error::MatrixError;
pub use iter::{Edges, OutNeighbors};
pub use layout::{BitAddr, MatrixLayout};
pub use matrix::{BitAdjacencyMatrix, EncodedMatrix};

// Compile-time assertions for memory layout expectations
const _: () = {
    use core::mem;

    // A layout is two words; the matrix handle adds only the buffer.
    assert!(mem::size_of::<MatrixLayout>() == 2 * mem::size_of::<usize>());
    assert!(
        mem::size_of::<BitAdjacencyMatrix>()
            <= mem::size_of::<MatrixLayout>() + mem::size_of::<Vec<u8>>()
    );

    // Bit addresses stay register-friendly.
    assert!(mem::size_of::<BitAddr>() <= 2 * mem::size_of::<usize>());
};
