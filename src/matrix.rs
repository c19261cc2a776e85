//! `BitAdjacencyMatrix` — a dense directed graph storing each edge as one bit.
//!
//! Each row packs one bit per possible destination node into
//! `ceil(nodes / 8)` bytes, so a full graph over `V` nodes costs
//! `V * ceil(V / 8)` bytes instead of the `V * V` of a byte-per-edge layout.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_edge` / `remove_edge` | \(O(1)\) | one masked byte write |
//! | `has_edge` | \(O(1)\) | one masked byte read |
//! | `resize` | \(O(V_{old} \cdot W_{old})\) | whole-byte migration, growth only |
//! | `edge_count` | \(O(V \cdot W)\) | popcount over the buffer |
//! | `edges` | \(O(V^2)\) | row-major bit scan |
//!
//! The matrix is a single-owner, single-threaded structure: mutation goes
//! through `&mut self`, and resize swaps buffer and dimensions as one unit,
//! so no reader can observe a mixed shape.

use serde::{Deserialize, Serialize};

use crate::buffer::PackedBuffer;
use crate::error::MatrixError;
use crate::iter::{Edges, OutNeighbors};
use crate::layout::{MatrixLayout, EDGES_PER_CELL};

/// A directed graph over a dense node range, one bit per edge.
///
/// Nodes are the integers `0..node_count()`. The graph does not model
/// undirected symmetry, edge weights, or node removal; growing the node
/// range is the only shape change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EncodedMatrix", try_from = "EncodedMatrix")]
pub struct BitAdjacencyMatrix {
    layout: MatrixLayout,
    cells: PackedBuffer,
}

impl BitAdjacencyMatrix {
    /// Creates an empty matrix with zero nodes and no backing buffer.
    pub const fn new() -> Self {
        Self {
            layout: MatrixLayout::EMPTY,
            cells: PackedBuffer::empty(),
        }
    }

    /// Creates a matrix sized for `nodes` nodes, all edges absent.
    ///
    /// `nodes == 0` yields the empty matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::CapacityOverflow`] or
    /// [`MatrixError::AllocationFailed`] when the backing buffer cannot be
    /// built.
    ///
    /// # Example
    /// ```
    /// use bitgraph::BitAdjacencyMatrix;
    ///
    /// let mut graph = BitAdjacencyMatrix::with_nodes(4)?;
    /// graph.add_edge(0, 2)?;
    /// assert!(graph.has_edge(0, 2));
    /// assert!(!graph.has_edge(2, 0));
    /// # Ok::<(), bitgraph::MatrixError>(())
    /// ```
    pub fn with_nodes(nodes: usize) -> Result<Self, MatrixError> {
        let mut matrix = Self::new();
        if nodes > 0 {
            matrix.resize(nodes)?;
        }
        Ok(matrix)
    }

    /// Re-initializes a caller-owned matrix in place, sized for `nodes`.
    ///
    /// The previous buffer is released; `reset(0)` returns the matrix to the
    /// empty state without tearing down the record itself.
    ///
    /// # Errors
    /// Propagates the errors of [`Self::with_nodes`]. On failure the matrix
    /// keeps its previous state.
    pub fn reset(&mut self, nodes: usize) -> Result<(), MatrixError> {
        *self = Self::with_nodes(nodes)?;
        Ok(())
    }

    /// Returns the current node count.
    #[inline(always)]
    pub const fn node_count(&self) -> usize {
        self.layout.nodes()
    }

    /// Returns `true` when the matrix has zero nodes.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Returns the number of bytes per row (`ceil(node_count / 8)`).
    #[inline(always)]
    pub const fn byte_width(&self) -> usize {
        self.layout.byte_width()
    }

    /// Returns the raw packed cells: row-major, one row per node,
    /// `byte_width` bytes per row, LSB-first bits within each byte.
    ///
    /// Any external serialization must preserve exactly this ordering to
    /// stay compatible.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        self.cells.as_bytes()
    }

    /// Grows the matrix to hold `new_nodes` nodes, preserving every stored
    /// edge.
    ///
    /// Allocates a zero-filled buffer for the new dimensions, copies every
    /// existing cell byte into it via raw-cell addressing, then adopts the
    /// new buffer and dimensions as one unit. The old buffer is released
    /// only after the new one is fully built, so a failed resize leaves the
    /// matrix exactly as it was.
    ///
    /// # Errors
    /// - [`MatrixError::ZeroResize`] for `new_nodes == 0`.
    /// - [`MatrixError::ShrinkUnsupported`] when `new_nodes` is below the
    ///   current node count; shrinking is rejected before any allocation.
    /// - [`MatrixError::CapacityOverflow`] / [`MatrixError::AllocationFailed`]
    ///   when the new buffer cannot be built.
    pub fn resize(&mut self, new_nodes: usize) -> Result<(), MatrixError> {
        if new_nodes == 0 {
            return Err(MatrixError::ZeroResize);
        }
        if new_nodes < self.layout.nodes() {
            return Err(MatrixError::ShrinkUnsupported {
                current: self.layout.nodes(),
                requested: new_nodes,
            });
        }

        let new_layout = MatrixLayout::for_nodes(new_nodes)?;
        let mut new_cells = PackedBuffer::zeroed(new_layout.len())?;

        if !self.cells.is_empty() {
            // Whole-byte migration: each old cell keeps its (row, byte_col)
            // coordinate in the wider layout.
            for row in 0..self.layout.nodes() {
                for byte_col in 0..self.layout.byte_width() {
                    let from = self.layout.cell_addr(row, byte_col)?;
                    let to = new_layout.cell_addr(row, byte_col)?;
                    *new_cells.byte_mut(to)? = self.cells.byte(from)?;
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_nodes = self.layout.nodes(),
            old_byte_width = self.layout.byte_width(),
            new_nodes,
            new_byte_width = new_layout.byte_width(),
            "resized adjacency matrix"
        );

        self.cells = new_cells;
        self.layout = new_layout;
        Ok(())
    }

    /// Sets the edge `from -> to`. Idempotent.
    ///
    /// # Errors
    /// Returns [`MatrixError::NodeOutOfRange`] when either node is not less
    /// than the current node count; the buffer is untouched in that case.
    #[inline]
    pub fn add_edge(&mut self, from: usize, to: usize) -> Result<(), MatrixError> {
        let addr = self.layout.bit_addr(from, to)?;
        *self.cells.byte_mut(addr.byte)? |= addr.mask;
        Ok(())
    }

    /// Clears the edge `from -> to`. Idempotent; succeeds whether or not
    /// the edge was present.
    ///
    /// # Errors
    /// Returns [`MatrixError::NodeOutOfRange`] when either node is not less
    /// than the current node count.
    #[inline]
    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<(), MatrixError> {
        let addr = self.layout.bit_addr(from, to)?;
        *self.cells.byte_mut(addr.byte)? &= !addr.mask;
        Ok(())
    }

    /// Returns `true` when the edge `from -> to` is stored.
    ///
    /// Out-of-range coordinates yield `false` rather than an error; callers
    /// that need to distinguish "no edge" from "bad query" must check
    /// [`Self::node_count`] themselves.
    #[inline]
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        let Ok(addr) = self.layout.bit_addr(from, to) else {
            return false;
        };
        self.cells
            .byte(addr.byte)
            .is_ok_and(|cell| cell & addr.mask != 0)
    }

    /// Returns the number of stored edges.
    pub fn edge_count(&self) -> usize {
        // Padding bits in trailing cells are always zero, so a plain
        // popcount over the buffer is exact.
        self.cells
            .as_bytes()
            .iter()
            .map(|cell| cell.count_ones() as usize)
            .sum()
    }

    /// Returns an iterator over the destinations reachable from `from`.
    ///
    /// An out-of-range `from` yields an empty iterator, matching the
    /// leniency of [`Self::has_edge`].
    pub fn out_neighbors(&self, from: usize) -> OutNeighbors<'_> {
        OutNeighbors::new(self, from)
    }

    /// Returns an iterator over all stored `(from, to)` edges in row-major
    /// order.
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(self)
    }
}

impl Default for BitAdjacencyMatrix {
    fn default() -> Self {
        Self::new()
    }
}

/// Portable encoded form of a matrix: the node count plus the packed cell
/// bytes in their in-memory order.
///
/// This is the serde representation of [`BitAdjacencyMatrix`]; decoding
/// re-validates the dimension invariants, so no deserialized matrix can
/// carry a mismatched shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedMatrix {
    /// Number of nodes.
    pub nodes: usize,
    /// Row-major, LSB-first packed cells, `nodes * ceil(nodes / 8)` bytes.
    pub cells: Vec<u8>,
}

impl From<BitAdjacencyMatrix> for EncodedMatrix {
    fn from(matrix: BitAdjacencyMatrix) -> Self {
        Self {
            nodes: matrix.layout.nodes(),
            cells: matrix.cells.into_vec(),
        }
    }
}

impl TryFrom<EncodedMatrix> for BitAdjacencyMatrix {
    type Error = MatrixError;

    fn try_from(encoded: EncodedMatrix) -> Result<Self, Self::Error> {
        let layout = MatrixLayout::for_nodes(encoded.nodes)?;
        if encoded.cells.len() != layout.len() {
            return Err(MatrixError::LengthMismatch {
                expected: layout.len(),
                actual: encoded.cells.len(),
            });
        }

        let mut cells = encoded.cells;
        let tail_bits = layout.nodes() % EDGES_PER_CELL;
        if tail_bits != 0 {
            // Bits past the node count carry no edges; clear them so
            // popcounts and equality stay exact.
            let tail_mask = (1u8 << tail_bits) - 1;
            let byte_width = layout.byte_width();
            for row in 0..layout.nodes() {
                cells[row * byte_width + byte_width - 1] &= tail_mask;
            }
        }

        Ok(Self {
            layout,
            cells: PackedBuffer::from_vec(cells),
        })
    }
}
