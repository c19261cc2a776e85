//! Typed errors for matrix construction, addressing, and resizing.

use core::fmt;
use std::collections::TryReserveError;

/// Error returned by fallible [`BitAdjacencyMatrix`] operations.
///
/// Mutations report failures through this type; the one deliberate exception
/// is [`BitAdjacencyMatrix::has_edge`], which folds out-of-range coordinates
/// into `false` for caller convenience.
///
/// [`BitAdjacencyMatrix`]: crate::BitAdjacencyMatrix
/// [`BitAdjacencyMatrix::has_edge`]: crate::BitAdjacencyMatrix::has_edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A node coordinate was not less than the current node count.
    NodeOutOfRange {
        /// The offending coordinate.
        node: usize,
        /// The node count it was checked against.
        nodes: usize,
    },
    /// `resize` was asked for zero nodes.
    ZeroResize,
    /// `resize` was asked for fewer nodes than are currently stored.
    ///
    /// Growth-only migration keeps every raw-cell copy in bounds; shrinking
    /// is rejected before anything is allocated.
    ShrinkUnsupported {
        /// Current node count.
        current: usize,
        /// Requested node count.
        requested: usize,
    },
    /// `nodes * byte_width` does not fit in `usize`.
    CapacityOverflow {
        /// Requested node count.
        nodes: usize,
    },
    /// The backing buffer reservation failed.
    ///
    /// The matrix is left exactly as it was before the call.
    AllocationFailed(TryReserveError),
    /// A computed byte offset fell outside the buffer.
    ///
    /// This indicates a dimension/coordinate invariant violation inside the
    /// crate, not a recoverable runtime condition.
    AddressOutOfBounds {
        /// The offending byte offset.
        offset: usize,
        /// The buffer length it was checked against.
        len: usize,
    },
    /// An encoded matrix's cell length does not match its node count.
    LengthMismatch {
        /// `nodes * ceil(nodes / 8)` for the encoded node count.
        expected: usize,
        /// Length of the encoded cell bytes.
        actual: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeOutOfRange { node, nodes } => {
                write!(f, "node {node} is out of range for {nodes} nodes")
            }
            Self::ZeroResize => write!(f, "cannot resize to zero nodes"),
            Self::ShrinkUnsupported { current, requested } => {
                write!(f, "cannot shrink from {current} to {requested} nodes")
            }
            Self::CapacityOverflow { nodes } => {
                write!(f, "buffer size for {nodes} nodes overflows usize")
            }
            Self::AllocationFailed(err) => {
                write!(f, "buffer allocation failed: {err}")
            }
            Self::AddressOutOfBounds { offset, len } => {
                write!(f, "byte offset {offset} is out of bounds for buffer of {len} bytes")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "encoded cells hold {actual} bytes, dimensions require {expected}")
            }
        }
    }
}

impl std::error::Error for MatrixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::AllocationFailed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TryReserveError> for MatrixError {
    fn from(err: TryReserveError) -> Self {
        Self::AllocationFailed(err)
    }
}
