//! # Error Types
//!
//! Error types for decoding and exporting cell geometry. All errors are
//! explicit and carry the traversal ordinal of the failing cell.
//!
//! ## Error Policy
//!
//! - NO partial results when a pass fails
//! - NO skipping past a bad cell (it would desynchronize the size buffer)
//! - Engine failures propagate unmodified as the error source

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors raised while decoding a compact face-vertex list.
///
/// ## Example
///
/// ```rust
/// use voro_export::{decode, DecodeError};
///
/// let err = decode(&[3, 0, 1]).unwrap_err();
/// assert_eq!(
///     err,
///     DecodeError::Truncated { run: 0, offset: 0, expected: 3, available: 2 }
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A run declares more vertex indices than the list still holds.
    #[error(
        "run {run} at offset {offset} declares {expected} vertex indices but only {available} remain"
    )]
    Truncated {
        /// Zero-based index of the offending run.
        run: usize,
        /// Position of the run's length header in the list.
        offset: usize,
        /// Declared run length.
        expected: usize,
        /// Elements left after the header.
        available: usize,
    },
}

/// Errors raised while building primitive cell geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The lower bound is not strictly below the upper bound on an axis.
    #[error("invalid bounds on {axis} axis: min {min} must be below max {max}")]
    InvalidBounds {
        /// Axis name (`x`, `y` or `z`).
        axis: char,
        /// Lower bound supplied.
        min: f64,
        /// Upper bound supplied.
        max: f64,
    },
}

/// Boxed failure reported by the tessellation engine.
pub type UpstreamError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort an export pass.
///
/// ## Example
///
/// ```rust
/// use voro_export::{ExportAccumulator, ExportError};
///
/// let mut acc = ExportAccumulator::begin();
/// let _snapshot = acc.finish().unwrap();
/// match acc.append_cell(&[]) {
///     Err(ExportError::UseAfterFinalize) => {}
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum ExportError {
    /// The cell's face-vertex list is malformed.
    #[error("cell {cell}: malformed face-vertex list: {source}")]
    Decode {
        /// Traversal ordinal of the failing cell.
        cell: usize,
        /// Decoder failure.
        #[source]
        source: DecodeError,
    },

    /// A face loop references a point the cell does not have.
    #[error("cell {cell}: face references point {index} but the cell has {point_count} points")]
    PointIndexOutOfRange {
        /// Traversal ordinal of the failing cell.
        cell: usize,
        /// Vertex index found in the face list.
        index: u32,
        /// Number of points in the cell.
        point_count: usize,
    },

    /// The cell contributes more vertices than the configured limit.
    #[error("cell {cell}: {count} vertices exceeds the limit of {max}")]
    TooManyVertices {
        /// Traversal ordinal of the failing cell.
        cell: usize,
        /// Vertices the cell tried to append.
        count: usize,
        /// Configured per-cell maximum.
        max: usize,
    },

    /// An append or finish was attempted on a finalized accumulator.
    #[error("export accumulator already finalized")]
    UseAfterFinalize,

    /// The geometry engine failed to compute a cell.
    #[error("cell {cell}: geometry engine failed: {source}")]
    Upstream {
        /// Traversal ordinal of the failing cell.
        cell: usize,
        /// Engine error, unmodified.
        #[source]
        source: UpstreamError,
    },
}

impl ExportError {
    /// Creates a decode error for the given cell.
    pub fn decode(cell: usize, source: DecodeError) -> Self {
        Self::Decode { cell, source }
    }

    /// Wraps an engine failure for the given cell.
    pub fn upstream(cell: usize, source: impl Into<UpstreamError>) -> Self {
        Self::Upstream {
            cell,
            source: source.into(),
        }
    }

    /// Traversal ordinal of the failing cell, if the error concerns one.
    pub fn cell(&self) -> Option<usize> {
        match self {
            Self::Decode { cell, .. }
            | Self::PointIndexOutOfRange { cell, .. }
            | Self::TooManyVertices { cell, .. }
            | Self::Upstream { cell, .. } => Some(*cell),
            Self::UseAfterFinalize => None,
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

// =============================================================================
// TESTS
// =============================================================================
