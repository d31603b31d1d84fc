//! # Export Buffers
//!
//! Flat, order-preserving buffers built up over one export pass.
//!
//! [`ExportAccumulator`] is the in-progress side: it only grows, and once
//! [`ExportAccumulator::finish`] hands out the [`ExportSnapshot`] it refuses
//! further appends until [`ExportAccumulator::reset`] is called.
//!
//! The snapshot layout is:
//!
//! ```text
//! vertices:   [x, y, z, x, y, z, ...]      3 values per exported vertex
//! cell_sizes: [n0, n1, ...]                vertices per cell, traversal order
//! ```
//!
//! Cell `i` owns vertices `sum(n0..ni) .. sum(n0..=ni)`.

use std::ops::Range;

use config::constants::{MAX_BUFFER_CAPACITY, VALUES_PER_VERTEX};
use glam::DVec3;
use serde::Serialize;

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};

/// Finalized output of one export pass.
///
/// # Examples
/// ```
/// use voro_export::ExportAccumulator;
/// use glam::DVec3;
///
/// let mut acc = ExportAccumulator::begin();
/// acc.append_cell(&[DVec3::X, DVec3::Y]).unwrap();
/// acc.append_cell(&[DVec3::Z]).unwrap();
/// let snapshot = acc.finish().unwrap();
///
/// assert_eq!(snapshot.cell_sizes(), &[2, 1]);
/// assert_eq!(snapshot.vertex_count(), 3);
/// assert_eq!(snapshot.cell_vertices(1), Some(&[0.0, 0.0, 1.0][..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExportSnapshot {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    vertices: Vec<f64>,
    /// Number of vertices each cell contributed.
    cell_sizes: Vec<u32>,
}

impl ExportSnapshot {
    /// Flat vertex coordinates.
    #[inline]
    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    /// Per-cell vertex counts in traversal order.
    #[inline]
    pub fn cell_sizes(&self) -> &[u32] {
        &self.cell_sizes
    }

    /// Number of cells exported.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cell_sizes.len()
    }

    /// Number of vertices exported.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VALUES_PER_VERTEX
    }

    /// Returns true if no cells were exported.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cell_sizes.is_empty()
    }

    /// Vertex ranges of each cell, recovered by prefix sums over the sizes.
    ///
    /// Ranges are in vertex units; multiply by 3 to index `vertices()`.
    pub fn cell_ranges(&self) -> Vec<Range<usize>> {
        let mut start = 0;
        self.cell_sizes
            .iter()
            .map(|&size| {
                let end = start + size as usize;
                let range = start..end;
                start = end;
                range
            })
            .collect()
    }

    /// Flat coordinates belonging to cell `index`.
    ///
    /// Walks the sizes of every earlier cell; use [`cell_ranges`](Self::cell_ranges)
    /// to visit all cells in one pass.
    pub fn cell_vertices(&self, index: usize) -> Option<&[f64]> {
        let size = *self.cell_sizes.get(index)? as usize;
        let start: usize = self.cell_sizes[..index].iter().map(|&s| s as usize).sum();
        self.vertices
            .get(start * VALUES_PER_VERTEX..(start + size) * VALUES_PER_VERTEX)
    }

    /// Vertex coordinates narrowed to `f32` for GPU upload.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices.iter().map(|&v| v as f32).collect()
    }

    /// Concatenates snapshots in the order given.
    ///
    /// Merging per-partition snapshots in partition order reproduces the
    /// buffers a single sequential pass would have produced.
    pub fn concat<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = ExportSnapshot>,
    {
        let mut merged = Self::default();
        for part in parts {
            merged.vertices.extend(part.vertices);
            merged.cell_sizes.extend(part.cell_sizes);
        }
        merged
    }

    /// Splits the snapshot into its raw buffers.
    pub fn into_parts(self) -> (Vec<f64>, Vec<u32>) {
        (self.vertices, self.cell_sizes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AccumulatorState {
    Open,
    Finalized,
}

/// In-progress export buffers for one pass.
#[derive(Debug)]
pub struct ExportAccumulator {
    vertices: Vec<f64>,
    cell_sizes: Vec<u32>,
    max_cell_vertices: usize,
    state: AccumulatorState,
}

impl Default for ExportAccumulator {
    fn default() -> Self {
        Self::begin()
    }
}

impl ExportAccumulator {
    /// Starts a pass with the default configuration.
    pub fn begin() -> Self {
        Self::begin_with(&ExportConfig::default())
    }

    /// Starts a pass with explicit capacities and limits.
    ///
    /// Capacities above [`MAX_BUFFER_CAPACITY`] are clamped; the buffers still
    /// grow past them on demand.
    pub fn begin_with(config: &ExportConfig) -> Self {
        let vertex_capacity = config.vertex_capacity.min(MAX_BUFFER_CAPACITY);
        let cell_capacity = config.cell_capacity.min(MAX_BUFFER_CAPACITY);
        Self {
            vertices: Vec::with_capacity(vertex_capacity * VALUES_PER_VERTEX),
            cell_sizes: Vec::with_capacity(cell_capacity),
            max_cell_vertices: config.max_cell_vertices,
            state: AccumulatorState::Open,
        }
    }

    /// Appends one cell's absolute vertices in the given order.
    ///
    /// # Errors
    ///
    /// - [`ExportError::UseAfterFinalize`] once the pass is finished.
    /// - [`ExportError::TooManyVertices`] when the cell exceeds the limit;
    ///   nothing is appended in that case.
    pub fn append_cell(&mut self, vertices: &[DVec3]) -> ExportResult<()> {
        if self.state == AccumulatorState::Finalized {
            return Err(ExportError::UseAfterFinalize);
        }
        let too_many = || ExportError::TooManyVertices {
            cell: self.cell_sizes.len(),
            count: vertices.len(),
            max: self.max_cell_vertices,
        };
        if vertices.len() > self.max_cell_vertices {
            return Err(too_many());
        }
        let size = u32::try_from(vertices.len()).map_err(|_| too_many())?;

        self.vertices.reserve(vertices.len() * VALUES_PER_VERTEX);
        for v in vertices {
            self.vertices.extend_from_slice(&v.to_array());
        }
        self.cell_sizes.push(size);
        Ok(())
    }

    /// Number of cells appended so far.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cell_sizes.len()
    }

    /// Number of vertices appended so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / VALUES_PER_VERTEX
    }

    /// Returns true after [`finish`](Self::finish).
    #[inline]
    pub fn is_finalized(&self) -> bool {
        self.state == AccumulatorState::Finalized
    }

    /// Ends the pass and hands the buffers to the caller.
    ///
    /// # Errors
    ///
    /// [`ExportError::UseAfterFinalize`] if the pass was already finished.
    pub fn finish(&mut self) -> ExportResult<ExportSnapshot> {
        if self.state == AccumulatorState::Finalized {
            return Err(ExportError::UseAfterFinalize);
        }
        self.state = AccumulatorState::Finalized;
        Ok(ExportSnapshot {
            vertices: std::mem::take(&mut self.vertices),
            cell_sizes: std::mem::take(&mut self.cell_sizes),
        })
    }

    /// Discards any buffered data and reopens the accumulator for a new pass.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.cell_sizes.clear();
        self.state = AccumulatorState::Open;
    }
}

#[cfg(test)]
mod tests;
