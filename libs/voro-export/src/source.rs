//! Traits for the tessellation engine the export pipeline reads from.
//!
//! The engine is split along the same line as its own API: a loop object
//! that walks the container's cells, and the container that computes a cell
//! on demand for the loop's current position.

use std::fmt;

use crate::geometry::CellGeometry;

/// Ordered traversal over the cells of a container.
///
/// Between a successful [`start`](Self::start) or [`inc`](Self::inc) and the
/// next call, [`current`](Self::current) names exactly one cell.
pub trait CellIterationDriver {
    /// Engine-specific handle identifying a cell.
    type Handle: Copy + fmt::Debug;

    /// Positions the driver on the first cell. Returns false if there is none.
    fn start(&mut self) -> bool;

    /// Advances to the next cell. Returns false, leaving no current cell,
    /// once the traversal is exhausted.
    fn inc(&mut self) -> bool;

    /// Handle of the current cell, if any.
    fn current(&self) -> Option<Self::Handle>;
}

/// Computes cell geometry on demand.
///
/// Geometry is not cached: every call recomputes the cell into the caller's
/// scratch value, replacing whatever it held before.
pub trait CellGeometrySource {
    /// Handle type shared with the matching [`CellIterationDriver`].
    type Handle;

    /// Engine failure, such as a cell that was cut away entirely.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the cell behind `handle` into `geometry`.
    fn compute_cell(
        &self,
        geometry: &mut CellGeometry,
        handle: Self::Handle,
    ) -> Result<(), Self::Error>;
}
