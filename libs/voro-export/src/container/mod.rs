//! # Precomputed Container
//!
//! An in-memory snapshot of a tessellation engine's output: for every cell the
//! particle id and position, the raw stride-3 point array and the compact
//! face-vertex list, exactly as the engine hands them over. It implements
//! both engine traits, so it can stand in for a live engine wherever the
//! export pipeline expects one.

use glam::DVec3;
use serde::Serialize;
use thiserror::Error;

use config::constants::VALUES_PER_VERTEX;

use crate::config::ExportConfig;
use crate::error::ExportResult;
use crate::export::ExportSnapshot;
use crate::geometry::CellGeometry;
use crate::pipeline::export_cells;
use crate::source::{CellGeometrySource, CellIterationDriver};

/// Errors reported by [`PrecomputedContainer`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContainerError {
    /// The handle does not name a stored cell.
    #[error("no cell stored at handle {handle}")]
    UnknownCell {
        /// Handle that was requested.
        handle: usize,
    },

    /// The cell was cut away entirely and has no geometry.
    #[error("cell of particle {id} was removed entirely")]
    CellRemoved {
        /// Particle id of the cell.
        id: u32,
    },

    /// The raw point array is not a whole number of points.
    #[error("cell of particle {id}: raw point array of length {len} is not a multiple of 3")]
    RaggedPoints {
        /// Particle id of the cell.
        id: u32,
        /// Length of the supplied array.
        len: usize,
    },
}

/// One cell as delivered by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecomputedCell {
    id: u32,
    position: DVec3,
    raw_points: Vec<f64>,
    face_vertices: Vec<u32>,
}

impl PrecomputedCell {
    /// Stores a cell from the engine's raw arrays.
    ///
    /// # Errors
    ///
    /// [`ContainerError::RaggedPoints`] when `raw_points` is not a multiple of 3 long.
    pub fn new(
        id: u32,
        position: DVec3,
        raw_points: Vec<f64>,
        face_vertices: Vec<u32>,
    ) -> Result<Self, ContainerError> {
        if raw_points.len() % VALUES_PER_VERTEX != 0 {
            return Err(ContainerError::RaggedPoints {
                id,
                len: raw_points.len(),
            });
        }
        Ok(Self {
            id,
            position,
            raw_points,
            face_vertices,
        })
    }

    /// Copies a computed cell out of scratch geometry.
    pub fn from_geometry(id: u32, geometry: &CellGeometry) -> Self {
        Self {
            id,
            position: geometry.displacement(),
            raw_points: geometry.raw_points().to_vec(),
            face_vertices: geometry.face_vertices().to_vec(),
        }
    }

    /// Particle id.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Particle position.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Raw stride-3 point array in engine units.
    pub fn raw_points(&self) -> &[f64] {
        &self.raw_points
    }

    /// Compact face-vertex list.
    pub fn face_vertices(&self) -> &[u32] {
        &self.face_vertices
    }
}

/// Cells in traversal order.
///
/// # Example
///
/// ```rust
/// use voro_export::{PrecomputedCell, PrecomputedContainer};
/// use voro_export::config::ExportConfig;
/// use glam::DVec3;
///
/// let mut container = PrecomputedContainer::new();
/// container.put(PrecomputedCell::new(7, DVec3::ZERO, vec![0.0, 0.0, 2.0], vec![1, 0]).unwrap());
///
/// let snapshot = container.export(&ExportConfig::default()).unwrap();
/// assert_eq!(snapshot.vertices(), &[0.0, 0.0, 1.0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrecomputedContainer {
    cells: Vec<PrecomputedCell>,
}

impl PrecomputedContainer {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a container with room for `cell_count` cells.
    pub fn with_capacity(cell_count: usize) -> Self {
        Self {
            cells: Vec::with_capacity(cell_count),
        }
    }

    /// Appends a cell; traversal visits cells in insertion order.
    pub fn put(&mut self, cell: PrecomputedCell) {
        self.cells.push(cell);
    }

    /// Number of stored cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if no cells are stored.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stored cells in traversal order.
    pub fn cells(&self) -> &[PrecomputedCell] {
        &self.cells
    }

    /// Returns a driver over all cells.
    pub fn loop_all(&self) -> CellLoop<'_> {
        CellLoop {
            container: self,
            cursor: None,
        }
    }

    /// Runs a full export pass over all cells with a fresh scratch value.
    pub fn export(&self, config: &ExportConfig) -> ExportResult<ExportSnapshot> {
        let mut scratch = CellGeometry::new();
        export_cells(self, &mut self.loop_all(), &mut scratch, config)
    }
}

impl CellGeometrySource for PrecomputedContainer {
    type Handle = usize;
    type Error = ContainerError;

    fn compute_cell(&self, geometry: &mut CellGeometry, handle: usize) -> Result<(), ContainerError> {
        let cell = self
            .cells
            .get(handle)
            .ok_or(ContainerError::UnknownCell { handle })?;
        if cell.raw_points.is_empty() {
            return Err(ContainerError::CellRemoved { id: cell.id });
        }

        geometry.clear();
        geometry.set_displacement(cell.position);
        geometry.extend_raw_points(
            cell.raw_points
                .chunks_exact(VALUES_PER_VERTEX)
                .map(|p| [p[0], p[1], p[2]]),
        );
        geometry
            .face_vertices_mut()
            .extend_from_slice(&cell.face_vertices);
        Ok(())
    }
}

/// Traversal over every cell of a [`PrecomputedContainer`].
#[derive(Debug, Clone)]
pub struct CellLoop<'a> {
    container: &'a PrecomputedContainer,
    cursor: Option<usize>,
}

impl CellIterationDriver for CellLoop<'_> {
    type Handle = usize;

    fn start(&mut self) -> bool {
        self.cursor = (!self.container.is_empty()).then_some(0);
        self.cursor.is_some()
    }

    fn inc(&mut self) -> bool {
        self.cursor = self
            .cursor
            .map(|i| i + 1)
            .filter(|&i| i < self.container.len());
        self.cursor.is_some()
    }

    fn current(&self) -> Option<usize> {
        self.cursor
    }
}
