//! # Cell Geometry Scratch
//!
//! Reusable per-cell storage that a geometry engine computes into. One value
//! is owned by the caller of an export pass and handed to the engine by
//! `&mut` for every cell, so buffers are reused instead of reallocated.
//!
//! Points are kept exactly as the engine stores them: a flat `f64` array with
//! three components per vertex, relative to the generating particle and at
//! twice their geometric size. [`CellGeometry::point_at`] is the only place
//! that knows about that layout.

use config::constants::{ENGINE_POINT_SCALE, VALUES_PER_VERTEX};
use glam::DVec3;

use crate::error::DecodeError;
use crate::faces::{self, FaceLoops};

/// Geometry of the current cell: raw points, compact face list and the
/// generating particle's position.
///
/// # Example
///
/// ```rust
/// use voro_export::CellGeometry;
/// use glam::DVec3;
///
/// let mut cell = CellGeometry::new();
/// cell.set_displacement(DVec3::new(1.0, 1.0, 1.0));
/// cell.push_raw_point([2.0, 0.0, -2.0]);
/// cell.face_vertices_mut().extend_from_slice(&[1, 0]);
///
/// assert_eq!(cell.point_at(0), Some(DVec3::new(1.0, 0.0, -1.0)));
/// assert_eq!(cell.point_at(1), None);
/// assert_eq!(cell.face_count().unwrap(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellGeometry {
    /// Raw engine coordinates, stride 3
    pts: Vec<f64>,
    /// Compact run-length face-vertex list
    face_vertices: Vec<u32>,
    /// Absolute position of the generating particle
    displacement: DVec3,
}

impl CellGeometry {
    /// Creates empty scratch geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates scratch geometry with pre-allocated capacity.
    pub fn with_capacity(point_count: usize, face_list_len: usize) -> Self {
        Self {
            pts: Vec::with_capacity(point_count * VALUES_PER_VERTEX),
            face_vertices: Vec::with_capacity(face_list_len),
            displacement: DVec3::ZERO,
        }
    }

    /// Drops the current cell's contents while keeping allocations.
    pub fn clear(&mut self) {
        self.pts.clear();
        self.face_vertices.clear();
        self.displacement = DVec3::ZERO;
    }

    /// Returns true if the cell has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    /// Sets the generating particle's absolute position.
    #[inline]
    pub fn set_displacement(&mut self, displacement: DVec3) {
        self.displacement = displacement;
    }

    /// Absolute position of the generating particle.
    #[inline]
    pub fn displacement(&self) -> DVec3 {
        self.displacement
    }

    /// Appends one point in raw engine units.
    pub fn push_raw_point(&mut self, raw: [f64; 3]) {
        self.pts.extend_from_slice(&raw);
    }

    /// Appends points in raw engine units.
    pub fn extend_raw_points<I>(&mut self, raw: I)
    where
        I: IntoIterator<Item = [f64; 3]>,
    {
        for point in raw {
            self.push_raw_point(point);
        }
    }

    /// The flat raw point array, three values per point.
    #[inline]
    pub fn raw_points(&self) -> &[f64] {
        &self.pts
    }

    /// Number of points in the cell.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.pts.len() / VALUES_PER_VERTEX
    }

    /// Returns point `index` in the cell-local frame, scaled to world units.
    ///
    /// Returns `None` when `index` is past the end of the point list.
    #[inline]
    pub fn point_at(&self, index: u32) -> Option<DVec3> {
        let start = (index as usize).checked_mul(VALUES_PER_VERTEX)?;
        let end = start.checked_add(VALUES_PER_VERTEX)?;
        let raw = self.pts.get(start..end)?;
        Some(DVec3::from_slice(raw) * ENGINE_POINT_SCALE)
    }

    /// Iterates over all points, scaled to world units.
    pub fn points(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.pts
            .chunks_exact(VALUES_PER_VERTEX)
            .map(|raw| DVec3::from_slice(raw) * ENGINE_POINT_SCALE)
    }

    /// The compact face-vertex list.
    #[inline]
    pub fn face_vertices(&self) -> &[u32] {
        &self.face_vertices
    }

    /// Mutable access to the compact face-vertex list for engines filling it.
    #[inline]
    pub fn face_vertices_mut(&mut self) -> &mut Vec<u32> {
        &mut self.face_vertices
    }

    /// Iterates over the decoded face loops.
    pub fn face_loops(&self) -> FaceLoops<'_> {
        faces::face_loops(&self.face_vertices)
    }

    /// Number of faces encoded in the face list.
    pub fn face_count(&self) -> Result<usize, DecodeError> {
        faces::face_count(&self.face_vertices)
    }
}

#[cfg(test)]
mod tests;
