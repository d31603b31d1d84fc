//! Cell-local to world-space coordinate mapping.

use glam::DVec3;

/// Maps a cell-local point to an absolute coordinate.
///
/// `point` must already carry the engine scale factor (as returned by
/// [`CellGeometry::point_at`](crate::CellGeometry::point_at)).
///
/// # Examples
/// ```
/// use voro_export::reconstruct;
/// use glam::DVec3;
///
/// let p = reconstruct(DVec3::new(10.0, 0.0, -1.0), DVec3::new(0.5, 0.5, 0.5));
/// assert_eq!(p, DVec3::new(10.5, 0.5, -0.5));
/// ```
#[inline]
pub fn reconstruct(displacement: DVec3, point: DVec3) -> DVec3 {
    displacement + point
}
