//! Cuboid cell primitive.
//!
//! Builds the axis-aligned box the tessellation engine starts every cell
//! from, in its raw doubled coordinates, with one quadrilateral loop per side.


use config::constants::ENGINE_POINT_SCALE;
use glam::DVec3;

use crate::error::GeometryError;
use crate::geometry::CellGeometry;

/// Compact face list of the box cell.
///
/// Vertex `i` sits at `x = max` if bit 0 of `i` is set, `y = max` for bit 1
/// and `z = max` for bit 2. Loops wind counter-clockwise seen from outside.
pub const CUBOID_FACE_VERTICES: [u32; 30] = [
    4, 0, 2, 3, 1, // z = min
    4, 4, 5, 7, 6, // z = max
    4, 0, 1, 5, 4, // y = min
    4, 2, 6, 7, 3, // y = max
    4, 0, 4, 6, 2, // x = min
    4, 1, 3, 7, 5, // x = max
];

/// Writes a box cell into `geometry`, replacing its contents.
///
/// # Arguments
/// * `geometry` - Scratch geometry to fill
/// * `displacement` - Absolute position of the generating particle
/// * `min` - Lower corner relative to the particle
/// * `max` - Upper corner relative to the particle
///
/// # Returns
/// An error if `min` is not strictly below `max` on every axis.
///
/// # Examples
/// ```
/// use voro_export::primitives::cuboid::cuboid;
/// use voro_export::CellGeometry;
/// use glam::DVec3;
///
/// let mut cell = CellGeometry::new();
/// cuboid(&mut cell, DVec3::ZERO, DVec3::splat(-1.0), DVec3::splat(1.0)).unwrap();
/// assert_eq!(cell.point_count(), 8);
/// assert_eq!(cell.face_count().unwrap(), 6);
/// assert_eq!(cell.point_at(7), Some(DVec3::splat(1.0)));
/// ```
pub fn cuboid(
    geometry: &mut CellGeometry,
    displacement: DVec3,
    min: DVec3,
    max: DVec3,
) -> Result<(), GeometryError> {
    for (axis, lo, hi) in [('x', min.x, max.x), ('y', min.y, max.y), ('z', min.z, max.z)] {
        // Negated so NaN bounds are rejected too.
        if !(lo < hi) {
            return Err(GeometryError::InvalidBounds { axis, min: lo, max: hi });
        }
    }

    let lo = min / ENGINE_POINT_SCALE;
    let hi = max / ENGINE_POINT_SCALE;

    geometry.clear();
    geometry.set_displacement(displacement);
    geometry.extend_raw_points((0..8u32).map(|i| {
        [
            if i & 1 == 0 { lo.x } else { hi.x },
            if i & 2 == 0 { lo.y } else { hi.y },
            if i & 4 == 0 { lo.z } else { hi.z },
        ]
    }));
    geometry
        .face_vertices_mut()
        .extend_from_slice(&CUBOID_FACE_VERTICES);
    Ok(())
}
