//! Tests for the cell geometry scratch.

use super::*;

fn tetra_cell() -> CellGeometry {
    let mut cell = CellGeometry::new();
    cell.extend_raw_points([
        [2.0, 0.0, 0.0],
        [0.0, 2.0, 0.0],
        [0.0, 0.0, 2.0],
        [-2.0, 0.0, 0.0],
    ]);
    cell.face_vertices_mut().extend_from_slice(&[4, 0, 1, 2, 3]);
    cell
}

#[test]
fn point_at_applies_engine_scale() {
    let cell = tetra_cell();
    assert_eq!(cell.point_count(), 4);
    assert_eq!(cell.point_at(0), Some(DVec3::new(1.0, 0.0, 0.0)));
    assert_eq!(cell.point_at(2), Some(DVec3::new(0.0, 0.0, 1.0)));
    assert_eq!(cell.point_at(3), Some(DVec3::new(-1.0, 0.0, 0.0)));
}

#[test]
fn point_at_rejects_out_of_range() {
    let cell = tetra_cell();
    assert_eq!(cell.point_at(4), None);
    assert_eq!(cell.point_at(u32::MAX), None);
    assert_eq!(CellGeometry::new().point_at(0), None);
}

#[test]
fn points_matches_point_at() {
    let cell = tetra_cell();
    let all: Vec<DVec3> = cell.points().collect();
    for (i, p) in all.iter().enumerate() {
        assert_eq!(Some(*p), cell.point_at(i as u32));
    }
}

#[test]
fn clear_keeps_capacity() {
    let mut cell = tetra_cell();
    cell.set_displacement(DVec3::new(3.0, 4.0, 5.0));
    let capacity = cell.raw_points().len();
    cell.clear();

    assert!(cell.is_empty());
    assert!(cell.face_vertices().is_empty());
    assert_eq!(cell.displacement(), DVec3::ZERO);
    assert!(cell.pts.capacity() >= capacity);
}

#[test]
fn face_queries_use_compact_list() {
    let cell = tetra_cell();
    assert_eq!(cell.face_count().unwrap(), 1);
    let faces: Vec<&[u32]> = cell.face_loops().collect::<Result<_, _>>().unwrap();
    assert_eq!(faces, vec![&[0, 1, 2, 3][..]]);
}

#[test]
fn with_capacity_starts_empty() {
    let cell = CellGeometry::with_capacity(8, 30);
    assert!(cell.is_empty());
    assert_eq!(cell.point_count(), 0);
    assert_eq!(cell.face_count().unwrap(), 0);
}

#[test]
fn point_at_halves_every_component() {
    let mut cell = CellGeometry::new();
    cell.extend_raw_points([[0.0; 3], [3.0, -7.0, 0.25]]);
    assert_eq!(cell.point_at(1), Some(DVec3::new(1.5, -3.5, 0.125)));
}
