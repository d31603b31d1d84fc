//! Tests for the export accumulator and snapshot.

use super::*;

fn quad(offset: f64) -> Vec<DVec3> {
    vec![
        DVec3::new(offset, 0.0, 0.0),
        DVec3::new(offset + 1.0, 0.0, 0.0),
        DVec3::new(offset + 1.0, 1.0, 0.0),
        DVec3::new(offset, 1.0, 0.0),
    ]
}

#[test]
fn empty_pass_yields_empty_buffers() {
    let snapshot = ExportAccumulator::begin().finish().unwrap();
    assert!(snapshot.is_empty());
    assert!(snapshot.vertices().is_empty());
    assert!(snapshot.cell_sizes().is_empty());
    assert!(snapshot.cell_ranges().is_empty());
}

#[test]
fn append_preserves_order_and_sizes() {
    let mut acc = ExportAccumulator::begin();
    acc.append_cell(&quad(0.0)).unwrap();
    acc.append_cell(&[]).unwrap();
    acc.append_cell(&[DVec3::new(7.0, 8.0, 9.0)]).unwrap();
    assert_eq!(acc.cell_count(), 3);
    assert_eq!(acc.vertex_count(), 5);

    let snapshot = acc.finish().unwrap();
    assert_eq!(snapshot.cell_sizes(), &[4, 0, 1]);
    assert_eq!(
        snapshot.vertices(),
        &[
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 7.0, 8.0, 9.0
        ]
    );
}

#[test]
fn vertex_buffer_length_tracks_sizes() {
    let mut acc = ExportAccumulator::begin();
    let counts = [0usize, 3, 1, 7, 24, 2];
    for (i, &n) in counts.iter().enumerate() {
        let cell: Vec<DVec3> = (0..n).map(|k| DVec3::splat((i * 100 + k) as f64)).collect();
        acc.append_cell(&cell).unwrap();
    }
    let snapshot = acc.finish().unwrap();

    let total: usize = counts.iter().sum();
    assert_eq!(snapshot.vertices().len(), 3 * total);
    let size_total: u32 = snapshot.cell_sizes().iter().sum();
    assert_eq!(size_total as usize, total);
}

#[test]
fn append_after_finish_fails() {
    let mut acc = ExportAccumulator::begin();
    acc.append_cell(&quad(0.0)).unwrap();
    let snapshot = acc.finish().unwrap();
    assert!(acc.is_finalized());

    assert!(matches!(
        acc.append_cell(&quad(1.0)),
        Err(ExportError::UseAfterFinalize)
    ));
    assert!(matches!(acc.finish(), Err(ExportError::UseAfterFinalize)));
    // The snapshot handed out earlier is untouched.
    assert_eq!(snapshot.cell_sizes(), &[4]);
}

#[test]
fn reset_reopens_an_empty_pass() {
    let mut acc = ExportAccumulator::begin();
    acc.append_cell(&quad(0.0)).unwrap();
    acc.finish().unwrap();

    acc.reset();
    assert!(!acc.is_finalized());
    assert_eq!(acc.cell_count(), 0);
    acc.append_cell(&quad(5.0)).unwrap();
    let snapshot = acc.finish().unwrap();
    assert_eq!(snapshot.cell_sizes(), &[4]);
    assert_eq!(snapshot.vertices()[0], 5.0);
}

#[test]
fn oversized_cell_is_rejected_without_appending() {
    let config = ExportConfig::default().with_max_cell_vertices(3).unwrap();
    let mut acc = ExportAccumulator::begin_with(&config);
    acc.append_cell(&[DVec3::ONE]).unwrap();

    match acc.append_cell(&quad(0.0)) {
        Err(ExportError::TooManyVertices { cell, count, max }) => {
            assert_eq!((cell, count, max), (1, 4, 3));
        }
        other => panic!("expected TooManyVertices, got {other:?}"),
    }
    assert_eq!(acc.cell_count(), 1);
    assert_eq!(acc.vertex_count(), 1);
}

#[test]
fn cell_ranges_are_prefix_sums() {
    let mut acc = ExportAccumulator::begin();
    acc.append_cell(&quad(0.0)).unwrap();
    acc.append_cell(&[]).unwrap();
    acc.append_cell(&quad(2.0)[..2]).unwrap();
    let snapshot = acc.finish().unwrap();

    assert_eq!(snapshot.cell_ranges(), vec![0..4, 4..4, 4..6]);
    assert_eq!(snapshot.cell_vertices(1), Some(&[][..]));
    assert_eq!(
        snapshot.cell_vertices(2),
        Some(&[2.0, 0.0, 0.0, 3.0, 0.0, 0.0][..])
    );
    assert_eq!(snapshot.cell_vertices(3), None);
}

#[test]
fn concat_matches_a_single_pass() {
    let cells: Vec<Vec<DVec3>> = (0..5).map(|i| quad(i as f64)).collect();

    let mut whole = ExportAccumulator::begin();
    for cell in &cells {
        whole.append_cell(cell).unwrap();
    }
    let whole = whole.finish().unwrap();

    let parts = cells.chunks(2).map(|chunk| {
        let mut acc = ExportAccumulator::begin();
        for cell in chunk {
            acc.append_cell(cell).unwrap();
        }
        acc.finish().unwrap()
    });

    assert_eq!(ExportSnapshot::concat(parts), whole);
}

#[test]
fn f32_view_narrows_every_value() {
    let mut acc = ExportAccumulator::begin();
    acc.append_cell(&[DVec3::new(0.1, -2.5, 1.0e3)]).unwrap();
    let snapshot = acc.finish().unwrap();
    assert_eq!(snapshot.vertices_f32(), vec![0.1f32, -2.5, 1000.0]);
}

#[test]
fn snapshot_serializes_both_buffers() {
    let mut acc = ExportAccumulator::begin();
    acc.append_cell(&[DVec3::new(1.0, 2.0, 3.0)]).unwrap();
    let snapshot = acc.finish().unwrap();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "vertices": [1.0, 2.0, 3.0], "cell_sizes": [1] })
    );
}

#[test]
fn into_parts_transfers_buffers() {
    let mut acc = ExportAccumulator::begin();
    acc.append_cell(&quad(0.0)).unwrap();
    let (vertices, sizes) = acc.finish().unwrap().into_parts();
    assert_eq!(vertices.len(), 12);
    assert_eq!(sizes, vec![4]);
}

#[test]
fn unvalidated_capacities_are_clamped_on_begin() {
    let config = ExportConfig {
        vertex_capacity: usize::MAX / 3,
        cell_capacity: usize::MAX,
        max_cell_vertices: 8,
    };
    let mut acc = ExportAccumulator::begin_with(&config);
    acc.append_cell(&quad(0.0)).unwrap();
    let snapshot = acc.finish().unwrap();
    assert_eq!(snapshot.cell_sizes(), &[4]);
}

#[test]
fn unbounded_vertex_limit_still_records_exact_sizes() {
    let config = ExportConfig {
        max_cell_vertices: usize::MAX,
        ..ExportConfig::default()
    };
    let mut acc = ExportAccumulator::begin_with(&config);
    let big = vec![DVec3::ONE; 70_000];
    acc.append_cell(&big).unwrap();
    acc.append_cell(&quad(0.0)).unwrap();
    let snapshot = acc.finish().unwrap();
    assert_eq!(snapshot.cell_sizes(), &[70_000, 4]);
}

#[test]
fn cell_vertices_agrees_with_cell_ranges() {
    let mut acc = ExportAccumulator::begin();
    for i in 0..6 {
        acc.append_cell(&quad(i as f64)[..i % 4]).unwrap();
    }
    let snapshot = acc.finish().unwrap();

    for (index, range) in snapshot.cell_ranges().into_iter().enumerate() {
        let expected = &snapshot.vertices()[range.start * 3..range.end * 3];
        assert_eq!(snapshot.cell_vertices(index), Some(expected));
    }
}
