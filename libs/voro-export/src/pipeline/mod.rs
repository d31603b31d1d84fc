//! # Export Pipeline
//!
//! Drives one export pass: advance the traversal, have the engine compute the
//! current cell into the scratch geometry, decode its faces, reconstruct each
//! referenced point and append the result.
//!
//! Cells are exported face-grouped: a cell's vertices are its face loops
//! concatenated in face order, so a vertex shared by three faces appears three
//! times. Consumers recover face boundaries from the cell's compact face list.

use glam::DVec3;

use crate::config::ExportConfig;
use crate::error::{ExportError, ExportResult};
use crate::export::{ExportAccumulator, ExportSnapshot};
use crate::geometry::CellGeometry;
use crate::reconstruct::reconstruct;
use crate::source::{CellGeometrySource, CellIterationDriver};

/// Exports every cell of a traversal into flat buffers.
///
/// `geometry` is the caller's scratch value; it holds the last cell computed
/// when the function returns.
///
/// # Errors
///
/// Any failure aborts the pass and no buffers are returned:
/// - [`ExportError::Upstream`] when the engine fails to compute a cell,
/// - [`ExportError::Decode`] for a malformed face list,
/// - [`ExportError::PointIndexOutOfRange`] for a face referencing a missing point,
/// - [`ExportError::TooManyVertices`] when a cell exceeds the configured limit.
///
/// # Examples
/// ```
/// use voro_export::{export_cells, CellGeometry, PrecomputedCell, PrecomputedContainer};
/// use voro_export::config::ExportConfig;
/// use glam::DVec3;
///
/// let mut container = PrecomputedContainer::new();
/// container.put(
///     PrecomputedCell::new(
///         0,
///         DVec3::new(10.0, 0.0, 0.0),
///         vec![2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0],
///         vec![3, 0, 1, 2],
///     )
///     .unwrap(),
/// );
///
/// let mut scratch = CellGeometry::new();
/// let snapshot = export_cells(
///     &container,
///     &mut container.loop_all(),
///     &mut scratch,
///     &ExportConfig::default(),
/// )
/// .unwrap();
///
/// assert_eq!(snapshot.cell_sizes(), &[3]);
/// assert_eq!(&snapshot.vertices()[..3], &[11.0, 0.0, 0.0]);
/// ```
#[tracing::instrument(skip_all, name = "export::export_cells")]
pub fn export_cells<S, D>(
    source: &S,
    driver: &mut D,
    geometry: &mut CellGeometry,
    config: &ExportConfig,
) -> ExportResult<ExportSnapshot>
where
    S: CellGeometrySource<Handle = D::Handle>,
    D: CellIterationDriver,
{
    let mut accumulator = ExportAccumulator::begin_with(config);
    let mut cell_vertices = Vec::new();

    tracing::debug!("export pass started");

    if driver.start() {
        let mut cell = 0usize;
        while let Some(handle) = driver.current() {
            if let Err(err) = export_cell(
                source,
                handle,
                cell,
                geometry,
                &mut cell_vertices,
                &mut accumulator,
            ) {
                tracing::warn!(cell, ?handle, error = %err, "export pass aborted");
                return Err(err);
            }
            cell += 1;
            if !driver.inc() {
                break;
            }
        }
    }

    let snapshot = accumulator.finish()?;
    tracing::debug!(
        cells = snapshot.cell_count(),
        vertices = snapshot.vertex_count(),
        "export pass finished"
    );
    Ok(snapshot)
}

fn export_cell<S: CellGeometrySource>(
    source: &S,
    handle: S::Handle,
    cell: usize,
    geometry: &mut CellGeometry,
    cell_vertices: &mut Vec<DVec3>,
    accumulator: &mut ExportAccumulator,
) -> ExportResult<()> {
    source
        .compute_cell(geometry, handle)
        .map_err(|err| ExportError::upstream(cell, err))?;
    collect_face_vertices(geometry, cell, cell_vertices)?;
    tracing::trace!(
        cell,
        points = geometry.point_count(),
        vertices = cell_vertices.len(),
        "cell exported"
    );
    accumulator.append_cell(cell_vertices)
}

/// Reconstructs the absolute vertices of every face loop of `geometry`.
///
/// `out` is cleared first and then filled in face order. `cell` is the
/// traversal ordinal reported in errors.
///
/// # Examples
/// ```
/// use voro_export::{collect_face_vertices, CellGeometry};
/// use glam::DVec3;
///
/// let mut cell = CellGeometry::new();
/// cell.set_displacement(DVec3::new(0.0, 0.0, 5.0));
/// cell.extend_raw_points([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0]]);
/// cell.face_vertices_mut().extend_from_slice(&[2, 1, 0]);
///
/// let mut out = Vec::new();
/// collect_face_vertices(&cell, 0, &mut out).unwrap();
/// assert_eq!(out, vec![DVec3::new(0.0, 1.0, 5.0), DVec3::new(1.0, 0.0, 5.0)]);
/// ```
pub fn collect_face_vertices(
    geometry: &CellGeometry,
    cell: usize,
    out: &mut Vec<DVec3>,
) -> ExportResult<()> {
    out.clear();
    let displacement = geometry.displacement();
    for face in geometry.face_loops() {
        let face = face.map_err(|source| ExportError::decode(cell, source))?;
        for &index in face {
            let point = geometry
                .point_at(index)
                .ok_or(ExportError::PointIndexOutOfRange {
                    cell,
                    index,
                    point_count: geometry.point_count(),
                })?;
            out.push(reconstruct(displacement, point));
        }
    }
    Ok(())
}
