//! # Voro Export
//!
//! Extracts per-cell polygon geometry from a Voronoi tessellation engine and
//! flattens it into buffers a renderer or analysis tool can consume.
//!
//! ## Architecture
//!
//! ```text
//! CellIterationDriver ──► CellGeometrySource::compute_cell ──► CellGeometry
//!                                                                  │
//!        ExportSnapshot ◄── ExportAccumulator ◄── reconstruct ◄── FaceLoops
//! ```
//!
//! The engine itself is external; anything implementing [`CellIterationDriver`]
//! and [`CellGeometrySource`] can be exported. [`PrecomputedContainer`] holds
//! engine output in memory and implements both.
//!
//! ## Usage
//!
//! ```rust
//! use voro_export::primitives::cuboid::cuboid;
//! use voro_export::config::ExportConfig;
//! use voro_export::{CellGeometry, PrecomputedCell, PrecomputedContainer};
//! use glam::DVec3;
//!
//! let mut scratch = CellGeometry::new();
//! cuboid(&mut scratch, DVec3::new(2.0, 0.0, 0.0), DVec3::splat(-1.0), DVec3::splat(1.0)).unwrap();
//!
//! let mut container = PrecomputedContainer::new();
//! container.put(PrecomputedCell::from_geometry(0, &scratch));
//!
//! let snapshot = container.export(&ExportConfig::default()).unwrap();
//! assert_eq!(snapshot.cell_sizes(), &[24]); // 6 faces x 4 vertices
//! assert_eq!(snapshot.vertices().len(), 72);
//! ```

pub mod config;
pub mod container;
pub mod error;
pub mod export;
pub mod faces;
pub mod geometry;
pub mod pipeline;
pub mod primitives;
pub mod reconstruct;
pub mod source;

pub use container::{CellLoop, ContainerError, PrecomputedCell, PrecomputedContainer};
pub use error::{DecodeError, ExportError, ExportResult, GeometryError, UpstreamError};
pub use export::{ExportAccumulator, ExportSnapshot};
pub use faces::{decode, face_loops, FaceLoop, FaceLoops};
pub use geometry::CellGeometry;
pub use pipeline::{collect_face_vertices, export_cells};
pub use reconstruct::reconstruct;
pub use source::{CellGeometrySource, CellIterationDriver};
