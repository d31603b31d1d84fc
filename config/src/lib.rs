//! # Config Crate
//!
//! Centralized configuration constants for the Voronoi export pipeline.
//! Values that describe the upstream tessellation engine's representation
//! live here next to the tunable export limits, so no crate in the workspace
//! carries these literals on its own.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ENGINE_POINT_SCALE, VALUES_PER_VERTEX};
//!
//! // Raw engine coordinates are stored at twice their world-space size.
//! let raw = [2.0, -4.0, 1.0];
//! let local: Vec<f64> = raw.iter().map(|c| c * ENGINE_POINT_SCALE).collect();
//! assert_eq!(local, vec![1.0, -2.0, 0.5]);
//! assert_eq!(local.len(), VALUES_PER_VERTEX);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine Contract**: Representation constants mirror the engine's storage layout
//! - **Validated Overrides**: Tunables are only accepted through `GlobalConfig::new`

pub mod constants;
