//! Centralized configuration values shared across the Voronoi export pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// ENGINE REPRESENTATION
// =============================================================================

/// Scale applied to the tessellation engine's raw vertex coordinates.
///
/// The engine stores cell vertices relative to the generating particle at
/// twice their geometric size (its plane tests work on doubled coordinates),
/// so every raw component must be halved before use. This is a property of
/// the engine's `pts` layout, not a tunable.
///
/// # Examples
/// ```
/// use config::constants::ENGINE_POINT_SCALE;
/// assert_eq!(4.0 * ENGINE_POINT_SCALE, 2.0);
/// ```
pub const ENGINE_POINT_SCALE: f64 = 0.5;

/// Number of coordinate values stored per vertex, both in the engine's flat
/// point array and in exported vertex buffers.
///
/// # Examples
/// ```
/// use config::constants::VALUES_PER_VERTEX;
/// let flat = [0.0_f64; 12];
/// assert_eq!(flat.len() / VALUES_PER_VERTEX, 4);
/// ```
pub const VALUES_PER_VERTEX: usize = 3;

// =============================================================================
// PRECISION
// =============================================================================

/// Relative tolerance used when comparing reconstructed coordinates.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// EXPORT LIMITS
// =============================================================================

/// Number of vertices an export pass reserves room for up front.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_VERTEX_CAPACITY;
/// assert!(DEFAULT_VERTEX_CAPACITY > 0);
/// ```
pub const DEFAULT_VERTEX_CAPACITY: usize = 1024;

/// Number of cells an export pass reserves room for up front.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CELL_CAPACITY;
/// assert!(DEFAULT_CELL_CAPACITY > 0);
/// ```
pub const DEFAULT_CELL_CAPACITY: usize = 64;

/// Largest vertex or cell capacity an export pass will reserve up front.
///
/// Reservation is only a hint; passes larger than this still grow on demand.
///
/// # Examples
/// ```
/// use config::constants::{MAX_BUFFER_CAPACITY, VALUES_PER_VERTEX};
/// assert!(MAX_BUFFER_CAPACITY.checked_mul(VALUES_PER_VERTEX).is_some());
/// ```
pub const MAX_BUFFER_CAPACITY: usize = 1 << 24;

/// Upper bound on the number of face-loop vertices a single cell may export.
///
/// Real Voronoi cells stay far below this; a cell exceeding it points at a
/// corrupted face list rather than legitimate geometry.
///
/// # Examples
/// ```
/// use config::constants::MAX_CELL_VERTICES;
/// assert!(MAX_CELL_VERTICES >= 24);
/// ```
pub const MAX_CELL_VERTICES: usize = 1 << 20;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.max_cell_vertices > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Vertices reserved in the export buffer at the start of a pass.
    pub vertex_capacity: usize,
    /// Cells reserved in the size buffer at the start of a pass.
    pub cell_capacity: usize,
    /// Maximum number of vertices one cell may contribute.
    pub max_cell_vertices: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// limits.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(256, 16, 4096).expect("valid config");
    /// assert_eq!(cfg.cell_capacity, 16);
    /// ```
    pub fn new(
        vertex_capacity: usize,
        cell_capacity: usize,
        max_cell_vertices: usize,
    ) -> Result<Self, ConfigError> {
        if max_cell_vertices == 0 {
            return Err(ConfigError::InvalidVertexLimit(max_cell_vertices));
        }
        if max_cell_vertices > MAX_CELL_VERTICES {
            return Err(ConfigError::InvalidVertexLimit(max_cell_vertices));
        }
        if vertex_capacity > MAX_BUFFER_CAPACITY {
            return Err(ConfigError::InvalidCapacity(vertex_capacity));
        }
        if cell_capacity > MAX_BUFFER_CAPACITY {
            return Err(ConfigError::InvalidCapacity(cell_capacity));
        }
        Ok(Self {
            vertex_capacity,
            cell_capacity,
            max_cell_vertices,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: DEFAULT_VERTEX_CAPACITY,
            cell_capacity: DEFAULT_CELL_CAPACITY,
            max_cell_vertices: MAX_CELL_VERTICES,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the per-cell vertex limit is zero or above `MAX_CELL_VERTICES`.
    InvalidVertexLimit(usize),
    /// Raised when a reserved capacity exceeds `MAX_BUFFER_CAPACITY`.
    InvalidCapacity(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidVertexLimit(value) => {
                write!(
                    f,
                    "max_cell_vertices must be in 1..={MAX_CELL_VERTICES}: {value}"
                )
            }
            ConfigError::InvalidCapacity(value) => {
                write!(
                    f,
                    "buffer capacity must be at most {MAX_BUFFER_CAPACITY}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
