//! Export-level configuration building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so the export pipeline can
//! stay decoupled from literal constants.

use config::constants::{
    ConfigError, GlobalConfig, DEFAULT_CELL_CAPACITY, DEFAULT_VERTEX_CAPACITY, MAX_CELL_VERTICES,
};
use serde::Serialize;

/// Export pass configuration.
///
/// # Examples
/// ```
/// use voro_export::config::ExportConfig;
/// let cfg = ExportConfig::default();
/// assert!(cfg.max_cell_vertices > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportConfig {
    /// Vertices reserved in the vertex buffer when a pass begins.
    pub vertex_capacity: usize,
    /// Cells reserved in the size buffer when a pass begins.
    pub cell_capacity: usize,
    /// Largest number of vertices a single cell may contribute.
    pub max_cell_vertices: usize,
}

impl ExportConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use voro_export::config::ExportConfig;
    /// let cfg = ExportConfig::new(4096, 128, 512).unwrap();
    /// assert_eq!(cfg.max_cell_vertices, 512);
    /// ```
    pub fn new(
        vertex_capacity: usize,
        cell_capacity: usize,
        max_cell_vertices: usize,
    ) -> Result<Self, ExportConfigError> {
        GlobalConfig::new(vertex_capacity, cell_capacity, max_cell_vertices)
            .map(Self::from)
            .map_err(ExportConfigError)
    }

    /// Returns a copy with a different per-cell vertex limit.
    ///
    /// # Examples
    /// ```
    /// use voro_export::config::ExportConfig;
    /// let cfg = ExportConfig::default().with_max_cell_vertices(24).unwrap();
    /// assert_eq!(cfg.max_cell_vertices, 24);
    /// ```
    pub fn with_max_cell_vertices(self, max_cell_vertices: usize) -> Result<Self, ExportConfigError> {
        Self::new(self.vertex_capacity, self.cell_capacity, max_cell_vertices)
    }
}

impl From<GlobalConfig> for ExportConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            vertex_capacity: cfg.vertex_capacity,
            cell_capacity: cfg.cell_capacity,
            max_cell_vertices: cfg.max_cell_vertices,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: DEFAULT_VERTEX_CAPACITY,
            cell_capacity: DEFAULT_CELL_CAPACITY,
            max_cell_vertices: MAX_CELL_VERTICES,
        }
    }
}

/// Error wrapper for invalid export configuration.
#[derive(Debug, PartialEq)]
pub struct ExportConfigError(ConfigError);

impl std::fmt::Display for ExportConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExportConfigError {}

#[cfg(test)]
mod tests;
