//! Primitive cell generators.
//!
//! This module builds cell geometry directly in the engine's representation,
//! for seeding a computation or for fixtures that need realistic cells.

pub mod cuboid;
