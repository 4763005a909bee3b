//! Floorplan Viewer Library
//!
//! This library parses chip floorplanning problem and result files and renders
//! the placed outline, modules and weighted connections to a PNG image.

pub mod blocks;
pub mod cli;
pub mod error;
pub mod export;
pub mod floorplan;
pub mod geometry;
pub mod render;

// Re-export commonly used types
pub use blocks::{Block, BlockLayout, BlockLayoutFormat};
pub use error::{FloorplanError, ParseError};
pub use floorplan::{ChipOutline, Connection, FixedModule, Problem, SoftModule, Solution};
pub use render::{RenderConfig, RenderReport, ViewMargin};
