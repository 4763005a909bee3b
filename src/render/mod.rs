// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Floorplan rendering
//!
//! A [`scene::Scene`] is built from the parsed data, serialized to SVG by
//! [`svg::render_svg`] and rasterized by [`png::svg_to_png`]. The PNG is fully
//! encoded in memory before anything is written, so a failed run never leaves
//! a partial image behind.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::blocks::BlockLayout;
use crate::error::FloorplanError;
use crate::floorplan::{ChipOutline, Connection, Problem, Solution};

pub mod png;
pub mod scene;
pub mod svg;

pub use scene::Scene;

/// Minimum resolution of the floorplan plot
pub const MIN_DPI: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const FIXED_GREY: Rgb = Rgb(0x40, 0x40, 0x40);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

// tab20
const PALETTE: [Rgb; 20] = [
    Rgb(0x1f, 0x77, 0xb4),
    Rgb(0xae, 0xc7, 0xe8),
    Rgb(0xff, 0x7f, 0x0e),
    Rgb(0xff, 0xbb, 0x78),
    Rgb(0x2c, 0xa0, 0x2c),
    Rgb(0x98, 0xdf, 0x8a),
    Rgb(0xd6, 0x27, 0x28),
    Rgb(0xff, 0x98, 0x96),
    Rgb(0x94, 0x67, 0xbd),
    Rgb(0xc5, 0xb0, 0xd5),
    Rgb(0x8c, 0x56, 0x4b),
    Rgb(0xc4, 0x9c, 0x94),
    Rgb(0xe3, 0x77, 0xc2),
    Rgb(0xf7, 0xb6, 0xd2),
    Rgb(0x7f, 0x7f, 0x7f),
    Rgb(0xc7, 0xc7, 0xc7),
    Rgb(0xbc, 0xbd, 0x22),
    Rgb(0xdb, 0xdb, 0x8d),
    Rgb(0x17, 0xbe, 0xcf),
    Rgb(0x9e, 0xda, 0xe5),
];

/// Fill color of the `index`-th module, cycling through the palette.
pub fn palette_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

pub const MIN_EDGE_WIDTH: f64 = 0.5;
pub const EDGE_WIDTH_RANGE: f64 = 3.0;

/// Stroke width of a connection relative to the heaviest one.
///
/// Returns `None` when `max_weight` is not positive: there is nothing to
/// scale against. The ratio is clamped so the width stays in `[0.5, 3.5]`.
pub fn connection_width(weight: i64, max_weight: i64) -> Option<f64> {
    if max_weight <= 0 {
        return None;
    }
    let ratio = (weight as f64 / max_weight as f64).clamp(0.0, 1.0);
    Some(MIN_EDGE_WIDTH + ratio * EDGE_WIDTH_RANGE)
}

/// Widths for a whole connection list, empty when the layer is skipped.
pub fn connection_widths(connections: &[Connection]) -> Vec<f64> {
    let max_weight = connections.iter().map(|c| c.weight).max().unwrap_or(0);
    if max_weight <= 0 {
        return Vec::new();
    }
    connections
        .iter()
        .filter_map(|c| connection_width(c.weight, max_weight))
        .collect()
}

/// Padding added around the outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewMargin {
    /// Fraction of the outline width (x) and height (y)
    Relative(f64),
    /// Same number of layout units on every side
    Absolute(f64),
}

impl Default for ViewMargin {
    fn default() -> Self {
        ViewMargin::Relative(0.05)
    }
}

impl ViewMargin {
    /// Horizontal and vertical padding for the given outline
    pub fn padding(&self, outline: &ChipOutline) -> (f64, f64) {
        match *self {
            ViewMargin::Relative(fraction) => (
                outline.width as f64 * fraction,
                outline.height as f64 * fraction,
            ),
            ViewMargin::Absolute(units) => (units, units),
        }
    }

    /// Margins must be finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        let (ViewMargin::Relative(value) | ViewMargin::Absolute(value)) = *self;
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(format!("view margin must be finite and non-negative, got {value}"))
        }
    }
}

/// Plotted data range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ViewBounds {
    pub fn around(outline: &ChipOutline, margin: ViewMargin) -> Self {
        let (pad_x, pad_y) = margin.padding(outline);
        Self {
            min_x: -pad_x,
            min_y: -pad_y,
            max_x: outline.width as f64 + pad_x,
            max_y: outline.height as f64 + pad_y,
        }
    }

    /// Grow to cover `(min_x, min_y, max_x, max_y)` plus `pad` units
    pub fn include(&mut self, extent: (i64, i64, i64, i64), pad: f64) {
        let (lx, ly, hx, hy) = extent;
        self.min_x = self.min_x.min(lx as f64 - pad);
        self.min_y = self.min_y.min(ly as f64 - pad);
        self.max_x = self.max_x.max(hx as f64 + pad);
        self.max_y = self.max_y.max(hy as f64 + pad);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub dpi: u32,
    /// Figure size in inches
    pub width_in: f64,
    pub height_in: f64,
    pub margin: ViewMargin,
    pub outline_color: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: MIN_DPI,
            width_in: 12.0,
            height_in: 10.0,
            margin: ViewMargin::default(),
            outline_color: Rgb::BLACK,
        }
    }
}

impl RenderConfig {
    /// Defaults for single-file block layouts
    pub fn blocks() -> Self {
        Self {
            width_in: 8.0,
            height_in: 6.0,
            margin: ViewMargin::Absolute(100.0),
            outline_color: Rgb::RED,
            ..Self::default()
        }
    }

    pub fn with_dpi(mut self, dpi: u32) -> Self {
        if dpi < MIN_DPI {
            log::warn!("[WARN] DPI {dpi} below minimum, using {MIN_DPI}");
            self.dpi = MIN_DPI;
        } else {
            self.dpi = dpi;
        }
        self
    }

    pub fn with_margin(mut self, margin: ViewMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Copy with the DPI floor applied, rejecting unusable margins and figure sizes.
    pub fn checked(&self) -> Result<Self, FloorplanError> {
        self.margin.validate().map_err(FloorplanError::Render)?;
        for (what, inches) in [("width", self.width_in), ("height", self.height_in)] {
            if !(inches.is_finite() && inches > 0.0) {
                return Err(FloorplanError::Render(format!(
                    "figure {what} must be positive, got {inches} in"
                )));
            }
        }
        Ok(self.clone().with_dpi(self.dpi))
    }

    /// Output size in pixels
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }
}

/// What happened to the optional and degenerate parts of the input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub edges_drawn: usize,
    /// Connections with an endpoint that names no known module
    pub edges_skipped: usize,
    /// Soft modules with fewer than three corners
    pub degenerate_polygons: usize,
}

pub fn render_floorplan<P: AsRef<Path>>(
    problem: &Problem,
    solution: &Solution,
    config: &RenderConfig,
    path: P,
) -> Result<RenderReport, FloorplanError> {
    let config = config.checked()?;
    let (scene, report) = Scene::from_floorplan(problem, solution, &config);
    write_scene(&scene, &config, path.as_ref())?;
    Ok(report)
}

pub fn render_block_layout<P: AsRef<Path>>(
    layout: &BlockLayout,
    config: &RenderConfig,
    path: P,
) -> Result<(), FloorplanError> {
    let config = config.checked()?;
    let scene = Scene::from_block_layout(layout, &config);
    write_scene(&scene, &config, path.as_ref())
}

fn write_scene(scene: &Scene, config: &RenderConfig, path: &Path) -> Result<(), FloorplanError> {
    let svg = svg::render_svg(scene, config);
    let bytes = png::svg_to_png(&svg, config)?;
    fs::write(path, &bytes)?;
    log::info!(
        "[SAVE] Wrote {} ({} bytes, {} dpi)",
        path.display(),
        bytes.len(),
        config.dpi
    );
    Ok(())
}
