// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! SVG to PNG rasterization with resvg

use std::sync::Arc;

use resvg::tiny_skia;
use resvg::usvg;

use super::svg::{FONT_FAMILY, POINTS_PER_INCH};
use super::RenderConfig;
use crate::error::FloorplanError;

static DEJAVU_SANS: &[u8] = include_bytes!("fonts/DejaVuSans.ttf");
static DEJAVU_SANS_BOLD: &[u8] = include_bytes!("fonts/DejaVuSans-Bold.ttf");

/// Font database holding only the bundled DejaVu Sans faces.
pub fn bundled_font_database() -> usvg::fontdb::Database {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_font_data(DEJAVU_SANS.to_vec());
    fontdb.load_font_data(DEJAVU_SANS_BOLD.to_vec());
    fontdb
}

/// Rasterize an SVG document sized in points at `config.dpi`.
pub fn svg_to_png(svg: &str, config: &RenderConfig) -> Result<Vec<u8>, FloorplanError> {
    let mut fontdb = bundled_font_database();
    fontdb.load_system_fonts();
    rasterize(svg, config, fontdb)
}

fn rasterize(
    svg: &str,
    config: &RenderConfig,
    fontdb: usvg::fontdb::Database,
) -> Result<Vec<u8>, FloorplanError> {
    let options = usvg::Options {
        font_family: FONT_FAMILY
            .split(',')
            .next()
            .unwrap_or("sans-serif")
            .trim()
            .to_string(),
        fontdb: Arc::new(fontdb),
        ..usvg::Options::default()
    };

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| FloorplanError::Render(format!("failed to parse SVG: {e}")))?;

    let (px_w, px_h) = config.pixel_size();
    if px_w == 0 || px_h == 0 {
        return Err(FloorplanError::Render(
            "computed image dimensions are zero".to_string(),
        ));
    }

    let mut pixmap = tiny_skia::Pixmap::new(px_w, px_h)
        .ok_or_else(|| FloorplanError::Render("failed to allocate pixmap".to_string()))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let scale = config.dpi as f32 / POINTS_PER_INCH as f32;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    pixmap
        .encode_png()
        .map_err(|e| FloorplanError::Render(format!("failed to encode PNG: {e}")))
}
