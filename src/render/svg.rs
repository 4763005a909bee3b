// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Scene to SVG serialization
//!
//! The document is sized in points (1/72 inch), so stroke widths read like
//! plot line widths. Layout coordinates map to the page with a single scale
//! factor for both axes, which keeps the floorplan's aspect ratio at 1:1.

use std::fmt::Write;

use super::scene::{Layer, Scene, EDGE_OPACITY};
use super::{RenderConfig, Rgb, ViewBounds};

pub const FONT_FAMILY: &str = "DejaVu Sans, Arial, Helvetica, sans-serif";
pub const POINTS_PER_INCH: f64 = 72.0;

const TITLE_FONT_SIZE: f64 = 14.0;
const LABEL_FONT_SIZE: f64 = 8.0;
const TICK_FONT_SIZE: f64 = 9.0;
const PAD_LEFT: f64 = 60.0;
const PAD_RIGHT: f64 = 24.0;
const PAD_BOTTOM: f64 = 36.0;
const TARGET_TICKS: f64 = 8.0;

/// Mapping from layout units to page points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub bounds: ViewBounds,
    pub scale: f64,
    pub left: f64,
    pub top: f64,
}

impl Viewport {
    /// Fit `bounds` inside the page box, centered, with equal x/y scale.
    pub fn fit(bounds: ViewBounds, left: f64, top: f64, width: f64, height: f64) -> Self {
        let span_x = bounds.width().max(f64::EPSILON);
        let span_y = bounds.height().max(f64::EPSILON);
        let scale = (width / span_x).min(height / span_y);
        Self {
            bounds,
            scale,
            left: left + (width - span_x * scale) / 2.0,
            top: top + (height - span_y * scale) / 2.0,
        }
    }

    pub fn to_page(&self, (x, y): (f64, f64)) -> (f64, f64) {
        (
            self.left + (x - self.bounds.min_x) * self.scale,
            self.top + (self.bounds.max_y - y) * self.scale,
        )
    }

    pub fn plot_width(&self) -> f64 {
        self.bounds.width() * self.scale
    }

    pub fn plot_height(&self) -> f64 {
        self.bounds.height() * self.scale
    }
}

/// Escape text content for XML
pub fn escape_xml_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}

/// Round tick spacing: 1, 2 or 5 times a power of ten
pub fn tick_step(span: f64) -> f64 {
    if span.is_nan() || span <= 0.0 {
        return 1.0;
    }
    let raw = span / TARGET_TICKS;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

pub fn ticks(min: f64, max: f64) -> Vec<f64> {
    let step = tick_step(max - min);
    let mut value = (min / step).ceil() * step;
    let mut ticks = Vec::new();
    while value <= max + step * 1e-9 {
        // Avoid "-0" labels.
        ticks.push(if value.abs() < step * 1e-9 { 0.0 } else { value });
        value += step;
    }
    ticks
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

pub fn render_svg(scene: &Scene, config: &RenderConfig) -> String {
    let page_w = config.width_in * POINTS_PER_INCH;
    let page_h = config.height_in * POINTS_PER_INCH;
    let title_h = 16.0 + scene.title.len() as f64 * (TITLE_FONT_SIZE + 4.0);

    let viewport = Viewport::fit(
        scene.bounds,
        PAD_LEFT,
        title_h,
        page_w - PAD_LEFT - PAD_RIGHT,
        page_h - title_h - PAD_BOTTOM,
    );

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{page_w}" height="{page_h}" viewBox="0 0 {page_w} {page_h}" font-family="{FONT_FAMILY}">"#
    );
    let _ = write!(
        svg,
        r#"<rect x="0" y="0" width="{page_w}" height="{page_h}" fill="{}"/>"#,
        Rgb::WHITE
    );
    let _ = write!(
        svg,
        r#"<defs><clipPath id="plot-area"><rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}"/></clipPath></defs>"#,
        viewport.left,
        viewport.top,
        viewport.plot_width(),
        viewport.plot_height()
    );

    for (i, line) in scene.title.iter().enumerate() {
        let _ = write!(
            svg,
            r#"<text x="{:.3}" y="{:.3}" font-size="{TITLE_FONT_SIZE}" text-anchor="middle">{}</text>"#,
            page_w / 2.0,
            16.0 + (i as f64 + 0.5) * (TITLE_FONT_SIZE + 4.0),
            escape_xml_text(line)
        );
    }

    for layer in Layer::ORDER {
        let clipped = layer != Layer::Grid;
        if clipped {
            let _ = write!(svg, r#"<g id="{}" clip-path="url(#plot-area)">"#, layer.id());
        } else {
            let _ = write!(svg, r#"<g id="{}">"#, layer.id());
        }
        match layer {
            Layer::Grid => write_grid(&mut svg, &viewport),
            Layer::Connections => write_edges(&mut svg, scene, &viewport),
            Layer::Modules => write_modules(&mut svg, scene, &viewport),
            Layer::Outline => write_outline(&mut svg, scene, &viewport),
            Layer::Labels => write_labels(&mut svg, scene, &viewport),
        }
        svg.push_str("</g>");
    }

    svg.push_str("</svg>");
    svg
}

fn write_grid(svg: &mut String, viewport: &Viewport) {
    let b = viewport.bounds;
    let (x0, y0) = viewport.to_page((b.min_x, b.max_y));
    let (x1, y1) = viewport.to_page((b.max_x, b.min_y));

    for x in ticks(b.min_x, b.max_x) {
        let (px, _) = viewport.to_page((x, 0.0));
        let _ = write!(
            svg,
            r##"<line x1="{px:.3}" y1="{y0:.3}" x2="{px:.3}" y2="{y1:.3}" stroke="#b0b0b0" stroke-width="0.8" stroke-dasharray="1 2" stroke-opacity="0.3"/>"##
        );
        let _ = write!(
            svg,
            r#"<text x="{px:.3}" y="{:.3}" font-size="{TICK_FONT_SIZE}" text-anchor="middle">{}</text>"#,
            y1 + TICK_FONT_SIZE + 4.0,
            format_tick(x)
        );
    }
    for y in ticks(b.min_y, b.max_y) {
        let (_, py) = viewport.to_page((0.0, y));
        let _ = write!(
            svg,
            r##"<line x1="{x0:.3}" y1="{py:.3}" x2="{x1:.3}" y2="{py:.3}" stroke="#b0b0b0" stroke-width="0.8" stroke-dasharray="1 2" stroke-opacity="0.3"/>"##
        );
        let _ = write!(
            svg,
            r#"<text x="{:.3}" y="{py:.3}" font-size="{TICK_FONT_SIZE}" text-anchor="end" dominant-baseline="central">{}</text>"#,
            x0 - 4.0,
            format_tick(y)
        );
    }

    // Axes frame
    let _ = write!(
        svg,
        r#"<rect x="{x0:.3}" y="{y0:.3}" width="{:.3}" height="{:.3}" fill="none" stroke="{}" stroke-width="0.8"/>"#,
        x1 - x0,
        y1 - y0,
        Rgb::BLACK
    );
}

fn write_edges(svg: &mut String, scene: &Scene, viewport: &Viewport) {
    for edge in &scene.edges {
        let (x1, y1) = viewport.to_page(edge.from);
        let (x2, y2) = viewport.to_page(edge.to);
        let _ = write!(
            svg,
            r#"<line x1="{x1:.3}" y1="{y1:.3}" x2="{x2:.3}" y2="{y2:.3}" stroke="{}" stroke-width="{:.3}" stroke-opacity="{EDGE_OPACITY}" stroke-linecap="round"/>"#,
            Rgb::BLACK,
            edge.width
        );
    }
}

fn write_modules(svg: &mut String, scene: &Scene, viewport: &Viewport) {
    for rect in &scene.rects {
        // Page y grows downwards, so the rectangle's top-left is (x, y + h).
        let (x, y) = viewport.to_page((rect.x, rect.y + rect.height));
        let _ = write!(
            svg,
            r#"<rect x="{x:.3}" y="{y:.3}" width="{:.3}" height="{:.3}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="1"/>"#,
            rect.width * viewport.scale,
            rect.height * viewport.scale,
            rect.fill,
            rect.opacity,
            Rgb::BLACK
        );
    }

    for polygon in &scene.polygons {
        let points: Vec<String> = polygon
            .points
            .iter()
            .map(|&p| {
                let (x, y) = viewport.to_page(p);
                format!("{x:.3},{y:.3}")
            })
            .collect();
        let _ = write!(
            svg,
            r#"<polygon points="{}" fill="{}" fill-opacity="{}" stroke="{}" stroke-width="1" stroke-linejoin="miter"/>"#,
            points.join(" "),
            polygon.fill,
            polygon.opacity,
            Rgb::BLACK
        );
    }
}

fn write_outline(svg: &mut String, scene: &Scene, viewport: &Viewport) {
    let (x, y) = viewport.to_page((0.0, scene.outline.height as f64));
    let _ = write!(
        svg,
        r#"<rect x="{x:.3}" y="{y:.3}" width="{:.3}" height="{:.3}" fill="none" stroke="{}" stroke-width="2" stroke-dasharray="7.4 3.2"/>"#,
        scene.outline.width as f64 * viewport.scale,
        scene.outline.height as f64 * viewport.scale,
        scene.outline_color
    );
}

fn write_labels(svg: &mut String, scene: &Scene, viewport: &Viewport) {
    for label in &scene.labels {
        let (x, y) = viewport.to_page(label.at);
        let weight = if label.bold { "bold" } else { "normal" };
        let _ = write!(
            svg,
            r#"<text x="{x:.3}" y="{y:.3}" font-size="{LABEL_FONT_SIZE}" font-weight="{weight}" fill="{}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
            label.color,
            escape_xml_text(&label.text)
        );
    }
}
