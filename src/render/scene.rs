// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Layered scene description in layout coordinates

use super::{connection_width, palette_color, RenderConfig, RenderReport, Rgb, ViewBounds};
use crate::blocks::BlockLayout;
use crate::floorplan::{ChipOutline, Problem, Solution};
use crate::geometry::{self, fixed_center, module_centers, vertex_centroid};

pub const FIXED_OPACITY: f64 = 0.9;
pub const SOFT_OPACITY: f64 = 0.7;
pub const EDGE_OPACITY: f64 = 0.6;

pub const METRIC_NAMES: [&str; 5] = ["Cost", "Wirelength", "Area", "Dimensions", "Runtime"];

/// Drawing layers, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Grid,
    Connections,
    Modules,
    Outline,
    Labels,
}

impl Layer {
    pub const ORDER: [Layer; 5] = [
        Layer::Grid,
        Layer::Connections,
        Layer::Modules,
        Layer::Outline,
        Layer::Labels,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Layer::Grid => "layer-grid",
            Layer::Connections => "layer-connections",
            Layer::Modules => "layer-modules",
            Layer::Outline => "layer-outline",
            Layer::Labels => "layer-labels",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgb,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenePolygon {
    pub points: Vec<(f64, f64)>,
    pub fill: Rgb,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneEdge {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLabel {
    pub text: String,
    pub at: (f64, f64),
    pub color: Rgb,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub title: Vec<String>,
    pub bounds: ViewBounds,
    pub outline: ChipOutline,
    pub outline_color: Rgb,
    pub edges: Vec<SceneEdge>,
    pub rects: Vec<SceneRect>,
    pub polygons: Vec<ScenePolygon>,
    pub labels: Vec<SceneLabel>,
}

impl Scene {
    fn empty(outline: ChipOutline, config: &RenderConfig) -> Self {
        Self {
            title: Vec::new(),
            bounds: ViewBounds::around(&outline, config.margin),
            outline,
            outline_color: config.outline_color,
            edges: Vec::new(),
            rects: Vec::new(),
            polygons: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn from_floorplan(
        problem: &Problem,
        solution: &Solution,
        config: &RenderConfig,
    ) -> (Self, RenderReport) {
        let mut scene = Self::empty(problem.outline, config);
        let mut report = RenderReport::default();

        scene.title = vec![
            format!("Floorplan Result (HPWL: {:.1})", solution.hpwl),
            "Fixed: Grey | Soft: Colored | Lines: Connections".to_string(),
        ];

        let centers = module_centers(&problem.fixed_modules, &solution.soft_modules);

        let max_weight = problem
            .connections
            .iter()
            .map(|c| c.weight)
            .max()
            .unwrap_or(0);
        if !problem.connections.is_empty() && max_weight <= 0 {
            log::warn!(
                "[WARN] Largest connection weight is {max_weight}, skipping connection layer"
            );
        }
        for connection in &problem.connections {
            let Some(width) = connection_width(connection.weight, max_weight) else {
                break;
            };
            match (
                centers.get(&connection.source),
                centers.get(&connection.target),
            ) {
                (Some(&from), Some(&to)) => {
                    scene.edges.push(SceneEdge { from, to, width });
                    report.edges_drawn += 1;
                }
                _ => {
                    log::debug!(
                        "Skipping connection {} -> {}: unknown module",
                        connection.source,
                        connection.target
                    );
                    report.edges_skipped += 1;
                }
            }
        }

        for module in &problem.fixed_modules {
            scene.rects.push(SceneRect {
                x: module.x as f64,
                y: module.y as f64,
                width: module.width as f64,
                height: module.height as f64,
                fill: Rgb::FIXED_GREY,
                opacity: FIXED_OPACITY,
            });
            scene.labels.push(SceneLabel {
                text: module.name.clone(),
                at: fixed_center(module),
                color: Rgb::WHITE,
                bold: true,
            });
        }

        for (index, module) in solution.soft_modules.iter().enumerate() {
            if module.corners.len() < 3 {
                log::warn!(
                    "[WARN] Soft module {} has {} corners, not drawn",
                    module.name,
                    module.corners.len()
                );
                report.degenerate_polygons += 1;
                continue;
            }
            scene.polygons.push(ScenePolygon {
                points: module
                    .corners
                    .iter()
                    .map(|&(x, y)| (x as f64, y as f64))
                    .collect(),
                fill: palette_color(index),
                opacity: SOFT_OPACITY,
            });
            if let Some(at) = vertex_centroid(&module.corners) {
                scene.labels.push(SceneLabel {
                    text: module.name.clone(),
                    at,
                    color: Rgb::BLACK,
                    bold: false,
                });
            }
        }

        (scene, report)
    }

    pub fn from_block_layout(layout: &BlockLayout, config: &RenderConfig) -> Self {
        let mut scene = Self::empty(layout.outline, config);

        scene.title.push("B*-Tree Floorplan Visualization".to_string());
        if !layout.metrics.is_empty() {
            let summary: Vec<String> = METRIC_NAMES
                .iter()
                .zip(&layout.metrics)
                .map(|(name, value)| format!("{name}: {value}"))
                .collect();
            scene.title.push(summary.join(" | "));
        }

        let corners: Vec<(i64, i64)> = layout
            .blocks
            .iter()
            .flat_map(|b| [(b.x1, b.y1), (b.x2, b.y2)])
            .collect();
        if let Some(extent) = geometry::bounds(&corners) {
            let (pad_x, pad_y) = config.margin.padding(&layout.outline);
            scene.bounds.include(extent, pad_x.max(pad_y));
        }

        for (index, block) in layout.blocks.iter().enumerate() {
            scene.rects.push(SceneRect {
                x: block.x1 as f64,
                y: block.y1 as f64,
                width: block.width() as f64,
                height: block.height() as f64,
                fill: palette_color(index),
                opacity: SOFT_OPACITY,
            });
            scene.labels.push(SceneLabel {
                text: block.name.clone(),
                at: block.center(),
                color: Rgb::BLACK,
                bold: false,
            });
        }

        scene
    }
}
