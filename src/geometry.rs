// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Module centers and polygon helpers

use std::collections::HashMap;

use crate::floorplan::{FixedModule, SoftModule};

/// Module name to center point, rebuilt for every render.
pub type ModuleCenterMap = HashMap<String, (f64, f64)>;

pub fn fixed_center(module: &FixedModule) -> (f64, f64) {
    (
        module.x as f64 + module.width as f64 / 2.0,
        module.y as f64 + module.height as f64 / 2.0,
    )
}

/// Mean of the corner coordinates. This is the vertex centroid, not the
/// area centroid, and is only meant for anchoring labels and edges.
pub fn vertex_centroid(corners: &[(i64, i64)]) -> Option<(f64, f64)> {
    if corners.is_empty() {
        return None;
    }
    let n = corners.len() as f64;
    let sum_x: f64 = corners.iter().map(|&(x, _)| x as f64).sum();
    let sum_y: f64 = corners.iter().map(|&(_, y)| y as f64).sum();
    Some((sum_x / n, sum_y / n))
}

pub fn module_centers(fixed: &[FixedModule], soft: &[SoftModule]) -> ModuleCenterMap {
    let mut centers = HashMap::with_capacity(fixed.len() + soft.len());

    for module in fixed {
        centers.insert(module.name.clone(), fixed_center(module));
    }

    for module in soft {
        if let Some(center) = vertex_centroid(&module.corners) {
            centers.insert(module.name.clone(), center);
        }
    }

    centers
}

/// Shoelace area. `None` when the area does not fit in a `u64`.
pub fn polygon_area(corners: &[(i64, i64)]) -> Option<u64> {
    if corners.len() < 3 {
        return Some(0);
    }

    let n = corners.len();
    let mut twice_area: i128 = 0;
    for i in 0..n {
        let (x1, y1) = corners[i];
        let (x2, y2) = corners[(i + 1) % n];
        let cross = (x1 as i128 * y2 as i128).checked_sub(x2 as i128 * y1 as i128)?;
        twice_area = twice_area.checked_add(cross)?;
    }
    u64::try_from(twice_area.unsigned_abs() / 2).ok()
}

/// Axis-aligned bounds `(min_x, min_y, max_x, max_y)` of a point set
pub fn bounds(points: &[(i64, i64)]) -> Option<(i64, i64, i64, i64)> {
    let (&(x0, y0), rest) = points.split_first()?;
    Some(rest.iter().fold((x0, y0, x0, y0), |(lx, ly, hx, hy), &(x, y)| {
        (lx.min(x), ly.min(y), hx.max(x), hy.max(y))
    }))
}
