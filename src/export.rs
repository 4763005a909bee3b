// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use csv::Writer;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use crate::error::FloorplanError;
use crate::floorplan::{FixedModule, Problem, SoftModule, Solution};
use crate::geometry::{fixed_center, polygon_area, vertex_centroid};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleCsvRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Kind")]
    pub kind: &'static str,
    #[serde(rename = "CenterX")]
    pub center_x: f64,
    #[serde(rename = "CenterY")]
    pub center_y: f64,
    /// Empty when the area does not fit in a `u64`
    #[serde(rename = "Area")]
    pub area: Option<u64>,
    #[serde(rename = "MinArea")]
    pub min_area: Option<u64>,
    #[serde(rename = "MeetsMinArea")]
    pub meets_min_area: Option<bool>,
}

fn fixed_to_csv_record(module: &FixedModule) -> ModuleCsvRecord {
    let (center_x, center_y) = fixed_center(module);
    ModuleCsvRecord {
        name: module.name.clone(),
        kind: "FIXED",
        center_x,
        center_y,
        area: module
            .width
            .unsigned_abs()
            .checked_mul(module.height.unsigned_abs()),
        min_area: None,
        meets_min_area: None,
    }
}

fn soft_to_csv_record(module: &SoftModule, min_area: Option<u64>) -> ModuleCsvRecord {
    let (center_x, center_y) = vertex_centroid(&module.corners).unwrap_or((0.0, 0.0));
    let area = polygon_area(&module.corners);
    ModuleCsvRecord {
        name: module.name.clone(),
        kind: "SOFT",
        center_x,
        center_y,
        area,
        min_area,
        meets_min_area: min_area.zip(area).map(|(min, area)| area >= min),
    }
}

/// One record per fixed module, then one per solved soft module.
pub fn module_records(problem: &Problem, solution: &Solution) -> Vec<ModuleCsvRecord> {
    let min_areas: HashMap<&str, u64> = problem
        .soft_modules
        .iter()
        .filter_map(|spec| Some((spec.name.as_str(), spec.min_area()?)))
        .collect();

    problem
        .fixed_modules
        .iter()
        .map(fixed_to_csv_record)
        .chain(
            solution
                .soft_modules
                .iter()
                .map(|m| soft_to_csv_record(m, min_areas.get(m.name.as_str()).copied())),
        )
        .collect()
}

pub fn write_modules_csv<W: Write>(
    problem: &Problem,
    solution: &Solution,
    out: W,
) -> Result<(), FloorplanError> {
    let mut writer = Writer::from_writer(out);
    for record in module_records(problem, solution) {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Export the module table to a CSV file
pub fn export_modules_to_csv<P: AsRef<Path>>(
    problem: &Problem,
    solution: &Solution,
    file_path: P,
) -> Result<(), FloorplanError> {
    let file = std::fs::File::create(file_path.as_ref())?;
    write_modules_csv(problem, solution, file)?;
    log::info!("[SAVE] Module table written to {}", file_path.as_ref().display());
    Ok(())
}
