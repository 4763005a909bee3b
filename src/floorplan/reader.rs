// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::fs;
use std::path::Path;

use super::{parse_problem, parse_solution, Problem, Solution};
use crate::error::FloorplanError;

pub struct FloorplanReader;

impl FloorplanReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_problem<P: AsRef<Path>>(&self, path: P) -> Result<Problem, FloorplanError> {
        let path = path.as_ref();
        let content = read_source(path, "problem")?;

        match parse_problem(&content) {
            Ok(problem) => {
                log::info!(
                    "[PASS] Problem parsed: chip {} x {}, {} fixed, {} soft, {} connections",
                    problem.outline.width,
                    problem.outline.height,
                    problem.fixed_modules.len(),
                    problem.soft_modules.len(),
                    problem.connections.len()
                );
                Ok(problem)
            }
            Err(source) => {
                log::error!("[FAIL] Failed to parse problem file: {source}");
                Err(FloorplanError::Parse {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    pub fn read_solution<P: AsRef<Path>>(&self, path: P) -> Result<Solution, FloorplanError> {
        let path = path.as_ref();
        let content = read_source(path, "result")?;

        match parse_solution(&content) {
            Ok(solution) => {
                let corners: usize = solution.soft_modules.iter().map(|m| m.corners.len()).sum();
                log::info!(
                    "[PASS] Result parsed: HPWL {:.1}, {} soft modules, {corners} corners",
                    solution.hpwl,
                    solution.soft_modules.len()
                );
                Ok(solution)
            }
            Err(source) => {
                log::error!("[FAIL] Failed to parse result file: {source}");
                Err(FloorplanError::Parse {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

impl Default for FloorplanReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a whole input file; the handle is closed before parsing starts.
pub(crate) fn read_source(path: &Path, kind: &str) -> Result<String, FloorplanError> {
    log::info!("[LOAD] Loading {kind} file: {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| FloorplanError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("[FILE] {kind} file size: {} bytes", content.len());
    Ok(content)
}
