// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipOutline {
    pub width: i64,
    pub height: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedModule {
    pub name: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// Soft module requirement as declared in the problem file.
///
/// The area token is kept verbatim; plotting never needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftModuleSpec {
    pub name: String,
    pub area: String,
}

impl SoftModuleSpec {
    /// Minimum area, when the declared token is a non-negative integer
    pub fn min_area(&self) -> Option<u64> {
        self.area.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
    pub weight: i64,
}

/// Solved soft module shape. Corners keep the order they were written in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftModule {
    pub name: String,
    pub corners: Vec<(i64, i64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub outline: ChipOutline,
    pub fixed_modules: Vec<FixedModule>,
    pub soft_modules: Vec<SoftModuleSpec>,
    pub connections: Vec<Connection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub hpwl: f64,
    pub soft_modules: Vec<SoftModule>,
}

pub mod problem;
pub mod reader;
pub mod solution;
pub mod tokens;
pub mod writer;

pub use problem::parse_problem;
pub use solution::parse_solution;
