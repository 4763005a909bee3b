// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Single-file block layouts written by the B*-tree floorplanner
//!
//! Two layouts exist. Both start with `OUTLINE <w> <h>`:
//!
//! * [`BlockLayoutFormat::Rotated`]: `<name> <x1> <y1> <x2> <y2> <rotated>` lines follow.
//! * [`BlockLayoutFormat::WithMetrics`]: five metric lines (cost, wirelength,
//!   area, dimensions, runtime), then `<name> <x1> <y1> <x2> <y2>` lines.

use serde::{Deserialize, Serialize};

use crate::floorplan::ChipOutline;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub name: String,
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
    /// Only present in the rotated layout. Corners already reflect it.
    pub rotated: Option<bool>,
}

impl Block {
    pub fn width(&self) -> u64 {
        self.x2.abs_diff(self.x1)
    }

    pub fn height(&self) -> u64 {
        self.y2.abs_diff(self.y1)
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.x1 as f64 + self.x2 as f64) / 2.0,
            (self.y1 as f64 + self.y2 as f64) / 2.0,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockLayoutFormat {
    Rotated,
    WithMetrics,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockLayout {
    pub format: BlockLayoutFormat,
    pub outline: ChipOutline,
    /// Raw metric lines of the `WithMetrics` layout, empty otherwise
    pub metrics: Vec<String>,
    pub blocks: Vec<Block>,
}

pub mod parser;
pub mod reader;

pub use parser::parse_block_layout;
