// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::path::Path;

use super::{parse_block_layout, BlockLayout, BlockLayoutFormat};
use crate::error::FloorplanError;
use crate::floorplan::reader::read_source;

pub struct BlockLayoutReader {
    format: Option<BlockLayoutFormat>,
}

impl BlockLayoutReader {
    /// Reader that detects the layout from the file content
    pub fn new() -> Self {
        Self { format: None }
    }

    pub fn with_format(format: BlockLayoutFormat) -> Self {
        Self {
            format: Some(format),
        }
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<BlockLayout, FloorplanError> {
        let path = path.as_ref();
        let content = read_source(path, "block layout")?;

        match parse_block_layout(&content, self.format) {
            Ok(layout) => {
                log::info!(
                    "[PASS] Block layout parsed ({:?}): outline {} x {}, {} blocks",
                    layout.format,
                    layout.outline.width,
                    layout.outline.height,
                    layout.blocks.len()
                );
                for metric in &layout.metrics {
                    log::info!("[INFO] Metric: {metric}");
                }
                Ok(layout)
            }
            Err(source) => {
                log::error!("[FAIL] Failed to parse block layout: {source}");
                Err(FloorplanError::Parse {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

impl Default for BlockLayoutReader {
    fn default() -> Self {
        Self::new()
    }
}
