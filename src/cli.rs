// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! Command-line options shared by the plotting binaries

use clap::Args;

use crate::render::{RenderConfig, ViewMargin, MIN_DPI};

pub const EXIT_FAILURE: i32 = 1;

#[derive(Args, Debug, Clone, Default)]
pub struct PlotOptions {
    /// Output resolution (at least 300)
    #[arg(long, default_value_t = MIN_DPI)]
    pub dpi: u32,
    /// Pad the view by this percentage of the outline size
    #[arg(long, conflicts_with = "margin_units", value_parser = parse_margin)]
    pub margin_percent: Option<f64>,
    /// Pad the view by this many layout units
    #[arg(long, value_parser = parse_margin)]
    pub margin_units: Option<f64>,
    /// Log debug details (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_margin(value: &str) -> Result<f64, String> {
    let margin: f64 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    ViewMargin::Absolute(margin).validate()?;
    Ok(margin)
}

impl PlotOptions {
    pub fn apply(&self, config: RenderConfig) -> RenderConfig {
        let config = config.with_dpi(self.dpi);
        match (self.margin_percent, self.margin_units) {
            (Some(percent), _) => config.with_margin(ViewMargin::Relative(percent / 100.0)),
            (None, Some(units)) => config.with_margin(ViewMargin::Absolute(units)),
            (None, None) => config,
        }
    }
}

pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
