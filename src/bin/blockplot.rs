// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

//! # blockplot
//!
//! Plot a single-file B*-tree block layout.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use floorplan_viewer::blocks::reader::BlockLayoutReader;
use floorplan_viewer::blocks::BlockLayoutFormat;
use floorplan_viewer::cli::{init_logging, PlotOptions, EXIT_FAILURE};
use floorplan_viewer::render::{render_block_layout, RenderConfig};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    Auto,
    Rotated,
    WithMetrics,
}

#[derive(Parser, Debug)]
#[command(name = "blockplot", version)]
struct ProgramOptions {
    /// Block layout file starting with an OUTLINE line
    layout_file: PathBuf,
    /// Output filename for the plot image
    #[arg(short = 'o', long = "plot_file", default_value = "floorplan.png")]
    plot_file: PathBuf,
    #[arg(long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,
    #[command(flatten)]
    plot: PlotOptions,
}

fn main() {
    let options = ProgramOptions::parse();
    init_logging(options.plot.verbose);

    if let Err(err) = _main(&options) {
        eprintln!("Error: {err}");
        std::process::exit(EXIT_FAILURE);
    }
}

fn _main(options: &ProgramOptions) -> Result<(), Box<dyn Error>> {
    let reader = match options.format {
        FormatArg::Auto => BlockLayoutReader::new(),
        FormatArg::Rotated => BlockLayoutReader::with_format(BlockLayoutFormat::Rotated),
        FormatArg::WithMetrics => BlockLayoutReader::with_format(BlockLayoutFormat::WithMetrics),
    };
    let layout = reader.read(&options.layout_file)?;

    println!(
        "Outline: {} x {}",
        layout.outline.width, layout.outline.height
    );
    println!("Blocks: {}", layout.blocks.len());

    let config = options.plot.apply(RenderConfig::blocks());
    render_block_layout(&layout, &config, &options.plot_file)?;

    println!("Plot saved to {}", options.plot_file.display());
    Ok(())
}
