// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Huang Rui <vowstar@gmail.com>

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use floorplan_viewer::cli::{init_logging, PlotOptions, EXIT_FAILURE};
use floorplan_viewer::export::export_modules_to_csv;
use floorplan_viewer::floorplan::reader::FloorplanReader;
use floorplan_viewer::render::{render_floorplan, RenderConfig};

/// Visualize a floorplan result against its problem file
#[derive(Parser, Debug)]
#[command(name = "floorplan-viewer", version)]
struct ProgramOptions {
    /// Path to the input problem file
    input_file: PathBuf,
    /// Path to the solver output file
    output_file: PathBuf,
    /// Output filename for the plot image
    #[arg(short = 'o', long = "plot_file", default_value = "result.png")]
    plot_file: PathBuf,
    /// Also write a CSV table of module centers and areas
    #[arg(long)]
    modules_csv: Option<PathBuf>,
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
    let reader = FloorplanReader::new();
    let problem = reader.read_problem(&options.input_file)?;
    let solution = reader.read_solution(&options.output_file)?;

    println!(
        "Chip Size: {} x {}",
        problem.outline.width, problem.outline.height
    );
    println!("Fixed Modules: {}", problem.fixed_modules.len());
    println!("Soft Modules: {}", solution.soft_modules.len());
    println!("Connections: {}", problem.connections.len());

    let config = options.plot.apply(RenderConfig::default());
    let report = render_floorplan(&problem, &solution, &config, &options.plot_file)?;
    if report.edges_skipped > 0 {
        log::info!(
            "[INFO] {} connections reference unknown modules",
            report.edges_skipped
        );
    }

    if let Some(csv_path) = &options.modules_csv {
        export_modules_to_csv(&problem, &solution, csv_path)?;
    }

    println!("Plot saved to {}", options.plot_file.display());
    Ok(())
}
