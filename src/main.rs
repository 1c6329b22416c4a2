// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod cli;
mod config;
mod error;
mod loader;
mod report;
mod types;
mod ui;

use config::ReportConfig;
use error::Result;
use log::info;

/// Exit code for invalid arguments
const EXIT_USAGE: i32 = 2;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Resolve paths and render options
    let config = match config::build_report_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(EXIT_USAGE);
        }
    };

    if let Err(e) = run(&config) {
        ui::print_error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}

/// Load, flatten, group, render and write the report
fn run(config: &ReportConfig) -> Result<()> {
    let report = loader::load_report(&config.input_path)?;

    let rows = report::flatten_report(&report);
    let summary = report::summarize_rows(&rows);
    info!(
        "Flattened {} test(s): {} passed, {} failed, {} pending, {} skipped, {} other",
        summary.total, summary.passed, summary.failed, summary.pending, summary.skipped, summary.other
    );

    let groups = report::group_rows(rows);
    info!("Rendering {} suite table(s)", groups.len());

    let markdown = report::render_markdown(&report.stats, &groups, &config.render);

    // The summary goes first so a failed summary write leaves no Markdown behind
    if let Some(ref summary_path) = config.summary_json_path {
        report::export_json_summary(&groups, summary_path, &config.input_path, &config.output_path)?;
    }

    report::write_markdown_report(&config.output_path, &markdown)?;
    ui::print_generated(&config.output_path);

    if let Some(ref summary_path) = config.summary_json_path {
        println!("JSON summary saved to: {}", summary_path.display());
    }

    Ok(())
}
