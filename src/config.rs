/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportConfig from CLI arguments
/// - Resolving default input/output paths against the project directory
/// - Collecting render options (title, image reference, escaping)
use crate::cli::CliArgs;
use crate::report::RenderOptions;
use log::debug;
use std::path::PathBuf;

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub summary_json_path: Option<PathBuf>,
    pub render: RenderOptions,
}

/// Build a complete ReportConfig from CLI arguments
///
/// Everything is resolved up front so the pipeline receives an immutable
/// description of the run and never reads the environment itself.
pub fn build_report_config(args: &CliArgs) -> Result<ReportConfig, String> {
    args.validate()?;

    let input_path = args.get_input_path();
    let output_path = args.get_output_path();
    debug!("Resolved input {:?}, output {:?}", input_path, output_path);

    let image_ref = args.image_ref.clone().filter(|r| !r.is_empty());
    if image_ref.is_none() {
        debug!("No image reference configured");
    }

    Ok(ReportConfig {
        input_path,
        output_path,
        summary_json_path: args.summary_json.clone(),
        render: RenderOptions { title: args.title.trim().to_string(), image_ref, escape_pipes: args.escape_pipes },
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
