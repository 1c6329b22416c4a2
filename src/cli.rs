use crate::report::DEFAULT_TITLE;
use clap::Parser;
use std::path::PathBuf;

/// Report location relative to the project directory
pub const DEFAULT_INPUT: &str = "reports/overall-report.json";

/// Markdown location relative to the project directory
pub const DEFAULT_OUTPUT: &str = "reports/cypress-results.md";

#[derive(Parser, Debug, Clone)]
#[command(name = "cypress-report-md")]
#[command(about = "Convert a Cypress JSON test report into a Markdown summary")]
#[command(version)]
pub struct CliArgs {
    /// Project directory containing the reports/ folder
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// JSON report to read (default: <project-dir>/reports/overall-report.json)
    #[arg(long, short = 'i', value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Markdown file to write (default: <project-dir>/reports/cypress-results.md)
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Image reference shown in the report metadata
    #[arg(long, env = "IMAGE_REF", value_name = "REF")]
    pub image_ref: Option<String>,

    /// First line of the generated document
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Escape `|` inside table cells so titles and errors cannot split a row
    #[arg(long)]
    pub escape_pipes: bool,

    /// Also write a JSON summary of the rendered rows to this path
    #[arg(long, value_name = "PATH")]
    pub summary_json: Option<PathBuf>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("--title must not be empty".to_string());
        }

        if self.get_input_path() == self.get_output_path() {
            return Err(format!(
                "Input and output point at the same file: {}",
                self.get_input_path().display()
            ));
        }

        if let Some(ref summary) = self.summary_json
            && (*summary == self.get_input_path() || *summary == self.get_output_path())
        {
            return Err(format!("--summary-json would overwrite {}", summary.display()));
        }

        Ok(())
    }

    /// Get the input path, using the project default if not specified
    pub fn get_input_path(&self) -> PathBuf {
        self.input.clone().unwrap_or_else(|| self.project_dir.join(DEFAULT_INPUT))
    }

    /// Get the output path, using the project default if not specified
    pub fn get_output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| self.project_dir.join(DEFAULT_OUTPUT))
    }
}
