//! Conversion command handlers
//!
//! Implements `convert` and `check`.

use crate::cli::args::{CheckArgs, ConvertArgs, OutputFormat};
use crate::error::NbMystError;
use crate::pipeline::{BookPipeline, OutputMode, RunSummary};

/// Convert every notebook in the table of contents.
///
/// # Errors
///
/// Returns the first table of contents, notebook, conversion or write error.
pub fn run(args: &ConvertArgs) -> Result<(), NbMystError> {
    let paths = args.paths();
    tracing::info!(
        toc = %paths.toc.display(),
        input = %paths.input_dir.display(),
        output = %paths.output_dir.display(),
        "converting book"
    );

    BookPipeline::new(paths, OutputMode::Write).run()?;
    Ok(())
}

/// Convert every notebook in memory and report what would change.
///
/// # Errors
///
/// Returns the first table of contents, notebook or conversion error.
pub fn check(args: &CheckArgs) -> Result<(), NbMystError> {
    let paths = args.paths();
    tracing::info!(toc = %paths.toc.display(), "checking book");

    let summary = BookPipeline::new(paths, OutputMode::DryRun).run()?;
    print_summary(&summary, args.format)?;
    Ok(())
}

fn print_summary(summary: &RunSummary, format: OutputFormat) -> Result<(), NbMystError> {
    match format {
        OutputFormat::Human => {
            println!(
                "{} notebooks ok ({} cells, {} figures, {} admonitions, {} entries skipped)",
                summary.documents,
                summary.cells,
                summary.stats.figures,
                summary.stats.admonitions,
                summary.skipped
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(summary)?);
        }
    }
    Ok(())
}
