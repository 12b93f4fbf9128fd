// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses the command line with clap, hands the run to the
// application layer and prints the confirmation lines:
//
//   ✅ Loaded 12 papers from qualified.yaml
//   ✅ Loaded 3 papers from disqualified.yaml
//   ✅ Full decision CSV written to out.csv
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::ConvertArgs;

use crate::application::convert_use_case::{ConvertReport, ConvertUseCase, Mode};

/// Top-level command line
#[derive(Parser, Debug)]
#[command(
    name = "paper-csv",
    version,
    about = "Generate CSV from paper metadata and decisions"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: ConvertArgs,
}

impl Cli {
    /// Run the conversion and print its outcome on stdout
    pub fn run(self) -> Result<()> {
        tracing::debug!("Arguments: {:?}", self.args);

        let use_case = ConvertUseCase::new(self.args.into());
        let report   = use_case.execute()?;

        for line in report_lines(&report) {
            println!("{line}");
        }
        Ok(())
    }
}

/// User-facing summary of a finished run, one line per entry
pub fn report_lines(report: &ConvertReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .loaded
        .iter()
        .map(|l| format!("✅ Loaded {} papers from {}", l.count, l.path.display()))
        .collect();

    lines.push(match report.mode {
        Mode::TitleUrl  => format!("✅ Title/URL CSV written to {}", report.output.display()),
        Mode::FullMerge => format!("✅ Full decision CSV written to {}", report.output.display()),
    });
    lines
}
