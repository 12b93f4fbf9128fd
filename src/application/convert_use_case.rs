// ============================================================
// Layer 2 — ConvertUseCase
// ============================================================
// Orchestrates one conversion run:
//
//   Step 1: Load the master document          (Layer 4 - data)
//   Step 2: Pick the mode from the config
//
//   Title/URL mode:
//   Step 3: Project master papers to rows     (Layer 4 - data)
//   Step 4: Write the CSV                     (Layer 6 - infra)
//
//   Full merge mode:
//   Step 3: Index master titles               (Layer 4 - data)
//   Step 4: Load qualified, then disqualified (Layer 4 - data)
//   Step 5: Join and sort                     (Layer 4 - data)
//   Step 6: Write the CSV                     (Layer 6 - infra)
//
// Nothing here prints. The outcome is returned as a
// ConvertReport and the CLI layer decides what to show.
//
// Reference: Rust Book §6 (Enums), §9 (Error Handling)

use anyhow::Result;
use std::path::PathBuf;

use crate::data::{
    loader::{AuxiliaryLoader, MasterLoader},
    merger::{decision_rows, title_url_rows, MasterIndex},
};
use crate::domain::paper::MasterPaper;
use crate::domain::traits::{PaperSource, RowSink};
use crate::infra::csv_writer::CsvTableWriter;

// ─── Conversion Configuration ────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub base_paper:   PathBuf,
    pub qualified:    Option<PathBuf>,
    pub disqualified: Option<PathBuf>,
    pub output:       PathBuf,
}

impl ConvertConfig {
    /// Title/URL mode unless at least one auxiliary document is given
    pub fn mode(&self) -> Mode {
        if self.qualified.is_none() && self.disqualified.is_none() {
            Mode::TitleUrl
        } else {
            Mode::FullMerge
        }
    }

    /// Supplied auxiliary paths, qualified first
    fn auxiliary_paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.qualified.iter().chain(self.disqualified.iter())
    }
}

/// Which table the run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `title,url` from the master document only
    TitleUrl,
    /// Decision table joined against the master document
    FullMerge,
}

// ─── Run Report ──────────────────────────────────────────────────────────────

/// Number of records read from one auxiliary document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    pub path:  PathBuf,
    pub count: usize,
}

/// What a finished run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    pub mode:         Mode,
    pub output:       PathBuf,
    pub rows_written: usize,
    /// One entry per supplied auxiliary document, in load order
    pub loaded:       Vec<LoadedSource>,
    /// Merge rows whose url is the NOT FOUND marker
    pub unmatched:    usize,
}

// ─── ConvertUseCase ──────────────────────────────────────────────────────────
pub struct ConvertUseCase {
    config: ConvertConfig,
}

impl ConvertUseCase {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Run the conversion end to end
    pub fn execute(&self) -> Result<ConvertReport> {
        let cfg = &self.config;

        // ── Step 1: Load the master document ────────────────────────────────
        let master = MasterLoader::new(&cfg.base_paper).load_all()?;
        tracing::info!(
            "Loaded {} master papers from '{}'",
            master.len(),
            cfg.base_paper.display()
        );

        let writer = CsvTableWriter::new(&cfg.output);

        // ── Step 2: Mode ─────────────────────────────────────────────────────
        match cfg.mode() {
            Mode::TitleUrl => {
                let rows         = title_url_rows(&master);
                let rows_written = writer.write_rows(&rows)?;
                tracing::info!("Wrote {} title/url rows", rows_written);

                Ok(ConvertReport {
                    mode:      Mode::TitleUrl,
                    output:    cfg.output.clone(),
                    rows_written,
                    loaded:    Vec::new(),
                    unmatched: 0,
                })
            }
            Mode::FullMerge => self.merge(&master, &writer),
        }
    }

    fn merge(
        &self,
        master: &[MasterPaper],
        writer: &CsvTableWriter,
    ) -> Result<ConvertReport> {
        let cfg   = &self.config;
        let index = MasterIndex::build(master);
        if index.is_empty() {
            tracing::warn!("Master document has no titles; every row will be NOT FOUND");
        } else {
            tracing::debug!("Indexed {} master titles", index.len());
        }

        // Load every supplied auxiliary list before joining
        let mut loaded = Vec::new();
        let mut lists  = Vec::new();
        for path in cfg.auxiliary_paths() {
            let loader = AuxiliaryLoader::new(Some(path.clone()));
            if !loader.is_present() {
                tracing::warn!("'{}' not found, loading no papers from it", path.display());
            }
            let papers = loader.load_all()?;
            tracing::info!("Loaded {} papers from '{}'", papers.len(), path.display());

            loaded.push(LoadedSource {
                path:  path.clone(),
                count: papers.len(),
            });
            lists.push(papers);
        }

        let rows = decision_rows(&index, lists);

        let unmatched = rows.iter().filter(|r| r.is_unmatched()).count();
        for row in rows.iter().filter(|r| r.is_unmatched()) {
            tracing::warn!("No master entry for '{}'", row.title);
        }

        let rows_written = writer.write_rows(&rows)?;
        tracing::info!(
            "Wrote {} decision rows ({} without a master url)",
            rows_written,
            unmatched
        );

        Ok(ConvertReport {
            mode: Mode::FullMerge,
            output: cfg.output.clone(),
            rows_written,
            loaded,
            unmatched,
        })
    }
}
