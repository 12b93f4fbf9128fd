// ============================================================
// Layer 3 — Output Rows
// ============================================================
// The two CSV layouts the converter can produce:
//
//   Title/URL mode:   title,url
//   Full merge mode:  title,url,evaluation_prompt,related_work_prompt,
//                     novelty_prompt,review_only_prompt
//
// Each row type knows its own header and exposes its title so
// the data layer can sort any row type the same way.
//
// Reference: Rust Book §10 (Traits with associated consts)

use serde::Serialize;

use crate::domain::paper::{AuxiliaryPaper, Decisions};

/// Marker written into the `url` column when a merged paper has
/// no entry in the master document. Downstream tooling matches on
/// this exact text, so it is never replaced by an empty value.
pub const NOT_FOUND: &str = "NOT FOUND";

/// A row that can be written to the output table.
pub trait CsvRow: Serialize {
    /// Column names, in the order the fields serialise
    const HEADER: &'static [&'static str];

    /// Title used for ordering rows
    fn title(&self) -> &str;
}

/// Row of the title/url dump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleUrlRow {
    pub title: String,
    pub url:   String,
}

impl CsvRow for TitleUrlRow {
    const HEADER: &'static [&'static str] = &["title", "url"];

    fn title(&self) -> &str {
        &self.title
    }
}

/// Row of the full decision table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecisionRow {
    pub title:               String,
    pub url:                 String,
    pub evaluation_prompt:   String,
    pub related_work_prompt: String,
    pub novelty_prompt:      String,
    pub review_only_prompt:  String,
}

impl DecisionRow {
    /// Combine an auxiliary paper with the url resolved for it.
    /// `title` is expected to be trimmed already.
    pub fn new(title: String, url: String, decisions: Decisions) -> Self {
        Self {
            title,
            url,
            evaluation_prompt:   decisions.evaluation_prompt,
            related_work_prompt: decisions.related_work_prompt,
            novelty_prompt:      decisions.novelty_prompt,
            review_only_prompt:  decisions.review_only_prompt,
        }
    }

    /// Build a row from an auxiliary record, trimming its title
    pub fn from_auxiliary(paper: AuxiliaryPaper, url: String) -> Self {
        let title = paper.title.trim().to_string();
        Self::new(title, url, paper.decisions)
    }

    /// True when the paper was missing from the master document
    pub fn is_unmatched(&self) -> bool {
        self.url == NOT_FOUND
    }
}

impl CsvRow for DecisionRow {
    const HEADER: &'static [&'static str] = &[
        "title",
        "url",
        "evaluation_prompt",
        "related_work_prompt",
        "novelty_prompt",
        "review_only_prompt",
    ];

    fn title(&self) -> &str {
        &self.title
    }
}
