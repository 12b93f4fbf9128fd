// ============================================================
// Layer 4 — Row Builders
// ============================================================
// Turns loaded paper records into sorted output rows.
//
//   Title/URL mode:
//     master papers ──► TitleUrlRow per paper ──► sort
//
//   Full merge mode:
//     master papers ──► MasterIndex (normalized title → url)
//                                 │
//     qualified papers ───────────┤ lookup per paper
//     disqualified papers ────────┘ (NOT FOUND on miss)
//                                 │
//                                 ▼
//                       DecisionRow per paper ──► sort
//
// Sorting is by lowercased title and is stable, so rows with
// equal titles keep their ingestion order (qualified first,
// then disqualified, each in document order).
//
// Reference: Rust Book §8 (HashMap), §13 (Iterators)

use std::collections::HashMap;

use crate::domain::paper::{normalize_title, AuxiliaryPaper, MasterPaper};
use crate::domain::row::{CsvRow, DecisionRow, TitleUrlRow, NOT_FOUND};

/// Normalized master title → url.
pub struct MasterIndex {
    urls: HashMap<String, String>,
}

impl MasterIndex {
    /// Index every master paper. When two papers normalize to the
    /// same key, the one appearing later in the document wins.
    pub fn build(papers: &[MasterPaper]) -> Self {
        let mut urls = HashMap::with_capacity(papers.len());

        for paper in papers {
            let key = paper.title_key();
            if let Some(previous) = urls.insert(key, paper.url.clone()) {
                tracing::warn!(
                    "Duplicate master title '{}': url '{}' replaced by '{}'",
                    paper.title,
                    previous,
                    paper.url
                );
            }
        }

        Self { urls }
    }

    /// Url for a title, or the NOT FOUND marker
    pub fn resolve(&self, title: &str) -> String {
        self.urls
            .get(&normalize_title(title))
            .cloned()
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Project master papers onto title/url rows, sorted by title.
pub fn title_url_rows(papers: &[MasterPaper]) -> Vec<TitleUrlRow> {
    let mut rows: Vec<TitleUrlRow> = papers
        .iter()
        .map(|p| TitleUrlRow {
            title: p.title.clone(),
            url:   p.url.clone(),
        })
        .collect();

    sort_by_title(&mut rows);
    rows
}

/// Join each list of auxiliary papers against the master index.
///
/// `lists` is consumed in order, so callers pass qualified papers
/// before disqualified ones. Every auxiliary paper yields exactly
/// one row, matched or not.
pub fn decision_rows<I>(index: &MasterIndex, lists: I) -> Vec<DecisionRow>
where
    I: IntoIterator<Item = Vec<AuxiliaryPaper>>,
{
    let mut rows: Vec<DecisionRow> = lists
        .into_iter()
        .flatten()
        .map(|paper| {
            let url = index.resolve(&paper.title);
            DecisionRow::from_auxiliary(paper, url)
        })
        .collect();

    sort_by_title(&mut rows);
    rows
}

/// Stable, case-insensitive sort by title
pub fn sort_by_title<R: CsvRow>(rows: &mut [R]) {
    rows.sort_by_cached_key(|r| r.title().to_lowercase());
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::paper::Decisions;

    fn aux(title: &str, evaluation: &str) -> AuxiliaryPaper {
        AuxiliaryPaper::new(
            title,
            Decisions {
                evaluation_prompt: evaluation.to_string(),
                ..Decisions::default()
            },
        )
    }

    #[test]
    fn test_title_url_rows_sorted_case_insensitively() {
        let papers = vec![MasterPaper::new("B", "http://b"), MasterPaper::new("a", "")];
        let rows   = title_url_rows(&papers);

        let titles: Vec<_> = rows.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["a", "B"]);
        assert_eq!(rows[0].url, "");
        assert_eq!(rows[1].url, "http://b");
    }

    #[test]
    fn test_title_url_rows_keep_title_untrimmed() {
        let rows = title_url_rows(&[MasterPaper::new(" Padded ", "u")]);
        assert_eq!(rows[0].title, " Padded ");
    }

    #[test]
    fn test_index_last_duplicate_wins() {
        let papers = vec![
            MasterPaper::new("Foo", "http://first"),
            MasterPaper::new(" FOO ", "http://second"),
        ];
        let index = MasterIndex::build(&papers);
        assert_eq!(index.len(), 1);
        assert_eq!(index.resolve("foo"), "http://second");
    }

    #[test]
    fn test_resolve_miss_is_not_found() {
        let index = MasterIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.resolve("anything"), NOT_FOUND);
    }

    #[test]
    fn test_merge_normalizes_and_trims() {
        let index = MasterIndex::build(&[MasterPaper::new("Foo Bar", "http://x")]);
        let rows  = decision_rows(&index, vec![vec![aux("foo bar ", "E")]]);

        assert_eq!(
            rows,
            vec![DecisionRow {
                title:               "foo bar".into(),
                url:                 "http://x".into(),
                evaluation_prompt:   "E".into(),
                related_work_prompt: String::new(),
                novelty_prompt:      String::new(),
                review_only_prompt:  String::new(),
            }]
        );
    }

    #[test]
    fn test_merge_unmatched_row_kept() {
        let index = MasterIndex::build(&[]);
        let rows  = decision_rows(&index, vec![vec![AuxiliaryPaper::new("New Paper", Decisions::default())]]);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].url, "NOT FOUND");
        assert_eq!(rows[0].evaluation_prompt, "");
        assert_eq!(rows[0].review_only_prompt, "");
    }

    #[test]
    fn test_merge_is_stable_within_and_across_lists() {
        let index        = MasterIndex::build(&[]);
        let qualified    = vec![aux("Same", "q1"), aux("zeta", "q2"), aux("SAME", "q3")];
        let disqualified = vec![aux("same", "d1"), aux("Alpha", "d2")];

        let rows = decision_rows(&index, vec![qualified, disqualified]);
        let order: Vec<_> = rows.iter().map(|r| r.evaluation_prompt.as_str()).collect();
        assert_eq!(order, ["d2", "q1", "q3", "d1", "q2"]);
    }

    #[test]
    fn test_merge_matched_url_equals_master_url() {
        let master = vec![
            MasterPaper::new("One", "http://1"),
            MasterPaper::new("Two", "http://2"),
        ];
        let index = MasterIndex::build(&master);
        let rows  = decision_rows(&index, vec![vec![aux("TWO", ""), aux("three", ""), aux("one", "")]]);

        for row in &rows {
            match normalize_title(&row.title).as_str() {
                "one"   => assert_eq!(row.url, "http://1"),
                "two"   => assert_eq!(row.url, "http://2"),
                _       => assert!(row.is_unmatched()),
            }
        }
    }
}
