// ============================================================
// Layer 4 — YAML Document Loaders
// ============================================================
// Reads the input documents with serde_yaml.
//
// Two loaders with different tolerance:
//
//   MasterLoader     — the file must exist and parse. The
//                      top level must be a mapping; its
//                      `papers` key holds the records.
//                      Missing `papers` means zero papers.
//
//   AuxiliaryLoader  — the path may be absent or point at a
//                      file that does not exist; both mean
//                      zero records. Accepted shapes:
//                        papers: [...]     (mapping form)
//                        [...]             (bare sequence)
//                      Any other shape is zero records.
//                      Read and YAML syntax errors still
//                      propagate.
//
// Both decode the document into a serde_yaml::Value first so
// the shape can be inspected before the records are decoded
// one by one (which lets errors name the offending index).
//
// Reference: Rust Book §9 (Error Handling)
//            serde_yaml documentation (Value, from_value)

use anyhow::{bail, Context, Result};
use serde_yaml::Value;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::paper::{AuxiliaryPaper, MasterPaper};
use crate::domain::traits::PaperSource;

// ─── MasterLoader ─────────────────────────────────────────────────────────────

/// Loads the authoritative title/url list.
pub struct MasterLoader {
    path: PathBuf,
}

impl MasterLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PaperSource for MasterLoader {
    type Record = MasterPaper;

    fn load_all(&self) -> Result<Vec<MasterPaper>> {
        let doc = read_yaml(&self.path)?;

        let papers = match doc {
            Value::Null => {
                tracing::warn!("Master document '{}' is empty", self.path.display());
                return Ok(Vec::new());
            }
            Value::Mapping(mut map) => match map.remove("papers") {
                None | Some(Value::Null) => {
                    tracing::warn!(
                        "Master document '{}' has no `papers` entries",
                        self.path.display()
                    );
                    return Ok(Vec::new());
                }
                Some(Value::Sequence(seq)) => seq,
                Some(other) => bail!(
                    "`papers` in master document '{}' must be a sequence, found {}",
                    self.path.display(),
                    kind_of(&other)
                ),
            },
            other => bail!(
                "master document '{}' must be a mapping with a `papers` key, found {}",
                self.path.display(),
                kind_of(&other)
            ),
        };

        let records = papers
            .into_iter()
            .enumerate()
            .map(|(i, entry)| {
                serde_yaml::from_value::<MasterPaper>(entry).with_context(|| {
                    format!("Invalid paper at papers[{}] in '{}'", i, self.path.display())
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "Loaded {} master papers from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

// ─── AuxiliaryLoader ──────────────────────────────────────────────────────────

/// Loads a qualified or disqualified decision list.
pub struct AuxiliaryLoader {
    /// `None` means the caller did not supply this document
    path: Option<PathBuf>,
}

impl AuxiliaryLoader {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// True when a path was supplied and the file is there
    pub fn is_present(&self) -> bool {
        self.path.as_deref().map_or(false, Path::exists)
    }
}

impl PaperSource for AuxiliaryLoader {
    type Record = AuxiliaryPaper;

    fn load_all(&self) -> Result<Vec<AuxiliaryPaper>> {
        let path = match self.path.as_deref() {
            Some(p) if p.exists() => p,
            Some(p) => {
                tracing::debug!("'{}' does not exist, treating as empty", p.display());
                return Ok(Vec::new());
            }
            None => return Ok(Vec::new()),
        };

        let entries = match read_yaml(path)? {
            Value::Sequence(seq) => seq,
            Value::Mapping(mut map) => match map.remove("papers") {
                Some(Value::Sequence(seq)) => seq,
                Some(other) => {
                    tracing::warn!(
                        "`papers` in '{}' is {}, expected a sequence; no papers loaded",
                        path.display(),
                        kind_of(&other)
                    );
                    return Ok(Vec::new());
                }
                None => {
                    tracing::warn!("'{}' has no `papers` key; no papers loaded", path.display());
                    return Ok(Vec::new());
                }
            },
            Value::Null => return Ok(Vec::new()),
            other => {
                tracing::warn!(
                    "'{}' holds {}, expected a mapping or a sequence; no papers loaded",
                    path.display(),
                    kind_of(&other)
                );
                return Ok(Vec::new());
            }
        };

        let mut records = Vec::with_capacity(entries.len());
        for (i, entry) in entries.into_iter().enumerate() {
            if !entry.is_mapping() {
                tracing::warn!(
                    "Skipping entry {} in '{}': {} is not a paper record",
                    i,
                    path.display(),
                    kind_of(&entry)
                );
                continue;
            }
            let paper = serde_yaml::from_value::<AuxiliaryPaper>(entry).with_context(|| {
                format!("Invalid paper at index {} in '{}'", i, path.display())
            })?;
            records.push(paper);
        }

        Ok(records)
    }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Read and parse a whole YAML document. An empty or
/// comment-only file parses to `Value::Null`.
fn read_yaml(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Cannot read '{}'", path.display()))?;

    let blank = text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    });
    if blank {
        return Ok(Value::Null);
    }

    serde_yaml::from_str(&text)
        .with_context(|| format!("Cannot parse YAML in '{}'", path.display()))
}

/// Short human name of a YAML value's shape, for messages
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null        => "null",
        Value::Bool(_)     => "a boolean",
        Value::Number(_)   => "a number",
        Value::String(_)   => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_)  => "a mapping",
        Value::Tagged(_)   => "a tagged value",
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_master_loads_papers() {
        let dir  = TempDir::new().unwrap();
        let path = write(
            &dir,
            "master.yaml",
            "papers:\n  - title: Foo\n    url: http://foo\n  - title: Bar\n",
        );

        let papers = MasterLoader::new(path).load_all().unwrap();
        assert_eq!(
            papers,
            vec![MasterPaper::new("Foo", "http://foo"), MasterPaper::new("Bar", "")]
        );
    }

    #[test]
    fn test_master_without_papers_key_is_empty() {
        let dir  = TempDir::new().unwrap();
        let path = write(&dir, "master.yaml", "other: 1\n");
        assert!(MasterLoader::new(path).load_all().unwrap().is_empty());
    }

    #[test]
    fn test_master_empty_document_is_empty() {
        let dir  = TempDir::new().unwrap();
        let path = write(&dir, "master.yaml", "# nothing here\n");
        assert!(MasterLoader::new(path).load_all().unwrap().is_empty());
    }

    #[test]
    fn test_master_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = MasterLoader::new(dir.path().join("nope.yaml"))
            .load_all()
            .unwrap_err();
        assert!(format!("{err:#}").contains("nope.yaml"));
    }

    #[test]
    fn test_master_unparseable_fails() {
        let dir  = TempDir::new().unwrap();
        let path = write(&dir, "master.yaml", "papers: [unclosed\n");
        assert!(MasterLoader::new(path).load_all().is_err());
    }

    #[test]
    fn test_master_bare_sequence_fails() {
        let dir  = TempDir::new().unwrap();
        let path = write(&dir, "master.yaml", "- title: Foo\n");
        assert!(MasterLoader::new(path).load_all().is_err());
    }

    #[test]
    fn test_master_record_without_title_names_index() {
        let dir  = TempDir::new().unwrap();
        let path = write(&dir, "master.yaml", "papers:\n  - title: A\n  - url: http://b\n");
        let err  = MasterLoader::new(path).load_all().unwrap_err();
        assert!(format!("{err:#}").contains("papers[1]"));
    }

    #[test]
    fn test_auxiliary_absent_path_is_empty() {
        let loader = AuxiliaryLoader::new(None);
        assert!(!loader.is_present());
        assert!(loader.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_auxiliary_missing_file_is_empty() {
        let dir    = TempDir::new().unwrap();
        let loader = AuxiliaryLoader::new(Some(dir.path().join("missing.yaml")));
        assert!(!loader.is_present());
        assert!(loader.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_auxiliary_mapping_form() {
        let dir  = TempDir::new().unwrap();
        let path = write(
            &dir,
            "q.yaml",
            "papers:\n  - title: A\n    decisions:\n      novelty_prompt: accept\n",
        );

        let papers = AuxiliaryLoader::new(Some(path)).load_all().unwrap();
        assert_eq!(papers.len(), 1);
        assert_eq!(papers[0].title, "A");
        assert_eq!(papers[0].decisions.novelty_prompt, "accept");
    }

    #[test]
    fn test_auxiliary_bare_sequence_form() {
        let dir    = TempDir::new().unwrap();
        let path   = write(&dir, "q.yaml", "- title: A\n- title: B\n");
        let papers = AuxiliaryLoader::new(Some(path)).load_all().unwrap();
        let titles: Vec<_> = papers.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn test_auxiliary_unexpected_shapes_are_empty() {
        let dir = TempDir::new().unwrap();
        for (i, body) in ["", "just a string\n", "42\n", "other: [1]\n", "papers: 3\n"]
            .iter()
            .enumerate()
        {
            let path = write(&dir, &format!("aux{i}.yaml"), body);
            let got  = AuxiliaryLoader::new(Some(path)).load_all().unwrap();
            assert!(got.is_empty(), "body {body:?} should load no papers");
        }
    }

    #[test]
    fn test_auxiliary_skips_non_mapping_entries() {
        let dir    = TempDir::new().unwrap();
        let path   = write(&dir, "q.yaml", "- title: A\n- plain string\n- title: B\n");
        let papers = AuxiliaryLoader::new(Some(path)).load_all().unwrap();
        assert_eq!(papers.len(), 2);
    }

    #[test]
    fn test_auxiliary_syntax_error_propagates() {
        let dir  = TempDir::new().unwrap();
        let path = write(&dir, "q.yaml", "papers: [unclosed\n");
        assert!(AuxiliaryLoader::new(Some(path)).load_all().is_err());
    }
}
