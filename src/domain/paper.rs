// ============================================================
// Layer 3 — Paper Records
// ============================================================
// The records found under `papers:` in the input documents.
//
//   Master document (authoritative title/url pairs):
//     papers:
//       - title: "Attention Is All You Need"
//         url:   "https://arxiv.org/abs/1706.03762"
//
//   Auxiliary document (qualified / disqualified decisions):
//     papers:
//       - title: "Attention Is All You Need"
//         decisions:
//           evaluation_prompt:   "accept"
//           related_work_prompt: "accept"
//           novelty_prompt:      "reject"
//           review_only_prompt:  "accept"
//
// Every optional field has an explicit default (empty string).
// YAML `null` is treated the same as an absent field, and
// numbers / booleans in a text field keep their YAML spelling.
//
// Reference: serde field attributes (default, deserialize_with)
//            Rust Book §6 (Option)

use serde::{de, Deserialize, Deserializer};
use serde_yaml::Value;

/// One entry of the master document.
///
/// `title` is required: a master record without it cannot take
/// part in the title → url join and is rejected at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MasterPaper {
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub url: String,
}

impl MasterPaper {
    #[cfg(test)]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url:   url.into(),
        }
    }

    /// Join key for this paper's title
    pub fn title_key(&self) -> String {
        normalize_title(&self.title)
    }
}

/// One entry of a qualified or disqualified document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuxiliaryPaper {
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub decisions: Decisions,
}

#[cfg(test)]
impl AuxiliaryPaper {
    pub fn new(title: impl Into<String>, decisions: Decisions) -> Self {
        Self {
            title: title.into(),
            decisions,
        }
    }
}

/// The four prompt outcomes recorded for a paper.
/// Any prompt missing from the document is an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Decisions {
    #[serde(default, deserialize_with = "lenient_string")]
    pub evaluation_prompt: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub related_work_prompt: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub novelty_prompt: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub review_only_prompt: String,
}

/// Lowercase, whitespace-trimmed form of a title.
/// Only ever used as a lookup key, never written out.
pub fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

// ─── Field Decoders ───────────────────────────────────────────────────────────

/// Decode a scalar into a String: null → "", strings as-is,
/// numbers and booleans rendered as text. Lists and mappings
/// are rejected.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s))   => Ok(s),
        Some(Value::Bool(b))     => Ok(b.to_string()),
        Some(Value::Number(n))   => Ok(n.to_string()),
        Some(Value::Sequence(_)) => Err(de::Error::custom("expected text, found a sequence")),
        Some(Value::Mapping(_))  => Err(de::Error::custom("expected text, found a mapping")),
        Some(Value::Tagged(t))   => Err(de::Error::custom(format!(
            "expected text, found tagged value {}",
            t.tag
        ))),
    }
}

/// `decisions: ~` behaves like a missing `decisions` key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
