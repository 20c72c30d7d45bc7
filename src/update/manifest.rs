//! The remote version manifest.
//!
//! ```json
//! {
//!   "latest_version": "2.0.0",
//!   "changelog": "fixes",
//!   "files": [{ "name": "casino", "url": "https://example.com/casino" }]
//! }
//! ```
//!
//! Every key is optional and nothing is type checked beyond presence: a
//! numeric `latest_version` is read as its JSON text, and a file entry
//! that is not an object, or whose `name` or `url` is not a string, is
//! kept as an incomplete descriptor and skipped when applying. Some hosts
//! hand the JSON back wrapped in an HTML page, so [`parse_tolerant`]
//! unwraps it and tries again.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::event;

/// Shown when the manifest has no changelog.
pub const NO_CHANGELOG: &str = "No changelog provided.";

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is a valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "version_text")]
    pub latest_version: Option<String>,
    #[serde(default, deserialize_with = "string_only")]
    pub changelog: Option<String>,
    #[serde(default, deserialize_with = "file_entries")]
    pub files: Option<Vec<FileDescriptor>>,
}

/// One file to replace. Either half may be missing, in which case the
/// entry is skipped when applying.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: Option<String>,
    pub url: Option<String>,
}

fn as_string(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

fn string_only<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(as_string(Some(&Value::deserialize(d)?)))
}

fn version_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn file_entries<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<FileDescriptor>>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(entries) => Some(entries.iter().map(FileDescriptor::from_json).collect()),
        _ => None,
    })
}

impl FileDescriptor {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            url: Some(url.to_string()),
        }
    }

    /// Read whatever string `name` and `url` an entry carries.
    fn from_json(entry: &Value) -> Self {
        Self {
            name: as_string(entry.get("name")),
            url: as_string(entry.get("url")),
        }
    }

    /// `(name, url)` if both are present and non empty.
    pub fn target(&self) -> Option<(&str, &str)> {
        let name = self.name.as_deref().filter(|n| !n.trim().is_empty())?;
        let url = self.url.as_deref().filter(|u| !u.trim().is_empty())?;
        Some((name, url))
    }
}

impl Manifest {
    /// The advertised version, or `local` when the manifest has none.
    pub fn latest_version_or<'a>(&'a self, local: &'a str) -> &'a str {
        self.latest_version.as_deref().unwrap_or(local)
    }

    pub fn changelog(&self) -> &str {
        self.changelog.as_deref().unwrap_or(NO_CHANGELOG)
    }

    pub fn files(&self) -> &[FileDescriptor] {
        self.files.as_deref().unwrap_or_default()
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&quot;", "\"")
        .replace("&#34;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
}

/// The text from the first `{` through the last `}`.
fn json_region(text: &str) -> String {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => text[start..=end].to_string(),
        _ => text.trim().to_string(),
    }
}

/// Remove tags, decode the common entities and keep the text from the
/// first `{` through the last `}`.
pub fn strip_markup(body: &str) -> String {
    json_region(&decode_entities(&TAG.replace_all(body, "")))
}

/// Parse a manifest body.
///
/// 1. Parse `body` as JSON.
/// 2. Decode entities and parse the `{`..`}` region, leaving any `<` or
///    `>` inside string values alone.
/// 3. Parse [`strip_markup`] of `body`, for pages that also put tags
///    inside the JSON. The error of this last attempt is the one
///    returned.
pub fn parse_tolerant(body: &str) -> Result<Manifest, serde_json::Error> {
    match serde_json::from_str(body) {
        Ok(manifest) => return Ok(manifest),
        Err(e) => event!(
            tracing::Level::DEBUG,
            error = %e,
            "Manifest is not plain JSON, retrying without markup"
        ),
    }
    if let Ok(manifest) = serde_json::from_str(&json_region(&decode_entities(body))) {
        return Ok(manifest);
    }
    serde_json::from_str(&strip_markup(body))
}
