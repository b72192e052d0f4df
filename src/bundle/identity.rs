//! Output label resolution
//!
//! The label names the destination folder. Sources, first hit wins:
//! 1. a `friendlyName:` annotation anywhere in the raw text
//! 2. the leaf certificate's subject Common Name
//! 3. [`FALLBACK_LABEL`]
//!
//! Only the text before the first `.` is kept, lower-cased, so
//! `friendlyName: Skynet.Internal` becomes `skynet` and `CN=api.example.com`
//! becomes `api`.

use regex::Regex;
use std::sync::LazyLock;

/// Label used when neither an annotation nor a Common Name yields one
pub const FALLBACK_LABEL: &str = "extracted_cert";

// Searches the whole bundle, not only the text near the leaf.
static FRIENDLY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"friendlyName:\s*([^.\s]+)").expect("friendlyName pattern is valid")
});

/// A lowercase, non-empty, single path segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputLabel(String);

impl OutputLabel {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OutputLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<std::path::Path> for OutputLabel {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}

/// Resolve the output label from the raw bundle text and the leaf's Common Name
pub fn resolve_label(raw: &str, common_name: Option<&str>) -> OutputLabel {
    if let Some(label) = friendly_name(raw).and_then(|name| sanitize(&name)) {
        tracing::debug!("Label '{}' taken from friendlyName annotation", label);
        return OutputLabel(label);
    }

    if let Some(label) = common_name
        .and_then(|cn| cn.split('.').next())
        .and_then(sanitize)
    {
        tracing::debug!("Label '{}' taken from leaf Common Name", label);
        return OutputLabel(label);
    }

    tracing::debug!("No usable friendlyName or Common Name, using fallback label");
    OutputLabel(FALLBACK_LABEL.to_string())
}

/// First `friendlyName:` token in the text, up to a `.` or whitespace
fn friendly_name(raw: &str) -> Option<String> {
    FRIENDLY_NAME
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Lower-case and strip anything that cannot live in a single path segment
fn sanitize(token: &str) -> Option<String> {
    let cleaned: String = token
        .chars()
        .filter(|c| !matches!(c, '/' | '\\') && !c.is_control())
        .flat_map(char::to_lowercase)
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
