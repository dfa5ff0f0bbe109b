//! Fingerprints: flattened `path=value` renderings of document leaves.
//!
//! A fingerprint pairs the dot-joined key path of one leaf scalar with its
//! textual rendering, e.g. `address.city=Berlin`. Keys containing `.` or
//! `=` collide with the separators; fixing that would change the on-disk
//! format, so it stays a documented limitation.

use crate::document::{scalar_text, Document};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::Value;

/// Flattens a document into `path=value` fingerprints, one per leaf
/// scalar in a non-array position.
///
/// Nested objects extend the dot-joined path; arrays and all their
/// descendants produce nothing. Output order follows document iteration
/// order, which callers must not rely on.
pub fn flatten(doc: &Document) -> Vec<String> {
    let mut out = Vec::new();
    flatten_into(doc, "", &mut out);
    out
}

fn flatten_into(obj: &Document, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in obj {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => flatten_into(nested, &path, out),
            // Arrays have no index representation.
            Value::Array(_) => {}
            scalar => {
                if let Some(text) = scalar_text(scalar) {
                    out.push(format!("{path}={text}"));
                }
            }
        }
    }
}

/// Builds the fingerprint an equality predicate selects: the dot-joined
/// key path and the lexical value, joined by `=`. The same rule the
/// flattener applies, so index lookups and scans agree.
pub fn fingerprint(key_path: &[String], value: &str) -> String {
    format!("{}={}", key_path.join("."), value)
}

/// Encodes a fingerprint into a filesystem-safe store key.
///
/// Fingerprints contain arbitrary user text but index-store keys are file
/// names, so they go through URL-safe base64.
pub fn encode_key(fingerprint: &str) -> String {
    URL_SAFE_NO_PAD.encode(fingerprint)
}
