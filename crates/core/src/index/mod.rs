//! Inverted fingerprint index.
//!
//! Maps each fingerprint to an insertion-ordered, duplicate-free posting
//! list of document ids, persisted as one delimiter-joined value per
//! fingerprint. An id is in the posting list of fingerprint `F` exactly
//! when `F` is among the flattened fingerprints of its document.
//!
//! The index is a best-effort cache over the primary store: writer
//! failures are logged and skipped, inserts never fail because of it, and
//! [`Index::rebuild_from`] recomputes the whole thing. Posting lists grow
//! monotonically and are never pruned.

/// Fingerprint construction and store-key encoding.
pub mod fingerprint;

pub use fingerprint::flatten;

use crate::config;
use crate::document::Document;
use crate::error::DbError;
use crate::storage::{DocumentStore, KvStore};
use parking_lot::Mutex;
use std::io;
use std::path::PathBuf;

/// The secondary index store.
#[derive(Debug)]
pub struct Index {
    kv: KvStore,
    /// Serializes posting-list read-modify-write cycles. Without it, two
    /// concurrent inserts sharing a fingerprint can drop one id until the
    /// next rebuild.
    write_lock: Mutex<()>,
}

impl Index {
    /// Opens the index store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        Ok(Self {
            kv: KvStore::open(dir)?,
            write_lock: Mutex::new(()),
        })
    }

    /// Indexes every fingerprint of `doc` under `id`.
    ///
    /// Best-effort: a fingerprint whose posting list cannot be read or
    /// written is logged and skipped, and the remaining fingerprints are
    /// still processed. Re-indexing the same `(id, doc)` pair is a no-op
    /// because posting lists deduplicate ids.
    pub fn add_document(&self, id: &str, doc: &Document) {
        let _guard = self.write_lock.lock();
        for fp in fingerprint::flatten(doc) {
            if let Err(e) = self.append_posting(&fp, id) {
                tracing::warn!(fingerprint = %fp, id = %id, error = %e, "skipping index update");
            }
        }
    }

    fn append_posting(&self, fp: &str, id: &str) -> Result<(), DbError> {
        let key = fingerprint::encode_key(fp);
        let existing = self.kv.get(&key).map_err(|e| DbError::StorageRead {
            key: fp.to_owned(),
            source: e,
        })?;
        let mut ids = match existing {
            Some(bytes) => decode_postings(&bytes),
            None => Vec::new(),
        };
        if ids.iter().any(|existing| existing == id) {
            return Ok(());
        }
        ids.push(id.to_owned());
        self.kv
            .put(&key, ids.join(config::POSTING_DELIMITER).as_bytes())
            .map_err(|e| DbError::StorageWrite {
                key: fp.to_owned(),
                source: e,
            })
    }

    /// Fetches the posting list for a fingerprint.
    ///
    /// A fingerprint with no postings yields an empty list; any other
    /// read failure is surfaced.
    pub fn lookup(&self, fp: &str) -> Result<Vec<String>, DbError> {
        let key = fingerprint::encode_key(fp);
        let bytes = self.kv.get(&key).map_err(|e| DbError::StorageRead {
            key: fp.to_owned(),
            source: e,
        })?;
        Ok(bytes.as_deref().map(decode_postings).unwrap_or_default())
    }

    /// Rebuilds the index from every document in the primary store.
    ///
    /// Append-only and idempotent. Documents that fail to load are logged
    /// and skipped rather than aborting the rebuild. Returns the number of
    /// documents indexed.
    pub fn rebuild_from(&self, documents: &DocumentStore) -> Result<usize, DbError> {
        let mut indexed = 0;
        for id in documents.ids()? {
            match documents.get(&id) {
                Ok(Some(doc)) => {
                    self.add_document(&id, &doc);
                    indexed += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "skipping unreadable document during rebuild");
                }
            }
        }
        Ok(indexed)
    }
}

fn decode_postings(bytes: &[u8]) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    if text.is_empty() {
        return Vec::new();
    }
    text.split(config::POSTING_DELIMITER)
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn index() -> (Index, TempDir) {
        let tmp = TempDir::new().expect("temp dir");
        let idx = Index::open(tmp.path().join("idx")).expect("open index");
        (idx, tmp)
    }

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().expect("object").clone()
    }

    #[test]
    fn test_add_document_populates_every_fingerprint() {
        let (idx, _tmp) = index();
        idx.add_document("id-1", &doc(json!({"name": "Kevin", "age": "45"})));
        assert_eq!(idx.lookup("name=Kevin").unwrap(), vec!["id-1"]);
        assert_eq!(idx.lookup("age=45").unwrap(), vec!["id-1"]);
    }

    #[test]
    fn test_lookup_unknown_fingerprint_is_empty() {
        let (idx, _tmp) = index();
        assert!(idx.lookup("never=seen").unwrap().is_empty());
    }

    #[test]
    fn test_posting_lists_keep_insertion_order() {
        let (idx, _tmp) = index();
        let d = doc(json!({"kind": "x"}));
        idx.add_document("id-1", &d);
        idx.add_document("id-2", &d);
        idx.add_document("id-3", &d);
        assert_eq!(idx.lookup("kind=x").unwrap(), vec!["id-1", "id-2", "id-3"]);
    }

    #[test]
    fn test_reinserting_same_id_does_not_duplicate() {
        let (idx, _tmp) = index();
        let d = doc(json!({"kind": "x"}));
        for _ in 0..3 {
            idx.add_document("id-1", &d);
        }
        assert_eq!(idx.lookup("kind=x").unwrap(), vec!["id-1"]);
    }

    #[test]
    fn test_no_postings_for_absent_fingerprints() {
        let (idx, _tmp) = index();
        idx.add_document("id-1", &doc(json!({"a": 1})));
        assert!(idx.lookup("a=2").unwrap().is_empty());
        assert!(idx.lookup("b=1").unwrap().is_empty());
    }

    #[test]
    fn test_fingerprints_with_special_characters_round_trip() {
        let (idx, _tmp) = index();
        idx.add_document("id-1", &doc(json!({"path": "/usr/local", "q": "a=b"})));
        assert_eq!(idx.lookup("path=/usr/local").unwrap(), vec!["id-1"]);
        assert_eq!(idx.lookup("q=a=b").unwrap(), vec!["id-1"]);
    }
}
