//! Primary document store.
//!
//! Documents are serialized as JSON and stored under their UUID id; one
//! primary-store entry per live id. Documents are created once and never
//! mutated or deleted.

use crate::document::Document;
use crate::error::DbError;
use crate::storage::kv::KvStore;
use std::io;
use std::path::PathBuf;
use uuid::Uuid;

/// The primary store mapping document ids to JSON-serialized bodies.
#[derive(Debug)]
pub struct DocumentStore {
    kv: KvStore,
}

impl DocumentStore {
    /// Opens the store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        Ok(Self {
            kv: KvStore::open(dir)?,
        })
    }

    /// Stores `doc` under a fresh UUID v4 and returns the id.
    pub fn insert(&self, doc: &Document) -> Result<String, DbError> {
        let id = Uuid::new_v4().to_string();
        let bytes = serde_json::to_vec(doc).map_err(|e| DbError::Codec {
            key: id.clone(),
            source: e,
        })?;
        self.kv
            .put(&id, &bytes)
            .map_err(|e| DbError::StorageWrite {
                key: id.clone(),
                source: e,
            })?;
        Ok(id)
    }

    /// Loads a document by id. A missing id is `Ok(None)`.
    pub fn get(&self, id: &str) -> Result<Option<Document>, DbError> {
        let Some(bytes) = self.kv.get(id).map_err(|e| DbError::StorageRead {
            key: id.to_owned(),
            source: e,
        })?
        else {
            return Ok(None);
        };
        let doc = serde_json::from_slice(&bytes).map_err(|e| DbError::Codec {
            key: id.to_owned(),
            source: e,
        })?;
        Ok(Some(doc))
    }

    /// Lists every stored document id. Order is unspecified.
    pub fn ids(&self) -> Result<Vec<String>, DbError> {
        self.kv.keys().map_err(|e| DbError::StorageRead {
            key: self.kv.path().display().to_string(),
            source: e,
        })
    }
}
