//! Storage layer: file-backed KV store, document store, database facade.
//!
//! The primary store and the fingerprint index live in two sibling
//! directories (`<dir>` and `<dir>.index`). Both are plain [`KvStore`]s.
//! The index is treated as a recomputable cache over the primary store:
//! it can be lost or partially written and rebuilt with
//! [`Database::reindex`].

/// Primary document store: JSON bodies under UUID ids.
pub mod documents;
/// File-per-key byte map with atomic writes.
pub mod kv;

pub use documents::DocumentStore;
pub use kv::KvStore;

use crate::config;
use crate::document::Document;
use crate::error::DbError;
use crate::index::Index;
use crate::query::Query;
use crate::search::{self, SearchHit};
use std::io;
use std::path::Path;

/// The database: a primary document store plus its fingerprint index.
///
/// Handles are process-lifetime. The server keeps one `Database` in its
/// shared state and passes it explicitly; nothing lives in module-level
/// globals.
#[derive(Debug)]
pub struct Database {
    pub documents: DocumentStore,
    pub index: Index,
}

impl Database {
    /// Opens the stores at `path` and `path.index`, creating both
    /// directories if needed.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let mut index_dir = path.as_os_str().to_os_string();
        index_dir.push(config::INDEX_DIR_SUFFIX);
        Ok(Self {
            documents: DocumentStore::open(path)?,
            index: Index::open(index_dir)?,
        })
    }

    /// Stores a document under a fresh id, then indexes its fingerprints.
    ///
    /// The primary write happens first: a failed insert leaves no index
    /// entries, and a crash between the two steps leaves a document that
    /// scans still find and the next reindex picks up. Index failures are
    /// logged inside the writer and never fail the insert.
    pub fn insert(&self, doc: &Document) -> Result<String, DbError> {
        let id = self.documents.insert(doc)?;
        self.index.add_document(&id, doc);
        Ok(id)
    }

    /// Loads a document by id. A missing id is `Ok(None)`.
    pub fn get(&self, id: &str) -> Result<Option<Document>, DbError> {
        self.documents.get(id)
    }

    /// Runs a parsed query. `skip_index` forces a full scan.
    pub fn search(&self, query: &Query, skip_index: bool) -> Result<Vec<SearchHit>, DbError> {
        search::execute(&self.documents, &self.index, query, skip_index)
    }

    /// Rebuilds the fingerprint index from the primary store. Returns the
    /// number of documents indexed.
    pub fn reindex(&self) -> Result<usize, DbError> {
        self.index.rebuild_from(&self.documents)
    }

    /// Number of documents currently stored.
    pub fn document_count(&self) -> Result<usize, DbError> {
        Ok(self.documents.ids()?.len())
    }
}
