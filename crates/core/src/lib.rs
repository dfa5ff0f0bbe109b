//! # docdb-core
//!
//! Embeddable schemaless JSON document store with an inverted fingerprint
//! index. Documents are JSON objects stored under server-generated UUIDs;
//! a secondary index maps flattened `path=value` fingerprints to posting
//! lists of document ids, so equality queries are answered by intersecting
//! posting lists instead of scanning the whole store.
//!
//! This is the core library crate with zero async dependencies — suitable
//! for embedding directly or serving over HTTP via `docdb-server`.

/// Global configuration constants: defaults and limits.
pub mod config;
/// Core document types: the document map, scalar rendering, path resolution.
pub mod document;
/// Engine error types.
pub mod error;
/// Inverted fingerprint index: flattening, posting lists, rebuild.
pub mod index;
/// Query language: lexer, parser, and AST.
pub mod query;
/// Query evaluation: match evaluator and planner/executor.
pub mod search;
/// Storage layer: file-backed KV store, document store, database facade.
pub mod storage;
