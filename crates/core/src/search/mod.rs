//! Query planning and execution.
//!
//! Equality predicates are answerable from the fingerprint index: each
//! maps to exactly one posting list, and the candidate set is the
//! intersection of those lists. Range predicates can never be answered
//! from the index and always run as residual filters over loaded
//! candidates. With no equality predicates, or when the caller forces
//! scan mode, the executor iterates the whole primary store instead.

/// Per-document predicate evaluation.
pub mod matcher;

pub use matcher::matches;

use crate::document::Document;
use crate::error::DbError;
use crate::index::{fingerprint, Index};
use crate::query::{CompareOp, Query};
use crate::storage::DocumentStore;
use std::collections::HashMap;

/// One search result: a document paired with its id.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub document: Document,
}

/// Runs `query` against the store. `skip_index` forces a full scan.
/// Result order is unspecified.
pub fn execute(
    documents: &DocumentStore,
    index: &Index,
    query: &Query,
    skip_index: bool,
) -> Result<Vec<SearchHit>, DbError> {
    let equalities: Vec<_> = query
        .ands
        .iter()
        .filter(|cmp| cmp.op == CompareOp::Eq)
        .collect();
    let has_ranges = query.ands.len() > equalities.len();

    if skip_index || equalities.is_empty() {
        return scan(documents, query);
    }

    // Count, per id, how many equality posting lists contain it; the ids
    // hit by every list form the intersection.
    let mut hits_per_id: HashMap<String, usize> = HashMap::new();
    for cmp in &equalities {
        for id in index.lookup(&fingerprint::fingerprint(&cmp.key, &cmp.value))? {
            *hits_per_id.entry(id).or_insert(0) += 1;
        }
    }

    let mut results = Vec::new();
    for (id, count) in hits_per_id {
        if count != equalities.len() {
            continue;
        }
        // A posting list can briefly lead the primary store during a
        // concurrent insert; a missing document is a skip, not an error.
        let Some(document) = documents.get(&id)? else {
            continue;
        };
        // Equality-only hits are already exact. Ranges re-check the full
        // conjunction against the loaded document.
        if has_ranges && !matcher::matches(query, &document) {
            continue;
        }
        results.push(SearchHit { id, document });
    }
    Ok(results)
}

fn scan(documents: &DocumentStore, query: &Query) -> Result<Vec<SearchHit>, DbError> {
    let mut results = Vec::new();
    for id in documents.ids()? {
        let Some(document) = documents.get(&id)? else {
            continue;
        };
        if matcher::matches(query, &document) {
            results.push(SearchHit { id, document });
        }
    }
    Ok(results)
}
