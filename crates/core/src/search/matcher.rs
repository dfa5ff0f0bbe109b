//! Match evaluator: applies one parsed query to one document.
//!
//! Equality compares the backend's textual rendering of the resolved
//! value byte-for-byte against the predicate value; there is no other
//! coercion. Ranges compare as 64-bit floats: numbers convert directly,
//! strings are parsed, and every other type fails the predicate. A
//! coercion failure is just a non-match, never an error.

use crate::document::{get_path, scalar_text, Document};
use crate::query::{CompareOp, Comparison, Query};
use serde_json::Value;

/// Evaluates the full conjunction against `doc`.
///
/// The empty query matches every document; the first failing predicate
/// short-circuits.
pub fn matches(query: &Query, doc: &Document) -> bool {
    query.ands.iter().all(|cmp| matches_comparison(cmp, doc))
}

fn matches_comparison(cmp: &Comparison, doc: &Document) -> bool {
    let Some(value) = get_path(doc, &cmp.key) else {
        return false;
    };

    match cmp.op {
        CompareOp::Eq => scalar_text(value).is_some_and(|text| text == cmp.value),
        CompareOp::Gt | CompareOp::Lt => {
            let Ok(right) = cmp.value.parse::<f64>() else {
                return false;
            };
            let Some(left) = numeric_value(value) else {
                return false;
            };
            // Both bounds are strict; equal values match neither.
            match cmp.op {
                CompareOp::Gt => left > right,
                CompareOp::Lt => left < right,
                CompareOp::Eq => unreachable!("handled above"),
            }
        }
    }
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
