//! docdb-server — HTTP surface for docdb.
//!
//! Route dispatch, the JSON response envelope, and request middleware
//! live here. The engine lives in `docdb-core`.

/// REST API layer: router, handlers, models, errors.
pub mod api;
