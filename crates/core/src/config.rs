//! Global configuration constants for docdb.
//!
//! Server defaults and input limits are defined here. These are
//! compile-time constants; runtime configuration is handled via CLI
//! arguments in the server crate.

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default path of the primary database directory.
///
/// The fingerprint index lives in a sibling directory with
/// [`INDEX_DIR_SUFFIX`] appended.
pub const DEFAULT_DATABASE_PATH: &str = "docdb.data";

/// Suffix appended to the database path to form the index directory.
pub const INDEX_DIR_SUFFIX: &str = ".index";

/// Delimiter between document ids in a persisted posting list.
pub const POSTING_DELIMITER: &str = ",";

/// Maximum HTTP request body size in bytes (10 MB).
pub const MAX_REQUEST_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 512;
