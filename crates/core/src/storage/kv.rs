//! File-backed key/value store.
//!
//! Each key maps to one file in the store directory. Writes go through a
//! temp file and rename, so a crash never leaves a half-written value and
//! concurrent readers only ever observe complete values. Reads copy the
//! whole value; there are no long-lived borrows into the backend.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix for in-flight write files, skipped during iteration.
const TMP_SUFFIX: &str = ".tmp";

/// A byte map with point get/put and full key iteration.
///
/// Keys must be valid file names; callers with arbitrary keys encode them
/// first (see the index store's fingerprint encoding).
#[derive(Debug)]
pub struct KvStore {
    dir: PathBuf,
}

impl KvStore {
    /// Opens a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Returns the directory backing this store.
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// Point read. A missing key is `Ok(None)`; any other failure is an
    /// error.
    pub fn get(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.dir.join(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Point write via temp file + rename.
    pub fn put(&self, key: &str, value: &[u8]) -> io::Result<()> {
        let path = self.dir.join(key);
        let tmp_path = self.dir.join(format!("{key}{TMP_SUFFIX}"));
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)
    }

    /// Lists every key currently in the store. Order is unspecified.
    pub fn keys(&self) -> io::Result<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.ends_with(TMP_SUFFIX) {
                continue;
            }
            keys.push(name.to_owned());
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (KvStore, TempDir) {
        let tmp = TempDir::new().expect("temp dir");
        let kv = KvStore::open(tmp.path().join("kv")).expect("open store");
        (kv, tmp)
    }

    #[test]
    fn test_put_get_round_trip() {
        let (kv, _tmp) = store();
        kv.put("k", b"value").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some(&b"value"[..]));
    }

    #[test]
    fn test_missing_key_is_none() {
        let (kv, _tmp) = store();
        assert_eq!(kv.get("absent").unwrap(), None);
    }

    #[test]
    fn test_put_overwrites() {
        let (kv, _tmp) = store();
        kv.put("k", b"one").unwrap();
        kv.put("k", b"two").unwrap();
        assert_eq!(kv.get("k").unwrap().as_deref(), Some(&b"two"[..]));
    }

    #[test]
    fn test_keys_lists_everything_once() {
        let (kv, _tmp) = store();
        kv.put("a", b"1").unwrap();
        kv.put("b", b"2").unwrap();
        let mut keys = kv.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_keys_skips_leftover_tmp_files() {
        let (kv, _tmp) = store();
        kv.put("a", b"1").unwrap();
        std::fs::write(kv.path().join("b.tmp"), b"partial").unwrap();
        assert_eq!(kv.keys().unwrap(), vec!["a"]);
    }
}
