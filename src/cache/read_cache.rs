use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::models::{Message, SessionsIndex};
use crate::parsers::{read_messages, read_sessions_index, try_read_messages};

static GLOBAL_CACHE: OnceLock<Arc<ReadCache>> = OnceLock::new();

/// Parsed file contents keyed by path.
///
/// Only successful reads are remembered, so a file that appears later (or
/// stops failing) is picked up without a [`ReadCache::clear`]. Two threads
/// racing on the same cold path may both parse it; the first insert wins and
/// both results are identical.
#[derive(Debug, Default)]
pub struct ReadCache {
    logs: RwLock<HashMap<PathBuf, Arc<Vec<Message>>>>,
    indexes: RwLock<HashMap<PathBuf, Arc<SessionsIndex>>>,
}

impl ReadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache, created empty on first use
    pub fn global() -> Arc<ReadCache> {
        Arc::clone(GLOBAL_CACHE.get_or_init(|| Arc::new(ReadCache::new())))
    }

    /// Messages of a session log, parsing it on first request
    pub fn messages(&self, path: &Path) -> Arc<Vec<Message>> {
        if let Some(hit) = self.logs.read().unwrap_or_else(PoisonError::into_inner).get(path) {
            return Arc::clone(hit);
        }

        match try_read_messages(path) {
            Ok(messages) => {
                let mut logs = self.logs.write().unwrap_or_else(PoisonError::into_inner);
                Arc::clone(logs.entry(path.to_path_buf()).or_insert_with(|| Arc::new(messages)))
            }
            Err(e) => {
                warn!("Failed to read session log {}: {}", path.display(), e);
                Arc::new(Vec::new())
            }
        }
    }

    /// Parsed session index, or `None` if it cannot be read or parsed
    pub fn sessions_index(&self, path: &Path) -> Option<Arc<SessionsIndex>> {
        if let Some(hit) = self.indexes.read().unwrap_or_else(PoisonError::into_inner).get(path) {
            return Some(Arc::clone(hit));
        }

        match read_sessions_index(path) {
            Ok(index) => {
                let mut indexes = self.indexes.write().unwrap_or_else(PoisonError::into_inner);
                Some(Arc::clone(
                    indexes.entry(path.to_path_buf()).or_insert_with(|| Arc::new(index)),
                ))
            }
            Err(e) => {
                warn!("{:#}", e);
                None
            }
        }
    }

    /// Drop every cached file
    pub fn clear(&self) {
        let logs = {
            let mut logs = self.logs.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *logs).len()
        };
        let indexes = {
            let mut indexes = self.indexes.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::take(&mut *indexes).len()
        };
        debug!("Cleared read cache ({} logs, {} indexes)", logs, indexes);
    }

    /// Number of cached files
    pub fn len(&self) -> usize {
        self.logs.read().unwrap_or_else(PoisonError::into_inner).len()
            + self.indexes.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// How the core reaches session files: through a shared [`ReadCache`] or
/// straight from disk on every call.
#[derive(Debug, Clone)]
pub enum SourceReader {
    Cached(Arc<ReadCache>),
    Direct,
}

impl SourceReader {
    pub fn messages(&self, path: &Path) -> Arc<Vec<Message>> {
        match self {
            SourceReader::Cached(cache) => cache.messages(path),
            SourceReader::Direct => Arc::new(read_messages(path)),
        }
    }

    pub fn sessions_index(&self, path: &Path) -> Option<Arc<SessionsIndex>> {
        match self {
            SourceReader::Cached(cache) => cache.sessions_index(path),
            SourceReader::Direct => match read_sessions_index(path) {
                Ok(index) => Some(Arc::new(index)),
                Err(e) => {
                    warn!("{:#}", e);
                    None
                }
            },
        }
    }

    /// Reset the underlying cache; a no-op for direct reads
    pub fn clear(&self) {
        if let SourceReader::Cached(cache) = self {
            cache.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const LINE: &str = r#"{"type":"user","message":{"content":[{"type":"text","text":"hello"}]}}"#;

    #[test]
    fn test_cold_and_warm_reads_agree() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.jsonl");
        fs::write(&path, format!("{}\n{}\n", LINE, LINE)).unwrap();

        let cache = ReadCache::new();
        let cold = cache.messages(&path);
        let warm = cache.messages(&path);

        assert_eq!(cold, warm);
        assert_eq!(cold.len(), 2);
        assert!(Arc::ptr_eq(&cold, &warm));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cached_content_survives_file_change_until_clear() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.jsonl");
        fs::write(&path, format!("{}\n", LINE)).unwrap();

        let cache = ReadCache::new();
        assert_eq!(cache.messages(&path).len(), 1);

        fs::write(&path, format!("{}\n{}\n{}\n", LINE, LINE, LINE)).unwrap();
        assert_eq!(cache.messages(&path).len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.messages(&path).len(), 3);
    }

    #[test]
    fn test_failed_reads_are_not_cached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("late.jsonl");

        let cache = ReadCache::new();
        assert!(cache.messages(&path).is_empty());
        assert!(cache.is_empty());

        fs::write(&path, format!("{}\n", LINE)).unwrap();
        assert_eq!(cache.messages(&path).len(), 1);
    }

    #[test]
    fn test_corrupt_index_is_not_cached() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sessions-index.json");
        fs::write(&path, "{not json").unwrap();

        let cache = ReadCache::new();
        assert!(cache.sessions_index(&path).is_none());
        assert!(cache.is_empty());

        fs::write(&path, r#"{"version":1,"entries":[]}"#).unwrap();
        assert!(cache.sessions_index(&path).is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_direct_reader_always_rereads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("s.jsonl");
        fs::write(&path, format!("{}\n", LINE)).unwrap();

        let reader = SourceReader::Direct;
        assert_eq!(reader.messages(&path).len(), 1);
        fs::write(&path, format!("{}\n{}\n", LINE, LINE)).unwrap();
        assert_eq!(reader.messages(&path).len(), 2);
    }

    #[test]
    fn test_global_cache_is_shared() {
        assert!(Arc::ptr_eq(&ReadCache::global(), &ReadCache::global()));
    }
}
