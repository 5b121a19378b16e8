//! In-memory read cache for session logs and index files
//!
//! Maps a file path to its parsed content. Entries are added lazily on first
//! read and live until [`ReadCache::clear`]; there is no eviction and no TTL.
//! The derived catalog is never cached, only parsed files, so a warm cache
//! and a cold cache produce the same results for unchanged files.
//!
//! The cache is advisory. [`SourceReader::Direct`] bypasses it entirely.

pub mod read_cache;

pub use read_cache::{ReadCache, SourceReader};
