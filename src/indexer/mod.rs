//! Session catalog building for Claude project directories
//!
//! A project directory either carries a precomputed `sessions-index.json`,
//! which is trusted as is, or only raw `*.jsonl` logs, which are scanned to
//! reconstruct the same metadata. Both paths produce [`SessionRecord`]s that
//! are merged into one [`SessionDirectory`] sorted by file modification time.
//!
//! [`SessionRecord`]: crate::models::SessionRecord
//! [`SessionDirectory`]: crate::directory::SessionDirectory

pub mod catalog;
pub mod project_discovery;
pub mod scan;

pub use catalog::CatalogResolver;
pub use project_discovery::discover_projects;
pub use scan::{LogScan, scan_log, scan_project};
