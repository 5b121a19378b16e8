//! Claude Session Dashboard - catalog, read and search Claude session logs
//!
//! This library reads the per-project session logs stored under
//! `~/.claude/projects/` and provides:
//!
//! - Normalizing heterogeneous JSONL records into a flat message stream
//! - Building a session catalog from `sessions-index.json` files, or by
//!   scanning the logs directly when no index exists
//! - Filtering the catalog by project and date range, with pagination
//! - Term search with type-weighted scoring and highlight snippets
//!
//! # Example
//!
//! ```no_run
//! use session_dashboard::{Config, SessionService};
//!
//! let service = SessionService::new(Config::from_env()?);
//! let response = service.search("fix bug", None, None);
//! for hit in &response.results {
//!     println!("{} ({}): score {}", hit.session_id, hit.project_path, hit.score);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod directory;
pub mod filters;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod search;
pub mod service;
pub mod utils;

// Re-export commonly used types
pub use cache::{ReadCache, SourceReader};
pub use config::Config;
pub use directory::SessionDirectory;
pub use filters::{DateRange, SessionFilter};
pub use models::{Message, MessageKind, SearchHit, SearchResponse, SessionRecord, Stats};
pub use parsers::read_messages;
pub use service::SessionService;
pub use utils::{ProjectPathDecoder, format_path_with_tilde};
