//! Data models for the session dashboard.
//!
//! - [`SessionRecord`] - One catalog entry (from `sessions-index.json` or a direct scan)
//! - [`SessionsIndex`] - The precomputed per-project index file
//! - [`Message`] - One normalized log line
//! - [`SearchHit`] - A ranked search result with highlighted matches
//! - [`Stats`] - Aggregate counts across projects
//! - [`ProjectInfo`] - Discovered project directory and its files
//!
//! Wire names follow the producer's camelCase JSON so records read from an
//! index file serialize back out unchanged.

pub mod message;
pub mod page;
pub mod project;
pub mod search;
pub mod session;
pub mod stats;

pub use message::{Message, MessageKind};
pub use page::{Page, Pagination};
pub use project::ProjectInfo;
pub use search::{MatchedMessage, SearchHit, SearchResponse};
pub use session::{SessionRecord, SessionsIndex};
pub use stats::{ProjectStats, Stats};
