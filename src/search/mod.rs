//! Full-text search over session messages.
//!
//! Queries are split on whitespace into case-insensitive terms. A session's
//! score is the sum, over every message and every distinct term it contains,
//! of the message's type weight (user 3, assistant 2, anything else 1).
//! There is no other ranking signal.

pub mod engine;
pub mod highlight;

pub use engine::{
    CONTENT_PREVIEW_CHARS, MAX_MATCHED_MESSAGES, SearchEngine, SearchOptions, score_session,
    tokenize, type_weight,
};
pub use highlight::{CONTEXT_CHARS, LoweredText, fold_case};
