pub mod apply;
pub mod date_range;
pub mod project;

pub use apply::{SessionFilter, apply_filters};
pub use date_range::DateRange;
pub use project::matches_project;
