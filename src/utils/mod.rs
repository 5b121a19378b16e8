pub mod environment;
pub mod paths;
pub mod text;

pub use environment::{CLAUDE_DIR_ENV, get_claude_dir};
pub use paths::{DEFAULT_PATH_MARKERS, ProjectPathDecoder, format_path_with_tilde};
pub use text::truncate_chars;
