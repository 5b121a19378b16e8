use std::borrow::Cow;
use std::env;
use std::path::Path;

use percent_encoding::percent_decode_str;

/// Container directories whose children are assumed to be single project
/// folders, so dashes after them are kept rather than turned into separators.
pub const DEFAULT_PATH_MARKERS: &[&str] = &[
    "Projects",
    "projects",
    "workspace",
    "repos",
    "code",
    "src",
    "dev",
    "Documents",
    "Desktop",
    "git",
    "github",
];

/// Best-effort recovery of a project path from its mangled directory name.
///
/// Claude names each project directory after the project's path with every
/// separator (and most punctuation) replaced by `-`, so `/Users/bob/proj`
/// becomes `-Users-bob-proj`. The mapping is lossy: `/Users/bob/my-app` and
/// `/Users/bob/my/app` mangle to the same name. The decoder splits on `-`, but
/// once it passes the last configured marker segment it rejoins the rest with
/// `-`, treating it as one folder name.
///
/// Results are guesses. Equality filters on a decoded path can under- or
/// over-match sessions whose path came from the log itself.
///
/// # Examples
///
/// ```
/// use session_dashboard::utils::ProjectPathDecoder;
///
/// let decoder = ProjectPathDecoder::default();
/// assert_eq!(decoder.decode("-Users-bob-proj"), "/Users/bob/proj");
/// assert_eq!(decoder.decode("-Users-bob-code-my-app"), "/Users/bob/code/my-app");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPathDecoder {
    markers: Vec<String>,
}

impl ProjectPathDecoder {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { markers: markers.into_iter().map(Into::into).collect() }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Decode a project directory name. Names that do not look mangled (no
    /// leading `-`) are returned unchanged.
    pub fn decode(&self, dir_name: &str) -> String {
        let Some(mangled) = dir_name.strip_prefix('-') else {
            return dir_name.to_string();
        };

        // Older layouts percent-encoded the path instead of dash-mangling it
        if mangled.contains('%') {
            return format!("/{}", percent_decode_str(mangled).decode_utf8_lossy());
        }

        let segments = split_segments(mangled);
        let last_marker = segments
            .iter()
            .enumerate()
            .rev()
            .skip(1)
            .find(|(_, segment)| self.markers.iter().any(|m| m == *segment))
            .map(|(idx, _)| idx);

        match last_marker {
            Some(idx) => {
                format!("/{}/{}", segments[..=idx].join("/"), segments[idx + 1..].join("-"))
            }
            None => format!("/{}", segments.join("/")),
        }
    }
}

impl Default for ProjectPathDecoder {
    fn default() -> Self {
        Self::new(DEFAULT_PATH_MARKERS.iter().copied())
    }
}

/// Split on `-`; an empty segment (from `--`) marks a dot-prefixed folder
fn split_segments(mangled: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut hidden = false;
    for part in mangled.split('-') {
        if part.is_empty() {
            hidden = true;
            continue;
        }
        segments.push(if hidden { format!(".{}", part) } else { part.to_string() });
        hidden = false;
    }
    segments
}

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use session_dashboard::utils::format_path_with_tilde;
///
/// let path = PathBuf::from("/Users/alice/Documents");
/// // Returns "~/Documents" if HOME=/Users/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, None)
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
