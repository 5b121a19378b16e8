use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, bail};

/// Environment variable that relocates the Claude directory
pub const CLAUDE_DIR_ENV: &str = "CLAUDE_CONFIG_DIR";

/// Get the Claude directory path (`$CLAUDE_CONFIG_DIR`, else `~/.claude`)
pub fn get_claude_dir() -> Result<PathBuf> {
    let home = env::var_os("HOME").map(PathBuf::from).or_else(dirs::home_dir);
    resolve_claude_dir(env::var_os(CLAUDE_DIR_ENV), home)
}

fn resolve_claude_dir(override_dir: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    match home {
        Some(home) => Ok(home.join(".claude")),
        None => bail!("HOME environment variable not set and no home directory found"),
    }
}
