use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::Config;
use crate::filters::{DateRange, SessionFilter};
use crate::service::SessionService;
use crate::utils::format_path_with_tilde;

#[derive(Parser)]
#[command(name = "session-dashboard")]
#[command(version = "0.1.0")]
#[command(about = "Browse and search Claude session logs", long_about = None)]
pub struct Cli {
    /// Claude directory holding `projects/` (defaults to $CLAUDE_CONFIG_DIR or ~/.claude)
    #[arg(long, global = true)]
    pub claude_dir: Option<PathBuf>,

    /// Container directory name used to recover project paths (repeatable)
    #[arg(long = "path-marker", global = true)]
    pub path_markers: Vec<String>,

    /// Read every file from disk instead of through the cache
    #[arg(long, global = true)]
    pub no_cache: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List sessions, most recently modified first
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// 0 uses the configured default
        #[arg(long, default_value_t = 0)]
        page_size: usize,
        /// Project path or mangled project directory name
        #[arg(long)]
        project: Option<String>,
        /// Only sessions modified on or after this day (YYYY-MM-DD, UTC)
        #[arg(long)]
        since: Option<NaiveDate>,
        /// Only sessions modified on or before this day (YYYY-MM-DD, UTC)
        #[arg(long)]
        until: Option<NaiveDate>,
    },
    /// Print the messages of one session
    Show { session_id: String },
    /// Search message content
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Show statistics about the session logs
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Drop cached file contents
    ClearCache,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let service = SessionService::new(build_config(&cli)?);

    match command {
        Commands::List { page, page_size, project, since, until } => {
            let filter = SessionFilter {
                project: project.clone(),
                date_range: DateRange::from_dates(*since, *until),
            };
            print_json(&service.list_sessions_matching(*page, *page_size, &filter))?;
        }
        Commands::Show { session_id } => {
            let Some(messages) = service.get_session_by_id(session_id) else {
                bail!("Session not found: {}", session_id);
            };
            print_json(&messages)?;
        }
        Commands::Search { query, project, limit } => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                bail!("Search query must not be empty");
            }
            print_json(&service.search(&query, project.as_deref(), *limit))?;
        }
        Commands::Stats { json } => show_stats(&service, *json)?,
        Commands::ClearCache => {
            service.clear_cache();
            println!("Cache cleared");
        }
    }

    Ok(())
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.claude_dir {
        Some(dir) => Config::new(dir).with_env_overrides(),
        None => Config::from_env().context("Failed to resolve Claude directory")?,
    };
    if !cli.path_markers.is_empty() {
        config.path_markers = cli.path_markers.clone();
    }
    config.use_cache = !cli.no_cache;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}

fn show_stats(service: &SessionService, json: bool) -> Result<()> {
    let stats = service.get_stats();
    if json {
        return print_json(&stats);
    }

    println!("Claude Session Statistics");
    println!("=========================");
    println!("Total projects: {}", stats.total_projects);
    println!("Total sessions: {}", stats.total_sessions);
    println!("Total messages: {}", stats.total_messages);
    println!();
    for project in &stats.per_project {
        println!(
            "  {} ({} sessions, {} messages)",
            project.project_path, project.session_count, project.message_count
        );
    }
    println!();
    println!("Claude directory: {}", format_path_with_tilde(&service.config().claude_dir));

    Ok(())
}
