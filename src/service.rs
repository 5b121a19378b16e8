//! The dashboard's query surface.
//!
//! [`SessionService`] is what a transport layer wraps: every method maps to
//! one request kind and returns a plain, serializable value. Each call
//! rebuilds the catalog from disk; only parsed files are shared between
//! calls through the read cache.
//!
//! # Graceful Degradation
//!
//! None of the query methods return `Err`. Missing directories, unreadable
//! logs and corrupt index files shrink the result instead. The only
//! "not found" signal is [`SessionService::get_session_by_id`] returning
//! `None`.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use crate::cache::{ReadCache, SourceReader};
use crate::config::Config;
use crate::directory::SessionDirectory;
use crate::filters::{DateRange, SessionFilter, matches_project};
use crate::indexer::CatalogResolver;
use crate::models::{Message, Page, ProjectStats, SearchResponse, SessionRecord, Stats};
use crate::search::{SearchEngine, SearchOptions};

pub struct SessionService {
    config: Config,
    reader: SourceReader,
}

impl SessionService {
    /// Service reading through the process-wide cache, or straight from
    /// disk when `config.use_cache` is off
    pub fn new(config: Config) -> Self {
        let reader =
            if config.use_cache { SourceReader::Cached(ReadCache::global()) } else { SourceReader::Direct };
        Self { config, reader }
    }

    /// Service with its own cache instance
    pub fn with_cache(config: Config, cache: Arc<ReadCache>) -> Self {
        Self { config, reader: SourceReader::Cached(cache) }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn catalog(&self) -> SessionDirectory {
        CatalogResolver::new(&self.config, &self.reader).list_sessions()
    }

    /// Every known session, most recently modified first
    pub fn all_sessions(&self) -> Vec<SessionRecord> {
        self.catalog().into_sessions()
    }

    /// One page of the catalog, optionally restricted to a project.
    /// `page_size == 0` means the configured default.
    pub fn list_sessions(
        &self,
        page: usize,
        page_size: usize,
        project: Option<&str>,
    ) -> Page<SessionRecord> {
        let filter = SessionFilter { project: project.map(str::to_string), ..SessionFilter::default() };
        self.list_sessions_matching(page, page_size, &filter)
    }

    pub fn list_sessions_matching(
        &self,
        page: usize,
        page_size: usize,
        filter: &SessionFilter,
    ) -> Page<SessionRecord> {
        let page_size = if page_size == 0 { self.config.default_page_size } else { page_size };
        self.catalog().page(page, page_size, filter)
    }

    pub fn sessions_by_project(&self, project: &str) -> Vec<SessionRecord> {
        self.catalog().by_project(project)
    }

    pub fn sessions_by_date_range(&self, range: &DateRange) -> Vec<SessionRecord> {
        self.catalog().by_date_range(range)
    }

    /// Catalog entry for `session_id`, if any
    pub fn get_session(&self, session_id: &str) -> Option<SessionRecord> {
        self.catalog().find(session_id).cloned()
    }

    /// Messages of a session.
    ///
    /// `None` when no catalog entry has this id; `Some` with an empty list
    /// when the session exists but its log is empty or unreadable.
    pub fn get_session_by_id(&self, session_id: &str) -> Option<Vec<Message>> {
        let session = self.get_session(session_id)?;
        let messages = self.reader.messages(&session.log_path);
        debug!("Session {} loaded: {} messages", session_id, messages.len());
        Some(messages.as_ref().clone())
    }

    /// Ranked search. `limit` defaults to the configured search limit.
    pub fn search(&self, query: &str, project: Option<&str>, limit: Option<usize>) -> SearchResponse {
        let options = SearchOptions {
            project_path: project.map(str::to_string),
            limit: limit.unwrap_or(self.config.default_search_limit),
        };
        let directory = self.catalog();
        SearchEngine::new(&directory, &self.reader).search(query, &options).into()
    }

    /// Totals plus a per-project-directory breakdown
    pub fn get_stats(&self) -> Stats {
        let resolver = CatalogResolver::new(&self.config, &self.reader);
        let projects = resolver.discover();
        let directory = resolver.build_directory(&projects);

        let per_project: Vec<ProjectStats> = projects
            .par_iter()
            .map(|project| {
                let sessions: Vec<&SessionRecord> = directory
                    .sessions()
                    .iter()
                    .filter(|s| matches_project(s, &project.dir_name))
                    .collect();
                let project_path = sessions
                    .first()
                    .map(|s| s.project_path.clone())
                    .unwrap_or_else(|| resolver.decoder().decode(&project.dir_name));

                ProjectStats {
                    project_dir: project.dir_name.clone(),
                    project_path,
                    session_count: sessions.len(),
                    message_count: sessions.iter().map(|s| s.message_count).sum(),
                }
            })
            .collect();

        Stats {
            total_projects: projects.len(),
            total_sessions: directory.len(),
            total_messages: directory.sessions().iter().map(|s| s.message_count).sum(),
            per_project,
        }
    }

    /// Forget every parsed file so the next call re-reads disk
    pub fn clear_cache(&self) {
        self.reader.clear();
    }
}
