//! Project catalog resolution.
//!
//! # Error Handling Strategy
//!
//! Every failure below the aggregate is absorbed where it happens:
//!
//! - **Projects directory**: unreadable → logged, empty catalog
//! - **Index file**: missing or unparseable → the directory is scanned directly
//! - **Log files**: unreadable → logged and skipped by the scan
//!
//! Listing therefore never fails; it only gets shorter.

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::cache::SourceReader;
use crate::config::Config;
use crate::directory::SessionDirectory;
use crate::indexer::project_discovery::discover_projects;
use crate::indexer::scan::scan_project;
use crate::models::{ProjectInfo, SessionRecord};
use crate::utils::ProjectPathDecoder;

/// Rebuilds the session catalog from disk.
///
/// Nothing is remembered between calls except what the [`SourceReader`]
/// caches (parsed index files).
pub struct CatalogResolver<'a> {
    config: &'a Config,
    reader: &'a SourceReader,
    decoder: ProjectPathDecoder,
}

impl<'a> CatalogResolver<'a> {
    pub fn new(config: &'a Config, reader: &'a SourceReader) -> Self {
        Self { config, reader, decoder: config.path_decoder() }
    }

    /// Project directories currently on disk
    pub fn discover(&self) -> Vec<ProjectInfo> {
        let projects_dir = self.config.projects_dir();
        match discover_projects(&projects_dir, &self.config.index_file_name) {
            Ok(projects) => projects,
            Err(e) => {
                warn!("Failed to discover projects: {:#}", e);
                Vec::new()
            }
        }
    }

    /// Sessions of one project: index entries when the index loads, a
    /// direct scan otherwise
    pub fn resolve_project(&self, project: &ProjectInfo) -> Vec<SessionRecord> {
        if let Some(index_path) = &project.index_file {
            if let Some(index) = self.reader.sessions_index(index_path) {
                let fallback_path = index
                    .original_path
                    .clone()
                    .filter(|p| !p.is_empty())
                    .unwrap_or_else(|| self.decoder.decode(&project.dir_name));

                return index
                    .entries
                    .iter()
                    .cloned()
                    .map(|mut entry| {
                        if entry.project_path.is_empty() {
                            entry.project_path = fallback_path.clone();
                        }
                        entry
                    })
                    .collect();
            }
            debug!("Index for {} unusable, scanning logs directly", project.dir_name);
        }

        scan_project(project, &self.decoder)
    }

    /// Resolve the given projects concurrently into a sorted directory
    pub fn build_directory(&self, projects: &[ProjectInfo]) -> SessionDirectory {
        let per_project: Vec<Vec<SessionRecord>> =
            projects.par_iter().map(|project| self.resolve_project(project)).collect();

        SessionDirectory::new(per_project.into_iter().flatten().collect())
    }

    /// Discover and resolve everything
    pub fn list_sessions(&self) -> SessionDirectory {
        let projects = self.discover();
        let directory = self.build_directory(&projects);
        debug!("Catalog built: {} sessions across {} projects", directory.len(), projects.len());
        directory
    }

    pub fn decoder(&self) -> &ProjectPathDecoder {
        &self.decoder
    }
}
