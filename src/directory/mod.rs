//! The session directory: the catalog of every known session, sorted most
//! recently modified first, with the lookups and filters built on top of it.
//!
//! A directory is a snapshot. It is rebuilt from disk for every top-level
//! call and never updated in place.

use crate::filters::{DateRange, SessionFilter, apply_filters};
use crate::models::{Page, SessionRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDirectory {
    sessions: Vec<SessionRecord>,
}

impl SessionDirectory {
    /// Sort by `file_modified_at` descending. The sort is stable, so ties
    /// keep the order the sessions were discovered in.
    pub fn new(mut sessions: Vec<SessionRecord>) -> Self {
        sessions.sort_by(|a, b| b.file_modified_at.cmp(&a.file_modified_at));
        Self { sessions }
    }

    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    pub fn into_sessions(self) -> Vec<SessionRecord> {
        self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// First (most recent) session with this id. Ids are only unique per
    /// project directory, so a duplicated catalog resolves to the newest.
    pub fn find(&self, session_id: &str) -> Option<&SessionRecord> {
        self.sessions.iter().find(|s| s.session_id == session_id)
    }

    /// Sessions matching `project` by path or by catalog directory name
    pub fn by_project(&self, project: &str) -> Vec<SessionRecord> {
        self.filtered(&SessionFilter::project(project))
    }

    /// Sessions whose `modifiedAt` lies inside `range` (inclusive)
    pub fn by_date_range(&self, range: &DateRange) -> Vec<SessionRecord> {
        self.filtered(&SessionFilter { project: None, date_range: *range })
    }

    pub fn filtered(&self, filter: &SessionFilter) -> Vec<SessionRecord> {
        apply_filters(&self.sessions, filter)
    }

    /// One page of the filtered catalog
    pub fn page(&self, page: usize, page_size: usize, filter: &SessionFilter) -> Page<SessionRecord> {
        if filter.is_empty() {
            Page::from_slice(&self.sessions, page, page_size)
        } else {
            Page::from_slice(&self.filtered(filter), page, page_size)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::NaiveDate;

    use super::*;

    fn session(id: &str, dir: &str, project_path: &str, mtime: i64) -> SessionRecord {
        SessionRecord {
            session_id: id.to_string(),
            log_path: PathBuf::from(format!("/c/projects/{}/{}.jsonl", dir, id)),
            file_modified_at: mtime,
            first_prompt: String::new(),
            message_count: 1,
            created_at: String::new(),
            modified_at: "2025-02-01T00:00:00Z".to_string(),
            git_branch: String::new(),
            project_path: project_path.to_string(),
            is_sidechain: false,
        }
    }

    fn sample() -> SessionDirectory {
        SessionDirectory::new(vec![
            session("old", "-a", "/a", 10),
            session("new", "-b", "/b", 30),
            session("tie1", "-a", "/a", 20),
            session("tie2", "-b", "/guess/b", 20),
        ])
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let directory = sample();
        let ids: Vec<&str> = directory.sessions().iter().map(|s| s.session_id.as_str()).collect();
        assert_eq!(ids, vec!["new", "tie1", "tie2", "old"]);
        assert!(
            directory.sessions().windows(2).all(|w| w[0].file_modified_at >= w[1].file_modified_at)
        );
    }

    #[test]
    fn test_by_project_matches_path_or_dir_name() {
        let directory = sample();

        let by_path: Vec<String> =
            directory.by_project("/b").into_iter().map(|s| s.session_id).collect();
        assert_eq!(by_path, vec!["new"]);

        let by_dir: Vec<String> =
            directory.by_project("-b").into_iter().map(|s| s.session_id).collect();
        assert_eq!(by_dir, vec!["new", "tie2"]);
    }

    #[test]
    fn test_by_date_range() {
        let directory = sample();
        let inside = DateRange::from_dates(NaiveDate::from_ymd_opt(2025, 2, 1), None);
        let outside = DateRange::from_dates(None, NaiveDate::from_ymd_opt(2025, 1, 31));

        assert_eq!(directory.by_date_range(&inside).len(), 4);
        assert!(directory.by_date_range(&outside).is_empty());
    }

    #[test]
    fn test_find_returns_most_recent_duplicate() {
        let directory = SessionDirectory::new(vec![
            session("dup", "-a", "/a", 1),
            session("dup", "-b", "/b", 2),
        ]);
        assert_eq!(directory.find("dup").map(|s| s.project_path.as_str()), Some("/b"));
        assert!(directory.find("missing").is_none());
    }

    #[test]
    fn test_page_with_project_filter() {
        let directory = sample();
        let page = directory.page(1, 1, &SessionFilter::project("-a"));
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].session_id, "tie1");
        assert_eq!(page.pagination.total, 2);
    }
}
