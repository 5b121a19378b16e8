use super::date_range::DateRange;
use super::project::matches_project;
use crate::models::SessionRecord;

/// Catalog filter: optional project plus optional date range, AND'd together
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    pub project: Option<String>,
    pub date_range: DateRange,
}

impl SessionFilter {
    pub fn project(project: impl Into<String>) -> Self {
        Self { project: Some(project.into()), date_range: DateRange::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.project.is_none() && self.date_range.is_unbounded()
    }

    pub fn matches(&self, session: &SessionRecord) -> bool {
        self.project.as_deref().is_none_or(|project| matches_project(session, project))
            && self.date_range.contains(session)
    }
}

/// Apply a filter, keeping catalog order
pub fn apply_filters<'a, I>(sessions: I, filter: &SessionFilter) -> Vec<SessionRecord>
where
    I: IntoIterator<Item = &'a SessionRecord>,
{
    sessions.into_iter().filter(|session| filter.matches(session)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use chrono::NaiveDate;

    use super::*;

    fn session(id: &str, project_path: &str, modified_at: &str) -> SessionRecord {
        SessionRecord {
            session_id: id.to_string(),
            log_path: PathBuf::from(format!("/c/projects/-dir/{}.jsonl", id)),
            file_modified_at: 0,
            first_prompt: String::new(),
            message_count: 0,
            created_at: String::new(),
            modified_at: modified_at.to_string(),
            git_branch: String::new(),
            project_path: project_path.to_string(),
            is_sidechain: false,
        }
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let sessions = vec![session("a", "/x", ""), session("b", "/y", "")];
        let filter = SessionFilter::default();
        assert!(filter.is_empty());
        assert_eq!(apply_filters(&sessions, &filter).len(), 2);
    }

    #[test]
    fn test_project_and_date_are_combined() {
        let sessions = vec![
            session("a", "/x", "2025-01-05T00:00:00Z"),
            session("b", "/x", "2024-06-01T00:00:00Z"),
            session("c", "/y", "2025-01-05T00:00:00Z"),
        ];
        let filter = SessionFilter {
            project: Some("/x".to_string()),
            date_range: DateRange::from_dates(NaiveDate::from_ymd_opt(2025, 1, 1), None),
        };

        let kept = apply_filters(&sessions, &filter);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].session_id, "a");
    }

    #[test]
    fn test_filter_preserves_order() {
        let sessions = vec![session("c", "/x", ""), session("a", "/x", ""), session("b", "/x", "")];
        let kept = apply_filters(&sessions, &SessionFilter::project("/x"));
        let ids: Vec<&str> = kept.iter().map(|s| s.session_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
