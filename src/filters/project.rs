use crate::models::SessionRecord;

/// Project-match predicate.
///
/// Matches on exact `projectPath` equality or on the catalog directory name
/// holding the log, since heuristic path recovery can disagree between
/// sessions of the same project while the directory name never does.
pub fn matches_project(session: &SessionRecord, project: &str) -> bool {
    session.project_path == project || session.catalog_dir_name() == Some(project)
}
