use rayon::prelude::*;
use tracing::debug;

use super::highlight::{LoweredText, fold_case};
use crate::cache::SourceReader;
use crate::config::DEFAULT_SEARCH_LIMIT;
use crate::directory::SessionDirectory;
use crate::filters::matches_project;
use crate::models::{MatchedMessage, Message, MessageKind, SearchHit, SessionRecord};
use crate::utils::truncate_chars;

/// Matched-message entries kept per hit
pub const MAX_MATCHED_MESSAGES: usize = 5;

/// Characters of message content carried in each matched entry
pub const CONTENT_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Restrict candidates to one project (path or catalog directory name)
    pub project_path: Option<String>,
    pub limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { project_path: None, limit: DEFAULT_SEARCH_LIMIT }
    }
}

/// Split a query on whitespace into case-folded terms.
///
/// Repeated terms are kept once, in first-seen order, so `"bug bug"` scores
/// exactly like `"bug"`.
pub fn tokenize(query: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::new();
    for term in query.split_whitespace().map(fold_case) {
        if !terms.contains(&term) {
            terms.push(term);
        }
    }
    terms
}

/// Weight a matched term adds for a message of this kind
pub fn type_weight(kind: &MessageKind) -> u64 {
    match kind {
        MessageKind::User => 3,
        MessageKind::Assistant => 2,
        _ => 1,
    }
}

/// Score one session's messages against already tokenized `terms`.
///
/// Every (message, term) match adds the message's type weight and yields a
/// matched entry. Entries stop being collected after
/// [`MAX_MATCHED_MESSAGES`] in message order; the score keeps counting.
/// Returns `None` when nothing matched.
pub fn score_session(
    session: &SessionRecord,
    messages: &[Message],
    terms: &[String],
) -> Option<SearchHit> {
    let mut score = 0;
    let mut matched_messages = Vec::new();

    for (index, message) in messages.iter().enumerate() {
        let content = message.text();
        if content.is_empty() {
            continue;
        }
        let text = LoweredText::new(content);
        let weight = type_weight(&message.kind);

        for term in terms {
            if !text.contains(term) {
                continue;
            }
            score += weight;

            if matched_messages.len() < MAX_MATCHED_MESSAGES
                && let Some(highlight_snippet) = text.highlight(term)
            {
                matched_messages.push(MatchedMessage {
                    message_index: index,
                    truncated_content: truncate_chars(content, CONTENT_PREVIEW_CHARS).to_string(),
                    highlight_snippet,
                });
            }
        }
    }

    if score == 0 {
        return None;
    }

    Some(SearchHit {
        session_id: session.session_id.clone(),
        project_path: session.project_path.clone(),
        first_prompt: session.first_prompt.clone(),
        matched_messages,
        score,
    })
}

/// Term search over the sessions of a [`SessionDirectory`].
///
/// Sessions are scored in parallel; each one's messages come through the
/// [`SourceReader`], so unreadable logs simply contribute nothing.
pub struct SearchEngine<'a> {
    directory: &'a SessionDirectory,
    reader: &'a SourceReader,
}

impl<'a> SearchEngine<'a> {
    pub fn new(directory: &'a SessionDirectory, reader: &'a SourceReader) -> Self {
        Self { directory, reader }
    }

    /// Hits ordered by descending score, ties in catalog order, at most
    /// `options.limit` of them
    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<SearchHit> {
        let terms = tokenize(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let candidates: Vec<&SessionRecord> = self
            .directory
            .sessions()
            .iter()
            .filter(|session| {
                options.project_path.as_deref().is_none_or(|project| matches_project(session, project))
            })
            .collect();

        let mut hits: Vec<SearchHit> = candidates
            .par_iter()
            .filter_map(|session| {
                let messages = self.reader.messages(&session.log_path);
                score_session(session, &messages, &terms)
            })
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(options.limit);

        debug!(
            "Search {:?}: {} candidates, {} hits returned",
            terms,
            candidates.len(),
            hits.len()
        );
        hits
    }
}
