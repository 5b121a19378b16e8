/// Characters of surrounding context on each side of a match
pub const CONTEXT_CHARS: usize = 30;

const ELLIPSIS: &str = "...";

/// Lowercase `text` one char at a time, the same folding used for both
/// content and query terms.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Message content with a case-folded shadow copy.
///
/// Folding can change byte and char lengths (`İ` lowers to two chars), so
/// every byte of the folded text remembers which source char produced it.
/// Matches are found in the folded text and cut from the original.
#[derive(Debug)]
pub struct LoweredText<'a> {
    original: &'a str,
    lowered: String,
    origin: Vec<usize>,
    char_count: usize,
}

impl<'a> LoweredText<'a> {
    pub fn new(original: &'a str) -> Self {
        let mut lowered = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len());
        let mut char_count = 0;

        for (index, c) in original.chars().enumerate() {
            for folded in c.to_lowercase() {
                lowered.push(folded);
                origin.extend(std::iter::repeat_n(index, folded.len_utf8()));
            }
            char_count = index + 1;
        }

        Self { original, lowered, origin, char_count }
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    /// `term` must already be folded with [`fold_case`]
    pub fn contains(&self, term: &str) -> bool {
        !term.is_empty() && self.lowered.contains(term)
    }

    /// Snippet around the first occurrence of `term`, with [`CONTEXT_CHARS`]
    /// of context per side and `...` on each side that was cut.
    pub fn highlight(&self, term: &str) -> Option<String> {
        if term.is_empty() {
            return None;
        }
        let at = self.lowered.find(term)?;
        let first = self.origin[at];
        let last = self.origin[at + term.len() - 1];

        let start = first.saturating_sub(CONTEXT_CHARS);
        let end = (last + 1 + CONTEXT_CHARS).min(self.char_count);

        let mut snippet = String::with_capacity(end - start + 2 * ELLIPSIS.len());
        if start > 0 {
            snippet.push_str(ELLIPSIS);
        }
        snippet.extend(self.original.chars().skip(start).take(end - start));
        if end < self.char_count {
            snippet.push_str(ELLIPSIS);
        }
        Some(snippet)
    }
}
