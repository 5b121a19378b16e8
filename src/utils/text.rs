/// Returns the prefix of `text` holding at most `max_chars` characters.
///
/// Cuts on a char boundary, so multi-byte text never panics.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
