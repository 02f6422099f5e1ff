use super::TruncationResult;

/// Keep the first `length - len(ellipsis)` characters.
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn shorten_by_characters(text: &str, length: usize, ellipsis: &str) -> TruncationResult {
    if text.chars().count() <= length {
        return TruncationResult::full(text);
    }

    let keep = length.saturating_sub(ellipsis.chars().count());
    let end = text
        .char_indices()
        .nth(keep)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    TruncationResult::truncated(&text[..end])
}
