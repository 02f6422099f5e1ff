use super::TruncationResult;

/// Keep the first `length - ellipsis_words + 1` whitespace separated words.
///
/// The ellipsis is split on single spaces, so the default `" more..."`
/// counts as two segments and reserves one word slot.
pub fn shorten_by_words(text: &str, length: usize, ellipsis: &str) -> TruncationResult {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= length {
        return TruncationResult::full(text);
    }

    let reserved = ellipsis.split(' ').count();
    let keep = (length + 1).saturating_sub(reserved);
    TruncationResult::truncated(&words[..keep].join(" "))
}
