use super::TruncationResult;
use crate::font::FontSpec;
use crate::measure::TextMeasurer;
use std::collections::VecDeque;
use tracing::trace;

/// Outcome of greedily packing words into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedLines {
    /// Text of each filled line, words joined by single spaces
    pub lines: Vec<String>,
    /// Words that did not fit in any line
    pub leftover: usize,
}

/// Greedy word wrap into at most `length` lines of `available_width`.
///
/// Each word is appended to the current line and the line is measured; on
/// overflow the word goes back to the front of the queue and the next line
/// starts. The ellipsis is measured as part of the last line only. The first
/// word of a line is always kept, even when it alone overflows, so every
/// line consumes at least one word while any remain.
pub fn pack_lines(
    text: &str,
    length: usize,
    ellipsis: &str,
    available_width: u32,
    font: &FontSpec,
    measurer: &dyn TextMeasurer,
) -> PackedLines {
    let mut queue: VecDeque<&str> = text.split_whitespace().collect();
    let limit = f64::from(available_width);
    let mut lines = Vec::new();

    for line in 0..length {
        if queue.is_empty() {
            break;
        }
        let is_last = line + 1 == length;
        let mut packed: Vec<&str> = Vec::new();

        while let Some(word) = queue.pop_front() {
            packed.push(word);

            let mut candidate = packed.join(" ");
            if is_last {
                candidate.push_str(ellipsis);
            }

            if packed.len() > 1 && measurer.measure(&candidate, font) > limit {
                packed.pop();
                queue.push_front(word);
                break;
            }
        }

        trace!(line, words = packed.len(), remaining = queue.len(), "packed line");
        lines.push(packed.join(" "));
    }

    PackedLines {
        lines,
        leftover: queue.len(),
    }
}

/// Truncate `text` to `length` lines of `available_width`.
///
/// When every word fits the original text is returned as is; otherwise the
/// packed lines are joined by single spaces, so runs of whitespace collapse.
pub fn shorten_by_lines(
    text: &str,
    length: usize,
    ellipsis: &str,
    available_width: u32,
    font: &FontSpec,
    measurer: &dyn TextMeasurer,
) -> TruncationResult {
    let packed = pack_lines(text, length, ellipsis, available_width, font, measurer);
    if packed.leftover == 0 {
        return TruncationResult::full(text);
    }
    TruncationResult::truncated(packed.lines.join(" ").trim())
}
