//! Truncation engine.
//!
//! Pure functions from a [`TruncationRequest`] to a [`TruncationResult`].
//! The ellipsis is never part of the returned text: it is reserved in the
//! budget and left to the presentation layer to render.

mod characters;
mod lines;
mod words;

use crate::font::FontSpec;
use crate::measure::TextMeasurer;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

pub use characters::shorten_by_characters;
pub use lines::{pack_lines, shorten_by_lines, PackedLines};
pub use words::shorten_by_words;

/// Ellipsis used when none is configured
pub const DEFAULT_ELLIPSIS: &str = " more...";

/// Budget used when none is configured
pub const DEFAULT_LENGTH: usize = 3;

/// Unit of the truncation budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    Characters,
    Words,
    #[default]
    Lines,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Characters => "characters",
            Mode::Words => "words",
            Mode::Lines => "lines",
        }
    }

    /// Only lines mode depends on the container width
    pub fn depends_on_width(&self) -> bool {
        matches!(self, Mode::Lines)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown truncation mode '{0}' (expected lines, words or characters)")]
pub struct ParseModeError(String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Mode, ParseModeError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" | "line" => Ok(Mode::Lines),
            "words" | "word" => Ok(Mode::Words),
            "characters" | "chars" | "character" => Ok(Mode::Characters),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Clamp a caller supplied budget to the non-negative range.
pub fn clamp_length(length: i64) -> usize {
    if length < 0 {
        warn!(length, "negative length clamped to 0");
        return 0;
    }
    usize::try_from(length).unwrap_or(usize::MAX)
}

/// Everything the engine needs for one run
#[derive(Debug, Clone, Copy)]
pub struct TruncationRequest<'a> {
    pub full_text: &'a str,
    pub mode: Mode,
    pub length: usize,
    pub ellipsis: &'a str,
    /// Only meaningful in lines mode
    pub available_width: Option<u32>,
    /// Only meaningful in lines mode
    pub font: &'a FontSpec,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruncationResult {
    pub display_text: String,
    pub was_truncated: bool,
}

impl TruncationResult {
    /// The text fits: shown exactly as given
    pub fn full(text: &str) -> Self {
        Self {
            display_text: text.to_string(),
            was_truncated: false,
        }
    }

    pub fn truncated(text: &str) -> Self {
        Self {
            display_text: text.to_string(),
            was_truncated: true,
        }
    }
}

/// Run the algorithm selected by `request.mode`.
///
/// Returns `None` when lines mode has no available width yet; callers defer
/// and retry once the width is known.
pub fn truncate(
    request: &TruncationRequest<'_>,
    measurer: &dyn TextMeasurer,
) -> Option<TruncationResult> {
    let TruncationRequest {
        full_text,
        mode,
        length,
        ellipsis,
        available_width,
        font,
    } = *request;

    let result = match mode {
        Mode::Characters => shorten_by_characters(full_text, length, ellipsis),
        Mode::Words => shorten_by_words(full_text, length, ellipsis),
        Mode::Lines => {
            shorten_by_lines(full_text, length, ellipsis, available_width?, font, measurer)
        }
    };
    Some(result)
}


#[cfg(test)]
mod tests {
    use super::test_support::{PerChar, LOREM, LOREM_SMALL};
    use super::*;

    fn request<'a>(
        text: &'a str,
        mode: Mode,
        length: usize,
        width: Option<u32>,
        font: &'a FontSpec,
    ) -> TruncationRequest<'a> {
        TruncationRequest {
            full_text: text,
            mode,
            length,
            ellipsis: DEFAULT_ELLIPSIS,
            available_width: width,
            font,
        }
    }

    #[test]
    fn parse_mode() {
        assert_eq!("lines".parse::<Mode>(), Ok(Mode::Lines));
        assert_eq!("Words".parse::<Mode>(), Ok(Mode::Words));
        assert_eq!("chars".parse::<Mode>(), Ok(Mode::Characters));
        assert!("pages".parse::<Mode>().is_err());
        assert_eq!(Mode::Characters.to_string(), "characters");
    }

    #[test]
    fn clamp_length_rejects_negatives() {
        assert_eq!(clamp_length(-4), 0);
        assert_eq!(clamp_length(0), 0);
        assert_eq!(clamp_length(12), 12);
    }

    #[test]
    fn lines_mode_defers_without_width() {
        let font = FontSpec::default();
        let req = request(LOREM, Mode::Lines, 3, None, &font);
        assert_eq!(truncate(&req, &PerChar(1.0)), None);
    }

    #[test]
    fn width_only_matters_for_lines_mode() {
        let font = FontSpec::default();
        let req = request(LOREM, Mode::Words, 10, None, &font);
        let result = truncate(&req, &PerChar(1.0)).unwrap();
        assert!(result.was_truncated);
    }

    #[test]
    fn engine_is_idempotent() {
        let font = FontSpec::default();
        for mode in [Mode::Characters, Mode::Words, Mode::Lines] {
            let req = request(LOREM, mode, 3, Some(60), &font);
            assert_eq!(
                truncate(&req, &PerChar(1.0)),
                truncate(&req, &PerChar(1.0))
            );
        }
    }

    #[test]
    fn fitting_text_is_returned_verbatim_in_every_mode() {
        let font = FontSpec::default();
        let cases = [
            (Mode::Characters, 100),
            (Mode::Words, 10),
            (Mode::Lines, 3),
        ];
        for (mode, length) in cases {
            let req = request(LOREM_SMALL, mode, length, Some(1000), &font);
            let result = truncate(&req, &PerChar(5.5)).unwrap();
            assert_eq!(result, TruncationResult::full(LOREM_SMALL), "{mode}");
        }
    }

    #[test]
    fn zero_length_truncates_non_empty_text_in_every_mode() {
        let font = FontSpec::default();
        for mode in [Mode::Characters, Mode::Words, Mode::Lines] {
            let req = request(LOREM_SMALL, mode, 0, Some(1000), &font);
            let result = truncate(&req, &PerChar(1.0)).unwrap();
            assert!(result.was_truncated, "{mode}");
            assert_eq!(result.display_text, "", "{mode}");
        }
    }
}
