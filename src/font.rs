use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Font slant, as in the CSS `font-style` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
            FontStyle::Oblique => "oblique",
        }
    }
}

/// Font description handed to a [`crate::measure::TextMeasurer`].
///
/// Written and parsed as the shorthand `<weight> <style> <size>px <family>`,
/// e.g. `400 normal 12px Arial`. Weight and style are optional.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub weight: u16,
    pub style: FontStyle,
    pub size_px: f64,
    pub family: String,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            weight: 400,
            style: FontStyle::Normal,
            size_px: 16.0,
            family: "sans-serif".to_string(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum FontSpecError {
    #[error("font spec is empty")]
    Empty,

    #[error("font spec is missing a size like 12px: {0}")]
    MissingSize(String),

    #[error("invalid font size: {0}")]
    InvalidSize(String),

    #[error("invalid font weight: {0}")]
    InvalidWeight(String),

    #[error("font spec is missing a family: {0}")]
    MissingFamily(String),
}

impl FromStr for FontSpec {
    type Err = FontSpecError;

    fn from_str(spec: &str) -> Result<FontSpec, FontSpecError> {
        let tokens: Vec<&str> = spec.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(FontSpecError::Empty);
        }

        let size_idx = tokens
            .iter()
            .position(|t| t.ends_with("px"))
            .ok_or_else(|| FontSpecError::MissingSize(spec.to_string()))?;

        let mut font = FontSpec::default();
        for token in &tokens[..size_idx] {
            match token.to_ascii_lowercase().as_str() {
                "normal" => {}
                "bold" => font.weight = 700,
                "lighter" => font.weight = 300,
                "bolder" => font.weight = 800,
                "italic" => font.style = FontStyle::Italic,
                "oblique" => font.style = FontStyle::Oblique,
                other => {
                    font.weight = other
                        .parse()
                        .map_err(|_| FontSpecError::InvalidWeight(token.to_string()))?
                }
            }
        }

        let size = tokens[size_idx].trim_end_matches("px");
        font.size_px = match size.parse::<f64>() {
            Ok(px) if px.is_finite() && px > 0.0 => px,
            _ => return Err(FontSpecError::InvalidSize(tokens[size_idx].to_string())),
        };

        if size_idx + 1 >= tokens.len() {
            return Err(FontSpecError::MissingFamily(spec.to_string()));
        }
        font.family = tokens[size_idx + 1..].join(" ");

        Ok(font)
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}px {}",
            self.weight,
            self.style.as_str(),
            self.size_px,
            self.family
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_shorthand() {
        let font: FontSpec = "400 normal 12px Arial".parse().unwrap();
        assert_eq!(font.weight, 400);
        assert_eq!(font.style, FontStyle::Normal);
        assert_eq!(font.size_px, 12.0);
        assert_eq!(font.family, "Arial");
    }

    #[test]
    fn parse_size_and_family_only() {
        let font: FontSpec = "14px Helvetica Neue".parse().unwrap();
        assert_eq!(font.weight, 400);
        assert_eq!(font.size_px, 14.0);
        assert_eq!(font.family, "Helvetica Neue");
    }

    #[test]
    fn parse_keywords() {
        let font: FontSpec = "bold italic 10.5px serif".parse().unwrap();
        assert_eq!(font.weight, 700);
        assert_eq!(font.style, FontStyle::Italic);
        assert_eq!(font.size_px, 10.5);
    }

    #[test]
    fn display_round_trips_through_parse() {
        let font: FontSpec = "700 oblique 12px Arial".parse().unwrap();
        assert_eq!(font.to_string(), "700 oblique 12px Arial");
        assert_eq!(font.to_string().parse::<FontSpec>().unwrap(), font);
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<FontSpec>(), Err(FontSpecError::Empty));
        assert!(matches!(
            "400 Arial".parse::<FontSpec>(),
            Err(FontSpecError::MissingSize(_))
        ));
        assert!(matches!(
            "12px".parse::<FontSpec>(),
            Err(FontSpecError::MissingFamily(_))
        ));
        assert!(matches!(
            "-3px Arial".parse::<FontSpec>(),
            Err(FontSpecError::InvalidSize(_))
        ));
    }
}
