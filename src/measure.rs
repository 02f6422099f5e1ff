use crate::font::FontSpec;
use unicode_width::UnicodeWidthStr;

/// Measures the rendered width of a string under a font.
///
/// Implementations must be deterministic for fixed inputs; the line packer
/// measures the same prefixes repeatedly and relies on identical answers.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> f64;
}

/// Terminal cell width via `unicode-width`.
///
/// A terminal renders everything in one fixed-pitch font, so the font is
/// ignored: wide CJK and emoji count as two cells, combining marks as zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasurer;

impl TextMeasurer for CellMeasurer {
    fn measure(&self, text: &str, _font: &FontSpec) -> f64 {
        text.width() as f64
    }
}

/// Approximates a proportional font by giving every terminal cell a fixed
/// fraction of an em.
#[derive(Debug, Clone, Copy)]
pub struct EmAdvanceMeasurer {
    pub em_ratio: f64,
}

impl Default for EmAdvanceMeasurer {
    fn default() -> Self {
        Self { em_ratio: 0.5 }
    }
}

impl TextMeasurer for EmAdvanceMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> f64 {
        text.width() as f64 * font.size_px * self.em_ratio
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, font: &FontSpec) -> f64 {
        (**self).measure(text, font)
    }
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for Box<M> {
    fn measure(&self, text: &str, font: &FontSpec) -> f64 {
        (**self).measure(text, font)
    }
}
