use crate::colors::ColorScheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use shorten::controller::{Phase, Shortener};
use std::path::Path;

/// StatusBar widget - budget, measured width and controller state
pub(crate) struct StatusBar<'a> {
    pub(crate) path: &'a Path,
    pub(crate) shortener: &'a Shortener,
    pub(crate) shortened: usize,
    pub(crate) expanded: usize,
    pub(crate) colors: &'a ColorScheme,
}

impl<'a> StatusBar<'a> {
    pub(crate) fn new(
        path: &'a Path,
        shortener: &'a Shortener,
        shortened: usize,
        expanded: usize,
        colors: &'a ColorScheme,
    ) -> Self {
        Self {
            path,
            shortener,
            shortened,
            expanded,
            colors,
        }
    }

    fn phase_label(&self) -> (&'static str, Color) {
        match self.shortener.phase() {
            Phase::Uninitialized => ("empty", self.colors.pending()),
            Phase::Measuring => ("measuring", self.colors.pending()),
            Phase::Truncated => ("truncated", self.colors.truncated()),
            Phase::Full => ("full", self.colors.full()),
            Phase::Expanded => ("expanded", self.colors.expanded()),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let options = self.shortener.options();
        let width = self
            .shortener
            .available_width()
            .map(|w| w.to_string())
            .unwrap_or_else(|| "?".to_string());
        let (label, color) = self.phase_label();

        let items = vec![
            Span::raw(format!("{} {}", options.length, options.mode)),
            Span::raw("  width:"),
            Span::raw(width),
            Span::raw("  "),
            Span::styled(label, Style::default().fg(color)),
            Span::raw(format!(
                "  shortened:{}  expanded:{}",
                self.shortened, self.expanded
            )),
        ];

        let title = format!("shorten: {}", self.path.display());
        let paragraph = Paragraph::new(Line::from(items))
            .block(Block::default().borders(Borders::ALL).title(title))
            .wrap(Wrap { trim: true });
        paragraph.render(area, buf);
    }
}
