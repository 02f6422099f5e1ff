use crate::colors::ColorScheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use shorten::controller::{Phase, Shortener};

/// TextPanel widget - the shortened text with its expand marker
pub(crate) struct TextPanel<'a> {
    shortener: &'a Shortener,
    colors: &'a ColorScheme,
}

impl<'a> TextPanel<'a> {
    pub(crate) fn new(shortener: &'a Shortener, colors: &'a ColorScheme) -> Self {
        Self { shortener, colors }
    }

    fn content(&self) -> Line<'a> {
        let Some(result) = self.shortener.result() else {
            let placeholder = match self.shortener.phase() {
                Phase::Measuring => "(measuring...)",
                _ => "(empty)",
            };
            return Line::from(Span::styled(
                placeholder,
                Style::default().fg(self.colors.pending()),
            ));
        };

        let mut spans = vec![Span::raw(result.display_text.as_str())];
        if result.was_truncated {
            spans.push(Span::styled(
                self.shortener.options().ellipsis.as_str(),
                Style::default()
                    .fg(self.colors.ellipsis())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for TextPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(self.content())
            .block(Block::default().borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        paragraph.render(area, buf);
    }
}
