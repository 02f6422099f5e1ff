use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// HelpBar widget - displays keyboard shortcuts
pub(crate) struct HelpBar;

impl Widget for HelpBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_text = vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":expand  "),
            Span::styled("r", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":reload  "),
            Span::styled("q", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(":quit"),
        ];

        let paragraph = Paragraph::new(Line::from(help_text))
            .block(Block::default().borders(Borders::ALL).title("Help"));
        paragraph.render(area, buf);
    }
}
