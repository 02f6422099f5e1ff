use crossterm::terminal;
use shorten::width::WidthProvider;

/// Container width derived from the terminal size.
///
/// `inset` columns are taken off for borders; `scale` converts columns into
/// the measurer's units (1.0 for cells).
#[derive(Debug, Clone, Copy)]
pub struct TerminalWidth {
    inset: u16,
    scale: f64,
}

impl TerminalWidth {
    pub fn new(inset: u16, scale: f64) -> Self {
        Self { inset, scale }
    }

    fn columns_to_width(&self, columns: u16) -> Option<f64> {
        let usable = columns.saturating_sub(self.inset);
        if usable == 0 {
            return None;
        }
        Some(f64::from(usable) * self.scale)
    }
}

impl WidthProvider for TerminalWidth {
    fn container_width(&self) -> Option<f64> {
        let (columns, _rows) = terminal::size().ok()?;
        self.columns_to_width(columns)
    }
}
