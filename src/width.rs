use tracing::debug;

/// Reports the layout width of the container hosting the text.
///
/// `None` means the container is not attached to a display surface yet.
pub trait WidthProvider {
    fn container_width(&self) -> Option<f64>;
}

/// A width known up front, e.g. from `--width`
#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub Option<f64>);

impl WidthProvider for FixedWidth {
    fn container_width(&self) -> Option<f64> {
        self.0
    }
}

impl<W: WidthProvider + ?Sized> WidthProvider for Box<W> {
    fn container_width(&self) -> Option<f64> {
        (**self).container_width()
    }
}

/// Tracks the available width for one line of text.
///
/// The width is never cached across events: every [`WidthTracker::refresh`]
/// re-queries the provider.
pub struct WidthTracker {
    provider: Box<dyn WidthProvider>,
    available: Option<u32>,
}

impl WidthTracker {
    pub fn new(provider: Box<dyn WidthProvider>) -> Self {
        Self {
            provider,
            available: None,
        }
    }

    /// Re-query the provider and return the floored width.
    ///
    /// Zero, negative and non-finite widths count as "no width yet".
    pub fn refresh(&mut self) -> Option<u32> {
        self.available = self
            .provider
            .container_width()
            .filter(|w| w.is_finite())
            .map(|w| w.floor())
            .filter(|w| *w >= 1.0)
            .map(|w| w.min(u32::MAX as f64) as u32);
        debug!(available = ?self.available, "container width refreshed");
        self.available
    }

    /// Width from the most recent refresh
    pub fn available(&self) -> Option<u32> {
        self.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct SharedWidth(Rc<Cell<Option<f64>>>);

    impl WidthProvider for SharedWidth {
        fn container_width(&self) -> Option<f64> {
            self.0.get()
        }
    }

    #[test]
    fn refresh_floors_the_width() {
        let mut tracker = WidthTracker::new(Box::new(FixedWidth(Some(299.7))));
        assert_eq!(tracker.available(), None);
        assert_eq!(tracker.refresh(), Some(299));
        assert_eq!(tracker.available(), Some(299));
    }

    #[test]
    fn missing_or_zero_width_is_unavailable() {
        let mut tracker = WidthTracker::new(Box::new(FixedWidth(None)));
        assert_eq!(tracker.refresh(), None);

        let mut tracker = WidthTracker::new(Box::new(FixedWidth(Some(0.4))));
        assert_eq!(tracker.refresh(), None);

        let mut tracker = WidthTracker::new(Box::new(FixedWidth(Some(f64::NAN))));
        assert_eq!(tracker.refresh(), None);
    }

    #[test]
    fn refresh_requeries_the_provider() {
        let width = Rc::new(Cell::new(Some(300.0)));
        let mut tracker = WidthTracker::new(Box::new(SharedWidth(width.clone())));
        assert_eq!(tracker.refresh(), Some(300));

        width.set(Some(200.0));
        assert_eq!(tracker.available(), Some(300));
        assert_eq!(tracker.refresh(), Some(200));

        width.set(None);
        assert_eq!(tracker.refresh(), None);
    }
}
