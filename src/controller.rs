//! Recompute controller.
//!
//! A [`Shortener`] is bound to one block of text. It decides when the engine
//! runs (attach, content change, width change), keeps the latest
//! [`TruncationResult`] and owns the expand-to-full transition.

use crate::events::{EventSource, Interest, ShortenEvent, Subscription};
use crate::font::FontSpec;
use crate::measure::TextMeasurer;
use crate::truncate::{
    truncate, Mode, TruncationRequest, TruncationResult, DEFAULT_ELLIPSIS, DEFAULT_LENGTH,
};
use crate::width::{WidthProvider, WidthTracker};
use tracing::{debug, warn};

pub type Callback = Box<dyn FnMut()>;

/// Budget and ellipsis for one text block
#[derive(Debug, Clone, PartialEq)]
pub struct ShortenOptions {
    pub mode: Mode,
    pub length: usize,
    pub ellipsis: String,
}

impl Default for ShortenOptions {
    fn default() -> Self {
        Self {
            mode: Mode::Lines,
            length: DEFAULT_LENGTH,
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

/// The measuring side of a display: how wide text renders and how wide the
/// container is.
pub struct DisplaySurface {
    measurer: Box<dyn TextMeasurer>,
    width: WidthTracker,
    font: FontSpec,
}

impl DisplaySurface {
    pub fn new(
        measurer: Box<dyn TextMeasurer>,
        width: Box<dyn WidthProvider>,
        font: FontSpec,
    ) -> Self {
        Self {
            measurer,
            width: WidthTracker::new(width),
            font,
        }
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn available_width(&self) -> Option<u32> {
        self.width.available()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing to render yet
    Uninitialized,
    /// Lines mode is waiting for a usable container width
    Measuring,
    Truncated,
    Full,
    /// The user expanded the text; width changes are ignored
    Expanded,
}

pub struct Shortener {
    options: ShortenOptions,
    surface: Option<DisplaySurface>,
    text: String,
    result: Option<TruncationResult>,
    phase: Phase,
    subscription: Option<Subscription>,
    /// Text whose truncation was already announced (width independent modes)
    announced: Option<String>,
    on_shorten: Option<Callback>,
    on_expand: Option<Callback>,
}

impl Shortener {
    pub fn new(options: ShortenOptions, surface: DisplaySurface) -> Self {
        Self::build(options, Some(surface))
    }

    /// A controller without a display surface.
    ///
    /// Nothing can be measured, so the full text is shown in every mode.
    pub fn headless(options: ShortenOptions) -> Self {
        Self::build(options, None)
    }

    fn build(options: ShortenOptions, surface: Option<DisplaySurface>) -> Self {
        Self {
            options,
            surface,
            text: String::new(),
            result: None,
            phase: Phase::Uninitialized,
            subscription: None,
            announced: None,
            on_shorten: None,
            on_expand: None,
        }
    }

    /// Called whenever a recompute ends up truncated
    pub fn on_shorten(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_shorten = Some(Box::new(callback));
        self
    }

    /// Called once per expand action
    pub fn on_expand(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_expand = Some(Box::new(callback));
        self
    }

    pub fn options(&self) -> &ShortenOptions {
        &self.options
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Latest result; `None` while there is nothing to render
    pub fn result(&self) -> Option<&TruncationResult> {
        self.result.as_ref()
    }

    pub fn is_expanded(&self) -> bool {
        self.phase == Phase::Expanded
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn available_width(&self) -> Option<u32> {
        self.surface.as_ref().and_then(|s| s.available_width())
    }

    /// Bind `text` and register for recompute triggers.
    ///
    /// Lines mode also listens for resizes and measures the initial width
    /// before the first truncation.
    pub fn attach(&mut self, text: impl Into<String>, source: &mut dyn EventSource) {
        if let Some(old) = self.subscription.take() {
            source.unsubscribe(old.id());
        }

        let interests: &[Interest] = if self.listens_for_resize() {
            &[Interest::Content, Interest::Resize]
        } else {
            &[Interest::Content]
        };
        self.subscription = Some(source.subscribe(interests));

        self.text = text.into();
        self.result = None;
        self.announced = None;
        self.phase = Phase::Uninitialized;

        if self.listens_for_resize() && !self.text.is_empty() {
            self.phase = Phase::Measuring;
            if let Some(surface) = self.surface.as_mut() {
                surface.width.refresh();
            }
        }
        self.recompute();
    }

    /// Deregister from `source`; pending events are discarded.
    pub fn detach(&mut self, source: &mut dyn EventSource) {
        if let Some(subscription) = self.subscription.take() {
            source.unsubscribe(subscription.id());
            debug!("detached");
        }
    }

    /// Process every pending event in arrival order.
    ///
    /// Returns how many events were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let Some(event) = self.subscription.as_ref().and_then(Subscription::try_next) else {
                break;
            };
            self.handle(event);
            handled += 1;
        }
        handled
    }

    pub fn handle(&mut self, event: ShortenEvent) {
        match event {
            ShortenEvent::Resize => self.resize(),
            ShortenEvent::ContentChanged(text) => self.set_text(text),
        }
    }

    /// Replace the text. An unchanged text is ignored; a changed one always
    /// re-evaluates, discarding an expand.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text && self.phase != Phase::Uninitialized {
            return;
        }
        self.text = text;
        if self.phase == Phase::Expanded || self.phase == Phase::Uninitialized {
            self.phase = if self.listens_for_resize() {
                Phase::Measuring
            } else {
                Phase::Uninitialized
            };
        }
        if self.listens_for_resize() {
            // A result belongs to the text it was computed for
            self.result = None;
            if self.available_width().is_none() {
                if let Some(surface) = self.surface.as_mut() {
                    surface.width.refresh();
                }
            }
        }
        self.recompute();
    }

    /// The container may have changed size: re-measure and re-run.
    pub fn resize(&mut self) {
        if !self.listens_for_resize() {
            return;
        }
        if self.phase == Phase::Expanded {
            debug!("resize ignored while expanded");
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.width.refresh();
        }
        self.recompute();
    }

    /// Show the full text. Only a truncated text can be expanded; returns
    /// whether the expand happened.
    pub fn expand(&mut self) -> bool {
        if self.phase != Phase::Truncated {
            return false;
        }
        self.result = Some(TruncationResult::full(&self.text));
        self.phase = Phase::Expanded;
        debug!("expanded");
        if let Some(callback) = self.on_expand.as_mut() {
            callback();
        }
        true
    }

    fn listens_for_resize(&self) -> bool {
        self.options.mode.depends_on_width() && self.surface.is_some()
    }

    fn recompute(&mut self) {
        if self.text.is_empty() {
            self.result = None;
            self.phase = Phase::Uninitialized;
            return;
        }

        let Some(surface) = self.surface.as_ref() else {
            self.result = Some(TruncationResult::full(&self.text));
            self.phase = Phase::Full;
            return;
        };

        let request = TruncationRequest {
            full_text: &self.text,
            mode: self.options.mode,
            length: self.options.length,
            ellipsis: &self.options.ellipsis,
            available_width: surface.available_width(),
            font: &surface.font,
        };

        let Some(result) = truncate(&request, surface.measurer.as_ref()) else {
            warn!("no container width yet, truncation deferred");
            if self.result.is_none() {
                self.phase = Phase::Measuring;
            }
            return;
        };

        debug!(
            mode = %self.options.mode,
            length = self.options.length,
            width = ?request.available_width,
            truncated = result.was_truncated,
            "recomputed"
        );

        self.phase = if result.was_truncated {
            Phase::Truncated
        } else {
            Phase::Full
        };
        let truncated = result.was_truncated;
        self.result = Some(result);

        if truncated {
            self.announce();
        }
    }

    fn announce(&mut self) {
        if !self.options.mode.depends_on_width() {
            if self.announced.as_deref() == Some(self.text.as_str()) {
                return;
            }
            self.announced = Some(self.text.clone());
        }
        if let Some(callback) = self.on_shorten.as_mut() {
            callback();
        }
    }
}
