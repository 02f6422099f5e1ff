//! Truncate text to a budget of lines, words or characters, with an expand
//! action that restores the full text.
//!
//! The [`truncate`] module holds the pure algorithms. [`controller::Shortener`]
//! decides when they run: on attach, when the text changes and, in lines
//! mode, whenever the container width changes.

pub mod controller;
pub mod events;
pub mod font;
pub mod measure;
pub mod truncate;
pub mod width;

pub use controller::{DisplaySurface, Phase, ShortenOptions, Shortener};
pub use events::{EventHub, EventSource, Interest, ShortenEvent};
pub use font::FontSpec;
pub use measure::{CellMeasurer, EmAdvanceMeasurer, TextMeasurer};
pub use truncate::{Mode, TruncationRequest, TruncationResult};
pub use width::{FixedWidth, WidthProvider, WidthTracker};
