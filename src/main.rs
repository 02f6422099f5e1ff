mod cli;
mod colors;
mod config;
mod terminal;
mod view;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{By, Cli};
use colors::ColorScheme;
use crossterm::tty::IsTty;
use shorten::controller::{DisplaySurface, ShortenOptions, Shortener};
use shorten::events::EventHub;
use shorten::font::FontSpec;
use shorten::measure::{CellMeasurer, EmAdvanceMeasurer, TextMeasurer};
use shorten::truncate::{clamp_length, Mode, DEFAULT_ELLIPSIS, DEFAULT_LENGTH};
use shorten::width::{FixedWidth, WidthProvider};
use std::io::{self, stdout, Read};
use std::path::Path;
use terminal::TerminalWidth;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Effective settings: flags over config file over built-in defaults
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) options: ShortenOptions,
    /// Set when measuring in pixels
    pub(crate) font: Option<FontSpec>,
    pub(crate) width: Option<f64>,
    pub(crate) headless: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: config::Config) -> Result<Self> {
        let mode = match cli.by {
            Some(By::Lines) => Mode::Lines,
            Some(By::Words) => Mode::Words,
            Some(By::Characters) => Mode::Characters,
            None => config.by.unwrap_or_default(),
        };
        let length = cli
            .length
            .map(clamp_length)
            .or(config.length)
            .unwrap_or(DEFAULT_LENGTH);
        let ellipsis = cli
            .ellipsis
            .clone()
            .or(config.ellipsis)
            .unwrap_or_else(|| DEFAULT_ELLIPSIS.to_string());
        let font = match &cli.font {
            Some(spec) => Some(
                spec.parse::<FontSpec>()
                    .with_context(|| format!("Invalid --font: {}", spec))?,
            ),
            None => config.font,
        };

        Ok(Self {
            options: ShortenOptions {
                mode,
                length,
                ellipsis,
            },
            font,
            width: cli.width,
            headless: cli.headless,
        })
    }

    /// Width of one terminal column in measurement units
    pub(crate) fn column_scale(&self) -> f64 {
        match &self.font {
            Some(font) => EmAdvanceMeasurer::default().measure(" ", font),
            None => 1.0,
        }
    }

    /// Build a controller measuring against `width`
    pub(crate) fn shortener(&self, width: Box<dyn WidthProvider>) -> Shortener {
        if self.headless {
            return Shortener::headless(self.options.clone());
        }
        let (measurer, font): (Box<dyn TextMeasurer>, FontSpec) = match &self.font {
            Some(font) => (Box::new(EmAdvanceMeasurer::default()), font.clone()),
            None => (Box::new(CellMeasurer), FontSpec::default()),
        };
        Shortener::new(
            self.options.clone(),
            DisplaySurface::new(measurer, width, font),
        )
    }
}

/// Render the controller state as plain text: the shortened text followed by
/// the ellipsis, or the full text when nothing was cut.
pub(crate) fn render_plain(shortener: &Shortener, colors: Option<&ColorScheme>) -> String {
    match shortener.result() {
        Some(result) if result.was_truncated => {
            let ellipsis = &shortener.options().ellipsis;
            let ellipsis = match colors {
                Some(colors) => colors.ansi_cyan(ellipsis),
                None => ellipsis.clone(),
            };
            format!("{}{}", result.display_text, ellipsis)
        }
        Some(result) => result.display_text.clone(),
        None => shortener.text().to_string(),
    }
}

/// Read the text to shorten, dropping the trailing line ending
pub(crate) fn read_text(file: Option<&Path>) -> Result<String> {
    let mut text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    let trimmed = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(trimmed);
    Ok(text)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("SHORTEN_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("shorten=warn"));

    fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = config::load()?;
    let settings = Settings::resolve(&cli, config)?;
    debug!(?settings, "resolved settings");

    if cli.watch {
        let path = cli.file.as_deref().context("--watch requires a FILE")?;
        return view::run(path, &settings);
    }

    let text = read_text(cli.file.as_deref())?;
    let is_tty = stdout().is_tty();

    let width: Box<dyn WidthProvider> = match settings.width {
        Some(width) => Box::new(FixedWidth(Some(width))),
        None if is_tty => Box::new(TerminalWidth::new(0, settings.column_scale())),
        None => Box::new(FixedWidth(None)),
    };

    let mut hub = EventHub::new();
    let mut shortener = settings.shortener(width);
    shortener.attach(text, &mut hub);
    if shortener.result().is_none() && !shortener.text().is_empty() {
        warn!("no width available; printing the full text");
    }

    let colors = ColorScheme::from_env();
    let rendered = render_plain(&shortener, is_tty.then_some(&colors));
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    shortener.detach(&mut hub);

    Ok(())
}
