use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Truncation unit as accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum By {
    Lines,
    Words,
    Characters,
}

#[derive(Parser, Debug)]
#[command(
    name = "shorten",
    about = "Shorten text to a number of lines, words or characters",
    version
)]
pub struct Cli {
    /// File to shorten (default: stdin)
    #[arg()]
    pub file: Option<PathBuf>,

    /// Truncation unit [default: lines]
    #[arg(short, long, value_enum)]
    pub by: Option<By>,

    /// Budget in the chosen unit; negative values count as 0 [default: 3]
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Marker shown after truncated text [default: " more..."]
    #[arg(short, long)]
    pub ellipsis: Option<String>,

    /// Available line width (default: terminal width)
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Measure in pixels with this font, e.g. "400 normal 12px Arial"
    #[arg(short, long)]
    pub font: Option<String>,

    /// Behave as if no display surface exists and print the full text
    #[arg(long, conflicts_with = "watch")]
    pub headless: bool,

    /// Interactive view that follows terminal resizes and changes to FILE
    #[arg(long, requires = "file")]
    pub watch: bool,
}
