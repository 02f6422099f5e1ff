mod help_bar;
mod status_bar;
mod text_panel;

use crate::colors::ColorScheme;
use crate::terminal::TerminalWidth;
use crate::{read_text, render_plain, Settings};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
    ExecutableCommand,
};
use help_bar::HelpBar;
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use shorten::controller::Shortener;
use shorten::events::{EventHub, ShortenEvent};
use shorten::width::FixedWidth;
use status_bar::StatusBar;
use std::cell::Cell;
use std::io::{self, stdout, Read, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc;
use std::time::Duration;
use text_panel::TextPanel;
use tracing::debug;

/// Columns taken by the text panel's left and right borders
const PANEL_INSET: u16 = 2;

/// Events from background threads to the main loop
enum ViewEvent {
    FileChange,
    StdinClosed,
}

/// ViewApp - coordinator for the interactive view
struct ViewApp {
    path: PathBuf,
    hub: EventHub,
    shortener: Shortener,
    color_scheme: ColorScheme,
    /// How many recomputes ended up truncated
    shortened: Rc<Cell<usize>>,
    /// How many times the text was expanded
    expanded: Rc<Cell<usize>>,
}

impl ViewApp {
    fn new(path: &Path, shortener: Shortener) -> Self {
        let shortened = Rc::new(Cell::new(0));
        let expanded = Rc::new(Cell::new(0));

        let on_shorten = shortened.clone();
        let on_expand = expanded.clone();
        let shortener = shortener
            .on_shorten(move || on_shorten.set(on_shorten.get() + 1))
            .on_expand(move || on_expand.set(on_expand.get() + 1));
        debug!(path = %path.display(), mode = %shortener.options().mode, "view created");

        Self {
            path: path.to_path_buf(),
            hub: EventHub::new(),
            shortener,
            color_scheme: ColorScheme::from_env(),
            shortened,
            expanded,
        }
    }

    fn attach(&mut self) -> Result<()> {
        let text = read_text(Some(self.path.as_path()))?;
        self.shortener.attach(text, &mut self.hub);
        Ok(())
    }

    /// Re-read the file and hand the new content to the controller
    fn reload(&mut self) {
        match read_text(Some(self.path.as_path())) {
            Ok(text) => {
                self.hub.emit(ShortenEvent::ContentChanged(text));
            }
            // Editors replace files by rename; the next event will succeed
            Err(err) => debug!(error = %err, "reload skipped"),
        }
    }

    fn resize(&mut self) {
        self.hub.emit(ShortenEvent::Resize);
    }

    fn expand(&mut self) {
        self.shortener.expand();
    }

    /// Apply queued events to the controller
    fn settle(&mut self) {
        self.shortener.pump();
    }
}

impl Drop for ViewApp {
    fn drop(&mut self) {
        self.shortener.detach(&mut self.hub);
    }
}

/// Run the interactive view on a file
pub fn run(path: &Path, settings: &Settings) -> Result<()> {
    // Check if we're running in a TTY - if not, fall back to text mode
    if !stdout().is_tty() {
        return run_text_mode(path, settings);
    }

    // Set up terminal for TUI
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_tui(&mut terminal, path, settings);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// Watch the directory holding `path` and report changes to that file.
///
/// The directory is watched rather than the file so that editors which save
/// by writing a new file and renaming it keep being noticed.
fn watch_file(path: &Path, tx: mpsc::Sender<ViewEvent>) -> Result<RecommendedWatcher> {
    let target = path.file_name().map(|name| name.to_os_string());
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                let ours = event
                    .paths
                    .iter()
                    .any(|p| p.file_name().map(|n| n.to_os_string()) == target);
                if ours {
                    let _ = tx.send(ViewEvent::FileChange);
                }
            }
        },
        Config::default().with_poll_interval(Duration::from_millis(100)),
    )?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    Ok(watcher)
}

/// Run in text mode (for non-TTY environments like tests or piped output)
fn run_text_mode(path: &Path, settings: &Settings) -> Result<()> {
    println!("Watching: {}", path.display());

    let shortener = settings.shortener(Box::new(FixedWidth(settings.width)));
    let mut app = ViewApp::new(path, shortener);
    app.attach()?;

    let mut last = render_plain(&app.shortener, None);
    println!("{}", last);

    let (tx, rx) = mpsc::channel();

    // File watcher
    let _watcher = watch_file(path, tx.clone())?;

    // Stdin watcher - exits on EOF (Ctrl-D)
    let stdin_tx = tx;
    std::thread::spawn(move || {
        let mut stdin = io::stdin();
        let mut buf = [0u8; 1];
        // Block until EOF or error
        while stdin.read(&mut buf).unwrap_or(0) > 0 {}
        let _ = stdin_tx.send(ViewEvent::StdinClosed);
    });

    // Debounce and re-render on changes
    loop {
        match rx.recv_timeout(Duration::from_millis(500)) {
            Ok(ViewEvent::FileChange) => {
                // Drain any additional file events (debounce)
                while matches!(rx.try_recv(), Ok(ViewEvent::FileChange)) {}

                app.reload();
                app.settle();

                let rendered = render_plain(&app.shortener, None);
                if rendered != last {
                    clear_screen();
                    println!("{}", rendered);
                    last = rendered;
                }
            }
            Ok(ViewEvent::StdinClosed) => {
                // Ctrl-D pressed, exit cleanly
                break;
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {
                // No changes, continue watching
            }
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    Ok(())
}

/// Clear the terminal screen (for text mode)
fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
    io::stdout().flush().ok();
}

fn run_tui(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    path: &Path,
    settings: &Settings,
) -> Result<()> {
    let width = TerminalWidth::new(PANEL_INSET, settings.column_scale());
    let shortener = settings.shortener(Box::new(width));
    let mut app = ViewApp::new(path, shortener);
    app.attach()?;

    let (tx, rx) = mpsc::channel();
    let _watcher = watch_file(path, tx)?;

    loop {
        terminal.draw(|f| render_ui(f, &app))?;

        let mut quit = false;
        let mut resized = false;

        // Handle events with short timeout, then drain whatever else is queued
        if event::poll(Duration::from_millis(100))? {
            loop {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        match (key.code, key.modifiers) {
                            // Quit commands
                            (KeyCode::Char('q'), KeyModifiers::NONE)
                            | (KeyCode::Char('Q'), KeyModifiers::SHIFT)
                            | (KeyCode::Esc, _) => quit = true,
                            (KeyCode::Char('d'), m) if m.contains(KeyModifiers::CONTROL) => {
                                quit = true
                            }
                            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
                                quit = true
                            }

                            // Actions
                            (KeyCode::Enter, _)
                            | (KeyCode::Char(' '), _)
                            | (KeyCode::Char('e'), KeyModifiers::NONE) => app.expand(),
                            (KeyCode::Char('r'), KeyModifiers::NONE) => app.reload(),

                            _ => {}
                        }
                    }
                    // Bursts of resizes collapse into one recompute
                    Event::Resize(_, _) => resized = true,
                    _ => {}
                }
                if quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if quit {
            break;
        }

        if resized {
            app.resize();
        }

        if matches!(rx.try_recv(), Ok(ViewEvent::FileChange)) {
            // Drain any additional file events (debounce)
            while matches!(rx.try_recv(), Ok(ViewEvent::FileChange)) {}
            app.reload();
        }

        app.settle();
    }

    Ok(())
}

fn render_ui(f: &mut Frame, app: &ViewApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status bar
            Constraint::Min(1),    // Text
            Constraint::Length(3), // Help bar
        ])
        .split(f.area());

    let status_bar = StatusBar::new(
        &app.path,
        &app.shortener,
        app.shortened.get(),
        app.expanded.get(),
        &app.color_scheme,
    );
    f.render_widget(status_bar, chunks[0]);

    f.render_widget(TextPanel::new(&app.shortener, &app.color_scheme), chunks[1]);

    f.render_widget(HelpBar, chunks[2]);
}
