use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use lexiview::app::App;
use lexiview::config::ReaderConfig;
use lexiview::layout::CaretMode;
use lexiview::metrics::{FontMetrics, FontdueMetrics};
use lexiview::store::{MemoryStore, SqliteStore, WordStore};

#[derive(Parser)]
#[command(name = "lexiview", version, about = "A terminal text reader with word lookup")]
struct Cli {
    /// Text file to read
    file: PathBuf,

    /// TrueType/OpenType font used for measuring text (default: cell metrics)
    #[arg(long, value_name = "TTF")]
    font: Option<PathBuf>,

    /// Word database path
    #[arg(long, value_name = "PATH", default_value = "words.db")]
    db: PathBuf,

    /// Keep the word store in memory instead of opening the database
    #[arg(long)]
    memory_store: bool,

    /// Initial font size in points
    #[arg(long)]
    font_size: Option<f32>,

    /// Wrap width in pixels
    #[arg(long)]
    wrap_width: Option<u32>,

    /// Maximum number of lines per page
    #[arg(long)]
    lines: Option<usize>,

    /// Map selections with measured glyph widths instead of a fixed unit
    #[arg(long)]
    glyph_caret: bool,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

impl Cli {
    fn reader_config(&self) -> ReaderConfig {
        let mut config = ReaderConfig::default();
        if let Some(size) = self.font_size {
            config.font_size = size;
        }
        if let Some(width) = self.wrap_width {
            config.wrap_width = width;
        }
        if let Some(lines) = self.lines {
            config.page_lines = lines.max(1);
        }
        if self.glyph_caret {
            config.caret = CaretMode::Glyph;
        }
        config
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(ref path) = cli.log {
        init_logging(path)?;
    }

    if !cli.file.exists() {
        eprintln!("Error: file not found: {}", cli.file.display());
        std::process::exit(1);
    }

    let config = cli.reader_config();
    let metrics: Box<dyn FontMetrics> = match cli.font {
        Some(ref path) => match FontdueMetrics::load(path) {
            Ok(metrics) => Box::new(metrics),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Box::new(config.cell_metrics()),
    };
    let store = open_store(&cli);

    let app = match App::open(cli.file.clone(), config, metrics, store) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: failed to read {}: {}", cli.file.display(), e);
            std::process::exit(1);
        }
    };
    tracing::info!(file = %cli.file.display(), lines = app.lines().len(), "opened");

    run_reader(app)
}

/// Sends tracing output to `path`. The terminal UI owns stdout.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = std::fs::File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Opens the word database, falling back to a memory store so a broken
/// database never keeps the reader from starting.
fn open_store(cli: &Cli) -> Box<dyn WordStore> {
    if cli.memory_store {
        return Box::new(MemoryStore::new());
    }
    match SqliteStore::open(&cli.db) {
        Ok(store) => Box::new(store),
        Err(err) => {
            tracing::warn!(%err, path = %cli.db.display(), "falling back to memory store");
            Box::new(MemoryStore::new())
        }
    }
}

/// Sets up the terminal, runs the reader, and restores the terminal on exit.
fn run_reader(app: App) -> io::Result<()> {
    // Setup panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> io::Result<()> {
    loop {
        app.render_frame(terminal)?;

        // Poll briefly while a zoom animates so its frames keep coming;
        // otherwise block up to 100ms for the first event.
        let wait = if app.is_zooming() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };
        if event::poll(wait)? {
            // Drain all queued events without blocking, then render immediately.
            loop {
                let ev = event::read()?;
                app.handle_event(ev);
                if app.should_quit {
                    break;
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}
