mod app;
mod config;
mod drawer;
mod input;
mod keys;
mod questions;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;
use drawer::Drawer;
use keys::KeyOutcome;

#[derive(Parser, Debug)]
#[command(name = "qpick")]
#[command(about = "Seminar question picker - draw discussion questions at random without repeats")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/seminar-picker/config.toml")]
    config: String,

    /// Question file to load at startup (one question per line)
    #[arg(long, short)]
    file: Option<String>,

    /// Seed for reproducible draws
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize logging; stderr shares the terminal, so stay quiet by default
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qpick=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Load config
    let config = Config::load(&cli.config)?;

    // Read the question file before touching the terminal so errors print cleanly
    let preload = match cli.file.as_deref().or(config.behavior.questions_file.as_deref()) {
        Some(path) => Some(questions::read_questions_file(path)?),
        None => None,
    };

    let drawer = match cli.seed {
        Some(seed) => {
            tracing::info!("Seeding drawer with {}", seed);
            Drawer::seeded(seed)
        }
        None => Drawer::new(),
    };

    // Create app state
    let mut app = App::new(drawer, config);
    if let Some(text) = preload {
        app.preload(&text);
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Poll with a timeout so expired notices disappear without input
        if !event::poll(std::time::Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if keys::handle_key(app, key) == KeyOutcome::Quit {
                    return Ok(());
                }
            }
            Event::Paste(text) => keys::handle_paste(app, &text),
            _ => {}
        }
    }
}
