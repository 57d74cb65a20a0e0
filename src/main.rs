mod app;
mod assets;
mod config;
mod news;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::{App, Flow};
use assets::{AssetStore, BundledAssets};
use config::Config;
use news::{FileNews, NewsRepository, SampleNews};

#[derive(Parser, Debug)]
#[command(name = "newsdeck")]
#[command(about = "Terminal news reader")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/newsdeck/config.toml")]
    config: String,

    /// JSON file with "top" and "world" news (overrides config)
    #[arg(long)]
    news: Option<PathBuf>,

    /// Theme preset: light, dark, nord (overrides config)
    #[arg(long)]
    theme: Option<String>,

    /// Never draw images
    #[arg(long)]
    no_images: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "newsdeck=info".into());
    match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Arc::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
    }

    // Load config
    let mut config = Config::load(&cli.config)?;
    if let Some(theme) = cli.theme {
        config.appearance.theme = theme;
    }
    if cli.no_images {
        config.images.enabled = false;
    }
    if let Some(news) = cli.news {
        config.news.file = Some(news);
    }

    // Load news
    let news: Box<dyn NewsRepository> = match config.news_file() {
        Some(path) => Box::new(FileNews::load(&path)?),
        None => Box::new(SampleNews::new()),
    };
    tracing::info!(
        "Showing {} top and {} world items",
        news.top_news().len(),
        news.world_news().len()
    );

    // Query graphics support before raw mode
    let mut assets = if config.images.enabled {
        let resolver = BundledAssets::new(config.images_dir());
        AssetStore::detect(Box::new(resolver), config.images.halfblocks_fallback)
    } else {
        AssetStore::disabled()
    };
    if !assets.supports_graphics() {
        tracing::info!("World cards will be drawn without images");
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(news, config);

    // Run main loop
    let result = run_app(&mut terminal, &mut app, &mut assets).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    assets: &mut AssetStore,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app, assets))?;

        if !event::poll(std::time::Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if app.handle_key(key) == Flow::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(cols, rows) => {
                tracing::debug!("Terminal resized to {}x{}", cols, rows);
                assets.clear_protocols();
            }
            _ => {}
        }
    }
}
