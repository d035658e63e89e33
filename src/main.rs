use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use folio::{model::Model, ActiveSectionTracker, PortfolioData, SectionId};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{collections::HashMap, io, path::PathBuf, time::Duration};
use tokio::sync::{mpsc, watch};
use tracing_appender::non_blocking::WorkerGuard;

/// Terminal portfolio viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to folio-debug.log in the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Portfolio data file (YAML or JSON); overrides `data_path` from the config
    #[arg(long)]
    data: Option<PathBuf>,
}

mod app;
mod config;
mod handlers;
mod terminal;
mod ui;
mod utils;

use config::Config;
use terminal::TerminalGuard;

#[derive(Clone, Debug)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub format: Option<String>,
    pub file_size: u64,
}

pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        metadata: ImageMetadata,
    },
    Failed {
        reason: String,
    },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { metadata, .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("metadata", metadata)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { reason } => f
                .debug_struct("ImagePreviewState::Failed")
                .field("reason", reason)
                .finish(),
        }
    }
}

pub struct App {
    pub model: Model,

    /// Sole writer of the current section
    tracker: ActiveSectionTracker,
    /// Renderer-side observer of the current section
    section_rx: watch::Receiver<SectionId>,

    image_picker: Option<ratatui_image::picker::Picker>,
    image_update_tx: mpsc::UnboundedSender<(PathBuf, ImagePreviewState)>,
    image_update_rx: mpsc::UnboundedReceiver<(PathBuf, ImagePreviewState)>,
    /// Maps image paths to their preview states
    image_state_map: HashMap<PathBuf, ImagePreviewState>,

    open_command: Option<String>,
    clipboard_command: Option<String>,

    /// Geometry units per terminal row
    cell_height_px: u16,
}

impl App {
    fn new(config: Config, portfolio: PortfolioData) -> Self {
        let (image_update_tx, image_update_rx) = mpsc::unbounded_channel();

        let (image_picker, image_font_size) = if config.image_preview_enabled {
            let picker = Self::create_picker(&config.image_protocol);
            let font_size = picker.font_size();
            tracing::debug!(width = font_size.0, height = font_size.1, "image_font_size");
            (Some(picker), Some(font_size))
        } else {
            tracing::debug!("image preview disabled in config");
            (None, None)
        };

        // Geometry units follow the terminal's font height unless overridden
        let cell_height_px = config
            .cell_height_px
            .or(image_font_size.map(|(_, height)| height))
            .unwrap_or(folio::logic::page::DEFAULT_CELL_HEIGHT_PX);

        let mut model = Model::new(portfolio, config.vim_mode);
        model.ui.image_font_size = image_font_size;

        let tracker = ActiveSectionTracker::new();
        let section_rx = tracker.subscribe();

        Self {
            model,
            tracker,
            section_rx,
            image_picker,
            image_update_tx,
            image_update_rx,
            image_state_map: HashMap::new(),
            open_command: config.open_command,
            clipboard_command: config.clipboard_command,
            cell_height_px,
        }
    }

    fn create_picker(protocol: &str) -> ratatui_image::picker::Picker {
        use ratatui_image::picker::{Picker, ProtocolType};

        let mut picker = match Picker::from_query_stdio() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "image preview: failed to query terminal");
                Picker::from_fontsize((8, 16)) // Fallback font size
            }
        };

        match protocol.to_lowercase().as_str() {
            "auto" => {}
            "iterm2" => picker.set_protocol_type(ProtocolType::Iterm2),
            "kitty" => picker.set_protocol_type(ProtocolType::Kitty),
            "sixel" => picker.set_protocol_type(ProtocolType::Sixel),
            "halfblocks" => picker.set_protocol_type(ProtocolType::Halfblocks),
            unknown => {
                tracing::warn!(
                    protocol = unknown,
                    "image preview: unknown protocol, using auto-detect"
                );
            }
        }
        tracing::debug!(protocol = ?picker.protocol_type(), "image_protocol_selected");

        picker
    }
}

/// Route tracing output to a file; the TUI owns stdout
fn init_logging() -> Result<WorkerGuard> {
    let file_appender =
        tracing_appender::rolling::never(utils::get_debug_log_dir(), utils::DEBUG_LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;

    Ok(guard)
}

fn load_portfolio(config: &Config) -> Result<PortfolioData> {
    match &config.data_path {
        Some(path) => PortfolioData::load(path)
            .with_context(|| format!("Failed to load portfolio data from {}", path.display())),
        None => PortfolioData::bundled().context("Bundled portfolio data is invalid"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Keep the writer guard alive for the whole run so buffered lines are flushed
    let _log_guard = if args.debug {
        Some(init_logging()?)
    } else {
        None
    };

    // Determine config file path
    let config_path = config::get_config_path(args.config)?;
    let mut config = match &config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => {
            tracing::debug!("no config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(data) = args.data {
        config.data_path = Some(data);
    }

    let portfolio = load_portfolio(&config)?;

    // Initialize app
    let mut app = App::new(config, portfolio);
    app.request_project_images();

    // Setup terminal; the guard restores it on every exit path
    let mut session = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    session.leave()?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Pick up section changes published by the tracker
        app.sync_highlighted_section();

        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.ui.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process image updates from background loading tasks (non-blocking)
        app.drain_image_updates();

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => handlers::keyboard::handle_key(app, key)?,
                Event::Mouse(mouse) => handlers::mouse::handle_mouse(app, mouse),
                // Next draw re-measures the page
                _ => {}
            }
        }
    }

    Ok(())
}
