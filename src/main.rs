#[cfg(not(target_arch = "wasm32"))]
use std::{io, time::Duration};

#[cfg(not(target_arch = "wasm32"))]
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
#[cfg(not(target_arch = "wasm32"))]
use ratatui::{backend::CrosstermBackend, Terminal};

#[cfg(not(target_arch = "wasm32"))]
use catalog_browser_lib::app::{App, Store};
#[cfg(not(target_arch = "wasm32"))]
use catalog_browser_lib::config::AppConfig;
#[cfg(not(target_arch = "wasm32"))]
use catalog_browser_lib::controller::Controller;
#[cfg(not(target_arch = "wasm32"))]
use catalog_browser_lib::handlers::input::{handle_key_event, InputResult};
#[cfg(not(target_arch = "wasm32"))]
use catalog_browser_lib::handlers::mouse::handle_mouse_event;
#[cfg(not(target_arch = "wasm32"))]
use catalog_browser_lib::render::Screen;
#[cfg(not(target_arch = "wasm32"))]
use catalog_browser_lib::storage::{FileStore, MemoryStore};
#[cfg(not(target_arch = "wasm32"))]
use catalog_browser_lib::{player, ui};

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON catalog to browse instead of the built-in one
    #[arg(long)]
    catalog: Option<std::path::PathBuf>,

    /// Where navigation state is kept
    #[arg(long)]
    state: Option<std::path::PathBuf>,

    /// Check configuration and catalog, then exit
    #[arg(long)]
    check: bool,

    /// Forget all persisted navigation state and the watch later list
    #[arg(long)]
    reset: bool,

    /// Optional Direct Play URL (if provided, plays and exits)
    #[arg(short, long)]
    play: Option<String>,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging(level: &str, to_file: bool) {
    use std::str::FromStr;
    use std::sync::Mutex;

    let level = tracing::Level::from_str(level).unwrap_or(tracing::Level::INFO);

    if to_file {
        // The terminal belongs to the UI; logs go next to the state file
        let log_file = directories::ProjectDirs::from("com", "catalog", "catalog-browser")
            .map(|proj| proj.data_dir().join("catalog-browser.log"))
            .and_then(|path| {
                std::fs::create_dir_all(path.parent()?).ok()?;
                std::fs::File::create(path).ok()
            });
        if let Some(file) = log_file {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        return;
    }

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

#[cfg(not(target_arch = "wasm32"))]
fn open_store(config: &AppConfig) -> Store {
    match config.state_file().map(FileStore::open) {
        Some(Ok(store)) => {
            tracing::info!("State file: {}", store.path().display());
            Box::new(store)
        }
        Some(Err(e)) => {
            tracing::warn!("State file unavailable, nothing will persist: {}", e);
            Box::new(MemoryStore::new())
        }
        None => {
            tracing::warn!("No data directory, nothing will persist");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), anyhow::Error> {
    use clap::Parser;
    let args = Args::parse();

    let one_shot = args.check || args.reset || args.play.is_some();
    init_logging(&args.log_level, !one_shot);

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config: {}", e);
        AppConfig::default()
    });
    if args.catalog.is_some() {
        config.catalog_path = args.catalog.clone();
    }
    if args.state.is_some() {
        config.state_path = args.state.clone();
    }

    // -- CLI MODE --
    if let Some(url) = args.play {
        let mut player = player::Player::new();
        println!("Playing: {}", url);
        player.play(&url)?;
        return Ok(());
    }

    let catalog = config.load_catalog()?;

    if args.check {
        if let Some(path) = AppConfig::config_path().filter(|p| !p.exists()) {
            AppConfig::default().save()?;
            println!("Wrote default config to {}", path.display());
        }
        println!("Config: {}", AppConfig::config_path().map(|p| p.display().to_string()).unwrap_or_else(|| "-".to_string()));
        println!("State: {}", config.state_file().map(|p| p.display().to_string()).unwrap_or_else(|| "-".to_string()));
        println!(
            "Catalog: {} series, {} movies, {} news items.",
            catalog.items(catalog_browser_lib::catalog::ContentType::Series).len(),
            catalog.items(catalog_browser_lib::catalog::ContentType::Movie).len(),
            catalog.home().news_feed.len()
        );
        return Ok(());
    }

    let store = open_store(&config);
    let mut controller = Controller::new(catalog, store, Screen::new())
        .with_scroll_debounce(config.scroll_debounce_ms);

    if args.reset {
        controller.reset()?;
        println!("Navigation state and watch later list cleared.");
        return Ok(());
    }

    // -- TUI MODE (Default) --
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(controller);
    app.resume();

    let res = run_app(&mut terminal, &mut app);

    // Whatever happened, the last scroll position is written
    if !app.should_quit {
        app.quit();
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        // Wake up in time for a pending scroll save
        let timeout = app
            .controller
            .scroll_due_in(app.now_ms())
            .map(|ms| ms.min(250))
            .unwrap_or(250);

        if event::poll(Duration::from_millis(timeout))? {
            match event::read()? {
                Event::Key(key) => {
                    if handle_key_event(app, key) == InputResult::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(app, mouse),
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}
