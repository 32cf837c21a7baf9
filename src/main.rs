//! # Octoscope CLI Entry Point
//!
//! This is the main entry point for the Octoscope TUI application.
//!
//! ## Overview
//!
//! Octoscope looks up a GitHub user, shows their profile next to their most
//! recently updated repositories, and lets you filter those repositories by
//! language and re-sort them without another request.
//!
//! ## Usage
//!
//! ```bash
//! # Start with an empty search box
//! octoscope
//!
//! # Look a user up immediately
//! octoscope octocat
//!
//! # Print once as plain text and exit
//! octoscope octocat --once --language Rust --sort stars
//!
//! # Point at a GitHub Enterprise API and keep a debug log
//! RUST_LOG=octoscope=debug octoscope --api-url https://ghe.example.com/api/v3 --log-file octoscope.log
//! ```
//!
//! ## Architecture
//!
//! 1. **Input**: key events edit the username or drive the filter/sort controls
//! 2. **Search**: each search runs on its own tokio task (profile, then repositories)
//! 3. **Outcome**: results come back over a channel; superseded searches are dropped
//! 4. **Render**: the whole frame is redrawn from [`App`] state every tick
//!
//! ## Key Bindings
//!
//! ### Search box
//! - `Enter` - Search
//! - `Esc` / `Tab` - Move to the results
//!
//! ### Results
//! - `l` / `L` - Next / previous language filter
//! - `s` / `S` - Next / previous sort order
//! - `j` / `k` - Scroll the repository list
//! - `t` - Toggle light/dark theme
//! - `/` / `Tab` - Back to the search box
//! - `q` - Quit
//!
//! ### Anywhere
//! - `Ctrl+T` - Toggle theme
//! - `Ctrl+C` - Quit

use octoscope::github::{self, GitHubClient, RepoView, SortKey};
use octoscope::ui::config::Config;
use octoscope::ui::panels;
use octoscope::ui::theme::{ThemeController, ThemePreference};
use octoscope::ui::{self, input, App, SearchOutcome, SearchRequest};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing_subscriber::EnvFilter;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Octoscope - look up a GitHub user's profile and recent repositories
#[derive(Parser, Debug)]
#[command(name = "octoscope")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Explore a GitHub user's profile and recent repositories", long_about = None)]
struct Args {
    /// GitHub username to look up on startup
    username: Option<String>,

    /// Starting theme (overrides the config file)
    #[arg(long, value_enum)]
    theme: Option<ThemePreference>,

    /// Base URL of the GitHub REST API (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Print the profile and repositories as plain text and exit
    #[arg(long, requires = "username")]
    once: bool,

    /// Only list repositories written in this language (with --once)
    #[arg(long, value_name = "LANG", requires = "once")]
    language: Option<String>,

    /// Repository order (with --once)
    #[arg(long, value_enum, requires = "once")]
    sort: Option<SortKey>,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    init_logging(&args)?;

    if args.once {
        return run_once_from_args(&args).await;
    }

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal state
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);

        // Call the original panic hook
        original_hook(panic_info);
    }));

    // Run the application and ensure cleanup happens
    let result = run_application(args).await;

    // Restore panic hook
    let _ = panic::take_hook();

    result
}

/// Install a tracing subscriber when there is somewhere to write to.
///
/// The TUI owns stdout/stderr, so interactive sessions only log with
/// `--log-file`. One-shot runs log warnings to stderr.
fn init_logging(args: &Args) -> Result<()> {
    if let Some(path) = &args.log_file {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("octoscope=info"));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))?;
    } else if args.once {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("octoscope=warn"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))?;
    }
    Ok(())
}

/// Resolve config + CLI overrides into a client and a theme controller.
fn build_client_and_theme(args: &Args) -> Result<(GitHubClient, ThemeController)> {
    let config = Config::load();
    let base_url = args
        .api_url
        .clone()
        .unwrap_or_else(|| config.api_base_url.clone());
    let client = GitHubClient::new(&base_url, config.per_page)?;
    let theme = ThemeController::init(args.theme.unwrap_or(config.theme));
    Ok((client, theme))
}

async fn run_once_from_args(args: &Args) -> Result<()> {
    let (client, theme) = build_client_and_theme(args)?;
    let view = RepoView::new(args.language.clone(), args.sort.unwrap_or_default());
    let username = args.username.as_deref().unwrap_or_default();
    let output = run_once(&client, username, &view, &theme).await?;
    println!("{output}");
    Ok(())
}

/// Fetch once and render both panels as plain text.
async fn run_once(
    client: &GitHubClient,
    username: &str,
    view: &RepoView,
    theme: &ThemeController,
) -> Result<String> {
    let username = username.trim();
    if username.is_empty() {
        anyhow::bail!("Username must not be empty");
    }

    let result = github::search(client, username).await.map_err(|e| {
        tracing::error!("Error fetching data: {e}");
        anyhow::anyhow!(e.user_message())
    })?;

    let palette = theme.theme();
    Ok(format!(
        "{}\n\n{}",
        panels::plain_text(&panels::profile_card(&result.profile, palette)),
        panels::plain_text(&panels::repositories_panel(
            &result.repositories,
            view,
            palette
        )),
    ))
}

async fn run_application(args: Args) -> Result<()> {
    let (client, theme) = build_client_and_theme(&args)?;

    let mut app = App::new(theme);
    if let Some(username) = args.username {
        app.input = username;
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &client, &mut event_reader).await;

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Run a search on its own task and report back through `tx`.
fn spawn_search(client: &GitHubClient, request: SearchRequest, tx: &UnboundedSender<SearchOutcome>) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = github::search(&client, &request.username).await;
        // The receiver only goes away when the UI is shutting down
        let _ = tx.send(SearchOutcome {
            seq: request.seq,
            result,
        });
    });
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &GitHubClient,
    event_reader: &mut dyn EventReader,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<SearchOutcome>();

    // A username passed on the command line is searched right away
    if let Some(request) = app.submit_search() {
        spawn_search(client, request, &tx);
    }

    loop {
        while let Ok(outcome) = rx.try_recv() {
            app.apply_outcome(outcome);
        }

        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Short timeout so the spinner and reveal transitions keep moving
        let event = event_reader.read_event(Duration::from_millis(100))?;
        app.on_tick();

        if let Some(Event::Key(key)) = event {
            if let Some(request) = input::handle_key(app, key) {
                spawn_search(client, request, &tx);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
