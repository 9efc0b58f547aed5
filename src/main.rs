use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::logging::{self, LogTarget};
use connect_four::ui::{self, App};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override board width
    #[arg(long)]
    width: Option<usize>,

    /// Override board height
    #[arg(long)]
    height: Option<usize>,

    /// Line-based console play instead of the full-screen UI
    #[arg(long)]
    plain: bool,

    /// Append log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Stderr output would corrupt the full-screen UI
    let target = match (&cli.log_file, cli.plain) {
        (Some(path), _) => LogTarget::File(path),
        (None, true) => LogTarget::Stderr,
        (None, false) => LogTarget::Disabled,
    };
    logging::init(target).context("initializing logging")?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(width) = cli.width {
        config.board.width = width;
    }
    if let Some(height) = cli.height {
        config.board.height = height;
    }
    if config.ui.start_column.is_some_and(|col| col >= config.board.width) {
        config.ui.start_column = None;
    }
    config.validate().context("invalid configuration")?;

    tracing::info!(
        width = config.board.width,
        height = config.board.height,
        plain = cli.plain,
        "starting game"
    );

    if cli.plain {
        run_plain(&config)
    } else {
        run_tui(&config)
    }
}

fn run_plain(config: &AppConfig) -> Result<()> {
    let mut engine = config.board.new_game()?;
    let stdin = io::stdin();
    let status = ui::console::play(&mut engine, stdin.lock(), io::stdout())
        .context("console game failed")?;
    tracing::info!(?status, moves = engine.move_count(), "game finished");
    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    tracing::info!(
        status = ?app.engine().status(),
        moves = app.engine().move_count(),
        "session ended"
    );
    res.context("terminal UI failed")
}
