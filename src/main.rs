// Terminal Sokoban
// Controls: arrow keys or W/A/S/D to move, U undo, R reset, SPACE/Enter continue, Q quit.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sokoban::config::GameConfig;
use sokoban::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_session, setup_terminal,
};
use sokoban::error::SessionError;
use sokoban::json_export::level_json;
use sokoban::level_loader::LevelLoader;
use sokoban::session::Session;

#[derive(Parser, Debug)]
#[command(name = "sokoban", about = "Push every box onto a target")]
struct Args {
    /// TOML config file; defaults are used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding 1.txt .. N.txt
    #[arg(long)]
    levels_dir: Option<PathBuf>,

    /// Directory for sokoban.log
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,

    /// Print level N (1-based) as JSON and exit
    #[arg(long, value_name = "N")]
    dump_level: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = setup_logging(&args.log_dir)?;

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(dir) = args.levels_dir {
        config.levels_dir = dir;
    }
    tracing::info!(?config, "starting");

    let loader = LevelLoader::from_config(&config);

    if let Some(n) = args.dump_level {
        let level_id = n.checked_sub(1).context("levels are numbered from 1")?;
        let grid = loader.load(level_id)?;
        println!("{}", level_json(level_id, &grid)?);
        return Ok(());
    }

    let mut terminal = setup_terminal()?;
    let result = run_interactive(Session::new(&config, loader), &mut terminal);
    cleanup_terminal()?;
    if let Err(err) = &result {
        tracing::error!("{err:#}");
    }
    result
}

fn run_interactive(
    mut session: Session,
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
) -> Result<()> {
    let mut error: Option<String> = None;
    loop {
        let now = Instant::now();
        render_session(terminal, &session, now, error.as_deref())?;
        session.tick(now);

        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::Command(command) => match session.handle(command, Instant::now()) {
                Ok(()) => error = None,
                // the session stays on its current screen; show why and let the player retry
                Err(SessionError::Load(err)) => {
                    tracing::error!(%err, "level load failed");
                    error = Some(err.to_string());
                }
                Err(err) => return Err(err.into()),
            },
            ConsoleInput::Timeout | ConsoleInput::Unknown => {}
        }
    }
    Ok(())
}

fn setup_logging(log_dir: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, "sokoban.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    // file only; the terminal belongs to the TUI
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(guard)
}
