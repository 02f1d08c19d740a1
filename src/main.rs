use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use connect_four::config::{AppConfig, DEFAULT_CONFIG_PATH};
use connect_four::error::PlayError;
use connect_four::game::{GameOutcome, GameState, GlyphSet, Player};
use connect_four::ui::App;

/// Play Connect Four against a friend in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four in the terminal")]
struct Cli {
    /// Path to TOML configuration file [default: connect_four.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for choosing who moves first
    #[arg(long)]
    seed: Option<u64>,

    /// Let this player move first: red or yellow
    #[arg(long)]
    first: Option<Player>,

    /// Draw the board with plain ASCII letters
    #[arg(long)]
    ascii: bool,

    /// Never clear the screen between moves
    #[arg(long)]
    no_clear: bool,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let (mut config, config_found) = AppConfig::resolve(cli.config.as_deref())
        .with_context(|| format!("loading config from {}", config_path.display()))?;

    // Apply CLI overrides
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    if let Some(first) = cli.first {
        config.game.first_player = Some(first);
    }
    if cli.ascii {
        config.display.glyphs = GlyphSet::Ascii;
    }
    if cli.no_clear {
        config.display.clear_screen = false;
    }

    init_tracing(&config.log.level);
    if !config_found {
        warn!(path = %config_path.display(), "config file not found, using defaults");
    }

    let state = match config.game.first_player {
        Some(first) => GameState::new(first),
        None => {
            let mut rng = match config.game.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            GameState::with_rng(&mut rng)
        }
    };

    let stdin = io::stdin();
    let mut app = App::new(stdin.lock(), io::stdout(), config.display, state);
    match app.run() {
        Ok(GameOutcome::Win(player)) => info!(%player, "winner"),
        Ok(outcome) => info!(?outcome, "no winner"),
        Err(PlayError::InputClosed) => println!(),
        Err(err) => return Err(err).context("running game"),
    }
    Ok(())
}

/// Log to stderr so game output on stdout stays clean. `RUST_LOG` wins over
/// the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
