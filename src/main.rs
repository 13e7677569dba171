use clap::Parser;
use log::{LevelFilter, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use robots::config::{self, GameConfig};
use robots::error::fatal_message;
use robots::game::Game;
use robots::logging;
use robots::render::Renderer;
use std::io;
use std::process;

// --- Command Line Arguments ---
/// Running with no flags plays the standard game: a 7x8 arena with 25 robots
/// and an entropy-seeded random stream.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of arena rows.
    #[arg(long, default_value_t = config::DEFAULT_ROWS, allow_negative_numbers = true)]
    rows: i32,

    /// Number of arena columns.
    #[arg(long, default_value_t = config::DEFAULT_COLS, allow_negative_numbers = true)]
    cols: i32,

    /// Number of robots to place.
    #[arg(long, default_value_t = config::DEFAULT_ROBOTS, allow_negative_numbers = true)]
    robots: i32,

    /// Seed for a reproducible session. Defaults to system entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Debug filter to specify log topics (e.g., "robot,player")
    /// Available topics: arena, robot, player, game
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let log_level = match args.log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    };

    // RUST_LOG takes over from the topic logger when present
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    } else if let Err(e) = logging::init_logger(log_level, args.debug_filter) {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }

    let rng = match args.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let config = GameConfig::new(args.rows, args.cols, args.robots);
    let mut game = match Game::new(&config, rng) {
        Ok(game) => game,
        Err(e) => {
            error!("Invalid configuration {:?}: {}", config, e);
            println!("{}", fatal_message(&e));
            process::exit(1);
        }
    };

    let renderer = Renderer::new();
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    match game.play(&mut input, &mut output, &renderer) {
        Ok(outcome) => info!("Session finished: {:?}", outcome),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
