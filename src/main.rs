//! # Wordsearch Command Line Entry Point
//!
//! Parses the puzzle request, runs the generator, and prints the puzzle sheet
//! (or its JSON form) to stdout or a file.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use wordsearch::config::DEFAULT_GRID_SIZE;
use wordsearch::generation::utils::create_rng;
use wordsearch::{
    DecoySource, DifficultyProfile, Direction, GenerationConfig, Generator, PlacementStrategy,
    PuzzleGenerator, TextRenderer, WordSearchError, WordSearchResult,
};
#[cfg(feature = "dev-tools")]
use tracing::{error, info};

#[cfg(not(feature = "dev-tools"))]
use log::{error, info};

/// Command line arguments for the word-search generator.
#[derive(Parser, Debug)]
#[command(name = "wordsearch")]
#[command(about = "Generate word-search puzzles with answer keys")]
#[command(version)]
struct Args {
    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    cols: usize,

    /// Comma separated words to hide
    #[arg(short, long, default_value = "export, import, invoice, shipment, freight")]
    words: String,

    /// Difficulty profile (very-easy, easy, medium, hard, very-hard, extreme)
    #[arg(short, long, default_value = "very-hard")]
    difficulty: DifficultyProfile,

    /// Comma separated directions (E,W,S,N,SE,NW,NE,SW or H,HR,V,VR,D1..D4); overrides the profile
    #[arg(long)]
    directions: Option<String>,

    /// Number of decoy fragments; overrides the profile
    #[arg(long)]
    decoys: Option<usize>,

    /// Extra filler characters, e.g. accented letters
    #[arg(long, default_value = "")]
    extra_filler: String,

    /// Maximum number of words to place
    #[arg(long)]
    max_words: Option<usize>,

    /// Random seed for reproducible puzzles
    #[arg(short, long)]
    seed: Option<u64>,

    /// Placement strategy (random, best-fit)
    #[arg(long, default_value = "random")]
    strategy: PlacementStrategy,

    /// Decoy source (words, random, mixed)
    #[arg(long, default_value = "words")]
    decoy_source: DecoySource,

    /// Emit JSON instead of the text sheet
    #[arg(long)]
    json: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = initialize_logging(&args.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    info!("Starting wordsearch v{}", wordsearch::VERSION);

    if let Err(e) = run(&args) {
        error!("{}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> WordSearchResult<()> {
    #[cfg(feature = "dev-tools")]
    {
        use tracing::Level;

        let level = match log_level.to_lowercase().as_str() {
            "error" => Level::ERROR,
            "warn" => Level::WARN,
            "info" => Level::INFO,
            "debug" => Level::DEBUG,
            "trace" => Level::TRACE,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .try_init()
            .map_err(|e| WordSearchError::InvalidConfig(e.to_string()))?;
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .format_target(false)
            .try_init()
            .map_err(|e| WordSearchError::InvalidConfig(e.to_string()))?;
    }

    Ok(())
}

/// Builds the configuration from the arguments, generates, and writes the result.
fn run(args: &Args) -> WordSearchResult<()> {
    let config = build_config(args)?;
    let generator = PuzzleGenerator::new()
        .with_strategy(args.strategy)
        .with_decoy_source(args.decoy_source);
    let mut rng = create_rng(&config);

    info!(
        "Generating {}x{} puzzle with {} ({:?})",
        config.rows, config.cols, args.difficulty, args.strategy
    );
    let puzzle = generator.generate(&config, &mut rng)?;
    generator.validate(&puzzle, &config)?;

    let rendered = if args.json {
        puzzle.to_json()?
    } else {
        TextRenderer::new().render_puzzle(&puzzle)
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!("Wrote puzzle to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn build_config(args: &Args) -> WordSearchResult<GenerationConfig> {
    let words: Vec<String> = args
        .words
        .split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect();

    let profile = match &args.directions {
        Some(list) => DifficultyProfile::Custom {
            directions: Direction::parse_list(list)?,
            decoys: args.decoys.unwrap_or_else(|| args.difficulty.decoy_count()),
        },
        None => args.difficulty.clone(),
    };

    let mut config = GenerationConfig::new(args.rows, args.cols, words)
        .with_profile(&profile)
        .with_extra_filler(args.extra_filler.clone());

    if let Some(decoys) = args.decoys {
        config = config.with_decoys(decoys);
    }
    if let Some(max_words) = args.max_words {
        config = config.with_max_words(max_words);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    Ok(config)
}
