use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use std::time::Instant;

use crossgen::errors::GenerateError;
use crossgen::generator::{self, GenerateOptions};
use crossgen::word_list::WordList;

/// How to print the finished puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Blank board followed by the clue listing
    Ascii,
    /// Filled-in board followed by the clue listing
    Answers,
    /// Serialized puzzle as JSON
    Json,
}

/// Crossword grid generator
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Words to place (added after any --word-list entries)
    words: Vec<String>,

    /// Path to a word list file (`word` or `word;clue` per line)
    #[arg(short, long)]
    word_list: Option<String>,

    /// Side length of the working grid
    #[arg(short, long, default_value_t = generator::DEFAULT_GRID_SIZE)]
    size: usize,

    /// Random placements tried per word when no crossing exists
    #[arg(short = 'a', long, default_value_t = generator::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Ascii)]
    format: OutputFormat,
}

/// Entry point of the crossgen CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("CROSSGEN_DEBUG").is_ok();
    crossgen::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(gen_err) = e.downcast_ref::<GenerateError>() {
            eprintln!("Error: {}", gen_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Collect words and clues from the word list file and positional arguments.
/// 3. Generate the puzzle.
/// 4. Print the puzzle on stdout in the requested format.
/// 5. Print placement diagnostics on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut list = match &cli.word_list {
        Some(path) => WordList::load_from_path(path)?,
        None => WordList::default(),
    };
    list.extend_words(&cli.words);

    let options = GenerateOptions { grid_size: cli.size, max_attempts: cli.max_attempts, seed: cli.seed };
    log::debug!("Generating from {} words with {options:?}", list.words.len());

    let t_gen = Instant::now();
    let result = generator::generate(&list.words, &list.clues, &options)?;
    let gen_secs = t_gen.elapsed().as_secs_f64();

    let grid = &result.grid;
    match cli.format {
        OutputFormat::Json => println!("{}", grid.to_export().to_json()?),
        OutputFormat::Ascii | OutputFormat::Answers => {
            println!("{}", grid.to_ascii(cli.format == OutputFormat::Answers));
            println!();
            println!("{}", grid.clue_listing());
        }
    }

    if !result.unplaced.is_empty() {
        eprintln!("⚠️  Could not place: {}", result.unplaced.join(", "));
    }
    eprintln!(
        "Placed {}/{} words on a {}x{} grid in {:.3}s.",
        grid.placed_words().len(),
        list.words.len(),
        grid.rows(),
        grid.cols(),
        gen_secs
    );

    Ok(())
}
