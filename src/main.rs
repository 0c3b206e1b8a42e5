use std::path::Path;
use std::process::ExitCode;

use clap::Parser;

use anaphrase::dictionary::LengthIndex;
use anaphrase::errors::ConfigError;
use anaphrase::solver::{self, Verbosity};

/// Anagram phrase finder
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Input text to find anagrams of
    text: String,

    /// Path to the word-list file (whitespace-separated words)
    #[arg(short, long, default_value = "/usr/share/dict/words")]
    wordlist: String,

    /// Maximum number of words to combine per anagram
    #[arg(short, long = "num_combos", default_value_t = 1)]
    num_combos: i64,

    /// Write verbose diagnostics to the `.log` file
    #[arg(short, long)]
    debug: bool,
}

/// Entry point of the anaphrase CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    anaphrase::log::init_logger(cli.debug);
    log::debug!("starting search for \"{}\"", cli.text);

    if let Err(e) = try_main(&cli) {
        // Print the error message to stderr, with detailed formatting if it's a ConfigError
        if let Some(config_err) = e.downcast_ref::<ConfigError>() {
            eprintln!("{}", config_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the anaphrase CLI.
///
/// Steps:
/// 1. Reject a bad word-list path before any loading or matching runs.
/// 2. Load the word list from disk and index it by word length.
/// 3. Search for anagram phrases of the input text.
/// 4. Print the numbered results (or the no-results message) on stdout.
///
/// Returns `Ok(())` on success or an error (invalid or unreadable word-list
/// path) which bubbles up to [`main`].
fn try_main(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !Path::new(&cli.wordlist).is_file() {
        return Err(Box::new(ConfigError::WordlistNotFile { path: cli.wordlist.clone() }));
    }

    let index = LengthIndex::load_from_path(&cli.wordlist).map_err(|source| {
        ConfigError::WordlistUnreadable { path: cli.wordlist.clone(), source }
    })?;
    log::debug!(
        "indexed {} words across {} lengths",
        index.word_count(),
        index.lengths().count()
    );

    // The flag accepts any integer; anything below 1 searches nothing.
    let max_words = usize::try_from(cli.num_combos).unwrap_or(0);
    let verbosity = if cli.debug { Verbosity::Debug } else { Verbosity::Quiet };

    let result = solver::find_anagrams(&cli.text, &index, max_words, verbosity);

    if result.anagrams.is_empty() {
        println!("No anagrams for \"{}\".", cli.text);
    } else {
        println!("{} = ", cli.text);
        for (i, anagram) in result.into_iter().enumerate() {
            println!("{:4}. {}", i + 1, anagram);
        }
    }

    Ok(())
}
