//! Wordle Game - CLI
//!
//! Play in a TUI (default), in plain line mode, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_game::{
    commands::{evaluate_words, run_simple},
    core::Word,
    game::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, GameConfig},
    output::{formatters::status_label, print_evaluation},
    wordlists::{EmbeddedWords, FileWords, WordSource},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word; yellow tiles reveal where the letter belongs",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    word_length: usize,

    /// Guesses allowed per game (1 to 100)
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without TUI
    Simple,

    /// Show the feedback for one guess against a target
    Evaluate {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },
}

fn init_logging(level: &str, log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }
    Ok(())
}

/// Load the word source selected by the -w flag
fn word_source(wordlist: &str) -> Box<dyn WordSource> {
    match wordlist {
        "embedded" => Box::new(EmbeddedWords),
        path => Box::new(FileWords::new(path)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level, cli.log_file.as_ref())?;

    let config = GameConfig::new(cli.word_length, cli.max_attempts)?;
    let source = word_source(&cli.wordlist);

    tracing::info!(
        word_length = config.word_length(),
        max_attempts = config.max_attempts(),
        wordlist = %cli.wordlist,
        "starting"
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(source.as_ref(), config),
        Commands::Simple => run_simple(source.as_ref(), config),
        Commands::Evaluate { target, guess } => run_evaluate_command(&target, &guess),
    }
}

fn run_play_command(source: &dyn WordSource, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    // Read the list once so new games don't go back to disk
    let words: Vec<Word> = source.candidates(config.word_length())?;
    let app = App::new(&words, config)?;
    run_tui(app)
}

fn run_evaluate_command(target: &str, guess: &str) -> Result<()> {
    let evaluation = evaluate_words(target, guess)?;

    let mut stdout = std::io::stdout().lock();
    print_evaluation(&mut stdout, &evaluation)?;
    writeln!(stdout, "  {}\n", evaluation.to_emoji())?;

    for (i, feedback) in evaluation.iter().enumerate() {
        write!(stdout, "  {} {} {}", i + 1, feedback.letter, status_label(feedback.status))?;
        if let Some(hint) = feedback.position_hint {
            write!(stdout, " (position {hint})")?;
        }
        writeln!(stdout)?;
    }
    Ok(())
}
