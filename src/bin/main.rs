use clap::Parser;
use quiz_core::config::{default_cache_dir, JlptLevel, QuizConfig};
use quiz_core::drill::Drill;
use quiz_core::error::QuizError;
use quiz_core::jisho::JishoClient;
use quiz_core::persistence::JsonFileStore;
use quiz_core::theme::Palette;
use quiz_core::QuizEngine;
use std::io::{stdin, stdout};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jlpt_quiz", about = "JLPT vocabulary quiz: type the romaji reading of each word")]
struct Cli {
    /// JLPT level to drill (N5, N4, N3, N2, N1); random when omitted
    #[arg(long)]
    level: Option<JlptLevel>,
    /// Use cached words only (no internet required)
    #[arg(long)]
    offline: bool,
    /// Directory holding the word and statistics caches
    #[arg(long)]
    cache_dir: Option<PathBuf>,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn into_config(self, level: JlptLevel) -> QuizConfig {
        QuizConfig {
            level,
            offline: self.offline,
            cache_dir: self.cache_dir.unwrap_or_else(default_cache_dir),
            color: !self.no_color,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(config: QuizConfig) -> Result<(), QuizError> {
    let mut rng = rand::rng();
    std::fs::create_dir_all(&config.cache_dir)?;

    let store = JsonFileStore::new(&config.cache_dir);
    let mut engine = QuizEngine::open(store, config.level);

    if !config.offline {
        let fetched = JishoClient::new()
            .and_then(|client| client.fetch_random_page(config.level, &mut rng));
        match fetched {
            Ok(words) => {
                if let Err(e) = engine.merge_words(words) {
                    warn!(error = %e, "could not cache fetched words");
                }
            }
            Err(e) => warn!(error = %e, "could not fetch new words, using cache"),
        }
    }

    let palette = Palette::new(config.color);
    let mut drill = Drill::new(stdin().lock(), stdout().lock(), &palette);
    drill.run(&mut engine, config.offline, &mut rng)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    let level = cli.level.unwrap_or_else(|| JlptLevel::random(&mut rand::rng()));
    match run(cli.into_config(level)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            ExitCode::FAILURE
        }
    }
}
