use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use engine::persist::{load_lexicon, save_lexicon, LexiconFile};
use engine::{Analyzer, Lexicon};
use tracing_subscriber::{fmt, EnvFilter};

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sentiscope")]
#[command(about = "Score text sentiment and compute text statistics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one text from --text, --file, or stdin and print the result as JSON
    Analyze {
        /// Text to analyze
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// File whose contents are analyzed
        #[arg(long)]
        file: Option<PathBuf>,
        /// JSON lexicon file replacing the bundled lists
        #[arg(long)]
        lexicon: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Lexicon file utilities
    Lexicon {
        #[command(subcommand)]
        command: LexiconCommands,
    },
}

#[derive(Subcommand)]
enum LexiconCommands {
    /// Write the active lexicon to a JSON file
    Export {
        /// Output file path
        #[arg(long)]
        output: PathBuf,
        /// Lexicon file to re-export instead of the bundled one
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { text, file, lexicon, pretty } => {
            let input = read_input(text, file.as_deref())?;
            let analyzer = Analyzer::new(resolve_lexicon(lexicon.as_deref())?);
            let result = analyzer.analyze(&input);
            let out = if pretty { serde_json::to_string_pretty(&result)? } else { serde_json::to_string(&result)? };
            println!("{out}");
            Ok(())
        }
        Commands::Lexicon { command: LexiconCommands::Export { output, lexicon } } => {
            let lexicon = resolve_lexicon(lexicon.as_deref())?;
            save_lexicon(&output, &LexiconFile::from_lexicon(&lexicon))?;
            tracing::info!(output = %output.display(), terms = lexicon.len(), "lexicon exported");
            Ok(())
        }
    }
}

fn resolve_lexicon(path: Option<&Path>) -> Result<Lexicon> {
    match path {
        Some(p) => load_lexicon(p),
        None => Ok(Lexicon::bundled()),
    }
}

fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return fs::read_to_string(path).with_context(|| format!("reading {}", path.display()));
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf).context("reading stdin")?;
    Ok(buf)
}
