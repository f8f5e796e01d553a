use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wordplay_checker::{check, split_words, LexiconIndex, Verdict};
use wordplay_protocol::Lexicon;

#[derive(Parser)]
#[command(author, version, about = "Builds and exercises Wordplay lexicons")]
struct Cli {
    /// Log filter, e.g. `debug` or `wordplay_checker=trace`
    #[arg(long, env = "WORDPLAY_LOG", default_value = "info", global = true)]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a JSON lexicon to the rkyv binary the browser loads
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Write the built-in lexicon as JSON, as a starting point for edits
    Default {
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Check a typed sentence against the required word order
    Check {
        /// JSON or compiled lexicon; the built-in word list when omitted
        #[arg(short, long, value_name = "FILE")]
        lexicon: Option<PathBuf>,

        sentence: String,
    },
}

fn parse_json_lexicon(json: &str) -> anyhow::Result<Lexicon> {
    let lexicon: Lexicon = serde_json::from_str(json).context("lexicon JSON is malformed")?;
    // Reject duplicates before anything gets written
    LexiconIndex::from_lexicon(&lexicon)?;
    Ok(lexicon)
}

fn compile_lexicon(lexicon: &Lexicon) -> anyhow::Result<rkyv::AlignedVec> {
    rkyv::to_bytes::<_, 256>(lexicon).map_err(|e| anyhow!("rkyv serialization failed: {}", e))
}

fn load_index(path: &Path) -> anyhow::Result<LexiconIndex> {
    if path.extension().is_some_and(|ext| ext == "json") {
        let json = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
        let lexicon = parse_json_lexicon(&json)?;
        return Ok(LexiconIndex::from_lexicon(&lexicon)?);
    }

    let bytes = fs::read(path).with_context(|| format!("reading {:?}", path))?;
    Ok(LexiconIndex::from_archive(&bytes)?)
}

fn describe(verdict: &Verdict) -> String {
    let mut out = verdict.message().to_string();
    if let Verdict::Incorrect { mismatches } = verdict {
        for m in mismatches {
            let found = m.found.map_or("unknown word".to_string(), |r| r.to_string());
            out.push_str(&format!(
                "\n  #{} '{}': expected {}, found {}",
                m.position + 1,
                m.word,
                m.expected,
                found
            ));
        }
    }
    out
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Compile { input, output } => {
            println!("📖 Reading JSON from {:?}...", input);
            let json = fs::read_to_string(&input).with_context(|| format!("reading {:?}", input))?;
            let lexicon = parse_json_lexicon(&json)?;

            println!(
                "⚙️  Compiling lexicon version {} with {} words...",
                lexicon.version,
                lexicon.entries.len()
            );
            let bytes = compile_lexicon(&lexicon)?;

            fs::write(&output, &bytes).with_context(|| format!("writing {:?}", output))?;
            tracing::info!(bytes = bytes.len(), "archive written");
            println!("✅ Success! Binary written to {:?}", output);
        }
        Command::Default { output } => {
            let json = serde_json::to_string_pretty(&Lexicon::builtin())?;
            fs::write(&output, json).with_context(|| format!("writing {:?}", output))?;
            println!("✅ Built-in lexicon written to {:?}", output);
        }
        Command::Check { lexicon, sentence } => {
            let index = match lexicon {
                Some(path) => load_index(&path)?,
                None => LexiconIndex::builtin(),
            };

            let words = split_words(&sentence);
            tracing::debug!(?words, "sentence split");

            let verdict = check(&words, &index);
            println!("{}", describe(&verdict));

            if !verdict.is_correct() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
