use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pidex::corpus::{Corpus, DIGITS_EXT, INDEX_EXT};
use pidex::query::{DEFAULT_SEQ_THRESHOLD, SearchConfig};
use pidex::utils::encoding::{pack_stream, unpack_stream};
use std::fs;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pidex")]
#[command(about = "Substring search over a packed corpus of pi digits")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the first occurrence of a digit string
    Search {
        /// Digit string to look for
        query: String,

        /// Zero-based offset to start searching from
        #[arg(default_value_t = 0)]
        start: usize,

        /// Base name of the corpus files (<base>.4.bin / <base>.4.idx)
        #[arg(short, long)]
        corpus: PathBuf,

        /// Query lengths above this use the suffix index
        #[arg(long, default_value_t = DEFAULT_SEQ_THRESHOLD)]
        seq_threshold: usize,

        /// Emit the result as a JSON object
        #[arg(long)]
        json: bool,
    },
    /// Count occurrences across the whole corpus
    Count {
        /// Digit string to count
        query: String,

        /// Base name of the corpus files
        #[arg(short, long)]
        corpus: PathBuf,
    },
    /// Print digits starting at an offset
    Digits {
        /// Zero-based offset of the first digit
        start: usize,

        /// Number of digits to print
        length: usize,

        /// Base name of the corpus files
        #[arg(short, long)]
        corpus: PathBuf,
    },
    /// Show corpus statistics
    Stats {
        /// Base name of the corpus files
        #[arg(short, long)]
        corpus: PathBuf,
    },
    /// Pack ASCII digits from stdin into BCD on stdout
    Pack,
    /// Unpack BCD from stdin into ASCII digits on stdout
    Unpack,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            start,
            corpus,
            seq_threshold,
            json,
        } => {
            let handle = open_corpus_with(&corpus, SearchConfig { seq_threshold })?;
            let result = handle.search(start, &query)?;
            if json {
                // The response shape the legacy web front end served.
                let context = 20;
                let before_start = result.position.saturating_sub(context);
                let response = serde_json::json!({
                    "k": query,
                    "st": start,
                    "status": if result.found { "found" } else { "notfound" },
                    "p": result.position,
                    "c": result.match_count,
                    "db": if result.found {
                        handle.digit_range(before_start, result.position - before_start)
                    } else {
                        String::new()
                    },
                    "da": if result.found {
                        handle.digit_range(result.position + query.len(), context)
                    } else {
                        String::new()
                    },
                });
                println!("{response}");
            } else {
                println!("Found?  : {}", result.found);
                println!("Pos?    : {}", result.position);
                println!("Matches : {}", result.match_count);
            }
            handle.close();
        }
        Commands::Count { query, corpus } => {
            let handle = open_corpus(&corpus)?;
            println!("{}", handle.count(&query)?);
            handle.close();
        }
        Commands::Digits {
            start,
            length,
            corpus,
        } => {
            let handle = open_corpus(&corpus)?;
            println!("{}", handle.digit_range(start, length));
            handle.close();
        }
        Commands::Stats { corpus } => {
            let handle = open_corpus(&corpus)?;
            show_stats(&corpus, &handle)?;
            handle.close();
        }
        Commands::Pack => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            pack_stream(BufReader::new(stdin), BufWriter::new(stdout))
                .context("packing digits from stdin")?;
        }
        Commands::Unpack => {
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            unpack_stream(BufReader::new(stdin), BufWriter::new(stdout))
                .context("unpacking digits from stdin")?;
        }
    }

    Ok(())
}

fn open_corpus(base: &Path) -> Result<Corpus> {
    open_corpus_with(base, SearchConfig::default())
}

fn open_corpus_with(base: &Path, config: SearchConfig) -> Result<Corpus> {
    Corpus::open_with_config(base, config)
        .with_context(|| format!("opening corpus {}", base.display()))
}

fn show_stats(base: &Path, handle: &Corpus) -> Result<()> {
    println!("Corpus Statistics");
    println!("=================");
    println!();
    println!("Base name:     {}", base.display());
    println!("Digit count:   {}", handle.digit_count());

    for ext in [DIGITS_EXT, INDEX_EXT] {
        let mut name = base.as_os_str().to_os_string();
        name.push(ext);
        let path = PathBuf::from(name);
        if let Ok(meta) = fs::metadata(&path) {
            println!("{:14}{} ({} bytes)", format!("{ext}:"), path.display(), meta.len());
        }
    }

    println!();
    println!("First digits:  {}", handle.digit_range(0, 32));

    Ok(())
}
