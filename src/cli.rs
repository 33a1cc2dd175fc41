//! CLI interface for the circulant inverse search
//!
//! Provides command-line interface for:
//! - Running the inverse search over a range of sizes
//! - Re-verifying a results file
//! - Cross-checking schoolbook and Strassen multiplication
//! - Printing a generated circulant

use crate::driver::{run_batch, BatchConfig, SearchMode, DEFAULT_START, DEFAULT_STOP};
use crate::general::Support;
use crate::matrix::SquareMatrix;
use crate::observer::ConsoleObserver;
use crate::results::InversePair;
use crate::sink::{load_results_as, ResultsFile};
use crate::strassen::strassen_multiply;
use crate::triple::OffsetTriple;
use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "circulant-inverse")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Brute-force mod-2 inverses of three-offset binary circulant matrices")]
#[command(
    long_about = "Circulant Inverse - exhaustive search for mod-2 inverses of binary circulants\n\n\
    Every triple of distinct offsets (a, b, c) below N generates an NxN binary circulant\n\
    matrix. For each one, all other triples are tried as candidate inverses: the product\n\
    is reduced mod 2 and compared with the identity. The first match is recorded.\n\
    With --general, each circulant is instead inverted outright over GF(2) and the\n\
    inverse is recorded by the column indices of its first row.\n\n\
    Examples:\n\
      circulant-inverse search --start 4 --stop 33 --output-dir json/out\n\
      circulant-inverse search --general --output-dir json/general\n\
      circulant-inverse verify json/out/8.json --size 8\n\
      circulant-inverse compare --size 32 --left \"15, 28, 31\" --right \"4, 7, 23\"\n\
      circulant-inverse show --size 6 --triple \"0, 1, 4\""
)]
pub struct Cli {
    /// Increase log verbosity (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search every size in [start, stop) and write one JSON file per size
    Search {
        /// First matrix size (inclusive)
        #[arg(long, default_value_t = DEFAULT_START)]
        start: usize,

        /// Last matrix size (exclusive)
        #[arg(long, default_value_t = DEFAULT_STOP)]
        stop: usize,

        /// Directory receiving <size>.json result files
        #[arg(short, long, default_value = "json/out", value_name = "DIR")]
        output_dir: PathBuf,

        /// Do not echo discovered pairs to stdout
        #[arg(short, long)]
        quiet: bool,

        /// Record full GF(2) inverses of any weight as "i, j, ..." index sets
        #[arg(short, long)]
        general: bool,
    },

    /// Re-check every pair of a results file
    Verify {
        /// Results file written by `search`
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Matrix size; defaults to the file stem (e.g. 8 for 8.json)
        #[arg(short, long)]
        size: Option<usize>,

        /// The file holds index sets written by `search --general`
        #[arg(short, long)]
        general: bool,
    },

    /// Compare schoolbook and Strassen products of two circulants
    Compare {
        #[arg(short, long, default_value_t = 32)]
        size: usize,

        /// Left operand offsets, "a, b, c"
        #[arg(short, long, default_value = "15, 28, 31")]
        left: OffsetTriple,

        /// Right operand offsets, "a, b, c"
        #[arg(short, long, default_value = "4, 7, 23")]
        right: OffsetTriple,

        /// Print the operands and both products
        #[arg(short, long)]
        print: bool,
    },

    /// Print the circulant generated by a triple
    Show {
        #[arg(short, long)]
        size: usize,

        /// Offsets, "a, b, c"
        #[arg(short, long)]
        triple: OffsetTriple,
    },
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    execute(cli)
}

/// Install the `tracing` subscriber; `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Dispatch an already parsed command line.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Search {
            start,
            stop,
            output_dir,
            quiet,
            general,
        } => {
            let mode = if general {
                SearchMode::General
            } else {
                SearchMode::Weight3
            };
            let config = BatchConfig {
                start,
                stop,
                output_dir,
                mode,
            };
            config.validate()?;
            info!(start, stop, ?mode, output_dir = %config.output_dir.display(), "starting batch");

            let mut sink = config.sink();
            let mut observer = ConsoleObserver::new(quiet);
            let report = run_batch(&config, &mut sink, &mut observer)?;

            info!(
                sizes = report.outcomes.len(),
                inverses = report.total_inverses(),
                "batch complete"
            );
            let failed: Vec<String> = report
                .failures()
                .map(|o| o.size.to_string())
                .collect();
            if !failed.is_empty() {
                bail!("could not write results for sizes {}", failed.join(", "));
            }
            Ok(())
        }

        Commands::Verify {
            file,
            size,
            general,
        } => {
            let size = match size {
                Some(size) => size,
                None => size_from_file_name(&file)?,
            };
            let results: ResultsFile<OffsetTriple, Support> = if general {
                load_results_as(&file)?
            } else {
                // weight-3 values must parse as triples, then check like any support
                let triples: ResultsFile = load_results_as(&file)?;
                ResultsFile {
                    size: triples.size,
                    results: triples
                        .results
                        .into_iter()
                        .map(|r| InversePair {
                            key: r.key,
                            value: Support::from(r.value),
                        })
                        .collect(),
                }
            };

            if results.size != results.results.len() {
                bail!(
                    "{}: header declares {} records but {} are present",
                    file.display(),
                    results.size,
                    results.results.len()
                );
            }

            let identity = SquareMatrix::identity(size);
            let mut bad = 0usize;
            for record in &results.results {
                if !record.key.fits(size) || !record.value.fits(size) {
                    println!("OUT OF RANGE  {} -> {}", record.key, record.value);
                    bad += 1;
                    continue;
                }
                let product = SquareMatrix::circulant(&record.key, size)
                    .multiply(&record.value.circulant(size))
                    .reduce_mod(2);
                if product != identity {
                    println!("NOT INVERSE   {} -> {}", record.key, record.value);
                    bad += 1;
                }
            }

            println!(
                "{}: {} of {} pairs verified for size {}",
                file.display(),
                results.results.len() - bad,
                results.results.len(),
                size
            );
            if bad > 0 {
                bail!("{bad} invalid pairs in {}", file.display());
            }
            Ok(())
        }

        Commands::Compare {
            size,
            left,
            right,
            print,
        } => {
            let a = checked_circulant(&left, size)?;
            let b = checked_circulant(&right, size)?;
            let fast = strassen_multiply(&a, &b);
            let slow = a.multiply(&b);

            if print {
                println!("{a}\n{b}\n{fast}\n{slow}");
            }

            if fast == slow {
                println!("size {size}: ({left}) x ({right}) schoolbook and Strassen agree");
                Ok(())
            } else {
                bail!("size {size}: ({left}) x ({right}) products differ");
            }
        }

        Commands::Show { size, triple } => {
            print!("{}", checked_circulant(&triple, size)?);
            Ok(())
        }
    }
}

fn checked_circulant(triple: &OffsetTriple, size: usize) -> anyhow::Result<SquareMatrix> {
    if size == 0 || !triple.fits(size) {
        bail!("triple ({triple}) does not fit size {size}");
    }
    Ok(SquareMatrix::circulant(triple, size))
}

fn size_from_file_name(path: &std::path::Path) -> anyhow::Result<usize> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.parse().ok())
        .with_context(|| format!("cannot infer matrix size from {}; pass --size", path.display()))
}
