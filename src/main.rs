//! Command-line batch driver
//!
//! Reads a delimited file of name pairs and writes one
//! `ngram,edit,lcs,lcss,label` row per usable pair.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use name_features::batch::{self, BatchConfig};
use name_features::NormalizationMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file of name pairs, one pair per line
    #[arg(short, long)]
    input: PathBuf,

    /// Output file for feature rows
    #[arg(short, long)]
    output: PathBuf,

    /// Class label written as the last column of every row
    #[arg(short, long, default_value = "positive")]
    label: String,

    /// Input field delimiter (a single ASCII character)
    #[arg(short, long, default_value = ",")]
    delimiter: char,

    /// Case normalization applied to both names before scoring
    #[arg(long, value_enum, default_value = "upper")]
    case: CaseMode,

    /// Worker threads for scoring (0 = all cores)
    #[arg(short, long, default_value_t = 0)]
    workers: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CaseMode {
    /// Uppercase both names
    Upper,
    /// Lowercase both names
    Lower,
    /// Compare names as given
    None,
}

impl From<CaseMode> for NormalizationMode {
    fn from(mode: CaseMode) -> Self {
        match mode {
            CaseMode::Upper => NormalizationMode::Uppercase,
            CaseMode::Lower => NormalizationMode::Lowercase,
            CaseMode::None => NormalizationMode::None,
        }
    }
}

impl Cli {
    fn batch_config(&self) -> Result<BatchConfig> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got {:?}", self.delimiter);
        }

        Ok(BatchConfig {
            label: self.label.clone(),
            delimiter: self.delimiter as u8,
            normalization: self.case.into(),
            workers: self.workers,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("name_features=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.batch_config()?;

    let summary = batch::run_files(&cli.input, &cli.output, &config)
        .with_context(|| format!("feature extraction failed for {}", cli.input.display()))?;

    if summary.skipped() > 0 {
        tracing::info!(
            blank = summary.skipped_blank,
            malformed = summary.skipped_malformed,
            "records skipped"
        );
    }

    Ok(())
}
