//! Batch feature extraction over a delimited name-pair file
//!
//! Reads two-field records, skips the ones that cannot be scored, computes a
//! `FeatureVector` per remaining pair and writes one labeled CSV row each.
//! A run is all-or-nothing: any I/O or scoring failure aborts it.

use crate::algorithms::normalize::{normalize_pair, NormalizationMode};
use crate::error::BatchError;
use crate::features::{FeatureVector, LabeledRow};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Minimum number of pairs for parallel scoring.
///
/// Below this, thread pool coordination costs more than the comparisons.
pub const PARALLEL_THRESHOLD: usize = 100;

/// Batch run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Class label written as the last column of every row
    pub label: String,
    /// Input field delimiter
    pub delimiter: u8,
    /// Case normalization applied to both fields before scoring
    pub normalization: NormalizationMode,
    /// Worker threads for scoring; 0 uses the global rayon pool
    pub workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            label: "positive".to_string(),
            delimiter: b',',
            normalization: NormalizationMode::default(),
            workers: 0,
        }
    }
}

/// A normalized name pair ready for scoring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePair {
    /// 1-based input line the pair came from
    pub line: u64,
    pub first: String,
    pub second: String,
}

/// Counters for one batch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub records_read: usize,
    pub rows_written: usize,
    /// Records with an empty field
    pub skipped_blank: usize,
    /// Records without exactly two fields
    pub skipped_malformed: usize,
}

impl BatchSummary {
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.skipped_blank + self.skipped_malformed
    }
}

/// Read and normalize every usable pair from `reader`.
///
/// Each input line is one record; quote characters are ordinary name
/// characters. Malformed and empty-field records are counted in `summary`
/// and skipped. Whitespace-only fields are kept and scored as given.
pub fn read_pairs<R: Read>(
    reader: R,
    config: &BatchConfig,
    summary: &mut BatchSummary,
) -> Result<Vec<NamePair>, BatchError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .delimiter(config.delimiter)
        .from_reader(reader);

    let mut pairs = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        summary.records_read += 1;
        let line = record
            .position()
            .map_or(summary.records_read as u64, |pos| pos.line());

        if record.len() != 2 {
            summary.skipped_malformed += 1;
            debug!(line, fields = record.len(), "skipping malformed record");
            continue;
        }
        if record[0].is_empty() || record[1].is_empty() {
            summary.skipped_blank += 1;
            debug!(line, "skipping record with blank field");
            continue;
        }

        let (first, second) = normalize_pair(&record[0], &record[1], config.normalization);
        pairs.push(NamePair { line, first, second });
    }

    Ok(pairs)
}

fn score_pair(pair: &NamePair) -> Result<FeatureVector, BatchError> {
    FeatureVector::compute(&pair.first, &pair.second).map_err(|source| BatchError::Feature {
        line: pair.line,
        source,
    })
}

/// Score every pair, preserving input order.
pub fn score_pairs(pairs: &[NamePair], config: &BatchConfig) -> Result<Vec<FeatureVector>, BatchError> {
    if pairs.len() < PARALLEL_THRESHOLD {
        return pairs.iter().map(score_pair).collect();
    }

    if config.workers > 0 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .build()?;
        pool.install(|| pairs.par_iter().map(score_pair).collect())
    } else {
        pairs.par_iter().map(score_pair).collect()
    }
}

/// Write one `ngram,edit,lcs,lcss,label` line per feature vector.
///
/// Returns the number of rows written.
pub fn write_rows<W: Write>(
    writer: W,
    rows: &[FeatureVector],
    label: &str,
) -> Result<usize, BatchError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for features in rows {
        csv_writer.serialize(LabeledRow::new(features, label))?;
    }
    csv_writer.flush()?;

    Ok(rows.len())
}

/// Read pairs from `reader`, score them and write labeled rows to `writer`.
pub fn run<R: Read, W: Write>(
    reader: R,
    writer: W,
    config: &BatchConfig,
) -> Result<BatchSummary, BatchError> {
    let mut summary = BatchSummary::default();

    let pairs = read_pairs(reader, config, &mut summary)?;
    if summary.skipped_malformed > 0 {
        warn!(
            count = summary.skipped_malformed,
            "skipped records without exactly two fields"
        );
    }

    debug!(pairs = pairs.len(), workers = config.workers, "scoring name pairs");
    let features = score_pairs(&pairs, config)?;
    summary.rows_written = write_rows(writer, &features, &config.label)?;

    info!(
        read = summary.records_read,
        written = summary.rows_written,
        skipped = summary.skipped(),
        label = %config.label,
        "batch complete"
    );
    Ok(summary)
}

/// File-based `run`: opens `input`, creates (or truncates) `output`.
pub fn run_files(input: &Path, output: &Path, config: &BatchConfig) -> Result<BatchSummary, BatchError> {
    let reader = File::open(input).map_err(|source| BatchError::Open {
        path: input.to_path_buf(),
        source,
    })?;
    let writer = File::create(output).map_err(|source| BatchError::Create {
        path: output.to_path_buf(),
        source,
    })?;

    info!(input = %input.display(), output = %output.display(), "starting batch");
    run(BufReader::new(reader), BufWriter::new(writer), config)
}
