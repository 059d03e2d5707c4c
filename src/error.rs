use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading the intake dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("failed to open dataset {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("malformed dataset: {0}")]
    Parse(#[from] csv::Error),
}

/// Failures while computing the intakes-per-doctor metric.
#[derive(Error, Debug)]
pub enum MetricError {
    #[error("no record found for quarter {quarter} week {week}")]
    NoMatch { quarter: String, week: i64 },

    #[error("{count} records match quarter {quarter} week {week}, expected exactly one")]
    Ambiguous {
        quarter: String,
        week: i64,
        count: usize,
    },

    #[error("doctor count is zero, intakes per doctor is undefined")]
    ZeroDoctors,
}
