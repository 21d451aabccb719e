use thiserror::Error;

/// Failures local to one region selection. None of these corrupt prior
/// state: the selection's working state is cleared before the pipeline
/// runs, so a mid-pipeline error leaves it empty.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unparseable report date {date:?}")]
    ParseFailure { date: String },

    #[error("series has {len} reports, need at least {needed}")]
    InsufficientSeriesLength { len: usize, needed: usize },

    #[error("missing or non-numeric {field} metric on {date}")]
    MalformedMetric {
        field: &'static str,
        date: String,
    },
}
