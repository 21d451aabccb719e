use chrono::{Datelike, NaiveDate};

use crate::dates::month_label;
use crate::error::CoreError;
use crate::models::{DailyReport, MonthlySample};

/// True when `a` belongs to a strictly earlier month than `b`.
///
/// Compares month number only and ignores the year, so a series spanning
/// more than twelve months aliases months across years. That matches the
/// upstream feed's charting behavior; a year-aware comparison would be a
/// one-line swap here without touching the aggregation loop.
fn month_precedes(a: NaiveDate, b: NaiveDate) -> bool {
    a.month0() < b.month0()
}

fn sample_from(report: &DailyReport) -> MonthlySample {
    MonthlySample {
        month_label: month_label(report.date),
        confirmed: report.confirmed,
        deaths: report.deaths,
        recovered: report.recovered,
        active: report.active,
    }
}

/// Walks a chronologically ordered series and emits one snapshot per month,
/// taken from the last reported day belonging to that month.
///
/// The final report is always emitted as the closing sample. When the
/// series ends one day after a month boundary, that produces a trailing
/// near-duplicate of the boundary sample; the quirk is kept deliberately
/// and pinned by a test.
pub fn monthly_samples(series: &[DailyReport]) -> Result<Vec<MonthlySample>, CoreError> {
    if series.is_empty() {
        return Err(CoreError::InsufficientSeriesLength { len: 0, needed: 1 });
    }

    let mut samples = Vec::new();

    for pair in series.windows(2) {
        if month_precedes(pair[0].date, pair[1].date) {
            samples.push(sample_from(&pair[0]));
        }
    }

    push_final_sample(series, &mut samples);
    Ok(samples)
}

// Unconditional closing emission, kept as its own step so changing the
// trailing-duplicate behavior stays a one-line edit.
fn push_final_sample(series: &[DailyReport], samples: &mut Vec<MonthlySample>) {
    if let Some(last) = series.last() {
        samples.push(sample_from(last));
    }
}
