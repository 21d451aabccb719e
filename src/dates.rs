use chrono::{DateTime, Datelike, NaiveDate};

use crate::error::CoreError;
use crate::models::{DailyReport, RawDailyReport};

/// Canonical month names, indexed by zero-based month number.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parses a feed date. The feed sends RFC 3339 timestamps
/// (`2020-01-22T00:00:00Z`); plain `YYYY-MM-DD` is accepted too. Only the
/// calendar day is kept.
pub fn parse_report_date(raw: &str) -> Result<NaiveDate, CoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
        .map_err(|_| CoreError::ParseFailure {
            date: raw.to_string(),
        })
}

/// Renders the canonical `MM/DD/YYYY` display form. The represented day
/// never changes, only the textual shape.
pub fn canonical_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.month(), date.day(), date.year())
}

pub fn month_label(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Validates a raw series into typed reports. The first bad date or
/// missing metric aborts the whole selection.
pub fn normalize_series(raw: Vec<RawDailyReport>) -> Result<Vec<DailyReport>, CoreError> {
    let mut reports = Vec::with_capacity(raw.len());

    for entry in raw {
        let date = parse_report_date(&entry.date)?;
        reports.push(DailyReport {
            date,
            confirmed: require_metric(entry.confirmed, "confirmed", &entry.date)?,
            deaths: require_metric(entry.deaths, "deaths", &entry.date)?,
            recovered: require_metric(entry.recovered, "recovered", &entry.date)?,
            active: require_metric(entry.active, "active", &entry.date)?,
        });
    }

    Ok(reports)
}

fn require_metric(
    value: Option<i64>,
    field: &'static str,
    date: &str,
) -> Result<i64, CoreError> {
    value.ok_or_else(|| CoreError::MalformedMetric {
        field,
        date: date.to_string(),
    })
}

/// Ordered distinct month labels across the series, first occurrence wins.
/// This replaces the running month-set the chart labels used to be built
/// from; it is a separate fold so date parsing stays side-effect free.
pub fn distinct_months(series: &[DailyReport]) -> Vec<&'static str> {
    let mut months: Vec<&'static str> = Vec::new();

    for report in series {
        let label = month_label(report.date);
        if !months.contains(&label) {
            months.push(label);
        }
    }

    months
}
