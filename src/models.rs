use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One day's cumulative metrics exactly as the feed delivers them.
///
/// Metrics decode leniently: a missing, null, or non-numeric field becomes
/// `None` here and surfaces as a `MalformedMetric` error during
/// normalization instead of failing inside the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDailyReport {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Confirmed", default, deserialize_with = "lenient_metric")]
    pub confirmed: Option<i64>,
    #[serde(rename = "Deaths", default, deserialize_with = "lenient_metric")]
    pub deaths: Option<i64>,
    #[serde(rename = "Recovered", default, deserialize_with = "lenient_metric")]
    pub recovered: Option<i64>,
    #[serde(rename = "Active", default, deserialize_with = "lenient_metric")]
    pub active: Option<i64>,
}

// Accepts any JSON value and keeps only integer numbers, so a malformed
// feed (e.g. `"Confirmed": "12"`) is classified downstream rather than
// aborting the whole series decode.
fn lenient_metric<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64())
}

/// A validated daily report. The date carries day granularity only; the
/// `active` count can go negative in malformed feeds and is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub confirmed: i64,
    pub deaths: i64,
    pub recovered: i64,
    pub active: i64,
}

/// Snapshot metrics representing one calendar month on the chart axis,
/// taken from the last reported day belonging to that month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySample {
    pub month_label: &'static str,
    pub confirmed: i64,
    pub deaths: i64,
    pub recovered: i64,
    pub active: i64,
}

/// Current totals plus the day-over-day new-case delta, derived from the
/// two most recent reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub confirmed_total: i64,
    pub deaths_total: i64,
    pub recovered_total: i64,
    pub active_total: i64,
    pub new_confirmed: i64,
}

/// A selectable region from the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRef {
    #[serde(rename = "Country")]
    pub name: String,
    #[serde(rename = "Slug")]
    pub slug: String,
}
