use crate::error::CoreError;
use crate::models::{DailyReport, ReportSummary};

/// Current totals come from the most recent report; the new-case delta is
/// confirmed(last) minus confirmed(second to last). A series shorter than
/// two reports has no defined delta and is reported as such rather than
/// coerced to zero.
pub fn latest_summary(series: &[DailyReport]) -> Result<ReportSummary, CoreError> {
    if series.len() < 2 {
        return Err(CoreError::InsufficientSeriesLength {
            len: series.len(),
            needed: 2,
        });
    }

    let latest = &series[series.len() - 1];
    let previous = &series[series.len() - 2];

    Ok(ReportSummary {
        confirmed_total: latest.confirmed,
        deaths_total: latest.deaths,
        recovered_total: latest.recovered,
        active_total: latest.active,
        new_confirmed: latest.confirmed - previous.confirmed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn report(day: u32, confirmed: i64) -> DailyReport {
        DailyReport {
            date: NaiveDate::from_ymd_opt(2020, 6, day).unwrap(),
            confirmed,
            deaths: confirmed / 20,
            recovered: confirmed / 3,
            active: confirmed / 2,
        }
    }

    #[test]
    fn totals_come_from_the_last_report() {
        let series = vec![report(1, 100), report(2, 120)];
        let summary = latest_summary(&series).unwrap();

        assert_eq!(summary.confirmed_total, 120);
        assert_eq!(summary.deaths_total, 6);
        assert_eq!(summary.recovered_total, 40);
        assert_eq!(summary.active_total, 60);
        assert_eq!(summary.new_confirmed, 20);
    }

    #[test]
    fn delta_can_be_negative_on_corrected_feeds() {
        let series = vec![report(1, 150), report(2, 140)];
        let summary = latest_summary(&series).unwrap();
        assert_eq!(summary.new_confirmed, -10);
    }

    #[test]
    fn length_one_series_is_an_error() {
        let series = vec![report(1, 100)];
        let err = latest_summary(&series).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientSeriesLength { len: 1, needed: 2 }
        );
    }

    #[test]
    fn empty_series_is_an_error() {
        let err = latest_summary(&[]).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientSeriesLength { len: 0, needed: 2 }
        );
    }
}
