use tracing::debug;

use crate::aggregate;
use crate::chart::{self, ChartDataset};
use crate::dates;
use crate::error::CoreError;
use crate::models::{RawDailyReport, ReportSummary};
use crate::summary;

/// Everything one successful selection produces for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOutput {
    pub summary: ReportSummary,
    pub dataset: ChartDataset,
}

/// Runs the full pipeline for one region's raw series and returns a fresh
/// result. Nothing is accumulated across calls, so rerunning on the same
/// input always yields the same output.
pub fn compute_selection(raw: Vec<RawDailyReport>) -> Result<SelectionOutput, CoreError> {
    let series = dates::normalize_series(raw)?;
    let summary = summary::latest_summary(&series)?;
    let samples = aggregate::monthly_samples(&series)?;
    let labels = dates::distinct_months(&series);

    Ok(SelectionOutput {
        summary,
        dataset: chart::assemble(labels, &samples),
    })
}

/// Holds the currently displayed selection and a request generation
/// counter. Each new selection bumps the generation before its fetch is
/// issued; a result arriving with an older generation is dropped, so the
/// last selection always wins regardless of completion order.
#[derive(Debug, Default)]
pub struct Dashboard {
    generation: u64,
    current: Option<SelectionOutput>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new selection: clears the displayed output and returns the
    /// generation token the eventual result must present.
    pub fn begin_selection(&mut self) -> u64 {
        self.generation += 1;
        self.current = None;
        self.generation
    }

    /// Applies a fetched series for the given generation. Stale results are
    /// ignored; a failed computation leaves the cleared state in place and
    /// the error is returned for the caller's notice.
    pub fn apply(
        &mut self,
        generation: u64,
        raw: Vec<RawDailyReport>,
    ) -> Result<(), CoreError> {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale selection result");
            return Ok(());
        }

        self.current = Some(compute_selection(raw)?);
        Ok(())
    }

    pub fn current(&self) -> Option<&SelectionOutput> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(date: &str, confirmed: i64) -> RawDailyReport {
        RawDailyReport {
            date: date.to_string(),
            confirmed: Some(confirmed),
            deaths: Some(confirmed / 10),
            recovered: Some(confirmed / 2),
            active: Some(confirmed / 4),
        }
    }

    fn two_month_series() -> Vec<RawDailyReport> {
        vec![
            raw("2020-03-30T00:00:00Z", 100),
            raw("2020-03-31T00:00:00Z", 120),
            raw("2020-04-01T00:00:00Z", 140),
        ]
    }

    #[test]
    fn compute_selection_wires_summary_and_chart_together() {
        let output = compute_selection(two_month_series()).unwrap();

        assert_eq!(output.summary.confirmed_total, 140);
        assert_eq!(output.summary.new_confirmed, 20);
        assert_eq!(output.dataset.labels, vec!["March", "April"]);
        assert_eq!(output.dataset.series[0].data, vec![120, 140]);
    }

    #[test]
    fn stale_generation_results_are_dropped() {
        let mut dashboard = Dashboard::new();
        let first = dashboard.begin_selection();
        let second = dashboard.begin_selection();

        dashboard.apply(first, two_month_series()).unwrap();
        assert!(dashboard.current().is_none());

        dashboard.apply(second, two_month_series()).unwrap();
        assert!(dashboard.current().is_some());
    }

    #[test]
    fn failed_selection_leaves_cleared_state() {
        let mut dashboard = Dashboard::new();
        let generation = dashboard.begin_selection();
        dashboard.apply(generation, two_month_series()).unwrap();
        assert!(dashboard.current().is_some());

        let generation = dashboard.begin_selection();
        // State clears as soon as the new selection begins.
        assert!(dashboard.current().is_none());

        let err = dashboard
            .apply(generation, vec![raw("garbage", 1), raw("2020-04-01T00:00:00Z", 2)])
            .unwrap_err();
        assert!(matches!(err, CoreError::ParseFailure { .. }));
        assert!(dashboard.current().is_none());
    }

    #[test]
    fn selection_of_short_series_reports_insufficient_length() {
        let err = compute_selection(vec![raw("2020-03-01T00:00:00Z", 5)]).unwrap_err();
        assert_eq!(
            err,
            CoreError::InsufficientSeriesLength { len: 1, needed: 2 }
        );
    }
}
