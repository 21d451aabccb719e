use serde::Serialize;

use crate::models::MonthlySample;

/// One named line on the chart, with the feed dashboard's fixed styling
/// carried through as static configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub label: &'static str,
    pub data: Vec<i64>,
    #[serde(rename = "backgroundColor")]
    pub background_color: &'static str,
    #[serde(rename = "borderColor")]
    pub border_color: &'static str,
}

/// The structure the charting surface consumes: a shared month-label axis
/// plus four parallel metric series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub labels: Vec<&'static str>,
    pub series: Vec<ChartSeries>,
    pub legend: bool,
    #[serde(rename = "chartType")]
    pub chart_type: &'static str,
}

const STYLES: [(&str, &str, &str); 4] = [
    ("Confirmed", "rgba(204,0,0,0.3)", "rgba(204,0,0,0.8)"),
    ("Deaths", "rgba(17,17,17,0.3)", "rgba(17,17,17,0.8)"),
    ("Recovered", "rgba(51,102,255,0.3)", "rgba(51,102,255,0.8)"),
    ("Active", "rgba(255,255,0,0.3)", "rgba(255,255,0,0.8)"),
];

/// Packages the label axis and the monthly snapshots into the chart input.
///
/// Labels and samples are produced by independent passes over the same
/// series, so their lengths agree for any well-formed single-year input.
/// The assembler does not re-check that; a multi-year series can mislabel
/// because month aggregation ignores the year.
pub fn assemble(labels: Vec<&'static str>, samples: &[MonthlySample]) -> ChartDataset {
    let metric = |pick: fn(&MonthlySample) -> i64| samples.iter().map(pick).collect::<Vec<i64>>();

    let data = [
        metric(|s| s.confirmed),
        metric(|s| s.deaths),
        metric(|s| s.recovered),
        metric(|s| s.active),
    ];

    let series = STYLES
        .iter()
        .zip(data)
        .map(|(&(label, background_color, border_color), data)| ChartSeries {
            label,
            data,
            background_color,
            border_color,
        })
        .collect();

    ChartDataset {
        labels,
        series,
        legend: true,
        chart_type: "line",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(month_label: &'static str, confirmed: i64) -> MonthlySample {
        MonthlySample {
            month_label,
            confirmed,
            deaths: confirmed / 10,
            recovered: confirmed / 2,
            active: confirmed / 4,
        }
    }

    #[test]
    fn assembles_four_named_series_over_the_label_axis() {
        let samples = vec![sample("March", 100), sample("April", 200)];
        let dataset = assemble(vec!["March", "April"], &samples);

        assert_eq!(dataset.labels, vec!["March", "April"]);
        assert_eq!(dataset.series.len(), 4);

        let labels: Vec<&str> = dataset.series.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Confirmed", "Deaths", "Recovered", "Active"]);

        assert_eq!(dataset.series[0].data, vec![100, 200]);
        assert_eq!(dataset.series[1].data, vec![10, 20]);
        assert_eq!(dataset.series[2].data, vec![50, 100]);
        assert_eq!(dataset.series[3].data, vec![25, 50]);

        for series in &dataset.series {
            assert_eq!(series.data.len(), dataset.labels.len());
        }
    }

    #[test]
    fn serializes_with_chart_facing_field_names() {
        let dataset = assemble(vec!["May"], &[sample("May", 7)]);
        let json = serde_json::to_value(&dataset).unwrap();

        assert_eq!(json["chartType"], "line");
        assert_eq!(json["legend"], true);
        assert_eq!(json["series"][0]["backgroundColor"], "rgba(204,0,0,0.3)");
        assert_eq!(json["series"][0]["borderColor"], "rgba(204,0,0,0.8)");
    }
}
