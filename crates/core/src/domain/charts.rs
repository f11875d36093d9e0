use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::Serialize;

/// One observation in a single metric's time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone)]
pub struct NamedSeries {
    pub label: String,
    pub points: Vec<SeriesPoint>,
}

/// A flat `(date, platform, count)` row, as the per-platform shares endpoint
/// reports them.
#[derive(Debug, Clone)]
pub struct PlatformRow {
    pub date: NaiveDate,
    pub platform: String,
    pub count: f64,
}

/// Heterogeneous series aligned onto one date axis. A value of `0.0` means
/// the series had no recorded activity on that date, which is distinct from
/// the date being absent from the axis.
#[derive(Debug, Clone, Serialize)]
pub struct MergedChart {
    pub dates: Vec<NaiveDate>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub label: String,
    pub values: Vec<f64>,
}

/// Aligns 1..N named series onto the sorted union of their dates,
/// zero-filling dates a series does not cover. Zero series in, empty chart
/// out.
pub fn merge_series(series: &[NamedSeries]) -> MergedChart {
    let dates: Vec<NaiveDate> = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.date))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let datasets = series
        .iter()
        .map(|s| {
            let by_date: HashMap<NaiveDate, f64> =
                s.points.iter().map(|p| (p.date, p.value)).collect();
            Dataset {
                label: s.label.clone(),
                values: dates
                    .iter()
                    .map(|date| by_date.get(date).copied().unwrap_or(0.0))
                    .collect(),
            }
        })
        .collect();

    MergedChart { dates, datasets }
}

/// Pivots flat `(date, platform, count)` rows into one dataset per platform,
/// aligned to the shared date axis. Platform order follows first appearance
/// in the input so stacked rendering stays stable across refreshes.
pub fn pivot_platform_rows(rows: &[PlatformRow]) -> MergedChart {
    let mut platforms: Vec<String> = Vec::new();
    for row in rows {
        if !platforms.contains(&row.platform) {
            platforms.push(row.platform.clone());
        }
    }
    let series: Vec<NamedSeries> = platforms
        .into_iter()
        .map(|platform| NamedSeries {
            points: rows
                .iter()
                .filter(|row| row.platform == platform)
                .map(|row| SeriesPoint {
                    date: row.date,
                    value: row.count,
                })
                .collect(),
            label: platform,
        })
        .collect();
    merge_series(&series)
}

/// Per-date marker for the dashboard's views line: dates on which posts were
/// published get an emphasized point and their titles in the tooltip.
#[derive(Debug, Clone, Serialize)]
pub struct PointEmphasis {
    pub date: NaiveDate,
    pub post_titles: Vec<String>,
}

pub fn post_markers(days: &[(NaiveDate, Vec<String>)]) -> Vec<PointEmphasis> {
    days.iter()
        .filter(|(_, titles)| !titles.is_empty())
        .map(|(date, titles)| PointEmphasis {
            date: *date,
            post_titles: titles.clone(),
        })
        .collect()
}
