use masthead_client::analytics::{Overview, PlatformTotal};
use masthead_client::{ApiClient, ApiError};
use masthead_core::domain::charts::{
    MergedChart, NamedSeries, PlatformRow, PointEmphasis, SeriesPoint, merge_series,
    pivot_platform_rows, post_markers,
};

/// Everything the dashboard surface renders in one pass. Rebuilt wholesale on
/// every load, including the periodic poll.
#[derive(Debug, Clone)]
pub struct DashboardModel {
    pub overview: Overview,
    /// Views and total shares aligned on one date axis.
    pub main_chart: MergedChart,
    /// Dates with published posts, emphasized on the views line.
    pub markers: Vec<PointEmphasis>,
    /// Per-platform daily shares, present only when the stacked toggle is on.
    pub platform_chart: Option<MergedChart>,
    pub platform_totals: Vec<PlatformTotal>,
}

pub async fn load(client: &ApiClient, platform_shares: bool) -> Result<DashboardModel, ApiError> {
    let overview = client.analytics_overview().await?;
    let days = client.analytics_chart().await?;
    let platform_totals = client.shares_by_platform().await?;

    let views = NamedSeries {
        label: "Views".to_string(),
        points: days
            .iter()
            .map(|d| SeriesPoint {
                date: d.date,
                value: d.views,
            })
            .collect(),
    };
    let shares = NamedSeries {
        label: "Shares".to_string(),
        points: days
            .iter()
            .map(|d| SeriesPoint {
                date: d.date,
                value: d.shares,
            })
            .collect(),
    };
    let main_chart = merge_series(&[views, shares]);

    let marker_input: Vec<_> = days
        .iter()
        .map(|d| (d.date, d.new_posts.clone()))
        .collect();
    let markers = post_markers(&marker_input);

    let platform_chart = if platform_shares {
        let rows: Vec<PlatformRow> = client
            .daily_shares_by_platform()
            .await?
            .into_iter()
            .map(|d| PlatformRow {
                date: d.date,
                platform: d.platform,
                count: d.count,
            })
            .collect();
        Some(pivot_platform_rows(&rows))
    } else {
        None
    };

    Ok(DashboardModel {
        overview,
        main_chart,
        markers,
        platform_chart,
        platform_totals,
    })
}
