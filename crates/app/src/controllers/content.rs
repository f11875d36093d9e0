use masthead_client::analytics::{PlatformTotal, PostSummary};
use masthead_client::{ApiClient, ApiError};
use masthead_core::domain::charts::{MergedChart, NamedSeries, SeriesPoint, merge_series};
use masthead_core::domain::pagination::PaginationControls;

use crate::session::{Session, ViewKey};

#[derive(Debug, Clone)]
pub struct ContentModel {
    pub posts: Vec<PostSummary>,
    pub pagination: Option<PaginationControls>,
}

/// Per-post drill-down: views and shares merged onto one axis plus the
/// platform breakdown.
#[derive(Debug, Clone)]
pub struct PostDetailModel {
    pub slug: String,
    pub title: Option<String>,
    pub date: Option<String>,
    pub total_views: u64,
    pub chart: MergedChart,
    pub platform_totals: Vec<PlatformTotal>,
}

pub async fn load(
    client: &ApiClient,
    session: &mut Session,
    page: u32,
) -> Result<ContentModel, ApiError> {
    let token = session.begin_load(ViewKey::Content);
    let response = client.analytics_posts(page).await?;
    session.apply_page(token, response.page, response.total_pages);
    Ok(ContentModel {
        posts: response.posts,
        pagination: PaginationControls::from_state(session.page_state(ViewKey::Content)),
    })
}

pub async fn load_detail(client: &ApiClient, slug: &str) -> Result<PostDetailModel, ApiError> {
    let detail = client.post_detail(slug).await?;
    let views = NamedSeries {
        label: "Views".to_string(),
        points: detail
            .daily_views
            .iter()
            .map(|d| SeriesPoint {
                date: d.date,
                value: d.views,
            })
            .collect(),
    };
    let shares = NamedSeries {
        label: "Shares".to_string(),
        points: detail
            .daily_shares
            .iter()
            .map(|d| SeriesPoint {
                date: d.date,
                value: d.shares,
            })
            .collect(),
    };
    Ok(PostDetailModel {
        slug: slug.to_string(),
        title: detail.title,
        date: detail.date,
        total_views: detail.total_views,
        chart: merge_series(&[views, shares]),
        platform_totals: detail.shares_platform,
    })
}
