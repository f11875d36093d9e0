use chrono::NaiveDate;
use serde::Deserialize;

use crate::{ApiClient, ApiError};

#[derive(Debug, Clone, Deserialize)]
pub struct Overview {
    #[serde(default)]
    pub total_unique_views: u64,
    #[serde(default)]
    pub total_views: u64,
    #[serde(default)]
    pub total_shares: u64,
    #[serde(default)]
    pub visitors_30d: u64,
    #[serde(default)]
    pub top_posts: Vec<TopPost>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopPost {
    pub slug: String,
    pub title: String,
    pub views: u64,
}

/// One day on the dashboard's main chart; `new_posts` carries the titles
/// published that day.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartDay {
    pub date: NaiveDate,
    pub views: f64,
    pub shares: f64,
    #[serde(default)]
    pub new_posts: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformDay {
    pub date: NaiveDate,
    pub platform: String,
    pub count: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlatformTotal {
    pub platform: String,
    pub count: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostsPage {
    pub posts: Vec<PostSummary>,
    pub page: u32,
    pub total_pages: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub image: Option<String>,
    pub date: Option<String>,
    pub views: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostDetail {
    pub title: Option<String>,
    pub date: Option<String>,
    pub total_views: u64,
    #[serde(default)]
    pub daily_views: Vec<DailyViews>,
    #[serde(default)]
    pub daily_shares: Vec<DailyShares>,
    #[serde(default)]
    pub shares_platform: Vec<PlatformTotal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyViews {
    pub date: NaiveDate,
    pub views: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DailyShares {
    pub date: NaiveDate,
    pub shares: f64,
}

impl ApiClient {
    pub async fn analytics_overview(&self) -> Result<Overview, ApiError> {
        self.get_json("/api/analytics/overview", &[]).await
    }

    pub async fn analytics_chart(&self) -> Result<Vec<ChartDay>, ApiError> {
        self.get_json("/api/analytics/chart", &[]).await
    }

    pub async fn daily_shares_by_platform(&self) -> Result<Vec<PlatformDay>, ApiError> {
        self.get_json("/api/analytics/daily_shares_platform", &[]).await
    }

    pub async fn shares_by_platform(&self) -> Result<Vec<PlatformTotal>, ApiError> {
        self.get_json("/api/analytics/shares_by_platform", &[]).await
    }

    pub async fn analytics_posts(&self, page: u32) -> Result<PostsPage, ApiError> {
        self.get_json("/api/analytics/posts", &[("page", page.to_string())])
            .await
    }

    pub async fn post_detail(&self, slug: &str) -> Result<PostDetail, ApiError> {
        self.get_json(&format!("/api/analytics/posts/{slug}"), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartDay, Overview, PostDetail};

    #[test]
    fn overview_defaults_missing_counters() {
        let overview: Overview = serde_json::from_str(r#"{"total_views": 12}"#).unwrap();
        assert_eq!(overview.total_views, 12);
        assert_eq!(overview.total_unique_views, 0);
        assert!(overview.top_posts.is_empty());
    }

    #[test]
    fn chart_day_parses_new_posts() {
        let day: ChartDay = serde_json::from_str(
            r#"{"date":"2025-04-01","views":10,"shares":2,"new_posts":["Launch"]}"#,
        )
        .unwrap();
        assert_eq!(day.new_posts, vec!["Launch".to_string()]);
        assert_eq!(day.views, 10.0);
    }

    #[test]
    fn post_detail_tolerates_sparse_payload() {
        let detail: PostDetail = serde_json::from_str(r#"{"total_views": 3}"#).unwrap();
        assert!(detail.daily_views.is_empty());
        assert!(detail.shares_platform.is_empty());
        assert!(detail.title.is_none());
    }
}
