use chrono::{DateTime, NaiveDate, Utc};

use masthead_core::domain::charts::Dataset;
use masthead_core::domain::comments::Comment;
use masthead_core::domain::links::bridge_badge;
use masthead_core::domain::pagination::PaginationControls;
use masthead_core::domain::progressive::ProgressiveImage;

use crate::controllers::blocked_ips::{BlockedIpsModel, IpLookupModel};
use crate::controllers::community::CommunityModel;
use crate::controllers::content::{ContentModel, PostDetailModel};
use crate::controllers::dashboard::DashboardModel;
use crate::controllers::invoicing::InvoicingModel;
use crate::controllers::post::PostPageModel;
use crate::controllers::search::SearchModel;
use crate::controllers::users::{UserCommentsModel, UsersModel};

use super::html::{Element, Node, render_one};

const DEFAULT_AVATAR: &str = "/assets/default-avatar.png";
const FALLBACK_POST_IMAGE: &str = "https://placehold.co/600x400";
const PREVIEW_LEN: usize = 300;

/// Pagination renders as empty markup when hidden, so the container always
/// exists for in-place replacement.
pub fn pagination(controls: Option<PaginationControls>) -> Node {
    let container = Element::new("nav").class("pagination");
    match controls {
        None => container.into(),
        Some(controls) => container
            .child(
                Element::new("button")
                    .class("page-prev")
                    .flag("disabled", !controls.prev_enabled)
                    .text("Previous"),
            )
            .child(Element::new("span").class("page-indicator").text(format!(
                "Page {} of {}",
                controls.page, controls.total_pages
            )))
            .child(
                Element::new("button")
                    .class("page-next")
                    .flag("disabled", !controls.next_enabled)
                    .text("Next"),
            )
            .into(),
    }
}

/// Managed site assets render with the placeholder variant and the thumbnail
/// in a data attribute for the swap; everything else keeps its source as-is.
fn image(src: Option<&str>, asset_prefix: &str, class: &'static str) -> Node {
    let src = match src {
        Some(src) if !src.is_empty() => src,
        _ => FALLBACK_POST_IMAGE,
    };
    match ProgressiveImage::manage(src, asset_prefix) {
        Some(progressive) => Element::new("img")
            .class(format!("{class} blur-load"))
            .attr("src", progressive.visible_url())
            .attr("data-thumbnail", progressive.thumbnail_url())
            .into(),
        None => Element::new("img").class(class).attr("src", src).into(),
    }
}

fn stat_card(label: &str, value: String) -> Node {
    Element::new("div")
        .class("stat-card")
        .child(Element::new("span").class("stat-label").text(label))
        .child(Element::new("span").class("stat-value").text(value))
        .into()
}

pub fn dashboard(model: &DashboardModel) -> String {
    let overview = &model.overview;
    let mut root = Element::new("section")
        .class("dashboard")
        .child(
            Element::new("div")
                .class("stat-grid")
                .child(stat_card("Unique views", overview.total_unique_views.to_string()))
                .child(stat_card("Total views", overview.total_views.to_string()))
                .child(stat_card("Shares", overview.total_shares.to_string()))
                .child(stat_card("Visitors (30d)", overview.visitors_30d.to_string())),
        )
        .child(chart_table("main-chart", &model.main_chart.dates, &model.main_chart.datasets));

    if !model.markers.is_empty() {
        let items = model.markers.iter().map(|marker| {
            Element::new("li")
                .text(format!("{}: {}", marker.date, marker.post_titles.join(", ")))
                .into()
        });
        root = root.child(Element::new("ul").class("post-markers").children(items));
    }
    if let Some(platform_chart) = &model.platform_chart {
        root = root.child(chart_table(
            "platform-chart",
            &platform_chart.dates,
            &platform_chart.datasets,
        ));
    }
    if !model.platform_totals.is_empty() {
        let items = model.platform_totals.iter().map(|total| {
            Element::new("li")
                .text(format!("{}: {}", total.platform, total.count))
                .into()
        });
        root = root.child(Element::new("ul").class("platform-totals").children(items));
    }
    if !overview.top_posts.is_empty() {
        let items = overview.top_posts.iter().map(|post| {
            Element::new("li")
                .child(
                    Element::new("a")
                        .attr("href", format!("/posts/{}", post.slug))
                        .text(&post.title),
                )
                .text(format!(" ({} views)", post.views))
                .into()
        });
        root = root.child(Element::new("ol").class("top-posts").children(items));
    }
    render_one(root)
}

// Charts are emitted as data tables; the page's chart library reads them
// from the DOM.
fn chart_table(class: &'static str, dates: &[NaiveDate], datasets: &[Dataset]) -> Element {
    let mut header = Element::new("tr").child(Element::new("th").text("Date"));
    for dataset in datasets {
        header = header.child(Element::new("th").text(&dataset.label));
    }
    let mut table = Element::new("table").class(class).child(header);
    for (index, date) in dates.iter().enumerate() {
        let mut row = Element::new("tr").child(Element::new("td").text(date.to_string()));
        for dataset in datasets {
            let value = dataset.values.get(index).copied().unwrap_or(0.0);
            row = row.child(Element::new("td").text(value.to_string()));
        }
        table = table.child(row);
    }
    table
}

pub fn content(model: &ContentModel, asset_prefix: &str) -> String {
    let rows = model.posts.iter().map(|post| {
        Element::new("tr")
            .child(Element::new("td").child(image(post.image.as_deref(), asset_prefix, "post-thumb")))
            .child(
                Element::new("td").child(
                    Element::new("a")
                        .attr("href", format!("/posts/{}", post.slug))
                        .text(&post.title),
                ),
            )
            .child(Element::new("td").text(post.date.clone().unwrap_or_default()))
            .child(Element::new("td").text(post.views.to_string()))
            .into()
    });
    render_one(
        Element::new("section")
            .class("content")
            .child(Element::new("table").class("posts").children(rows))
            .child(pagination(model.pagination)),
    )
}

pub fn post_detail(model: &PostDetailModel) -> String {
    let mut root = Element::new("section")
        .class("post-detail")
        .child(
            Element::new("h2").text(model.title.clone().unwrap_or_else(|| model.slug.clone())),
        )
        .child(stat_card("Total views", model.total_views.to_string()))
        .child(chart_table("post-chart", &model.chart.dates, &model.chart.datasets));
    if let Some(date) = &model.date {
        root = root.child(Element::new("p").class("post-date").text(date));
    }
    if !model.platform_totals.is_empty() {
        let items = model.platform_totals.iter().map(|total| {
            Element::new("li")
                .text(format!("{}: {}", total.platform, total.count))
                .into()
        });
        root = root.child(Element::new("ul").class("platform-totals").children(items));
    }
    render_one(root)
}

/// Long comment bodies truncate with a see-more affordance; the full text
/// stays out of the list markup.
fn preview_text(text: &str) -> (String, bool) {
    if text.chars().count() <= PREVIEW_LEN {
        return (text.to_string(), false);
    }
    let cut: String = text.chars().take(PREVIEW_LEN).collect();
    (format!("{}…", cut.trim_end()), true)
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

fn comment_row(comment: &Comment, asset_prefix: &str) -> Element {
    let avatar = comment
        .avatar_url
        .clone()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());
    let (body, truncated) = preview_text(&comment.comment_text);
    let mut row = Element::new("article")
        .class(if comment.is_deleted {
            "comment deleted"
        } else {
            "comment"
        })
        .attr("data-id", comment.id.to_string())
        .child(image(Some(avatar.as_str()), asset_prefix, "avatar"))
        .child(Element::new("strong").class("author").text(&comment.author_name))
        .child(Element::new("time").text(timestamp(comment.created_at)))
        .child(Element::new("p").class("body").text(body));
    if truncated {
        row = row.child(Element::new("button").class("see-more").text("See more"));
    }
    if comment.edited_at.is_some() {
        row = row.child(Element::new("span").class("edited").text("(edited)"));
    }
    if let Some(badge) = bridge_badge(comment.source.as_deref()) {
        row = row.child(
            Element::new("a")
                .class("bridge-badge")
                .attr("href", badge.href)
                .attr("title", badge.tooltip)
                .text(badge.label),
        );
    }
    row
}

pub fn community(model: &CommunityModel, asset_prefix: &str) -> String {
    let rows = model.comments.iter().map(|comment| {
        comment_row(comment, asset_prefix)
            .child(
                Element::new("a")
                    .class("comment-post")
                    .attr("href", format!("/posts/{}", comment.post_slug))
                    .text(
                        comment
                            .post_title
                            .clone()
                            .unwrap_or_else(|| comment.post_slug.clone()),
                    ),
            )
            .into()
    });
    let mut root = Element::new("section").class("community");
    if let Some(slug) = &model.slug_filter {
        root = root.child(
            Element::new("p")
                .class("filter-note")
                .text(format!("Showing comments on {slug}")),
        );
    }
    render_one(
        root.child(Element::new("div").class("comment-list").children(rows))
            .child(pagination(model.pagination)),
    )
}

pub fn users(model: &UsersModel) -> String {
    let rows = model.users.iter().map(|user| {
        let status = if user.is_banned {
            "banned"
        } else if user.is_admin {
            "admin"
        } else {
            "active"
        };
        Element::new("tr")
            .attr("data-id", user.id.to_string())
            .child(Element::new("td").text(&user.name))
            .child(Element::new("td").text(user.email.clone().unwrap_or_default()))
            .child(Element::new("td").text(&user.oauth_provider))
            .child(Element::new("td").text(status))
            .child(Element::new("td").text(timestamp(user.created_at)))
            .into()
    });
    render_one(
        Element::new("section")
            .class("users")
            .child(Element::new("table").class("user-table").children(rows))
            .child(pagination(model.pagination)),
    )
}

pub fn user_comments(model: &UserCommentsModel, asset_prefix: &str) -> String {
    let heading = match &model.user_name {
        Some(name) => format!("Comments by {name}"),
        None => format!("Comments by user #{}", model.user_id),
    };
    let rows = model
        .comments
        .iter()
        .map(|comment| comment_row(comment, asset_prefix).into());
    render_one(
        Element::new("section")
            .class("user-comments")
            .child(Element::new("h2").text(heading))
            .child(Element::new("div").class("comment-list").children(rows))
            .child(pagination(model.pagination)),
    )
}

pub fn blocked_ips(model: &BlockedIpsModel) -> String {
    let rows = model.blocked_ips.iter().map(|record| {
        Element::new("tr")
            .attr("data-id", record.id.to_string())
            .child(Element::new("td").text(&record.ip_address))
            .child(Element::new("td").text(&record.reason))
            .child(Element::new("td").text(record.country.clone().unwrap_or_default()))
            .child(Element::new("td").text(timestamp(record.blocked_until)))
            .child(Element::new("td").text(timestamp(record.created_at)))
            .into()
    });
    render_one(
        Element::new("section")
            .class("blocked-ips")
            .child(
                Element::new("p")
                    .class("record-count")
                    .text(format!("{} blocked addresses", model.total_records)),
            )
            .child(Element::new("table").class("ip-table").children(rows))
            .child(pagination(model.pagination)),
    )
}

pub fn ip_lookup(model: &IpLookupModel) -> String {
    let status = if model.lookup.is_blocked {
        "currently blocked"
    } else {
        "not blocked"
    };
    let mut root = Element::new("section")
        .class("ip-lookup")
        .child(Element::new("h2").text(format!("{}: {status}", model.ip)));
    if model.lookup.cache_status {
        root = root.child(Element::new("p").class("cache-note").text("Result served from cache"));
    }
    if model.lookup.history.is_empty() {
        root = root.child(Element::new("p").text("No block history."));
    } else {
        let rows = model.lookup.history.iter().map(|entry| {
            Element::new("tr")
                .child(Element::new("td").text(&entry.reason))
                .child(Element::new("td").text(timestamp(entry.blocked_until)))
                .child(Element::new("td").text(timestamp(entry.created_at)))
                .into()
        });
        root = root.child(Element::new("table").class("history").children(rows));
    }
    render_one(root)
}

pub fn ip_analysis(analysis: &masthead_client::blocked_ips::IpAnalysis) -> String {
    let mut root = Element::new("section").class("ip-analysis");
    match &analysis.fingerprint_hash {
        Some(hash) => {
            root = root.child(Element::new("p").class("fingerprint").text(format!("Fingerprint {hash}")));
            if let Some(screen) = &analysis.details.screen_res {
                root = root.child(Element::new("p").text(format!("Screen: {screen}")));
            }
            if let Some(timezone) = &analysis.details.timezone {
                root = root.child(Element::new("p").text(format!("Timezone: {timezone}")));
            }
        }
        None => {
            root = root.child(Element::new("p").text("No fingerprint recorded."));
        }
    }
    if !analysis.related_ips.is_empty() {
        let rows = analysis.related_ips.iter().map(|related| {
            Element::new("tr")
                .child(Element::new("td").text(&related.ip))
                .child(Element::new("td").text(timestamp(related.date)))
                .into()
        });
        root = root.child(Element::new("table").class("related-ips").children(rows));
    }
    render_one(root)
}

pub fn invoicing(model: &InvoicingModel) -> String {
    let summary = &model.summary;
    let rows = model.invoices.iter().map(|invoice| {
        Element::new("tr")
            .class(if invoice.is_residential {
                "residential"
            } else {
                "datacenter"
            })
            .child(Element::new("td").text(&invoice.ip))
            .child(Element::new("td").text(&invoice.ip_type))
            .child(Element::new("td").text(format!("{:.2} GB", invoice.data_gb)))
            .child(Element::new("td").text(format!(
                "${:.2} – ${:.2}",
                invoice.cost_low, invoice.cost_high
            )))
            .into()
    });
    render_one(
        Element::new("section")
            .class("invoicing")
            .child(
                Element::new("div")
                    .class("stat-grid")
                    .child(stat_card(
                        "Estimated cost",
                        format!("${:.2} – ${:.2}", summary.total_cost_low, summary.total_cost_high),
                    ))
                    .child(stat_card("Data transferred", format!("{:.2} GB", summary.total_data_gb)))
                    .child(stat_card("Residential IPs", summary.residential_ips.to_string())),
            )
            .child(Element::new("table").class("invoice-table").children(rows))
            .child(pagination(model.pagination)),
    )
}

/// Edit/delete controls appear only on comments the viewer may modify.
fn post_comment_row(
    comment: &Comment,
    viewer: Option<&masthead_client::auth::AuthUser>,
    asset_prefix: &str,
) -> Element {
    let mut row = comment_row(comment, asset_prefix);
    if crate::controllers::post::can_modify(viewer, comment) {
        row = row
            .child(Element::new("button").class("edit").text("Edit"))
            .child(Element::new("button").class("delete").text("Delete"));
    }
    row
}

pub fn post_page(model: &PostPageModel, asset_prefix: &str) -> String {
    let viewer = model.viewer.as_ref();
    let mut root = Element::new("section")
        .class("post-comments")
        .child(
            Element::new("h2").text(format!("{} comments", model.thread.total)),
        );
    for entry in &model.thread.roots {
        let mut thread = Element::new("div").class(if entry.orphaned {
            "thread orphaned"
        } else {
            "thread"
        });
        thread = thread.child(post_comment_row(&entry.comment, viewer, asset_prefix));
        for reply in &entry.replies {
            let mut reply_block = Element::new("div")
                .class("reply")
                .child(post_comment_row(&reply.comment, viewer, asset_prefix));
            if !reply.collapsed.is_empty() {
                reply_block = reply_block.child(
                    Element::new("button")
                        .class("show-replies")
                        .text(format!("Show {} replies", reply.collapsed_count())),
                );
                let hidden = reply
                    .collapsed
                    .iter()
                    .map(|comment| post_comment_row(comment, viewer, asset_prefix).into());
                reply_block =
                    reply_block.child(Element::new("div").class("collapsed hidden").children(hidden));
            }
            thread = thread.child(reply_block);
        }
        root = root.child(thread);
    }
    if viewer.is_some() {
        root = root.child(
            Element::new("form")
                .class("composer")
                .attr("data-slug", model.slug.as_str())
                .child(Element::new("textarea").attr("name", "comment_text"))
                .child(Element::new("button").text("Post comment")),
        );
    } else {
        root = root.child(
            Element::new("p")
                .class("signin-note")
                .text("Sign in to join the conversation."),
        );
    }
    render_one(root)
}

pub fn search(model: &SearchModel) -> String {
    let mut root = Element::new("section")
        .class("search-results")
        .child(Element::new("h2").text(format!("Results for \u{201c}{}\u{201d}", model.query)));
    if model.results.is_empty() {
        root = root.child(Element::new("p").text("No results."));
    }
    for result in &model.results {
        let mut item = Element::new("article").class("result").child(
            Element::new("a")
                .attr("href", format!("/posts/{}", result.slug))
                .text(&result.title),
        );
        if let Some(summary) = &result.summary {
            item = item.child(Element::new("p").class("summary").text(summary));
        }
        if !result.tags.is_empty() {
            let tags = result
                .tags
                .iter()
                .map(|tag| Element::new("span").class("tag").text(tag).into());
            item = item.child(Element::new("div").class("tags").children(tags));
        }
        root = root.child(item);
    }
    render_one(root)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use masthead_core::domain::comments::{Comment, build_thread};
    use masthead_core::domain::pagination::{PageState, PaginationControls};

    use crate::controllers::post::PostPageModel;
    use crate::render::html::render_one;

    use super::{comment_row, pagination, post_page, preview_text};

    fn comment(id: i64, parent_id: Option<i64>, text: &str) -> Comment {
        Comment {
            id,
            parent_id,
            user_id: None,
            author_name: format!("author-{id}"),
            avatar_url: None,
            comment_text: text.to_string(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, id as u32 % 60, 0).unwrap(),
            edited_at: None,
            is_deleted: false,
            source: None,
            post_slug: "hello-world".to_string(),
            post_title: None,
            post_image: None,
        }
    }

    #[test]
    fn hidden_pagination_renders_empty_container() {
        let markup = render_one(pagination(None));
        assert_eq!(markup, r#"<nav class="pagination"></nav>"#);
    }

    #[test]
    fn first_page_disables_previous_only() {
        let controls = PaginationControls::from_state(PageState {
            page: 1,
            total_pages: 4,
        });
        let markup = render_one(pagination(controls));
        assert!(markup.contains(r#"<button class="page-prev" disabled>Previous</button>"#));
        assert!(markup.contains(r#"<button class="page-next">Next</button>"#));
        assert!(markup.contains("Page 1 of 4"));
    }

    #[test]
    fn comment_text_is_escaped() {
        let markup = render_one(comment_row(
            &comment(1, None, "<script>alert(1)</script>"),
            "/assets/",
        ));
        assert!(markup.contains("&lt;script&gt;"));
        assert!(!markup.contains("<script>"));
    }

    #[test]
    fn long_bodies_truncate_with_see_more() {
        let long = "x".repeat(400);
        let (body, truncated) = preview_text(&long);
        assert!(truncated);
        assert_eq!(body.chars().count(), 301);
        let markup = render_one(comment_row(&comment(1, None, &long), "/assets/"));
        assert!(markup.contains("See more"));
    }

    #[test]
    fn missing_avatar_falls_back_to_default() {
        let markup = render_one(comment_row(&comment(1, None, "hi"), "/assets/"));
        assert!(markup.contains("/assets/default-avatar.png?size=placeholder"));
    }

    #[test]
    fn bridged_comment_carries_badge() {
        let mut bridged = comment(1, None, "hi");
        bridged.source = Some("wasteof".to_string());
        let markup = render_one(comment_row(&bridged, "/assets/"));
        assert!(markup.contains("From wasteof.money"));
        assert!(markup.contains(r#"href="https://wasteof.money""#));
    }

    #[test]
    fn collapsed_replies_render_behind_show_button() {
        let thread = build_thread(vec![
            comment(1, None, "root"),
            comment(2, Some(1), "reply"),
            comment(3, Some(2), "nested"),
            comment(4, Some(3), "deeper"),
        ]);
        let model = PostPageModel {
            slug: masthead_core::types::slug::Slug::try_from("hello-world").unwrap(),
            thread,
            viewer: None,
        };
        let markup = post_page(&model, "/assets/");
        assert!(markup.contains("Show 2 replies"));
        assert!(markup.contains(r#"class="collapsed hidden""#));
        assert!(markup.contains("Sign in to join the conversation."));
        assert!(!markup.contains(r#"class="edit""#));
    }

    #[test]
    fn admin_viewer_gets_composer_and_modify_controls() {
        let thread = build_thread(vec![comment(1, None, "root")]);
        let model = PostPageModel {
            slug: masthead_core::types::slug::Slug::try_from("hello-world").unwrap(),
            thread,
            viewer: Some(masthead_client::auth::AuthUser {
                id: 9,
                name: "kit".to_string(),
                picture: None,
                is_admin: true,
            }),
        };
        let markup = post_page(&model, "/assets/");
        assert!(markup.contains(r#"class="edit""#));
        assert!(markup.contains(r#"class="delete""#));
        assert!(markup.contains(r#"class="composer""#));
    }
}
