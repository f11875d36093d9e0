use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Which surface to load and render.
    #[arg(long, default_value = "dashboard")]
    pub view: View,
    /// Keep polling the dashboard instead of exiting after one render.
    #[arg(long, default_value_t = false)]
    pub watch: bool,
    /// Page to request for paginated views.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Post slug for the post surface, or a filter for the community view.
    #[arg(long)]
    pub slug: Option<String>,
    /// Query for the search surface.
    #[arg(long)]
    pub query: Option<String>,
    /// IP address for the lookup surface and for --block-ip/--unblock-ip.
    #[arg(long)]
    pub ip: Option<String>,
    /// Show per-platform shares on the dashboard main chart.
    #[arg(long, default_value_t = false)]
    pub platform_shares: bool,

    /// Submit a comment on the post given with --slug; text from --text.
    #[arg(long, default_value_t = false)]
    pub comment: bool,
    /// Parent comment id for --comment replies.
    #[arg(long, value_name = "ID")]
    pub parent: Option<i64>,
    /// Post an admin reply to this comment; needs --slug and --text.
    #[arg(long, value_name = "ID")]
    pub reply_to: Option<i64>,
    /// Replace one comment's text with --text.
    #[arg(long, value_name = "ID")]
    pub edit_comment: Option<i64>,
    /// Comment text for --comment, --reply-to and --edit-comment.
    #[arg(long)]
    pub text: Option<String>,
    /// Show the fingerprint analysis for one blocked-IP record.
    #[arg(long, value_name = "ID")]
    pub analyze: Option<i64>,

    /// Delete one comment, then reload the active comment list.
    #[arg(long, value_name = "ID")]
    pub delete_comment: Option<i64>,
    /// Ban a user, then reload the users list.
    #[arg(long, value_name = "ID")]
    pub ban_user: Option<i64>,
    /// Lift a user's ban, then reload the users list.
    #[arg(long, value_name = "ID")]
    pub unban_user: Option<i64>,
    /// Delete every comment by a user; the list returns to page 1.
    #[arg(long, value_name = "ID")]
    pub purge_user_comments: Option<i64>,
    /// Unblock one record from the blocked-IPs list.
    #[arg(long, value_name = "ID")]
    pub unblock_record: Option<i64>,
    /// Block the address given with --ip.
    #[arg(long, default_value_t = false)]
    pub block_ip: bool,
    /// Unblock the address given with --ip.
    #[arg(long, default_value_t = false)]
    pub unblock_ip: bool,
    /// Confirm a destructive action; without it the prompt is printed and
    /// nothing is sent.
    #[arg(long, default_value_t = false)]
    pub yes: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    Dashboard,
    Content,
    Community,
    Users,
    BlockedIps,
    IpLookup,
    Invoicing,
    Post,
    Search,
}
