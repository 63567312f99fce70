//! SrefHub CLI
//!
//! Thin wrapper around srefhub-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show configuration and session status
//! srefhub info
//!
//! # Store an API token (and the account it belongs to)
//! srefhub login --token <token> --user-id <id>
//!
//! # Browse the gallery, newest first, only Flux renders
//! srefhub gallery list --model flux --sort latest
//!
//! # Like / favorite / copy a gallery item
//! srefhub gallery like <id>
//!
//! # List style posts by author
//! srefhub posts list --author <user_id>
//!
//! # Dashboard summary for the logged-in user
//! srefhub dashboard
//!
//! # Export prompts as CSV
//! srefhub admin export prompts --format csv --out prompts.csv
//!
//! # Validate an import file without sending it
//! srefhub admin import gallery items.csv --dry-run
//!
//! # Grid rows for a 1024x1536 image in a 280px column
//! srefhub span --width 1024 --height 1536 --column 280
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use srefhub_core::admin::{export_file_name, parse_records};
use srefhub_core::dashboard::load_dashboard;
use srefhub_core::layout::{compute_span, span_style, GridMetrics, NaturalSize, FALLBACK_SPAN};
use srefhub_core::{
    ApiClient, ClientConfig, ExportFormat, GalleryItem, GalleryQuery, GallerySort, InfiniteList,
    PostQuery, PostSort, ResourceKind, Session, ToggleAction,
};

/// SrefHub - style references, prompts and an AI media gallery
#[derive(Parser)]
#[command(name = "srefhub")]
#[command(version = "0.1.0")]
#[command(about = "SrefHub - style references, prompts and an AI media gallery")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory holding the session (default: platform data dir)
    #[arg(short, long, global = true, env = "SREFHUB_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// API base URL (overrides SREFHUB_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Items per page (overrides SREFHUB_PAGE_SIZE)
    #[arg(long, global = true)]
    page_size: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show configuration and session status
    Info,

    /// Store an API token for later commands
    Login {
        /// Bearer token issued by the server
        #[arg(long)]
        token: String,
        /// Account id the token belongs to (used by `dashboard`)
        #[arg(long)]
        user_id: Option<String>,
    },

    /// Forget the stored token
    Logout,

    /// Curated gallery
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },

    /// Style posts
    Posts {
        #[command(subcommand)]
        action: ContentAction,
    },

    /// Prompts
    Prompts {
        #[command(subcommand)]
        action: ContentAction,
    },

    /// Summary of a user's dashboard
    Dashboard {
        /// User id (default: the logged-in user)
        #[arg(long)]
        user: Option<String>,
    },

    /// Bulk export and import
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },

    /// Compute the masonry row span for an image
    Span {
        /// Natural image width in pixels
        #[arg(long)]
        width: u32,
        /// Natural image height in pixels
        #[arg(long)]
        height: u32,
        /// Rendered column width in pixels
        #[arg(long)]
        column: f64,
        /// Grid row height in pixels
        #[arg(long)]
        row_height: Option<f64>,
        /// Grid row gap in pixels
        #[arg(long)]
        gap: Option<f64>,
    },
}

#[derive(Subcommand)]
enum GalleryAction {
    /// List gallery items
    List {
        /// Generating model (midjourney, flux, sora, ...)
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        tag: Option<String>,
        /// latest, popular or copies
        #[arg(long, default_value = "latest")]
        sort: String,
        #[arg(long)]
        search: Option<String>,
        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Walk every page instead of one
        #[arg(long)]
        all: bool,
    },
    /// Like or unlike an item
    Like { id: String },
    /// Favorite or unfavorite an item
    Favorite { id: String },
    /// Record a copy of the item's prompt
    Copy { id: String },
}

#[derive(Subcommand)]
enum ContentAction {
    /// List entries
    List {
        #[arg(long)]
        author: Option<String>,
        /// newest, popular or views
        #[arg(long, default_value = "newest")]
        sort: String,
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Delete an entry you own
    Delete { id: String },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Download a collection
    Export {
        /// posts, prompts, gallery or users
        kind: String,
        /// csv or json
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Output file (default: <kind>-export-<date>.<format>)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Upload records from a CSV or JSON file
    Import {
        /// posts, prompts, gallery or users
        kind: String,
        /// File to import
        path: PathBuf,
        /// csv or json (default: from the file extension)
        #[arg(short, long)]
        format: Option<String>,
        /// Parse and report without sending anything
        #[arg(long)]
        dry_run: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (<platform data dir>/srefhub)
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("srefhub")
}

fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url.clone());
    }
    if let Some(size) = cli.page_size {
        config = config.with_page_size(size);
    }
    config
}

fn import_format(path: &Path, explicit: Option<&str>) -> Result<ExportFormat> {
    match explicit {
        Some(f) => Ok(f.parse()?),
        None => ExportFormat::from_path(path).with_context(|| {
            format!(
                "Cannot tell the format of '{}'; pass --format csv|json",
                path.display()
            )
        }),
    }
}

fn print_page_footer(page: u32, total_pages: u32, total: u64) {
    println!();
    println!("Page {} of {} ({} total)", page, total_pages.max(1), total);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let config = build_config(&cli);
    let connect = || -> Result<(Session, ApiClient)> {
        let session = Session::open(&data_dir)
            .with_context(|| format!("Failed to open session in {}", data_dir.display()))?;
        let api = ApiClient::new(&config, session.clone())?;
        Ok((session, api))
    };

    match cli.command {
        Commands::Info => {
            let (session, api) = connect()?;
            println!("SrefHub v0.1.0");
            println!();
            println!("API: {}", api.base_url());
            println!("Page size: {}", api.page_size());
            println!("Timeout: {}s", config.timeout.as_secs());
            println!("Data directory: {}", data_dir.display());
            println!();
            if session.is_authenticated() {
                match session.user_id() {
                    Some(id) => println!("Session: logged in as {}", id),
                    None => println!("Session: logged in"),
                }
            } else {
                println!("Session: not logged in");
            }
        }

        Commands::Login { token, user_id } => {
            let token = token.trim();
            if token.is_empty() {
                anyhow::bail!("Token must not be empty");
            }
            let (session, _) = connect()?;
            session.sign_in(token, user_id)?;
            println!("Token stored in {}", data_dir.display());
        }

        Commands::Logout => {
            let (session, _) = connect()?;
            session.evict()?;
            println!("Logged out.");
        }

        Commands::Gallery { action } => {
            let (_, api) = connect()?;
            match action {
                GalleryAction::List {
                    model,
                    tag,
                    sort,
                    search,
                    page,
                    all,
                } => {
                    let sort: GallerySort = sort.parse()?;
                    let query = GalleryQuery::new(model, tag, sort, search);

                    if all {
                        let mut list: InfiniteList<GalleryQuery, GalleryItem> = InfiniteList::new(query);
                        list.sentinel_changed(true);
                        while list.should_fetch_next() {
                            list.fetch_next(&api).await;
                        }
                        if let Some(err) = list.last_error() {
                            anyhow::bail!("Stopped after {} item(s): {}", list.len(), err);
                        }
                        for item in list.items() {
                            println!("{}  {}  [{}]  \u{2665} {}", item.id, item.title, item.model, item.likes);
                        }
                        println!();
                        println!("{} item(s)", list.len());
                    } else {
                        let result = api.list_gallery(&query, page, api.page_size()).await?;
                        if result.items.is_empty() {
                            println!("No gallery items found.");
                        }
                        for item in &result.items {
                            println!("{}  {}  [{}]  \u{2665} {}", item.id, item.title, item.model, item.likes);
                        }
                        print_page_footer(result.info.page, result.info.total_pages, result.info.total);
                    }
                }
                GalleryAction::Like { id } => {
                    api.gallery_action(&id, ToggleAction::Like).await?;
                    println!("Toggled like on {}", id);
                }
                GalleryAction::Favorite { id } => {
                    api.gallery_action(&id, ToggleAction::Favorite).await?;
                    println!("Toggled favorite on {}", id);
                }
                GalleryAction::Copy { id } => {
                    api.gallery_action(&id, ToggleAction::Copy).await?;
                    println!("Recorded copy of {}", id);
                }
            }
        }

        Commands::Posts { action } => {
            let (_, api) = connect()?;
            match action {
                ContentAction::List {
                    author,
                    sort,
                    search,
                    page,
                } => {
                    let sort: PostSort = sort.parse()?;
                    let query = PostQuery::new(author, sort, search);
                    let result = api.list_posts(&query, page, api.page_size()).await?;
                    if result.items.is_empty() {
                        println!("No style posts found.");
                    }
                    for post in &result.items {
                        let author = post.author.as_ref().map(|a| a.display_name()).unwrap_or_default();
                        println!("{}  {}  {}  by {}", post.id, post.sref_parameter(), post.title, author);
                    }
                    print_page_footer(result.info.page, result.info.total_pages, result.info.total);
                }
                ContentAction::Delete { id } => {
                    api.delete_post(&id).await?;
                    println!("Deleted post {}", id);
                }
            }
        }

        Commands::Prompts { action } => {
            let (_, api) = connect()?;
            match action {
                ContentAction::List {
                    author,
                    sort,
                    search,
                    page,
                } => {
                    let sort: PostSort = sort.parse()?;
                    let query = PostQuery::new(author, sort, search);
                    let result = api.list_prompts(&query, page, api.page_size()).await?;
                    if result.items.is_empty() {
                        println!("No prompts found.");
                    }
                    for prompt in &result.items {
                        println!("{}  [{}]  {}", prompt.id, prompt.difficulty, prompt.title);
                    }
                    print_page_footer(result.info.page, result.info.total_pages, result.info.total);
                }
                ContentAction::Delete { id } => {
                    api.delete_prompt(&id).await?;
                    println!("Deleted prompt {}", id);
                }
            }
        }

        Commands::Dashboard { user } => {
            let (session, api) = connect()?;
            let user_id = user
                .or_else(|| session.user_id())
                .context("No user id; pass --user or log in with --user-id")?;
            let state = load_dashboard(&api, &user_id, api.page_size()).await;

            println!("Dashboard for {}", user_id);
            println!();
            println!("Stats:");
            println!("  Posts: {}", state.user_stats.total_posts);
            println!("  Prompts: {}", state.user_stats.total_prompts());
            println!("  Likes: {}", state.user_stats.total_likes);
            println!("  Views: {}", state.user_stats.total_views);
            println!("  Followers: {}", state.user_stats.total_followers);
            println!("  Following: {}", state.user_stats.total_following);
            println!();
            println!(
                "Posts: {} shown of {} (page {}/{})",
                state.user_posts.len(),
                state.posts_page.total,
                state.posts_page.current_page,
                state.posts_page.total_pages
            );
            for post in &state.user_posts {
                println!("  {}  {}", post.id, post.title);
            }
            println!(
                "Prompts: {} shown of {} (page {}/{})",
                state.user_prompts.len(),
                state.prompts_page.total,
                state.prompts_page.current_page,
                state.prompts_page.total_pages
            );
            println!(
                "Favorites: {} post(s), {} prompt(s)",
                state.favorites_posts.len(),
                state.favorites_prompts.len()
            );
            println!(
                "Following {} / followed by {}",
                state.following_users.len(),
                state.follower_users.len()
            );
        }

        Commands::Admin { action } => match action {
            AdminAction::Export { kind, format, out } => {
                let kind: ResourceKind = kind.parse()?;
                let format: ExportFormat = format.parse()?;
                let (_, api) = connect()?;
                let bytes = api.export(kind, format).await?;
                let out = out.unwrap_or_else(|| {
                    PathBuf::from(export_file_name(kind, format, chrono::Local::now().date_naive()))
                });
                std::fs::write(&out, &bytes)
                    .with_context(|| format!("Failed to write {}", out.display()))?;
                println!("Exported {} ({} bytes) to {}", kind.label(), bytes.len(), out.display());
            }
            AdminAction::Import {
                kind,
                path,
                format,
                dry_run,
            } => {
                let kind: ResourceKind = kind.parse()?;
                let format = import_format(&path, format.as_deref())?;
                let bytes = std::fs::read(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                let records = parse_records(&bytes, format)?;

                if dry_run {
                    println!("Dry run: {} {} record(s) parsed from {}", records.len(), kind, path.display());
                    if let Some(first) = records.first() {
                        let fields: Vec<&str> = first.keys().map(String::as_str).collect();
                        println!("  Fields: {}", fields.join(", "));
                    }
                    return Ok(());
                }
                if records.is_empty() {
                    anyhow::bail!("{} contains no records", path.display());
                }

                let (_, api) = connect()?;
                let summary = api.import(kind, &records).await?;
                println!("Imported {} of {} record(s)", summary.imported, records.len());
                if summary.failed > 0 {
                    println!("  Failed: {}", summary.failed);
                }
                if let Some(message) = &summary.message {
                    println!("  {}", message);
                }
                tracing::debug!(response = %serde_json::to_string(&summary)?, "Import summary");
            }
        },

        Commands::Span {
            width,
            height,
            column,
            row_height,
            gap,
        } => {
            let defaults = GridMetrics::default();
            let metrics = GridMetrics {
                row_height_px: row_height.unwrap_or(defaults.row_height_px),
                row_gap_px: gap.unwrap_or(defaults.row_gap_px),
            };
            let natural = NaturalSize::new(width, height);
            match natural.and_then(|n| compute_span(n, column, &metrics).map(|span| (n, span))) {
                Some((natural, span)) => {
                    println!("Rendered height: {}px", natural.rendered_height(column).round());
                    println!("Span: {} rows", span);
                    println!("Style: {}", span_style(span));
                }
                None => {
                    println!("Span: {} rows (fallback, dimensions unusable)", FALLBACK_SPAN);
                }
            }
        }
    }

    Ok(())
}
