#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use srefhub_core::ClientConfig;
use tracing_subscriber::EnvFilter;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Client configuration resolved at startup
static CLIENT_CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the client configuration (environment plus command-line overrides)
pub fn get_client_config() -> ClientConfig {
    CLIENT_CONFIG.get().cloned().unwrap_or_else(ClientConfig::from_env)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("srefhub")
}

/// SrefHub - style references, prompts and a curated AI gallery
#[derive(Parser, Debug)]
#[command(name = "srefhub-desktop")]
#[command(about = "SrefHub - browse and share Midjourney style references")]
struct Args {
    /// Data directory holding the saved session
    #[arg(short, long, env = "SREFHUB_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Base URL of the REST API (overrides SREFHUB_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Items requested per page
    #[arg(long)]
    page_size: Option<u32>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    let mut config = ClientConfig::from_env();
    if let Some(url) = args.api_url {
        config = config.with_api_url(url);
    }
    if let Some(size) = args.page_size {
        config = config.with_page_size(size);
    }

    tracing::info!(api = %config.base_url(), data_dir = ?data_dir, "Starting SrefHub");

    let _ = DATA_DIR.set(data_dir);
    let _ = CLIENT_CONFIG.set(config);

    // Wide enough for a three-column masonry grid
    let window_width = 1200.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("SrefHub")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
