// src/cli.rs
//! Command-line interface for the aggregator binary.
//!
//! Credentials (Naver client id/secret) come from the environment; a
//! local `.env` file is honored by the binary before argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for the aggregator.
///
/// # Examples
///
/// ```sh
/// # All configured categories into ./data
/// topic-news-aggregator
///
/// # One category, custom config and output directory
/// topic-news-aggregator -k tesla -c config/categories.toml -o ./out
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Category to aggregate (repeatable); defaults to every configured category
    #[arg(short = 'k', long = "category")]
    pub categories: Vec<String>,

    /// Path to the categories TOML file (otherwise CATEGORIES_CONFIG_PATH
    /// or config/categories.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory for the per-category JSON documents
    #[arg(short, long, default_value = "data")]
    pub out_dir: PathBuf,

    /// Skip the Naver source even when credentials are configured
    #[arg(long)]
    pub no_naver: bool,
}
