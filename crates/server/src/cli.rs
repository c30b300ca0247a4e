use std::path::PathBuf;

use axum::http::HeaderValue;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[clap(name = "exercise tracker server")]
pub struct Cli {
    /// Directory holding the landing page and its static files
    #[clap(long, env, default_value = "assets")]
    pub assets_dir: PathBuf,
    /// SQLite database path or `file:` URI
    #[clap(long, env, default_value = "exercise.sqlite")]
    pub db_uri: String,
    #[clap(long, env, default_value = "3000")]
    pub port: u16,
    #[clap(long, env, default_value = "0.0.0.0")]
    pub bind_addr: String,
    /// Only allow cross origin requests from this origin. Any origin is
    /// allowed when unset.
    #[arg(long, env, value_parser = HeaderValue::from_str)]
    pub cors_origin: Option<HeaderValue>,
    /// Largest accepted request body in bytes
    #[arg(long, env, default_value = "16384")]
    pub request_body_limit: usize,
}
