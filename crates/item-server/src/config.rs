//! Server configuration
//!
//! Every option can be given as a flag or through its environment variable.
//! A `.env` file in the working directory is loaded before parsing.

use clap::Parser;
use item_core::DEFAULT_MAX_TOKENS;

#[derive(Parser, Debug, Clone)]
#[command(name = "item-server")]
#[command(about = "Extracts item names from Spanish product descriptions over HTTP")]
#[command(version)]
pub struct ServerArgs {
    /// Enable debug mode
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,

    /// Address to bind
    #[arg(long, env = "ITEM_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Server port
    #[arg(long, env = "PORT", default_value = "8000")]
    pub port: u16,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(long, env = "ITEM_WORKERS")]
    pub workers: Option<usize>,

    /// Token limit used when a request does not set maxTokens
    #[arg(long, env = "ITEM_DEFAULT_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub default_max_tokens: i64,

    /// Longest accepted description in characters, 0 for no limit
    #[arg(long, env = "ITEM_MAX_TEXT_CHARS", default_value = "10000")]
    pub max_text_chars: usize,

    /// Log filter (overrides debug flag)
    #[arg(long, env = "RUST_LOG")]
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
    pub default_max_tokens: i64,
    pub max_text_chars: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            workers: None,
            default_max_tokens: DEFAULT_MAX_TOKENS,
            max_text_chars: Some(10_000),
        }
    }
}

impl From<ServerArgs> for ServerConfig {
    fn from(args: ServerArgs) -> Self {
        Self {
            host: args.host,
            port: args.port,
            workers: args.workers.filter(|workers| *workers > 0),
            default_max_tokens: args.default_max_tokens,
            max_text_chars: Some(args.max_text_chars).filter(|limit| *limit > 0),
        }
    }
}
