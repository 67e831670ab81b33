use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// The hosted collection the widget was built against.
pub const DEFAULT_API_URL: &str = "https://66d333a2184dce1713cf971b.mockapi.io/listData/listData";

#[derive(Debug, Clone, Parser)]
#[command(name = "tasklist", version, about = "To-do list synced with a remote task collection")]
pub struct Config {
    /// Full URL of the task collection resource
    #[arg(long, env = "TASKLIST_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(
        long,
        env = "TASKLIST_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// Where to write logs; the terminal itself is taken by the UI
    #[arg(long, env = "TASKLIST_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("tasklist.log"))
    }
}
