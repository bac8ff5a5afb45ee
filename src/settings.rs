use std::time::Duration;

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;
use tracing::warn;

pub const DEFAULT_SOURCES: &[&str] = &[
    "https://www.reddit.com/r/cigars/hot.json",
    "https://www.reddit.com/r/cigars/top.json",
    "https://www.reddit.com/r/cigars/new.json",
];
pub const DEFAULT_OUTPUT_PATH: &str = "extracted_cigars.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

const ENV_PREFIX: &str = "CIGARS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub sources: Vec<String>,
    pub output_path: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub preview_limit: usize,
    #[serde(default)]
    pub catalog_path: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            preview_limit: DEFAULT_PREVIEW_LIMIT,
            catalog_path: None,
        }
    }
}

impl Settings {
    /// Read `CIGARS_*` environment variables over the built-in defaults.
    ///
    /// A malformed value is logged and the defaults are used instead.
    pub fn load() -> Self {
        Self::from_env(Environment::with_prefix(ENV_PREFIX)).unwrap_or_else(|e| {
            warn!(error = %e, "invalid settings, using defaults");
            Settings::default()
        })
    }

    fn from_env(env: Environment) -> Result<Self> {
        let defaults = Settings::default();
        let settings = Config::builder()
            .set_default("sources", defaults.sources)?
            .set_default("output_path", defaults.output_path)?
            .set_default("timeout_secs", defaults.timeout_secs)?
            .set_default("user_agent", defaults.user_agent)?
            .set_default("preview_limit", defaults.preview_limit as u64)?
            .add_source(
                env.try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("sources"),
            )
            .build()?
            .try_deserialize::<Settings>()?;
        Ok(settings)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
