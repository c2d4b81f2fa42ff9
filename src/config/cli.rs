use crate::config::ApiOverrides;
use crate::core::Month;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "fun-fact-finder")]
#[command(about = "Pick a month and a day, get a trivia fact about that date")]
pub struct CliConfig {
    /// Month as 1-12 or a name (e.g. 4, april, Apr)
    #[arg(long)]
    pub month: Option<Month>,

    /// Day of the month
    #[arg(long, allow_hyphen_values = true)]
    pub day: Option<String>,

    /// RapidAPI key for the numbers API
    #[arg(long, env = "RAPIDAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "NUMBERS_API_BASE_URL")]
    pub base_url: Option<String>,

    #[arg(long)]
    pub api_host: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// TOML file with an [api] section
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start the interactive form even if --month and --day are given
    #[arg(long)]
    pub interactive: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> ApiOverrides {
        ApiOverrides {
            base_url: self.base_url.clone(),
            api_host: self.api_host.clone(),
            api_key: self.api_key.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }

    /// Month and day for a single lookup, `None` when the form should run interactively.
    pub fn one_shot(&self) -> Option<(Month, &str)> {
        if self.interactive {
            return None;
        }
        match (self.month, self.day.as_deref()) {
            (Some(month), Some(day)) => Some((month, day)),
            _ => None,
        }
    }
}
