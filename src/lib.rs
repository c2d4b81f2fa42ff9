pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use app::FormSession;
pub use config::{ApiOverrides, ApiSettings, TomlConfig};
pub use crate::core::{fetcher::NumbersApiClient, form::FactForm, validator::validate};
pub use utils::error::{FactError, Result};
