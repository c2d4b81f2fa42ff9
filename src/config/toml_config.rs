use crate::utils::error::{FactError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub host: Option<String>,
    pub key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FactError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FactError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RAPIDAPI_KEY})，未設定的變數原樣保留
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_api_section() {
        let toml_content = r#"
[api]
base_url = "http://localhost:9000"
host = "numbers.local"
key = "literal-key"
timeout_seconds = 3
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.api.host.as_deref(), Some("numbers.local"));
        assert_eq!(config.api.key.as_deref(), Some("literal-key"));
        assert_eq!(config.api.timeout_seconds, Some(3));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.api.key.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FFF_TEST_TOML_KEY", "from-env");

        let config = TomlConfig::from_toml_str("[api]\nkey = \"${FFF_TEST_TOML_KEY}\"\n").unwrap();
        assert_eq!(config.api.key.as_deref(), Some("from-env"));

        std::env::remove_var("FFF_TEST_TOML_KEY");
    }

    #[test]
    fn test_substitution_across_repeated_loads() {
        std::env::set_var("FFF_TEST_TOML_HOST", "env.host");
        std::env::set_var("FFF_TEST_TOML_URL", "http://env:8");

        let content = "[api]\nhost = \"${FFF_TEST_TOML_HOST}\"\nbase_url = \"${FFF_TEST_TOML_URL}\"\n";
        for _ in 0..2 {
            let config = TomlConfig::from_toml_str(content).unwrap();
            assert_eq!(config.api.host.as_deref(), Some("env.host"));
            assert_eq!(config.api.base_url.as_deref(), Some("http://env:8"));
        }

        std::env::remove_var("FFF_TEST_TOML_HOST");
        std::env::remove_var("FFF_TEST_TOML_URL");
    }

    #[test]
    fn test_unset_env_var_left_in_place() {
        let config =
            TomlConfig::from_toml_str("[api]\nkey = \"${FFF_TEST_DEFINITELY_UNSET}\"\n").unwrap();
        assert_eq!(config.api.key.as_deref(), Some("${FFF_TEST_DEFINITELY_UNSET}"));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[api\nkey = ").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nhost = \"file.host\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.host.as_deref(), Some("file.host"));
    }
}
