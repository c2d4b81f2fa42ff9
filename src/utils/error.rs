use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API responded with status {status}")]
    HttpStatus { status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl FactError {
    /// Network, HTTP status and body decoding failures all count as one kind.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            FactError::ApiError(_) | FactError::HttpStatus { .. } | FactError::SerializationError(_)
        )
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FactError::ConfigError { .. }
                | FactError::MissingConfigError { .. }
                | FactError::InvalidConfigValueError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            e if e.is_fetch_error() => "Could not fetch the fact. Please try again.".to_string(),
            FactError::MissingConfigError { field } => {
                format!("Required setting `{}` is not configured", field)
            }
            FactError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting `{}` is invalid: {}", field, reason)
            }
            FactError::ValidationError { message } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FactError::MissingConfigError { field } if field == "api.key" => {
                "Export RAPIDAPI_KEY or pass --api-key"
            }
            FactError::ApiError(_) => "Check your network connection and try again",
            FactError::HttpStatus { status } if *status == 401 || *status == 403 => {
                "Check that your RapidAPI key is valid and subscribed to the Numbers API"
            }
            FactError::HttpStatus { .. } => "The numbers API may be unavailable, try again later",
            FactError::SerializationError(_) => "The API returned an unexpected response",
            FactError::ValidationError { .. } => "Pick a month and enter a day that exists in it",
            FactError::IoError(_) => "Check file paths and permissions",
            _ => "Review the configuration file and command line flags",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            FactError::ValidationError { .. } => 1,
            e if e.is_fetch_error() => 2,
            _ => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, FactError>;
