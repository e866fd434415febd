use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilmError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {endpoint}")]
    HttpStatusError { status: u16, endpoint: String },

    #[error("Failed to decode film catalog: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl FilmError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FilmError::ApiError(_) => "Check network connectivity and the API endpoint",
            FilmError::HttpStatusError { status, .. } if *status == 401 || *status == 403 => {
                "Check that the API token is valid (--api-token or FILMS_API_TOKEN)"
            }
            FilmError::HttpStatusError { .. } => "Verify the API endpoint URL",
            FilmError::DecodeError(_) => {
                "The endpoint must return a JSON array of film objects"
            }
            FilmError::IoError(_) => "Check that the file exists and is readable",
            FilmError::ConfigError { .. }
            | FilmError::MissingConfigError { .. }
            | FilmError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, FilmError>;
