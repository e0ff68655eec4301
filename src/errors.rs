use thiserror::Error;

#[derive(Debug, Error)]
pub enum SldError {
    #[error("invalid argument {field}: {message}")]
    InvalidArgument { field: String, message: String },
    #[error("invalid service url {url}: {source}")]
    ServiceUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("style plan error: {0}")]
    Plan(#[from] serde_yaml::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SldError {
    pub fn invalid_argument(field: &str, message: &str) -> Self {
        SldError::InvalidArgument {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SldError>;
