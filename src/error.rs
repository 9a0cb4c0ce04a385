use thiserror::Error;

pub type DaybookResult<T> = Result<T, DaybookError>;

#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Date format error: {0}")]
    Format(String),

    #[error("Date {0} not found in table")]
    DateNotFound(String),

    #[error("File '{0}' not found in drive")]
    FileNotFound(String),

    #[error("Unknown employee: {0}")]
    UnknownEmployee(String),

    #[error("Roster error: {0}")]
    Roster(String),

    #[error("Credential error: {0}")]
    Auth(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Graph API error ({status}): {message}")]
    Graph { status: u16, message: String },
}
