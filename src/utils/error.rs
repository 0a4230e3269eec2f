use thiserror::Error;

#[derive(Error, Debug)]
pub enum BallotDeskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings parse error: {0}")]
    Settings(#[from] toml::de::Error),

    #[error("Settings encode error: {0}")]
    SettingsEncode(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, BallotDeskError>;
