use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocalizeError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Display pattern produced no output")]
    EmptyOutput,
}
