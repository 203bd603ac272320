use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Failed to parse state: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Failed to serialize state: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("setState requires a state payload")]
    MissingPayload,

    #[error("Failed to rebuild choices: {0}")]
    Selector(String),
}
