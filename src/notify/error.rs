use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Channel not found: {0}")]
    ChannelNotFound(String),

    #[error("Delivery rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}
