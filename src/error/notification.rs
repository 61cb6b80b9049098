use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("notification contains no records")]
    NoRecords,

    #[error("notification message is not valid JSON: {0}")]
    Message(#[from] serde_json::Error),

    #[error("object key '{0}' is not valid percent-encoded UTF-8")]
    KeyEncoding(String),
}
