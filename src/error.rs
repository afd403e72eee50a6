use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmrAuditError {
    #[error("Malformed creation timestamp for job flow {id}: {reason}")]
    MalformedTimestamp { id: String, reason: String },

    #[error("Malformed usage value for job flow {id}: {reason}")]
    MalformedUsageValue { id: String, reason: String },

    #[error("EMR API request failed: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, EmrAuditError>;
