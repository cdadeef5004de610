use thiserror::Error;

#[derive(Debug, Error)]
pub enum SipError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Numeric overflow in {context}")]
    Overflow { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for SipError {
    fn from(e: serde_json::Error) -> Self {
        SipError::SerializationError(e.to_string())
    }
}
