pub mod error;
pub mod projection;
pub mod types;

pub use error::SipError;
pub use types::*;

/// Standard result type for all sip-core operations
pub type SipResult<T> = Result<T, SipError>;
