//! # Codec Errors

use shared_types::ProtocolError;
use thiserror::Error;

/// Decoding failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Fewer bytes than the fixed header.
    #[error("Message too short: {len} bytes, header is {header}")]
    TooShort {
        /// Bytes supplied
        len: usize,
        /// Header width
        header: usize,
    },

    /// Body longer than `MAX_BODY_LEN`.
    #[error("Message body too large: {len} bytes exceeds limit of {max}")]
    BodyTooLarge {
        /// Body length
        len: usize,
        /// Limit
        max: usize,
    },
}

impl From<CodecError> for ProtocolError {
    fn from(err: CodecError) -> Self {
        ProtocolError::MalformedMessage(err.to_string())
    }
}
