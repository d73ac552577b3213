use thiserror::Error;

/// Errors produced while decoding a NetFlow v5 export packet.
///
/// Every variant is terminal for the current decode call: nothing is
/// retried internally and no partial message is ever returned. Whether to
/// log, drop, or request retransmission is the caller's decision.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The version field holds something other than 5.
    #[error("unsupported NetFlow version {0}, expected 5")]
    UnsupportedVersion(u16),

    /// The buffer is shorter than the 24-byte packet header.
    #[error("packet shorter than the 24-byte NetFlow v5 header")]
    TruncatedHeader,

    /// The buffer is too short for the record count the header declares.
    #[error("truncated packet: header declares {expected} bytes, got {actual}")]
    TruncatedPacket { expected: usize, actual: usize },

    /// The buffer extends past the record count the header declares.
    #[error("trailing bytes: header declares {expected} bytes, got {actual}")]
    TrailingBytes { expected: usize, actual: usize },

    /// A flow record slice was not exactly 48 bytes. Unreachable through
    /// [`Decoder::decode`](crate::Decoder::decode), which chunks the
    /// buffer after validating the packet length; seeing it there means a
    /// decoder bug, not bad input.
    #[error("flow record slice is {0} bytes, expected 48")]
    TruncatedRecord(usize),
}

/// Result type alias using [`DecodeError`].
pub type Result<T> = std::result::Result<T, DecodeError>;
