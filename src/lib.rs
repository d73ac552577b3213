//! Strict NetFlow v5 packet decoder.
//!
//! NetFlow v5 is a fixed-layout export protocol: a 24-byte big-endian
//! header followed by the declared number of 48-byte flow records. This
//! crate turns one received packet buffer into a typed [`Message`],
//! validating the structural invariants before trusting any offset:
//!
//! - [`decoder`] - [`Decoder`]: binds an exporter address to a raw buffer
//! - [`header`] - [`Header`]: the fixed 24-byte packet header
//! - [`record`] - [`FlowRecord`]: one 48-byte flow record
//! - [`message`] - [`Message`]: the decoded result handed to consumers
//! - [`serialize`] - JSON/CBOR encoding of decoded values
//! - [`error`] - [`DecodeError`]
//!
//! Decoding is synchronous, performs no I/O, and is all-or-nothing: a
//! malformed packet yields a [`DecodeError`], never a partial message.
//!
//! # Example
//!
//! ```
//! use std::net::IpAddr;
//! use netflow5::{Decoder, HEADER_LEN};
//!
//! // An empty export packet: a valid header declaring zero records.
//! let mut packet = [0u8; HEADER_LEN];
//! packet[1] = 5;
//!
//! let exporter: IpAddr = "203.0.113.9".parse().unwrap();
//! let message = Decoder::new(exporter, &packet).decode().unwrap();
//! assert_eq!(message.records().len(), 0);
//! ```

pub mod decoder;
pub mod error;
pub mod header;
pub mod message;
mod reader;
pub mod record;
pub mod serialize;

// Re-export commonly used types at the crate root
pub use decoder::Decoder;
pub use error::{DecodeError, Result};
pub use header::{HEADER_LEN, Header, VERSION};
pub use message::Message;
pub use record::{FlowRecord, RECORD_LEN};
pub use serialize::{Format, SerializeError};
