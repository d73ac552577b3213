//! NetFlow v5 packet header.

use serde::{Deserialize, Serialize};

use crate::error::{DecodeError, Result};
use crate::reader::Reader;

/// Wire size of the v5 packet header.
pub const HEADER_LEN: usize = 24;

/// The only export format version this crate decodes.
pub const VERSION: u16 = 5;

/// Low 14 bits of the sampling field hold the interval value.
const SAMPLING_INTERVAL_MASK: u16 = 0x3fff;

/// Decoded v5 packet header.
///
/// Fields are copied verbatim from the wire except the 16-bit sampling
/// field, which is split into its documented parts: the top 2 bits are the
/// sampling mode, the low 14 bits the interval value. Neither is
/// interpreted further. Clock and sequence values are not range-checked; a
/// misbehaving exporter clock is the caller's concern, not this layer's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Export format version, always 5 after a successful parse.
    pub version: u16,
    /// Number of flow records the exporter claims follow the header.
    pub count: u16,
    /// Milliseconds since the exporter booted.
    pub sys_uptime: u32,
    /// Seconds since the Unix epoch at export time.
    pub unix_secs: u32,
    /// Residual nanoseconds of the export timestamp.
    pub unix_nsecs: u32,
    /// Running flow counter on the exporter; wraps, and ordering is not
    /// enforced here.
    pub flow_sequence: u32,
    /// Flow switching engine type.
    pub engine_type: u8,
    /// Flow switching engine slot.
    pub engine_id: u8,
    /// Sampling mode, the top 2 bits of the sampling field.
    pub sampling_mode: u8,
    /// Sampling interval value, the low 14 bits of the sampling field.
    pub sampling_interval: u16,
}

impl Header {
    /// Decode the 24-byte header at the start of `bytes`.
    ///
    /// Fails with [`DecodeError::TruncatedHeader`] on fewer than 24 bytes
    /// and [`DecodeError::UnsupportedVersion`] when the version field is
    /// not 5. Bytes past the header are ignored here; the declared record
    /// count is checked against the full packet length by
    /// [`Decoder::decode`](crate::Decoder::decode).
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_LEN {
            return Err(DecodeError::TruncatedHeader);
        }
        let mut r = Reader::new(&bytes[..HEADER_LEN]);
        let header = Self::read_from(&mut r).ok_or(DecodeError::TruncatedHeader)?;
        if header.version != VERSION {
            return Err(DecodeError::UnsupportedVersion(header.version));
        }
        Ok(header)
    }

    fn read_from(r: &mut Reader<'_>) -> Option<Self> {
        let version = r.read_u16()?;
        let count = r.read_u16()?;
        let sys_uptime = r.read_u32()?;
        let unix_secs = r.read_u32()?;
        let unix_nsecs = r.read_u32()?;
        let flow_sequence = r.read_u32()?;
        let engine_type = r.read_u8()?;
        let engine_id = r.read_u8()?;
        let sampling = r.read_u16()?;

        Some(Self {
            version,
            count,
            sys_uptime,
            unix_secs,
            unix_nsecs,
            flow_sequence,
            engine_type,
            engine_id,
            sampling_mode: (sampling >> 14) as u8,
            sampling_interval: sampling & SAMPLING_INTERVAL_MASK,
        })
    }
}
