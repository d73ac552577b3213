//! Packet decoder.

use std::cmp::Ordering;
use std::net::IpAddr;

use crate::error::{DecodeError, Result};
use crate::header::{HEADER_LEN, Header};
use crate::message::Message;
use crate::record::{FlowRecord, RECORD_LEN};

/// Decoder for a single received export packet.
///
/// Binds the exporter's source address to the raw bytes of one UDP
/// payload, as received on the wire. Decoding is pure and all-or-nothing:
/// structural invariants are validated before any record is parsed, the
/// first malformed record aborts the call, and no state is shared between
/// calls, so any number of decoders may run concurrently.
pub struct Decoder<'a> {
    exporter: IpAddr,
    buf: &'a [u8],
}

impl<'a> Decoder<'a> {
    /// Bind an exporter address to a raw packet buffer.
    pub fn new(exporter: IpAddr, buf: &'a [u8]) -> Self {
        Self { exporter, buf }
    }

    /// Decode the packet into a [`Message`].
    ///
    /// The buffer must hold exactly one v5 packet: the 24-byte header
    /// followed by `count` 48-byte records and nothing else. A shorter
    /// buffer fails with [`DecodeError::TruncatedPacket`], a longer one
    /// with [`DecodeError::TrailingBytes`]; neither returns a partial
    /// message.
    pub fn decode(&self) -> Result<Message> {
        let header = Header::parse(self.buf)?;

        let expected = HEADER_LEN + usize::from(header.count) * RECORD_LEN;
        match self.buf.len().cmp(&expected) {
            Ordering::Less => {
                return Err(DecodeError::TruncatedPacket {
                    expected,
                    actual: self.buf.len(),
                });
            }
            Ordering::Greater => {
                return Err(DecodeError::TrailingBytes {
                    expected,
                    actual: self.buf.len(),
                });
            }
            Ordering::Equal => {}
        }

        let mut records = Vec::with_capacity(usize::from(header.count));
        for chunk in self.buf[HEADER_LEN..].chunks_exact(RECORD_LEN) {
            records.push(FlowRecord::parse(chunk)?);
        }

        Ok(Message::new(self.exporter, header, records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    const EXPORTER: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 168, 1, 100));

    /// Build a well-formed packet whose header declares `count` records.
    fn v5_packet(count: u16) -> Vec<u8> {
        let mut packet = vec![0u8; HEADER_LEN + usize::from(count) * RECORD_LEN];

        packet[0..2].copy_from_slice(&5u16.to_be_bytes());
        packet[2..4].copy_from_slice(&count.to_be_bytes());
        packet[4..8].copy_from_slice(&12345u32.to_be_bytes()); // sys_uptime
        packet[8..12].copy_from_slice(&1609459200u32.to_be_bytes()); // unix_secs
        packet[16..20].copy_from_slice(&100u32.to_be_bytes()); // flow_sequence

        for i in 0..usize::from(count) {
            let base = HEADER_LEN + i * RECORD_LEN;
            packet[base..base + 4].copy_from_slice(&[10, 0, 0, 1 + i as u8]); // src_addr
            packet[base + 4..base + 8].copy_from_slice(&[192, 168, 1, 1]); // dst_addr
            packet[base + 16..base + 20].copy_from_slice(&10u32.to_be_bytes()); // packets
            packet[base + 20..base + 24].copy_from_slice(&1500u32.to_be_bytes()); // octets
            packet[base + 32..base + 34].copy_from_slice(&49152u16.to_be_bytes()); // src_port
            packet[base + 34..base + 36].copy_from_slice(&443u16.to_be_bytes()); // dst_port
            packet[base + 38] = 6; // protocol
        }

        packet
    }

    #[test]
    fn test_empty_packet_decodes_to_no_records() {
        let packet = v5_packet(0);
        let msg = Decoder::new(EXPORTER, &packet).decode().unwrap();

        assert_eq!(msg.exporter(), EXPORTER);
        assert_eq!(msg.header().version, 5);
        assert_eq!(msg.header().count, 0);
        assert_eq!(msg.header().sys_uptime, 12345);
        assert_eq!(msg.header().unix_secs, 1609459200);
        assert_eq!(msg.header().flow_sequence, 100);
        assert!(msg.records().is_empty());
    }

    #[test]
    fn test_single_record_packet() {
        let packet = v5_packet(1);
        assert_eq!(packet.len(), 72);

        let msg = Decoder::new(EXPORTER, &packet).decode().unwrap();
        assert_eq!(msg.records().len(), 1);

        let record = &msg.records()[0];
        assert_eq!(record.src_addr, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(record.dst_addr, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(record.packets, 10);
        assert_eq!(record.octets, 1500);
        assert_eq!(record.src_port, 49152);
        assert_eq!(record.dst_port, 443);
        assert_eq!(record.protocol, 6);
    }

    #[test]
    fn test_records_keep_wire_order() {
        let packet = v5_packet(4);
        let msg = Decoder::new(EXPORTER, &packet).decode().unwrap();

        assert_eq!(msg.records().len(), 4);
        for (i, record) in msg.records().iter().enumerate() {
            assert_eq!(record.src_addr, Ipv4Addr::new(10, 0, 0, 1 + i as u8));
        }
    }

    #[test]
    fn test_short_buffer_is_truncated_header() {
        for len in [0, 1, 23] {
            let packet = vec![0u8; len];
            assert_eq!(
                Decoder::new(EXPORTER, &packet).decode(),
                Err(DecodeError::TruncatedHeader)
            );
        }
    }

    #[test]
    fn test_version_is_checked_before_anything_else() {
        let mut packet = v5_packet(1);
        packet[0..2].copy_from_slice(&9u16.to_be_bytes());
        // Mangle the rest of the buffer too; the version gate must win.
        packet.truncate(40);

        assert_eq!(
            Decoder::new(EXPORTER, &packet).decode(),
            Err(DecodeError::UnsupportedVersion(9))
        );
    }

    #[test]
    fn test_missing_record_bytes() {
        let mut packet = v5_packet(2);
        packet.truncate(HEADER_LEN + RECORD_LEN);

        assert_eq!(
            Decoder::new(EXPORTER, &packet).decode(),
            Err(DecodeError::TruncatedPacket {
                expected: 120,
                actual: 72,
            })
        );
    }

    #[test]
    fn test_one_trailing_byte_fails() {
        let mut packet = v5_packet(2);
        packet.push(0);

        assert_eq!(
            Decoder::new(EXPORTER, &packet).decode(),
            Err(DecodeError::TrailingBytes {
                expected: 120,
                actual: 121,
            })
        );
    }

    #[test]
    fn test_decode_is_pure() {
        let packet = v5_packet(3);
        let decoder = Decoder::new(EXPORTER, &packet);

        assert_eq!(decoder.decode().unwrap(), decoder.decode().unwrap());
    }
}
