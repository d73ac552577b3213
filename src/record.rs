//! NetFlow v5 flow records.

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

use crate::error::{DecodeError, Result};
use crate::reader::Reader;

/// Wire size of one v5 flow record.
pub const RECORD_LEN: usize = 48;

/// One observed flow, decoded from a 48-byte wire record.
///
/// Values are exposed exactly as the exporter reported them: `tcp_flags`
/// is the cumulative OR of the flow's TCP control bits, `first`/`last`
/// are exporter uptime stamps with no ordering enforced, and addresses
/// are built from the raw network-order bytes with no reserved-range
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRecord {
    /// Source IPv4 address.
    pub src_addr: Ipv4Addr,
    /// Destination IPv4 address.
    pub dst_addr: Ipv4Addr,
    /// Next-hop router address.
    pub next_hop: Ipv4Addr,
    /// SNMP index of the input interface.
    pub input: u16,
    /// SNMP index of the output interface.
    pub output: u16,
    /// Packets in the flow.
    pub packets: u32,
    /// Total octets in the flow.
    pub octets: u32,
    /// Exporter uptime in milliseconds when the flow was first seen.
    pub first: u32,
    /// Exporter uptime in milliseconds when the flow was last seen.
    pub last: u32,
    /// TCP/UDP source port.
    pub src_port: u16,
    /// TCP/UDP destination port.
    pub dst_port: u16,
    /// Cumulative OR of TCP flags across the flow's packets.
    pub tcp_flags: u8,
    /// IP protocol number.
    pub protocol: u8,
    /// IP type of service byte.
    pub tos: u8,
    /// Source BGP autonomous system number.
    pub src_as: u16,
    /// Destination BGP autonomous system number.
    pub dst_as: u16,
    /// Source address prefix length.
    pub src_mask: u8,
    /// Destination address prefix length.
    pub dst_mask: u8,
}

impl FlowRecord {
    /// Decode one flow record from an exact 48-byte slice.
    ///
    /// [`Decoder::decode`](crate::Decoder::decode) always hands this an
    /// exact chunk; the length re-check keeps the function safe to call
    /// on its own and fails with [`DecodeError::TruncatedRecord`] on
    /// anything other than 48 bytes.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != RECORD_LEN {
            return Err(DecodeError::TruncatedRecord(bytes.len()));
        }
        let mut r = Reader::new(bytes);
        Self::read_from(&mut r).ok_or(DecodeError::TruncatedRecord(bytes.len()))
    }

    fn read_from(r: &mut Reader<'_>) -> Option<Self> {
        let src_addr = r.read_ipv4()?;
        let dst_addr = r.read_ipv4()?;
        let next_hop = r.read_ipv4()?;
        let input = r.read_u16()?;
        let output = r.read_u16()?;
        let packets = r.read_u32()?;
        let octets = r.read_u32()?;
        let first = r.read_u32()?;
        let last = r.read_u32()?;
        let src_port = r.read_u16()?;
        let dst_port = r.read_u16()?;
        r.skip(1)?; // pad
        let tcp_flags = r.read_u8()?;
        let protocol = r.read_u8()?;
        let tos = r.read_u8()?;
        let src_as = r.read_u16()?;
        let dst_as = r.read_u16()?;
        let src_mask = r.read_u8()?;
        let dst_mask = r.read_u8()?;
        r.skip(2)?; // pad

        Some(Self {
            src_addr,
            dst_addr,
            next_hop,
            input,
            output,
            packets,
            octets,
            first,
            last,
            src_port,
            dst_port,
            tcp_flags,
            protocol,
            tos,
            src_as,
            dst_as,
            src_mask,
            dst_mask,
        })
    }
}
