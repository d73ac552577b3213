//! The decoded export packet handed to consumers.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::header::Header;
use crate::record::FlowRecord;

/// A fully decoded export packet: one header, the flow records in wire
/// order, and the address of the exporter that sent it.
///
/// The exporter address is supplied by the receiving side rather than
/// parsed from the packet; it travels with the decoded data as
/// provenance. A message is built once by
/// [`Decoder::decode`](crate::Decoder::decode) and read-only afterwards;
/// serialization collaborators traverse it through the accessors and the
/// serde contract (`exporter`, then `header`, then `records`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    exporter: IpAddr,
    header: Header,
    records: Vec<FlowRecord>,
}

impl Message {
    pub(crate) fn new(exporter: IpAddr, header: Header, records: Vec<FlowRecord>) -> Self {
        Self {
            exporter,
            header,
            records,
        }
    }

    /// Address of the exporter the packet came from.
    pub fn exporter(&self) -> IpAddr {
        self.exporter
    }

    /// The decoded packet header.
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The decoded flow records, in wire order. The length equals
    /// `header().count` for every message this crate produces.
    pub fn records(&self) -> &[FlowRecord] {
        &self.records
    }
}
