//! Decode a captured NetFlow v5 datagram and print it as JSON.
//!
//! Usage: cargo run --example decode -- <packet-file> [exporter-ip]
//!
//! The file must hold exactly one raw v5 datagram as received on the
//! wire. The exporter address defaults to 0.0.0.0 when not given.

use std::net::IpAddr;

use anyhow::{Context, Result};
use netflow5::Decoder;
use netflow5::serialize::{self, Format};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: decode <packet-file> [exporter-ip]")?;
    let exporter: IpAddr = args
        .next()
        .unwrap_or_else(|| "0.0.0.0".to_string())
        .parse()
        .context("exporter must be an IPv4 or IPv6 address")?;

    let raw = std::fs::read(&path).with_context(|| format!("failed to read {path}"))?;
    tracing::info!("read {} bytes from {}", raw.len(), path);

    let message = Decoder::new(exporter, &raw)
        .decode()
        .context("packet did not decode")?;
    tracing::info!(
        "decoded {} flow records, sequence {}",
        message.records().len(),
        message.header().flow_sequence
    );

    let json = serialize::encode(&message, Format::Json)?;
    println!("{}", String::from_utf8(json)?);

    Ok(())
}
