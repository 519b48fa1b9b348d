//! Polling loop over the schemes the reader commonly meets.
//!
//! Probes the Cyberne area first (Suica/PASMO transit history), then the
//! common area (Edy, nanaco, WAON balances), prints whatever the presented
//! card carries, and turns the field off between cycles so card removal is
//! detected. New cards are recognized purely by identity comparison.
//!
//! Usage:
//!   cargo run -p rcs620s --example watch -- /dev/ttyUSB0

use anyhow::Result;
use rcs620s::constants::{DEFAULT_COMMAND_TIMEOUT_MS, MAX_HISTORY_ENTRIES};
use rcs620s::prelude::*;
use std::time::Duration;

const POLLING_INTERVAL: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    env_logger::init();

    let port = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let transport = SerialTransport::open(&port)?;
    let mut reader = Reader::new(Box::new(transport)).initialize()?;
    println!("watching for cards on {port}");

    let mut last: Option<CardIdentity> = None;
    loop {
        reader.timeout_ms = DEFAULT_COMMAND_TIMEOUT_MS;

        let current = match reader.poll(SystemCode::CYBERNE)? {
            Some(identity) => {
                if last != Some(identity) {
                    println!("card {}", identity.idm.to_hex());
                    if let Err(e) = show_transit_card(&mut reader) {
                        log::warn!("transit read failed, skipping card: {e}");
                    }
                }
                Some(identity)
            }
            None => match reader.poll(SystemCode::COMMON)? {
                Some(identity) => {
                    if last != Some(identity) {
                        println!("card {}", identity.idm.to_hex());
                        show_emoney_card(&mut reader);
                    }
                    Some(identity)
                }
                None => None,
            },
        };
        last = current;

        reader.rf_off()?;
        std::thread::sleep(POLLING_INTERVAL);
    }
}

fn show_transit_card(reader: &mut Reader<Initialized>) -> Result<()> {
    if !request_service(reader, ServiceCode::PASSNET)? {
        return Ok(());
    }

    let blocks = read_history(reader, ServiceCode::PASSNET, MAX_HISTORY_ENTRIES)?;
    let entries: Vec<TransitEntry> = blocks
        .iter()
        .filter_map(decode_suica_history)
        .collect();

    if let Some(latest) = entries.first() {
        println!("  balance: {} yen", latest.balance);
    }
    for entry in &entries {
        print_transit_entry(entry);
    }
    Ok(())
}

fn show_emoney_card(reader: &mut Reader<Initialized>) {
    if request_service(reader, ServiceCode::EDY).unwrap_or(false)
        && let Ok(block) = read_block(reader, ServiceCode::EDY, 0)
        && let Some(t) = decode_edy_transaction(&block)
    {
        println!("  Edy: {} yen (last: {:?} {})", t.balance, t.kind, t.at);
    }

    if request_service(reader, ServiceCode::NANACO).unwrap_or(false)
        && let Ok(block) = read_block(reader, ServiceCode::NANACO, 0)
        && let Some(t) = decode_nanaco_transaction(&block)
    {
        println!("  nanaco: {} yen (last: {:?} {})", t.balance, t.kind, t.at);
    }

    if request_service(reader, ServiceCode::WAON).unwrap_or(false)
        && let Ok(data) = read_block(reader, ServiceCode::WAON, 1)
        && let Ok(terminal) = read_block(reader, ServiceCode::WAON, 2)
        && let Some(t) = decode_waon_transaction(&data, &terminal)
    {
        println!("  WAON: {} yen (last: {:?} {})", t.balance, t.kind, t.at);
    }
}

fn print_transit_entry(entry: &TransitEntry) {
    let resolver = NullResolver;
    let place = entry
        .exit
        .or(entry.entry)
        .map(|code| match resolver.resolve(&code) {
            Some(name) => format!("{} {}", name.line, name.station),
            None => format!("line {:02x} station {:02x}", code.line, code.station),
        })
        .unwrap_or_default();

    println!(
        "  {} {:?}/{:?} {} balance {} yen",
        entry.date, entry.terminal, entry.usage, place, entry.balance
    );
}
