#[path = "../common/mod.rs"]
mod common;

use rcs620s::decode::{GateKind, StationCode, TerminalKind, UsageKind, decode_suica_history};

#[test]
fn automatic_gate_exit_with_balance_100() {
    // device type 0x16 (automatic gate), usage 0x01 (exit),
    // balance bytes low 0x64 / high 0x00
    let entry = decode_suica_history(&common::fixtures::suica_block_data()).unwrap();

    assert_eq!(entry.terminal, TerminalKind::AutomaticGate);
    assert_eq!(entry.usage, UsageKind::GateExit);
    assert_eq!(entry.gate, Some(GateKind::Exit));
    assert_eq!(entry.balance, 100);
}

#[test]
fn station_codes_are_numeric_only() {
    // the decoder hands out (region, line, station) triples; names come
    // from an external resolver
    let entry = decode_suica_history(&common::fixtures::suica_block_data()).unwrap();
    assert_eq!(
        entry.entry,
        Some(StationCode {
            region: 0,
            line: 0x1b,
            station: 0x2c
        })
    );
    assert_eq!(
        entry.exit,
        Some(StationCode {
            region: 0,
            line: 0x1d,
            station: 0x0e
        })
    );
}

#[test]
fn date_unpacks_across_the_byte_boundary() {
    let entry = decode_suica_history(&common::fixtures::suica_block_data()).unwrap();
    assert_eq!(entry.date.year, 2010);
    assert_eq!(entry.date.month, 3);
    assert_eq!(entry.date.day, 14);
}

#[test]
fn unknown_terminal_does_not_drop_the_entry() {
    let mut raw = common::fixtures::suica_gate_exit_block();
    raw[0] = 0xab;
    let entry =
        decode_suica_history(&rcs620s::types::BlockData::from_bytes(raw)).unwrap();
    assert_eq!(entry.terminal, TerminalKind::Unknown(0xab));
}
