use rcs620s::decode::{WaonKind, decode_waon_points, decode_waon_transaction};
use rcs620s::types::BlockData;

fn data_block(kind: u8, amount: u16, charge: u16, balance: u32) -> BlockData {
    let mut b = [0u8; 16];
    b[0] = kind;
    b[1..3].copy_from_slice(&amount.to_be_bytes());
    b[3..5].copy_from_slice(&charge.to_be_bytes());
    let packed = (balance << 5) & 0x7f_ffe0;
    b[5] = (packed >> 16) as u8;
    b[6] = (packed >> 8) as u8;
    b[7] = packed as u8;
    BlockData::from_bytes(b)
}

fn terminal_block(word: &[u8; 4]) -> BlockData {
    let mut b = [0u8; 16];
    b[..6].copy_from_slice(b"WAON01");
    b[6..10].copy_from_slice(word);
    BlockData::from_bytes(b)
}

#[test]
fn packed_date_bits_reconstruct_the_calendar() {
    // year offset 5 from the 2005 epoch, March 14th, 09:30:
    // 00101 0011 01110 01001 011110 0000000
    let term = terminal_block(&[0x29, 0xb9, 0x2f, 0x00]);
    let t = decode_waon_transaction(&data_block(0x04, 105, 0, 895), &term).unwrap();

    assert_eq!(t.at.date.year, 2010);
    assert_eq!(t.at.date.month, 3);
    assert_eq!(t.at.date.day, 14);
    assert_eq!(t.at.time.hour, 9);
    assert_eq!(t.at.time.minute, 30);
}

#[test]
fn transaction_fields_assemble() {
    let term = terminal_block(&[0x29, 0xb9, 0x2f, 0x00]);
    let t = decode_waon_transaction(&data_block(0x0c, 0, 2000, 3480), &term).unwrap();

    assert_eq!(t.kind, WaonKind::Charge);
    assert_eq!(t.amount, 0);
    assert_eq!(t.charge, 2000);
    assert_eq!(t.balance, 3480);
    assert_eq!(&t.terminal, b"WAON01");
}

#[test]
fn zero_date_word_is_no_entry() {
    let term = terminal_block(&[0, 0, 0, 0]);
    assert_eq!(
        decode_waon_transaction(&data_block(0x04, 100, 0, 100), &term),
        None
    );
}

#[test]
fn point_snapshot_is_24_bit_big_endian() {
    let mut b = [0u8; 16];
    b[0] = 0x01;
    b[1] = 0x00;
    b[2] = 0x2a;
    let snap = decode_waon_points(&BlockData::from_bytes(b)).unwrap();
    assert_eq!(snap.points, 0x01_002a);
}
