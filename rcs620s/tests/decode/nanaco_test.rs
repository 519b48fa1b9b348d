use rcs620s::decode::{NanacoKind, decode_nanaco_transaction};
use rcs620s::types::BlockData;

fn datetime_word(year: u16, month: u8, day: u8, hour: u8, minute: u8) -> u32 {
    (u32::from(year - 2000) << 25)
        | (u32::from(month) << 21)
        | (u32::from(day) << 16)
        | (u32::from(hour) << 11)
        | (u32::from(minute) << 5)
}

fn block(kind: u8, amount: u32, balance: u32, when: u32) -> BlockData {
    let mut b = [0u8; 16];
    b[0] = kind;
    b[1..5].copy_from_slice(&amount.to_be_bytes());
    b[5..9].copy_from_slice(&balance.to_be_bytes());
    b[9..13].copy_from_slice(&when.to_be_bytes());
    b[13..15].copy_from_slice(&7u16.to_be_bytes());
    BlockData::from_bytes(b)
}

#[test]
fn payment_with_packed_datetime() {
    let t = decode_nanaco_transaction(&block(
        0x47,
        398,
        1602,
        datetime_word(2015, 11, 30, 21, 47),
    ))
    .unwrap();
    assert_eq!(t.kind, NanacoKind::Payment);
    assert_eq!(t.amount, 398);
    assert_eq!(t.balance, 1602);
    assert_eq!(t.at.date.year, 2015);
    assert_eq!(t.at.date.month, 11);
    assert_eq!(t.at.date.day, 30);
    assert_eq!(t.at.time.hour, 21);
    assert_eq!(t.at.time.minute, 47);
    assert_eq!(t.sequence, 7);
}

#[test]
fn charge_kinds_classify() {
    let when = datetime_word(2016, 1, 2, 3, 4);
    assert_eq!(
        decode_nanaco_transaction(&block(0x6f, 1000, 1000, when))
            .unwrap()
            .kind,
        NanacoKind::Charge
    );
    assert_eq!(
        decode_nanaco_transaction(&block(0x70, 1000, 1000, when))
            .unwrap()
            .kind,
        NanacoKind::CreditCharge
    );
}

#[test]
fn zero_datetime_is_no_entry() {
    assert_eq!(decode_nanaco_transaction(&block(0x47, 100, 100, 0)), None);
}
