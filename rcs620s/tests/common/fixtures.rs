// fixtures.rs — shared packets and card blocks for the integration tests

use rcs620s::protocol::Frame;
use rcs620s::types::BlockData;

pub fn sample_idm_bytes() -> [u8; 8] {
    [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
}

pub fn sample_pmm_bytes() -> [u8; 8] {
    [0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18]
}

/// Frame carrying an RFConfiguration acknowledgement.
pub fn rf_ack_frame() -> Vec<u8> {
    Frame::encode(&[0xd5, 0x33]).unwrap()
}

/// Frame announcing one polled target.
pub fn polling_found_frame(idm: [u8; 8], pmm: [u8; 8]) -> Vec<u8> {
    let mut p = vec![0xd5, 0x4b, 0x01, 0x01, 0x12, 0x01];
    p.extend_from_slice(&idm);
    p.extend_from_slice(&pmm);
    Frame::encode(&p).unwrap()
}

/// Frame announcing an empty field.
pub fn polling_empty_frame() -> Vec<u8> {
    Frame::encode(&[0xd5, 0x4b, 0x00]).unwrap()
}

/// Frame relaying a card response through CommunicateThruEx.
pub fn thru_frame(card_response: &[u8]) -> Vec<u8> {
    let mut p = vec![0xd5, 0xa1, 0x00, (card_response.len() + 1) as u8];
    p.extend_from_slice(card_response);
    Frame::encode(&p).unwrap()
}

/// Card response to Request Service with the given key version.
pub fn request_service_response(idm: [u8; 8], key_version: u16) -> Vec<u8> {
    let mut r = vec![0x03];
    r.extend_from_slice(&idm);
    r.push(0x01);
    r.extend_from_slice(&key_version.to_le_bytes());
    r
}

/// Card response to Read Without Encryption carrying one block.
pub fn read_response(idm: [u8; 8], block: &[u8; 16]) -> Vec<u8> {
    let mut r = vec![0x07];
    r.extend_from_slice(&idm);
    r.push(0x00);
    r.push(0x00);
    r.push(0x01);
    r.extend_from_slice(block);
    r
}

/// A transit history block: automatic gate exit, balance 100.
pub fn suica_gate_exit_block() -> [u8; 16] {
    let mut b = [0u8; 16];
    b[0] = 0x16; // automatic gate
    b[1] = 0x01; // gate exit
    b[3] = 0x02; // exit
    b[4] = 0x14; // 2010
    b[5] = 0x6e; // March 14th
    b[6] = 0x1b;
    b[7] = 0x2c;
    b[8] = 0x1d;
    b[9] = 0x0e;
    b[10] = 0x64; // balance low
    b[11] = 0x00; // balance high
    b[14] = 0x01;
    b
}

pub fn suica_block_data() -> BlockData {
    BlockData::from_bytes(suica_gate_exit_block())
}

pub fn zero_block() -> BlockData {
    BlockData::from_bytes([0u8; 16])
}
