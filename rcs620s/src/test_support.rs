//! Test support helpers shared by unit and integration tests.
//!
//! They centralize MockTransport seeding — the reset handshake, polling
//! replies and CommunicateThruEx wrapping — so tests across the crate and
//! the tests/ directory build exchanges the same way.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::reader::{Initialized, Reader};
use crate::transport::{MockTransport, Transport};
use crate::types::SystemCode;

/// IDm used by fixture exchanges.
pub const SAMPLE_IDM: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
/// PMm used by fixture exchanges.
pub const SAMPLE_PMM: [u8; 8] = [0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18];

/// RFConfiguration acknowledgement packet.
pub fn rf_ack_packet() -> Vec<u8> {
    vec![0xd5, 0x33]
}

/// InListPassiveTarget packet announcing one target.
pub fn polling_found_packet(idm: [u8; 8], pmm: [u8; 8]) -> Vec<u8> {
    let mut p = vec![0xd5, 0x4b, 0x01, 0x01, 0x12, 0x01];
    p.extend_from_slice(&idm);
    p.extend_from_slice(&pmm);
    p
}

/// InListPassiveTarget packet for an empty field.
pub fn polling_empty_packet() -> Vec<u8> {
    vec![0xd5, 0x4b, 0x00]
}

/// Wrap a card response into a CommunicateThruEx packet.
pub fn thru_packet(card_response: &[u8]) -> Vec<u8> {
    let mut p = vec![0xd5, 0xa1, 0x00, (card_response.len() + 1) as u8];
    p.extend_from_slice(card_response);
    p
}

/// Seed the three-step reset handshake consumed by `initialize`.
pub fn seed_init(mock: &mut MockTransport) {
    for _ in 0..3 {
        mock.push_exchange(&rf_ack_packet());
    }
}

/// Seed one successful poll exchange.
pub fn seed_poll_found(mock: &mut MockTransport, idm: [u8; 8], pmm: [u8; 8]) {
    mock.push_exchange(&polling_found_packet(idm, pmm));
}

/// Seed one relayed card response.
pub fn seed_card_response(mock: &mut MockTransport, card_response: &[u8]) {
    mock.push_exchange(&thru_packet(card_response));
}

/// Build an initialized reader with the sample card already acquired and
/// the given card responses queued.
pub fn acquired_reader_with(card_responses: &[Vec<u8>]) -> Reader<Initialized> {
    let mut mock = MockTransport::new();
    seed_init(&mut mock);
    seed_poll_found(&mut mock, SAMPLE_IDM, SAMPLE_PMM);
    for r in card_responses {
        seed_card_response(&mut mock, r);
    }
    let mut reader = Reader::new(Box::new(mock)).initialize().expect("init");
    reader.poll(SystemCode::ANY).expect("poll").expect("target");
    reader
}

/// Transport wrapper delegating into a shared MockTransport so tests can
/// inspect sent frames after the Reader has taken ownership.
pub struct SharedTransport {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedTransport {
    pub fn new(inner: Rc<RefCell<MockTransport>>) -> Self {
        Self { inner }
    }
}

impl Transport for SharedTransport {
    fn send(&mut self, data: &[u8]) -> crate::Result<()> {
        self.inner.borrow_mut().send(data)
    }

    fn receive_until(&mut self, deadline: std::time::Instant) -> crate::Result<Vec<u8>> {
        self.inner.borrow_mut().receive_until(deadline)
    }

    fn flush(&mut self) -> crate::Result<()> {
        self.inner.borrow_mut().flush()
    }

    fn cancel(&mut self) -> crate::Result<()> {
        self.inner.borrow_mut().cancel()
    }
}

/// As `acquired_reader_with`, but also hands back the shared mock for
/// assertions on what was sent.
pub fn acquired_reader_shared(
    card_responses: &[Vec<u8>],
) -> (Reader<Initialized>, Rc<RefCell<MockTransport>>) {
    let mut mock = MockTransport::new();
    seed_init(&mut mock);
    seed_poll_found(&mut mock, SAMPLE_IDM, SAMPLE_PMM);
    for r in card_responses {
        seed_card_response(&mut mock, r);
    }
    let shared = Rc::new(RefCell::new(mock));
    let transport = SharedTransport::new(shared.clone());
    let mut reader = Reader::new(Box::new(transport)).initialize().expect("init");
    reader.poll(SystemCode::ANY).expect("poll").expect("target");
    (reader, shared)
}

/// Decode the card payload out of a sent CommunicateThruEx frame.
pub fn card_payload_of(frame: &[u8]) -> Vec<u8> {
    let packet = crate::protocol::Frame::decode(frame).expect("frame");
    assert_eq!(&packet[..2], &[0xd4, 0xa0], "not a CommunicateThruEx frame");
    packet[5..].to_vec()
}
