// One full polling cycle against a mocked link: reset, poll, service
// probe, history sweep, decode, RF off. This is the call pattern the
// orchestration loop runs once per cycle.

#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use rcs620s::decode::{TerminalKind, UsageKind, decode_suica_history};
use rcs620s::reader::Reader;
use rcs620s::transport::MockTransport;
use rcs620s::types::{ServiceCode, SystemCode};
use rcs620s::{card, constants};

fn seed(mock: &mut MockTransport, frame: Vec<u8>) {
    mock.push_response(constants::ACK.to_vec());
    mock.push_response(frame);
}

#[test]
fn full_transit_cycle() {
    let idm = fixtures::sample_idm_bytes();
    let mut mock = MockTransport::new();

    // initialize: three RFConfiguration exchanges
    for _ in 0..3 {
        seed(&mut mock, fixtures::rf_ack_frame());
    }
    // poll
    seed(
        &mut mock,
        fixtures::polling_found_frame(idm, fixtures::sample_pmm_bytes()),
    );
    // request service
    seed(
        &mut mock,
        fixtures::thru_frame(&fixtures::request_service_response(idm, 0x0100)),
    );
    // two history blocks, then the card refuses further reads
    seed(
        &mut mock,
        fixtures::thru_frame(&fixtures::read_response(
            idm,
            &fixtures::suica_gate_exit_block(),
        )),
    );
    seed(
        &mut mock,
        fixtures::thru_frame(&fixtures::read_response(idm, &[0u8; 16])),
    );
    // rf off
    seed(&mut mock, fixtures::rf_ack_frame());

    let mut reader = Reader::new(Box::new(mock)).initialize().unwrap();

    let identity = reader.poll(SystemCode::CYBERNE).unwrap().expect("a card");
    assert_eq!(identity.idm.as_bytes(), &idm);

    assert!(card::request_service(&mut reader, ServiceCode::PASSNET).unwrap());

    let blocks = card::read_history(
        &mut reader,
        ServiceCode::PASSNET,
        constants::MAX_HISTORY_ENTRIES,
    )
    .unwrap();
    assert_eq!(blocks.len(), 2);

    let entries: Vec<_> = blocks
        .iter()
        .filter_map(decode_suica_history)
        .collect();
    // the zero block is the end-of-history sentinel, not an entry
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].terminal, TerminalKind::AutomaticGate);
    assert_eq!(entries[0].usage, UsageKind::GateExit);
    assert_eq!(entries[0].balance, 100);

    reader.rf_off().unwrap();
    assert!(reader.target().is_none());
}

#[test]
fn empty_field_cycle_is_cheap_and_clean() {
    let mut mock = MockTransport::new();
    for _ in 0..3 {
        seed(&mut mock, fixtures::rf_ack_frame());
    }
    seed(&mut mock, fixtures::polling_empty_frame());

    let mut reader = Reader::new(Box::new(mock)).initialize().unwrap();
    // the expected steady-state outcome: no target, no error
    assert!(reader.poll(SystemCode::CYBERNE).unwrap().is_none());
    assert!(reader.target().is_none());
}

#[test]
fn service_probe_failure_skips_card_not_session() {
    let idm = fixtures::sample_idm_bytes();
    let mut mock = MockTransport::new();
    for _ in 0..3 {
        seed(&mut mock, fixtures::rf_ack_frame());
    }
    seed(
        &mut mock,
        fixtures::polling_found_frame(idm, fixtures::sample_pmm_bytes()),
    );
    // the probed service is absent on this card
    seed(
        &mut mock,
        fixtures::thru_frame(&fixtures::request_service_response(idm, 0xffff)),
    );
    seed(&mut mock, fixtures::rf_ack_frame()); // rf off

    let mut reader = Reader::new(Box::new(mock)).initialize().unwrap();
    reader.poll(SystemCode::COMMON).unwrap().expect("a card");
    assert!(!card::request_service(&mut reader, ServiceCode::EDY).unwrap());

    // the session carries on to the end of the cycle
    reader.rf_off().unwrap();
}
