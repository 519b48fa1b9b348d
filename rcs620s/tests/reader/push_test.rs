// Push is best-effort: it either completes both steps or reports an error
// the caller is free to ignore. It must never leave the session unusable.

#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use rcs620s::constants;
use rcs620s::reader::Reader;
use rcs620s::transport::MockTransport;
use rcs620s::types::SystemCode;

fn seed(mock: &mut MockTransport, frame: Vec<u8>) {
    mock.push_response(constants::ACK.to_vec());
    mock.push_response(frame);
}

fn echo(idm: [u8; 8], code: u8, tail: u8) -> Vec<u8> {
    let mut r = vec![code];
    r.extend_from_slice(&idm);
    r.push(tail);
    r
}

#[test]
fn push_completes_with_inactivate() {
    let idm = fixtures::sample_idm_bytes();
    let data = [0x01, 0x02, 0x03, 0x04];
    let mut mock = MockTransport::new();
    for _ in 0..3 {
        seed(&mut mock, fixtures::rf_ack_frame());
    }
    seed(
        &mut mock,
        fixtures::polling_found_frame(idm, fixtures::sample_pmm_bytes()),
    );
    seed(
        &mut mock,
        fixtures::thru_frame(&echo(idm, 0xb1, data.len() as u8)),
    );
    seed(&mut mock, fixtures::thru_frame(&echo(idm, 0xa5, 0x00)));

    let mut reader = Reader::new(Box::new(mock)).initialize().unwrap();
    reader.poll(SystemCode::CYBERNE).unwrap().unwrap();
    reader.push(&data).unwrap();
}

#[test]
fn failed_push_leaves_the_session_running() {
    let (mut reader, mock) = rcs620s::test_support::acquired_reader_shared(&[]);

    // no push acknowledgement queued: the exchange times out
    assert!(reader.push(&[0x00]).is_err());

    // the cycle continues exactly as if the push had worked
    mock.borrow_mut()
        .push_exchange(&rcs620s::test_support::rf_ack_packet());
    reader.rf_off().unwrap();
    assert!(reader.target().is_none());
}
