#[path = "../common/mod.rs"]
mod common;

use rcs620s::Error;
use rcs620s::protocol::{Frame, Response};

#[test]
fn polling_found_decodes_to_identity() {
    let frame =
        common::fixtures::polling_found_frame(common::fixtures::sample_idm_bytes(), [0x20; 8]);
    let payload = Frame::decode(&frame).unwrap();
    match Response::decode(0x4a, &payload).unwrap() {
        Response::InListPassiveTarget {
            target: Some(identity),
        } => {
            assert_eq!(
                identity.idm.as_bytes(),
                &common::fixtures::sample_idm_bytes()
            );
            assert_eq!(identity.pmm.as_bytes(), &[0x20; 8]);
        }
        other => panic!("expected a found target, got {:?}", other),
    }
}

#[test]
fn polling_empty_decodes_to_none() {
    let payload = Frame::decode(&common::fixtures::polling_empty_frame()).unwrap();
    match Response::decode(0x4a, &payload).unwrap() {
        Response::InListPassiveTarget { target: None } => {}
        other => panic!("expected an empty field, got {:?}", other),
    }
}

#[test]
fn thru_response_yields_card_bytes() {
    let card = common::fixtures::request_service_response(
        common::fixtures::sample_idm_bytes(),
        0x0100,
    );
    let payload = Frame::decode(&common::fixtures::thru_frame(&card)).unwrap();
    match Response::decode(0xa0, &payload).unwrap() {
        Response::CommunicateThruEx { data } => assert_eq!(data, card),
        other => panic!("expected relayed card data, got {:?}", other),
    }
}

#[test]
fn response_for_wrong_command_is_rejected() {
    let payload = Frame::decode(&common::fixtures::rf_ack_frame()).unwrap();
    assert!(matches!(
        Response::decode(0x4a, &payload),
        Err(Error::UnexpectedResponse { .. })
    ));
}

#[test]
fn thru_status_failure_surfaces() {
    let frame = Frame::encode(&[0xd5, 0xa1, 0x01, 0x01]).unwrap();
    let payload = Frame::decode(&frame).unwrap();
    assert!(matches!(
        Response::decode(0xa0, &payload),
        Err(Error::ReaderStatus { status: 0x01 })
    ));
}
