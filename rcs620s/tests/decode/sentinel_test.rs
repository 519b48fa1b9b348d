// A zero-filled block means "no entry" for every scheme. None of the
// decoders may turn it into a record with a genuine zero balance.

#[path = "../common/mod.rs"]
mod common;

use rcs620s::decode::{
    decode_edy_transaction, decode_nanaco_transaction, decode_suica_history, decode_waon_points,
    decode_waon_transaction,
};

#[test]
fn zero_block_is_no_entry_for_every_scheme() {
    let zero = common::fixtures::zero_block();

    assert_eq!(decode_suica_history(&zero), None);
    assert_eq!(decode_edy_transaction(&zero), None);
    assert_eq!(decode_nanaco_transaction(&zero), None);
    assert_eq!(decode_waon_transaction(&zero, &zero), None);
    assert_eq!(decode_waon_points(&zero), None);
}
