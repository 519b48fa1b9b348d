// rcs620s-rs/rcs620s/src/protocol/frame.rs

use crate::constants::{ACK, MAX_PAYLOAD_LEN, MIN_FRAME_LEN, POSTAMBLE, PREAMBLE};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// Wire frame helper for the RC-S620/S serial protocol.
///
/// Normal frame layout:
/// `[Preamble(3)] [Len(1)] [LCS(1)] [Payload(n)] [DCS(1)] [Postamble(1)]`
/// with preamble `00 00 FF` and postamble `00`.
///
/// The six-byte ACK frame `00 00 FF 00 FF 00` is a separate frame kind and
/// carries no payload; callers must test [`Frame::is_ack`] before
/// [`Frame::decode`].
pub struct Frame;

impl Frame {
    /// Encode a payload into a full wire frame.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(Error::LengthOverflow {
                len: payload.len(),
                max: MAX_PAYLOAD_LEN,
            });
        }

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(MIN_FRAME_LEN + payload.len());
        out.extend_from_slice(&PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(POSTAMBLE);
        Ok(out)
    }

    /// True when `bytes` is exactly the ACK frame.
    pub fn is_ack(bytes: &[u8]) -> bool {
        bytes == ACK
    }

    /// Inspect a partially-accumulated receive buffer.
    ///
    /// Returns `Ok(Some(n))` when the first `n` bytes of `buf` form one
    /// complete frame (ACK or normal), `Ok(None)` when more bytes are
    /// needed, and an error as soon as the prefix can no longer become a
    /// valid frame. The announced length is bounded before the caller
    /// allocates or waits for it.
    pub fn wire_len(buf: &[u8]) -> Result<Option<usize>> {
        for (i, &expected) in PREAMBLE.iter().enumerate() {
            match buf.get(i) {
                None => return Ok(None),
                Some(&b) if b == expected => {}
                Some(_) => return Err(Error::MalformedPreamble),
            }
        }

        let (Some(&len), Some(&lcs_actual)) = (buf.get(3), buf.get(4)) else {
            return Ok(None);
        };

        // ACK uses the reserved (len, lcs) pair (0x00, 0xFF)
        if len == 0x00 && lcs_actual == 0xff {
            return Ok((buf.len() >= ACK.len()).then_some(ACK.len()));
        }

        if lcs_actual != lcs(len) {
            return Err(Error::ChecksumMismatch {
                expected: lcs(len),
                actual: lcs_actual,
            });
        }

        let total = MIN_FRAME_LEN + len as usize;
        Ok((buf.len() >= total).then_some(total))
    }

    /// Decode a full normal frame and return its payload.
    pub fn decode(frame: &[u8]) -> Result<Vec<u8>> {
        if frame.len() < MIN_FRAME_LEN {
            return Err(Error::Truncated {
                expected: MIN_FRAME_LEN,
                actual: frame.len(),
            });
        }

        if frame[..3] != PREAMBLE {
            return Err(Error::MalformedPreamble);
        }

        let len = frame[3];
        let lcs_expected = lcs(len);
        if frame[4] != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: frame[4],
            });
        }

        let required = MIN_FRAME_LEN + len as usize;
        if frame.len() != required {
            return Err(Error::LengthMismatch {
                expected: required,
                actual: frame.len(),
            });
        }

        let payload = &frame[5..5 + len as usize];
        let dcs_expected = dcs(payload);
        let dcs_actual = frame[5 + len as usize];
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        let post = frame[required - 1];
        if post != POSTAMBLE {
            return Err(Error::MalformedPostamble { actual: post });
        }

        Ok(payload.to_vec())
    }
}
