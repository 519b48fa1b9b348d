// rcs620s-rs/rcs620s/src/reader/handle.rs

use std::marker::PhantomData;
use std::time::Instant;

use crate::constants::{DEFAULT_COMMAND_TIMEOUT_MS, PUSH_TIMEOUT_MS};
use crate::protocol::{Command, Frame, Response};
use crate::transport::Transport;
use crate::types::{CardIdentity, Idm, Pmm, SystemCode};
use crate::utils::deadline_in;
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Session handle for one RC-S620/S on one serial link.
///
/// The handle owns the transport exclusively and enforces device
/// initialization at compile time: commands are only available on
/// `Reader<Initialized>`. Runtime state is the acquired target identity,
/// overwritten by each successful poll and cleared by `rf_off`.
pub struct Reader<State = Uninitialized> {
    transport: Box<dyn Transport>,
    /// Per-command deadline in milliseconds. Callers may shorten it before
    /// issuing a long-running exchange.
    pub timeout_ms: u64,
    target: Option<CardIdentity>,
    _state: PhantomData<State>,
}

impl Reader<Uninitialized> {
    /// Wrap a transport. No bytes are exchanged until `initialize`.
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self {
            transport,
            timeout_ms: DEFAULT_COMMAND_TIMEOUT_MS,
            target: None,
            _state: PhantomData,
        }
    }

    /// Reset the device to a known firmware state.
    ///
    /// Issues the cancel sequence first so a reader still executing an
    /// abandoned command recovers, then the three RFConfiguration steps
    /// (timings, retries, additional wait). Safe to run repeatedly.
    pub fn initialize(mut self) -> Result<Reader<Initialized>> {
        self.transport.cancel()?;

        for cmd in [
            Command::rf_various_timings(),
            Command::rf_max_retries(),
            Command::rf_additional_wait(),
        ] {
            match execute(&mut *self.transport, &cmd, self.timeout_ms) {
                Ok(Response::RfConfiguration) => {}
                Ok(other) => {
                    return Err(Error::UnexpectedResponse {
                        expected: crate::constants::RESP_RF_CONFIGURATION,
                        actual: other.response_code(),
                    });
                }
                Err(Error::Timeout) => return Err(Error::DeviceNotResponding),
                Err(e) => return Err(e),
            }
        }

        log::debug!("reader initialized");
        Ok(Reader {
            transport: self.transport,
            timeout_ms: self.timeout_ms,
            target: None,
            _state: PhantomData,
        })
    }
}

impl Reader<Initialized> {
    /// Poll the field for one card within `system_code`.
    ///
    /// `Ok(None)` — no card answered before the deadline — is the expected
    /// steady-state outcome, not an error. On success the returned identity
    /// is also retained as the session's acquired target.
    pub fn poll(&mut self, system_code: SystemCode) -> Result<Option<CardIdentity>> {
        let cmd = Command::InListPassiveTarget {
            system_code,
            request_code: 0,
            time_slot: 0,
        };
        match execute(&mut *self.transport, &cmd, self.timeout_ms) {
            Ok(Response::InListPassiveTarget { target }) => {
                if let Some(identity) = target {
                    log::debug!("target acquired: idm={}", identity.idm.to_hex());
                    self.target = Some(identity);
                }
                Ok(target)
            }
            Ok(other) => Err(Error::UnexpectedResponse {
                expected: crate::constants::RESP_IN_LIST_PASSIVE_TARGET,
                actual: other.response_code(),
            }),
            // no card in the field
            Err(Error::Timeout) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Relay one application-layer command to the acquired card and return
    /// its raw response.
    ///
    /// The card's echoed IDm is checked against the acquired target; a
    /// mismatch means cross-talk or a swap mid-transaction and surfaces as
    /// `IdentityMismatch`. Failures are not retried here: the caller treats
    /// them as "this service is unavailable" and moves on.
    pub fn card_command(&mut self, payload: &[u8]) -> Result<Vec<u8>> {
        self.card_command_with_timeout(payload, self.timeout_ms)
    }

    /// As [`Reader::card_command`], under an explicit deadline instead of
    /// the session timeout.
    pub fn card_command_with_timeout(
        &mut self,
        payload: &[u8],
        timeout_ms: u64,
    ) -> Result<Vec<u8>> {
        let target = self.target.ok_or(Error::NoTarget)?;

        let cmd = Command::CommunicateThruEx {
            timeout_ms,
            payload: payload.to_vec(),
        };
        match execute(&mut *self.transport, &cmd, timeout_ms)? {
            Response::CommunicateThruEx { data } => {
                // Card responses echo the IDm at bytes 1..9.
                if data.len() >= 9 && data[1..9] != *target.idm.as_bytes() {
                    return Err(Error::IdentityMismatch);
                }
                Ok(data)
            }
            other => Err(Error::UnexpectedResponse {
                expected: crate::constants::RESP_COMMUNICATE_THRU_EX,
                actual: other.response_code(),
            }),
        }
    }

    /// Best-effort one-way notification to the card (buzzer/LED feedback).
    ///
    /// Runs under its own, longer deadline. A failed push is logged and
    /// reported but must never end the session; callers keep cycling.
    pub fn push(&mut self, data: &[u8]) -> Result<()> {
        let result = crate::card::operations::push(self, data, PUSH_TIMEOUT_MS);
        if let Err(e) = &result {
            log::warn!("push failed (non-fatal): {}", e);
        }
        result
    }

    /// De-energize the RF field and release the acquired target.
    ///
    /// Always safe to call; every polling cycle ends with it so the next
    /// poll re-detects presence (this is also how card removal is seen).
    pub fn rf_off(&mut self) -> Result<()> {
        execute(
            &mut *self.transport,
            &Command::rf_field_off(),
            self.timeout_ms,
        )?;
        self.target = None;
        Ok(())
    }

    /// IDm of the acquired target, if any.
    pub fn idm(&self) -> Option<&Idm> {
        self.target.as_ref().map(|t| &t.idm)
    }

    /// PMm of the acquired target, if any.
    pub fn pmm(&self) -> Option<&Pmm> {
        self.target.as_ref().map(|t| &t.pmm)
    }

    /// The full acquired identity, if any.
    pub fn target(&self) -> Option<&CardIdentity> {
        self.target.as_ref()
    }
}

/// One command/response exchange under a single deadline.
///
/// The line is flushed first to recover from any earlier partial exchange.
/// The reader normally answers with an ACK frame followed by the response
/// frame; a response arriving without the ACK is accepted. A deadline
/// expiry cancels the in-flight command before reporting `Timeout`.
fn execute(transport: &mut dyn Transport, cmd: &Command, timeout_ms: u64) -> Result<Response> {
    transport.flush()?;

    let frame = Frame::encode(&cmd.encode())?;
    transport.send(&frame)?;

    let deadline = deadline_in(timeout_ms);
    let first = receive_or_cancel(transport, deadline)?;
    let data = if Frame::is_ack(&first) {
        receive_or_cancel(transport, deadline)?
    } else {
        first
    };

    let payload = Frame::decode(&data)?;
    Response::decode(cmd.command_code(), &payload)
}

fn receive_or_cancel(transport: &mut dyn Transport, deadline: Instant) -> Result<Vec<u8>> {
    match transport.receive_until(deadline) {
        Err(Error::Timeout) => {
            // the far end may still be executing; abort it before returning
            let _ = transport.cancel();
            Err(Error::Timeout)
        }
        other => other,
    }
}
