// rcs620s-rs/rcs620s/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// IDm - Newtype Pattern (8 バイト)
///
/// The manufacture ID of the card currently addressed. Overwritten on each
/// successful poll, never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Idm([u8; 8]);

impl Idm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::Truncated {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// PMm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pmm([u8; 8]);

impl Pmm {
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 8 {
            return Err(Error::Truncated {
                expected: 8,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 8];
        arr.copy_from_slice(&bytes[..8]);
        Ok(Self(arr))
    }
}

/// The (IDm, PMm) pair identifying one card across polling cycles.
///
/// Equality of two identities is the sole "same card still in field" /
/// "new card presented" distinction; there is no time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardIdentity {
    pub idm: Idm,
    pub pmm: Pmm,
}

impl CardIdentity {
    pub fn new(idm: Idm, pmm: Pmm) -> Self {
        Self { idm, pmm }
    }

    pub fn idm(&self) -> &Idm {
        &self.idm
    }

    pub fn pmm(&self) -> &Pmm {
        &self.pmm
    }
}

/// SystemCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SystemCode(u16);

impl SystemCode {
    /// Wildcard matching any system
    pub const ANY: Self = Self(0xffff);
    /// Cybernetics area (Suica, PASMO and friends)
    pub const CYBERNE: Self = Self(0x0003);
    /// FeliCa common area (Edy, nanaco, WAON)
    pub const COMMON: Self = Self(0xfe00);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

/// ServiceCode (u16)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceCode(u16);

impl ServiceCode {
    /// Transit (Passnet) history service
    pub const PASSNET: Self = Self(0x090f);
    /// Edy transaction history service
    pub const EDY: Self = Self(0x170f);
    /// nanaco transaction history service
    pub const NANACO: Self = Self(0x564f);
    /// WAON transaction history service
    pub const WAON: Self = Self(0x680b);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_le_bytes(&self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

/// BlockData (16 バイト) - one service block as read from the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// True when every byte of the block is zero.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::Truncated {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(&bytes[..16]);
        Ok(Self(arr))
    }
}
