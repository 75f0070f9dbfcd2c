//! ASCOM standard error codes
//!
//! Code values follow <https://ascom-standards.org/newdocs/exceptions.html>
//! and are bit-exact: Alpaca clients match on the numeric value, so they must
//! never change.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric band an error code falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// `0x0`, success
    Ok,
    /// ASCOM driver errors, `0x400`-`0x4FF`
    Driver,
    /// Driver-specific custom errors, `0x500` up to the COM range
    Custom,
    /// Legacy COM errors, `0x80040000` and above
    Com,
    /// `0x1`-`0x3FF`, not assigned by the standard
    Reserved,
}

/// ASCOM error code
///
/// A plain 32-bit value. No range validation is performed anywhere: drivers
/// are free to mint custom codes at [`AscomErrorCode::CUSTOM_BASE`] and up
/// for conditions the standard set does not cover.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct AscomErrorCode(u32);

impl AscomErrorCode {
    /// Success. Never carried by a raised error.
    pub const OK: Self = Self(0x0);

    /// The requested method is not implemented by this device
    pub const NOT_IMPLEMENTED: Self = Self(0x400);
    /// A supplied value is out of range or otherwise unacceptable
    pub const INVALID_VALUE: Self = Self(0x401);
    /// A value was read before it was first set
    pub const VALUE_NOT_SET: Self = Self(0x402);
    /// The device is not connected
    pub const NOT_CONNECTED: Self = Self(0x407);
    /// The operation is not valid while the mount is parked
    pub const INVALID_WHILE_PARKED: Self = Self(0x408);
    /// The operation is not valid while the dome is slaved
    pub const INVALID_WHILE_SLAVED: Self = Self(0x409);
    /// The driver's settings provider failed
    pub const SETTINGS_PROVIDER: Self = Self(0x40A);
    /// The operation is not valid in the device's current state
    pub const INVALID_OPERATION: Self = Self(0x40B);
    /// The requested action is not implemented by this device
    pub const ACTION_NOT_IMPLEMENTED: Self = Self(0x40C);

    /// Legacy COM error with no more specific code
    pub const UNSPECIFIED: Self = Self(0x8004_0000);
    /// Legacy COM error for a driver used before initialization
    pub const NOT_INITIALIZED: Self = Self(0x8004_0001);

    /// First code of the ASCOM driver error band
    pub const DRIVER_BASE: u32 = 0x400;
    /// Last code of the ASCOM driver error band
    pub const DRIVER_MAX: u32 = 0x4FF;
    /// First code available for driver-specific custom errors
    pub const CUSTOM_BASE: u32 = 0x500;
    /// Start of the legacy COM error range
    pub const COM_BASE: u32 = 0x8004_0000;

    /// Wrap a raw code value, standard or custom, without validation
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    /// The raw numeric value, as sent in the Alpaca `ErrorNumber` field
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// Whether this is the success code
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Classify the code by the numeric band it falls into
    pub const fn band(self) -> Band {
        match self.0 {
            0x0 => Band::Ok,
            Self::DRIVER_BASE..=Self::DRIVER_MAX => Band::Driver,
            Self::CUSTOM_BASE..=0x8003_FFFF => Band::Custom,
            Self::COM_BASE..=u32::MAX => Band::Com,
            _ => Band::Reserved,
        }
    }
}

impl From<u32> for AscomErrorCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl From<AscomErrorCode> for u32 {
    fn from(code: AscomErrorCode) -> Self {
        code.0
    }
}

impl fmt::Display for AscomErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn expected_band(raw: u32) -> Band {
        if raw == 0 {
            Band::Ok
        } else if raw < AscomErrorCode::DRIVER_BASE {
            Band::Reserved
        } else if raw <= AscomErrorCode::DRIVER_MAX {
            Band::Driver
        } else if raw < AscomErrorCode::COM_BASE {
            Band::Custom
        } else {
            Band::Com
        }
    }

    proptest! {
        #[test]
        fn custom_codes_roundtrip_unvalidated(
            raw in AscomErrorCode::CUSTOM_BASE..AscomErrorCode::COM_BASE
        ) {
            let code = AscomErrorCode::new(raw);
            prop_assert_eq!(code.as_u32(), raw);
            prop_assert_eq!(code.band(), Band::Custom);
        }

        #[test]
        fn band_matches_boundary_constants(raw in any::<u32>()) {
            prop_assert_eq!(AscomErrorCode::new(raw).band(), expected_band(raw));
        }

        #[test]
        fn u32_conversions_roundtrip(raw in any::<u32>()) {
            let code = AscomErrorCode::from(raw);
            prop_assert_eq!(u32::from(code), raw);
        }
    }
}
