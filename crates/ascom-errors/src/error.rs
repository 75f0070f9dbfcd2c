//! Error type raised by Alpaca device driver operations

use serde::{Deserialize, Serialize};

use crate::codes::AscomErrorCode;

/// Failure raised by a driver operation
///
/// Pairs an ASCOM error code with a human-readable message. The pair is
/// fixed at construction and travels up the call stack unchanged until the
/// server layer reads it; serde field names match the Alpaca `ErrorNumber`
/// and `ErrorMessage` response fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("ASCOM error {code}: {message}")]
pub struct AscomError {
    #[serde(rename = "ErrorNumber")]
    code: AscomErrorCode,
    #[serde(rename = "ErrorMessage")]
    message: String,
}

impl AscomError {
    /// Create an error with an explicit code and message
    ///
    /// The code is not checked against the standard bands, so drivers can
    /// signal vendor-specific conditions.
    pub fn new(code: AscomErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Method not implemented by this device (0x400)
    pub fn not_implemented() -> Self {
        Self::new(AscomErrorCode::NOT_IMPLEMENTED, "Method not implemented")
    }

    /// Supplied value is invalid (0x401)
    pub fn invalid_value() -> Self {
        Self::new(AscomErrorCode::INVALID_VALUE, "Invalid value")
    }

    /// Device is not connected (0x407)
    pub fn not_connected() -> Self {
        Self::new(AscomErrorCode::NOT_CONNECTED, "Device not connected")
    }

    /// Operation not valid in the current device state (0x40B)
    pub fn invalid_operation() -> Self {
        Self::new(AscomErrorCode::INVALID_OPERATION, "Invalid operation")
    }

    /// Operation not valid while the mount is parked (0x408)
    pub fn invalid_while_parked() -> Self {
        Self::new(AscomErrorCode::INVALID_WHILE_PARKED, "Invalid while parked")
    }

    /// Operation not valid while the dome is slaved (0x409)
    pub fn invalid_while_slaved() -> Self {
        Self::new(AscomErrorCode::INVALID_WHILE_SLAVED, "Invalid while slaved")
    }

    /// The ASCOM error code
    pub fn code(&self) -> AscomErrorCode {
        self.code
    }

    /// The human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type alias for driver operations
pub type Result<T> = std::result::Result<T, AscomError>;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn explicit_message_never_changes_the_code(message in ".*") {
            let error = AscomError::new(AscomErrorCode::NOT_CONNECTED, message.clone());
            prop_assert_eq!(error.code(), AscomErrorCode::NOT_CONNECTED);
            prop_assert_eq!(error.message(), message.as_str());
        }

        #[test]
        fn custom_codes_are_accepted_as_is(
            raw in AscomErrorCode::CUSTOM_BASE..AscomErrorCode::COM_BASE,
            message in ".*"
        ) {
            let error = AscomError::new(AscomErrorCode::new(raw), message);
            prop_assert_eq!(error.code().as_u32(), raw);
        }
    }
}
