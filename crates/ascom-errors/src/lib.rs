//! ASCOM Alpaca error vocabulary
//!
//! Numeric error codes and the error type shared by ASCOM Alpaca device
//! drivers. A driver raises an [`AscomError`] when an operation cannot
//! complete; the Alpaca server layer catches it at the request boundary and
//! maps its code and message onto the wire-level error response. Nothing in
//! this crate performs that translation, it only defines the vocabulary.

pub mod codes;
pub mod error;

pub use codes::{AscomErrorCode, Band};
pub use error::{AscomError, Result};
