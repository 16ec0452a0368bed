//! Error types for subnet calculations.

use thiserror::Error;

/// Input validation failures raised by the subnet engine.
///
/// Both variants carry the offending input text so callers can decide how to
/// present it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubnetError {
    #[error("Invalid IPv4 address format: '{0}'")]
    InvalidAddressFormat(String),

    #[error("Invalid prefix length: '{0}' (must be between 0 and 32)")]
    InvalidPrefixRange(String),
}
