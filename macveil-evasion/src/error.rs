//! Error types for the evasion library
//!
//! Each precondition and lookup failure has its own variant so callers can
//! tell "not root" apart from "interface still up" without string matching.

use macveil_netlink::NetlinkError;
use thiserror::Error;

/// Result type alias using [`EvasionError`]
pub type Result<T> = std::result::Result<T, EvasionError>;

/// Errors that can occur during address inspection, generation and spoofing
#[derive(Error, Debug)]
pub enum EvasionError {
    /// Interface does not exist
    #[error("Interface not found: {0}")]
    InterfaceNotFound(String),

    /// Not running as root
    #[error("Insufficient privileges to set MAC on {0}. Run as root")]
    InsufficientPrivilege(String),

    /// Interface must be administratively down for the address to change
    #[error("Interface {0} is still up, cannot set MAC")]
    InterfaceStillUp(String),

    /// Text is not a 6-byte hardware address
    #[error("Invalid MAC address: {0}")]
    InvalidAddressFormat(String),

    /// Seed for randomization is not 6 bytes
    #[error("Invalid size for MAC byte array: {0}")]
    InvalidLength(usize),

    /// Randomization may only start at the first byte or after the OUI
    #[error("Invalid start index: {0} (expected 0 or 3)")]
    InvalidStartIndex(usize),

    /// Prefix is not in the OUI database
    #[error("No vendor registered for {0}")]
    UnknownVendor(String),

    /// Vendor entry carries no device classification
    #[error("Vendor {0} has no device type")]
    NoDeviceType(String),

    /// Driver rejected a query
    #[error("Device query on {interface} failed (errno {code}): {reason}")]
    DeviceQueryFailed {
        /// Interface the query targeted
        interface: String,
        /// errno reported by the kernel
        code: i32,
        /// Kernel error text
        reason: String,
    },

    /// Driver rejected a control request
    #[error("Device control on {interface} failed (errno {code}): {reason}")]
    DeviceControlFailed {
        /// Interface the request targeted
        interface: String,
        /// errno reported by the kernel
        code: i32,
        /// Kernel error text
        reason: String,
    },

    /// Interface enumeration or identity lookup failed
    #[error("System error: {0}")]
    System(String),

    /// Random number generation failed
    #[error("RNG error: {0}")]
    RngError(String),
}

impl EvasionError {
    /// Check if this error is a permission error
    #[must_use]
    pub fn is_permission_error(&self) -> bool {
        matches!(self, EvasionError::InsufficientPrivilege(_))
            || self.code() == Some(libc::EPERM)
    }

    /// OS error code for kernel failures
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        match self {
            EvasionError::DeviceQueryFailed { code, .. }
            | EvasionError::DeviceControlFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl From<NetlinkError> for EvasionError {
    fn from(err: NetlinkError) -> Self {
        match err {
            NetlinkError::InterfaceNotFound { name }
            | NetlinkError::InvalidInterfaceName { name, .. } => {
                EvasionError::InterfaceNotFound(name)
            }
            NetlinkError::QueryFailed {
                interface,
                request,
                code,
                reason,
            } => EvasionError::DeviceQueryFailed {
                interface,
                code,
                reason: format!("{}: {}", request, reason),
            },
            NetlinkError::ControlFailed {
                interface,
                request,
                code,
                reason,
            } => EvasionError::DeviceControlFailed {
                interface,
                code,
                reason: format!("{}: {}", request, reason),
            },
            NetlinkError::EnumerationFailed { reason } | NetlinkError::IdentityError { reason } => {
                EvasionError::System(reason)
            }
        }
    }
}
