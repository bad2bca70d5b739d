use thiserror::Error;

/// Unified error type for all macveil-netlink operations.
///
/// Every variant names the interface and the control request involved so the
/// caller can tell a missing device apart from a driver that refused the call.
#[derive(Error, Debug)]
pub enum NetlinkError {
    #[error("Interface '{name}' not found. Verify interface exists with 'ip link show'.")]
    InterfaceNotFound { name: String },

    #[error("Invalid interface name '{name}': {reason}")]
    InvalidInterfaceName { name: String, reason: String },

    #[error("Device query {request} on '{interface}' failed (errno {code}): {reason}")]
    QueryFailed {
        interface: String,
        request: &'static str,
        code: i32,
        reason: String,
    },

    #[error("Device control {request} on '{interface}' failed (errno {code}): {reason}")]
    ControlFailed {
        interface: String,
        request: &'static str,
        code: i32,
        reason: String,
    },

    #[error("Failed to enumerate interfaces: {reason}")]
    EnumerationFailed { reason: String },

    #[error("Failed to resolve process identity: {reason}")]
    IdentityError { reason: String },
}

impl NetlinkError {
    /// OS error code carried by the failure, if the kernel produced one.
    #[must_use]
    pub fn code(&self) -> Option<i32> {
        match self {
            NetlinkError::QueryFailed { code, .. } | NetlinkError::ControlFailed { code, .. } => {
                Some(*code)
            }
            _ => None,
        }
    }

    pub(crate) fn query(interface: &str, request: &'static str, err: &std::io::Error) -> Self {
        NetlinkError::QueryFailed {
            interface: interface.to_string(),
            request,
            code: err.raw_os_error().unwrap_or(0),
            reason: err.to_string(),
        }
    }

    pub(crate) fn control(interface: &str, request: &'static str, err: &std::io::Error) -> Self {
        NetlinkError::ControlFailed {
            interface: interface.to_string(),
            request,
            code: err.raw_os_error().unwrap_or(0),
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NetlinkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_from_io_error() {
        let io = std::io::Error::from_raw_os_error(libc::EOPNOTSUPP);
        let err = NetlinkError::query("eth0", "SIOCETHTOOL", &io);
        assert_eq!(err.code(), Some(libc::EOPNOTSUPP));
        assert!(err.to_string().contains("eth0"));
        assert!(err.to_string().contains("SIOCETHTOOL"));
    }

    #[test]
    fn test_not_found_has_no_code() {
        let err = NetlinkError::InterfaceNotFound {
            name: "eth9".into(),
        };
        assert_eq!(err.code(), None);
    }
}
