//! # macveil-evasion
//!
//! Hardware address inspection, generation and spoofing for a single network
//! interface at a time.
//!
//! ## Features
//!
//! - **Address Access**: current and burned-in addresses, "has it changed?"
//! - **Address Control**: set or revert an address behind root and link-down checks
//! - **Randomization**: random addresses with explicit admin-bit control
//! - **OUI Database**: vendor lookup, device-type classification, popular prefixes
//! - **Spoofing Policies**: random, same-vendor, same-device-type, any-device-type,
//!   popular
//!
//! ## Example
//!
//! ```no_run
//! use macveil_evasion::{KernelLinkOps, MacManager, OuiDatabase, SpoofPolicy, Spoofer};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let spoofer = Spoofer::new(MacManager::new(KernelLinkOps), OuiDatabase::builtin());
//!
//!     let outcome = spoofer.spoof("eth0", SpoofPolicy::Popular)?;
//!     println!("{} -> {}", outcome.previous, outcome.current);
//!
//!     spoofer.manager().revert("eth0")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Platform Support
//!
//! Linux only, through `macveil-netlink`. Changing an address requires root and
//! an administratively down interface.
//!
//! ## Security Considerations
//!
//! - Uses cryptographically secure random number generation (`getrandom`, `OsRng`)
//! - Generated addresses are always unicast
//! - Precondition checks are not atomic with the kernel write

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod mac;
pub mod ops;
pub mod oui_data;
pub mod spoof;
pub mod vendor;

pub use error::{EvasionError, Result};
pub use mac::{randomize, InterfaceAddresses, MacAddress, MacManager};
pub use ops::{InterfaceInfo, KernelLinkOps, LinkOps};
pub use spoof::{SpoofOutcome, SpoofPolicy, Spoofer};
pub use vendor::{OuiDatabase, OuiRecord, VendorRecord};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check if running with sufficient privileges to change addresses
///
/// # Errors
///
/// Returns an error if the process identity cannot be resolved
pub fn check_privileges() -> Result<bool> {
    KernelLinkOps.is_superuser()
}

/// Convenience function to randomize an interface's address against the
/// kernel, with the locally administered bit set.
///
/// # Errors
///
/// Returns an error if any precondition or the commit fails
///
/// # Example
///
/// ```no_run
/// use macveil_evasion::quick_randomize_mac;
///
/// if let Ok(new_mac) = quick_randomize_mac("eth0") {
///     println!("New MAC: {}", new_mac);
/// }
/// ```
pub fn quick_randomize_mac(interface: &str) -> Result<MacAddress> {
    let spoofer = Spoofer::new(MacManager::new(KernelLinkOps), OuiDatabase::builtin());
    let outcome = spoofer.spoof_random(interface, false)?;
    Ok(outcome.current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_check() {
        // Should not panic
        let _ = check_privileges();
    }

    #[test]
    fn test_quick_randomize_missing_interface() {
        assert!(quick_randomize_mac("mvtest-none0").is_err());
    }
}
