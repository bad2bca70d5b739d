//! MAC Address management and randomization
//!
//! This module provides:
//! - A validated 6-byte [`MacAddress`] with IEEE bit semantics
//! - [`randomize`], the generator behind every spoofing policy
//! - [`MacManager`], which reads current/permanent addresses and commits new
//!   ones behind the privilege and link-state checks
//!
//! ## Security Notes
//!
//! - Uses `getrandom` for cryptographically secure randomness
//! - Bit 1 of the first octet (locally administered) is always set or cleared
//!   explicitly, never left to chance
//!
//! ## Example
//!
//! ```no_run
//! use macveil_evasion::{KernelLinkOps, MacManager};
//!
//! let manager = MacManager::new(KernelLinkOps);
//! let permanent = manager.permanent_address("eth0").unwrap();
//! manager.set_mac("eth0", &permanent).unwrap();
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{EvasionError, Result};
use crate::ops::{InterfaceInfo, LinkOps};

/// Length of a hardware address in bytes.
pub const MAC_LEN: usize = 6;
/// Length of the vendor prefix (OUI).
pub const OUI_LEN: usize = 3;
/// Bit 1 of the first octet: locally administered.
pub const LOCAL_BIT: u8 = 0x02;
/// Bit 0 of the first octet: multicast.
pub const MULTICAST_BIT: u8 = 0x01;

/// A validated MAC address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress {
    bytes: [u8; MAC_LEN],
}

impl MacAddress {
    /// Create a new MAC address from bytes
    #[must_use]
    pub fn new(bytes: [u8; MAC_LEN]) -> Self {
        Self { bytes }
    }

    /// Parse a MAC address from string
    ///
    /// Accepts six groups of two hex digits separated by `:` or `-`, in either
    /// case.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddressFormat` if the string is not a valid MAC address
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Get the raw bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; MAC_LEN] {
        &self.bytes
    }

    /// Check if this is a locally administered address
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.bytes[0] & LOCAL_BIT != 0
    }

    /// Check if this is a unicast address
    #[must_use]
    pub fn is_unicast(&self) -> bool {
        self.bytes[0] & MULTICAST_BIT == 0
    }

    /// Check if this is a multicast address
    #[must_use]
    pub fn is_multicast(&self) -> bool {
        !self.is_unicast()
    }

    /// Get the OUI (Organizationally Unique Identifier) portion
    #[must_use]
    pub fn oui(&self) -> [u8; OUI_LEN] {
        [self.bytes[0], self.bytes[1], self.bytes[2]]
    }

    /// Get the NIC-specific portion
    #[must_use]
    pub fn nic(&self) -> [u8; OUI_LEN] {
        [self.bytes[3], self.bytes[4], self.bytes[5]]
    }

    /// Randomize this address, keeping bytes before `start_index`.
    ///
    /// # Errors
    ///
    /// See [`randomize`].
    pub fn randomized(&self, start_index: usize, preserve_universal: bool) -> Result<Self> {
        randomize(&self.bytes, start_index, preserve_universal)
    }

    /// A vendor address: `oui` followed by a random device suffix.
    ///
    /// # Errors
    ///
    /// Returns `RngError` if the system RNG fails.
    pub fn with_oui(oui: [u8; OUI_LEN]) -> Result<Self> {
        let seed = [oui[0], oui[1], oui[2], 0, 0, 0];
        randomize(&seed, OUI_LEN, true)
    }
}

/// Produce a random address from `seed`.
///
/// Bytes `start_index..6` are replaced with random bytes; `start_index` must be
/// 0 (replace everything) or 3 (keep the vendor prefix). A freshly drawn first
/// octet is kept in the low nibble and made unicast. Afterwards bit 1 of the
/// first octet is cleared when `preserve_universal` is set and set otherwise.
///
/// # Errors
///
/// * `InvalidLength` - `seed` is not 6 bytes
/// * `InvalidStartIndex` - `start_index` is neither 0 nor 3
/// * `RngError` - the system RNG failed
pub fn randomize(seed: &[u8], start_index: usize, preserve_universal: bool) -> Result<MacAddress> {
    let mut bytes: [u8; MAC_LEN] = seed
        .try_into()
        .map_err(|_| EvasionError::InvalidLength(seed.len()))?;

    if start_index != 0 && start_index != OUI_LEN {
        return Err(EvasionError::InvalidStartIndex(start_index));
    }

    getrandom::getrandom(&mut bytes[start_index..])
        .map_err(|e| EvasionError::RngError(format!("Failed to get random bytes: {}", e)))?;

    if start_index == 0 {
        bytes[0] &= 0x0F & !MULTICAST_BIT;
    }

    if preserve_universal {
        bytes[0] &= !LOCAL_BIT;
    } else {
        bytes[0] |= LOCAL_BIT;
    }

    Ok(MacAddress { bytes })
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            self.bytes[0],
            self.bytes[1],
            self.bytes[2],
            self.bytes[3],
            self.bytes[4],
            self.bytes[5]
        )
    }
}

impl FromStr for MacAddress {
    type Err = EvasionError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let separator = if trimmed.contains('-') { '-' } else { ':' };
        let parts: Vec<&str> = trimmed.split(separator).collect();
        if parts.len() != MAC_LEN {
            return Err(EvasionError::InvalidAddressFormat(format!(
                "{}: expected 6 octets, got {}",
                s,
                parts.len()
            )));
        }

        let mut bytes = [0u8; MAC_LEN];
        for (i, part) in parts.iter().enumerate() {
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(EvasionError::InvalidAddressFormat(format!(
                    "{}: invalid hex octet '{}'",
                    s, part
                )));
            }
            bytes[i] = u8::from_str_radix(part, 16).map_err(|_| {
                EvasionError::InvalidAddressFormat(format!("{}: invalid hex octet '{}'", s, part))
            })?;
        }

        Ok(Self { bytes })
    }
}

impl From<[u8; MAC_LEN]> for MacAddress {
    fn from(bytes: [u8; MAC_LEN]) -> Self {
        Self::new(bytes)
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Current and permanent address of one interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceAddresses {
    /// Kernel interface name
    pub name: String,
    /// Administratively up
    pub up: bool,
    /// Address the interface uses now
    pub current: MacAddress,
    /// `None` when the driver does not report a burned-in address
    pub permanent: Option<MacAddress>,
    /// `None` when `permanent` is unknown
    pub changed: Option<bool>,
}

/// Reads and writes interface hardware addresses.
///
/// Holds no per-interface state: every call re-queries the kernel through the
/// injected [`LinkOps`].
pub struct MacManager<L: LinkOps> {
    ops: L,
    cycle_link: bool,
}

impl<L: LinkOps> MacManager<L> {
    /// Create a new MAC manager over `ops`
    pub fn new(ops: L) -> Self {
        Self {
            ops,
            cycle_link: false,
        }
    }

    /// Bring the link down around commits made through [`Self::apply`],
    /// restoring its previous state afterwards.
    pub fn set_cycle_link(&mut self, cycle: bool) {
        self.cycle_link = cycle;
    }

    /// Whether [`Self::apply`] cycles the link
    #[must_use]
    pub fn cycle_link(&self) -> bool {
        self.cycle_link
    }

    /// The kernel seam this manager talks through
    #[must_use]
    pub fn ops(&self) -> &L {
        &self.ops
    }

    /// Non-loopback interfaces in OS enumeration order
    ///
    /// # Errors
    ///
    /// Returns an error if interface enumeration fails
    pub fn list_interfaces(&self) -> Result<Vec<InterfaceInfo>> {
        self.ops.list_interfaces()
    }

    /// Whether the interface is administratively up
    ///
    /// # Errors
    ///
    /// Returns `InterfaceNotFound` if the name does not resolve
    pub fn is_up(&self, interface: &str) -> Result<bool> {
        Ok(self.ops.interface_info(interface)?.up)
    }

    /// Get the current MAC address of an interface
    ///
    /// # Errors
    ///
    /// Returns `InterfaceNotFound` if the name does not resolve
    pub fn current_address(&self, interface: &str) -> Result<MacAddress> {
        self.ops.current_address(interface)
    }

    /// Get the burned-in MAC address of an interface
    ///
    /// # Errors
    ///
    /// Returns `DeviceQueryFailed` if the driver rejects the query
    pub fn permanent_address(&self, interface: &str) -> Result<MacAddress> {
        self.ops.permanent_address(interface)
    }

    /// Whether the current address differs from the burned-in one
    ///
    /// # Errors
    ///
    /// Propagates errors from either lookup
    pub fn address_changed(&self, interface: &str) -> Result<bool> {
        let current = self.current_address(interface)?;
        let permanent = self.permanent_address(interface)?;
        Ok(current != permanent)
    }

    /// Current and permanent addresses of every non-loopback interface.
    ///
    /// A driver that cannot report its permanent address yields `None` for
    /// that interface instead of failing the whole listing.
    ///
    /// # Errors
    ///
    /// Returns an error if enumeration or a current-address read fails
    pub fn snapshot(&self) -> Result<Vec<InterfaceAddresses>> {
        let mut out = Vec::new();
        for info in self.list_interfaces()? {
            let current = self.current_address(&info.name)?;
            let permanent = match self.permanent_address(&info.name) {
                Ok(mac) => Some(mac),
                Err(e) => {
                    log::warn!("No permanent address for {}: {}", info.name, e);
                    None
                }
            };
            out.push(InterfaceAddresses {
                changed: permanent.map(|p| p != current),
                name: info.name,
                up: info.up,
                current,
                permanent,
            });
        }
        Ok(out)
    }

    /// Set the MAC address of an interface from its textual form
    ///
    /// Checks, in order: superuser, interface down, address well-formed.
    ///
    /// # Errors
    ///
    /// * `InsufficientPrivilege` - not running as root
    /// * `InterfaceStillUp` - interface is administratively up
    /// * `InvalidAddressFormat` - `address` is not a MAC address
    /// * `DeviceControlFailed` - the kernel rejected the new address
    pub fn set_address(&self, interface: &str, address: &str) -> Result<()> {
        self.check_preconditions(interface)?;
        let mac = MacAddress::parse(address)?;
        self.commit(interface, &mac)
    }

    /// Set an already-parsed MAC address
    ///
    /// # Errors
    ///
    /// As [`Self::set_address`], minus the format check
    pub fn set_mac(&self, interface: &str, mac: &MacAddress) -> Result<()> {
        self.check_preconditions(interface)?;
        self.commit(interface, mac)
    }

    /// Set the MAC address from its textual form through [`Self::apply`]
    ///
    /// The superuser check still runs before the address is parsed, so a
    /// caller without privileges never learns whether its input was valid.
    ///
    /// # Errors
    ///
    /// As [`Self::set_address`] when link cycling is off, otherwise as
    /// [`Self::apply`] plus `InvalidAddressFormat`
    pub fn apply_address(&self, interface: &str, address: &str) -> Result<()> {
        if !self.cycle_link {
            return self.set_address(interface, address);
        }
        self.check_privilege(interface)?;
        let mac = MacAddress::parse(address)?;
        self.apply(interface, &mac)
    }

    /// Restore the burned-in address
    ///
    /// # Errors
    ///
    /// Propagates errors from the permanent-address query and [`Self::set_mac`]
    pub fn revert(&self, interface: &str) -> Result<MacAddress> {
        let permanent = self.permanent_address(interface)?;
        self.apply(interface, &permanent)?;
        Ok(permanent)
    }

    /// Commit `mac`, cycling the link first when link cycling is enabled.
    ///
    /// The link is returned to its previous state even if the commit fails;
    /// the commit error wins over a failure to bring the link back.
    ///
    /// # Errors
    ///
    /// As [`Self::set_mac`], plus link state errors when cycling
    pub fn apply(&self, interface: &str, mac: &MacAddress) -> Result<()> {
        if !self.cycle_link {
            return self.set_mac(interface, mac);
        }

        let was_up = self.is_up(interface)?;
        if was_up {
            self.ops.set_link_up(interface, false)?;
        }
        let result = self.set_mac(interface, mac);
        let restore = if was_up {
            self.ops.set_link_up(interface, true)
        } else {
            Ok(())
        };
        result?;
        restore
    }

    fn check_privilege(&self, interface: &str) -> Result<()> {
        if self.ops.is_superuser()? {
            Ok(())
        } else {
            Err(EvasionError::InsufficientPrivilege(interface.to_string()))
        }
    }

    fn check_preconditions(&self, interface: &str) -> Result<()> {
        self.check_privilege(interface)?;
        if self.is_up(interface)? {
            return Err(EvasionError::InterfaceStillUp(interface.to_string()));
        }
        Ok(())
    }

    fn commit(&self, interface: &str, mac: &MacAddress) -> Result<()> {
        self.ops.write_address(interface, mac)?;
        log::info!("MAC on {} set to {}", interface, mac);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::mock::MockLinkOps;

    const PERM: [u8; 6] = [0x00, 0x1b, 0x21, 0x0a, 0x0b, 0x0c];

    fn manager() -> MacManager<MockLinkOps> {
        let ops = MockLinkOps::new();
        ops.add_interface("eth0", PERM, false);
        MacManager::new(ops)
    }

    #[test]
    fn test_mac_parse_colon() {
        let mac: MacAddress = "AA:BB:CC:DD:EE:FF".parse().unwrap();
        assert_eq!(mac.bytes, [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn test_mac_parse_dash() {
        let mac: MacAddress = "aa-bb-cc-dd-ee-ff".parse().unwrap();
        assert_eq!(mac.bytes, [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
    }

    #[test]
    fn test_mac_display_lowercase() {
        let mac = MacAddress::new([0xAA, 0xBB, 0xCC, 0x0D, 0xEE, 0xFF]);
        assert_eq!(mac.to_string(), "aa:bb:cc:0d:ee:ff");
    }

    #[test]
    fn test_invalid_mac() {
        assert!("not a mac".parse::<MacAddress>().is_err());
        assert!("AA:BB".parse::<MacAddress>().is_err());
        assert!("AA:BB:CC:DD:EE:GG".parse::<MacAddress>().is_err());
        assert!("AA:BB:CC:DD:EE:FF:00".parse::<MacAddress>().is_err());
        assert!("A:BB:CC:DD:EE:FFF".parse::<MacAddress>().is_err());
        assert!("+a:bb:cc:dd:ee:ff".parse::<MacAddress>().is_err());
        assert!(matches!(
            MacAddress::parse("AABBCCDDEEFF"),
            Err(EvasionError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn test_mac_oui() {
        let mac = MacAddress::new([0xF4, 0x0F, 0x24, 0xAA, 0xBB, 0xCC]);
        assert_eq!(mac.oui(), [0xF4, 0x0F, 0x24]);
        assert_eq!(mac.nic(), [0xAA, 0xBB, 0xCC]);
    }

    #[test]
    fn test_serde_as_string() {
        let mac = MacAddress::new([0x02, 0, 0, 0, 0, 0x01]);
        let json = serde_json::to_string(&mac).unwrap();
        assert_eq!(json, "\"02:00:00:00:00:01\"");
        let back: MacAddress = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mac);
    }

    #[test]
    fn test_randomize_admin_bit() {
        for _ in 0..64 {
            let universal = randomize(&[0xFF; 6], 0, true).unwrap();
            assert!(!universal.is_local());
            assert!(universal.is_unicast());
            assert_eq!(universal.as_bytes()[0] & 0xF0, 0);

            let local = randomize(&[0; 6], 0, false).unwrap();
            assert!(local.is_local());
            assert!(local.is_unicast());
            assert_eq!(local.as_bytes()[0] & 0xF0, 0);
        }
    }

    #[test]
    fn test_randomize_keeps_vendor_prefix() {
        let seed = [0x00, 0x1b, 0x21, 0x0a, 0x0b, 0x0c];
        for _ in 0..64 {
            let mac = randomize(&seed, 3, true).unwrap();
            assert_eq!(mac.oui(), [0x00, 0x1b, 0x21]);
        }

        let local_seed = [0x06, 0x44, 0x55, 0, 0, 0];
        let mac = randomize(&local_seed, 3, false).unwrap();
        assert_eq!(mac.oui(), [0x06, 0x44, 0x55]);
    }

    #[test]
    fn test_randomize_start_three_applies_admin_bit() {
        let mac = randomize(&[0x00, 0x1b, 0x21, 0, 0, 0], 3, false).unwrap();
        assert_eq!(mac.oui(), [0x02, 0x1b, 0x21]);
        assert!(mac.is_local());
    }

    #[test]
    fn test_randomize_invalid_length() {
        assert!(matches!(
            randomize(&[0; 7], 0, false),
            Err(EvasionError::InvalidLength(7))
        ));
        assert!(matches!(
            randomize(&[0; 5], 3, true),
            Err(EvasionError::InvalidLength(5))
        ));
    }

    #[test]
    fn test_randomize_invalid_start() {
        for start in [1, 2, 4, 5, 6] {
            assert!(matches!(
                randomize(&[0; 6], start, false),
                Err(EvasionError::InvalidStartIndex(s)) if s == start
            ));
        }
    }

    #[test]
    fn test_with_oui_is_universal() {
        let mac = MacAddress::with_oui([0x00, 0x00, 0x00]).unwrap();
        assert_eq!(mac.oui(), [0, 0, 0]);
        assert!(!mac.is_local());
    }

    #[test]
    fn test_set_requires_root() {
        let mgr = manager();
        mgr.ops().set_superuser(false);
        let err = mgr.set_address("eth0", "02:00:00:00:00:01").unwrap_err();
        assert!(matches!(err, EvasionError::InsufficientPrivilege(_)));
    }

    #[test]
    fn test_set_rejects_up_interface() {
        let mgr = manager();
        mgr.ops().set_up("eth0", true);
        let err = mgr.set_address("eth0", "02:00:00:00:00:01").unwrap_err();
        assert!(matches!(err, EvasionError::InterfaceStillUp(_)));
        assert_eq!(mgr.current_address("eth0").unwrap(), MacAddress::new(PERM));
    }

    #[test]
    fn test_precondition_order() {
        let mgr = manager();
        mgr.ops().set_superuser(false);
        mgr.ops().set_up("eth0", true);
        assert!(matches!(
            mgr.set_address("eth0", "garbage"),
            Err(EvasionError::InsufficientPrivilege(_))
        ));

        mgr.ops().set_superuser(true);
        assert!(matches!(
            mgr.set_address("eth0", "garbage"),
            Err(EvasionError::InterfaceStillUp(_))
        ));

        mgr.ops().set_up("eth0", false);
        assert!(matches!(
            mgr.set_address("eth0", "garbage"),
            Err(EvasionError::InvalidAddressFormat(_))
        ));
    }

    #[test]
    fn test_set_and_revert_round_trip() {
        let mgr = manager();
        assert!(!mgr.address_changed("eth0").unwrap());

        mgr.set_address("eth0", "02:11:22:33:44:55").unwrap();
        assert_eq!(
            mgr.current_address("eth0").unwrap(),
            MacAddress::parse("02:11:22:33:44:55").unwrap()
        );
        assert!(mgr.address_changed("eth0").unwrap());

        let restored = mgr.revert("eth0").unwrap();
        assert_eq!(restored, MacAddress::new(PERM));
        assert_eq!(
            mgr.current_address("eth0").unwrap(),
            mgr.permanent_address("eth0").unwrap()
        );
        assert!(!mgr.address_changed("eth0").unwrap());
    }

    #[test]
    fn test_unknown_interface() {
        let mgr = manager();
        assert!(matches!(
            mgr.current_address("eth9"),
            Err(EvasionError::InterfaceNotFound(_))
        ));
        assert!(matches!(
            mgr.is_up("eth9"),
            Err(EvasionError::InterfaceNotFound(_))
        ));
        assert!(mgr.address_changed("eth9").is_err());
    }

    #[test]
    fn test_kernel_failure_leaves_address() {
        let mgr = manager();
        mgr.ops().fail_writes("eth0", libc::EADDRNOTAVAIL);
        let err = mgr.set_address("eth0", "02:11:22:33:44:55").unwrap_err();
        assert_eq!(err.code(), Some(libc::EADDRNOTAVAIL));
        assert_eq!(mgr.current_address("eth0").unwrap(), MacAddress::new(PERM));
    }

    #[test]
    fn test_cycle_link_restores_state() {
        let mut mgr = manager();
        mgr.ops().set_up("eth0", true);
        mgr.set_cycle_link(true);
        assert!(mgr.cycle_link());

        let mac = MacAddress::parse("02:aa:bb:cc:dd:ee").unwrap();
        mgr.apply("eth0", &mac).unwrap();
        assert_eq!(mgr.current_address("eth0").unwrap(), mac);
        assert!(mgr.is_up("eth0").unwrap());

        mgr.ops().fail_writes("eth0", libc::EBUSY);
        assert!(mgr.apply("eth0", &MacAddress::new(PERM)).is_err());
        assert!(mgr.is_up("eth0").unwrap());
    }

    #[test]
    fn test_cycle_link_keeps_down_interface_down() {
        let mut mgr = manager();
        mgr.set_cycle_link(true);
        mgr.apply("eth0", &MacAddress::parse("02:00:00:00:00:09").unwrap())
            .unwrap();
        assert!(!mgr.is_up("eth0").unwrap());
    }

    #[test]
    fn test_apply_address_checks_privilege_before_format() {
        let mut mgr = manager();
        mgr.set_cycle_link(true);
        mgr.ops().set_superuser(false);
        mgr.ops().set_up("eth0", true);
        assert!(matches!(
            mgr.apply_address("eth0", "garbage"),
            Err(EvasionError::InsufficientPrivilege(_))
        ));
        assert!(mgr.ops().link_changes().is_empty());

        mgr.ops().set_superuser(true);
        assert!(matches!(
            mgr.apply_address("eth0", "garbage"),
            Err(EvasionError::InvalidAddressFormat(_))
        ));
        assert!(mgr.ops().link_changes().is_empty());

        mgr.apply_address("eth0", "02:00:00:00:00:0a").unwrap();
        assert_eq!(
            mgr.current_address("eth0").unwrap(),
            MacAddress::parse("02:00:00:00:00:0a").unwrap()
        );
        assert!(mgr.is_up("eth0").unwrap());
    }

    #[test]
    fn test_apply_address_without_cycling_keeps_order() {
        let mgr = manager();
        mgr.ops().set_up("eth0", true);
        assert!(matches!(
            mgr.apply_address("eth0", "garbage"),
            Err(EvasionError::InterfaceStillUp(_))
        ));
    }

    #[test]
    fn test_commit_does_not_read_current_address() {
        let mgr = manager();
        mgr.ops().fail_current_reads("eth0");
        mgr.set_address("eth0", "02:11:22:33:44:55").unwrap();
        assert_eq!(
            mgr.ops().written("eth0"),
            Some(MacAddress::parse("02:11:22:33:44:55").unwrap())
        );
    }

    #[test]
    fn test_snapshot_tolerates_missing_permanent() {
        let mgr = manager();
        mgr.ops().add_interface("veth1", [0x02, 0, 0, 0, 0, 0x07], true);
        mgr.ops().fail_permanent("veth1", libc::EOPNOTSUPP);

        let snapshot = mgr.snapshot().unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].name, "eth0");
        assert_eq!(snapshot[0].changed, Some(false));
        assert_eq!(snapshot[1].name, "veth1");
        assert!(snapshot[1].up);
        assert_eq!(snapshot[1].permanent, None);
        assert_eq!(snapshot[1].changed, None);
    }
}
