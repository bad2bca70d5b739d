//! Named spoofing policies.
//!
//! Every policy follows the same sequence: read the current address, derive a
//! candidate, commit it through [`MacManager`], then re-read to confirm.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EvasionError, Result};
use crate::mac::{randomize, MacAddress, MacManager, OUI_LEN};
use crate::ops::LinkOps;
use crate::vendor::{OuiDatabase, VendorRecord};

/// How a replacement address is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SpoofPolicy {
    /// Replace all six bytes.
    Random {
        /// Clear the locally administered bit instead of setting it
        preserve_universal: bool,
    },
    /// Keep the current vendor prefix, replace the device suffix.
    ///
    /// Unless `preserve_universal` is set the admin bit is raised, so the
    /// result keeps the prefix bytes but no longer resolves to the vendor.
    SameVendor {
        /// Clear the locally administered bit instead of setting it
        preserve_universal: bool,
    },
    /// A vendor sharing the current vendor's primary device type.
    SameDeviceType,
    /// Any registered vendor.
    AnyDeviceType,
    /// A prefix from the popular subset.
    Popular,
}

impl SpoofPolicy {
    /// Command-line names, one per policy
    pub const NAMES: [&'static str; 5] = [
        "random",
        "same-vendor",
        "same-device-type",
        "any-device-type",
        "popular",
    ];

    /// Kebab-case name accepted by [`FromStr`]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            SpoofPolicy::Random { .. } => "random",
            SpoofPolicy::SameVendor { .. } => "same-vendor",
            SpoofPolicy::SameDeviceType => "same-device-type",
            SpoofPolicy::AnyDeviceType => "any-device-type",
            SpoofPolicy::Popular => "popular",
        }
    }

    /// Apply the admin-bit choice; policies that synthesize from a vendor
    /// prefix are always universal and ignore it.
    #[must_use]
    pub fn with_preserve_universal(self, preserve: bool) -> Self {
        match self {
            SpoofPolicy::Random { .. } => SpoofPolicy::Random {
                preserve_universal: preserve,
            },
            SpoofPolicy::SameVendor { .. } => SpoofPolicy::SameVendor {
                preserve_universal: preserve,
            },
            other => other,
        }
    }
}

impl fmt::Display for SpoofPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpoofPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(SpoofPolicy::Random {
                preserve_universal: false,
            }),
            "same-vendor" => Ok(SpoofPolicy::SameVendor {
                preserve_universal: false,
            }),
            "same-device-type" => Ok(SpoofPolicy::SameDeviceType),
            "any-device-type" => Ok(SpoofPolicy::AnyDeviceType),
            "popular" => Ok(SpoofPolicy::Popular),
            other => Err(format!(
                "unknown policy '{}' (expected one of: {})",
                other,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// Result of one policy application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpoofOutcome {
    /// Interface the policy ran on
    pub interface: String,
    /// Policy as applied, admin-bit choice included
    pub policy: SpoofPolicy,
    /// Address before the commit
    pub previous: MacAddress,
    /// Address handed to the kernel
    pub requested: MacAddress,
    /// Address read back after the commit
    pub current: MacAddress,
}

impl SpoofOutcome {
    /// Whether the kernel reports the address that was requested
    #[must_use]
    pub fn verified(&self) -> bool {
        self.current == self.requested
    }
}

/// Applies [`SpoofPolicy`] choices through a [`MacManager`], drawing vendor
/// prefixes from an [`OuiDatabase`].
pub struct Spoofer<L: LinkOps> {
    manager: MacManager<L>,
    db: OuiDatabase,
}

impl<L: LinkOps> Spoofer<L> {
    /// Create a spoofer over `manager` and `db`
    pub fn new(manager: MacManager<L>, db: OuiDatabase) -> Self {
        Self { manager, db }
    }

    /// The underlying manager, e.g. for [`MacManager::revert`]
    pub fn manager(&self) -> &MacManager<L> {
        &self.manager
    }

    /// Prefix database consulted by the vendor-based policies
    pub fn database(&self) -> &OuiDatabase {
        &self.db
    }

    /// Run the named policy on `interface`.
    ///
    /// # Errors
    ///
    /// The first failure from reading, synthesis or commit. Nothing is rolled
    /// back.
    pub fn spoof(&self, interface: &str, policy: SpoofPolicy) -> Result<SpoofOutcome> {
        match policy {
            SpoofPolicy::Random { preserve_universal } => {
                self.spoof_random(interface, preserve_universal)
            }
            SpoofPolicy::SameVendor { preserve_universal } => {
                self.spoof_same_vendor(interface, preserve_universal)
            }
            SpoofPolicy::SameDeviceType => self.spoof_same_device_type(interface),
            SpoofPolicy::AnyDeviceType => self.spoof_any_device_type(interface),
            SpoofPolicy::Popular => self.spoof_popular(interface),
        }
    }

    /// Fresh random address; the admin bit follows `preserve_universal`
    ///
    /// # Errors
    ///
    /// As [`Self::spoof`]
    pub fn spoof_random(&self, interface: &str, preserve_universal: bool) -> Result<SpoofOutcome> {
        let previous = self.manager.current_address(interface)?;
        let candidate = randomize(previous.as_bytes(), 0, preserve_universal)?;
        self.commit(
            interface,
            SpoofPolicy::Random { preserve_universal },
            previous,
            candidate,
        )
    }

    /// Keep the current prefix bytes and randomize the device suffix
    ///
    /// # Errors
    ///
    /// As [`Self::spoof`]
    pub fn spoof_same_vendor(
        &self,
        interface: &str,
        preserve_universal: bool,
    ) -> Result<SpoofOutcome> {
        let previous = self.manager.current_address(interface)?;
        let candidate = randomize(previous.as_bytes(), OUI_LEN, preserve_universal)?;
        self.commit(
            interface,
            SpoofPolicy::SameVendor { preserve_universal },
            previous,
            candidate,
        )
    }

    /// Prefix from a vendor sharing the current vendor's primary device type
    ///
    /// # Errors
    ///
    /// `UnknownVendor` or `NoDeviceType` if the current address cannot be
    /// classified.
    pub fn spoof_same_device_type(&self, interface: &str) -> Result<SpoofOutcome> {
        let previous = self.manager.current_address(interface)?;
        let device_type = self.db.find_device_type(&previous)?;
        let vendors = self.db.find_vendors_by_device_type(device_type);
        let vendor = vendors
            .choose(&mut OsRng)
            .ok_or_else(|| EvasionError::NoDeviceType(device_type.to_string()))?;
        log::debug!("Device type {} picked vendor {}", device_type, vendor.name);

        let candidate = MacAddress::with_oui(pick_oui(vendor)?)?;
        self.commit(interface, SpoofPolicy::SameDeviceType, previous, candidate)
    }

    /// Prefix from any registered vendor
    ///
    /// # Errors
    ///
    /// As [`Self::spoof`]
    pub fn spoof_any_device_type(&self, interface: &str) -> Result<SpoofOutcome> {
        let previous = self.manager.current_address(interface)?;
        let vendor = self
            .db
            .vendors()
            .choose(&mut OsRng)
            .ok_or_else(|| EvasionError::UnknownVendor("no vendors registered".into()))?;
        log::debug!("Picked vendor {}", vendor.name);

        let candidate = MacAddress::with_oui(pick_oui(vendor)?)?;
        self.commit(interface, SpoofPolicy::AnyDeviceType, previous, candidate)
    }

    /// Prefix drawn from the popular subset
    ///
    /// # Errors
    ///
    /// As [`Self::spoof`]
    pub fn spoof_popular(&self, interface: &str) -> Result<SpoofOutcome> {
        let previous = self.manager.current_address(interface)?;
        let record = self
            .db
            .all_popular_ouis()
            .choose(&mut OsRng)
            .copied()
            .ok_or_else(|| EvasionError::UnknownVendor("no popular vendors registered".into()))?;
        log::debug!("Picked popular prefix {} ({})", record.oui_string(), record.vendor);

        let candidate = MacAddress::with_oui(record.oui)?;
        self.commit(interface, SpoofPolicy::Popular, previous, candidate)
    }

    fn commit(
        &self,
        interface: &str,
        policy: SpoofPolicy,
        previous: MacAddress,
        requested: MacAddress,
    ) -> Result<SpoofOutcome> {
        self.manager.apply(interface, &requested)?;
        let current = self.manager.current_address(interface)?;
        if current != requested {
            log::warn!(
                "{} policy on {}: requested {} but interface reports {}",
                policy,
                interface,
                requested,
                current
            );
        }

        Ok(SpoofOutcome {
            interface: interface.to_string(),
            policy,
            previous,
            requested,
            current,
        })
    }
}

fn pick_oui(vendor: &VendorRecord) -> Result<[u8; OUI_LEN]> {
    vendor
        .ouis
        .choose(&mut OsRng)
        .copied()
        .ok_or_else(|| EvasionError::UnknownVendor(vendor.name.clone()))
}
