//! Vendor OUI database
//!
//! An immutable index over vendor prefix assignments, used to pick replacement
//! addresses that still look like a real vendor's hardware.
//!
//! ## Usage
//!
//! ```
//! use macveil_evasion::{MacAddress, OuiDatabase};
//!
//! let db = OuiDatabase::builtin();
//! let xerox = MacAddress::parse("00:00:00:12:34:56").unwrap();
//! assert_eq!(db.find_vendor(&xerox).unwrap().name, "Xerox");
//! assert_eq!(db.find_device_type(&xerox).unwrap(), "printer");
//!
//! for record in db.all_popular_ouis() {
//!     println!("{} {}", record.oui_string(), record.vendor);
//! }
//! ```

use serde::{Serialize, Serializer};
use std::collections::HashMap;

use crate::error::{EvasionError, Result};
use crate::mac::{MacAddress, OUI_LEN};
use crate::oui_data::{OuiEntry, OUI_DATA};

/// One vendor prefix assignment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OuiRecord {
    /// First three address bytes
    #[serde(serialize_with = "serialize_oui")]
    pub oui: [u8; OUI_LEN],
    /// Registered organization name
    pub vendor: String,
    /// Most representative first
    pub device_types: Vec<String>,
    /// Member of the commonly seen subset
    pub popular: bool,
}

impl OuiRecord {
    /// Build a record from borrowed parts
    pub fn new(oui: [u8; OUI_LEN], vendor: &str, device_types: &[&str], popular: bool) -> Self {
        Self {
            oui,
            vendor: vendor.to_string(),
            device_types: device_types.iter().map(|t| t.to_string()).collect(),
            popular,
        }
    }

    /// Format OUI as colon-separated string
    #[must_use]
    pub fn oui_string(&self) -> String {
        format_oui(&self.oui)
    }
}

impl From<&OuiEntry> for OuiRecord {
    fn from(entry: &OuiEntry) -> Self {
        Self::new(entry.oui, entry.vendor, entry.device_types, entry.popular)
    }
}

/// All prefixes registered to one vendor name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VendorRecord {
    /// Organization name shared by every prefix below
    pub name: String,
    /// Prefixes in database order
    #[serde(serialize_with = "serialize_ouis")]
    pub ouis: Vec<[u8; OUI_LEN]>,
    /// Union over the vendor's records, in first-seen order
    pub device_types: Vec<String>,
    /// Whether any of the vendor's prefixes is popular
    pub popular: bool,
}

impl VendorRecord {
    /// Case-insensitive device type membership
    #[must_use]
    pub fn has_device_type(&self, device_type: &str) -> bool {
        self.device_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(device_type))
    }
}

/// Read-only OUI index.
///
/// Built once and never mutated, so a shared reference can be handed to any
/// number of threads.
#[derive(Debug, Clone)]
pub struct OuiDatabase {
    records: Vec<OuiRecord>,
    vendors: Vec<VendorRecord>,
    by_oui: HashMap<[u8; OUI_LEN], usize>,
}

impl OuiDatabase {
    /// Index the compiled-in dataset
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_records(OUI_DATA.iter().map(OuiRecord::from))
    }

    /// Index caller-supplied records.
    ///
    /// Records sharing a vendor name (case-insensitive) are grouped into one
    /// [`VendorRecord`]. A repeated prefix keeps its first record and the rest
    /// are dropped.
    pub fn from_records(records: impl IntoIterator<Item = OuiRecord>) -> Self {
        let mut kept: Vec<OuiRecord> = Vec::new();
        let mut vendors: Vec<VendorRecord> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();
        let mut by_oui = HashMap::new();

        for record in records {
            if by_oui.contains_key(&record.oui) {
                log::debug!(
                    "Duplicate OUI {} for {} ignored",
                    record.oui_string(),
                    record.vendor
                );
                continue;
            }

            let key = record.vendor.to_lowercase();
            let idx = *by_name.entry(key).or_insert_with(|| {
                vendors.push(VendorRecord {
                    name: record.vendor.clone(),
                    ouis: Vec::new(),
                    device_types: Vec::new(),
                    popular: false,
                });
                vendors.len() - 1
            });

            by_oui.insert(record.oui, idx);

            let vendor = &mut vendors[idx];
            vendor.ouis.push(record.oui);
            vendor.popular |= record.popular;
            for device_type in &record.device_types {
                if !vendor.has_device_type(device_type) {
                    vendor.device_types.push(device_type.clone());
                }
            }
            kept.push(record);
        }

        Self {
            records: kept,
            vendors,
            by_oui,
        }
    }

    /// Vendor owning the address prefix.
    ///
    /// # Errors
    ///
    /// `UnknownVendor` if the prefix is unregistered or the address is locally
    /// administered.
    pub fn find_vendor(&self, mac: &MacAddress) -> Result<&VendorRecord> {
        let oui = mac.oui();
        if mac.is_local() {
            return Err(EvasionError::UnknownVendor(format!(
                "{} (locally administered)",
                format_oui(&oui)
            )));
        }
        self.by_oui
            .get(&oui)
            .map(|&idx| &self.vendors[idx])
            .ok_or_else(|| EvasionError::UnknownVendor(format_oui(&oui)))
    }

    /// Primary device type of the address's vendor.
    ///
    /// # Errors
    ///
    /// `UnknownVendor` as [`Self::find_vendor`]; `NoDeviceType` if the vendor
    /// carries no classification.
    pub fn find_device_type(&self, mac: &MacAddress) -> Result<&str> {
        let vendor = self.find_vendor(mac)?;
        vendor
            .device_types
            .first()
            .map(String::as_str)
            .ok_or_else(|| EvasionError::NoDeviceType(vendor.name.clone()))
    }

    /// Vendors classified under `device_type`, ignoring case
    #[must_use]
    pub fn find_vendors_by_device_type(&self, device_type: &str) -> Vec<&VendorRecord> {
        self.vendors
            .iter()
            .filter(|v| v.has_device_type(device_type))
            .collect()
    }

    /// Vendors whose name contains `keyword`, ignoring case. An empty keyword
    /// matches everything.
    #[must_use]
    pub fn find_vendors_by_keyword(&self, keyword: &str) -> Vec<&VendorRecord> {
        let keyword = keyword.to_lowercase();
        self.vendors
            .iter()
            .filter(|v| v.name.to_lowercase().contains(&keyword))
            .collect()
    }

    /// Records in the popular subset, in database order
    #[must_use]
    pub fn all_popular_ouis(&self) -> Vec<&OuiRecord> {
        self.records.iter().filter(|r| r.popular).collect()
    }

    /// Every vendor, in first-seen order
    #[must_use]
    pub fn vendors(&self) -> &[VendorRecord] {
        &self.vendors
    }

    /// Every prefix record, in database order
    #[must_use]
    pub fn records(&self) -> &[OuiRecord] {
        &self.records
    }

    /// Number of distinct registered prefixes
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_oui.len()
    }

    /// Whether no prefix is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_oui.is_empty()
    }
}

impl Default for OuiDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}

pub(crate) fn format_oui(oui: &[u8; OUI_LEN]) -> String {
    format!("{:02x}:{:02x}:{:02x}", oui[0], oui[1], oui[2])
}

fn serialize_oui<S: Serializer>(
    oui: &[u8; OUI_LEN],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_oui(oui))
}

fn serialize_ouis<S: Serializer>(
    ouis: &[[u8; OUI_LEN]],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(ouis.iter().map(format_oui))
}
