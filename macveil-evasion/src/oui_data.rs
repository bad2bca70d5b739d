//! Compiled-in OUI assignments.
//!
//! Only universally administered prefixes belong here; a locally administered
//! prefix can never be looked up.

/// One registered vendor prefix
#[derive(Debug, Clone, Copy)]
pub struct OuiEntry {
    /// First three address bytes
    pub oui: [u8; 3],
    /// Registered organization name
    pub vendor: &'static str,
    /// Most representative first
    pub device_types: &'static [&'static str],
    /// Member of the commonly seen subset
    pub popular: bool,
}

/// Built-in table loaded by [`OuiDatabase::builtin`](crate::OuiDatabase::builtin)
pub static OUI_DATA: &[OuiEntry] = &[
    // Printers and office equipment
    OuiEntry {
        oui: [0x00, 0x00, 0x00],
        vendor: "Xerox",
        device_types: &["printer"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x00, 0xAA],
        vendor: "Xerox",
        device_types: &["printer"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x00, 0x85],
        vendor: "Canon",
        device_types: &["printer", "camera"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x00, 0x48],
        vendor: "Seiko Epson",
        device_types: &["printer"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x80, 0x77],
        vendor: "Brother",
        device_types: &["printer"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x21, 0x5A],
        vendor: "HP",
        device_types: &["printer", "laptop"],
        popular: true,
    },
    // Phones and tablets
    OuiEntry {
        oui: [0xF4, 0x0F, 0x24],
        vendor: "Apple",
        device_types: &["phone", "tablet", "laptop"],
        popular: true,
    },
    OuiEntry {
        oui: [0xAC, 0xBC, 0x32],
        vendor: "Apple",
        device_types: &["phone", "tablet", "laptop"],
        popular: true,
    },
    OuiEntry {
        oui: [0x00, 0x1C, 0xB3],
        vendor: "Apple",
        device_types: &["laptop"],
        popular: true,
    },
    OuiEntry {
        oui: [0x00, 0x1A, 0x8A],
        vendor: "Samsung",
        device_types: &["phone", "tablet"],
        popular: true,
    },
    OuiEntry {
        oui: [0xEC, 0x1F, 0x72],
        vendor: "Samsung",
        device_types: &["phone", "tablet"],
        popular: true,
    },
    OuiEntry {
        oui: [0xF8, 0x8F, 0xCA],
        vendor: "Google",
        device_types: &["phone", "laptop"],
        popular: true,
    },
    OuiEntry {
        oui: [0x48, 0x46, 0xFB],
        vendor: "Huawei",
        device_types: &["phone"],
        popular: false,
    },
    OuiEntry {
        oui: [0x94, 0x65, 0x2D],
        vendor: "OnePlus",
        device_types: &["phone"],
        popular: false,
    },
    OuiEntry {
        oui: [0x64, 0xCC, 0x2E],
        vendor: "Xiaomi",
        device_types: &["phone"],
        popular: false,
    },
    // Computers and network cards
    OuiEntry {
        oui: [0x00, 0x1E, 0x67],
        vendor: "Intel",
        device_types: &["network-card", "laptop"],
        popular: true,
    },
    OuiEntry {
        oui: [0x00, 0x1B, 0x21],
        vendor: "Intel",
        device_types: &["network-card"],
        popular: true,
    },
    OuiEntry {
        oui: [0x8C, 0xEC, 0x4B],
        vendor: "Intel",
        device_types: &["network-card", "laptop"],
        popular: true,
    },
    OuiEntry {
        oui: [0x00, 0x14, 0x22],
        vendor: "Dell",
        device_types: &["laptop", "desktop"],
        popular: true,
    },
    OuiEntry {
        oui: [0x00, 0x1E, 0x4C],
        vendor: "Lenovo",
        device_types: &["laptop"],
        popular: true,
    },
    OuiEntry {
        oui: [0x00, 0xE0, 0x4C],
        vendor: "Realtek",
        device_types: &["network-card"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x03, 0x7F],
        vendor: "Atheros",
        device_types: &["network-card"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x10, 0x18],
        vendor: "Broadcom",
        device_types: &["network-card"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x0C, 0xE7],
        vendor: "MediaTek",
        device_types: &["network-card"],
        popular: false,
    },
    OuiEntry {
        oui: [0xB8, 0x27, 0xEB],
        vendor: "Raspberry Pi",
        device_types: &["embedded"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x50, 0x56],
        vendor: "VMware",
        device_types: &["virtual"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x50, 0xF2],
        vendor: "Microsoft",
        device_types: &["desktop"],
        popular: false,
    },
    // Network equipment
    OuiEntry {
        oui: [0x00, 0x1B, 0xD5],
        vendor: "Cisco",
        device_types: &["router", "switch"],
        popular: true,
    },
    OuiEntry {
        oui: [0x50, 0xC7, 0xBF],
        vendor: "TP-Link",
        device_types: &["router"],
        popular: true,
    },
    OuiEntry {
        oui: [0x00, 0x14, 0x6C],
        vendor: "Netgear",
        device_types: &["router"],
        popular: true,
    },
    OuiEntry {
        oui: [0x00, 0x1A, 0x92],
        vendor: "Asus",
        device_types: &["router", "laptop"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x1B, 0x11],
        vendor: "D-Link",
        device_types: &["router"],
        popular: false,
    },
    OuiEntry {
        oui: [0xFC, 0xEC, 0xDA],
        vendor: "Ubiquiti",
        device_types: &["access-point", "router"],
        popular: false,
    },
    // Consumer and IoT
    OuiEntry {
        oui: [0x40, 0xB4, 0xCD],
        vendor: "Amazon",
        device_types: &["speaker", "iot"],
        popular: true,
    },
    OuiEntry {
        oui: [0x00, 0x62, 0x6E],
        vendor: "Ring",
        device_types: &["camera", "iot"],
        popular: false,
    },
    OuiEntry {
        oui: [0x18, 0xB4, 0x30],
        vendor: "Nest",
        device_types: &["iot"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x0E, 0x58],
        vendor: "Sonos",
        device_types: &["speaker"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x17, 0x88],
        vendor: "Philips",
        device_types: &["iot"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x40, 0x8C],
        vendor: "Axis Communications",
        device_types: &["camera"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0x09, 0xBF],
        vendor: "Nintendo",
        device_types: &["console"],
        popular: false,
    },
    OuiEntry {
        oui: [0x00, 0xD9, 0xD1],
        vendor: "Sony Interactive",
        device_types: &["console"],
        popular: false,
    },
];
