//! Byte-exact encoding of the `ifreq` ioctl argument and the ethtool
//! permanent-address payload.
//!
//! The kernel reads these as plain C structures. Instead of aliasing Rust
//! structs onto them, every request is built in a byte buffer with fixed
//! offsets:
//!
//! ```text
//! struct ifreq                          offset  size
//!   char     ifr_name[IFNAMSIZ]         0       16   NUL padded
//!   union {
//!     struct sockaddr ifr_hwaddr        16      16
//!       u16  sa_family                  16      2    native endian
//!       u8   sa_data[14]                18      14   address in the first 6
//!     short  ifr_flags                  16      2    native endian
//!     void  *ifr_data                   16      ptr  native endian word
//!   }
//!
//! struct ethtool_perm_addr
//!   u32 cmd                             0       4    ETHTOOL_GPERMADDR
//!   u32 size                            4       4    capacity in, length out
//!   u8  data[size]                      8       6
//! ```
//!
//! `sizeof(struct ifreq)` is 40 on 64-bit targets and 32 on 32-bit ones. The
//! buffer is always 40 bytes; the kernel copies only what it needs.

use crate::error::{NetlinkError, Result};

/// Maximum interface name length including the trailing NUL.
pub const IFNAMSIZ: usize = 16;
/// Size of the request buffer handed to the kernel.
pub const IFREQ_SIZE: usize = 40;
/// Start of the `ifr_ifru` union.
pub const IFR_UNION_OFFSET: usize = IFNAMSIZ;
/// Start of `sa_data` inside `ifr_hwaddr`.
pub const SA_DATA_OFFSET: usize = IFR_UNION_OFFSET + 2;
/// Ethernet hardware address length.
pub const ETH_ALEN: usize = 6;

/// `ARPHRD_ETHER`, the address family tag for Ethernet hardware addresses.
pub const ARPHRD_ETHER: u16 = 1;
pub const IFF_UP: u16 = 0x1;
pub const IFF_LOOPBACK: u16 = 0x8;

/// ethtool sub-command selecting the permanent address query.
pub const ETHTOOL_GPERMADDR: u32 = 0x0000_0020;
/// `cmd` + `size` header of `struct ethtool_perm_addr`.
pub const PERM_ADDR_HEADER: usize = 8;
pub const PERM_ADDR_SIZE: usize = PERM_ADDR_HEADER + ETH_ALEN;

/// A validated interface name, NUL padded to `IFNAMSIZ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfName([u8; IFNAMSIZ]);

impl IfName {
    /// Validate `name` against the kernel's naming rules.
    ///
    /// # Errors
    ///
    /// `InvalidInterfaceName` if the name is empty, longer than 15 bytes, or
    /// contains a NUL, `/` or whitespace.
    pub fn new(name: &str) -> Result<Self> {
        let invalid = |reason: &str| NetlinkError::InvalidInterfaceName {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.len() >= IFNAMSIZ {
            return Err(invalid("name exceeds 15 bytes"));
        }
        if name
            .bytes()
            .any(|b| b == 0 || b == b'/' || b.is_ascii_whitespace())
        {
            return Err(invalid("name contains NUL, '/' or whitespace"));
        }

        let mut bytes = [0u8; IFNAMSIZ];
        bytes[..name.len()].copy_from_slice(name.as_bytes());
        Ok(Self(bytes))
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; IFNAMSIZ] {
        &self.0
    }
}

/// Reply to an `ETHTOOL_GPERMADDR` query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermAddrReply {
    /// Address length reported by the driver.
    pub size: u32,
    /// First `ETH_ALEN` bytes of the payload.
    pub data: [u8; ETH_ALEN],
}

impl PermAddrReply {
    /// The address, if the driver reported an Ethernet-sized one.
    #[must_use]
    pub fn address(&self) -> Option<[u8; ETH_ALEN]> {
        (self.size as usize == ETH_ALEN).then_some(self.data)
    }
}

/// Request buffer carrying only the interface name (`SIOCGIFFLAGS`,
/// `SIOCGIFHWADDR`).
#[must_use]
pub fn encode_name(name: &IfName) -> [u8; IFREQ_SIZE] {
    let mut buf = [0u8; IFREQ_SIZE];
    buf[..IFNAMSIZ].copy_from_slice(name.as_bytes());
    buf
}

/// `SIOCSIFFLAGS` request.
#[must_use]
pub fn encode_flags(name: &IfName, flags: u16) -> [u8; IFREQ_SIZE] {
    let mut buf = encode_name(name);
    buf[IFR_UNION_OFFSET..IFR_UNION_OFFSET + 2].copy_from_slice(&flags.to_ne_bytes());
    buf
}

/// Read `ifr_flags` from a `SIOCGIFFLAGS` reply.
#[must_use]
pub fn decode_flags(buf: &[u8; IFREQ_SIZE]) -> u16 {
    u16::from_ne_bytes([buf[IFR_UNION_OFFSET], buf[IFR_UNION_OFFSET + 1]])
}

/// `SIOCSIFHWADDR` request: name, `ARPHRD_ETHER`, six address bytes.
#[must_use]
pub fn encode_hwaddr(name: &IfName, mac: [u8; ETH_ALEN]) -> [u8; IFREQ_SIZE] {
    let mut buf = encode_name(name);
    buf[IFR_UNION_OFFSET..SA_DATA_OFFSET].copy_from_slice(&ARPHRD_ETHER.to_ne_bytes());
    buf[SA_DATA_OFFSET..SA_DATA_OFFSET + ETH_ALEN].copy_from_slice(&mac);
    buf
}

/// Read `(sa_family, address)` from a `SIOCGIFHWADDR` reply.
#[must_use]
pub fn decode_hwaddr(buf: &[u8; IFREQ_SIZE]) -> (u16, [u8; ETH_ALEN]) {
    let family = u16::from_ne_bytes([buf[IFR_UNION_OFFSET], buf[IFR_UNION_OFFSET + 1]]);
    let mut mac = [0u8; ETH_ALEN];
    mac.copy_from_slice(&buf[SA_DATA_OFFSET..SA_DATA_OFFSET + ETH_ALEN]);
    (family, mac)
}

/// `struct ethtool_perm_addr` asking for up to `ETH_ALEN` bytes.
#[must_use]
pub fn encode_perm_addr_request() -> [u8; PERM_ADDR_SIZE] {
    let mut buf = [0u8; PERM_ADDR_SIZE];
    buf[0..4].copy_from_slice(&ETHTOOL_GPERMADDR.to_ne_bytes());
    buf[4..8].copy_from_slice(&(ETH_ALEN as u32).to_ne_bytes());
    buf
}

#[must_use]
pub fn decode_perm_addr(buf: &[u8; PERM_ADDR_SIZE]) -> PermAddrReply {
    let size = u32::from_ne_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let mut data = [0u8; ETH_ALEN];
    data.copy_from_slice(&buf[PERM_ADDR_HEADER..PERM_ADDR_HEADER + ETH_ALEN]);
    PermAddrReply { size, data }
}

/// `SIOCETHTOOL` request whose `ifr_data` points at `payload`.
///
/// The returned buffer holds the payload's address as a raw word; the payload
/// must outlive the ioctl that consumes it.
#[must_use]
pub fn encode_ethtool(name: &IfName, payload: &mut [u8; PERM_ADDR_SIZE]) -> [u8; IFREQ_SIZE] {
    let mut buf = encode_name(name);
    let word = (payload.as_mut_ptr() as usize).to_ne_bytes();
    buf[IFR_UNION_OFFSET..IFR_UNION_OFFSET + word.len()].copy_from_slice(&word);
    buf
}
