//! Interface enumeration and hardware address access via ioctl.
//!
//! Every call opens its own control socket and closes it before returning, so
//! nothing about an interface is cached between calls.

use serde::Serialize;

use crate::error::{NetlinkError, Result};
use crate::ifreq::{self, IfName, ETH_ALEN, IFF_LOOPBACK, IFF_UP};
use crate::socket::{
    ControlSocket, SIOCETHTOOL, SIOCGIFFLAGS, SIOCGIFHWADDR, SIOCSIFFLAGS, SIOCSIFHWADDR,
};

/// Live state of one network interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceInfo {
    /// Interface name (e.g. "eth0")
    pub name: String,
    /// Kernel interface index
    pub index: u32,
    /// Administrative state (`IFF_UP`)
    pub up: bool,
    /// Loopback device (`IFF_LOOPBACK`)
    pub loopback: bool,
}

/// List every non-loopback interface in kernel enumeration order.
///
/// Interfaces that disappear between enumeration and the flag query are
/// skipped.
///
/// # Errors
///
/// * `EnumerationFailed` - `if_nameindex` failed
/// * `QueryFailed` - flag query failed for a reason other than a vanished device
pub fn list_interfaces() -> Result<Vec<InterfaceInfo>> {
    let names = nix::net::if_::if_nameindex().map_err(|e| NetlinkError::EnumerationFailed {
        reason: e.to_string(),
    })?;

    let mut interfaces = Vec::new();
    for entry in names.iter() {
        let name = entry.name().to_string_lossy().into_owned();
        let flags = match interface_flags(&name) {
            Ok(flags) => flags,
            Err(NetlinkError::InterfaceNotFound { .. }) => {
                log::debug!("Interface {} vanished during enumeration", name);
                continue;
            }
            Err(e) => return Err(e),
        };
        if flags & IFF_LOOPBACK != 0 {
            continue;
        }
        interfaces.push(InterfaceInfo {
            name,
            index: entry.index(),
            up: flags & IFF_UP != 0,
            loopback: false,
        });
    }

    Ok(interfaces)
}

/// Resolve `name` to its current state.
///
/// # Errors
///
/// * `InterfaceNotFound` - no interface with that name
pub fn interface_info(name: &str) -> Result<InterfaceInfo> {
    let flags = interface_flags(name)?;
    let index = nix::net::if_::if_nametoindex(name).map_err(|_| NetlinkError::InterfaceNotFound {
        name: name.to_string(),
    })?;

    Ok(InterfaceInfo {
        name: name.to_string(),
        index,
        up: flags & IFF_UP != 0,
        loopback: flags & IFF_LOOPBACK != 0,
    })
}

/// Whether `name` is administratively up.
///
/// # Errors
///
/// * `InterfaceNotFound` - no interface with that name
pub fn is_up(name: &str) -> Result<bool> {
    Ok(interface_flags(name)? & IFF_UP != 0)
}

/// Currently configured hardware address (`SIOCGIFHWADDR`).
///
/// # Errors
///
/// * `InterfaceNotFound` - no interface with that name
/// * `QueryFailed` - the kernel rejected the query
pub fn current_address(name: &str) -> Result<[u8; ETH_ALEN]> {
    let ifname = resolve_name(name)?;
    let sock = ControlSocket::open().map_err(|e| NetlinkError::query(name, "socket", &e))?;

    let mut ifr = ifreq::encode_name(&ifname);
    sock.ioctl(SIOCGIFHWADDR, &mut ifr)
        .map_err(|e| lookup_error(name, "SIOCGIFHWADDR", &e))?;

    let (family, mac) = ifreq::decode_hwaddr(&ifr);
    log::debug!("{} hwaddr family {} -> {:02x?}", name, family, mac);
    Ok(mac)
}

/// Burned-in address reported by the driver (`ETHTOOL_GPERMADDR`).
///
/// # Errors
///
/// * `QueryFailed` - the socket could not be opened, the driver rejected the
///   query (no such device, unsupported), or it reported a non-Ethernet length
pub fn permanent_address(name: &str) -> Result<[u8; ETH_ALEN]> {
    let ifname = IfName::new(name).map_err(|e| unresolvable_query(name, &e))?;
    let sock = ControlSocket::open().map_err(|e| NetlinkError::query(name, "socket", &e))?;

    let mut payload = ifreq::encode_perm_addr_request();
    let mut ifr = ifreq::encode_ethtool(&ifname, &mut payload);
    if let Err(e) = sock.ioctl(SIOCETHTOOL, &mut ifr) {
        log::debug!("ETHTOOL_GPERMADDR on {} failed: {}", name, e);
        return Err(NetlinkError::query(name, "SIOCETHTOOL", &e));
    }

    let reply = ifreq::decode_perm_addr(&payload);
    reply.address().ok_or_else(|| NetlinkError::QueryFailed {
        interface: name.to_string(),
        request: "SIOCETHTOOL",
        code: libc::EINVAL,
        reason: format!("driver reported a {}-byte permanent address", reply.size),
    })
}

/// Program a new hardware address (`SIOCSIFHWADDR`).
///
/// No precondition checks happen here; the kernel rejects the request on an
/// up interface for most drivers.
///
/// # Errors
///
/// * `ControlFailed` - the socket could not be opened or the kernel refused
pub fn set_hardware_address(name: &str, mac: [u8; ETH_ALEN]) -> Result<()> {
    let ifname = resolve_name(name)?;
    let sock = ControlSocket::open().map_err(|e| NetlinkError::control(name, "socket", &e))?;

    let mut ifr = ifreq::encode_hwaddr(&ifname, mac);
    sock.ioctl(SIOCSIFHWADDR, &mut ifr)
        .map_err(|e| NetlinkError::control(name, "SIOCSIFHWADDR", &e))?;

    log::info!("Interface {} hardware address set to {:02x?}", name, mac);
    Ok(())
}

/// Set or clear `IFF_UP`, leaving every other flag untouched.
///
/// # Errors
///
/// * `InterfaceNotFound` - no interface with that name
/// * `ControlFailed` - the kernel refused the new flags
pub fn set_link_up(name: &str, up: bool) -> Result<()> {
    let ifname = resolve_name(name)?;
    let flags = interface_flags(name)?;
    let flags = if up { flags | IFF_UP } else { flags & !IFF_UP };

    let sock = ControlSocket::open().map_err(|e| NetlinkError::control(name, "socket", &e))?;
    let mut ifr = ifreq::encode_flags(&ifname, flags);
    sock.ioctl(SIOCSIFFLAGS, &mut ifr)
        .map_err(|e| NetlinkError::control(name, "SIOCSIFFLAGS", &e))?;

    log::info!("Interface {} set to {}", name, if up { "UP" } else { "DOWN" });
    Ok(())
}

fn interface_flags(name: &str) -> Result<u16> {
    let ifname = resolve_name(name)?;
    let sock = ControlSocket::open().map_err(|e| NetlinkError::query(name, "socket", &e))?;

    let mut ifr = ifreq::encode_name(&ifname);
    sock.ioctl(SIOCGIFFLAGS, &mut ifr)
        .map_err(|e| lookup_error(name, "SIOCGIFFLAGS", &e))?;
    Ok(ifreq::decode_flags(&ifr))
}

/// A name the kernel could never accept cannot resolve to an interface.
fn resolve_name(name: &str) -> Result<IfName> {
    IfName::new(name).map_err(|e| {
        log::debug!("{}", e);
        NetlinkError::InterfaceNotFound {
            name: name.to_string(),
        }
    })
}

fn unresolvable_query(name: &str, err: &NetlinkError) -> NetlinkError {
    NetlinkError::QueryFailed {
        interface: name.to_string(),
        request: "SIOCETHTOOL",
        code: libc::ENODEV,
        reason: err.to_string(),
    }
}

fn lookup_error(name: &str, request: &'static str, err: &std::io::Error) -> NetlinkError {
    match err.raw_os_error() {
        Some(code) if code == libc::ENODEV || code == libc::ENXIO => {
            NetlinkError::InterfaceNotFound {
                name: name.to_string(),
            }
        }
        _ => NetlinkError::query(name, request, err),
    }
}
