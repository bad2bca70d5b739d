//! Kernel seam for address inspection and control.
//!
//! [`MacManager`](crate::MacManager) and [`Spoofer`](crate::Spoofer) talk to the
//! kernel only through [`LinkOps`], so the precondition and policy logic can be
//! exercised without root or real hardware.

use crate::error::Result;
use crate::mac::MacAddress;

pub use macveil_netlink::InterfaceInfo;

/// Kernel operations needed to inspect and change hardware addresses.
///
/// Implementations report an unknown or unusable name as
/// `InterfaceNotFound`, except [`Self::permanent_address`] which surfaces
/// it as `DeviceQueryFailed`.
pub trait LinkOps: Send + Sync {
    /// Non-loopback interfaces in enumeration order
    fn list_interfaces(&self) -> Result<Vec<InterfaceInfo>>;
    /// Index and flags of one interface
    fn interface_info(&self, interface: &str) -> Result<InterfaceInfo>;
    /// Address currently in use
    fn current_address(&self, interface: &str) -> Result<MacAddress>;
    /// Burned-in address, as reported by the driver
    fn permanent_address(&self, interface: &str) -> Result<MacAddress>;
    /// Hand `mac` to the driver, with no precondition checks
    fn write_address(&self, interface: &str, mac: &MacAddress) -> Result<()>;
    /// Raise or lower the administrative up flag
    fn set_link_up(&self, interface: &str, up: bool) -> Result<()>;
    /// Whether the process runs with an effective uid of 0
    fn is_superuser(&self) -> Result<bool>;
}

impl<T: LinkOps + ?Sized> LinkOps for &T {
    fn list_interfaces(&self) -> Result<Vec<InterfaceInfo>> {
        (**self).list_interfaces()
    }

    fn interface_info(&self, interface: &str) -> Result<InterfaceInfo> {
        (**self).interface_info(interface)
    }

    fn current_address(&self, interface: &str) -> Result<MacAddress> {
        (**self).current_address(interface)
    }

    fn permanent_address(&self, interface: &str) -> Result<MacAddress> {
        (**self).permanent_address(interface)
    }

    fn write_address(&self, interface: &str, mac: &MacAddress) -> Result<()> {
        (**self).write_address(interface, mac)
    }

    fn set_link_up(&self, interface: &str, up: bool) -> Result<()> {
        (**self).set_link_up(interface, up)
    }

    fn is_superuser(&self) -> Result<bool> {
        (**self).is_superuser()
    }
}

/// [`LinkOps`] backed by control-socket ioctls.
#[derive(Debug, Clone, Copy, Default)]
pub struct KernelLinkOps;

impl LinkOps for KernelLinkOps {
    fn list_interfaces(&self) -> Result<Vec<InterfaceInfo>> {
        Ok(macveil_netlink::list_interfaces()?)
    }

    fn interface_info(&self, interface: &str) -> Result<InterfaceInfo> {
        Ok(macveil_netlink::interface_info(interface)?)
    }

    fn current_address(&self, interface: &str) -> Result<MacAddress> {
        Ok(MacAddress::new(macveil_netlink::current_address(interface)?))
    }

    fn permanent_address(&self, interface: &str) -> Result<MacAddress> {
        Ok(MacAddress::new(macveil_netlink::permanent_address(
            interface,
        )?))
    }

    fn write_address(&self, interface: &str, mac: &MacAddress) -> Result<()> {
        macveil_netlink::set_hardware_address(interface, *mac.as_bytes())?;
        Ok(())
    }

    fn set_link_up(&self, interface: &str, up: bool) -> Result<()> {
        macveil_netlink::set_link_up(interface, up)?;
        Ok(())
    }

    fn is_superuser(&self) -> Result<bool> {
        Ok(macveil_netlink::running_as_root()?)
    }
}
