//! # macveil-netlink
//!
//! Direct kernel access for interface hardware addresses. Replaces `ip link`
//! and `ethtool -P` with ioctls on a control socket.
//!
//! ## Features
//!
//! - **Interface Registry**: enumerate non-loopback interfaces, query up/down state
//! - **Address Access**: current address (`SIOCGIFHWADDR`) and burned-in address
//!   (`SIOCETHTOOL` / `ETHTOOL_GPERMADDR`)
//! - **Address Control**: program a new address (`SIOCSIFHWADDR`), cycle the link
//! - **Privilege Probe**: effective-identity superuser check
//!
//! ## Platform Support
//!
//! Linux-only. The ioctl request codes and `ifreq` layout are Linux ABI, so the
//! crate refuses to build for other targets.
//!
//! ## Usage
//!
//! ```no_run
//! use macveil_netlink::*;
//!
//! fn main() -> Result<()> {
//!     let permanent = permanent_address("eth0")?;
//!     let current = current_address("eth0")?;
//!     println!("changed: {}", permanent != current);
//!     Ok(())
//! }
//! ```

#[cfg(not(target_os = "linux"))]
compile_error!("macveil-netlink drives Linux ioctls and only builds for target_os = \"linux\".");

pub mod error;
pub mod ifreq;
pub mod interface;
pub mod privilege;
mod socket;

pub use error::{NetlinkError, Result};
pub use interface::{
    current_address, interface_info, is_up, list_interfaces, permanent_address,
    set_hardware_address, set_link_up, InterfaceInfo,
};
pub use privilege::{running_as_root, Identity};
