//! Control-plane socket used as the handle for interface ioctls.

use std::os::fd::{AsRawFd, OwnedFd};

use nix::sys::socket::{socket, AddressFamily, SockFlag, SockType};

use crate::ifreq::IFREQ_SIZE;

pub(crate) const SIOCGIFFLAGS: libc::c_ulong = 0x8913;
pub(crate) const SIOCSIFFLAGS: libc::c_ulong = 0x8914;
pub(crate) const SIOCSIFHWADDR: libc::c_ulong = 0x8924;
pub(crate) const SIOCGIFHWADDR: libc::c_ulong = 0x8927;
pub(crate) const SIOCETHTOOL: libc::c_ulong = 0x8946;

/// An `AF_INET` datagram socket, closed when dropped.
pub(crate) struct ControlSocket {
    fd: OwnedFd,
}

impl ControlSocket {
    pub(crate) fn open() -> std::io::Result<Self> {
        let fd = socket(
            AddressFamily::Inet,
            SockType::Datagram,
            SockFlag::SOCK_CLOEXEC,
            None,
        )
        .map_err(std::io::Error::from)?;
        Ok(Self { fd })
    }

    /// Issue `request` with `ifr` as its argument. The kernel may write the
    /// reply back into `ifr`.
    pub(crate) fn ioctl(
        &self,
        request: libc::c_ulong,
        ifr: &mut [u8; IFREQ_SIZE],
    ) -> std::io::Result<()> {
        let res = unsafe {
            libc::ioctl(
                self.fd.as_raw_fd(),
                request as _,
                ifr.as_mut_ptr().cast::<libc::c_void>(),
            )
        };
        if res < 0 {
            return Err(std::io::Error::last_os_error());
        }
        Ok(())
    }
}
