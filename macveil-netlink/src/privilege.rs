//! Read-only superuser check.

use nix::unistd::{getegid, geteuid, User};
use serde::Serialize;

use crate::error::{NetlinkError, Result};

/// Effective identity of the running process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub uid: u32,
    pub gid: u32,
    /// Account name for `uid`, if the user database resolves it.
    pub username: Option<String>,
}

impl Identity {
    /// Resolve the effective uid/gid and the matching account name.
    ///
    /// # Errors
    ///
    /// `IdentityError` if the user database lookup fails outright.
    pub fn current() -> Result<Self> {
        let uid = geteuid();
        let gid = getegid();
        let user = User::from_uid(uid).map_err(|e| NetlinkError::IdentityError {
            reason: e.to_string(),
        })?;

        Ok(Self {
            uid: uid.as_raw(),
            gid: gid.as_raw(),
            username: user.map(|u| u.name),
        })
    }

    /// Root by every marker: uid 0, gid 0 and the account named `root`.
    #[must_use]
    pub fn is_superuser(&self) -> bool {
        self.uid == 0 && self.gid == 0 && self.username.as_deref() == Some("root")
    }
}

/// Check if running with sufficient privileges to change hardware addresses.
///
/// # Errors
///
/// `IdentityError` if the identity cannot be resolved.
pub fn running_as_root() -> Result<bool> {
    Ok(Identity::current()?.is_superuser())
}
