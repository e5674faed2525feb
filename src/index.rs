//! Interface name <-> kernel ifindex lookups, like `if_nametoindex(3)` and
//! `if_indextoname(3)` but read from `/sys/class/net/<if>/ifindex`.

use crate::discover::Discovery;
use crate::error::{Error, Result};
use crate::source::sysfs::attr_path;
use crate::sysfs::SysfsRoot;

/// Kernel index of the interface `ifname`.
///
/// Errors: `InterfaceNotFound` if the interface has no `ifindex` attribute,
/// `MalformedData` if its content is not an integer, `PermissionDenied` if it
/// cannot be read.
pub fn ifname_to_index(sysfs: &SysfsRoot, ifname: &str) -> Result<u32> {
    let not_found = || Error::InterfaceNotFound {
        name: ifname.to_string(),
    };
    let relative = attr_path(ifname, "ifindex").ok_or_else(not_found)?;
    let value = sysfs.read_optional(&relative)?.ok_or_else(not_found)?;
    value.parse::<u32>().map_err(|e| Error::MalformedData {
        path: sysfs.path(&relative),
        detail: format!("index '{}' is not an integer: {}", value, e),
    })
}

/// Name of the interface holding kernel index `index`.
///
/// Scans every discovered interface and returns the first whose index
/// matches. Candidates whose attribute is missing or not an integer are
/// skipped; a permission error on any candidate aborts the scan.
pub fn index_to_ifname(discovery: &Discovery, index: u32) -> Result<String> {
    for ifname in discovery.nic_names()? {
        match ifname_to_index(discovery.sysfs(), &ifname) {
            Ok(found) if found == index => return Ok(ifname),
            Ok(_) => {}
            Err(e @ (Error::MalformedData { .. } | Error::InterfaceNotFound { .. })) => {
                tracing::debug!("skipping {} during index scan: {}", ifname, e);
            }
            Err(e) => return Err(e),
        }
    }
    Err(Error::IndexNotFound { index })
}

/// `ifname_to_index` on the running system.
pub fn if_nametoindex(ifname: &str) -> Result<u32> {
    ifname_to_index(&SysfsRoot::system(), ifname)
}

/// `index_to_ifname` on the running system.
pub fn if_indextoname(index: u32) -> Result<String> {
    index_to_ifname(&Discovery::system(), index)
}
