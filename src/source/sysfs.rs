use super::{InterfaceSource, SourceKind};
use crate::error::Result;
use crate::sysfs::SysfsRoot;

pub const NET_CLASS: &str = "sys/class/net";

/// Interface discovery from the `/sys/class/net` directory tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysClassNet;

impl InterfaceSource for SysClassNet {
    fn kind(&self) -> SourceKind {
        SourceKind::Sysfs
    }

    fn list_interfaces(&self, sysfs: &SysfsRoot) -> Result<Vec<String>> {
        sysfs.list_dir(NET_CLASS)
    }

    fn list_wireless_interfaces(&self, sysfs: &SysfsRoot) -> Result<Vec<String>> {
        let ifnames = self.list_interfaces(sysfs)?;
        Ok(ifnames
            .into_iter()
            .filter(|ifname| is_wireless(sysfs, ifname))
            .collect())
    }
}

/// Wireless-capable interfaces carry a `phy80211` link to their radio.
pub fn is_wireless(sysfs: &SysfsRoot, ifname: &str) -> bool {
    attr_path(ifname, "phy80211").is_some_and(|path| sysfs.is_dir(path))
}

/// Relative path of a per-interface attribute, e.g. `sys/class/net/eth0/ifindex`.
/// Returns `None` for names the kernel cannot have assigned, so a caller-supplied
/// name never escapes the interface's own directory.
pub fn attr_path(ifname: &str, attr: &str) -> Option<String> {
    if ifname.is_empty() || ifname == "." || ifname == ".." || ifname.contains('/') {
        return None;
    }
    Some(format!("{}/{}/{}", NET_CLASS, ifname, attr))
}
