use crate::error::Result;
use crate::source::sysfs::attr_path;
use crate::sysfs::SysfsRoot;

/// Name of the radio (e.g. `phy0`) backing a wireless interface.
///
/// `Ok(None)` means the interface has no PHY binding: it is not wireless, it
/// does not exist, or the attribute is empty. Permission errors are returned.
pub fn phy_name(sysfs: &SysfsRoot, ifname: &str) -> Result<Option<String>> {
    let Some(relative) = attr_path(ifname, "phy80211/name") else {
        return Ok(None);
    };
    Ok(sysfs.read_optional(relative)?.filter(|name| !name.is_empty()))
}

/// PHY name of an interface on the running system.
pub fn get_phy_name(ifname: &str) -> Result<Option<String>> {
    phy_name(&SysfsRoot::system(), ifname)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_phy_name() {
        let tmp = tempfile::tempdir().unwrap();
        let phy = tmp.path().join("sys/class/net/wlan0/phy80211");
        fs::create_dir_all(&phy).unwrap();
        fs::write(phy.join("name"), "phy0\n").unwrap();
        let sysfs = SysfsRoot::new(tmp.path());

        assert_eq!(phy_name(&sysfs, "wlan0").unwrap().as_deref(), Some("phy0"));
    }

    #[test]
    fn test_no_phy_binding() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("sys/class/net/eth0")).unwrap();
        let sysfs = SysfsRoot::new(tmp.path());

        assert_eq!(phy_name(&sysfs, "eth0").unwrap(), None);
        assert_eq!(phy_name(&sysfs, "missing0").unwrap(), None);
        assert_eq!(phy_name(&sysfs, "../x").unwrap(), None);
    }

    #[test]
    fn test_empty_name_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        let phy = tmp.path().join("sys/class/net/wlan0/phy80211");
        fs::create_dir_all(&phy).unwrap();
        fs::write(phy.join("name"), "\n").unwrap();
        let sysfs = SysfsRoot::new(tmp.path());

        assert_eq!(phy_name(&sysfs, "wlan0").unwrap(), None);
    }

    #[test]
    fn test_phy_name_permission_denied() {
        let tmp = tempfile::tempdir().unwrap();
        let phy = tmp.path().join("sys/class/net/wlan0/phy80211");
        fs::create_dir_all(&phy).unwrap();
        fs::write(phy.join("name"), "phy0\n").unwrap();
        let sysfs = SysfsRoot::new(tmp.path());
        let _guard = crate::sysfs::deny_path_for_tests(phy.join("name"));

        assert!(phy_name(&sysfs, "wlan0").unwrap_err().is_permission_denied());
    }
}
