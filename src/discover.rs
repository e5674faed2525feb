use crate::error::{Error, Result};
use crate::source::{self, InterfaceSource, SourceKind};
use crate::sysfs::SysfsRoot;
use serde::Serialize;

/// Interface discovery over an ordered chain of sources.
///
/// Each query tries the sources in order and returns the first one that is
/// available. A source whose backing file or directory is missing is skipped;
/// any other failure (e.g. permission denied) stops the chain and is returned.
/// When no source is available the result is an empty list.
#[derive(Debug)]
pub struct Discovery {
    sysfs: SysfsRoot,
    sources: Vec<Box<dyn InterfaceSource>>,
}

/// One row of the interface inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interface {
    pub name: String,
    pub index: Option<u32>,
    pub wireless: bool,
    pub phy: Option<String>,
}

impl Default for Discovery {
    fn default() -> Self {
        Self::new(SysfsRoot::system())
    }
}

impl Discovery {
    /// Discovery against the running system with the default source chain.
    pub fn system() -> Self {
        Self::default()
    }

    pub fn new(sysfs: SysfsRoot) -> Self {
        Self::with_sources(sysfs, source::default_sources())
    }

    pub fn with_sources(sysfs: SysfsRoot, sources: Vec<Box<dyn InterfaceSource>>) -> Self {
        Self { sysfs, sources }
    }

    pub fn from_kinds(sysfs: SysfsRoot, kinds: &[SourceKind]) -> Self {
        Self::with_sources(sysfs, kinds.iter().map(|k| k.build()).collect())
    }

    pub fn sysfs(&self) -> &SysfsRoot {
        &self.sysfs
    }

    pub fn source_kinds(&self) -> Vec<SourceKind> {
        self.sources.iter().map(|s| s.kind()).collect()
    }

    /// Names of all network interfaces.
    pub fn nic_names(&self) -> Result<Vec<String>> {
        self.first_available("interface", |source, sysfs| source.list_interfaces(sysfs))
    }

    /// Names of wireless-capable network interfaces.
    pub fn wnic_names(&self) -> Result<Vec<String>> {
        self.first_available("wireless interface", |source, sysfs| {
            source.list_wireless_interfaces(sysfs)
        })
    }

    /// PHY name for every interface from `nic_names`, in the same order.
    pub fn phy_names(&self) -> Result<Vec<Option<String>>> {
        self.phy_names_for(&self.nic_names()?)
    }

    /// PHY name for every interface from `wnic_names`, in the same order.
    pub fn wiphy_names(&self) -> Result<Vec<Option<String>>> {
        self.phy_names_for(&self.wnic_names()?)
    }

    pub fn phy_name(&self, ifname: &str) -> Result<Option<String>> {
        crate::phy::phy_name(&self.sysfs, ifname)
    }

    pub fn ifname_to_index(&self, ifname: &str) -> Result<u32> {
        crate::index::ifname_to_index(&self.sysfs, ifname)
    }

    pub fn index_to_ifname(&self, index: u32) -> Result<String> {
        crate::index::index_to_ifname(self, index)
    }

    /// Inventory of every interface with its index, wireless flag and PHY.
    /// Per-interface lookups that fail are left empty, except permission
    /// errors which are returned.
    pub fn interfaces(&self) -> Result<Vec<Interface>> {
        let wireless = self.wnic_names()?;
        let mut rows = Vec::new();
        for name in self.nic_names()? {
            let index = match self.ifname_to_index(&name) {
                Ok(index) => Some(index),
                Err(e @ Error::PermissionDenied { .. }) => return Err(e),
                Err(e) => {
                    tracing::debug!("no index for {}: {}", name, e);
                    None
                }
            };
            let phy = match self.phy_name(&name) {
                Ok(phy) => phy,
                Err(e @ Error::PermissionDenied { .. }) => return Err(e),
                Err(e) => {
                    tracing::debug!("no PHY for {}: {}", name, e);
                    None
                }
            };
            rows.push(Interface {
                wireless: wireless.contains(&name),
                name,
                index,
                phy,
            });
        }
        Ok(rows)
    }

    /// PHY name for each of `ifnames`, in order. A lookup that fails with
    /// malformed or unreadable data is logged and recorded as `None`;
    /// permission denied is returned.
    pub fn phy_names_for(&self, ifnames: &[String]) -> Result<Vec<Option<String>>> {
        let mut phys = Vec::with_capacity(ifnames.len());
        for ifname in ifnames {
            match self.phy_name(ifname) {
                Ok(phy) => phys.push(phy),
                Err(e @ Error::PermissionDenied { .. }) => return Err(e),
                Err(e) => {
                    tracing::warn!("failed to resolve PHY of {}: {}", ifname, e);
                    phys.push(None);
                }
            }
        }
        Ok(phys)
    }

    fn first_available(
        &self,
        what: &str,
        list: impl Fn(&dyn InterfaceSource, &SysfsRoot) -> Result<Vec<String>>,
    ) -> Result<Vec<String>> {
        for source in &self.sources {
            match list(source.as_ref(), &self.sysfs) {
                Ok(names) => {
                    tracing::debug!(
                        "{} found {} {} name(s)",
                        source.kind(),
                        names.len(),
                        what
                    );
                    return Ok(names);
                }
                Err(Error::SourceUnavailable { path }) => {
                    tracing::debug!(
                        "{} unavailable ({}), trying next source",
                        source.kind(),
                        path.display()
                    );
                }
                Err(e) => return Err(e),
            }
        }
        tracing::debug!("no {} source available", what);
        Ok(Vec::new())
    }
}

/// Names of all network interfaces on the running system.
pub fn get_nic_names() -> Result<Vec<String>> {
    Discovery::system().nic_names()
}

/// Names of wireless-capable interfaces on the running system.
pub fn get_wnic_names() -> Result<Vec<String>> {
    Discovery::system().wnic_names()
}

pub fn get_phy_names() -> Result<Vec<Option<String>>> {
    Discovery::system().phy_names()
}

pub fn get_wiphy_names() -> Result<Vec<Option<String>>> {
    Discovery::system().wiphy_names()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use std::path::PathBuf;

    /// Source returning a fixed outcome, for exercising the fallback chain.
    #[derive(Debug)]
    enum Fixed {
        Names(&'static [&'static str]),
        Unavailable,
        Denied,
    }

    impl Fixed {
        fn outcome(&self) -> Result<Vec<String>> {
            match self {
                Fixed::Names(names) => Ok(names.iter().map(|n| n.to_string()).collect()),
                Fixed::Unavailable => Err(Error::SourceUnavailable {
                    path: PathBuf::from("/gone"),
                }),
                Fixed::Denied => Err(Error::PermissionDenied {
                    path: PathBuf::from("/locked"),
                    source: std::io::Error::from(ErrorKind::PermissionDenied),
                }),
            }
        }
    }

    impl InterfaceSource for Fixed {
        fn kind(&self) -> SourceKind {
            SourceKind::Procfs
        }

        fn list_interfaces(&self, _sysfs: &SysfsRoot) -> Result<Vec<String>> {
            self.outcome()
        }

        fn list_wireless_interfaces(&self, _sysfs: &SysfsRoot) -> Result<Vec<String>> {
            self.outcome()
        }
    }

    fn chain(sources: Vec<Fixed>) -> Discovery {
        let boxed = sources
            .into_iter()
            .map(|s| Box::new(s) as Box<dyn InterfaceSource>)
            .collect();
        Discovery::with_sources(SysfsRoot::new("/nonexistent-root"), boxed)
    }

    #[test]
    fn test_first_source_wins() {
        let d = chain(vec![Fixed::Names(&["eth0"]), Fixed::Names(&["lo"])]);
        assert_eq!(d.nic_names().unwrap(), vec!["eth0"]);
    }

    #[test]
    fn test_falls_back_on_unavailable() {
        let d = chain(vec![Fixed::Unavailable, Fixed::Names(&["lo", "eth0"])]);
        assert_eq!(d.nic_names().unwrap(), vec!["lo", "eth0"]);
        assert_eq!(d.wnic_names().unwrap(), vec!["lo", "eth0"]);
    }

    #[test]
    fn test_empty_first_source_does_not_fall_back() {
        let d = chain(vec![Fixed::Names(&[]), Fixed::Names(&["lo"])]);
        assert!(d.nic_names().unwrap().is_empty());
    }

    #[test]
    fn test_all_unavailable_is_empty() {
        let d = chain(vec![Fixed::Unavailable, Fixed::Unavailable]);
        assert!(d.nic_names().unwrap().is_empty());
        assert!(d.wnic_names().unwrap().is_empty());
        assert!(d.phy_names().unwrap().is_empty());
    }

    #[test]
    fn test_no_sources_is_empty() {
        let d = chain(vec![]);
        assert!(d.nic_names().unwrap().is_empty());
    }

    #[test]
    fn test_permission_denied_stops_chain() {
        let d = chain(vec![Fixed::Denied, Fixed::Names(&["lo"])]);
        assert!(d.nic_names().unwrap_err().is_permission_denied());
    }

    #[test]
    fn test_phy_names_keep_order_with_missing_entries() {
        // root does not exist, so no interface has a PHY
        let d = chain(vec![Fixed::Names(&["eth0", "wlan0"])]);
        assert_eq!(d.phy_names().unwrap(), vec![None, None]);
    }

    fn wireless_fixture(root: &std::path::Path) {
        for (ifname, phy) in [("wlan0", "phy0"), ("wlan1", "phy1")] {
            let dir = root.join("sys/class/net").join(ifname).join("phy80211");
            std::fs::create_dir_all(&dir).unwrap();
            std::fs::write(dir.join("name"), format!("{}\n", phy)).unwrap();
        }
    }

    #[test]
    fn test_phy_names_propagate_permission_denied() {
        let tmp = tempfile::tempdir().unwrap();
        wireless_fixture(tmp.path());
        let d = Discovery::new(SysfsRoot::new(tmp.path()));
        let _guard = crate::sysfs::deny_path_for_tests(
            tmp.path().join("sys/class/net/wlan1/phy80211/name"),
        );

        assert!(d.phy_names().unwrap_err().is_permission_denied());
        assert!(d.wiphy_names().unwrap_err().is_permission_denied());
        assert!(d.interfaces().unwrap_err().is_permission_denied());
    }

    #[test]
    fn test_phy_names_skip_malformed_entry() {
        let tmp = tempfile::tempdir().unwrap();
        wireless_fixture(tmp.path());
        std::fs::write(
            tmp.path().join("sys/class/net/wlan0/phy80211/name"),
            [0xff, 0xfe, b'\n'],
        )
        .unwrap();
        let d = Discovery::new(SysfsRoot::new(tmp.path()));

        assert_eq!(
            d.wiphy_names().unwrap(),
            vec![None, Some("phy1".to_string())]
        );
    }

    #[test]
    fn test_absent_root_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let d = Discovery::new(SysfsRoot::new(tmp.path()));
        assert!(d.nic_names().unwrap().is_empty());
        assert!(d.wnic_names().unwrap().is_empty());
        assert!(d.wiphy_names().unwrap().is_empty());
        assert!(d.interfaces().unwrap().is_empty());
    }

    #[test]
    fn test_from_kinds() {
        let d = Discovery::from_kinds(SysfsRoot::system(), &[SourceKind::Procfs]);
        assert_eq!(d.source_kinds(), vec![SourceKind::Procfs]);
    }
}
