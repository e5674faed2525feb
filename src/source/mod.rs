pub mod procfs;
pub mod sysfs;

use crate::error::Result;
use crate::sysfs::SysfsRoot;
use serde::{Deserialize, Serialize};

/// A place the kernel lists its network interfaces.
///
/// Both operations return `Error::SourceUnavailable` when the backing
/// resource is absent, and an empty list when it exists but lists nothing.
pub trait InterfaceSource: std::fmt::Debug + Send + Sync {
    fn kind(&self) -> SourceKind;

    /// All network interface names.
    fn list_interfaces(&self, sysfs: &SysfsRoot) -> Result<Vec<String>>;

    /// Interface names restricted to wireless-capable devices.
    fn list_wireless_interfaces(&self, sysfs: &SysfsRoot) -> Result<Vec<String>>;
}

/// Selector for a discovery source, as named in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Directory listing of `/sys/class/net`.
    Sysfs,
    /// Line-oriented `/proc/net/dev` and `/proc/net/wireless`.
    Procfs,
}

impl SourceKind {
    pub fn build(self) -> Box<dyn InterfaceSource> {
        match self {
            SourceKind::Sysfs => Box::new(sysfs::SysClassNet),
            SourceKind::Procfs => Box::new(procfs::ProcNet),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Sysfs => write!(f, "sysfs"),
            SourceKind::Procfs => write!(f, "procfs"),
        }
    }
}

/// Default fallback chain: structured source first, line-oriented second.
pub fn default_sources() -> Vec<Box<dyn InterfaceSource>> {
    vec![SourceKind::Sysfs.build(), SourceKind::Procfs.build()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let kinds: Vec<SourceKind> = default_sources().iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, vec![SourceKind::Sysfs, SourceKind::Procfs]);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SourceKind::Sysfs.to_string(), "sysfs");
        assert_eq!(SourceKind::Procfs.to_string(), "procfs");
    }

    #[test]
    fn test_kind_deserialize() {
        #[derive(Deserialize)]
        struct Wrap {
            sources: Vec<SourceKind>,
        }
        let w: Wrap = toml::from_str(r#"sources = ["procfs", "sysfs"]"#).unwrap();
        assert_eq!(w.sources, vec![SourceKind::Procfs, SourceKind::Sysfs]);
        assert!(toml::from_str::<Wrap>(r#"sources = ["netlink"]"#).is_err());
    }
}
