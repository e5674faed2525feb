//! Network interface inventory for Linux.
//!
//! Lists wired and wireless interfaces from sysfs (falling back to procfs),
//! maps interface names to kernel indices and back, resolves the PHY behind
//! a wireless interface, and converts radio power between mW and dBm.
//!
//! Nothing here talks to the kernel wireless stack (WEXT or nl80211); only
//! the pseudo-filesystems are read.

pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod index;
pub mod logger;
pub mod output;
pub mod phy;
pub mod source;
pub mod sysfs;
pub mod units;

pub use discover::{
    Discovery, Interface, get_nic_names, get_phy_names, get_wiphy_names, get_wnic_names,
};
pub use error::{Error, Result};
pub use index::{if_indextoname, if_nametoindex};
pub use phy::get_phy_name;
pub use sysfs::SysfsRoot;
pub use units::{abs_to_dbm, dbm_to_mw, dbm_to_power, hex_to_int, mw_to_dbm};
