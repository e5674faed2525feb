use super::{InterfaceSource, SourceKind};
use crate::error::Result;
use crate::sysfs::SysfsRoot;

pub const PROC_NET_DEV: &str = "proc/net/dev";
pub const PROC_NET_WIRELESS: &str = "proc/net/wireless";

/// Interface discovery from the `/proc/net/dev` and `/proc/net/wireless` tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcNet;

impl InterfaceSource for ProcNet {
    fn kind(&self) -> SourceKind {
        SourceKind::Procfs
    }

    fn list_interfaces(&self, sysfs: &SysfsRoot) -> Result<Vec<String>> {
        Ok(parse_interfaces(&sysfs.read_lines(PROC_NET_DEV)?))
    }

    fn list_wireless_interfaces(&self, sysfs: &SysfsRoot) -> Result<Vec<String>> {
        Ok(parse_interfaces(&sysfs.read_lines(PROC_NET_WIRELESS)?))
    }
}

/// Collect the interface name of every matching line, in file order.
/// Header and blank lines do not match and are skipped.
pub fn parse_interfaces(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| {
            let name = match_ifname(line);
            if name.is_none() {
                tracing::trace!("skipping line without interface name: {:?}", line);
            }
            name.map(String::from)
        })
        .collect()
}

/// Find the leftmost `[a-z]{2,}[0-9]*:` in `line` and return it without the colon.
pub fn match_ifname(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    let mut start = 0;
    while start < bytes.len() {
        if !bytes[start].is_ascii_lowercase() {
            start += 1;
            continue;
        }
        let letters_end = scan(bytes, start, u8::is_ascii_lowercase);
        let digits_end = scan(bytes, letters_end, u8::is_ascii_digit);
        if letters_end - start >= 2 && bytes.get(digits_end) == Some(&b':') {
            return Some(&line[start..digits_end]);
        }
        // Starting later in the same letter run ends at the same place.
        start = letters_end;
    }
    None
}

fn scan(bytes: &[u8], from: usize, pred: fn(&u8) -> bool) -> usize {
    bytes[from..]
        .iter()
        .position(|b| !pred(b))
        .map_or(bytes.len(), |n| from + n)
}
