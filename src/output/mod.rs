use crate::discover::Interface;
use colored::Colorize;
use serde::Serialize;

const NAME_W: usize = 16;

/// Pretty-print any serializable value as JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Interface table with a box header, one row per interface.
pub fn print_interfaces(interfaces: &[Interface]) {
    if interfaces.is_empty() {
        println!("{}", "  No network interfaces found.".yellow());
        return;
    }

    let title = format!("Interfaces ({})", interfaces.len());
    let divider_w: usize = 52;
    let fill = divider_w.saturating_sub(2 + title.len());
    println!("── {} {}", title.bold(), "─".repeat(fill));
    println!(
        "  {}",
        format!(
            "{:<w$} {:>6}  {:<8}  {}",
            "NAME",
            "INDEX",
            "TYPE",
            "PHY",
            w = NAME_W
        )
        .dimmed()
    );

    for row in interfaces {
        println!("  {}", interface_row(row));
    }

    println!("{}", "─".repeat(divider_w));
}

fn interface_row(row: &Interface) -> String {
    let index = row
        .index
        .map(|i| i.to_string())
        .unwrap_or_else(|| "-".to_string());
    let kind = if row.wireless { "wireless" } else { "wired" };
    format!(
        "{:<w$} {:>6}  {:<8}  {}",
        row.name,
        index,
        kind,
        row.phy.as_deref().unwrap_or("-"),
        w = NAME_W
    )
}

/// One name per line, or a dimmed note when there are none.
pub fn print_names(names: &[String], what: &str) {
    if names.is_empty() {
        println!("{}", format!("  No {} found.", what).yellow());
        return;
    }
    for name in names {
        println!("{}", name);
    }
}

/// `ifname  phy` pairs; interfaces without a PHY show `-`.
pub fn print_phys(ifnames: &[String], phys: &[Option<String>]) {
    if ifnames.is_empty() {
        println!("{}", "  No interfaces found.".yellow());
        return;
    }
    for (ifname, phy) in ifnames.iter().zip(phys) {
        match phy {
            Some(phy) => println!("{:<w$} {}", ifname, phy.green(), w = NAME_W),
            None => println!("{:<w$} {}", ifname, "-".dimmed(), w = NAME_W),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interface_row() {
        let row = Interface {
            name: "wlan0".into(),
            index: Some(3),
            wireless: true,
            phy: Some("phy0".into()),
        };
        assert_eq!(
            interface_row(&row),
            "wlan0                 3  wireless  phy0"
        );

        let row = Interface {
            name: "eth0".into(),
            index: None,
            wireless: false,
            phy: None,
        };
        assert_eq!(interface_row(&row), "eth0                  -  wired     -");
    }

    #[test]
    fn test_interface_json_shape() {
        let row = Interface {
            name: "lo".into(),
            index: Some(1),
            wireless: false,
            phy: None,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["name"], "lo");
        assert_eq!(value["index"], 1);
        assert_eq!(value["wireless"], false);
        assert!(value["phy"].is_null());
    }
}
