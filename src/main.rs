use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use nicinfo::cli::{Cli, Command};
use nicinfo::{Discovery, Error, output, units};

fn main() -> Result<()> {
    let cli = Cli::parse();
    nicinfo::logger::init(cli.verbose)?;

    let mut config = nicinfo::config::load(cli.config.as_ref());
    if let Some(root) = cli.root {
        config.discovery.root = root;
    }
    let json = cli.json || config.output.json;
    let discovery = config.discovery.build();
    tracing::debug!(
        "root {} sources {:?}",
        discovery.sysfs().root().display(),
        discovery.source_kinds()
    );

    match cli.command {
        Command::List => cmd_list(&discovery, json)?,
        Command::Nics => {
            let names = discovery.nic_names().map_err(explain)?;
            print_names(&names, "network interfaces", json)?;
        }
        Command::Wnics => {
            let names = discovery.wnic_names().map_err(explain)?;
            print_names(&names, "wireless interfaces", json)?;
        }
        Command::Phys => {
            let ifnames = discovery.nic_names().map_err(explain)?;
            let phys = discovery.phy_names_for(&ifnames).map_err(explain)?;
            print_phys(&ifnames, &phys, json)?;
        }
        Command::Wiphys => {
            let ifnames = discovery.wnic_names().map_err(explain)?;
            let phys = discovery.phy_names_for(&ifnames).map_err(explain)?;
            print_phys(&ifnames, &phys, json)?;
        }
        Command::Phy { ifname } => cmd_phy(&discovery, &ifname, json)?,
        Command::Index { ifname } => {
            let index = discovery.ifname_to_index(&ifname).map_err(explain)?;
            if json {
                output::print_json(&serde_json::json!({ "name": ifname, "index": index }))?;
            } else {
                println!("{}", index);
            }
        }
        Command::Name { index } => {
            let ifname = discovery.index_to_ifname(index).map_err(explain)?;
            if json {
                output::print_json(&serde_json::json!({ "name": ifname, "index": index }))?;
            } else {
                println!("{}", ifname);
            }
        }
        Command::Dbm { mw } => {
            if mw <= 0.0 {
                anyhow::bail!("power must be positive to convert to dBm, got {} mW", mw);
            }
            print_value("dbm", units::mw_to_dbm(mw), json)?;
        }
        Command::Mw { dbm } => print_value("mw", units::dbm_to_mw(dbm), json)?,
        Command::Power { dbm } => {
            let power = units::dbm_to_power(dbm);
            if json {
                output::print_json(&serde_json::json!({ "dbm": dbm, "power": power }))?;
            } else {
                println!("{}", power);
            }
        }
        Command::Abs { value } => {
            let dbm = units::abs_to_dbm(value);
            if json {
                output::print_json(&serde_json::json!({ "raw": value, "dbm": dbm }))?;
            } else {
                println!("{} dBm", dbm);
            }
        }
        Command::Completions { shell } => nicinfo::cli::print_completions(shell),
    }

    Ok(())
}

fn cmd_list(discovery: &Discovery, json: bool) -> Result<()> {
    let interfaces = discovery.interfaces().map_err(explain)?;
    if json {
        output::print_json(&interfaces)?;
    } else {
        output::print_interfaces(&interfaces);
    }
    Ok(())
}

fn cmd_phy(discovery: &Discovery, ifname: &str, json: bool) -> Result<()> {
    let phy = discovery.phy_name(ifname).map_err(explain)?;
    if json {
        output::print_json(&serde_json::json!({ "name": ifname, "phy": phy }))?;
        return Ok(());
    }
    match phy {
        Some(phy) => println!("{}", phy),
        None => println!("{} {} has no PHY", "Note:".yellow(), ifname),
    }
    Ok(())
}

fn print_names(names: &[String], what: &str, json: bool) -> Result<()> {
    if json {
        output::print_json(names)?;
    } else {
        output::print_names(names, what);
    }
    Ok(())
}

fn print_phys(ifnames: &[String], phys: &[Option<String>], json: bool) -> Result<()> {
    if json {
        let rows: Vec<_> = ifnames
            .iter()
            .zip(phys)
            .map(|(name, phy)| serde_json::json!({ "name": name, "phy": phy }))
            .collect();
        output::print_json(&rows)?;
    } else {
        output::print_phys(ifnames, phys);
    }
    Ok(())
}

fn print_value(key: &str, value: f64, json: bool) -> Result<()> {
    if json {
        output::print_json(&serde_json::json!({ key: value }))?;
    } else {
        println!("{:.4}", value);
    }
    Ok(())
}

/// Attach a privilege hint to permission errors when not running as root.
fn explain(err: Error) -> anyhow::Error {
    if err.is_permission_denied() && !nix::unistd::geteuid().is_root() {
        anyhow::Error::new(err).context("insufficient privileges, try again with sudo")
    } else {
        err.into()
    }
}
