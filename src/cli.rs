use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "nicinfo",
    about = "List network interfaces, resolve interface indices and convert radio power units",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Resolve sys/ and proc/ under this directory instead of /
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Use only this config file instead of the system and user ones
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log discovery decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show every interface with its index, wireless flag and PHY
    List,

    /// List network interface names
    Nics,

    /// List wireless interface names
    Wnics,

    /// List the PHY of every interface
    Phys,

    /// List the PHY of every wireless interface
    Wiphys,

    /// Show the PHY backing an interface
    Phy {
        /// Interface name (e.g., wlan0)
        ifname: String,
    },

    /// Resolve an interface name to its kernel index
    Index {
        /// Interface name (e.g., eth0)
        ifname: String,
    },

    /// Resolve a kernel index to its interface name
    Name {
        /// Interface index
        index: u32,
    },

    /// Convert milliwatts to dBm
    Dbm {
        /// Power in mW (must be positive)
        mw: f64,
    },

    /// Convert dBm to milliwatts
    Mw {
        /// Power in dBm
        #[arg(allow_negative_numbers = true)]
        dbm: f64,
    },

    /// Format a dBm value in the best fitting unit (pW, nW, uW, mW)
    Power {
        /// Power in dBm
        #[arg(allow_negative_numbers = true)]
        dbm: f64,
    },

    /// Map an absolute 8-bit power reading into signed dBm
    Abs {
        /// Raw reading
        #[arg(allow_negative_numbers = true)]
        value: i32,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (auto-detected if omitted)
        shell: Option<Shell>,
    },
}

/// Print shell completions to stdout.
pub fn print_completions(shell: Option<Shell>) {
    let shell = shell.or_else(Shell::from_env).unwrap_or_else(|| {
        eprintln!(
            "Could not detect shell. Specify one: nicinfo completions bash|zsh|fish|elvish|powershell"
        );
        std::process::exit(1);
    });
    clap_complete::generate(shell, &mut Cli::command(), "nicinfo", &mut std::io::stdout());
}
