//! Command line arguments.

use clap::Parser;

/// IPv4 subnet calculator
///
/// Prints the network, broadcast, usable range, masks, class and type of an
/// address for a given prefix length.
#[derive(Parser, Debug, Default)]
#[command(name = "subnet-calc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Addresses to calculate, written `a.b.c.d` or `a.b.c.d/n`
    pub targets: Vec<String>,

    /// Prefix for targets without `/n`: `24`, `/24`, `255.255.255.0 /24` or `255.255.255.0`
    #[arg(short, long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Print the mask selection table and exit
    #[arg(long)]
    pub list_masks: bool,

    /// Disable colored table output
    #[arg(long)]
    pub no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}
