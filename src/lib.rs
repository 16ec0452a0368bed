//! IPv4 subnet calculator.
//!
//! [`calculate`] turns an address and prefix length into a [`SubnetReport`];
//! [`run`] is the command line front end around it.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::SubnetError;
pub use models::SubnetReport;
pub use processing::calculate;

use cli::Cli;
use config::Settings;
use models::{parse_address, Ipv4};
use processing::{calculate_addr, calculate_cidr, parse_selection};
use std::error::Error;
use std::io::IsTerminal;

/// Run the calculator for the parsed command line and return the rendered output.
///
/// Targets without `/n` use `--prefix`, or the configured prefix when that is
/// not given. With no targets the configured address is used.
pub fn run(cli: &Cli, settings: &Settings) -> Result<String, Box<dyn Error>> {
    if cli.list_masks {
        return Ok(output::render_mask_options());
    }

    let selection = cli.prefix.as_deref().unwrap_or(&settings.prefix);
    let targets: Vec<&str> = if cli.targets.is_empty() {
        log::info!("No target given, using {}", settings.address);
        vec![settings.address.as_str()]
    } else {
        cli.targets.iter().map(String::as_str).collect()
    };

    let reports = targets
        .iter()
        .map(|target| report_for_target(target, selection))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("Calculated {} report(s) as {:?}", reports.len(), cli.format);

    let color = !cli.no_color && std::io::stdout().is_terminal();
    output::render(&reports, &cli.format, color)
}

/// Calculate one target, either `a.b.c.d/n` or a bare address using `selection`.
///
/// Surrounding whitespace is trimmed here; the model parsers are strict.
pub fn report_for_target(target: &str, selection: &str) -> Result<SubnetReport, SubnetError> {
    let target = target.trim();
    if target.contains('/') {
        let cidr = Ipv4::new(target)?;
        log::debug!("target={target} cidr={cidr}");
        calculate_cidr(&cidr)
    } else {
        let addr = parse_address(target)?;
        let prefix = parse_selection(selection)?;
        log::debug!("target={target} selection='{selection}' prefix=/{prefix}");
        calculate_addr(addr, prefix)
    }
}
