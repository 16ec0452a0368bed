use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use subnet_calculator::cli::Cli;
use subnet_calculator::config::{init_logging, Settings};
use subnet_calculator::run;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from_env();
    if let Err(e) = init_logging(&settings.log_config, cli.verbose) {
        eprintln!("Error initializing log4rs: {e}");
    }
    log::info!("#Start main()");

    match run(&cli, &settings) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("run() failed: {e:?}");
            eprintln!("{} {e}", "error:".red());
            ExitCode::FAILURE
        }
    }
}
