use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use gol::cli::Cli;
use log::debug;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.into_config().and_then(|config| config.run()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("{err:?}");
            eprintln!("gol: {err}");
            ExitCode::FAILURE
        }
    }
}
