use std::io;
use std::process;

use clap::Parser;
use spacebench_cli::{Cli, Command};
use tracing::error;

fn main() {
    spacebench_cli::init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Generate(args) => spacebench_cli::generate(&args).map(|_| ()),
        Command::Validate(args) => match spacebench_cli::validate(&args) {
            Ok(None) => {
                println!("Configuration is valid.");
                Ok(())
            }
            Ok(Some(message)) => {
                eprintln!("{message}");
                process::exit(2);
            }
            Err(e) => Err(e),
        },
        Command::Options(args) => spacebench_cli::options(&args, &mut io::stdout().lock()),
    };

    if let Err(e) = result {
        error!("{:#}", e);
        process::exit(1);
    }
}
