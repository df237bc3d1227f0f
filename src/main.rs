use std::process;

use clap::{

    error::{ErrorKind},
    Parser,
};

use env_logger::{Env};

use pong::cli::{

    exit_code,
    usage,
    Cli,
};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let program = std::env::args().next().unwrap_or_else(|| "pong".to_string());
    let cli = match Cli::try_parse() {

        Ok(cli) => cli,

        Err(e) => match e.kind() {

            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                eprintln!("{}", usage(&program));
                process::exit(1);
            }
        },
    };

    match pong::run(&cli.remote_address) {

        Ok(delivery) => {
            log::debug!("delivery: {:?}", delivery);
            process::exit(0);
        }

        Err(e) => {
            eprintln!("{e}");
            process::exit(exit_code(&e));
        }
    }
}
