use clap::Parser;
use cli::cli::args::Cli;

use cli::{cli::runner::run_cli, logger};
use indicatif::MultiProgress;
use std::{env, process};

fn main() {
    let args = Cli::parse();

    if args.verbose == 1 {
        env::set_var("RUST_LOG", "debug");
    } else if args.verbose > 1 {
        env::set_var("RUST_LOG", "trace");
    } else if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }

    let progress = MultiProgress::new();
    if let Err(e) = logger::init(&progress) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let exit_code = match run_cli(args, &progress) {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(e) => {
            log::error!("{}", e);
            1
        }
    };

    process::exit(exit_code);
}
