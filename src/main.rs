use std::process::ExitCode;

use clap::Parser;
use cocomo_scan::{
    bootstrap,
    cli::{self, Args},
};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.log_directive());

    if let Err(err) = bootstrap::check_root(&args.source_dir) {
        eprintln!("{err}");
        eprintln!("{}", cli::usage());
        return ExitCode::FAILURE;
    }

    match bootstrap::run(&args) {
        Ok(_) => {
            println!("Done!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}
