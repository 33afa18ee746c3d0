mod cli;
mod command_handlers;
mod error;
mod invoker;
mod locator;
mod platform;

use clap::Parser;
use log::debug;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::command_handlers::install::{run_install, InstallArgs};
use crate::invoker::{Launcher, ShellLauncher};
use crate::locator::SearchRoots;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let code = run(&cli, &SearchRoots::from_env(), &ShellLauncher::new());
    exit_code(code)
}

/// Run one install and return the code this process should exit with.
fn run(cli: &Cli, roots: &SearchRoots, launcher: &dyn Launcher) -> i32 {
    if !cli.extra.is_empty() {
        debug!("ignoring extra arguments {:?}", cli.extra);
    }
    let args = InstallArgs {
        template: &cli.template,
        target: &cli.target,
        roots,
    };
    match run_install(args, launcher) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            i32::from(e.exit_code())
        }
    }
}

// Codes outside 0..=255 only occur on Windows; hand those to the OS untouched.
fn exit_code(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) => ExitCode::from(code),
        Err(_) => std::process::exit(code),
    }
}
