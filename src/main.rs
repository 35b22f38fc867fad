//! notedrill binary entry point.
//!
//! Reads the configuration from the environment, starts tracing when
//! `NOTEDRILL_LOG` is set, and hands over to the terminal runtime. Any error
//! that reaches this point is printed as `error: <message>` after the terminal
//! has been restored, and the process exits with status 1.

#![allow(clippy::multiple_crate_versions)]

use notedrill::{observability, runtime, Config};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "exiting with error");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> notedrill::Result<()> {
    let config = Config::from_env()?;
    observability::init_tracing(&config);

    tracing::debug!(root = %config.root.display(), editor = %config.editor, "starting notedrill");
    runtime::run(&config)
}
