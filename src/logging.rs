//! Tracing initialization.

use std::{io::IsTerminal, sync::Once};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "PAPER_CHECK_LOG";

static INIT: Once = Once::new();

/// Installs a stderr `fmt` subscriber filtered by `PAPER_CHECK_LOG`
/// (e.g. `PAPER_CHECK_LOG=paper_check=debug`), falling back to
/// `paper_check=info`. Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("paper_check=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
