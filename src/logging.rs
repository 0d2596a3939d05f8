//! Diagnostic logging for the CLI.
//!
//! Command results go to stdout through [`crate::output`]. Diagnostics
//! (relay failures, missing credentials, asset copies) go through `tracing`
//! to stderr. `RUST_LOG` overrides the default filter.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn default_directives(verbose: bool) -> &'static str {
    if verbose { "folio=debug,info" } else { "folio=info" }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
