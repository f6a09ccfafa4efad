use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Maps the number of `-v` flags to a level for this crate's diagnostics
#[must_use]
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Sends diagnostics to stderr so stdout carries only the wizard's own text.
///
/// `RUST_LOG` takes precedence over `-v` when it is set. Calling this more
/// than once is harmless.
pub fn setup_tracing(verbose: u8) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => EnvFilter::new(format!("reliverse={}", level_for_verbosity(verbose))),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .with_level(true)
        .compact()
        .try_init();
}
