// fix-client-profile - one-shot cleanup of the duplicated documents UI in
// ClientProfile.tsx: removes the duplicated handleFileUpload handler and the
// old inline documents tab, and wires in the shared DocumentsTab component.

pub mod document;
pub mod edit;
pub mod error;
pub mod migration;
pub mod report;

use anyhow::Result;
use tracing::info;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging.
///
/// `verbose` forces a debug-level filter; otherwise `RUST_LOG` is honored and
/// defaults to `info`. Logs go to stderr so stdout stays reserved for the
/// migration summary and diff output.
pub fn init_logging(verbose: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let default_filter = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    info!("fix-client-profile v{}", version());
    Ok(())
}
