//! Termination signal handling
//!
//! SIGINT and SIGTERM end the process at once with a notice and exit code 0,
//! whatever the session loop is doing at that moment.

use std::io::{self, Write};
use tracing::{info, warn};

/// Printed when a termination signal arrives
pub const SHUTDOWN_NOTICE: &str = "\nReceived termination signal. Shutting down...\n";

/// Registered signal handlers
///
/// Handlers are installed by [`Listener::install`], so a signal that arrives
/// before the listener task first runs is not lost.
pub struct Listener {
    #[cfg(unix)]
    interrupt: tokio::signal::unix::Signal,
    #[cfg(unix)]
    terminate: tokio::signal::unix::Signal,
}

impl Listener {
    /// Register for SIGINT and SIGTERM; must run inside the tokio runtime
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    /// Register for Ctrl-C
    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        Ok(Self {})
    }

    /// Wait for the first termination signal
    #[cfg(unix)]
    pub async fn recv(&mut self) -> io::Result<()> {
        tokio::select! {
            _ = self.interrupt.recv() => info!("received SIGINT"),
            _ = self.terminate.recv() => info!("received SIGTERM"),
        }
        Ok(())
    }

    /// Wait for Ctrl-C
    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> io::Result<()> {
        tokio::signal::ctrl_c().await
    }

    /// Wait for a signal, print the notice and exit the process with code 0
    pub async fn shutdown_on_signal(mut self) {
        match self.recv().await {
            Ok(()) => {
                let mut stdout = io::stdout();
                // Nothing useful can be done if the terminal is gone.
                let _ = stdout.write_all(SHUTDOWN_NOTICE.as_bytes());
                let _ = stdout.flush();
                std::process::exit(0);
            }
            Err(e) => warn!(error = %e, "cannot listen for termination signals"),
        }
    }
}
