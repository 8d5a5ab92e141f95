use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::signal;
use tokio::sync::Notify;

/// Process-wide shutdown flag shared by the HTTP host and the terminal UI.
///
/// Cheap to clone; every clone observes the same flag.
#[derive(Clone, Default)]
pub struct ShutdownManager {
    shutdown: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal shutdown. Only the first call logs and wakes waiters.
    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Graceful shutdown initiated");
            self.notify.notify_waiters();
        }
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Wait until [`signal`](Self::signal) is called.
    pub async fn wait(&self) {
        // Register with Notify before checking the flag, otherwise a signal
        // between the check and the await would be lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_shutting_down() {
            return;
        }
        notified.await;
    }

    /// Wait for Ctrl+C, SIGTERM or an explicit [`signal`](Self::signal).
    pub async fn wait_for_shutdown(&self) -> std::io::Result<()> {
        #[cfg(unix)]
        {
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
            tokio::select! {
                _ = signal::ctrl_c() => {},
                _ = sigterm.recv() => {},
                _ = self.wait() => {},
            }
        }

        #[cfg(not(unix))]
        {
            tokio::select! {
                _ = signal::ctrl_c() => {},
                _ = self.wait() => {},
            }
        }

        self.signal();
        Ok(())
    }

    /// Turn OS signals into a shutdown for as long as the process runs.
    ///
    /// Spawn this in every mode: without it SIGTERM takes the default
    /// action and the terminal is never restored.
    pub async fn listen_for_signals(self) {
        if let Err(err) = self.wait_for_shutdown().await {
            tracing::error!("Failed to listen for signals: {}", err);
        }
    }
}
