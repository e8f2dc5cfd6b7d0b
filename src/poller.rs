//! File-presence polling and broadcast loop.
//!
//! One tick: check the watched file, push the status update, sleep the poll
//! interval, bump the counter, push the counter update. The status check
//! happens immediately before its broadcast so the presence signal is as
//! fresh as the interval allows, while the counter trails the sleep. Status
//! always precedes counter within a tick.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::protocol::Update;
use crate::ws::broadcast::broadcast_to_all;
use crate::ws::ConnectionRegistry;

/// Runs the poll/broadcast cycle until the process exits.
///
/// The tick counter is owned by this task: it starts at 0, is incremented by
/// exactly 1 per tick, and is never reset.
pub async fn run_status_loop(
    registry: ConnectionRegistry,
    watch_path: PathBuf,
    poll_interval: Duration,
) {
    tracing::info!(
        path = %watch_path.display(),
        interval_ms = poll_interval.as_millis() as u64,
        "status loop started"
    );

    let mut counting: u64 = 0;
    let mut last_present: Option<bool> = None;

    loop {
        let present = file_present(&watch_path).await;
        if last_present != Some(present) {
            tracing::info!(path = %watch_path.display(), present, "watched file presence changed");
            last_present = Some(present);
        }
        broadcast_to_all(&registry, &Update::status(present));

        tokio::time::sleep(poll_interval).await;

        counting += 1;
        broadcast_to_all(&registry, &Update::counter(counting));
    }
}

/// Check whether the watched file exists.
///
/// I/O errors (permission denied, unreadable path component) count as
/// absent; they are logged at debug level rather than surfaced.
async fn file_present(path: &Path) -> bool {
    match tokio::fs::try_exists(path).await {
        Ok(exists) => exists,
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "existence check failed, treating as absent"
            );
            false
        }
    }
}
