//! Connectivity watcher
//!
//! A background thread probes a well-known endpoint on a fixed period and
//! reports over a channel. Only transitions are sent; steady state stays
//! quiet so the UI thread is not woken for nothing.

use std::net::{SocketAddr, TcpStream};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

use crate::constants::netwatch::{PROBE_IP, PROBE_PERIOD_SECS, PROBE_PORT, PROBE_TIMEOUT_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetStatus {
    Online,
    Offline,
}

/// Spawn the background probe thread
pub fn spawn_watcher(sender: Sender<NetStatus>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        info!("Connectivity watcher started");
        watch(sender);
    })
}

fn watch(sender: Sender<NetStatus>) {
    let mut last = None;
    loop {
        let status = probe();
        if transition(&mut last, status) && sender.send(status).is_err() {
            // Receiver dropped means the app is shutting down
            debug!("Status channel closed, stopping connectivity watcher");
            return;
        }
        thread::sleep(Duration::from_secs(PROBE_PERIOD_SECS));
    }
}

/// Record `current` into `last`, returning whether it differs from before
fn transition(last: &mut Option<NetStatus>, current: NetStatus) -> bool {
    if *last == Some(current) {
        return false;
    }
    *last = Some(current);
    true
}

fn probe() -> NetStatus {
    let addr = SocketAddr::from((PROBE_IP, PROBE_PORT));
    match TcpStream::connect_timeout(&addr, Duration::from_millis(PROBE_TIMEOUT_MS)) {
        Ok(_) => NetStatus::Online,
        Err(e) => {
            debug!(error = %e, "Connectivity probe failed");
            NetStatus::Offline
        }
    }
}
