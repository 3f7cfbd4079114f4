//! Background telemetry probes for the desktop backend.
//!
//! Host queries (sysfs, procfs, sockets) run on a dedicated OS thread with
//! its own current-thread Tokio runtime. Snapshots are sent to the UI thread
//! over a std channel and drained once per frame, so the frame loop never
//! waits on the host.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender as StdSender;
use std::thread;
use std::time::Duration;

use tokio::net::UdpSocket;

const POWER_SUPPLY_DIR: &str = "/sys/class/power_supply";
const WIRELESS_PROC: &str = "/proc/net/wireless";
const RESOLV_CONF: &str = "/etc/resolv.conf";

/// Link quality reported by most drivers as "full signal".
const MAX_LINK_QUALITY: f32 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryStatus {
    pub level: u8,
    pub charging: bool,
}

/// Latest host telemetry. `None` / empty means the host did not report it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TelemetrySnapshot {
    pub battery: Option<BatteryStatus>,
    pub wireless_level: Option<u8>,
    pub ip_address: Option<String>,
    pub dns_servers: Vec<String>,
}

/// Start the probe thread. It exits once the receiver is dropped.
pub fn spawn_probe_thread(tx: StdSender<TelemetrySnapshot>, interval: Duration) {
    let spawned = thread::Builder::new()
        .name("telemetry".to_owned())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    log::error!("desktop: unable to start telemetry runtime: {e}");
                    return;
                }
            };
            rt.block_on(run_probe_loop(tx, interval));
        });

    if let Err(e) = spawned {
        log::error!("desktop: unable to spawn telemetry thread: {e}");
    }
}

/// Probe every `interval` and forward snapshots until the channel closes.
pub async fn run_probe_loop(tx: StdSender<TelemetrySnapshot>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(100)));
    loop {
        ticker.tick().await;
        let snapshot = probe().await;
        if tx.send(snapshot).is_err() {
            log::debug!("desktop: telemetry receiver dropped, stopping probes");
            return;
        }
    }
}

async fn probe() -> TelemetrySnapshot {
    let battery = read_battery(Path::new(POWER_SUPPLY_DIR)).await;

    let wireless_level = tokio::fs::read_to_string(WIRELESS_PROC)
        .await
        .ok()
        .and_then(|text| parse_wireless_level(&text));

    let ip_address = match local_ip_address().await {
        Ok(ip) => Some(ip),
        Err(e) => {
            log::debug!("desktop: no route to determine local address: {e}");
            None
        }
    };

    let dns_servers = tokio::fs::read_to_string(RESOLV_CONF)
        .await
        .map(|text| parse_resolv_conf(&text))
        .unwrap_or_default();

    TelemetrySnapshot {
        battery,
        wireless_level,
        ip_address,
        dns_servers,
    }
}

async fn read_battery(dir: &Path) -> Option<BatteryStatus> {
    let mut entries = tokio::fs::read_dir(dir).await.ok()?;
    while let Ok(Some(entry)) = entries.next_entry().await {
        if !entry.file_name().to_string_lossy().starts_with("BAT") {
            continue;
        }
        let base: PathBuf = entry.path();
        let Ok(capacity) = tokio::fs::read_to_string(base.join("capacity")).await else {
            continue;
        };
        let status = tokio::fs::read_to_string(base.join("status"))
            .await
            .unwrap_or_default();
        if let Some(battery) = parse_battery(&capacity, &status) {
            return Some(battery);
        }
    }
    None
}

/// Parse sysfs `capacity` and `status` contents.
pub fn parse_battery(capacity: &str, status: &str) -> Option<BatteryStatus> {
    let level = capacity.trim().parse::<u32>().ok()?.min(100) as u8;
    Some(BatteryStatus {
        level,
        charging: status.trim() == "Charging",
    })
}

/// Signal bars (0..=3) of the first interface listed in `/proc/net/wireless`.
pub fn parse_wireless_level(text: &str) -> Option<u8> {
    let line = text.lines().skip(2).find(|l| !l.trim().is_empty())?;
    let link = line.split_whitespace().nth(2)?;
    let quality: f32 = link.trim_end_matches('.').parse().ok()?;
    let bars = (quality / MAX_LINK_QUALITY * 3.0).ceil().clamp(0.0, 3.0);
    Some(bars as u8)
}

/// `nameserver` entries of a resolv.conf, in file order.
pub fn parse_resolv_conf(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let mut words = line.split_whitespace();
            match (words.next(), words.next()) {
                (Some("nameserver"), Some(addr)) => Some(addr.to_owned()),
                _ => None,
            }
        })
        .collect()
}

/// Address of the interface holding the default route. Connecting a UDP
/// socket only selects a route; nothing is sent.
async fn local_ip_address() -> std::io::Result<String> {
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.connect("192.0.2.1:9").await?;
    let addr: SocketAddr = socket.local_addr()?;
    Ok(addr.ip().to_string())
}
