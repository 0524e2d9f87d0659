// System counters via sysinfo

use std::sync::Arc;
use std::time::Instant;

use sysinfo::{Disks, Networks, ProcessesToUpdate, System};
use tracing::instrument;

use crate::models::{CpuSample, DriveSnapshot, MemorySample, NetworkRates};
use crate::source::SampleSource;

/// Production [`SampleSource`]. Counter handles are acquired once at
/// startup and held for the process lifetime; refreshes run on the
/// blocking pool.
pub struct SysinfoRepo {
    sys: Arc<std::sync::Mutex<System>>,
    disks: Arc<std::sync::Mutex<Disks>>,
    networks: Arc<std::sync::Mutex<Networks>>,
    last_network_refresh: Arc<std::sync::Mutex<Instant>>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        let disks = Disks::new_with_refreshed_list();
        let networks = Networks::new_with_refreshed_list();
        Self {
            sys: Arc::new(std::sync::Mutex::new(sys)),
            disks: Arc::new(std::sync::Mutex::new(disks)),
            networks: Arc::new(std::sync::Mutex::new(networks)),
            last_network_refresh: Arc::new(std::sync::Mutex::new(Instant::now())),
        }
    }
}

impl SampleSource for SysinfoRepo {
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu_sample"))]
    async fn cpu_sample(&self) -> anyhow::Result<CpuSample> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_cpu_all();
            sys.refresh_processes(ProcessesToUpdate::All, true);

            let usage = (sys.global_cpu_usage() as f64).clamp(0.0, 100.0);
            let process_count = sys.processes().len();
            let thread_count = sys
                .processes()
                .values()
                .map(|p| 1 + p.tasks().map(|t| t.len()).unwrap_or(0))
                .sum::<usize>();

            Ok(CpuSample {
                usage_percent: usage,
                process_count,
                thread_count,
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "memory_sample"))]
    async fn memory_sample(&self) -> anyhow::Result<MemorySample> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_memory();
            Ok(MemorySample {
                total_bytes: sys.total_memory(),
                free_bytes: sys.free_memory(),
            })
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "drive_snapshots"))]
    async fn drive_snapshots(&self) -> anyhow::Result<Vec<DriveSnapshot>> {
        let disks = self.disks.clone();
        tokio::task::spawn_blocking(move || {
            let mut disks_guard = disks
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo disks lock poisoned: {}", e))?;
            disks_guard.refresh(false);
            let drives = disks_guard
                .list()
                .iter()
                // A zero-capacity pseudo-drive has no meaningful usage.
                .filter(|d| d.total_space() > 0)
                .map(|d| DriveSnapshot {
                    mount: d.mount_point().to_string_lossy().into_owned(),
                    file_system: d.file_system().to_string_lossy().into_owned(),
                    total_bytes: d.total_space(),
                    free_bytes: d.available_space(),
                })
                .collect();
            Ok(drives)
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "network_rates"))]
    async fn network_rates(&self) -> anyhow::Result<NetworkRates> {
        let networks = self.networks.clone();
        let last_refresh = self.last_network_refresh.clone();
        tokio::task::spawn_blocking(move || {
            let mut networks_guard = networks
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo networks lock poisoned: {}", e))?;
            let mut last = last_refresh
                .lock()
                .map_err(|e| anyhow::anyhow!("network clock lock poisoned: {}", e))?;

            let now = Instant::now();
            let dt_secs = now.duration_since(*last).as_secs_f64();
            networks_guard.refresh(true);
            *last = now;

            // received()/transmitted() report bytes since the previous
            // refresh; dividing by elapsed time yields bytes per second,
            // summed across all interfaces.
            let mut received = 0u64;
            let mut sent = 0u64;
            for (_name, data) in networks_guard.list() {
                received += data.received();
                sent += data.transmitted();
            }

            if dt_secs > 0.0 {
                Ok(NetworkRates {
                    received_per_sec: (received as f64 / dt_secs).round() as u64,
                    sent_per_sec: (sent as f64 / dt_secs).round() as u64,
                })
            } else {
                Ok(NetworkRates::default())
            }
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }
}
