// Capability interface over the OS counter APIs

use std::future::Future;

use crate::models::{CpuSample, DriveSnapshot, MemorySample, NetworkRates};

/// One sampling operation per dashboard section. The display loop is
/// generic over this so tests can substitute canned sources; production
/// uses [`crate::sysinfo_repo::SysinfoRepo`].
pub trait SampleSource {
    /// Aggregate processor busy percentage plus live process and thread
    /// counts.
    fn cpu_sample(&self) -> impl Future<Output = anyhow::Result<CpuSample>> + Send;

    /// Total and free physical memory in bytes.
    fn memory_sample(&self) -> impl Future<Output = anyhow::Result<MemorySample>> + Send;

    /// All mounted drives with nonzero capacity.
    fn drive_snapshots(&self) -> impl Future<Output = anyhow::Result<Vec<DriveSnapshot>>> + Send;

    /// Aggregate receive/send throughput since the previous call.
    fn network_rates(&self) -> impl Future<Output = anyhow::Result<NetworkRates>> + Send;
}
