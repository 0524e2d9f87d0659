// Per-tick samples and process-lifetime network counters

/// One tick of processor data. Process and thread counts have no natural
/// percentage and render with the sentinel bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpuSample {
    pub usage_percent: f64,
    pub process_count: usize,
    pub thread_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySample {
    pub total_bytes: u64,
    pub free_bytes: u64,
}

impl MemorySample {
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.free_bytes)
    }

    /// Used fraction as a percentage, rounded to two decimals.
    pub fn used_percent(&self) -> f64 {
        if self.total_bytes == 0 {
            return 0.0;
        }
        let pct = (self.used_bytes() as f64 / self.total_bytes as f64) * 100.0;
        (pct * 100.0).round() / 100.0
    }
}

/// Capacity of one mounted drive. The sampler skips drives reporting zero
/// total capacity, so `used_percent` never divides by zero in practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveSnapshot {
    pub mount: String,
    pub file_system: String,
    pub total_bytes: u64,
    pub free_bytes: u64,
}

impl DriveSnapshot {
    pub fn used_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.free_bytes)
    }

    /// Used space as a rounded integer percentage. The numerator is
    /// multiplied up before dividing to keep integer precision.
    pub fn used_percent(&self) -> i32 {
        if self.total_bytes == 0 {
            return 0;
        }
        let used = self.used_bytes() as u128 * 100;
        let total = self.total_bytes as u128;
        ((used + total / 2) / total) as i32
    }
}

/// Aggregate receive/send throughput for the current tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkRates {
    pub received_per_sec: u64,
    pub sent_per_sec: u64,
}

/// Process-lifetime network state: running peak rates and cumulative
/// totals. Peaks are floored at 1 so percent-of-peak never divides by
/// zero; both peaks and totals only ever grow.
///
/// Totals accumulate the per-tick rate directly. At the fixed one-second
/// cadence that equals bytes transferred per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkCounters {
    pub peak_received: u64,
    pub peak_sent: u64,
    pub total_received: u64,
    pub total_sent: u64,
}

impl Default for NetworkCounters {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkCounters {
    pub fn new() -> Self {
        Self {
            peak_received: 1,
            peak_sent: 1,
            total_received: 0,
            total_sent: 0,
        }
    }

    /// Folds one tick of rates into the peaks and totals.
    pub fn observe(&mut self, rates: NetworkRates) {
        self.peak_received = self.peak_received.max(rates.received_per_sec);
        self.peak_sent = self.peak_sent.max(rates.sent_per_sec);
        self.total_received = self.total_received.saturating_add(rates.received_per_sec);
        self.total_sent = self.total_sent.saturating_add(rates.sent_per_sec);
    }

    /// Current receive rate as a percentage of the peak, rounded.
    /// Never above 100 once `observe` has folded the same rates in.
    pub fn received_percent_of_peak(&self, rates: NetworkRates) -> i32 {
        percent_of_peak(rates.received_per_sec, self.peak_received)
    }

    /// Current send rate as a percentage of the peak, rounded.
    pub fn sent_percent_of_peak(&self, rates: NetworkRates) -> i32 {
        percent_of_peak(rates.sent_per_sec, self.peak_sent)
    }
}

fn percent_of_peak(rate: u64, peak: u64) -> i32 {
    let peak = peak.max(1) as u128;
    let scaled = rate as u128 * 100;
    ((scaled + peak / 2) / peak) as i32
}
