// Assembles one frame of text from the tick's samples

use crate::format::{format_bytes, format_bytes_detailed, format_decimal};
use crate::models::{CpuSample, DriveSnapshot, MemorySample, NetworkCounters, NetworkRates};
use crate::render::{NOT_AVAILABLE, progress_bar, section_header};

/// Ordered lines of one rendered frame; rebuilt every tick.
pub type Frame = Vec<String>;

/// Everything one tick sampled. A `None` section failed to sample this
/// tick and renders a sentinel line instead of its body.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub cpu: Option<CpuSample>,
    pub memory: Option<MemorySample>,
    pub drives: Option<Vec<DriveSnapshot>>,
    pub network: Option<(NetworkRates, NetworkCounters)>,
}

/// Composes the full frame in fixed section order: Processor, Memory,
/// Drives, Network. Each section gets a boxed header and a trailing blank
/// line.
pub fn compose(input: &FrameInput, width: usize) -> Frame {
    let mut lines = Vec::new();

    lines.extend(section_header("Processor"));
    match &input.cpu {
        Some(cpu) => cpu_section(&mut lines, cpu, width),
        None => failed_section(&mut lines, width),
    }
    lines.push(String::new());

    lines.extend(section_header("Memory"));
    match &input.memory {
        Some(memory) => memory_section(&mut lines, memory, width),
        None => failed_section(&mut lines, width),
    }
    lines.push(String::new());

    lines.extend(section_header("Drives"));
    match &input.drives {
        Some(drives) => drives_section(&mut lines, drives, width),
        None => failed_section(&mut lines, width),
    }
    lines.push(String::new());

    lines.extend(section_header("Network"));
    match &input.network {
        Some((rates, counters)) => network_section(&mut lines, *rates, counters, width),
        None => failed_section(&mut lines, width),
    }
    lines.push(String::new());

    lines
}

fn cpu_section(lines: &mut Frame, cpu: &CpuSample, width: usize) {
    lines.push(format!(
        "{}  Usage: {}%",
        progress_bar(cpu.usage_percent.round() as i32, width),
        format_decimal(cpu.usage_percent, 1),
    ));
    lines.push(format!(
        "{}  Processes: {}",
        progress_bar(NOT_AVAILABLE, width),
        cpu.process_count,
    ));
    lines.push(format!(
        "{}  Threads: {}",
        progress_bar(NOT_AVAILABLE, width),
        cpu.thread_count,
    ));
}

fn memory_section(lines: &mut Frame, memory: &MemorySample, width: usize) {
    lines.push(format!(
        "{}  Total Memory: {}",
        progress_bar(NOT_AVAILABLE, width),
        format_bytes_detailed(memory.total_bytes as f64),
    ));
    let pct = memory.used_percent();
    lines.push(format!(
        "{}  In Use: {} ({}%)",
        progress_bar(pct as i32, width),
        format_bytes_detailed(memory.used_bytes() as f64),
        format_decimal(pct, 2),
    ));
}

fn drives_section(lines: &mut Frame, drives: &[DriveSnapshot], width: usize) {
    for drive in drives {
        lines.push(format!(
            "{}  {} ({}): {} of {} free ({} used)",
            progress_bar(drive.used_percent(), width),
            drive.mount,
            drive.file_system,
            format_bytes(drive.free_bytes as f64),
            format_bytes(drive.total_bytes as f64),
            format_bytes(drive.used_bytes() as f64),
        ));
    }
}

fn network_section(lines: &mut Frame, rates: NetworkRates, counters: &NetworkCounters, width: usize) {
    lines.push(format!(
        "{}  Download Speed: {}/s ({} total)",
        progress_bar(counters.received_percent_of_peak(rates), width),
        format_bytes(rates.received_per_sec as f64),
        format_bytes(counters.total_received as f64),
    ));
    lines.push(format!(
        "{}  Upload Speed: {}/s ({} total)",
        progress_bar(counters.sent_percent_of_peak(rates), width),
        format_bytes(rates.sent_per_sec as f64),
        format_bytes(counters.total_sent as f64),
    ));
}

fn failed_section(lines: &mut Frame, width: usize) {
    lines.push(format!(
        "{}  Sampling unavailable",
        progress_bar(NOT_AVAILABLE, width),
    ));
}
