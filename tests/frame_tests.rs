// Frame composition tests: section order, headers, rendered bodies

use termstat::frame::{FrameInput, compose};
use termstat::models::{CpuSample, DriveSnapshot, MemorySample, NetworkCounters, NetworkRates};

const WIDTH: usize = 50;

fn full_input() -> FrameInput {
    let rates = NetworkRates {
        received_per_sec: 2048,
        sent_per_sec: 512,
    };
    let mut counters = NetworkCounters::new();
    counters.observe(rates);
    FrameInput {
        cpu: Some(CpuSample {
            usage_percent: 42.3,
            process_count: 120,
            thread_count: 800,
        }),
        memory: Some(MemorySample {
            total_bytes: 16_777_216 * 1024,
            free_bytes: 4_194_304 * 1024,
        }),
        drives: Some(vec![DriveSnapshot {
            mount: "/".into(),
            file_system: "ext4".into(),
            total_bytes: 100 * 1024u64.pow(3),
            free_bytes: 40 * 1024u64.pow(3),
        }]),
        network: Some((rates, counters)),
    }
}

fn na_bar() -> String {
    format!("[{}Not Available{}]", "-".repeat(18), "-".repeat(19))
}

#[test]
fn test_sections_in_fixed_order_with_boxed_headers() {
    let frame = compose(&full_input(), WIDTH);
    let joined = frame.join("\n");
    let headers = ["Processor", "Memory", "Drives", "Network"];
    let mut last = 0;
    for name in headers {
        let title = format!("##   {name}   ##");
        let pos = joined[last..]
            .find(&title)
            .unwrap_or_else(|| panic!("missing or out-of-order header {name}"));
        last += pos;
        let rule = "#".repeat(name.len() + 10);
        assert!(joined.contains(&rule));
    }
}

#[test]
fn test_processor_section_lines() {
    let frame = compose(&full_input(), WIDTH);
    // Header occupies the first three lines.
    assert_eq!(frame[1], "##   Processor   ##");
    let usage_bar = format!("[{}{}]", "|".repeat(21), "-".repeat(29));
    assert_eq!(frame[3], format!("{usage_bar}  Usage: 42.3%"));
    assert_eq!(frame[4], format!("{}  Processes: 120", na_bar()));
    assert_eq!(frame[5], format!("{}  Threads: 800", na_bar()));
    assert_eq!(frame[6], "");
}

#[test]
fn test_memory_section_lines() {
    let frame = compose(&full_input(), WIDTH);
    let total_line = frame
        .iter()
        .find(|l| l.contains("Total Memory"))
        .expect("total memory line");
    assert_eq!(*total_line, format!("{}  Total Memory: 16GB", na_bar()));

    let used_line = frame
        .iter()
        .find(|l| l.contains("In Use"))
        .expect("in use line");
    let used_bar = format!("[{}{}]", "|".repeat(37), "-".repeat(13));
    assert_eq!(*used_line, format!("{used_bar}  In Use: 12GB (75%)"));
}

#[test]
fn test_drive_section_line() {
    let frame = compose(&full_input(), WIDTH);
    let drive_line = frame
        .iter()
        .find(|l| l.contains("ext4"))
        .expect("drive line");
    let bar = format!("[{}{}]", "|".repeat(30), "-".repeat(20));
    assert_eq!(
        *drive_line,
        format!("{bar}  / (ext4): 40GB of 100GB free (60GB used)")
    );
}

#[test]
fn test_network_section_reports_rate_and_cumulative_total() {
    let frame = compose(&full_input(), WIDTH);
    // First tick: rates equal the fresh peaks, so both bars are full.
    let full_bar = format!("[{}]", "|".repeat(50));
    let download = frame
        .iter()
        .find(|l| l.contains("Download Speed"))
        .expect("download line");
    assert_eq!(
        *download,
        format!("{full_bar}  Download Speed: 2KB/s (2KB total)")
    );
    let upload = frame
        .iter()
        .find(|l| l.contains("Upload Speed"))
        .expect("upload line");
    assert_eq!(
        *upload,
        format!("{full_bar}  Upload Speed: 512B/s (512B total)")
    );
}

#[test]
fn test_failed_sections_render_sentinel_line() {
    let frame = compose(&FrameInput::default(), WIDTH);
    let sentinel = format!("{}  Sampling unavailable", na_bar());
    let count = frame.iter().filter(|l| **l == sentinel).count();
    assert_eq!(count, 4);
    // Headers still present so the layout stays stable.
    assert!(frame.contains(&"##   Network   ##".to_string()));
}

#[test]
fn test_each_section_followed_by_blank_line() {
    let frame = compose(&full_input(), WIDTH);
    assert_eq!(frame.iter().filter(|l| l.is_empty()).count(), 4);
    assert_eq!(frame.last().map(String::as_str), Some(""));
}
