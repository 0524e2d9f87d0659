// Shared test fakes: canned sample source and recording console

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use termstat::display::Console;
use termstat::models::{CpuSample, DriveSnapshot, MemorySample, NetworkRates};
use termstat::source::SampleSource;

/// Sample source returning canned values; a `None` field fails that
/// sampler. Counts ticks via `cpu_calls` so loop tests can assert cadence.
#[derive(Clone, Default)]
pub struct FakeSource {
    pub cpu: Option<CpuSample>,
    pub memory: Option<MemorySample>,
    pub drives: Option<Vec<DriveSnapshot>>,
    pub network: Option<NetworkRates>,
    pub cpu_calls: Arc<AtomicUsize>,
}

impl SampleSource for FakeSource {
    async fn cpu_sample(&self) -> anyhow::Result<CpuSample> {
        self.cpu_calls.fetch_add(1, Ordering::Relaxed);
        self.cpu.ok_or_else(|| anyhow!("cpu sampler down"))
    }

    async fn memory_sample(&self) -> anyhow::Result<MemorySample> {
        self.memory.ok_or_else(|| anyhow!("memory sampler down"))
    }

    async fn drive_snapshots(&self) -> anyhow::Result<Vec<DriveSnapshot>> {
        self.drives.clone().ok_or_else(|| anyhow!("drive sampler down"))
    }

    async fn network_rates(&self) -> anyhow::Result<NetworkRates> {
        self.network.ok_or_else(|| anyhow!("network sampler down"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOp {
    SetSize(u16, u16),
    MoveToOrigin,
    Clear,
    HideCursor,
    ShowCursor,
    Flush,
}

#[derive(Debug, Default)]
pub struct ConsoleState {
    pub size: (u16, u16),
    pub ops: Vec<ConsoleOp>,
    pub lines: Vec<String>,
}

/// Console fake recording every operation. State is behind an Arc so a
/// test can keep a handle after the loop consumes the console.
#[derive(Clone, Default)]
pub struct RecordingConsole {
    pub state: Arc<Mutex<ConsoleState>>,
}

impl RecordingConsole {
    pub fn with_size(cols: u16, rows: u16) -> Self {
        let console = Self::default();
        console.state.lock().unwrap().size = (cols, rows);
        console
    }

    pub fn ops(&self) -> Vec<ConsoleOp> {
        self.state.lock().unwrap().ops.clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.state.lock().unwrap().lines.clone()
    }
}

impl Console for RecordingConsole {
    fn size(&self) -> anyhow::Result<(u16, u16)> {
        Ok(self.state.lock().unwrap().size)
    }

    fn set_size(&mut self, cols: u16, rows: u16) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.size = (cols, rows);
        state.ops.push(ConsoleOp::SetSize(cols, rows));
        Ok(())
    }

    fn move_to_origin(&mut self) -> anyhow::Result<()> {
        self.state.lock().unwrap().ops.push(ConsoleOp::MoveToOrigin);
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.ops.push(ConsoleOp::Clear);
        state.lines.clear();
        Ok(())
    }

    fn hide_cursor(&mut self) -> anyhow::Result<()> {
        self.state.lock().unwrap().ops.push(ConsoleOp::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> anyhow::Result<()> {
        self.state.lock().unwrap().ops.push(ConsoleOp::ShowCursor);
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.state.lock().unwrap().lines.push(line.to_string());
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.state.lock().unwrap().ops.push(ConsoleOp::Flush);
        Ok(())
    }
}
