// Display loop: ticks the samplers and repaints the frame in place

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType, SetSize};
use crossterm::{execute, queue};
use tokio::time::{MissedTickBehavior, interval};

use crate::frame::{FrameInput, compose};
use crate::models::NetworkCounters;
use crate::source::SampleSource;

/// Terminal operations the loop needs, kept behind a trait so tests can
/// drive a cycle against a recording fake.
pub trait Console: Send {
    fn size(&self) -> anyhow::Result<(u16, u16)>;
    fn set_size(&mut self, cols: u16, rows: u16) -> anyhow::Result<()>;
    fn move_to_origin(&mut self) -> anyhow::Result<()>;
    fn clear(&mut self) -> anyhow::Result<()>;
    fn hide_cursor(&mut self) -> anyhow::Result<()>;
    fn show_cursor(&mut self) -> anyhow::Result<()>;
    fn write_line(&mut self, line: &str) -> anyhow::Result<()>;
    fn flush(&mut self) -> anyhow::Result<()>;
}

/// Real terminal on stdout. Drawing commands are queued and flushed once
/// per frame so a repaint is a single write.
pub struct CrosstermConsole {
    out: io::Stdout,
}

impl Default for CrosstermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermConsole {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Console for CrosstermConsole {
    fn size(&self) -> anyhow::Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn set_size(&mut self, cols: u16, rows: u16) -> anyhow::Result<()> {
        queue!(self.out, SetSize(cols, rows))?;
        Ok(())
    }

    fn move_to_origin(&mut self) -> anyhow::Result<()> {
        queue!(self.out, MoveTo(0, 0))?;
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> anyhow::Result<()> {
        execute!(self.out, Hide)?;
        Ok(())
    }

    fn show_cursor(&mut self) -> anyhow::Result<()> {
        execute!(self.out, Show)?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        queue!(self.out, Print(line), Print('\n'))?;
        Ok(())
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Loop timing and layout.
pub struct DisplayConfig {
    pub refresh_interval: Duration,
    pub min_cols: u16,
    pub min_rows: u16,
    pub bar_width: usize,
}

/// Drives the tick cadence and owns all mutable sampler state. Terminal
/// failures abort the loop; sampler failures log WARN and render their
/// section as unavailable.
pub struct DisplayLoop<S, C> {
    source: S,
    console: C,
    config: DisplayConfig,
    counters: NetworkCounters,
    last_rows: Option<u16>,
}

impl<S: SampleSource, C: Console> DisplayLoop<S, C> {
    pub fn new(source: S, console: C, config: DisplayConfig) -> Self {
        Self {
            source,
            console,
            config,
            counters: NetworkCounters::new(),
            last_rows: None,
        }
    }

    /// Runs until the shutdown channel fires, then restores the cursor.
    pub async fn run(mut self, mut shutdown_rx: tokio::sync::oneshot::Receiver<()>) -> anyhow::Result<()> {
        // Best-effort; some terminals cannot hide the cursor.
        if let Err(e) = self.console.hide_cursor() {
            tracing::debug!(error = %e, "hide cursor failed");
        }

        let mut tick = interval(self.config.refresh_interval);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    self.run_cycle().await?;
                }
                _ = &mut shutdown_rx => {
                    tracing::debug!("Display loop shutting down");
                    break;
                }
            }
        }

        if let Err(e) = self.console.show_cursor() {
            tracing::debug!(error = %e, "show cursor failed");
        }
        Ok(())
    }

    /// One sample-compose-paint cycle.
    pub async fn run_cycle(&mut self) -> anyhow::Result<()> {
        let (cols, rows) = self.ensure_min_size()?;

        // A changed row count means the buffer scrolled or resized, so
        // repaint from a cleared screen. Otherwise overwrite in place from
        // the origin; clearing every tick would flicker.
        if self.last_rows != Some(rows) {
            self.last_rows = Some(rows);
            self.console.clear()?;
        } else {
            self.console.move_to_origin()?;
        }

        let input = self.sample().await;
        let frame = compose(&input, self.config.bar_width);
        for line in &frame {
            // Pad to the full width so leftovers from longer lines get wiped.
            let padded = format!("{line:<width$}", width = cols as usize);
            self.console.write_line(&padded)?;
        }
        self.console.flush()?;
        Ok(())
    }

    async fn sample(&mut self) -> FrameInput {
        let cpu = match self.source.cpu_sample().await {
            Ok(sample) => Some(sample),
            Err(e) => {
                tracing::warn!(error = %e, operation = "cpu_sample", "CPU sample failed");
                None
            }
        };
        let memory = match self.source.memory_sample().await {
            Ok(sample) => Some(sample),
            Err(e) => {
                tracing::warn!(error = %e, operation = "memory_sample", "memory sample failed");
                None
            }
        };
        let drives = match self.source.drive_snapshots().await {
            Ok(drives) => Some(drives),
            Err(e) => {
                tracing::warn!(error = %e, operation = "drive_snapshots", "drive snapshots failed");
                None
            }
        };
        let network = match self.source.network_rates().await {
            Ok(rates) => {
                self.counters.observe(rates);
                Some((rates, self.counters))
            }
            Err(e) => {
                tracing::warn!(error = %e, operation = "network_rates", "network rates failed");
                None
            }
        };
        FrameInput {
            cpu,
            memory,
            drives,
            network,
        }
    }

    /// Grows the terminal to the configured minimum, never shrinks it.
    /// Returns the dimensions the frame should be laid out for.
    fn ensure_min_size(&mut self) -> anyhow::Result<(u16, u16)> {
        let (cols, rows) = self.console.size()?;
        let want = (cols.max(self.config.min_cols), rows.max(self.config.min_rows));
        if want != (cols, rows) {
            // Not every terminal honors a resize request.
            if let Err(e) = self.console.set_size(want.0, want.1) {
                tracing::debug!(error = %e, "terminal resize failed");
            }
        }
        Ok(want)
    }
}
