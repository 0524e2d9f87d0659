use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub monitoring: MonitoringConfig,
    pub terminal: TerminalConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub refresh_interval_ms: u64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            refresh_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Minimum terminal size; the display loop grows the window to this
    /// but never shrinks it.
    pub min_cols: u16,
    pub min_rows: u16,
    pub bar_width: usize,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            min_cols: 128,
            min_rows: 36,
            bar_width: 50,
        }
    }
}

impl MonitoringConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

impl AppConfig {
    /// Reads `config.toml` (path overridable via `CONFIG_FILE`). The
    /// binary takes no arguments, so a missing file means defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::load_from_str(&s),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.monitoring.refresh_interval_ms > 0,
            "monitoring.refresh_interval_ms must be > 0, got {}",
            self.monitoring.refresh_interval_ms
        );
        anyhow::ensure!(
            self.terminal.min_cols > 0 && self.terminal.min_rows > 0,
            "terminal.min_cols and terminal.min_rows must be > 0, got {}x{}",
            self.terminal.min_cols,
            self.terminal.min_rows
        );
        anyhow::ensure!(
            self.terminal.bar_width >= 13,
            "terminal.bar_width must fit the \"Not Available\" placeholder (>= 13), got {}",
            self.terminal.bar_width
        );
        Ok(())
    }
}
