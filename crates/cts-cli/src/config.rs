//! Configuration loading and management.

use std::path::{Path, PathBuf};

use chrono::{NaiveTime, TimeDelta};
use cts_core::ScheduleParams;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
///
/// Lunch and networking lengths are fixed by the engine; only the day
/// start and the session envelope are tunable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// When the first block of every track starts.
    pub day_start: NaiveTime,

    /// Exact duration every morning session must reach, in minutes.
    pub morning_session_minutes: i64,

    /// Intended afternoon-session ceiling, in minutes.
    pub afternoon_cap_minutes: i64,
}

impl Default for Config {
    fn default() -> Self {
        let defaults = ScheduleParams::default();
        Self {
            day_start: defaults.day_start,
            morning_session_minutes: defaults.morning_goal.num_minutes(),
            afternoon_cap_minutes: defaults.afternoon_cap.num_minutes(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (CTS_*)
        figment = figment.merge(Env::prefixed("CTS_"));

        figment.extract()
    }

    /// The engine parameters this configuration describes.
    ///
    /// Fails on non-positive or absurdly large minute knobs, which
    /// config files and `CTS_*` env vars can otherwise smuggle in.
    pub fn params(&self) -> anyhow::Result<ScheduleParams> {
        Ok(ScheduleParams {
            day_start: self.day_start,
            morning_goal: positive_minutes(
                "morning_session_minutes",
                self.morning_session_minutes,
            )?,
            afternoon_cap: positive_minutes("afternoon_cap_minutes", self.afternoon_cap_minutes)?,
        })
    }
}

fn positive_minutes(knob: &str, minutes: i64) -> anyhow::Result<TimeDelta> {
    if minutes <= 0 {
        anyhow::bail!("{knob} must be positive, got {minutes}");
    }
    TimeDelta::try_minutes(minutes).ok_or_else(|| anyhow::anyhow!("{knob} is out of range: {minutes}"))
}

/// Returns the platform-specific config directory for cts.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("cts"))
}
