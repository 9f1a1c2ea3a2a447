//! Settings loaded from the environment.
//!
//! Nothing is persisted; every run starts from defaults overridden by:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `GEM_LEAGUE_FPS` | target frames per second (1..=240) | 60 |
//! | `GEM_LEAGUE_SPAWN_SECS` | seconds between board rises (> 0) | 5.0 |
//! | `GEM_LEAGUE_SEED` | fixed RNG seed | derived from the clock |
//! | `GEM_LEAGUE_LOG_PATH` | log file | logging disabled |

use std::time::Duration;

use log::warn;

use crate::core::BoardConfig;
use crate::engine::{SessionConfig, SettingRow};
use crate::types::{DEFAULT_TARGET_FPS, SPAWN_INTERVAL_SECS};

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub target_fps: u32,
    pub spawn_interval_secs: f32,
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    /// Values that were present but rejected, reported once logging is up
    rejected: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            seed: None,
            log_path: None,
            rejected: Vec::new(),
        }
    }
}

impl Settings {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = get("GEM_LEAGUE_FPS") {
            match raw.parse::<u32>() {
                Ok(fps) => settings.target_fps = fps.clamp(MIN_FPS, MAX_FPS),
                Err(_) => settings.rejected.push(format!("GEM_LEAGUE_FPS={}", raw)),
            }
        }

        if let Some(raw) = get("GEM_LEAGUE_SPAWN_SECS") {
            match raw.parse::<f32>() {
                Ok(secs) if secs.is_finite() && secs > 0.0 => settings.spawn_interval_secs = secs,
                _ => settings.rejected.push(format!("GEM_LEAGUE_SPAWN_SECS={}", raw)),
            }
        }

        if let Some(raw) = get("GEM_LEAGUE_SEED") {
            match raw.parse::<u32>() {
                Ok(seed) => settings.seed = Some(seed),
                Err(_) => settings.rejected.push(format!("GEM_LEAGUE_SEED={}", raw)),
            }
        }

        settings.log_path = get("GEM_LEAGUE_LOG_PATH");
        settings
    }

    /// Entries that were ignored in favour of defaults
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    pub fn log_rejected(&self) {
        for entry in &self.rejected {
            warn!("ignoring invalid setting {}", entry);
        }
    }

    /// Time budget of one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(MIN_FPS) as f64)
    }

    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::default().with_spawn_interval(self.spawn_interval_secs)
    }

    /// Rows for the settings screen
    pub fn rows(&self) -> Vec<SettingRow> {
        vec![
            SettingRow::new("Target FPS", self.target_fps),
            SettingRow::new("Rise every", format!("{:.1}s", self.spawn_interval_secs)),
            SettingRow::new(
                "Seed",
                self.seed
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "clock".to_string()),
            ),
            SettingRow::new("Log file", self.log_path.as_deref().unwrap_or("off")),
        ]
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            board: self.board_config(),
            settings: self.rows(),
        }
    }
}
