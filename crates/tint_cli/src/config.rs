//! Runtime configuration: process environment (after `.env` loading) plus CLI overrides.

use anyhow::{Result, anyhow};
use tint_tui::Appearance;

/// Chrome appearance for the TUI.
pub const APPEARANCE_ENV: &str = "TINTBOARD_APPEARANCE";
/// Log filter; `RUST_LOG` is the fallback.
pub const LOG_ENV: &str = "TINTBOARD_LOG";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TintConfig {
    pub appearance: Appearance,
    pub log_level: Option<String>,
}

impl TintConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let appearance = match get(APPEARANCE_ENV) {
            Some(v) => v
                .parse::<Appearance>()
                .map_err(|e| anyhow!("{}: {}", APPEARANCE_ENV, e))?,
            None => Appearance::default(),
        };
        let log_level = get(LOG_ENV).or_else(|| get("RUST_LOG"));
        Ok(Self {
            appearance,
            log_level,
        })
    }

    /// CLI flag override; `None` keeps the env value.
    pub fn with_appearance(mut self, appearance: Option<Appearance>) -> Self {
        if let Some(appearance) = appearance {
            self.appearance = appearance;
        }
        self
    }

    /// `--log-level` override; `None` keeps the env value.
    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        if let Some(level) = level.filter(|l| !l.trim().is_empty()) {
            self.log_level = Some(level);
        }
        self
    }

    /// Filter to install: the configured level, else "debug" when verbose, else `quiet`.
    pub fn log_filter(&self, verbose: bool, quiet: &str) -> String {
        match (&self.log_level, verbose) {
            (Some(level), _) => level.clone(),
            (None, true) => "debug".to_string(),
            (None, false) => quiet.to_string(),
        }
    }
}

/// Load the first `.env` found walking up from the current directory.
/// Variables already set in the process win.
pub fn load_dotenv() {
    let Ok(mut dir) = std::env::current_dir() else {
        return;
    };
    for _ in 0..32 {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            break;
        }
        if !dir.pop() {
            break;
        }
    }
}
