use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::state::{Instrument, KeySpec, PitchClass, TrainerState, Tuning};

const DEFAULT_CONFIG: &str = include_str!("../config.toml");

/// Fret count used when neither config file sets one.
pub const DEFAULT_FRET_COUNT: u8 = 14;
/// Highest fret count a config may request.
pub const MAX_FRET_COUNT: u8 = 24;

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    defaults: DefaultsConfig,
}

#[derive(Deserialize, Default)]
struct DefaultsConfig {
    instrument: Option<String>,
    root: Option<String>,
    key: Option<String>,
    tuning: Option<String>,
    // Wide so out-of-range values clamp instead of failing the whole file
    fret_count: Option<i64>,
}

/// Session defaults: the embedded `config.toml` overlaid with the user's file.
///
/// Read-only. Selections made during a session are never written back.
pub struct Config {
    defaults: DefaultsConfig,
}

impl Config {
    /// Load the embedded defaults plus the user config, if one exists.
    pub fn load() -> Self {
        Self::load_from(user_config_path().as_deref())
    }

    /// Load the embedded defaults overlaid with the file at `user_path`.
    /// Missing, unreadable, or malformed files leave the embedded defaults in place.
    pub fn load_from(user_path: Option<&Path>) -> Self {
        let mut base: ConfigFile = match toml::from_str(DEFAULT_CONFIG) {
            Ok(base) => base,
            Err(e) => {
                log::error!(target: "config", "embedded config.toml is malformed: {}", e);
                ConfigFile::default()
            }
        };

        if let Some(path) = user_path {
            if path.exists() {
                match std::fs::read_to_string(path) {
                    Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                        Ok(user) => merge_defaults(&mut base.defaults, user.defaults),
                        Err(e) => {
                            log::warn!(target: "config", "ignoring malformed config {}: {}", path.display(), e)
                        }
                    },
                    Err(e) => {
                        log::warn!(target: "config", "could not read config {}: {}", path.display(), e)
                    }
                }
            }
        }

        Config {
            defaults: base.defaults,
        }
    }

    /// Initial state for a new session. Unrecognised names fall back to the
    /// built-in default for that field.
    pub fn defaults(&self) -> TrainerState {
        let fallback = TrainerState::default();
        TrainerState {
            instrument: parse_field(
                self.defaults.instrument.as_deref(),
                "instrument",
                Instrument::from_name,
            )
            .unwrap_or(fallback.instrument),
            root: parse_field(self.defaults.root.as_deref(), "root", PitchClass::from_name)
                .unwrap_or(fallback.root),
            key_spec: parse_field(self.defaults.key.as_deref(), "key", KeySpec::by_name)
                .unwrap_or(fallback.key_spec),
            tuning: parse_field(self.defaults.tuning.as_deref(), "tuning", Tuning::by_name)
                .unwrap_or(fallback.tuning),
        }
    }

    /// Frets shown per string (clamped to 1..=24).
    pub fn fret_count(&self) -> u8 {
        match self.defaults.fret_count {
            Some(count) => count.clamp(1, i64::from(MAX_FRET_COUNT)) as u8,
            None => DEFAULT_FRET_COUNT,
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("fretboard").join("config.toml"))
}

fn merge_defaults(base: &mut DefaultsConfig, user: DefaultsConfig) {
    if user.instrument.is_some() {
        base.instrument = user.instrument;
    }
    if user.root.is_some() {
        base.root = user.root;
    }
    if user.key.is_some() {
        base.key = user.key;
    }
    if user.tuning.is_some() {
        base.tuning = user.tuning;
    }
    if user.fret_count.is_some() {
        base.fret_count = user.fret_count;
    }
}

fn parse_field<T>(value: Option<&str>, field: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let value = value?;
    let parsed = parse(value);
    if parsed.is_none() {
        log::warn!(target: "config", "unknown {} {:?}, using default", field, value);
    }
    parsed
}
