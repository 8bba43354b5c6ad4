use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "triangle.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub warning_duration_ms: u64,
    pub particle_count: usize,
    pub particles_enabled: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            warning_duration_ms: 2000,
            particle_count: ambient::DEFAULT_PARTICLE_COUNT,
            particles_enabled: true,
            window_width: 960.0,
            window_height: 720.0,
        }
    }
}

impl Settings {
    pub fn warning_duration(&self) -> Duration {
        Duration::from_millis(self.warning_duration_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    warning_duration_ms: Option<u64>,
    particle_count: Option<usize>,
    particles_enabled: Option<bool>,
    window_width: Option<f32>,
    window_height: Option<f32>,
}

/// Defaults, then the config file, then `APP__*` environment variables.
///
/// A missing default file is fine; a missing explicit `path` is an error.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };

    match fs::read_to_string(&path) {
        Ok(raw) => {
            let file_cfg = toml::from_str::<FileSettings>(&raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            apply_file_settings(&mut settings, file_cfg);
        }
        Err(err) if explicit => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
        Err(_) => {}
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.warning_duration_ms {
        settings.warning_duration_ms = v;
    }
    if let Some(v) = file_cfg.particle_count {
        settings.particle_count = v;
    }
    if let Some(v) = file_cfg.particles_enabled {
        settings.particles_enabled = v;
    }
    if let Some(v) = file_cfg.window_width {
        settings.window_width = v;
    }
    if let Some(v) = file_cfg.window_height {
        settings.window_height = v;
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = parsed_env(&lookup, "APP__WARNING_DURATION_MS") {
        settings.warning_duration_ms = v;
    }
    if let Some(v) = parsed_env(&lookup, "APP__PARTICLE_COUNT") {
        settings.particle_count = v;
    }
    if let Some(v) = parsed_env(&lookup, "APP__PARTICLES_ENABLED") {
        settings.particles_enabled = v;
    }
    if let Some(v) = parsed_env(&lookup, "APP__WINDOW_WIDTH") {
        settings.window_width = v;
    }
    if let Some(v) = parsed_env(&lookup, "APP__WINDOW_HEIGHT") {
        settings.window_height = v;
    }
}

fn parsed_env<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<T> {
    let raw = lookup(name)?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(name, value = %raw, "ignoring malformed environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::HashMap,
        env,
        time::{SystemTime, UNIX_EPOCH},
    };

    use super::*;

    fn temp_config(contents: &str) -> PathBuf {
        let suffix = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos();
        let path = env::temp_dir().join(format!("triangle_config_test_{suffix}.toml"));
        fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn defaults_use_two_second_warning() {
        let settings = Settings::default();
        assert_eq!(settings.warning_duration(), Duration::from_millis(2000));
        assert_eq!(settings.particle_count, 50);
        assert!(settings.particles_enabled);
    }

    #[test]
    fn file_values_override_defaults() {
        let path = temp_config("warning_duration_ms = 500\nparticles_enabled = false\n");
        let mut settings = Settings::default();
        let raw = fs::read_to_string(&path).expect("read");
        apply_file_settings(&mut settings, toml::from_str(&raw).expect("parse"));

        assert_eq!(settings.warning_duration_ms, 500);
        assert!(!settings.particles_enabled);
        assert_eq!(settings.particle_count, 50);

        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = env::temp_dir().join("triangle_config_test_does_not_exist.toml");
        let err = load_settings(Some(missing.as_path())).expect_err("missing file");
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = temp_config("particle_count = \"many\"\n");
        let err = load_settings(Some(path.as_path())).expect_err("bad type");
        assert!(err.to_string().contains("failed to parse config file"));
        fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn env_overrides_skip_malformed_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("APP__WARNING_DURATION_MS", "750"),
            ("APP__PARTICLE_COUNT", "lots"),
            ("APP__PARTICLES_ENABLED", "false"),
        ]);
        let mut settings = Settings::default();
        apply_env_overrides(&mut settings, |name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(settings.warning_duration_ms, 750);
        assert_eq!(settings.particle_count, 50);
        assert!(!settings.particles_enabled);
    }
}
