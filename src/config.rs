use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use std::{env, fs, io};

pub const CONFIG_ENV: &str = "SNAKE_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "snake.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Milliseconds between game ticks.
    pub tick_ms: u64,
    /// Blocks along the shorter edge of the window.
    pub grid_divisions: u32,
    pub window_width: u32,
    pub window_height: u32,
    pub show_grid: bool,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            grid_divisions: 40,
            window_width: 800,
            window_height: 600,
            show_grid: true,
            title: "Snake".to_string(),
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Reads `$SNAKE_CONFIG` if set, otherwise `snake.json` when present.
    pub fn load() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG_FILE);
                match fs::read_to_string(&path) {
                    Ok(text) => Self::from_json(&text)
                        .with_context(|| format!("invalid config {}", path.display())),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        log::info!("no {DEFAULT_CONFIG_FILE}, using defaults");
                        Ok(Self::default())
                    }
                    Err(e) => {
                        Err(e).with_context(|| format!("failed to read {}", path.display()))
                    }
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            bail!("tick_ms must be positive");
        }
        if self.grid_divisions == 0 {
            bail!("grid_divisions must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let s = Settings::from_json(r#"{ "tick_ms": 80, "show_grid": false }"#).unwrap();
        assert_eq!(s.tick_interval(), Duration::from_millis(80));
        assert!(!s.show_grid);
        assert_eq!(s.grid_divisions, 40);
        assert_eq!(s.title, "Snake");
    }

    #[test]
    fn empty_object_is_the_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn rejects_zero_values() {
        assert!(Settings::from_json(r#"{ "tick_ms": 0 }"#).is_err());
        assert!(Settings::from_json(r#"{ "grid_divisions": 0 }"#).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Settings::from_json("{ tick_ms: }").is_err());
        assert!(Settings::from_json(r#"{ "tick_ms": "fast" }"#).is_err());
    }

    #[test]
    fn reports_the_offending_path() {
        let path = env::temp_dir().join("grid-snake-missing-config.json");
        let err = Settings::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("grid-snake-missing-config.json"));
    }
}
