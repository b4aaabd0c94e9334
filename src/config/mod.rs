use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    /// User id for console lines without an `@<id>` prefix.
    #[serde(default)]
    pub default_user: i64,
    /// Name column value until the user sets one with /name.
    #[serde(default)]
    pub supervisor_name: String,
    /// Fill for highlighted rows, hex RRGGBB.
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_export_dir() -> PathBuf {
    Config::config_dir().join("exports")
}
fn default_highlight_color() -> String {
    "FFFF00".to_string()
}
fn default_file_name() -> String {
    "excel_file.xlsx".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            default_user: 0,
            supervisor_name: String::new(),
            highlight_color: default_highlight_color(),
            file_name: default_file_name(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.discountbot`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".discountbot")
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("discountbot.conf")
    }

    /// The file actually used: `path` when given, else the default.
    pub fn resolve_path(path: Option<&Path>) -> PathBuf {
        path.map(Path::to_path_buf).unwrap_or_else(Self::config_file)
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = Self::resolve_path(path);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

        cfg.highlight_rgb()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path` (or the default location).
    /// With `is_test` nothing is written. Returns the path used.
    pub fn init_all(path: Option<&Path>, is_test: bool) -> AppResult<PathBuf> {
        let path = Self::resolve_path(path);
        let config = Config::default();

        if !is_test {
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)?;
            }
            fs::write(&path, config.to_yaml()?)?;
        }

        Ok(path)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Highlight colour as `0xRRGGBB`; accepts an optional leading `#`.
    pub fn highlight_rgb(&self) -> AppResult<u32> {
        let hex = self.highlight_color.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AppError::Config(format!(
                "highlight_color must be RRGGBB, got '{}'",
                self.highlight_color
            )));
        }
        u32::from_str_radix(hex, 16).map_err(|_| {
            AppError::Config(format!(
                "highlight_color must be RRGGBB, got '{}'",
                self.highlight_color
            ))
        })
    }
}
