//! CLI configuration at `<home>/.showcase/config.yaml`.
//!
//! Same pattern as the rest of the workspace:
//! - `fn_at(home: &Path, …)`: explicit home; used in tests with `TempDir`
//! - `fn(…)`: derives home from `dirs::home_dir()`, delegates to `_at`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use showcase_core::ManifestFormat;

/// User-level settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Format used by `showcase export` when `--format` is omitted.
    pub default_format: ManifestFormat,
    /// Colored terminal output.
    pub color: bool,
    /// Sections to expose; all sections when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<String>>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            default_format: ManifestFormat::Yaml,
            color: true,
            sections: None,
        }
    }
}

/// `<home>/.showcase/config.yaml`: pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".showcase").join("config.yaml")
}

/// Load the config, falling back to defaults when the file is absent.
pub fn load_at(home: &Path) -> Result<ShowcaseConfig> {
    let path = config_path_at(home);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ShowcaseConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(ShowcaseConfig::default());
    }
    serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config at {}", path.display()))
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<ShowcaseConfig> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    load_at(&home)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(home: &TempDir, body: &str) {
        let path = config_path_at(home.path());
        std::fs::create_dir_all(path.parent().expect("parent")).expect("mkdir");
        std::fs::write(path, body).expect("write config");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let home = TempDir::new().expect("tempdir");
        assert_eq!(load_at(home.path()).expect("load"), ShowcaseConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let home = TempDir::new().expect("tempdir");
        write_config(&home, "default_format: json\nsections: [apps]\n");
        let cfg = load_at(home.path()).expect("load");
        assert_eq!(cfg.default_format, ManifestFormat::Json);
        assert!(cfg.color);
        assert_eq!(cfg.sections, Some(vec!["apps".to_string()]));
    }

    #[test]
    fn malformed_file_reports_path() {
        let home = TempDir::new().expect("tempdir");
        write_config(&home, "default_format: [not, a, format\n");
        let err = load_at(home.path()).unwrap_err();
        assert!(format!("{err:#}").contains("config.yaml"), "got: {err:#}");
    }
}
