//! Component-free catalog snapshots.
//!
//! A [`CatalogManifest`] captures everything about a [`Registry`] except the
//! renderable units, so routing tables and tooling can consume the catalog
//! as YAML or JSON.
//!
//! Write flow for [`CatalogManifest::save_at`]: serialize → `.tmp` sibling →
//! `rename`. The `.tmp` file lives next to the target so the rename never
//! crosses filesystems.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ManifestError;
use crate::registry::Registry;
use crate::types::{DemoEntry, DemoName, Layout, LayoutOptions};

/// Output encoding for a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestFormat {
    #[default]
    Yaml,
    Json,
}

impl ManifestFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ManifestFormat::Yaml => "yaml",
            ManifestFormat::Json => "json",
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One item of an entry, minus its component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemManifest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One demo entry, minus its components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryManifest {
    pub name: DemoName,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "LayoutOptions::is_empty")]
    pub options: LayoutOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub items: Vec<ItemManifest>,
}

impl<C> From<&DemoEntry<C>> for EntryManifest {
    fn from(entry: &DemoEntry<C>) -> Self {
        Self {
            name: entry.name().clone(),
            layout: entry.layout(),
            url_prefix: entry.url_prefix().map(str::to_owned),
            options: entry.layout_options().clone(),
            description: entry.description().map(str::to_owned),
            items: entry
                .items()
                .iter()
                .map(|item| ItemManifest {
                    title: item.title.clone(),
                    description: item.description.clone(),
                })
                .collect(),
        }
    }
}

/// Snapshot of one registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub registry: String,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub entries: Vec<EntryManifest>,
}

impl CatalogManifest {
    pub fn from_registry<C>(registry: &Registry<C>) -> Self {
        Self {
            registry: registry.name().to_owned(),
            generated_at: Utc::now(),
            entries: registry.entries().iter().map(EntryManifest::from).collect(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, ManifestError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render(&self, format: ManifestFormat) -> Result<String, ManifestError> {
        match format {
            ManifestFormat::Yaml => self.to_yaml(),
            ManifestFormat::Json => self.to_json(),
        }
    }

    /// Atomically write the manifest to `path`, creating parent directories.
    pub fn save_at(&self, path: &Path, format: ManifestFormat) -> Result<(), ManifestError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
        }
        let body = self.render(format)?;
        let tmp_path = tmp_sibling(path);
        std::fs::write(&tmp_path, body).map_err(|e| io_err(&tmp_path, e))?;
        std::fs::rename(&tmp_path, path).map_err(|e| io_err(path, e))?;
        tracing::debug!(path = %path.display(), format = %format, "manifest written");
        Ok(())
    }
}

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> ManifestError {
    ManifestError::Io { path: path.into(), source }
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Registry<()> {
        let mut r = Registry::new("layouts");
        r.register_as_grid("Cards", 240, |r| {
            r.description("Card grid")?;
            r.add("plain", ())?;
            r.add_described("elevated", (), "with shadow")?;
            Ok(())
        })
        .expect("Cards");
        r.register_as_mini_app("Todo", "/apps/todo", |r| {
            r.add("app", ())?;
            Ok(())
        })
        .expect("Todo");
        r
    }

    #[test]
    fn manifest_mirrors_registry() {
        let manifest = CatalogManifest::from_registry(&sample());
        assert_eq!(manifest.registry, "layouts");
        assert_eq!(manifest.entries.len(), 2);

        let cards = &manifest.entries[0];
        assert_eq!(cards.layout, Layout::Grid { min_width: 240 });
        assert_eq!(cards.description.as_deref(), Some("Card grid"));
        assert_eq!(cards.items[1].description.as_deref(), Some("with shadow"));
        assert_eq!(manifest.entries[1].url_prefix.as_deref(), Some("/apps/todo"));
    }

    #[test]
    fn yaml_omits_absent_fields() {
        let yaml = CatalogManifest::from_registry(&sample()).to_yaml().expect("yaml");
        assert!(yaml.contains("url_prefix: /apps/todo"));
        assert_eq!(yaml.matches("url_prefix").count(), 1);
        assert!(!yaml.contains("options"));
    }

    #[test]
    fn save_at_writes_and_cleans_up_tmp() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("out").join("layouts.json");
        let manifest = CatalogManifest::from_registry(&sample());
        manifest.save_at(&path, ManifestFormat::Json).expect("save");

        assert!(path.exists());
        assert!(!path.with_file_name("layouts.json.tmp").exists());
        let loaded: CatalogManifest =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(loaded.entries, manifest.entries);
    }
}
