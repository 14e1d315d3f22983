//! Subcommands and the catalog context they share.

pub mod export;
pub mod list;
pub mod resolve;
pub mod show;

use anyhow::{bail, Context, Result};

use showcase_core::DemoEntry;

use crate::catalog::{self, Preview, Section};
use crate::config::{self, ShowcaseConfig};

/// Loaded configuration plus the sections it exposes.
pub struct Showcase {
    pub config: ShowcaseConfig,
    pub sections: Vec<Section>,
}

impl Showcase {
    pub fn load() -> Result<Self> {
        let config = config::load()?;
        Self::from_config(config)
    }

    pub fn from_config(config: ShowcaseConfig) -> Result<Self> {
        if !config.color {
            colored::control::set_override(false);
        }
        let sections = catalog::build_filtered(config.sections.as_deref())
            .context("failed to build demo catalog")?;
        Ok(Self { config, sections })
    }

    /// All sections, or just `name`. An unknown section name is an error.
    pub fn select(&self, name: Option<&str>) -> Result<Vec<&Section>> {
        let Some(name) = name else {
            return Ok(self.sections.iter().collect());
        };
        match self.sections.iter().find(|s| s.name() == name) {
            Some(section) => Ok(vec![section]),
            None => {
                let known: Vec<&str> = self.sections.iter().map(|s| s.name()).collect();
                bail!("unknown section '{name}'; available: {}", known.join(", "))
            }
        }
    }

    /// First entry named `name`, searching sections in order.
    pub fn find(
        &self,
        name: &str,
        section: Option<&str>,
    ) -> Result<Option<(&Section, &DemoEntry<Preview>)>> {
        Ok(self
            .select(section)?
            .into_iter()
            .find_map(|s| s.find_by_name(name).map(|entry| (s, entry))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn showcase() -> Showcase {
        Showcase::from_config(ShowcaseConfig::default()).expect("showcase")
    }

    #[test]
    fn select_all_and_one() {
        let sc = showcase();
        assert_eq!(sc.select(None).expect("all").len(), sc.sections.len());
        assert_eq!(sc.select(Some("apps")).expect("apps")[0].name(), "apps");
    }

    #[test]
    fn select_unknown_lists_available() {
        let err = showcase().select(Some("nope")).unwrap_err();
        assert!(err.to_string().contains("components"), "got: {err}");
    }

    #[test]
    fn find_searches_every_section() {
        let sc = showcase();
        let (section, entry) = sc.find("Clock", None).expect("find").expect("Clock");
        assert_eq!(section.name(), "apps");
        assert!(entry.is_mini_app());
        assert!(sc.find("Clock", Some("layouts")).expect("find").is_none());
    }
}
