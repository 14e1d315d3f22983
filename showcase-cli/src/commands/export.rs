//! `showcase export`: write component-free catalog manifests.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use showcase_core::{CatalogManifest, ManifestFormat};

use super::Showcase;
use crate::FormatArg;

/// Arguments for `showcase export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Restrict to one section.
    #[arg(long, short = 's')]
    pub section: Option<String>,

    /// Output format: yaml | json. Defaults to `default_format` from config.
    #[arg(long, short = 'f', value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Directory to write `<section>.<ext>` files into. Prints to stdout when omitted.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub out: Option<PathBuf>,
}

impl ExportArgs {
    pub fn run(self, showcase: &Showcase) -> Result<()> {
        let format: ManifestFormat = self
            .format
            .map(Into::into)
            .unwrap_or(showcase.config.default_format);
        let manifests: Vec<CatalogManifest> = showcase
            .select(self.section.as_deref())?
            .into_iter()
            .map(CatalogManifest::from_registry)
            .collect();

        let Some(out_dir) = self.out else {
            print!("{}", render_stdout(&manifests, format)?);
            return Ok(());
        };

        for manifest in &manifests {
            let path = out_dir.join(format!("{}.{}", manifest.registry, format.extension()));
            manifest
                .save_at(&path, format)
                .with_context(|| format!("failed to export section '{}'", manifest.registry))?;
            println!("✓ Wrote {}", path.display());
        }
        Ok(())
    }
}

/// YAML manifests become one multi-document stream; JSON becomes an array.
fn render_stdout(manifests: &[CatalogManifest], format: ManifestFormat) -> Result<String> {
    match format {
        ManifestFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(manifests)?)),
        ManifestFormat::Yaml => {
            let mut out = String::new();
            for manifest in manifests {
                out.push_str("---\n");
                out.push_str(&manifest.to_yaml()?);
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShowcaseConfig;

    fn manifests() -> Vec<CatalogManifest> {
        let sc = Showcase::from_config(ShowcaseConfig::default()).expect("showcase");
        sc.sections.iter().map(CatalogManifest::from_registry).collect()
    }

    #[test]
    fn yaml_stdout_has_one_document_per_section() {
        let out = render_stdout(&manifests(), ManifestFormat::Yaml).expect("render");
        assert_eq!(out.matches("---\n").count(), 3);
        assert!(out.contains("registry: layouts"));
    }

    #[test]
    fn json_stdout_is_an_array() {
        let out = render_stdout(&manifests(), ManifestFormat::Json).expect("render");
        let parsed: Vec<CatalogManifest> = serde_json::from_str(&out).expect("parse");
        assert_eq!(parsed.len(), 3);
    }
}
