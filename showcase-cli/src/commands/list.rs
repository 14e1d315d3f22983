//! `showcase list`: entries across sections.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::Showcase;

/// Arguments for `showcase list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Restrict to one section.
    #[arg(long, short = 's')]
    pub section: Option<String>,

    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct EntryRow {
    #[tabled(rename = "section")]
    section: String,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "layout")]
    layout: String,
    #[tabled(rename = "items")]
    items: usize,
    #[tabled(rename = "route", display_with = "display_route")]
    #[serde(skip_serializing_if = "Option::is_none")]
    route: Option<String>,
}

fn display_route(route: &Option<String>) -> String {
    route.clone().unwrap_or_else(|| "-".to_string())
}

impl ListArgs {
    pub fn run(self, showcase: &Showcase) -> Result<()> {
        let rows = collect_rows(showcase, self.section.as_deref())?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            println!("No demo entries registered.");
            return Ok(());
        }

        let mini_apps = rows.iter().filter(|r| r.route.is_some()).count();
        let total = rows.len();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        println!(
            "{} entries, {} mini-apps",
            total.to_string().bold(),
            mini_apps.to_string().cyan()
        );
        Ok(())
    }
}

fn collect_rows(showcase: &Showcase, section: Option<&str>) -> Result<Vec<EntryRow>> {
    let rows = showcase
        .select(section)?
        .into_iter()
        .flat_map(|s| {
            s.entries().iter().map(move |entry| EntryRow {
                section: s.name().to_string(),
                name: entry.name().to_string(),
                layout: entry.layout().to_string(),
                items: entry.items().len(),
                route: entry.url_prefix().map(str::to_owned),
            })
        })
        .collect();
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShowcaseConfig;

    #[test]
    fn rows_follow_registration_order() {
        let sc = Showcase::from_config(ShowcaseConfig::default()).expect("showcase");
        let rows = collect_rows(&sc, Some("components")).expect("rows");
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Buttons", "Inputs", "Typography"]);
        assert_eq!(rows[0].layout, "grid(120px)");
        assert_eq!(rows[2].layout, "rows");
    }

    #[test]
    fn mini_apps_carry_routes() {
        let sc = Showcase::from_config(ShowcaseConfig::default()).expect("showcase");
        let rows = collect_rows(&sc, Some("apps")).expect("rows");
        assert!(rows.iter().all(|r| r.route.is_some()));
    }
}
