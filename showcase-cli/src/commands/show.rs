//! `showcase show <name>`: one entry with item previews.

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;

use super::Showcase;

/// Arguments for `showcase show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Demo entry name (e.g. "Buttons").
    pub name: String,

    /// Section to search; every section when omitted.
    #[arg(long, short = 's')]
    pub section: Option<String>,
}

impl ShowArgs {
    pub fn run(self, showcase: &Showcase) -> Result<()> {
        let (section, entry) = showcase
            .find(&self.name, self.section.as_deref())?
            .ok_or_else(|| anyhow!("no demo entry named '{}'", self.name))?;

        println!("{} {}", entry.name().to_string().bold(), format!("[{}]", section.name()).dimmed());
        println!("  layout: {}", entry.layout());
        if let Some(route) = entry.url_prefix() {
            println!("  route:  {}", route.cyan());
        }
        for (key, value) in entry.layout_options() {
            println!("  option: {key} = {value}");
        }
        if let Some(description) = entry.description() {
            println!();
            for line in description.lines() {
                println!("  {line}");
            }
        }

        for item in entry.items() {
            println!();
            println!("  {} {}", "▸".green(), item.title.bold());
            if let Some(description) = &item.description {
                println!("    {}", description.dimmed());
            }
            for line in (item.component)().lines() {
                println!("    {line}");
            }
        }
        Ok(())
    }
}
