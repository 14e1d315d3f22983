//! `showcase resolve <url>`: route a URL to a demo entry.
//!
//! Mini-app prefixes win; otherwise the last path segment is looked up as an
//! entry name.

use anyhow::{bail, Result};
use clap::Args;

use showcase_core::DemoEntry;

use super::Showcase;
use crate::catalog::{Preview, Section};

/// Arguments for `showcase resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Navigation URL or path (e.g. "/apps/todo/today").
    pub url: String,
}

/// How a URL was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    MiniApp,
    Name,
}

impl ResolveArgs {
    pub fn run(self, showcase: &Showcase) -> Result<()> {
        match resolve(showcase, &self.url) {
            Some((section, entry, Resolution::MiniApp)) => {
                println!("{}/{} (mini-app)", section.name(), entry.name());
            }
            Some((section, entry, Resolution::Name)) => {
                println!("{}/{}", section.name(), entry.name());
            }
            None => bail!("no demo entry matches '{}'", self.url),
        }
        Ok(())
    }
}

pub fn resolve<'a>(
    showcase: &'a Showcase,
    url: &str,
) -> Option<(&'a Section, &'a DemoEntry<Preview>, Resolution)> {
    let by_prefix = showcase.sections.iter().find_map(|s| {
        s.first_mini_app_by_url(url)
            .map(|entry| (s, entry, Resolution::MiniApp))
    });
    if by_prefix.is_some() {
        return by_prefix;
    }

    let segment = url.trim_end_matches('/').rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    showcase
        .sections
        .iter()
        .find_map(|s| s.find_by_name(segment).map(|entry| (s, entry, Resolution::Name)))
}
