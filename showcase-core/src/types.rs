//! Domain types for the showcase registry.
//!
//! [`DemoEntry`] and [`DemoItem`] are generic over the renderable unit `C`
//! supplied by the rendering layer; nothing here inspects it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed demo entry name, unique within its registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemoName(pub String);

impl DemoName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DemoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for DemoName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DemoName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq<str> for DemoName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DemoName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Open key-value bag handed to the layout renderer untouched.
pub type LayoutOptions = BTreeMap<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// How an entry's items are arranged on its page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layout {
    /// Responsive grid; `min_width == 0` collapses to one item per row.
    Grid { min_width: u32 },
    Tabs,
    /// Label / instance table.
    TwoColumnTable,
    /// A single item rendered without container chrome.
    Single,
}

impl Layout {
    /// `Grid { min_width: 0 }`.
    pub const ROWS: Layout = Layout::Grid { min_width: 0 };

    pub fn kind(&self) -> &'static str {
        match self {
            Layout::Grid { min_width: 0 } => "rows",
            Layout::Grid { .. } => "grid",
            Layout::Tabs => "tabs",
            Layout::TwoColumnTable => "two_column_table",
            Layout::Single => "single",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Grid { min_width } if *min_width > 0 => write!(f, "grid({min_width}px)"),
            other => f.write_str(other.kind()),
        }
    }
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// One child item of a demo entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoItem<C> {
    pub title: String,
    pub description: Option<String>,
    pub component: C,
}

/// One named, independently navigable showcase page.
///
/// Created and mutated only through [`Registry`](crate::Registry); read-only
/// for everyone else.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoEntry<C> {
    name: DemoName,
    layout: Layout,
    url_prefix: Option<String>,
    layout_options: LayoutOptions,
    description: Option<String>,
    items: Vec<DemoItem<C>>,
}

impl<C> DemoEntry<C> {
    /// An empty URL prefix is treated as no prefix.
    pub(crate) fn new(
        name: DemoName,
        layout: Layout,
        url_prefix: Option<String>,
        layout_options: LayoutOptions,
    ) -> Self {
        Self {
            name,
            layout,
            url_prefix: url_prefix.filter(|p| !p.is_empty()),
            layout_options,
            description: None,
            items: Vec::new(),
        }
    }

    pub(crate) fn set_description(&mut self, markdown: String) {
        self.description = Some(markdown);
    }

    pub(crate) fn push_item(&mut self, item: DemoItem<C>) {
        self.items.push(item);
    }

    pub fn name(&self) -> &DemoName {
        &self.name
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn url_prefix(&self) -> Option<&str> {
        self.url_prefix.as_deref()
    }

    pub fn layout_options(&self) -> &LayoutOptions {
        &self.layout_options
    }

    /// Markdown description, if one was set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn items(&self) -> &[DemoItem<C>] {
        &self.items
    }

    /// True when the entry is routable as a standalone mini-app.
    pub fn is_mini_app(&self) -> bool {
        self.url_prefix.is_some()
    }

    /// Whether `url` falls under this entry's URL prefix.
    pub fn matches_url(&self, url: &str) -> bool {
        self.url_prefix
            .as_deref()
            .is_some_and(|prefix| url.starts_with(prefix))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
