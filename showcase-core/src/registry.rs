//! In-memory demo registry.
//!
//! # API pattern
//!
//! Every `register*` method creates an entry, makes it the *current* entry and
//! then runs the supplied configurator synchronously against the registry, so
//! the configurator can call [`Registry::add`] and [`Registry::description`]:
//!
//! ```rust
//! use showcase_core::Registry;
//!
//! # fn main() -> Result<(), showcase_core::RegistryError> {
//! let mut registry: Registry<&str> = Registry::new("components");
//! registry
//!     .register_as_grid("Buttons", 120, |r| {
//!         r.description("Clickable things.")?;
//!         r.add("primary", "<button>")?;
//!         Ok(())
//!     })?
//!     .register_as_mini_app("Clock", "/apps/clock", |r| {
//!         r.add("clock", "<clock>")?;
//!         Ok(())
//!     })?;
//!
//! assert_eq!(registry.names().len(), 2);
//! assert!(registry.first_mini_app_by_url("/apps/clock/alarm").is_some());
//! # Ok(())
//! # }
//! ```

use tracing::{debug, warn};

use crate::error::{EntryOperation, RegistryError};
use crate::types::{DemoEntry, DemoItem, DemoName, Layout, LayoutOptions};

/// Ordered collection of demo entries for one showcase section.
#[derive(Debug, Clone)]
pub struct Registry<C> {
    name: String,
    used_names: Vec<DemoName>,
    entries: Vec<DemoEntry<C>>,
    /// Index into `entries` of the entry being configured.
    current: Option<usize>,
}

impl<C> Registry<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            used_names: Vec::new(),
            entries: Vec::new(),
            current: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Grid layout with a minimum column width; `0` lays items out in rows.
    pub fn register_as_grid<F>(
        &mut self,
        name: impl Into<DemoName>,
        min_width: u32,
        configure: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: FnOnce(&mut Self) -> Result<(), RegistryError>,
    {
        self.register(name, Layout::Grid { min_width }, None, LayoutOptions::new(), configure)
    }

    /// Grid layout with one item per row.
    pub fn register_as_rows<F>(
        &mut self,
        name: impl Into<DemoName>,
        configure: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: FnOnce(&mut Self) -> Result<(), RegistryError>,
    {
        self.register(name, Layout::ROWS, None, LayoutOptions::new(), configure)
    }

    pub fn register_as_tabs<F>(
        &mut self,
        name: impl Into<DemoName>,
        configure: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: FnOnce(&mut Self) -> Result<(), RegistryError>,
    {
        self.register(name, Layout::Tabs, None, LayoutOptions::new(), configure)
    }

    /// Label / instance table layout.
    pub fn register_as_two_column_table<F>(
        &mut self,
        name: impl Into<DemoName>,
        configure: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: FnOnce(&mut Self) -> Result<(), RegistryError>,
    {
        self.register(name, Layout::TwoColumnTable, None, LayoutOptions::new(), configure)
    }

    /// An entry meant to hold one item, rendered without container chrome.
    pub fn register_single<F>(
        &mut self,
        name: impl Into<DemoName>,
        configure: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: FnOnce(&mut Self) -> Result<(), RegistryError>,
    {
        self.register(name, Layout::Single, None, LayoutOptions::new(), configure)
    }

    /// Like [`register_single`](Self::register_single), but routable under `url_prefix`.
    pub fn register_as_mini_app<F>(
        &mut self,
        name: impl Into<DemoName>,
        url_prefix: impl Into<String>,
        configure: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: FnOnce(&mut Self) -> Result<(), RegistryError>,
    {
        self.register(
            name,
            Layout::Single,
            Some(url_prefix.into()),
            LayoutOptions::new(),
            configure,
        )
    }

    /// Shared registration primitive.
    ///
    /// Returns [`RegistryError::DuplicateName`] without touching any state if
    /// `name` is taken. Otherwise the new entry is appended and becomes
    /// current before `configure` runs. An error from `configure` is returned
    /// as-is; the entry stays registered.
    pub fn register<F>(
        &mut self,
        name: impl Into<DemoName>,
        layout: Layout,
        url_prefix: Option<String>,
        layout_options: LayoutOptions,
        configure: F,
    ) -> Result<&mut Self, RegistryError>
    where
        F: FnOnce(&mut Self) -> Result<(), RegistryError>,
    {
        let name = name.into();
        if self.used_names.contains(&name) {
            warn!(registry = %self.name, name = %name, "rejected duplicate demo name");
            return Err(RegistryError::DuplicateName { name: name.0 });
        }

        debug!(
            registry = %self.name,
            name = %name,
            layout = %layout,
            url_prefix = url_prefix.as_deref().unwrap_or(""),
            "registering demo entry"
        );

        self.entries
            .push(DemoEntry::new(name.clone(), layout, url_prefix, layout_options));
        self.current = Some(self.entries.len() - 1);
        self.used_names.push(name);

        configure(&mut *self)?;
        Ok(self)
    }

    // -----------------------------------------------------------------------
    // Current-entry configuration
    // -----------------------------------------------------------------------

    /// Sets (or replaces) the markdown description of the current entry.
    pub fn description(&mut self, markdown: impl Into<String>) -> Result<&mut Self, RegistryError> {
        self.current_mut(EntryOperation::Description)?
            .set_description(markdown.into());
        Ok(self)
    }

    /// Appends an item without a description to the current entry.
    pub fn add(&mut self, title: impl Into<String>, component: C) -> Result<&mut Self, RegistryError> {
        self.push_item(title.into(), component, None)
    }

    /// Appends an item with a description to the current entry.
    pub fn add_described(
        &mut self,
        title: impl Into<String>,
        component: C,
        description: impl Into<String>,
    ) -> Result<&mut Self, RegistryError> {
        let description = Some(description.into()).filter(|d| !d.is_empty());
        self.push_item(title.into(), component, description)
    }

    fn push_item(
        &mut self,
        title: String,
        component: C,
        description: Option<String>,
    ) -> Result<&mut Self, RegistryError> {
        self.current_mut(EntryOperation::Add)?.push_item(DemoItem {
            title,
            description,
            component,
        });
        Ok(self)
    }

    fn current_mut(&mut self, operation: EntryOperation) -> Result<&mut DemoEntry<C>, RegistryError> {
        self.current
            .and_then(|idx| self.entries.get_mut(idx))
            .ok_or(RegistryError::NoCurrentEntry { operation })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All registered names, in registration order.
    pub fn names(&self) -> &[DemoName] {
        &self.used_names
    }

    pub fn entries(&self) -> &[DemoEntry<C>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry targeted by `add` / `description`, if any.
    pub fn current(&self) -> Option<&DemoEntry<C>> {
        self.current.and_then(|idx| self.entries.get(idx))
    }

    pub fn mini_apps(&self) -> impl Iterator<Item = &DemoEntry<C>> {
        self.entries.iter().filter(|entry| entry.is_mini_app())
    }

    /// First mini-app, in registration order, whose URL prefix starts `url`.
    pub fn first_mini_app_by_url(&self, url: &str) -> Option<&DemoEntry<C>> {
        let found = self.entries.iter().find(|entry| entry.matches_url(url));
        debug!(registry = %self.name, url, found = found.is_some(), "mini-app lookup");
        found
    }

    pub fn find_by_name(&self, name: &str) -> Option<&DemoEntry<C>> {
        self.entries.iter().find(|entry| entry.name().as_str() == name)
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry<u32> {
        Registry::new("unit")
    }

    #[test]
    fn register_marks_entry_current() {
        let mut r = registry();
        assert!(r.current().is_none());
        r.register_as_tabs("Tabs", |_| Ok(())).expect("register");
        assert_eq!(r.current().map(|e| e.name().as_str()), Some("Tabs"));
        r.register_single("One", |_| Ok(())).expect("register");
        assert_eq!(r.current().map(|e| e.name().as_str()), Some("One"));
    }

    #[test]
    fn items_go_to_most_recent_entry() {
        let mut r = registry();
        r.register_as_rows("A", |r| {
            r.add("a1", 1)?;
            Ok(())
        })
        .expect("register A");
        r.register_as_rows("B", |_| Ok(())).expect("register B");
        r.add("b1", 2).expect("add after configure");

        assert_eq!(r.find_by_name("A").expect("A").items().len(), 1);
        let b = r.find_by_name("B").expect("B");
        assert_eq!(b.items().len(), 1);
        assert_eq!(b.items()[0].component, 2);
    }

    #[test]
    fn nested_registration_switches_current() {
        let mut r = registry();
        r.register_as_grid("Outer", 80, |r| {
            r.add("before", 1)?;
            r.register_single("Inner", |r| {
                r.add("inner", 2)?;
                Ok(())
            })?;
            r.add("after", 3)?;
            Ok(())
        })
        .expect("register");

        let outer = r.find_by_name("Outer").expect("Outer");
        let inner = r.find_by_name("Inner").expect("Inner");
        assert_eq!(outer.items().len(), 1);
        assert_eq!(inner.items().len(), 2);
        assert_eq!(r.names(), ["Outer", "Inner"]);
    }

    #[test]
    fn description_overwrites() {
        let mut r = registry();
        r.register_as_tabs("T", |r| {
            r.description("first")?.description("second")?;
            Ok(())
        })
        .expect("register");
        assert_eq!(r.find_by_name("T").and_then(|e| e.description()), Some("second"));
    }

    #[test]
    fn empty_item_description_is_absent() {
        let mut r = registry();
        r.register_single("S", |r| {
            r.add_described("s", 0, "")?;
            r.add_described("t", 1, "**bold**")?;
            Ok(())
        })
        .expect("register");
        let items = r.find_by_name("S").expect("S").items();
        assert_eq!(items[0].description, None);
        assert_eq!(items[1].description.as_deref(), Some("**bold**"));
    }

    #[test]
    fn configurator_error_propagates_and_keeps_entry() {
        let mut r = registry();
        let err = r
            .register_as_rows("A", |r| {
                r.register_as_rows("A", |_| Ok(()))?;
                Ok(())
            })
            .unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateName { .. }));
        assert_eq!(r.names(), ["A"]);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn empty_registry_queries() {
        let r = registry();
        assert!(r.is_empty());
        assert!(r.names().is_empty());
        assert!(r.find_by_name("x").is_none());
        assert!(r.first_mini_app_by_url("/").is_none());
        assert_eq!(r.mini_apps().count(), 0);
    }
}
