//! Built-in demo catalog: one [`Registry`] per showcase section.
//!
//! The renderable unit is a [`Preview`], a plain function producing a text
//! rendition of the component.

use showcase_core::{Layout, LayoutOptions, Registry, RegistryError};

/// Text preview of a showcased component.
pub type Preview = fn() -> String;

pub type Section = Registry<Preview>;

/// Builds every section in display order.
pub fn build() -> Result<Vec<Section>, RegistryError> {
    Ok(vec![components()?, layouts()?, apps()?])
}

/// Builds the catalog, keeping only sections named in `allow` (all when `None`).
pub fn build_filtered(allow: Option<&[String]>) -> Result<Vec<Section>, RegistryError> {
    let mut sections = build()?;
    if let Some(allow) = allow {
        sections.retain(|s| allow.iter().any(|name| name == s.name()));
    }
    Ok(sections)
}

fn components() -> Result<Section, RegistryError> {
    let mut r: Section = Registry::new("components");
    r.register_as_grid("Buttons", 120, |r| {
        r.description("Clickable actions in three emphasis levels.")?;
        r.add("primary", || "[ Save ]".to_string())?;
        r.add("secondary", || "( Cancel )".to_string())?;
        r.add_described("link", || "_Learn more_".to_string(), "Inline, no border.")?;
        Ok(())
    })?
    .register_as_two_column_table("Inputs", |r| {
        r.description("Single-line inputs, one state per row.")?;
        r.add("empty", || "[__________]".to_string())?;
        r.add("filled", || "[hello_____]".to_string())?;
        r.add_described("disabled", || "[##########]".to_string(), "Not focusable.")?;
        Ok(())
    })?
    .register_as_rows("Typography", |r| {
        r.add("heading", || "# Heading".to_string())?;
        r.add("body", || "Body copy set in the default face.".to_string())?;
        r.add("caption", || "caption text".to_string())?;
        Ok(())
    })?;
    Ok(r)
}

fn layouts() -> Result<Section, RegistryError> {
    let mut card_options = LayoutOptions::new();
    card_options.insert("gap".into(), serde_json::json!(16));
    card_options.insert("equalHeight".into(), serde_json::json!(true));

    let mut r: Section = Registry::new("layouts");
    r.register_as_tabs("Tabs", |r| {
        r.description("Each item becomes a tab.")?;
        r.add("overview", || "| Overview | Details |".to_string())?;
        r.add("details", || "| Overview | *Details* |".to_string())?;
        Ok(())
    })?
    .register("Cards", Layout::Grid { min_width: 200 }, None, card_options, |r| {
        r.add("plain", || "+-------+\n| card  |\n+-------+".to_string())?;
        r.add("elevated", || "+-------+\n| card  |#\n+-------+#".to_string())?;
        Ok(())
    })?
    .register_single("Spinner", |r| {
        r.add("spinner", || "⠋ loading".to_string())?;
        Ok(())
    })?;
    Ok(r)
}

fn apps() -> Result<Section, RegistryError> {
    let mut r: Section = Registry::new("apps");
    r.register_as_mini_app("Todo", "/apps/todo", |r| {
        r.description("A todo list running as a standalone app.")?;
        r.add("todo", || "[x] write registry\n[ ] ship it".to_string())?;
        Ok(())
    })?
    .register_as_mini_app("Clock", "/apps/clock", |r| {
        r.add("clock", || "12:00:00".to_string())?;
        Ok(())
    })?;
    Ok(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_builds_without_conflicts() {
        let sections = build().expect("build");
        let names: Vec<&str> = sections.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["components", "layouts", "apps"]);
        assert!(sections.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn filter_keeps_allowed_sections() {
        let allow = vec!["apps".to_string()];
        let sections = build_filtered(Some(allow.as_slice())).expect("build");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].name(), "apps");
    }

    #[test]
    fn previews_render() {
        let sections = build().expect("build");
        let buttons = sections[0].find_by_name("Buttons").expect("Buttons");
        assert_eq!((buttons.items()[0].component)(), "[ Save ]");
    }
}
