//! Showcase core library: demo registry, domain types and manifest export.
//!
//! Public API surface:
//! - [`types`]: [`DemoName`], [`Layout`], [`DemoEntry`], [`DemoItem`]
//! - [`error`]: [`RegistryError`], [`ManifestError`]
//! - [`registry`]: [`Registry`], registration and lookup
//! - [`manifest`]: component-free catalog snapshots (YAML / JSON)

pub mod error;
pub mod manifest;
pub mod registry;
pub mod types;

pub use error::{EntryOperation, ManifestError, RegistryError};
pub use manifest::{CatalogManifest, EntryManifest, ItemManifest, ManifestFormat};
pub use registry::Registry;
pub use types::{DemoEntry, DemoItem, DemoName, Layout, LayoutOptions};
