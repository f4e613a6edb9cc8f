//! Sectioned settings data bound to table views.
//!
//! A heterogeneous section/item model ([`model`]) is emitted once through
//! a single-value channel ([`binding`]), installed into a generic
//! sectioned-reload data source ([`source`]), and rendered as titled
//! tables through a reusable cell pool with exhaustive per-variant
//! dispatch ([`render`]). The binary in `main.rs` wires the demo screen.

pub mod app;
pub mod binding;
pub mod config;
pub mod model;
pub mod render;
pub mod source;
pub mod theme;

pub use binding::BindError;
pub use model::icons::ResourceError;
pub use model::{SectionItem, SettingsSection};
pub use source::{ReloadSource, SectionModel};
