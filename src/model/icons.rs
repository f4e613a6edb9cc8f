//! Named icon resources with recoverable lookup.
//!
//! The registry is a fixed table of Nerd Font glyphs with plain-ascii
//! fallbacks for terminals without patched fonts. Looking up a name that
//! is not in the table is an error, not a crash: callers go through
//! [`resolve`] which substitutes a placeholder and logs a warning.

use serde::Serialize;
use thiserror::Error;

/// Lookup failure for a named display resource.
#[derive(Debug, Error, PartialEq)]
pub enum ResourceError {
    #[error("no icon resource named '{0}'")]
    MissingIcon(String),
}

/// Registry of named icons: (name, nerd font glyph, ascii fallback)
const ICONS: &[(&str, &str, &str)] = &[
    ("settings", "󰒓", "*"),
    ("network", "󰛳", "@"),
    ("power", "󰐥", "!"),
    ("display", "󰍹", "#"),
];

/// A resolved icon resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Icon {
    pub name: String,
    glyph: &'static str,
    ascii: &'static str,
}

impl Icon {
    /// Look up a registry icon by name.
    pub fn named(name: &str) -> Result<Self, ResourceError> {
        ICONS
            .iter()
            .find(|entry| entry.0 == name)
            .map(|&(n, glyph, ascii)| Self {
                name: n.to_string(),
                glyph,
                ascii,
            })
            .ok_or_else(|| ResourceError::MissingIcon(name.to_string()))
    }

    /// Stand-in shown when a named resource is missing.
    pub fn placeholder() -> Self {
        Self {
            name: "placeholder".to_string(),
            glyph: "󰘥",
            ascii: "?",
        }
    }

    pub fn glyph(&self, ascii: bool) -> &str {
        if ascii {
            self.ascii
        } else {
            self.glyph
        }
    }
}

/// Resolve a named icon, substituting `fallback` when the name is unknown.
pub fn resolve(name: &str, fallback: &Icon) -> Icon {
    match Icon::named(name) {
        Ok(icon) => icon,
        Err(e) => {
            tracing::warn!("{}, substituting '{}'", e, fallback.name);
            fallback.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve() {
        for name in ["settings", "network", "power", "display"] {
            let icon = Icon::named(name).unwrap();
            assert_eq!(icon.name, name);
            assert!(!icon.glyph(false).is_empty());
            assert!(!icon.glyph(true).is_empty());
        }
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let err = Icon::named("does-not-exist").unwrap_err();
        assert_eq!(err, ResourceError::MissingIcon("does-not-exist".to_string()));
    }

    #[test]
    fn test_resolve_substitutes_fallback() {
        let fallback = Icon::placeholder();
        assert_eq!(resolve("does-not-exist", &fallback), fallback);

        // A known name is unaffected by the fallback
        assert_eq!(
            resolve("settings", &fallback),
            Icon::named("settings").unwrap()
        );
    }

    #[test]
    fn test_ascii_fallback_differs_from_glyph() {
        let icon = Icon::named("settings").unwrap();
        assert_ne!(icon.glyph(true), icon.glyph(false));
    }
}
