//! Section and item model for the settings screen.
//!
//! Both enums are closed: every dispatch site in the crate matches
//! without a wildcard arm, so adding a variant fails to build until each
//! site handles it.

pub mod icons;

use serde::Serialize;

use crate::model::icons::Icon;
use crate::source::SectionModel;

/// A titled group of renderable items, one of three kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SettingsSection {
    /// Items that carry an icon next to their label
    ImageProvidable {
        title: String,
        items: Vec<SectionItem>,
    },
    /// Items with a binary on/off control
    Toggleable {
        title: String,
        items: Vec<SectionItem>,
    },
    /// Items with stepper controls
    Stepperable {
        title: String,
        items: Vec<SectionItem>,
    },
}

/// One renderable row. Items are owned by their section and hold no
/// back-reference to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SectionItem {
    Image { icon: Icon, title: String },
    Toggle { title: String, enabled: bool },
    Stepper { title: String },
}

impl SectionModel for SettingsSection {
    type Item = SectionItem;

    fn title(&self) -> &str {
        match self {
            SettingsSection::ImageProvidable { title, .. } => title,
            SettingsSection::Toggleable { title, .. } => title,
            SettingsSection::Stepperable { title, .. } => title,
        }
    }

    fn items(&self) -> &[SectionItem] {
        match self {
            SettingsSection::ImageProvidable { items, .. } => items,
            SettingsSection::Toggleable { items, .. } => items,
            SettingsSection::Stepperable { items, .. } => items,
        }
    }

    fn with_items(&self, items: Vec<SectionItem>) -> Self {
        // Each arm rebuilds its own variant so the title survives the copy.
        match self {
            SettingsSection::ImageProvidable { title, .. } => SettingsSection::ImageProvidable {
                title: title.clone(),
                items,
            },
            SettingsSection::Toggleable { title, .. } => SettingsSection::Toggleable {
                title: title.clone(),
                items,
            },
            SettingsSection::Stepperable { title, .. } => SettingsSection::Stepperable {
                title: title.clone(),
                items,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::discriminant;

    fn sample_sections() -> Vec<SettingsSection> {
        vec![
            SettingsSection::ImageProvidable {
                title: "Section 1".to_string(),
                items: vec![SectionItem::Image {
                    icon: Icon::named("settings").unwrap(),
                    title: "General".to_string(),
                }],
            },
            SettingsSection::Toggleable {
                title: "Section 2".to_string(),
                items: vec![SectionItem::Toggle {
                    title: "On".to_string(),
                    enabled: true,
                }],
            },
            SettingsSection::Stepperable {
                title: "Section 3".to_string(),
                items: vec![SectionItem::Stepper {
                    title: "1".to_string(),
                }],
            },
        ]
    }

    #[test]
    fn test_projections_match_construction() {
        let sections = sample_sections();

        assert_eq!(sections[0].title(), "Section 1");
        assert_eq!(sections[1].title(), "Section 2");
        assert_eq!(sections[2].title(), "Section 3");

        assert_eq!(sections[0].items().len(), 1);
        assert!(matches!(sections[0].items()[0], SectionItem::Image { .. }));
        assert!(matches!(
            sections[1].items()[0],
            SectionItem::Toggle { enabled: true, .. }
        ));
        assert!(matches!(sections[2].items()[0], SectionItem::Stepper { .. }));
    }

    #[test]
    fn test_with_items_keeps_title_and_kind() {
        let replacement = vec![
            SectionItem::Stepper {
                title: "9".to_string(),
            },
            SectionItem::Toggle {
                title: "Other".to_string(),
                enabled: false,
            },
        ];

        // Every variant must keep its own title and kind when rebuilt
        for section in sample_sections() {
            let rebuilt = section.with_items(replacement.clone());
            assert_eq!(rebuilt.title(), section.title());
            assert_eq!(rebuilt.items(), replacement.as_slice());
            assert_eq!(discriminant(&rebuilt), discriminant(&section));
        }
    }

    #[test]
    fn test_with_items_accepts_empty_list() {
        let section = &sample_sections()[0];
        let rebuilt = section.with_items(Vec::new());
        assert_eq!(rebuilt.title(), "Section 1");
        assert!(rebuilt.items().is_empty());
    }
}
