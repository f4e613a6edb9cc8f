use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::binding;
use crate::config::AppConfig;
use crate::model::icons::{self, Icon};
use crate::model::{SectionItem, SettingsSection};
use crate::render::cells::CellPool;
use crate::source::ReloadSource;

pub struct App {
    /// Data source the table host reads during layout
    pub source: ReloadSource<SettingsSection>,

    /// Reusable cells, recycled every frame
    pub pool: CellPool,

    /// Display preference, toggled with 'a' at runtime
    pub ascii_icons: bool,
}

impl App {
    pub async fn new(config: AppConfig) -> Result<Self> {
        let sections = screen_sections(&config);

        // One-shot pipeline: produced once, delivered once, both channel
        // halves release on drop.
        let (tx, rx) = binding::channel();
        binding::emit(tx, sections)?;

        let mut source = ReloadSource::new();
        binding::bind_once(rx, &mut source).await?;

        Ok(Self {
            source,
            pool: CellPool::new(),
            ascii_icons: config.ascii_icons,
        })
    }

    /// Display preferences only; the section list never changes after the
    /// initial binding. Quit keys are handled in the main loop.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let KeyCode::Char('a') = key.code {
            self.ascii_icons = !self.ascii_icons;
        }
    }
}

/// The demo screen content.
///
/// Icon names resolve against the registry with placeholder substitution,
/// so a bad name degrades to a stand-in glyph instead of failing.
pub fn screen_sections(config: &AppConfig) -> Vec<SettingsSection> {
    let fallback = config
        .placeholder_icon
        .as_deref()
        .and_then(|name| Icon::named(name).ok())
        .unwrap_or_else(Icon::placeholder);

    vec![
        SettingsSection::ImageProvidable {
            title: "Section 1".to_string(),
            items: vec![
                SectionItem::Image {
                    icon: icons::resolve("settings", &fallback),
                    title: "General".to_string(),
                },
                SectionItem::Image {
                    icon: icons::resolve("network", &fallback),
                    title: "Network".to_string(),
                },
                SectionItem::Image {
                    icon: icons::resolve("display", &fallback),
                    title: "Display".to_string(),
                },
            ],
        },
        SettingsSection::Toggleable {
            title: "Section 2".to_string(),
            items: vec![
                SectionItem::Toggle {
                    title: "On".to_string(),
                    enabled: true,
                },
                SectionItem::Toggle {
                    title: "Notifications".to_string(),
                    enabled: false,
                },
            ],
        },
        SettingsSection::Stepperable {
            title: "Section 3".to_string(),
            items: vec![SectionItem::Stepper {
                title: "1".to_string(),
            }],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SectionModel;

    #[tokio::test]
    async fn test_new_binds_screen_sections() {
        let app = App::new(AppConfig::default()).await.unwrap();

        assert_eq!(app.source.sections().len(), 3);
        assert_eq!(app.source.header_title(0), "Section 1");
        assert_eq!(app.source.header_title(1), "Section 2");
        assert_eq!(app.source.header_title(2), "Section 3");
        assert!(app.pool.is_empty());
    }

    #[test]
    fn test_bad_placeholder_choice_falls_back() {
        let config = AppConfig {
            ascii_icons: false,
            placeholder_icon: Some("nonexistent".to_string()),
        };

        // Sections still build; every image item carries a real icon
        for section in screen_sections(&config) {
            for item in section.items() {
                if let SectionItem::Image { icon, .. } = item {
                    assert!(!icon.glyph(false).is_empty());
                }
            }
        }
    }

    #[test]
    fn test_ascii_toggle_key() {
        let mut app = App {
            source: ReloadSource::new(),
            pool: CellPool::new(),
            ascii_icons: false,
        };

        app.handle_key(KeyEvent::from(KeyCode::Char('a')));
        assert!(app.ascii_icons);
        app.handle_key(KeyEvent::from(KeyCode::Char('x')));
        assert!(app.ascii_icons);
    }
}
