//! Theme colors for the UI
//! Reads kitty.conf-style overrides from ~/.config/settei/theme.conf

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;

/// Theme colors for the screen
#[derive(Debug, Clone)]
pub struct Theme {
    pub accent: Color,   // Icons, key hints
    pub success: Color,  // Toggles in the on state
    pub text: Color,     // Primary text (foreground)
    pub text_dim: Color, // Dimmed text, off-state toggles (color8)
    pub inactive: Color, // Section borders
    pub header: Color,   // Section header titles
}

impl Default for Theme {
    fn default() -> Self {
        // Catppuccin-inspired fallback when no theme file exists
        Self {
            accent: Color::Rgb(250, 179, 135),
            success: Color::Rgb(166, 218, 149),
            text: Color::Rgb(205, 214, 244),
            text_dim: Color::Rgb(147, 153, 178),
            inactive: Color::Rgb(88, 91, 112),
            header: Color::Rgb(243, 139, 168),
        }
    }
}

impl Theme {
    /// Load the user theme file, falling back to defaults
    pub fn load() -> Self {
        if let Some(theme) = Self::load_theme_file() {
            return theme;
        }

        Self::default()
    }

    fn load_theme_file() -> Option<Self> {
        let path = dirs::config_dir()?.join("settei").join("theme.conf");

        let content = fs::read_to_string(&path).ok()?;
        let colors = Self::parse_kitty_conf(&content);

        if colors.is_empty() {
            return None;
        }

        let fallback = Self::default();

        Some(Self {
            accent: colors.get("color2").or(colors.get("color10"))
                .copied().unwrap_or(fallback.accent),
            success: colors.get("color10").or(colors.get("color2"))
                .copied().unwrap_or(fallback.success),
            text: colors.get("foreground")
                .copied().unwrap_or(fallback.text),
            text_dim: colors.get("color8")
                .copied().unwrap_or(fallback.text_dim),
            inactive: colors.get("inactive_border_color").or(colors.get("color8"))
                .copied().unwrap_or(fallback.inactive),
            header: colors.get("color1")
                .copied().unwrap_or(fallback.header),
        })
    }

    /// Parse kitty.conf format: `key value` or `key #hexcolor`
    fn parse_kitty_conf(content: &str) -> HashMap<String, Color> {
        let mut colors = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.splitn(2, char::is_whitespace).collect();
            if parts.len() == 2 {
                let key = parts[0].trim();
                let value = parts[1].trim();

                if let Some(color) = Self::parse_hex_color(value) {
                    colors.insert(key.to_string(), color);
                }
            }
        }

        colors
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(Theme::parse_hex_color("#ffc107"), Some(Color::Rgb(255, 193, 7)));
        assert_eq!(Theme::parse_hex_color("121212"), Some(Color::Rgb(18, 18, 18)));
        assert_eq!(Theme::parse_hex_color("#f00"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(Theme::parse_hex_color("not-a-color"), None);
        assert_eq!(Theme::parse_hex_color("#ff"), None);
    }

    #[test]
    fn test_parse_kitty_conf_skips_comments_and_blanks() {
        let conf = "\
# a comment
foreground #bebebe

color8 #8a8a8d
badline
cursor notacolor
";
        let colors = Theme::parse_kitty_conf(conf);
        assert_eq!(colors.len(), 2);
        assert_eq!(colors.get("foreground"), Some(&Color::Rgb(190, 190, 190)));
        assert_eq!(colors.get("color8"), Some(&Color::Rgb(138, 138, 141)));
    }
}
