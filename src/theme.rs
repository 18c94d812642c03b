use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default)]
pub struct Theme {
    // Background transparency setting
    #[serde(default)]
    pub transparent_backgrounds: bool,

    // Background colors
    pub base: Option<[u8; 3]>,
    pub surface0: Option<[u8; 3]>,

    // Content colors
    pub text: Option<[u8; 3]>,
    pub subtext0: Option<[u8; 3]>,

    // Active tab highlight
    pub mauve: Option<[u8; 3]>,
    pub active_tab_fg: Option<[u8; 3]>,
}

impl Theme {
    fn color(&self, rgb: Option<[u8; 3]>, default: Color) -> Color {
        rgb.map_or(default, |[r, g, b]| Color::Rgb(r, g, b))
    }

    pub fn bg_color(&self, rgb: Option<[u8; 3]>) -> Color {
        if self.transparent_backgrounds {
            Color::Reset
        } else {
            self.color(rgb, Color::Reset)
        }
    }

    pub fn base_color(&self) -> Color {
        self.bg_color(self.base)
    }

    pub fn surface0_color(&self) -> Color {
        self.bg_color(self.surface0)
    }

    pub fn text_color(&self) -> Color {
        self.color(self.text, Color::White)
    }

    pub fn subtext0_color(&self) -> Color {
        self.color(self.subtext0, Color::Gray)
    }

    pub fn accent_color(&self) -> Color {
        self.color(self.mauve, Color::Cyan)
    }

    pub fn active_tab_fg_color(&self) -> Color {
        self.color(self.active_tab_fg, Color::Black)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_colors() {
        let theme = Theme::default();
        assert_eq!(theme.base_color(), Color::Reset);
        assert_eq!(theme.text_color(), Color::White);
        assert_eq!(theme.accent_color(), Color::Cyan);
    }

    #[test]
    fn test_theme_from_toml() {
        let theme: Theme = toml::from_str("mauve = [203, 166, 247]\nbase = [30, 30, 46]\n").unwrap();
        assert_eq!(theme.accent_color(), Color::Rgb(203, 166, 247));
        assert_eq!(theme.base_color(), Color::Rgb(30, 30, 46));
    }

    #[test]
    fn test_transparent_backgrounds() {
        let theme: Theme =
            toml::from_str("transparent_backgrounds = true\nbase = [30, 30, 46]\n").unwrap();
        assert_eq!(theme.base_color(), Color::Reset);
    }
}
