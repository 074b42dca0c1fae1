use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{Category, UiConfig};
use crate::ops::classify::AVATAR_PALETTE_LEN;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub unread: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub cyan: Color,
    pub purple: Color,
    pub blue: Color,
    pub selection_bg: Color,
    pub cursor_bg: Color,
    /// Per-category chip colors
    pub category_colors: HashMap<Category, Color>,
    pub avatar_colors: [Color; AVATAR_PALETTE_LEN],
}

impl Default for Theme {
    fn default() -> Self {
        let blue = Color::Rgb(0x44, 0x88, 0xFF);
        let cyan = Color::Rgb(0x44, 0xDD, 0xFF);
        let green = Color::Rgb(0x44, 0xFF, 0x88);
        let red = Color::Rgb(0xFF, 0x44, 0x44);
        let yellow = Color::Rgb(0xFF, 0xD7, 0x00);
        let purple = Color::Rgb(0xCC, 0x66, 0xFF);

        let mut category_colors = HashMap::new();
        category_colors.insert(Category::Important, red);
        category_colors.insert(Category::Shared, purple);
        category_colors.insert(Category::Calendar, yellow);
        category_colors.insert(Category::News, blue);
        category_colors.insert(Category::Github, Color::Rgb(0xDA, 0xB8, 0xF0));
        category_colors.insert(Category::Linear, cyan);
        category_colors.insert(Category::Engineering, green);
        category_colors.insert(Category::Other, Color::Rgb(0x7D, 0x78, 0xBF));

        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            panel: Color::Rgb(0x16, 0x08, 0x2A),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            unread: Color::Rgb(0x6E, 0x8B, 0xFF),
            red,
            yellow,
            green,
            cyan,
            purple,
            blue,
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            cursor_bg: Color::Rgb(0x24, 0x12, 0x3C),
            category_colors,
            avatar_colors: [
                purple,
                blue,
                green,
                Color::Rgb(0xFF, 0xA0, 0x44),
                Color::Rgb(0xFF, 0x77, 0xC8),
                cyan,
            ],
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults. Unknown keys
    /// and malformed colors are ignored.
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring color {}={:?}: not #RRGGBB", key, value);
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "panel" => theme.panel = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "unread" => theme.unread = color,
                "red" => theme.red = color,
                "yellow" => theme.yellow = color,
                "green" => theme.green = color,
                "cyan" => theme.cyan = color,
                "purple" => theme.purple = color,
                "blue" => theme.blue = color,
                "selection_bg" => theme.selection_bg = color,
                "cursor_bg" => theme.cursor_bg = color,
                _ => log::warn!("ignoring unknown color slot {}", key),
            }
        }

        for (id, value) in &ui.category_colors {
            match (id.parse::<Category>(), parse_hex_color(value)) {
                (Ok(category), Some(color)) => {
                    theme.category_colors.insert(category, color);
                }
                _ => log::warn!("ignoring category color {}={:?}", id, value),
            }
        }

        theme
    }

    /// Chip color for a category, falling back to text color
    pub fn category_color(&self, category: Category) -> Color {
        self.category_colors
            .get(&category)
            .copied()
            .unwrap_or(self.text)
    }

    pub fn avatar_color(&self, slot: usize) -> Color {
        self.avatar_colors[slot % AVATAR_PALETTE_LEN]
    }
}
