//! Theme colors for the terminal UI

use folio_core::Theme;

/// RGB triples used by the components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: (u8, u8, u8),
    pub foreground: (u8, u8, u8),
    pub muted: (u8, u8, u8),
    pub accent: (u8, u8, u8),
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: (18, 18, 20),
                foreground: (232, 230, 227),
                muted: (128, 128, 132),
                accent: (0, 215, 135),
            },
            Theme::Light => Self {
                background: (246, 244, 239),
                foreground: (28, 28, 30),
                muted: (120, 118, 112),
                accent: (0, 135, 90),
            },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

/// Convert an RGB triple to an iocraft color
pub fn rgb(color: (u8, u8, u8)) -> iocraft::prelude::Color {
    iocraft::prelude::Color::Rgb {
        r: color.0,
        g: color.1,
        b: color.2,
    }
}
