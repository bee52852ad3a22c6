use crate::chart::surface::Rgb;
use crate::db::Theme;

/// Theme-dependent colors read by the chart renderers on every draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub grid: Rgb,
    pub text: Rgb,
    pub pie_text: Rgb,
    pub pie_border: Rgb,
    pub background: Rgb,
}

impl Palette {
    pub const LIGHT: Self = Self {
        grid: Rgb(0xe0, 0xe6, 0xed),
        text: Rgb(0x7f, 0x8c, 0x8d),
        pie_text: Rgb(0x2c, 0x3e, 0x50),
        pie_border: Rgb::WHITE,
        background: Rgb::WHITE,
    };

    pub const DARK: Self = Self {
        grid: Rgb(0x2a, 0x2a, 0x3e),
        text: Rgb(0xb8, 0xb8, 0xb8),
        pie_text: Rgb(0xea, 0xea, 0xea),
        pie_border: Rgb(0x16, 0x21, 0x3e),
        background: Rgb(0x16, 0x21, 0x3e),
    };

    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }
}
