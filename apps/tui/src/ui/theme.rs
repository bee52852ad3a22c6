use kpi_dashboard::chart::Rgb;
use kpi_dashboard::db::Theme;
use ratatui::style::{Color, Modifier, Style};

pub const fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Colors of the dashboard chrome for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Styles {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub success: Color,
    pub error: Color,
}

impl Styles {
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::Rgb(0xf5, 0xf7, 0xfa),
                surface: Color::Rgb(0xff, 0xff, 0xff),
                text: Color::Rgb(0x2c, 0x3e, 0x50),
                muted: Color::Rgb(0x7f, 0x8c, 0x8d),
                border: Color::Rgb(0xbd, 0xc3, 0xc7),
                accent: Color::Rgb(0x66, 0x7e, 0xea),
                success: Color::Rgb(0x27, 0xae, 0x60),
                error: Color::Rgb(0xe7, 0x4c, 0x3c),
            },
            Theme::Dark => Self {
                background: Color::Rgb(0x1a, 0x1a, 0x2e),
                surface: Color::Rgb(0x16, 0x21, 0x3e),
                text: Color::Rgb(0xea, 0xea, 0xea),
                muted: Color::Rgb(0xb8, 0xb8, 0xb8),
                border: Color::Rgb(0x2a, 0x2a, 0x3e),
                accent: Color::Rgb(0x76, 0x4b, 0xa2),
                success: Color::Rgb(0x2e, 0xcc, 0x71),
                error: Color::Rgb(0xff, 0x6b, 0x6b),
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn panel(&self) -> Style {
        Style::default().bg(self.surface).fg(self.text)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.accent)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(self.muted)
    }
}
