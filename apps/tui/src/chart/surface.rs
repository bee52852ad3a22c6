use std::fmt;
use std::str::FromStr;

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Self = Self(0xff, 0xff, 0xff);

    /// Parses `#rrggbb`; anything else falls back to gray.
    pub fn hex(value: &str) -> Self {
        value.parse().unwrap_or(Self(0x80, 0x80, 0x80))
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| format!("color {s} must start with #"))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(format!("color {s} must have six hex digits"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| format!("color {s}: {e}"))
        };
        Ok(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Drawing primitives the chart renderers need. Coordinates are pixels with
/// the origin at the top-left corner and y growing downwards; angles are
/// radians measured clockwise from the positive x axis.
pub trait DrawSurface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn clear(&mut self);
    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, width: f64);
    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb);
    fn fill_wedge(&mut self, center: (f64, f64), radius: f64, start: f64, end: f64, color: Rgb);
    fn stroke_wedge(
        &mut self,
        center: (f64, f64),
        radius: f64,
        start: f64,
        end: f64,
        color: Rgb,
        width: f64,
    );
    /// Draws `text` horizontally centered on `at`.
    fn fill_text(&mut self, text: &str, at: (f64, f64), color: Rgb, weight: FontWeight);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Rgb,
        width: f64,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        color: Rgb,
    },
    Wedge {
        center: (f64, f64),
        radius: f64,
        start: f64,
        end: f64,
        color: Rgb,
        filled: bool,
    },
    Text {
        text: String,
        at: (f64, f64),
        color: Rgb,
        weight: FontWeight,
    },
}

/// A surface that records primitives for a backend to replay later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    width: f64,
    height: f64,
    primitives: Vec<Primitive>,
}

impl DrawList {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            primitives: Vec::new(),
        }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl DrawSurface for DrawList {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear(&mut self) {
        self.primitives.clear();
    }

    fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Rgb, width: f64) {
        self.primitives.push(Primitive::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb) {
        self.primitives.push(Primitive::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_wedge(&mut self, center: (f64, f64), radius: f64, start: f64, end: f64, color: Rgb) {
        self.primitives.push(Primitive::Wedge {
            center,
            radius,
            start,
            end,
            color,
            filled: true,
        });
    }

    fn stroke_wedge(
        &mut self,
        center: (f64, f64),
        radius: f64,
        start: f64,
        end: f64,
        color: Rgb,
        _width: f64,
    ) {
        self.primitives.push(Primitive::Wedge {
            center,
            radius,
            start,
            end,
            color,
            filled: false,
        });
    }

    fn fill_text(&mut self, text: &str, at: (f64, f64), color: Rgb, weight: FontWeight) {
        self.primitives.push(Primitive::Text {
            text: text.to_string(),
            at,
            color,
            weight,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!("#667eea".parse::<Rgb>(), Ok(Rgb(0x66, 0x7e, 0xea)));
        assert_eq!(Rgb::hex("#FFFFFF"), Rgb::WHITE);
        assert!("667eea".parse::<Rgb>().is_err());
        assert!("#12345".parse::<Rgb>().is_err());
        assert_eq!(Rgb(0x16, 0x21, 0x3e).to_string(), "#16213e");
    }

    #[test]
    fn clear_discards_recorded_primitives() {
        let mut list = DrawList::new(100.0, 50.0);
        list.fill_circle((1.0, 1.0), 2.0, Rgb::WHITE);
        list.fill_text("x", (0.0, 0.0), Rgb::WHITE, FontWeight::Normal);
        assert_eq!(list.primitives().len(), 2);
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["x"]);
        list.clear();
        assert!(list.primitives().is_empty());
    }
}
