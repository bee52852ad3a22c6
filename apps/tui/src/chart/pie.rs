use crate::chart::palette::Palette;
use crate::chart::surface::{DrawSurface, FontWeight, Rgb};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Distance of slice labels beyond the rim.
pub const LABEL_OFFSET: f64 = 35.0;
/// Gap between a slice label and its percentage.
pub const PERCENT_LINE_GAP: f64 = 15.0;
pub const BORDER_WIDTH: f64 = 2.0;
/// Slices start at twelve o'clock.
pub const START_ANGLE: f64 = -FRAC_PI_2;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Offset from `START_ANGLE`, radians clockwise.
    pub start: f64,
    pub sweep: f64,
}

impl PieSlice {
    pub fn bisector(&self) -> f64 {
        START_ANGLE + self.start + self.sweep / 2.0
    }
}

/// Geometry of the last pie drawn, kept for hit-testing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieGeometry {
    pub center: (f64, f64),
    pub radius: f64,
    pub total: f64,
    pub slices: Vec<PieSlice>,
}

impl PieGeometry {
    pub fn percent(&self, value: f64) -> f64 {
        percent_of(value, self.total)
    }
}

/// Whole-number share of `total`, zero when there is nothing to share.
pub fn percent_of(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        (value / total * 100.0).round()
    } else {
        0.0
    }
}

pub fn pie_radius(width: f64, height: f64) -> f64 {
    width.min(height) / 3.0
}

pub fn draw_pie_chart(
    surface: &mut dyn DrawSurface,
    values: &[f64],
    labels: &[&str],
    colors: &[Rgb],
    palette: &Palette,
) -> PieGeometry {
    let width = surface.width();
    let height = surface.height();
    let center = (width / 2.0, height / 2.0);
    let radius = pie_radius(width, height);

    surface.clear();

    let total: f64 = values.iter().filter(|value| value.is_finite()).sum();
    let mut geometry = PieGeometry {
        center,
        radius,
        total,
        slices: Vec::with_capacity(values.len()),
    };

    if total <= 0.0 {
        surface.stroke_wedge(center, radius, 0.0, TAU, palette.pie_border, BORDER_WIDTH);
        return geometry;
    }

    let mut offset = 0.0;
    for (index, value) in values.iter().enumerate() {
        let value = if value.is_finite() { *value } else { 0.0 };
        let sweep = value / total * TAU;
        let start = START_ANGLE + offset;
        let color = if colors.is_empty() {
            palette.text
        } else {
            colors[index % colors.len()]
        };

        surface.fill_wedge(center, radius, start, start + sweep, color);
        surface.stroke_wedge(
            center,
            radius,
            start,
            start + sweep,
            palette.pie_border,
            BORDER_WIDTH,
        );

        let label = labels.get(index).copied().unwrap_or_default();
        let slice = PieSlice {
            label: label.to_string(),
            value,
            start: offset,
            sweep,
        };

        let label_angle = slice.bisector();
        let label_x = label_angle.cos().mul_add(radius + LABEL_OFFSET, center.0);
        let label_y = label_angle.sin().mul_add(radius + LABEL_OFFSET, center.1);
        surface.fill_text(label, (label_x, label_y), palette.pie_text, FontWeight::Bold);
        surface.fill_text(
            &format!("{}%", percent_of(value, total)),
            (label_x, label_y + PERCENT_LINE_GAP),
            palette.pie_text,
            FontWeight::Normal,
        );

        geometry.slices.push(slice);
        offset += sweep;
    }

    geometry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::surface::{DrawList, Primitive};

    fn colors() -> Vec<Rgb> {
        ["#667eea", "#764ba2", "#f093fb", "#4facfe"]
            .iter()
            .map(|hex| Rgb::hex(hex))
            .collect()
    }

    #[test]
    fn slices_sweep_clockwise_from_twelve_o_clock() {
        let mut surface = DrawList::new(300.0, 300.0);
        let geometry = draw_pie_chart(
            &mut surface,
            &[40.0, 30.0, 20.0, 10.0],
            &["Direct", "Social", "Referral", "Organic"],
            &colors(),
            &Palette::LIGHT,
        );

        assert_eq!(geometry.center, (150.0, 150.0));
        assert!((geometry.radius - 100.0).abs() < 1e-9);
        assert!((geometry.total - 100.0).abs() < 1e-9);
        assert_eq!(geometry.slices.len(), 4);
        assert!((geometry.slices[0].start).abs() < 1e-12);
        assert!((geometry.slices[0].sweep - 0.4 * TAU).abs() < 1e-12);
        assert!((geometry.slices[1].start - 0.4 * TAU).abs() < 1e-12);

        let swept: f64 = geometry.slices.iter().map(|slice| slice.sweep).sum();
        assert!((swept - TAU).abs() < 1e-9);

        let first_fill = surface
            .primitives()
            .iter()
            .find_map(|p| match p {
                Primitive::Wedge {
                    start,
                    filled: true,
                    ..
                } => Some(*start),
                _ => None,
            })
            .unwrap();
        assert!((first_fill - START_ANGLE).abs() < 1e-12);
    }

    #[test]
    fn labels_carry_rounded_percentages() {
        let mut surface = DrawList::new(300.0, 300.0);
        draw_pie_chart(
            &mut surface,
            &[1.0, 2.0],
            &["A", "B"],
            &colors(),
            &Palette::DARK,
        );
        let texts: Vec<&str> = surface.texts().collect();
        assert_eq!(texts, vec!["A", "33%", "B", "67%"]);
    }

    #[test]
    fn label_sits_on_bisector_beyond_rim() {
        let mut surface = DrawList::new(300.0, 300.0);
        draw_pie_chart(&mut surface, &[1.0], &["All"], &colors(), &Palette::LIGHT);
        // one full slice: bisector points straight down
        let label = surface.primitives().iter().find_map(|p| match p {
            Primitive::Text { text, at, .. } if text == "All" => Some(*at),
            _ => None,
        });
        let (x, y) = label.unwrap();
        assert!((x - 150.0).abs() < 1e-9);
        assert!((y - (150.0 + 100.0 + LABEL_OFFSET)).abs() < 1e-9);
    }

    #[test]
    fn all_zero_data_draws_outline_only() {
        let mut surface = DrawList::new(300.0, 300.0);
        let geometry = draw_pie_chart(
            &mut surface,
            &[0.0, 0.0],
            &["A", "B"],
            &colors(),
            &Palette::LIGHT,
        );
        assert!(geometry.slices.is_empty());
        assert_eq!(surface.primitives().len(), 1);
        assert_eq!(geometry.percent(5.0), 0.0);
    }
}
