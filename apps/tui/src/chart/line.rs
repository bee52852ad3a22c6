use crate::chart::palette::Palette;
use crate::chart::surface::{DrawSurface, FontWeight, Rgb};

pub const PADDING: f64 = 40.0;
pub const GRID_LINES: u32 = 6;
pub const HEADROOM: f64 = 1.2;
pub const MARKER_RADIUS: f64 = 5.0;
pub const LINE_WIDTH: f64 = 3.0;
pub const LABEL_BASELINE: f64 = 15.0;

/// Where a data point landed on the last draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
}

/// Draws a grid, a polyline, point markers and x labels, returning the point positions.
///
/// A single value is centered horizontally; a series whose maximum is not
/// positive is drawn on the baseline.
pub fn draw_line_chart(
    surface: &mut dyn DrawSurface,
    values: &[f64],
    labels: &[&str],
    color: Rgb,
    palette: &Palette,
) -> Vec<ChartPoint> {
    let width = surface.width();
    let height = surface.height();
    let plot_height = (height - PADDING * 2.0).max(0.0);

    surface.clear();

    for i in 0..GRID_LINES {
        let y = PADDING + plot_height * f64::from(i) / f64::from(GRID_LINES - 1);
        surface.stroke_line((PADDING, y), (width - PADDING, y), palette.grid, 1.0);
    }

    let points = layout_points(values, width, height);

    for pair in points.windows(2) {
        surface.stroke_line(
            (pair[0].x, pair[0].y),
            (pair[1].x, pair[1].y),
            color,
            LINE_WIDTH,
        );
    }

    for point in &points {
        surface.fill_circle((point.x, point.y), MARKER_RADIUS, color);
    }

    for (point, label) in points.iter().zip(labels) {
        surface.fill_text(
            label,
            (point.x, height - LABEL_BASELINE),
            palette.text,
            FontWeight::Normal,
        );
    }

    points
}

/// Maps series values to pixel positions for a `width` x `height` surface.
pub fn layout_points(values: &[f64], width: f64, height: f64) -> Vec<ChartPoint> {
    let plot_width = (width - PADDING * 2.0).max(0.0);
    let plot_height = (height - PADDING * 2.0).max(0.0);

    let values: Vec<f64> = values
        .iter()
        .map(|value| if value.is_finite() { *value } else { 0.0 })
        .collect();

    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max) * HEADROOM;
    let y_scale = if max_value > 0.0 {
        plot_height / max_value
    } else {
        1.0
    };

    let count = values.len();
    let x_step = if count > 1 {
        plot_width / (count - 1) as f64
    } else {
        0.0
    };
    let x_origin = if count == 1 {
        PADDING + plot_width / 2.0
    } else {
        PADDING
    };

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let y = if max_value > 0.0 {
                value.mul_add(-y_scale, height - PADDING)
            } else {
                height - PADDING
            };
            ChartPoint {
                x: (index as f64).mul_add(x_step, x_origin),
                y,
                value: *value,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::surface::{DrawList, Primitive};

    const COLOR: Rgb = Rgb(0x66, 0x7e, 0xea);

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn maps_values_with_headroom() {
        // plot area 320 x 120, max 50 -> scale 120 / 60 = 2
        let points = layout_points(&[10.0, 50.0, 30.0], 400.0, 200.0);
        assert_eq!(points.len(), 3);
        assert_close(points[0].x, 40.0);
        assert_close(points[1].x, 200.0);
        assert_close(points[2].x, 360.0);
        assert_close(points[0].y, 200.0 - 40.0 - 20.0);
        assert_close(points[1].y, 200.0 - 40.0 - 100.0);
        assert_close(points[2].value, 30.0);
        assert!(points[1].y < points[2].y, "larger values sit higher");
    }

    #[test]
    fn draws_grid_polyline_markers_and_labels() {
        let mut surface = DrawList::new(400.0, 200.0);
        let labels = ["Mon", "Tue", "Wed"];
        let points = draw_line_chart(
            &mut surface,
            &[10.0, 50.0, 30.0],
            &labels,
            COLOR,
            &Palette::LIGHT,
        );

        let primitives = surface.primitives();
        let grid = primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line { color, .. } if *color == Palette::LIGHT.grid))
            .count();
        let segments = primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Line { color, .. } if *color == COLOR))
            .count();
        let markers = primitives
            .iter()
            .filter(|p| matches!(p, Primitive::Circle { .. }))
            .count();

        assert_eq!(grid, 6);
        assert_eq!(segments, 2);
        assert_eq!(markers, 3);
        assert_eq!(surface.texts().collect::<Vec<_>>(), labels);

        let Some(Primitive::Text { at, .. }) = primitives.last() else {
            panic!("labels are drawn last");
        };
        assert_close(at.0, points[2].x);
        assert_close(at.1, 185.0);
    }

    #[test]
    fn redraw_starts_from_scratch() {
        let mut surface = DrawList::new(400.0, 200.0);
        draw_line_chart(&mut surface, &[1.0, 2.0], &["a", "b"], COLOR, &Palette::LIGHT);
        let first = surface.primitives().len();
        draw_line_chart(&mut surface, &[1.0, 2.0], &["a", "b"], COLOR, &Palette::DARK);
        assert_eq!(surface.primitives().len(), first);
        assert!(surface
            .primitives()
            .iter()
            .any(|p| matches!(p, Primitive::Line { color, .. } if *color == Palette::DARK.grid)));
    }

    #[test]
    fn single_point_is_centered() {
        let points = layout_points(&[42.0], 400.0, 200.0);
        assert_eq!(points.len(), 1);
        assert_close(points[0].x, 200.0);
        assert!(points[0].y.is_finite());
    }

    #[test]
    fn all_zero_series_sits_on_baseline() {
        let points = layout_points(&[0.0, 0.0, 0.0], 400.0, 200.0);
        assert!(points.iter().all(|p| (p.y - 160.0).abs() < 1e-9));
    }

    #[test]
    fn empty_series_draws_only_the_grid() {
        let mut surface = DrawList::new(400.0, 200.0);
        let points = draw_line_chart(&mut surface, &[], &[], COLOR, &Palette::LIGHT);
        assert!(points.is_empty());
        assert_eq!(surface.primitives().len(), 6);
    }
}
