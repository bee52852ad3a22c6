use crate::chart::line::ChartPoint;
use crate::chart::pie::PieGeometry;
use crate::domain::format_number;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Pointer must be closer than this to a line-chart point to hit it.
pub const HIT_RADIUS: f64 = 15.0;
/// Tooltip position relative to the pointer.
pub const TOOLTIP_OFFSET: (f64, f64) = (10.0, -30.0);

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl Tooltip {
    fn at_pointer(text: String, pointer: (f64, f64)) -> Self {
        Self {
            text,
            x: pointer.0 + TOOLTIP_OFFSET.0,
            y: pointer.1 + TOOLTIP_OFFSET.1,
        }
    }
}

/// Index of the point nearest to `pointer`, if it lies within [`HIT_RADIUS`].
pub fn nearest_point(points: &[ChartPoint], pointer: (f64, f64)) -> Option<usize> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| (index, (pointer.0 - point.x).hypot(pointer.1 - point.y)))
        .filter(|(_, distance)| *distance < HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

pub fn line_tooltip(
    points: &[ChartPoint],
    labels: &[&str],
    pointer: (f64, f64),
) -> Option<Tooltip> {
    let index = nearest_point(points, pointer)?;
    let label = labels.get(index).copied().unwrap_or_default();
    let text = format!("{label}: {}", format_number(points[index].value.round()));
    Some(Tooltip::at_pointer(text, pointer))
}

/// Index of the slice under `pointer`. Points outside the circle never hit.
pub fn slice_at(geometry: &PieGeometry, pointer: (f64, f64)) -> Option<usize> {
    let dx = pointer.0 - geometry.center.0;
    let dy = pointer.1 - geometry.center.1;
    if dx.hypot(dy) > geometry.radius {
        return None;
    }

    let angle = (dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU);
    geometry
        .slices
        .iter()
        .position(|slice| angle >= slice.start && angle <= slice.start + slice.sweep)
}

pub fn pie_tooltip(geometry: &PieGeometry, pointer: (f64, f64)) -> Option<Tooltip> {
    let slice = &geometry.slices[slice_at(geometry, pointer)?];
    let text = format!(
        "{}: {} ({}%)",
        slice.label,
        format_number(slice.value),
        geometry.percent(slice.value)
    );
    Some(Tooltip::at_pointer(text, pointer))
}
