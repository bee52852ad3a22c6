use crate::ui::theme::color;
use kpi_dashboard::app::charts::PIXELS_PER_COLUMN;
use kpi_dashboard::chart::{DrawList, DrawSurface, FontWeight, Primitive, Rgb};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points};
use ratatui::Frame;
use std::f64::consts::TAU;

/// Arc segments per full turn when stroking wedges.
const ARC_SEGMENTS: f64 = 96.0;
/// Spacing of the dots used to fill shapes.
const FILL_STEP: f64 = 3.0;

/// Replays recorded chart primitives onto a ratatui canvas covering `area`.
///
/// Primitives use a top-left origin; the canvas y axis points up, so every
/// y coordinate is flipped on the way through.
pub fn render_draw_list(
    f: &mut Frame<'_>,
    area: Rect,
    list: &DrawList,
    background: Rgb,
    marker: Marker,
) {
    let width = list.width();
    let height = list.height();
    if width <= 0.0 || height <= 0.0 {
        return;
    }

    let canvas = Canvas::default()
        .background_color(color(background))
        .marker(marker)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for primitive in list.primitives() {
                paint(ctx, primitive, height);
            }
        });

    f.render_widget(canvas, area);
}

fn paint(ctx: &mut Context<'_>, primitive: &Primitive, height: f64) {
    match primitive {
        Primitive::Line {
            from, to, color: c, ..
        } => {
            ctx.draw(&CanvasLine::new(
                from.0,
                height - from.1,
                to.0,
                height - to.1,
                color(*c),
            ));
        }
        Primitive::Circle {
            center,
            radius,
            color: c,
        } => {
            let coords = disc_points(*center, *radius, height);
            ctx.draw(&Points {
                coords: &coords,
                color: color(*c),
            });
            ctx.draw(&Circle {
                x: center.0,
                y: height - center.1,
                radius: *radius,
                color: color(*c),
            });
        }
        Primitive::Wedge {
            center,
            radius,
            start,
            end,
            color: c,
            filled: true,
        } => {
            let coords = wedge_points(*center, *radius, *start, *end, height);
            ctx.draw(&Points {
                coords: &coords,
                color: color(*c),
            });
        }
        Primitive::Wedge {
            center,
            radius,
            start,
            end,
            color: c,
            filled: false,
        } => stroke_wedge(ctx, *center, *radius, *start, *end, *c, height),
        Primitive::Text {
            text,
            at,
            color: c,
            weight,
        } => {
            let mut style = Style::default().fg(color(*c));
            if *weight == FontWeight::Bold {
                style = style.add_modifier(Modifier::BOLD);
            }
            let half_width = text.chars().count() as f64 * PIXELS_PER_COLUMN / 2.0;
            ctx.print(
                at.0 - half_width,
                height - at.1,
                Span::styled(text.clone(), style),
            );
        }
    }
}

fn disc_points(center: (f64, f64), radius: f64, height: f64) -> Vec<(f64, f64)> {
    wedge_points(center, radius, 0.0, TAU, height)
}

/// Dots filling the sector between `start` and `end`, in canvas coordinates.
fn wedge_points(
    center: (f64, f64),
    radius: f64,
    start: f64,
    end: f64,
    height: f64,
) -> Vec<(f64, f64)> {
    let sweep = end - start;
    let mut coords = vec![(center.0, height - center.1)];
    if radius <= 0.0 || sweep <= 0.0 {
        return coords;
    }

    let steps = (radius * 2.0 / FILL_STEP).ceil() as i64;
    for i in 0..=steps {
        let dx = (i as f64).mul_add(FILL_STEP, -radius);
        for j in 0..=steps {
            let dy = (j as f64).mul_add(FILL_STEP, -radius);
            if dx.hypot(dy) > radius {
                continue;
            }
            let offset = (dy.atan2(dx) - start).rem_euclid(TAU);
            if sweep >= TAU || offset <= sweep {
                coords.push((center.0 + dx, height - (center.1 + dy)));
            }
        }
    }

    coords
}

fn stroke_wedge(
    ctx: &mut Context<'_>,
    center: (f64, f64),
    radius: f64,
    start: f64,
    end: f64,
    c: Rgb,
    height: f64,
) {
    let point_at = |angle: f64| {
        (
            angle.cos().mul_add(radius, center.0),
            height - angle.sin().mul_add(radius, center.1),
        )
    };

    let sweep = end - start;
    let segments = ((sweep / TAU) * ARC_SEGMENTS).ceil().max(1.0) as usize;
    let mut previous = point_at(start);
    for segment in 1..=segments {
        let next = point_at(sweep.mul_add(segment as f64 / segments as f64, start));
        ctx.draw(&CanvasLine::new(
            previous.0, previous.1, next.0, next.1, color(c),
        ));
        previous = next;
    }

    if sweep < TAU {
        let origin = (center.0, height - center.1);
        for edge in [point_at(start), point_at(end)] {
            ctx.draw(&CanvasLine::new(
                origin.0, origin.1, edge.0, edge.1, color(c),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_wedge_only_fills_its_quadrant() {
        // y grows downwards in chart space: 0..pi/2 is the lower-right quarter
        let points = wedge_points((50.0, 50.0), 20.0, 0.0, FRAC_PI_2, 100.0);
        assert!(points.len() > 10);
        assert!(points.iter().all(|(x, y)| *x >= 50.0 && *y <= 50.0));
    }

    #[test]
    fn full_turn_fills_the_disc() {
        let disc = disc_points((0.0, 0.0), 9.0, 0.0);
        assert!(disc.iter().any(|(x, _)| *x < 0.0));
        assert!(disc.iter().any(|(x, _)| *x > 0.0));
        assert!(disc.iter().all(|(x, y)| x.hypot(*y) <= 9.0 + 1e-9));
    }
}
