use crate::chart::{line_tooltip, pie_tooltip, ChartPoint, PieGeometry, Tooltip};
use ratatui::layout::Rect;

/// Virtual pixels per terminal column; charts are laid out in pixel space.
pub const PIXELS_PER_COLUMN: f64 = 8.0;
/// Virtual pixels per terminal row.
pub const PIXELS_PER_ROW: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartId {
    Sales,
    Analytics,
    Traffic,
}

/// Pixel size of a chart drawn into `area`.
pub fn pixel_size(area: Rect) -> (f64, f64) {
    (
        f64::from(area.width) * PIXELS_PER_COLUMN,
        f64::from(area.height) * PIXELS_PER_ROW,
    )
}

/// Center of the cell at (`column`, `row`) in the pixel space of `area`,
/// or `None` when the cell lies outside it.
pub fn cell_to_pixel(area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    if column < area.x
        || row < area.y
        || column >= area.x.saturating_add(area.width)
        || row >= area.y.saturating_add(area.height)
    {
        return None;
    }

    Some((
        f64::from(column - area.x).mul_add(PIXELS_PER_COLUMN, PIXELS_PER_COLUMN / 2.0),
        f64::from(row - area.y).mul_add(PIXELS_PER_ROW, PIXELS_PER_ROW / 2.0),
    ))
}

/// Terminal cell holding pixel `(x, y)` of `area`, clamped to the area.
pub fn pixel_to_cell(area: Rect, x: f64, y: f64) -> (u16, u16) {
    let max_column = area.width.saturating_sub(1);
    let max_row = area.height.saturating_sub(1);
    let column = ((x / PIXELS_PER_COLUMN).floor().max(0.0) as u16).min(max_column);
    let row = ((y / PIXELS_PER_ROW).floor().max(0.0) as u16).min(max_row);
    (area.x + column, area.y + row)
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineChartHit {
    pub area: Rect,
    pub points: Vec<ChartPoint>,
    pub labels: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChartHit {
    pub area: Rect,
    pub geometry: PieGeometry,
}

/// Tooltip currently shown over a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTooltip {
    pub chart: ChartId,
    pub area: Rect,
    pub tooltip: Tooltip,
}

/// Geometry of the charts on screen, replaced on every draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartCache {
    pub sales: Option<LineChartHit>,
    pub analytics: Option<LineChartHit>,
    pub traffic: Option<PieChartHit>,
}

impl ChartCache {
    /// Forgets every chart; pages record the charts they draw afterwards.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn record_line(
        &mut self,
        chart: ChartId,
        area: Rect,
        points: Vec<ChartPoint>,
        labels: &[&'static str],
    ) {
        let hit = LineChartHit {
            area,
            points,
            labels: labels.to_vec(),
        };
        match chart {
            ChartId::Sales => self.sales = Some(hit),
            ChartId::Analytics => self.analytics = Some(hit),
            ChartId::Traffic => {}
        }
    }

    pub fn record_pie(&mut self, area: Rect, geometry: PieGeometry) {
        self.traffic = Some(PieChartHit { area, geometry });
    }

    /// Resolves the tooltip for a pointer at terminal cell (`column`, `row`).
    pub fn tooltip_at(&self, column: u16, row: u16) -> Option<ActiveTooltip> {
        let lines = [
            (ChartId::Sales, self.sales.as_ref()),
            (ChartId::Analytics, self.analytics.as_ref()),
        ];

        for (chart, hit) in lines {
            let Some(hit) = hit else { continue };
            let Some(pointer) = cell_to_pixel(hit.area, column, row) else {
                continue;
            };
            return line_tooltip(&hit.points, &hit.labels, pointer).map(|tooltip| ActiveTooltip {
                chart,
                area: hit.area,
                tooltip,
            });
        }

        let hit = self.traffic.as_ref()?;
        let pointer = cell_to_pixel(hit.area, column, row)?;
        pie_tooltip(&hit.geometry, pointer).map(|tooltip| ActiveTooltip {
            chart: ChartId::Traffic,
            area: hit.area,
            tooltip,
        })
    }
}
