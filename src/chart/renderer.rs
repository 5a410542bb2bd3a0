use super::surface::{Color, LinearGradient, Point, Stroke, Surface, TextAlign, TextStyle};
use crate::{Error, Result, market::PricePoint};
use tracing::debug;

/// Fixed surface height; the width follows the container.
pub const CHART_HEIGHT: f64 = 200.0;

const GRID_INTERVALS: usize = 5;
const DATE_LABEL_SLOTS: usize = 5;
const MARKER_SLOTS: usize = 8;
const MARKER_RADIUS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            left: 40.0,
            right: 20.0,
            top: 20.0,
            bottom: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub padding: Padding,
    pub currency_symbol: String,
    pub grid: Stroke,
    pub line: Stroke,
    pub area: Color,
    pub label: TextStyle,
    pub marker_fill: Color,
}

impl Default for ChartStyle {
    fn default() -> Self {
        let accent = Color::rgb(99, 102, 241);
        Self {
            padding: Padding::default(),
            currency_symbol: "$".to_string(),
            grid: Stroke {
                color: Color::rgba(75, 85, 99, 0.3),
                width: 0.5,
            },
            line: Stroke {
                color: accent,
                width: 2.0,
            },
            area: accent.with_alpha(0.3),
            label: TextStyle {
                color: Color::rgb(156, 163, 175),
                font_family: "Inter, sans-serif".to_string(),
                font_size: 10.0,
            },
            marker_fill: Color::rgb(255, 255, 255),
        }
    }
}

/// Price band with 2% padding either side of the observed extremes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceScale {
    pub min: f64,
    pub max: f64,
}

impl PriceScale {
    pub fn from_points(points: &[PricePoint]) -> Option<Self> {
        let (lo, hi) = points.iter().fold(None, |acc: Option<(f64, f64)>, p| {
            Some(match acc {
                Some((lo, hi)) => (lo.min(p.price), hi.max(p.price)),
                None => (p.price, p.price),
            })
        })?;
        Some(Self {
            min: lo * 0.98,
            max: hi * 1.02,
        })
    }

    pub fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Maps series indices and prices into surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub scale: PriceScale,
    count: usize,
}

impl ChartGeometry {
    /// `None` when there are fewer than two points to spread across the axis.
    pub fn new(width: f64, height: f64, padding: Padding, points: &[PricePoint]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self {
            width,
            height,
            padding,
            scale: PriceScale::from_points(points)?,
            count: points.len(),
        })
    }

    pub fn plot_width(&self) -> f64 {
        self.width - self.padding.left - self.padding.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.padding.top - self.padding.bottom
    }

    pub fn baseline(&self) -> f64 {
        self.height - self.padding.bottom
    }

    pub fn x(&self, index: usize) -> f64 {
        let step = self.plot_width() / (self.count - 1) as f64;
        self.padding.left + index as f64 * step
    }

    pub fn y(&self, price: f64) -> f64 {
        let range = self.scale.range();
        if range == 0.0 {
            return self.padding.top + self.plot_height() / 2.0;
        }
        self.padding.top + self.plot_height() - (price - self.scale.min) / range * self.plot_height()
    }

    /// Price level and y position of grid line `level` (0 = top).
    pub fn grid_level(&self, level: usize) -> (f64, f64) {
        let fraction = level as f64 / GRID_INTERVALS as f64;
        let y = self.padding.top + fraction * self.plot_height();
        let price = self.scale.max - fraction * self.scale.range();
        (price, y)
    }
}

/// Every `ceil(n / slots)`-th index.
pub fn label_indices(count: usize, slots: usize) -> impl Iterator<Item = usize> {
    let interval = count.div_ceil(slots).max(1);
    (0..count).step_by(interval)
}

#[derive(Debug, Clone, Default)]
pub struct ChartRenderer {
    pub style: ChartStyle,
}

impl ChartRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, points: &[PricePoint]) -> Result<()> {
        self.render_prefix(surface, points, points.len())
    }

    /// Draws the chart scaled to the whole series but only reveals the first
    /// `visible` points. Leaves the surface untouched when there is nothing
    /// to scale.
    pub fn render_prefix<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        points: &[PricePoint],
        visible: usize,
    ) -> Result<()> {
        if points.len() < 2 {
            return Err(Error::RenderSkipped {
                points: points.len(),
            });
        }

        let geometry = ChartGeometry::new(
            surface.width(),
            surface.height(),
            self.style.padding,
            points,
        )
        .ok_or(Error::RenderSkipped {
            points: points.len(),
        })?;
        let visible = visible.min(points.len());

        debug!(
            "Rendering {} of {} points at {}x{}",
            visible,
            points.len(),
            geometry.width,
            geometry.height
        );

        surface.clear();
        self.draw_grid(surface, &geometry);

        let coords: Vec<Point> = points[..visible]
            .iter()
            .enumerate()
            .map(|(i, p)| Point::new(geometry.x(i), geometry.y(p.price)))
            .collect();

        if coords.len() >= 2 {
            surface.polyline(&coords, self.style.line);
            self.draw_area(surface, &geometry, &coords);
        }

        for i in label_indices(points.len(), DATE_LABEL_SLOTS).take_while(|&i| i < visible) {
            surface.text(
                &points[i].date,
                Point::new(geometry.x(i), geometry.baseline() + 15.0),
                TextAlign::Center,
                &self.style.label,
            );
        }

        for i in label_indices(points.len(), MARKER_SLOTS).take_while(|&i| i < visible) {
            surface.circle(coords[i], MARKER_RADIUS, self.style.marker_fill, self.style.line);
        }

        Ok(())
    }

    fn draw_grid<S: Surface + ?Sized>(&self, surface: &mut S, geometry: &ChartGeometry) {
        let padding = geometry.padding;
        for level in 0..=GRID_INTERVALS {
            let (price, y) = geometry.grid_level(level);
            surface.line(
                Point::new(padding.left, y),
                Point::new(geometry.width - padding.right, y),
                self.style.grid,
            );
            surface.text(
                &format!("{}{:.2}", self.style.currency_symbol, price),
                Point::new(padding.left - 5.0, y + 4.0),
                TextAlign::Right,
                &self.style.label,
            );
        }
    }

    fn draw_area<S: Surface + ?Sized>(&self, surface: &mut S, geometry: &ChartGeometry, coords: &[Point]) {
        let (Some(first), Some(last)) = (coords.first(), coords.last()) else {
            return;
        };
        let mut polygon = coords.to_vec();
        polygon.push(Point::new(last.x, geometry.baseline()));
        polygon.push(Point::new(first.x, geometry.baseline()));

        let gradient = LinearGradient {
            y0: geometry.padding.top,
            y1: geometry.baseline(),
            stops: vec![(0.0, self.style.area), (1.0, self.style.area.with_alpha(0.0))],
        };
        surface.fill_polygon(&polygon, &gradient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::surface::MockSurface;
    use pretty_assertions::assert_eq;

    fn series(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint::new(format!("Day {}", i + 1), price))
            .collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_price_scale_padding() {
        let scale = PriceScale::from_points(&series(&[10.0, 12.0, 9.0, 15.0])).unwrap();
        assert!(approx(scale.min, 8.82));
        assert!(approx(scale.max, 15.3));
    }

    #[test]
    fn test_x_spans_padding_bounds() {
        let padding = Padding::default();
        let geometry =
            ChartGeometry::new(600.0, CHART_HEIGHT, padding, &series(&[10.0, 12.0, 9.0, 15.0]))
                .unwrap();

        assert!(approx(geometry.x(0), 40.0));
        assert!(approx(geometry.x(3), 600.0 - 20.0));
        assert!(approx(geometry.x(1) - geometry.x(0), geometry.x(2) - geometry.x(1)));
    }

    #[test]
    fn test_y_is_inverted() {
        let geometry = ChartGeometry::new(
            600.0,
            CHART_HEIGHT,
            Padding::default(),
            &series(&[10.0, 12.0, 9.0, 15.0]),
        )
        .unwrap();

        assert!(geometry.y(15.0) < geometry.y(9.0));
        assert!(approx(geometry.y(geometry.scale.max), 20.0));
        assert!(approx(geometry.y(geometry.scale.min), CHART_HEIGHT - 30.0));
    }

    #[test]
    fn test_zero_band_maps_to_middle() {
        let geometry =
            ChartGeometry::new(300.0, CHART_HEIGHT, Padding::default(), &series(&[0.0, 0.0]))
                .unwrap();
        assert!(approx(geometry.y(0.0), 20.0 + 150.0 / 2.0));
    }

    #[test]
    fn test_grid_levels_run_top_to_bottom() {
        let geometry = ChartGeometry::new(
            600.0,
            CHART_HEIGHT,
            Padding::default(),
            &series(&[10.0, 15.0]),
        )
        .unwrap();

        let (top_price, top_y) = geometry.grid_level(0);
        let (bottom_price, bottom_y) = geometry.grid_level(5);
        assert!(approx(top_price, geometry.scale.max));
        assert!(approx(bottom_price, geometry.scale.min));
        assert!(approx(top_y, 20.0));
        assert!(approx(bottom_y, 170.0));
    }

    #[test]
    fn test_label_indices() {
        assert_eq!(label_indices(30, 5).collect::<Vec<_>>(), vec![0, 6, 12, 18, 24]);
        assert_eq!(label_indices(30, 8).collect::<Vec<_>>(), vec![0, 4, 8, 12, 16, 20, 24, 28]);
        assert_eq!(label_indices(2, 5).collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_short_series_touches_nothing() {
        let renderer = ChartRenderer::default();
        for points in [vec![], series(&[42.0])] {
            // No expectations: any call on the surface fails the test.
            let mut surface = MockSurface::new();
            let result = renderer.render(&mut surface, &points);
            assert!(matches!(result, Err(Error::RenderSkipped { .. })));
        }
    }

    #[test]
    fn test_draw_call_counts() {
        let mut surface = MockSurface::new();
        surface.expect_width().return_const(600.0);
        surface.expect_height().return_const(CHART_HEIGHT);
        surface.expect_clear().times(1).return_const(());
        surface.expect_line().times(6).return_const(());
        surface
            .expect_polyline()
            .withf(|points, _| points.len() == 10)
            .times(1)
            .return_const(());
        surface
            .expect_fill_polygon()
            .withf(|points, _| points.len() == 12)
            .times(1)
            .return_const(());
        // 6 price labels + dates at 0,2,4,6,8
        surface.expect_text().times(11).return_const(());
        // markers at 0,2,4,6,8
        surface.expect_circle().times(5).return_const(());

        let prices: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        ChartRenderer::default()
            .render(&mut surface, &series(&prices))
            .unwrap();
    }

    #[test]
    fn test_prefix_hides_line_until_two_points() {
        let mut surface = MockSurface::new();
        surface.expect_width().return_const(600.0);
        surface.expect_height().return_const(CHART_HEIGHT);
        surface.expect_clear().times(1).return_const(());
        surface.expect_line().times(6).return_const(());
        surface.expect_polyline().never();
        surface.expect_fill_polygon().never();
        surface.expect_text().times(6 + 1).return_const(());
        surface.expect_circle().times(1).return_const(());

        ChartRenderer::default()
            .render_prefix(&mut surface, &series(&[1.0, 2.0, 3.0, 4.0]), 1)
            .unwrap();
    }
}
