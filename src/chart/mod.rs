mod animation;
mod renderer;
mod surface;
mod svg;

pub use animation::{ChartView, REVEAL_DURATION, RevealAnimation};
pub use renderer::{
    CHART_HEIGHT, ChartGeometry, ChartRenderer, ChartStyle, Padding, PriceScale, label_indices,
};
pub use surface::{Color, LinearGradient, Point, Stroke, Surface, TextAlign, TextStyle};
pub use svg::SvgSurface;
