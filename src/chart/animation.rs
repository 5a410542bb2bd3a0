use super::{
    renderer::{CHART_HEIGHT, ChartRenderer},
    surface::Surface,
};
use crate::{Error, market::PricePoint};
use std::time::Duration;
use tracing::debug;

pub const REVEAL_DURATION: Duration = Duration::from_millis(1000);

/// Time-boxed reveal driven by host frame timestamps.
///
/// The first frame fixes the start time, like a `requestAnimationFrame` loop.
#[derive(Debug, Clone, Default)]
pub struct RevealAnimation {
    started_at: Option<Duration>,
    shown: usize,
}

impl RevealAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of points to show at `now`, and whether the reveal is over.
    pub fn visible(&mut self, now: Duration, total: usize) -> (usize, bool) {
        let start = *self.started_at.get_or_insert(now);
        let progress = now.saturating_sub(start);
        if progress >= REVEAL_DURATION {
            self.shown = total;
            return (total, true);
        }
        let fraction = progress.as_secs_f64() / REVEAL_DURATION.as_secs_f64();
        let count = (fraction * total as f64).ceil() as usize;
        self.shown = count.min(total);
        (self.shown, false)
    }

    /// Points shown by the most recent frame.
    pub fn shown(&self) -> usize {
        self.shown
    }
}

/// A chart bound to one surface: owns the data, the container width and the
/// running reveal animation.
pub struct ChartView<S: Surface> {
    surface: S,
    renderer: ChartRenderer,
    points: Vec<PricePoint>,
    animation: Option<RevealAnimation>,
}

impl<S: Surface> ChartView<S> {
    pub fn new(surface: S, renderer: ChartRenderer) -> Self {
        Self {
            surface,
            renderer,
            points: Vec::new(),
            animation: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Replaces the series and restarts the reveal from scratch.
    pub fn set_data(&mut self, points: Vec<PricePoint>) {
        debug!("Chart data replaced with {} points", points.len());
        self.points = points;
        self.animation = Some(RevealAnimation::new());
    }

    /// Resizes the surface to the container width and redraws immediately,
    /// keeping whatever part of the reveal is currently on screen.
    pub fn resize(&mut self, container_width: f64) {
        self.surface.resize(container_width, CHART_HEIGHT);
        let visible = self
            .animation
            .as_ref()
            .map_or(self.points.len(), RevealAnimation::shown);
        self.draw(visible);
    }

    /// Draws one animation frame. Returns `true` while more frames are wanted.
    pub fn frame(&mut self, now: Duration) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };
        let (visible, done) = animation.visible(now, self.points.len());
        if done {
            self.animation = None;
        }
        self.draw(visible);
        !done
    }

    fn draw(&mut self, visible: usize) {
        match self
            .renderer
            .render_prefix(&mut self.surface, &self.points, visible)
        {
            Ok(()) => {}
            Err(Error::RenderSkipped { points }) => {
                debug!("Chart render skipped with {} point(s)", points);
            }
            Err(e) => debug!("Chart render failed: {}", e),
        }
    }
}
