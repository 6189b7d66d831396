//! Plot container and the render pass.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::trace;

use crate::axis::AxisRenderer;
use crate::geom::Point;
use crate::range::estimate_vertical_range;
use crate::render::{DataRenderer, RenderList, RenderSurface};
use crate::sampling::{EvaluationStatus, Evaluator, SweepConfig, sample_sweep};
use crate::sequence::ObservableSequence;
use crate::style::Theme;
use crate::transform::Transform;
use crate::view::{DisplayOptions, HorizontalRange, Viewport};

/// Callback run whenever the plot needs to be drawn again.
pub type RepaintHook = Box<dyn FnMut() + Send>;

/// Shared repaint request state.
///
/// Cloned into the point sequence's change listener so data mutations and
/// option changes end up in the same place.
#[derive(Clone, Default)]
struct RepaintTrigger {
    pending: Arc<AtomicBool>,
    revision: Arc<AtomicU64>,
    hook: Arc<Mutex<Option<RepaintHook>>>,
    hook_generation: Arc<AtomicU64>,
}

impl RepaintTrigger {
    fn request(&self) {
        self.pending.store(true, Ordering::Release);
        self.revision.fetch_add(1, Ordering::AcqRel);

        // The hook runs outside the slot lock; requests it triggers itself skip it.
        let generation = self.hook_generation.load(Ordering::Acquire);
        let Some(mut hook) = self.hook.lock().ok().and_then(|mut slot| slot.take()) else {
            return;
        };
        hook();
        if let Ok(mut slot) = self.hook.lock()
            && slot.is_none()
            && self.hook_generation.load(Ordering::Acquire) == generation
        {
            *slot = Some(hook);
        }
    }

    fn set_hook(&self, hook: Option<RepaintHook>) {
        if let Ok(mut slot) = self.hook.lock() {
            self.hook_generation.fetch_add(1, Ordering::AcqRel);
            *slot = hook;
        }
    }
}

/// A single-series function plot.
///
/// Owns the sampled points and the display options. Every change to either
/// requests a repaint; [`FunctionPlot::render`] redraws everything from the
/// current state.
pub struct FunctionPlot {
    data: ObservableSequence,
    options: DisplayOptions,
    theme: Theme,
    repaint: RepaintTrigger,
}

impl FunctionPlot {
    /// Create an empty plot with default options and theme.
    pub fn new() -> Self {
        Self::from_parts(DisplayOptions::default(), Theme::default(), Vec::new())
    }

    /// Start building a plot with custom configuration.
    pub fn builder() -> PlotBuilder {
        PlotBuilder::default()
    }

    fn from_parts(options: DisplayOptions, theme: Theme, points: Vec<Point>) -> Self {
        let repaint = RepaintTrigger::default();
        let listener = repaint.clone();
        let mut data = ObservableSequence::new();
        data.extend(points);
        data.set_on_change(move |_| listener.request());
        Self {
            data,
            options,
            theme,
            repaint,
        }
    }

    /// Access the sampled points.
    pub fn data(&self) -> &ObservableSequence {
        &self.data
    }

    /// Mutate the sampled points; every change requests a repaint.
    ///
    /// Registering another change listener on the returned sequence detaches
    /// it from the repaint trigger.
    pub fn data_mut(&mut self) -> &mut ObservableSequence {
        &mut self.data
    }

    /// Replace the points with samples of `expression`.
    pub fn sample<E: Evaluator + ?Sized>(
        &mut self,
        evaluator: &mut E,
        expression: &str,
        config: &SweepConfig,
    ) -> EvaluationStatus {
        sample_sweep(evaluator, expression, config, &mut self.data)
    }

    /// Access the display options.
    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    /// Replace all display options.
    pub fn set_options(&mut self, options: DisplayOptions) {
        self.options = options;
        self.repaint.request();
    }

    /// Toggle per-point annotation text.
    pub fn set_draw_labels(&mut self, draw_labels: bool) {
        self.options.draw_labels = draw_labels;
        self.repaint.request();
    }

    /// Toggle segments between consecutive points.
    pub fn set_draw_lines(&mut self, draw_lines: bool) {
        self.options.draw_lines = draw_lines;
        self.repaint.request();
    }

    /// Toggle point markers.
    pub fn set_draw_points(&mut self, draw_points: bool) {
        self.options.draw_points = draw_points;
        self.repaint.request();
    }

    /// Set the visible x half-width; values below 1 are clamped to 1.
    pub fn set_horizontal_range(&mut self, range: i64) {
        self.options.horizontal_range = HorizontalRange::new(range);
        self.repaint.request();
    }

    /// Access the theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the theme.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.repaint.request();
    }

    /// Register a callback run on every repaint request, replacing any previous one.
    ///
    /// The hook runs on whichever thread mutated the plot, while that thread
    /// still holds the plot. It must not lock the plot again (for example
    /// through a `PlotHandle`); set a flag or send a message instead.
    pub fn set_on_repaint(&mut self, hook: impl FnMut() + Send + 'static) {
        self.repaint.set_hook(Some(Box::new(hook)));
    }

    /// Remove the repaint callback.
    pub fn clear_on_repaint(&mut self) {
        self.repaint.set_hook(None);
    }

    /// Report and clear a pending repaint request.
    pub fn take_repaint(&self) -> bool {
        self.repaint.pending.swap(false, Ordering::AcqRel)
    }

    /// Number of repaint requests so far.
    pub fn revision(&self) -> u64 {
        self.repaint.revision.load(Ordering::Acquire)
    }

    /// Vertical half-range for the current points.
    pub fn vertical_range(&self) -> u32 {
        estimate_vertical_range(self.data.points())
    }

    /// Build the transform for a viewport from the current state.
    pub fn transform(&self, viewport: Viewport) -> Transform {
        Transform::new(
            viewport,
            self.options.horizontal_range.get(),
            self.vertical_range(),
        )
    }

    /// Draw axes and data onto `surface`, returning the transform used.
    ///
    /// Nothing is drawn while the surface has no area.
    pub fn render<S: RenderSurface + ?Sized>(&self, surface: &mut S) -> Transform {
        let viewport = surface.viewport();
        let transform = self.transform(viewport);
        trace!(
            width = viewport.width_px,
            height = viewport.height_px,
            x_range = transform.x_range(),
            y_range = transform.y_range(),
            points = self.data.len(),
            "render pass"
        );
        if !viewport.is_valid() {
            return transform;
        }
        AxisRenderer::new(&transform).draw(surface);
        if !self.data.is_empty() {
            DataRenderer::new(&transform, self.options, &self.theme)
                .draw(self.data.points(), surface);
        }
        transform
    }

    /// Record a render pass for a viewport, drawing in the theme foreground.
    pub fn render_list(&self, viewport: Viewport) -> RenderList {
        let mut list = RenderList::new(viewport, self.theme.foreground);
        self.render(&mut list);
        list
    }
}

impl Default for FunctionPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FunctionPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionPlot")
            .field("data", &self.data)
            .field("options", &self.options)
            .field("theme", &self.theme)
            .field("revision", &self.revision())
            .finish()
    }
}

/// Builder for configuring a plot before construction.
#[derive(Debug, Default)]
pub struct PlotBuilder {
    theme: Theme,
    options: DisplayOptions,
    points: Vec<Point>,
}

impl PlotBuilder {
    /// Set the theme used by the plot.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the initial display options.
    pub fn options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the visible x half-width; values below 1 are clamped to 1.
    pub fn horizontal_range(mut self, range: i64) -> Self {
        self.options.horizontal_range = HorizontalRange::new(range);
        self
    }

    /// Seed the plot with points.
    pub fn points(mut self, points: impl IntoIterator<Item = Point>) -> Self {
        self.points.extend(points);
        self
    }

    /// Build the plot.
    pub fn build(self) -> FunctionPlot {
        FunctionPlot::from_parts(self.options, self.theme, self.points)
    }
}
