use std::sync::{Arc, Mutex};
use std::time::Duration;

use gpui::prelude::*;
use gpui::{App, AsyncWindowContext, Entity, Timer, Window, canvas, div};

use crate::plot::FunctionPlot;
use crate::view::Viewport;

use super::paint::{paint_list, to_hsla};

/// How often [`GraphView::watch`] checks for pending repaints.
const REPAINT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// A GPUI view that renders a [`FunctionPlot`].
///
/// Each frame records a fresh render pass for the current bounds, so
/// resizing the window rescales the axes and data.
#[derive(Clone)]
pub struct GraphView {
    plot: Arc<Mutex<FunctionPlot>>,
}

impl GraphView {
    /// Create a new GPUI view for the given plot.
    pub fn new(plot: FunctionPlot) -> Self {
        Self {
            plot: Arc::new(Mutex::new(plot)),
        }
    }

    /// Get a handle for reading or mutating the underlying plot.
    ///
    /// Mutations made through the handle are drawn once the view is redrawn;
    /// [`GraphView::watch`] schedules that automatically.
    pub fn plot_handle(&self) -> PlotHandle {
        PlotHandle {
            plot: Arc::clone(&self.plot),
        }
    }

    /// Redraw `view` whenever its plot requests a repaint.
    ///
    /// Covers mutations made through a [`PlotHandle`], including ones from
    /// other threads. The task stops once the window is gone.
    pub fn watch(view: &Entity<Self>, window: &mut Window, cx: &mut App) {
        let view = view.clone();
        window
            .spawn(cx, move |cx: &mut AsyncWindowContext| {
                let mut cx = cx.clone();
                async move {
                    loop {
                        Timer::after(REPAINT_POLL_INTERVAL).await;
                        let updated = cx.update(|_, cx| {
                            view.update(cx, |view, view_cx| {
                                if view.take_repaint() {
                                    view_cx.notify();
                                }
                            });
                        });
                        if updated.is_err() {
                            break;
                        }
                    }
                }
            })
            .detach();
    }

    fn take_repaint(&self) -> bool {
        self.plot
            .lock()
            .map(|plot| plot.take_repaint())
            .unwrap_or(false)
    }

    /// Mutate the plot and schedule a redraw if it requested one.
    pub fn update_plot<R>(
        &mut self,
        cx: &mut Context<Self>,
        f: impl FnOnce(&mut FunctionPlot) -> R,
    ) -> R {
        let (result, repaint) = {
            let mut plot = self.plot.lock().expect("plot lock");
            let result = f(&mut plot);
            (result, plot.take_repaint())
        };
        if repaint {
            cx.notify();
        }
        result
    }
}

impl Render for GraphView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let plot = Arc::clone(&self.plot);
        let background = plot.lock().expect("plot lock").theme().background;

        div().size_full().bg(to_hsla(background)).child(
            canvas(
                move |bounds, _, _| {
                    let plot = plot.lock().expect("plot lock");
                    plot.take_repaint();
                    let viewport = Viewport::new(
                        f32::from(bounds.size.width) as i32,
                        f32::from(bounds.size.height) as i32,
                    );
                    (bounds.origin, plot.render_list(viewport))
                },
                move |_, (origin, list), window, cx| {
                    paint_list(&list, origin, window, cx);
                },
            )
            .size_full(),
        )
    }
}

/// Shared handle to a plot rendered by a [`GraphView`].
#[derive(Clone)]
pub struct PlotHandle {
    plot: Arc<Mutex<FunctionPlot>>,
}

impl PlotHandle {
    /// Read the plot state.
    ///
    /// The plot is locked for the duration of the callback.
    pub fn read<R>(&self, f: impl FnOnce(&FunctionPlot) -> R) -> R {
        let plot = self.plot.lock().expect("plot lock");
        f(&plot)
    }

    /// Mutate the plot state.
    ///
    /// The plot is locked for the duration of the callback, so a render
    /// pass never observes a half-applied change.
    pub fn write<R>(&self, f: impl FnOnce(&mut FunctionPlot) -> R) -> R {
        let mut plot = self.plot.lock().expect("plot lock");
        f(&mut plot)
    }
}
