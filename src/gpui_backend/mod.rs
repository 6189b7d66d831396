//! GPUI integration for gpui_fnplot.
//!
//! This module provides a GPUI view that renders a
//! [`FunctionPlot`](crate::plot::FunctionPlot) by recording a render pass into
//! a [`RenderList`](crate::render::RenderList) and replaying it onto the
//! window.

mod paint;
mod view;

pub use view::{GraphView, PlotHandle};
