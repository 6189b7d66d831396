//! gpui_fnplot draws a single sampled function on a Cartesian plane.
//! The axes rescale to the data and thin their labels as the range grows,
//! and the plot redraws whenever its points or display options change.

#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod geom;
#[cfg(feature = "gpui")]
pub mod gpui_backend;
pub mod plot;
pub mod range;
pub mod render;
pub mod sampling;
pub mod sequence;
pub mod style;
pub mod transform;
pub mod view;

pub use axis::{AxisKind, AxisRenderer, TickMark, label_visible};
pub use error::{ConfigError, EvalError};
pub use geom::{Point, ScreenPoint};
#[cfg(feature = "gpui")]
pub use gpui_backend::{GraphView, PlotHandle};
pub use plot::{FunctionPlot, PlotBuilder};
pub use range::estimate_vertical_range;
pub use render::{Color, DataRenderer, RenderCommand, RenderList, RenderSurface};
pub use sampling::{Bindings, EvaluationStatus, Evaluator, SweepConfig, sample_sweep};
pub use sequence::ObservableSequence;
pub use style::Theme;
pub use transform::{AxisFrame, PADDING, Transform};
pub use view::{DisplayOptions, HorizontalRange, Viewport};
