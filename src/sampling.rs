//! Sampling a formula across the horizontal range.
//!
//! Parsing and evaluating formulas is left to an [`Evaluator`]. A sweep
//! binds [`SAMPLE_VARIABLE`] to each sample position, keeps every successful
//! result as a labelled [`Point`], and skips samples that fail.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{ConfigError, EvalError};
use crate::geom::Point;
use crate::sequence::ObservableSequence;

/// Variable bound to the sample position.
pub const SAMPLE_VARIABLE: &str = "x";

/// Largest number of sample intervals a sweep may span.
pub const MAX_SAMPLES: u64 = 10_000;

/// Variable bindings handed to an evaluator.
pub type Bindings = HashMap<String, f64>;

/// Formula evaluation, provided by the application.
pub trait Evaluator {
    /// Evaluate `expression` with the given variable bindings.
    fn evaluate(&mut self, expression: &str, bindings: &Bindings) -> Result<f64, EvalError>;
}

impl<F> Evaluator for F
where
    F: FnMut(&str, &Bindings) -> Result<f64, EvalError>,
{
    fn evaluate(&mut self, expression: &str, bindings: &Bindings) -> Result<f64, EvalError> {
        self(expression, bindings)
    }
}

/// Outcome of a sweep, for the input field to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationStatus {
    /// Every sample evaluated.
    Ok,
    /// At least one sample failed and was skipped.
    Failed,
}

/// Sample positions for a sweep: `-half_width..=half_width` by `step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    half_width: u32,
    step: f64,
}

impl SweepConfig {
    /// Create a sweep configuration.
    ///
    /// Fails when `step` is not finite and positive, or when the sweep would
    /// span more than [`MAX_SAMPLES`] intervals.
    pub fn new(half_width: u32, step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::InvalidStep(step));
        }
        let intervals = 2.0 * f64::from(half_width) / step;
        if intervals > MAX_SAMPLES as f64 {
            return Err(ConfigError::TooManySamples {
                half_width,
                step,
                max: MAX_SAMPLES,
            });
        }
        Ok(Self { half_width, step })
    }

    /// Create a configuration with `step = 1 / density`.
    pub fn from_density(half_width: u32, density: u32) -> Result<Self, ConfigError> {
        if density == 0 {
            return Err(ConfigError::ZeroDensity);
        }
        Self::new(half_width, 1.0 / f64::from(density))
    }

    /// Half-width of the sampled interval.
    pub fn half_width(&self) -> u32 {
        self.half_width
    }

    /// Distance between samples.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Sample positions in ascending order.
    pub fn sample_xs(&self) -> impl Iterator<Item = f64> + use<> {
        let start = -f64::from(self.half_width);
        let step = self.step;
        // Small tolerance so the right end is kept despite rounding in the division.
        let count = (2.0 * f64::from(self.half_width) / step + 1e-9).floor() as u64;
        (0..=count).map(move |i| start + i as f64 * step)
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            half_width: 5,
            step: 0.25,
        }
    }
}

/// Annotation attached to each sampled point.
pub fn sample_label(x: f64, y: f64) -> String {
    format!("( {x:.2} | {y:.2})")
}

/// Replace the contents of `data` with samples of `expression`.
///
/// A blank expression leaves `data` untouched. Otherwise `data` is cleared
/// and the successful samples are appended in one batch, so listeners see
/// one notification for the clear and at most one for the append.
pub fn sample_sweep<E>(
    evaluator: &mut E,
    expression: &str,
    config: &SweepConfig,
    data: &mut ObservableSequence,
) -> EvaluationStatus
where
    E: Evaluator + ?Sized,
{
    if expression.trim().is_empty() {
        return EvaluationStatus::Ok;
    }

    let mut bindings = Bindings::new();
    let mut points = Vec::new();
    let mut failures = 0usize;
    for x in config.sample_xs() {
        bindings.insert(SAMPLE_VARIABLE.to_string(), x);
        let result = evaluator
            .evaluate(expression, &bindings)
            .and_then(|y| if y.is_finite() { Ok(y) } else { Err(EvalError::NonFinite(y)) });
        match result {
            Ok(y) => points.push(Point::labelled(x, y, sample_label(x, y))),
            Err(err) => {
                debug!(x, %err, "skipping sample");
                failures += 1;
            }
        }
    }

    debug!(expression, sampled = points.len(), failures, "sample sweep finished");
    data.clear();
    data.extend(points);
    if failures == 0 {
        EvaluationStatus::Ok
    } else {
        EvaluationStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn square(_: &str, bindings: &Bindings) -> Result<f64, EvalError> {
        let x = bindings[SAMPLE_VARIABLE];
        Ok(x * x)
    }

    #[test]
    fn default_sweep_matches_slider_defaults() {
        let config = SweepConfig::default();
        assert_eq!(config, SweepConfig::from_density(5, 4).unwrap());
        let xs: Vec<f64> = config.sample_xs().collect();
        assert_eq!(xs.len(), 41);
        assert_eq!(xs[0], -5.0);
        assert_eq!(xs[20], 0.0);
        assert_eq!(xs[40], 5.0);
    }

    #[test]
    fn uneven_steps_keep_the_right_end() {
        let config = SweepConfig::from_density(1, 3).unwrap();
        let xs: Vec<f64> = config.sample_xs().collect();
        assert_eq!(xs.len(), 7);
        assert!((xs[6] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn invalid_steps_are_rejected() {
        assert_eq!(SweepConfig::new(5, 0.0), Err(ConfigError::InvalidStep(0.0)));
        assert!(SweepConfig::new(5, -1.0).is_err());
        assert!(SweepConfig::new(5, f64::NAN).is_err());
        assert_eq!(SweepConfig::from_density(5, 0), Err(ConfigError::ZeroDensity));
    }

    #[test]
    fn oversized_sweeps_are_rejected() {
        assert!(matches!(
            SweepConfig::from_density(5, u32::MAX),
            Err(ConfigError::TooManySamples { half_width: 5, .. })
        ));
        assert!(matches!(
            SweepConfig::new(5, 1e-300),
            Err(ConfigError::TooManySamples { .. })
        ));
        assert!(SweepConfig::new(u32::MAX, 1.0).is_err());

        // The densest slider setting stays well inside the limit.
        let config = SweepConfig::from_density(5, 10).unwrap();
        assert_eq!(config.sample_xs().count(), 101);
        let fine = SweepConfig::new(5, 0.002).unwrap();
        assert!(fine.sample_xs().count() as u64 <= MAX_SAMPLES + 1);
    }

    #[test]
    fn sweep_fills_labelled_points() {
        let mut data = ObservableSequence::new();
        let config = SweepConfig::new(2, 1.0).unwrap();
        let status = sample_sweep(&mut square, "x*x", &config, &mut data);
        assert_eq!(status, EvaluationStatus::Ok);
        assert_eq!(data.len(), 5);
        assert_eq!(data.points()[0], Point::labelled(-2.0, 4.0, "( -2.00 | 4.00)"));
        assert_eq!(data.points()[4].label, "( 2.00 | 4.00)");
    }

    #[test]
    fn failing_samples_are_skipped() {
        let mut data = ObservableSequence::new();
        let config = SweepConfig::new(2, 1.0).unwrap();
        let mut reciprocal = |_: &str, b: &Bindings| -> Result<f64, EvalError> {
            let x = b[SAMPLE_VARIABLE];
            if x == 0.0 {
                Err(EvalError::Other("division by zero".into()))
            } else {
                Ok(1.0 / x)
            }
        };
        let status = sample_sweep(&mut reciprocal, "1/x", &config, &mut data);
        assert_eq!(status, EvaluationStatus::Failed);
        let xs: Vec<f64> = data.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-2.0, -1.0, 1.0, 2.0]);
    }

    #[test]
    fn non_finite_results_count_as_failures() {
        let mut data = ObservableSequence::new();
        let config = SweepConfig::new(1, 1.0).unwrap();
        let mut log = |_: &str, b: &Bindings| -> Result<f64, EvalError> { Ok(b[SAMPLE_VARIABLE].ln()) };
        let status = sample_sweep(&mut log, "ln(x)", &config, &mut data);
        assert_eq!(status, EvaluationStatus::Failed);
        assert_eq!(data.len(), 1);
        assert_eq!(data.points()[0].x, 1.0);
    }

    #[test]
    fn blank_expression_is_ignored() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let mut data = ObservableSequence::with_on_change(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        data.push(Point::new(1.0, 1.0));
        let status = sample_sweep(&mut square, "   ", &SweepConfig::default(), &mut data);
        assert_eq!(status, EvaluationStatus::Ok);
        assert_eq!(data.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn sweep_notifies_for_clear_and_batch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let mut data = ObservableSequence::with_on_change(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        sample_sweep(&mut square, "x*x", &SweepConfig::default(), &mut data);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let mut fail =
            |_: &str, _: &Bindings| -> Result<f64, EvalError> { Err(EvalError::Malformed("(".into())) };
        let status = sample_sweep(&mut fail, "(", &SweepConfig::default(), &mut data);
        assert_eq!(status, EvaluationStatus::Failed);
        assert!(data.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
