use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_fnplot::{
    Bindings, DisplayOptions, EvalError, EvaluationStatus, FunctionPlot, GraphView, SweepConfig,
    Theme,
};

/// Stand-in for a real formula parser: knows a handful of fixed formulas.
fn evaluate(expression: &str, bindings: &Bindings) -> Result<f64, EvalError> {
    let x = *bindings
        .get("x")
        .ok_or_else(|| EvalError::UndefinedIdent("x".to_string()))?;
    match expression.trim() {
        "x" => Ok(x),
        "x^2" => Ok(x * x),
        "x^3" => Ok(x * x * x),
        "sin(x)" => Ok(x.sin()),
        "1/x" if x == 0.0 => Err(EvalError::Other("division by zero".to_string())),
        "1/x" => Ok(1.0 / x),
        other => Err(EvalError::Malformed(other.to_string())),
    }
}

fn main() {
    let expression = std::env::args().nth(1).unwrap_or_else(|| "x^3".to_string());

    Application::new().run(move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(800.0), px(600.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |window, cx| {
            let mut plot = FunctionPlot::builder()
                .theme(Theme::dark())
                .options(DisplayOptions {
                    draw_labels: true,
                    ..DisplayOptions::default()
                })
                .horizontal_range(5)
                .build();

            let status = plot.sample(&mut evaluate, &expression, &SweepConfig::default());
            if status == EvaluationStatus::Failed {
                eprintln!("some samples of '{expression}' could not be evaluated");
            }

            let view = cx.new(|_| GraphView::new(plot));
            GraphView::watch(&view, window, cx);
            view
        })
        .unwrap();
    });
}
