use gpui::{
    App, BorderStyle, Bounds, Corners, Edges, PathBuilder, Pixels, Point, TextRun, Window, font,
    point, px, quad,
};

use crate::geom::ScreenPoint;
use crate::render::{Color, RenderCommand, RenderList};

const STROKE_WIDTH: f32 = 1.0;
const FONT_SIZE: f32 = 12.0;

pub(crate) fn paint_list(list: &RenderList, origin: Point<Pixels>, window: &mut Window, cx: &mut App) {
    let mut lines: Vec<(ScreenPoint, ScreenPoint)> = Vec::new();
    let mut line_color: Option<Color> = None;

    for command in list.commands() {
        // Consecutive lines of one color share a path.
        if let RenderCommand::Line { start, end, color } = command {
            if line_color.is_some_and(|c| c != *color) {
                flush_lines(window, origin, &mut lines, line_color);
            }
            line_color = Some(*color);
            lines.push((*start, *end));
            continue;
        }
        flush_lines(window, origin, &mut lines, line_color);
        match command {
            RenderCommand::Circle {
                center,
                diameter,
                color,
            } => paint_circle(window, origin, *center, *diameter, *color),
            RenderCommand::Text {
                origin: baseline,
                text,
                color,
            } => paint_text(window, cx, origin, *baseline, text, *color),
            RenderCommand::Line { .. } => {}
        }
    }
    flush_lines(window, origin, &mut lines, line_color);
}

fn flush_lines(
    window: &mut Window,
    origin: Point<Pixels>,
    lines: &mut Vec<(ScreenPoint, ScreenPoint)>,
    color: Option<Color>,
) {
    let Some(color) = color else {
        lines.clear();
        return;
    };
    if lines.is_empty() {
        return;
    }
    let mut builder = PathBuilder::stroke(px(STROKE_WIDTH));
    for (start, end) in lines.drain(..) {
        builder.move_to(to_point(origin, start));
        builder.line_to(to_point(origin, end));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, to_rgba(color));
    }
}

fn paint_circle(
    window: &mut Window,
    origin: Point<Pixels>,
    center: ScreenPoint,
    diameter: f32,
    color: Color,
) {
    let radius = diameter.max(1.0) * 0.5;
    let bounds = Bounds::from_corners(
        to_point(origin, center.offset(-radius, -radius)),
        to_point(origin, center.offset(radius, radius)),
    );
    window.paint_quad(quad(
        bounds,
        Corners::all(px(radius)),
        to_rgba(color),
        Edges::all(px(0.0)),
        to_rgba(color),
        BorderStyle::default(),
    ));
}

fn paint_text(
    window: &mut Window,
    cx: &mut App,
    origin: Point<Pixels>,
    baseline: ScreenPoint,
    text: &str,
    color: Color,
) {
    if text.is_empty() {
        return;
    }
    let run = TextRun {
        len: text.len(),
        font: font(".SystemUIFont"),
        color: to_hsla(color),
        background_color: None,
        underline: None,
        strikethrough: None,
    };
    let shaped = window
        .text_system()
        .shape_line(text.to_string().into(), px(FONT_SIZE), &[run], None);
    let line_height = shaped.ascent + shaped.descent;
    let top_left = to_point(origin, baseline);
    let top_left = point(top_left.x, top_left.y - shaped.ascent);
    let _ = shaped.paint(top_left, line_height, window, cx);
}

fn to_point(origin: Point<Pixels>, p: ScreenPoint) -> Point<Pixels> {
    point(origin.x + px(p.x), origin.y + px(p.y))
}

fn to_rgba(color: Color) -> gpui::Rgba {
    gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    }
}

pub(crate) fn to_hsla(color: Color) -> gpui::Hsla {
    gpui::Hsla::from(to_rgba(color))
}
