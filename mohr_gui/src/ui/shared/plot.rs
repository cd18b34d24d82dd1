//! Canvas drawing helpers shared by both diagrams
//!
//! Wraps [`ViewTransform`] so the diagrams can draw in data coordinates:
//! axes with grid and tick labels, markers, dashed lines, arrows and labels.

use iced::widget::canvas::{Frame, LineDash, Path, Stroke, Text};
use iced::{Color, Point};

use mohr_core::axes::{format_tick, nice_ticks, ViewTransform};

/// Approximate number of grid intervals per axis
const TICK_TARGET: usize = 6;

/// Screen point for a data point
pub fn to_point(view: &ViewTransform, data: (f64, f64)) -> Point {
    let (x, y) = view.to_screen(data);
    Point::new(x, y)
}

/// Colors used for axes decoration
#[derive(Debug, Clone, Copy)]
pub struct AxesStyle {
    pub text: Color,
    pub grid: Color,
    pub axis: Color,
    pub show_grid: bool,
}

/// Draw grid lines, the plot frame, tick labels and zero axes.
pub fn draw_axes(frame: &mut Frame, view: &ViewTransform, style: &AxesStyle) {
    let visible = view.visible;
    let x_ticks = nice_ticks(visible.x_min, visible.x_max, TICK_TARGET);
    let y_ticks = nice_ticks(visible.y_min, visible.y_max, TICK_TARGET);
    let x_step = tick_step(&x_ticks);
    let y_step = tick_step(&y_ticks);

    for &x in &x_ticks {
        let bottom = to_point(view, (x, visible.y_min));
        if style.show_grid {
            let top = to_point(view, (x, visible.y_max));
            frame.stroke(&Path::line(top, bottom), Stroke::default().with_color(style.grid).with_width(1.0));
        }
        frame.fill_text(Text {
            content: format_tick(x, x_step),
            position: Point::new(bottom.x, bottom.y + 4.0),
            color: style.text,
            size: iced::Pixels(9.0),
            align_x: iced::alignment::Horizontal::Center.into(),
            ..Text::default()
        });
    }

    for &y in &y_ticks {
        let left = to_point(view, (visible.x_min, y));
        if style.show_grid {
            let right = to_point(view, (visible.x_max, y));
            frame.stroke(&Path::line(left, right), Stroke::default().with_color(style.grid).with_width(1.0));
        }
        frame.fill_text(Text {
            content: format_tick(y, y_step),
            position: Point::new(left.x - 4.0, left.y - 5.0),
            color: style.text,
            size: iced::Pixels(9.0),
            align_x: iced::alignment::Horizontal::Right.into(),
            ..Text::default()
        });
    }

    // Zero axes, only when the origin lines are in view
    if visible.x_min <= 0.0 && visible.x_max >= 0.0 {
        let line = Path::line(to_point(view, (0.0, visible.y_min)), to_point(view, (0.0, visible.y_max)));
        frame.stroke(&line, Stroke::default().with_color(style.axis).with_width(1.0));
    }
    if visible.y_min <= 0.0 && visible.y_max >= 0.0 {
        let line = Path::line(to_point(view, (visible.x_min, 0.0)), to_point(view, (visible.x_max, 0.0)));
        frame.stroke(&line, Stroke::default().with_color(style.axis).with_width(1.0));
    }

    // Plot frame
    let rect = view.rect();
    let border = Path::rectangle(Point::new(rect.x, rect.y), iced::Size::new(rect.width, rect.height));
    frame.stroke(&border, Stroke::default().with_color(style.axis).with_width(1.0));
}

fn tick_step(ticks: &[f64]) -> f64 {
    match ticks {
        [a, b, ..] => b - a,
        _ => 1.0,
    }
}

/// Filled circular marker at a data point
pub fn draw_marker(frame: &mut Frame, view: &ViewTransform, at: (f64, f64), color: Color) {
    let marker = Path::circle(to_point(view, at), 4.0);
    frame.fill(&marker, color);
}

/// Dashed line between two data points
pub fn draw_dashed_line(frame: &mut Frame, view: &ViewTransform, from: (f64, f64), to: (f64, f64), color: Color) {
    let line = Path::line(to_point(view, from), to_point(view, to));
    frame.stroke(
        &line,
        Stroke {
            line_dash: LineDash {
                segments: &[6.0, 4.0],
                offset: 0,
            },
            ..Stroke::default().with_color(color).with_width(1.5)
        },
    );
}

/// Arrow from `tail` along `delta`, in data coordinates.
///
/// The head is drawn past the tip and sized from `shaft_width` (data units).
/// Zero-length arrows draw nothing.
pub fn draw_arrow(
    frame: &mut Frame,
    view: &ViewTransform,
    tail: (f64, f64),
    delta: (f64, f64),
    shaft_width: f64,
    color: Color,
) {
    let length = delta.0.hypot(delta.1);
    if length == 0.0 {
        return;
    }

    let (ux, uy) = (delta.0 / length, delta.1 / length);
    let tip = (tail.0 + delta.0, tail.1 + delta.1);
    let head_width = 3.0 * shaft_width;
    let head_length = 1.5 * head_width;
    let half = head_width / 2.0;

    let shaft = Path::line(to_point(view, tail), to_point(view, tip));
    frame.stroke(
        &shaft,
        Stroke::default()
            .with_color(color)
            .with_width(view.length_to_screen(shaft_width).max(1.0)),
    );

    let point = (tip.0 + ux * head_length, tip.1 + uy * head_length);
    let left = (tip.0 - uy * half, tip.1 + ux * half);
    let right = (tip.0 + uy * half, tip.1 - ux * half);
    let head = Path::new(|builder| {
        builder.move_to(to_point(view, point));
        builder.line_to(to_point(view, left));
        builder.line_to(to_point(view, right));
        builder.close();
    });
    frame.fill(&head, color);
}

/// Text anchored at a data point and shifted by a screen offset (+y up).
pub fn draw_annotation(
    frame: &mut Frame,
    view: &ViewTransform,
    content: String,
    anchor: (f64, f64),
    offset: (f32, f32),
    color: Color,
) {
    let base = to_point(view, anchor);
    frame.fill_text(Text {
        content,
        position: Point::new(base.x + offset.0, base.y - offset.1 - 5.0),
        color,
        size: iced::Pixels(10.0),
        align_x: iced::alignment::Horizontal::Center.into(),
        ..Text::default()
    });
}

/// Plain label at a screen position
pub fn draw_label(frame: &mut Frame, content: impl Into<String>, position: Point, size: f32, color: Color, centered: bool) {
    let align_x = if centered {
        iced::alignment::Horizontal::Center
    } else {
        iced::alignment::Horizontal::Left
    };
    frame.fill_text(Text {
        content: content.into(),
        position,
        color,
        size: iced::Pixels(size),
        align_x: align_x.into(),
        ..Text::default()
    });
}
