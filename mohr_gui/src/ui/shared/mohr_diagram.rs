//! Canvas program for the Mohr's circle plot
//!
//! Draws the circle outline, the x/y face points with their diameter, the
//! max/min shear points, the θ-rotated diameter, annotations, axes, legend
//! and titles. The view keeps an equal aspect ratio so the circle stays round.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use mohr_core::axes::{DataBounds, ScreenRect, ViewTransform};
use mohr_core::circle::{annotations, MohrCircle, StressPoints};
use mohr_core::stress::{format_value, StressState};

use super::plot::{self, AxesStyle};
use crate::Message;

const CIRCLE_COLOR: Color = Color::from_rgb(0.12, 0.47, 0.71);
const STRESS_COLOR: Color = Color::from_rgb(0.85, 0.1, 0.1);
const SHEAR_COLOR: Color = Color::from_rgb(0.1, 0.2, 0.85);
const ROTATED_COLOR: Color = Color::from_rgb(0.15, 0.6, 0.25);

// Room for title, tick labels and axis labels
const MARGIN_LEFT: f32 = 44.0;
const MARGIN_RIGHT: f32 = 12.0;
const MARGIN_TOP: f32 = 42.0;
const MARGIN_BOTTOM: f32 = 40.0;

/// Canvas program for Mohr's circle
pub struct MohrDiagram {
    state: StressState,
    samples: usize,
}

impl MohrDiagram {
    pub fn new(state: StressState, samples: usize) -> Self {
        Self { state, samples }
    }

    fn draw_circle(&self, frame: &mut Frame, view: &ViewTransform, circle: &MohrCircle) {
        if circle.is_degenerate() {
            return;
        }

        let mut points = circle.points(self.samples).map(|p| plot::to_point(view, p));
        let outline = Path::new(|builder| {
            if let Some(first) = points.next() {
                builder.move_to(first);
                for point in points {
                    builder.line_to(point);
                }
            }
        });
        frame.stroke(&outline, Stroke::default().with_color(CIRCLE_COLOR).with_width(2.0));
    }

    fn draw_points(&self, frame: &mut Frame, view: &ViewTransform, circle: &MohrCircle, text_color: Color) {
        // x and y face points joined by their diameter
        let faces = StressPoints::from_state(&self.state);
        plot::draw_dashed_line(frame, view, faces.x_face, faces.y_face, STRESS_COLOR);
        plot::draw_marker(frame, view, faces.x_face, STRESS_COLOR);
        plot::draw_marker(frame, view, faces.y_face, STRESS_COLOR);

        // Shear extremes
        let top = circle.max_shear_point();
        let bottom = circle.min_shear_point();
        plot::draw_dashed_line(frame, view, top, bottom, SHEAR_COLOR);
        plot::draw_marker(frame, view, top, SHEAR_COLOR);
        plot::draw_marker(frame, view, bottom, SHEAR_COLOR);

        for label in annotations(&self.state, circle) {
            plot::draw_annotation(frame, view, label.text, label.anchor, label.offset, text_color);
        }
    }

    /// Diameter for the element rotated by θ
    fn draw_rotated(&self, frame: &mut Frame, view: &ViewTransform) {
        let rotated = StressPoints::from_state(&self.state.rotated_by_theta());
        plot::draw_dashed_line(frame, view, rotated.x_face, rotated.y_face, ROTATED_COLOR);

        for at in [rotated.x_face, rotated.y_face] {
            let marker = Path::circle(plot::to_point(view, at), 3.5);
            frame.stroke(&marker, Stroke::default().with_color(ROTATED_COLOR).with_width(1.5));
        }

        plot::draw_annotation(
            frame,
            view,
            format!("θ = {}°", format_value(self.state.theta_deg)),
            rotated.x_face,
            (0.0, 12.0),
            ROTATED_COLOR,
        );
    }

    fn draw_legend(&self, frame: &mut Frame, view: &ViewTransform, text_color: Color, background: Color) {
        let rect = view.rect();
        let entries = [("Mohr's Circle", CIRCLE_COLOR), ("Rotated by θ", ROTATED_COLOR)];
        let width = 110.0;
        let height = 8.0 + entries.len() as f32 * 14.0;
        let origin = Point::new(rect.x + rect.width - width - 6.0, rect.y + 6.0);

        let panel = Path::rectangle(origin, iced::Size::new(width, height));
        frame.fill(&panel, Color { a: 0.85, ..background });
        frame.stroke(&panel, Stroke::default().with_color(Color { a: 0.4, ..text_color }).with_width(1.0));

        for (i, (label, color)) in entries.iter().enumerate() {
            let y = origin.y + 11.0 + i as f32 * 14.0;
            let sample = Path::line(Point::new(origin.x + 6.0, y), Point::new(origin.x + 24.0, y));
            frame.stroke(&sample, Stroke::default().with_color(*color).with_width(2.0));
            plot::draw_label(frame, *label, Point::new(origin.x + 30.0, y - 6.0), 10.0, text_color, false);
        }
    }
}

impl canvas::Program<Message> for MohrDiagram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let palette = theme.extended_palette();
        let text_color = palette.background.base.text;
        let style = AxesStyle {
            text: text_color,
            grid: palette.background.strong.color,
            axis: text_color,
            show_grid: true,
        };

        let plot_rect = ScreenRect::new(
            MARGIN_LEFT,
            MARGIN_TOP,
            (bounds.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            (bounds.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        );
        let view = ViewTransform::fit(DataBounds::for_mohr_circle(&self.state), plot_rect);
        let circle = MohrCircle::from_state(&self.state);

        plot::draw_axes(&mut frame, &view, &style);
        self.draw_circle(&mut frame, &view, &circle);
        self.draw_rotated(&mut frame, &view);
        self.draw_points(&mut frame, &view, &circle, text_color);
        self.draw_legend(&mut frame, &view, text_color, palette.background.base.color);

        // Titles
        let center_x = plot_rect.x + plot_rect.width / 2.0;
        plot::draw_label(&mut frame, "Mohr's Circle Construction", Point::new(center_x, 6.0), 14.0, text_color, true);
        plot::draw_label(&mut frame, "Shear Stress (τ)", Point::new(4.0, 26.0), 11.0, text_color, false);
        plot::draw_label(
            &mut frame,
            "Normal Stress (σ)",
            Point::new(center_x, bounds.height - 16.0),
            11.0,
            text_color,
            true,
        );

        vec![frame.into_geometry()]
    }
}
