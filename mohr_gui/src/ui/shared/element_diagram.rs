//! Canvas program for the stress element
//!
//! A unit square inside a fixed [0, 2] × [0, 2] view with eight arrows
//! scaled from σx, σy and τxy. x-face arrows are red, y-face arrows purple.

use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme};

use mohr_core::axes::{DataBounds, ScreenRect, ViewTransform};
use mohr_core::element::{stress_arrows, Face, SQUARE_ORIGIN, SQUARE_SIDE, VIEW_MAX, VIEW_MIN};
use mohr_core::stress::StressState;

use super::plot::{self, AxesStyle};
use crate::Message;

const X_FACE_COLOR: Color = Color::from_rgb(0.85, 0.1, 0.1);
const Y_FACE_COLOR: Color = Color::from_rgb(0.5, 0.0, 0.5);

/// Arrow shaft width in view units
const ARROW_WIDTH: f64 = 0.005;

const MARGIN: f32 = 28.0;

/// Canvas program for the stress element diagram
pub struct ElementDiagram {
    state: StressState,
    arrow_scale: f64,
}

impl ElementDiagram {
    pub fn new(state: StressState, arrow_scale: f64) -> Self {
        Self { state, arrow_scale }
    }
}

impl canvas::Program<Message> for ElementDiagram {
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
        let text_color = theme.extended_palette().background.base.text;

        let plot_rect = ScreenRect::new(
            MARGIN,
            MARGIN,
            (bounds.width - 2.0 * MARGIN).max(1.0),
            (bounds.height - 2.0 * MARGIN).max(1.0),
        );
        let view = ViewTransform::fit_fixed(DataBounds::new(VIEW_MIN, VIEW_MAX, VIEW_MIN, VIEW_MAX), plot_rect);

        plot::draw_axes(
            &mut frame,
            &view,
            &AxesStyle {
                text: text_color,
                grid: Color::TRANSPARENT,
                axis: text_color,
                show_grid: false,
            },
        );

        // Element
        let corner = plot::to_point(&view, (SQUARE_ORIGIN.0, SQUARE_ORIGIN.1 + SQUARE_SIDE));
        let side = view.length_to_screen(SQUARE_SIDE);
        let square = Path::rectangle(corner, iced::Size::new(side, side));
        frame.stroke(&square, Stroke::default().with_color(text_color).with_width(1.5));

        for arrow in stress_arrows(&self.state, self.arrow_scale) {
            let color = match arrow.face {
                Face::X => X_FACE_COLOR,
                Face::Y => Y_FACE_COLOR,
            };
            plot::draw_arrow(&mut frame, &view, arrow.origin, arrow.delta, ARROW_WIDTH, color);
        }

        plot::draw_label(
            &mut frame,
            "Stress Element",
            Point::new(bounds.width / 2.0, 6.0),
            14.0,
            text_color,
            true,
        );

        vec![frame.into_geometry()]
    }
}
