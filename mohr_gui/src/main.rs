//! # Mohr's Circle Explorer
//!
//! Interactive Mohr's circle for a plane stress state. Two canvases side by
//! side (the circle plot and the stress element) follow one shared state,
//! edited through sliders and text boxes. Built with Iced.
//!
//! All state lives in one [`StressController`] owned by [`App`]. Each
//! control event becomes a [`Message`]; `update` hands it to the controller
//! and `view` rebuilds every widget and both diagrams from the result.

mod ui;

use iced::widget::{column, container, row, Canvas};
use iced::{Element, Length, Size, Task};
use tracing::{debug, info, Level};

use mohr_core::{InputField, StressController};

use ui::shared::element_diagram::ElementDiagram;
use ui::shared::mohr_diagram::MohrDiagram;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    info!("Mohr's circle explorer starting (v{})", env!("CARGO_PKG_VERSION"));

    iced::application(App::new, App::update, App::view)
        .title("Mohr's Circle")
        .window_size(Size::new(1100.0, 800.0))
        .run()
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A slider moved
    SliderChanged(InputField, f64),
    /// Text box content changed (not yet submitted)
    TextEdited(InputField, String),
    /// Enter pressed in a text box
    TextSubmitted(InputField),
    /// Restore the initial stress state
    Reset,
}

pub struct App {
    controller: StressController,
}

impl App {
    fn new() -> Self {
        let controller = StressController::default();
        info!(state = ?controller.state(), "Initial stress state");
        Self { controller }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SliderChanged(field, value) => {
                self.controller.set_from_slider(field, value);
            }
            Message::TextEdited(field, text) => {
                self.controller.edit_text(field, text);
            }
            Message::TextSubmitted(field) => {
                // Malformed input is dropped, the previous value stays
                if let Err(e) = self.controller.submit_text(field) {
                    debug!(error = %e, "Ignoring text input");
                }
            }
            Message::Reset => {
                info!("Resetting stress state");
                self.controller.reset();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let state = *self.controller.state();
        let settings = self.controller.settings();

        let circle_plot: Element<'_, Message> = Canvas::new(MohrDiagram::new(state, settings.circle_samples))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
        let element_plot: Element<'_, Message> = Canvas::new(ElementDiagram::new(state, settings.arrow_scale))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        let plots = row![
            container(circle_plot)
                .width(Length::FillPortion(55))
                .height(Length::Fill)
                .style(container::bordered_box),
            container(element_plot)
                .width(Length::FillPortion(45))
                .height(Length::Fill)
                .style(container::bordered_box),
        ]
        .spacing(8)
        .height(Length::Fill);

        column![
            ui::toolbar::view_header(),
            plots,
            ui::results_panel::view(&self.controller.analysis()),
            ui::control_panel::view(&self.controller),
        ]
        .spacing(8)
        .padding(10)
        .into()
    }
}
