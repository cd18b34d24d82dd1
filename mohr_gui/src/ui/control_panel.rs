//! Control Panel (Bottom)
//!
//! Three sliders (σx, σy, τxy) and four text boxes (σx, σy, τxy, θ).
//! Every widget reads its value from the [`StressController`], so a change
//! made through one control shows up in its partner on the next view.

use iced::widget::{column, container, row, slider, text, text_input, Row};
use iced::{Alignment, Element, Length};

use mohr_core::stress::{format_value, InputField};
use mohr_core::StressController;

use crate::Message;

/// Render sliders and text boxes
pub fn view(controller: &StressController) -> Element<'_, Message> {
    let sliders = InputField::SLIDERS
        .iter()
        .fold(column![].spacing(6), |col, &field| col.push(slider_row(controller, field)));

    let text_boxes = InputField::ALL
        .iter()
        .fold(row![].spacing(18), |r: Row<'_, Message>, &field| r.push(text_box(controller, field)));

    container(column![sliders, text_boxes].spacing(12))
        .width(Length::Fill)
        .padding(10)
        .style(container::bordered_box)
        .into()
}

fn slider_row(controller: &StressController, field: InputField) -> Element<'_, Message> {
    let settings = controller.settings();
    let value = controller.slider_value(field).unwrap_or(settings.slider_min);

    row![
        text(field.slider_label()).size(12).width(Length::Fixed(44.0)),
        slider(settings.slider_range(), value, move |v| Message::SliderChanged(field, v))
            .step(settings.slider_step)
            .width(Length::Fill),
        text(format_value(value)).size(11).width(Length::Fixed(48.0)),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn text_box(controller: &StressController, field: InputField) -> Element<'_, Message> {
    row![
        text(field.text_label()).size(12),
        text_input("", controller.text(field))
            .on_input(move |s| Message::TextEdited(field, s))
            .on_submit(Message::TextSubmitted(field))
            .width(Length::Fixed(72.0))
            .padding(4)
            .size(12),
    ]
    .align_y(Alignment::Center)
    .into()
}
