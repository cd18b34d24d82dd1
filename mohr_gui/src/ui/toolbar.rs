//! Header bar
//!
//! Application title and the Reset button.

use iced::widget::{button, row, text, Space};
use iced::{Alignment, Element, Length, Padding};

use crate::Message;

/// Render the application header
pub fn view_header() -> Element<'static, Message> {
    row![
        text("Mohr's Circle Explorer").size(22),
        Space::new().width(Length::Fill),
        button(text("Reset").size(11))
            .on_press(Message::Reset)
            .padding(Padding::from([4, 8]))
            .style(button::secondary),
    ]
    .padding(Padding::from([4, 0]))
    .align_y(Alignment::Center)
    .into()
}
