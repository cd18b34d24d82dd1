//! Results Panel
//!
//! Numeric readout next to the plots: center, radius, principal stresses,
//! principal angle, and the stresses on the element rotated by θ.

use iced::widget::{column, container, row, text, Column, Space};
use iced::{Element, Length};

use mohr_core::stress::format_value;
use mohr_core::MohrAnalysis;

use crate::Message;

/// Render the analysis summary
pub fn view(analysis: &MohrAnalysis) -> Element<'static, Message> {
    let circle = column![
        text("Circle").size(13),
        value_line("Center", analysis.center),
        value_line("Radius", analysis.radius),
    ]
    .spacing(2);

    let principal = column![
        text("Principal").size(13),
        value_line("σ_1", analysis.sigma_1),
        value_line("σ_2", analysis.sigma_2),
        row![
            text("θ_p").size(11).width(Length::Fixed(60.0)),
            text(format!("{:.2}°", analysis.principal_angle_deg)).size(11),
        ],
        value_line("τ_max", analysis.max_shear),
    ]
    .spacing(2);

    let rotated = analysis.rotated;
    let rotated_section: Column<'static, Message> = column![
        text(format!("Rotated by θ = {}°", format_value(rotated.theta_deg))).size(13),
        value_line("σ_x'", rotated.sigma_x),
        value_line("σ_y'", rotated.sigma_y),
        value_line("τ_x'y'", rotated.tau_xy),
    ]
    .spacing(2);

    container(
        row![
            circle,
            Space::new().width(24),
            principal,
            Space::new().width(24),
            rotated_section,
        ]
        .padding(4),
    )
    .width(Length::Fill)
    .padding(6)
    .style(container::bordered_box)
    .into()
}

fn value_line(label: &'static str, value: f64) -> Element<'static, Message> {
    row![
        text(label).size(11).width(Length::Fixed(60.0)),
        text(format!("{:.2}", value)).size(11),
    ]
    .into()
}
