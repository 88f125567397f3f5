use iced::alignment::Alignment;
use iced::widget::{container, horizontal_space, row, text};
use iced::{Color, Element, Length};

use crate::Message;

use super::style;

pub struct Counters {
    pub total: usize,
    pub success: usize,
    pub failure: usize,
}

pub fn view<'a>(counters: Counters) -> Element<'a, Message> {
    container(
        row![
            text("API Test Creator").size(16),
            text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(10).color(style::TEXT_MUTED),
            horizontal_space(),
            counter("No. Tests", counters.total, style::TEXT),
            counter("No. Success", counters.success, style::PRIMARY),
            counter("No. Failures", counters.failure, style::DANGER),
        ]
        .spacing(12)
        .padding([8, 12])
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(|_| style::surface_style(style::SURFACE_1, 0.0))
    .into()
}

fn counter<'a>(label: &'a str, value: usize, color: Color) -> Element<'a, Message> {
    row![
        text(label).size(12).color(color),
        text(value.to_string()).size(12),
    ]
    .spacing(4)
    .into()
}

/// Error or notice line under the header; errors win.
pub fn banner<'a>(error: Option<&'a str>, notice: Option<&'a str>) -> Option<Element<'a, Message>> {
    let (message, color) = match (error, notice) {
        (Some(err), _) => (format!("Error: {err}"), style::DANGER),
        (None, Some(notice)) => (notice.to_string(), style::PRIMARY),
        (None, None) => return None,
    };

    Some(
        container(text(message).size(12).color(color))
            .padding([6, 12])
            .width(Length::Fill)
            .style(|_| style::flat_surface_style(style::SURFACE_0))
            .into(),
    )
}
