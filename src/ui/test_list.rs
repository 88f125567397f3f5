use iced::alignment::Alignment;
use iced::widget::{button, column, container, horizontal_space, row, text, Column};
use iced::{Element, Font, Length};

use crate::http::method::HttpMethod;
use crate::testing::TestCase;
use crate::Message;

use super::style;

pub fn view<'a>(cases: &'a [TestCase]) -> Element<'a, Message> {
    if cases.is_empty() {
        return text("No tests yet. Add one above or upload a JSON file.")
            .size(12)
            .color(style::TEXT_MUTED)
            .into();
    }

    cases
        .iter()
        .enumerate()
        .fold(Column::new().spacing(10), |list, (index, case)| list.push(card(index, case)))
        .into()
}

fn card<'a>(index: usize, case: &'a TestCase) -> Element<'a, Message> {
    let title = row![
        text(format!("Test {}", index + 1)).size(14),
        method_badge(case.method),
        text(case.url()).size(12).color(style::TEXT_MUTED),
        horizontal_space(),
        button(text("Run Test").size(12))
            .on_press(Message::RunTestPressed(index))
            .padding([6, 12])
            .style(style::subtle_button),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let input = container(text(case.input.as_str()).size(12).font(Font::MONOSPACE))
        .padding(8)
        .width(Length::Fill)
        .style(|_| style::flat_surface_style(style::SURFACE_0));

    let mut body = column![title, input].spacing(8);
    if let Some(detail) = &case.detail {
        body = body.push(text(detail.as_str()).size(12).color(style::result_color(case.result)));
    }

    let result = case.result;
    container(body)
        .padding(12)
        .width(Length::Fill)
        .style(move |_| style::card_style(result))
        .into()
}

fn method_badge<'a>(method: Option<HttpMethod>) -> Element<'a, Message> {
    let color = style::method_color(method);
    let label = method.map(|m| m.as_str()).unwrap_or("NONE");
    container(text(label).size(10).color(color))
        .padding([2, 6])
        .style(move |_| {
            iced::widget::container::Style::default()
                .background(iced::Background::Color(iced::Color { a: 0.12, ..color }))
                .border(iced::Border {
                    radius: 3.0.into(),
                    width: 0.0,
                    color: iced::Color::TRANSPARENT,
                })
        })
        .into()
}
