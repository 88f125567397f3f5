use iced::widget::{button, column, pick_list, row, text, text_editor, text_input};
use iced::{Element, Length};

use crate::http::method::HttpMethod;
use crate::Message;

use super::style;

pub struct TestFormState<'a> {
    pub base_url: &'a str,
    pub endpoint: &'a str,
    pub method: Option<HttpMethod>,
    pub input: &'a text_editor::Content,
}

pub fn view<'a>(state: TestFormState<'a>) -> Element<'a, Message> {
    let base_url = labeled(
        "Base URL:",
        text_input("https://api.example.com", state.base_url)
            .on_input(Message::BaseUrlChanged)
            .padding(10)
            .style(style::input_style)
            .into(),
    );

    let endpoint = labeled(
        "Endpoint:",
        text_input("/users", state.endpoint)
            .on_input(Message::EndpointChanged)
            .on_submit(Message::AddTestPressed)
            .padding(10)
            .style(style::input_style)
            .into(),
    );

    let method = column![
        text("Method:").size(12).color(style::TEXT_MUTED),
        pick_list(&HttpMethod::ALL[..], state.method, Message::MethodSelected)
            .placeholder("Method")
            .width(130)
            .padding([9, 8])
            .style(style::pick_list_style),
    ]
    .spacing(4);

    let input = labeled(
        "Input JSON:",
        text_editor(state.input)
            .placeholder("{ \"name\": \"value\" }")
            .on_action(Message::InputEdited)
            .height(200)
            .font(iced::Font::MONOSPACE)
            .style(style::editor_style)
            .into(),
    );

    let add_button = button(text("Add Test").size(13))
        .on_press(Message::AddTestPressed)
        .padding([8, 16])
        .style(style::primary_button);

    column![
        row![method, base_url, endpoint].spacing(10),
        input,
        add_button,
    ]
    .spacing(10)
    .into()
}

fn labeled<'a>(label: &'a str, field: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(12).color(style::TEXT_MUTED), field]
        .spacing(4)
        .width(Length::Fill)
        .into()
}
