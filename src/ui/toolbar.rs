use iced::alignment::Alignment;
use iced::widget::{button, column, row, text, text_input};
use iced::{Element, Length};

use crate::testing::Progress;
use crate::Message;

use super::style;

pub struct ToolbarState<'a> {
    pub import_path: &'a str,
    pub zip_name: &'a str,
    pub progress: Option<Progress>,
}

pub fn view<'a>(state: ToolbarState<'a>) -> Element<'a, Message> {
    let busy = state.progress.is_some();

    let upload = column![
        text("Upload JSON File:").size(12).color(style::TEXT_MUTED),
        row![
            text_input("path/to/tests.json", state.import_path)
                .on_input(Message::ImportPathChanged)
                .on_submit(Message::ImportPressed)
                .padding(10)
                .style(style::input_style)
                .width(Length::Fill),
            button(text("Upload JSON").size(13))
                .on_press_maybe((!busy).then_some(Message::ImportPressed))
                .padding([9, 14])
                .style(style::subtle_button),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    ]
    .spacing(4)
    .width(Length::Fill);

    let zip_name = column![
        text("ZIP File Name:").size(12).color(style::TEXT_MUTED),
        text_input("Enter name for the ZIP file", state.zip_name)
            .on_input(Message::ZipNameChanged)
            .padding(10)
            .style(style::input_style),
    ]
    .spacing(4)
    .width(Length::Fill);

    let download = button(text("Download All Tests").size(13))
        .on_press(Message::DownloadPressed)
        .padding([8, 14])
        .style(style::primary_button);

    let run_label = state
        .progress
        .map(|progress| progress.label())
        .unwrap_or_else(|| "Run All Tests".to_string());
    let run_all = button(text(run_label).size(13))
        .on_press_maybe((!busy).then_some(Message::RunAllPressed))
        .padding([8, 14])
        .style(style::subtle_button);

    column![
        row![upload, zip_name].spacing(10),
        row![
            text("Generated Tests").size(18),
            iced::widget::horizontal_space(),
            download,
            run_all,
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    ]
    .spacing(12)
    .into()
}
