mod cli;
mod error;
mod http;
mod import_export;
mod storage;
mod testing;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use iced::widget::{column, container, scrollable, text_editor};
use iced::{Element, Length, Task};
use serde_json::Value;
use tracing::{info, warn};

use cli::{Cli, Config};
use error::ImportError;
use http::client;
use http::method::HttpMethod;
use import_export::{archive_name, build_archive, parse_tests};
use testing::{Outcome, Sequencer, TestCase, TestStore};
use ui::style;

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_target(false)
        .init();

    let config = args.config();
    match args.command {
        Some(command) => cli::headless::execute(command, &config),
        None => {
            run_gui(config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_gui(config: Config) -> anyhow::Result<()> {
    iced::application("API Test Creator", update, view)
        .theme(|_| style::app_theme())
        .window_size((1100.0, 860.0))
        .run_with(move || (App::new(config), Task::none()))
        .map_err(|err| anyhow::anyhow!("failed to start the GUI: {err}"))
}

struct App {
    config: Config,
    base_url: String,
    endpoint: String,
    method: Option<HttpMethod>,
    input_editor: text_editor::Content,
    import_path: String,
    zip_name: String,
    store: TestStore,
    sequencer: Sequencer,
    error: Option<String>,
    notice: Option<String>,
}

impl App {
    fn new(config: Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            endpoint: String::new(),
            method: None,
            input_editor: text_editor::Content::new(),
            import_path: String::new(),
            zip_name: config.zip_name.clone(),
            store: TestStore::new(),
            sequencer: Sequencer::new(),
            error: None,
            notice: None,
            config,
        }
    }

    fn report_error(&mut self, err: impl ToString) {
        self.error = Some(err.to_string());
        self.notice = None;
    }

    fn report_notice(&mut self, notice: String) {
        self.notice = Some(notice);
        self.error = None;
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    BaseUrlChanged(String),
    EndpointChanged(String),
    MethodSelected(HttpMethod),
    InputEdited(text_editor::Action),
    ImportPathChanged(String),
    ZipNameChanged(String),
    AddTestPressed,
    ImportPressed,
    DownloadPressed,
    RunAllPressed,
    RunTestPressed(usize),
    TestFinished {
        index: usize,
        revision: u64,
        outcome: Outcome,
        sequence: bool,
    },
    PauseElapsed,
}

fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::BaseUrlChanged(base_url) => {
            app.base_url = base_url;
            Task::none()
        }
        Message::EndpointChanged(endpoint) => {
            app.endpoint = endpoint;
            Task::none()
        }
        Message::MethodSelected(method) => {
            app.method = Some(method);
            Task::none()
        }
        Message::InputEdited(action) => {
            app.input_editor.perform(action);
            Task::none()
        }
        Message::ImportPathChanged(path) => {
            app.import_path = path;
            Task::none()
        }
        Message::ZipNameChanged(name) => {
            app.zip_name = name;
            Task::none()
        }
        Message::AddTestPressed => {
            match new_test_from_form(app) {
                Ok(case) => {
                    info!(endpoint = %case.endpoint, "test added");
                    app.store.push(case);
                    app.endpoint.clear();
                    app.input_editor = text_editor::Content::new();
                    app.error = None;
                }
                Err(err) => app.report_error(err),
            }
            Task::none()
        }
        Message::ImportPressed => {
            match import_tests(app) {
                Ok(count) => app.report_notice(format!("Imported {count} tests")),
                Err(err) => {
                    warn!(error = %err, "import failed");
                    app.report_error(err);
                }
            }
            Task::none()
        }
        Message::DownloadPressed => {
            match download_tests(app) {
                Ok(notice) => app.report_notice(notice),
                Err(err) => {
                    warn!(error = %err, "download failed");
                    app.report_error(err);
                }
            }
            Task::none()
        }
        Message::RunAllPressed => match app.sequencer.start(app.store.len()) {
            Some(index) => {
                info!(total = app.store.len(), "running all tests");
                app.error = None;
                run_test(app, index, true)
            }
            None => {
                if app.store.is_empty() {
                    app.report_notice("No tests to run".to_string());
                }
                Task::none()
            }
        },
        Message::RunTestPressed(index) => run_test(app, index, false),
        Message::TestFinished {
            index,
            revision,
            outcome,
            sequence,
        } => {
            app.store.record(revision, index, &outcome);
            if sequence {
                let delay = app.config.delay;
                Task::perform(async move { tokio::time::sleep(delay).await }, |_| {
                    Message::PauseElapsed
                })
            } else {
                Task::none()
            }
        }
        Message::PauseElapsed => match app.sequencer.advance() {
            Some(index) => run_test(app, index, true),
            None => Task::none(),
        },
    }
}

fn run_test(app: &App, index: usize, sequence: bool) -> Task<Message> {
    let Some(case) = app.store.get(index).cloned() else {
        // Keep a sequence moving even if its entry vanished.
        return if sequence {
            Task::done(Message::PauseElapsed)
        } else {
            Task::none()
        };
    };

    let revision = app.store.revision();
    let policy = app.config.status_policy;
    Task::perform(client::execute(index, case, policy), move |outcome| {
        Message::TestFinished {
            index,
            revision,
            outcome,
            sequence,
        }
    })
}

fn new_test_from_form(app: &App) -> Result<TestCase, String> {
    let base_url = app.base_url.trim();
    if base_url.is_empty() {
        return Err("Base URL cannot be empty".to_string());
    }
    let endpoint = app.endpoint.trim();
    if endpoint.is_empty() {
        return Err("Endpoint cannot be empty".to_string());
    }

    let input: Value = serde_json::from_str(&app.input_editor.text())
        .map_err(|e| format!("Invalid JSON input: {e}"))?;
    let input = serde_json::to_string_pretty(&input)
        .map_err(|e| format!("Invalid JSON input: {e}"))?;

    Ok(TestCase::new(base_url, endpoint, app.method, input))
}

fn import_tests(app: &mut App) -> Result<usize, String> {
    if app.sequencer.is_busy() {
        return Err(ImportError::Busy.to_string());
    }
    let path = app.import_path.trim();
    if path.is_empty() {
        return Err("Choose a JSON file to upload".to_string());
    }

    let raw = storage::read_import_file(Path::new(path)).map_err(|e| e.to_string())?;
    let cases = parse_tests(&raw, app.base_url.trim()).map_err(|e| e.to_string())?;
    let count = cases.len();
    app.store.replace_all(cases);
    info!(count, file = path, "tests imported");
    Ok(count)
}

fn download_tests(app: &App) -> Result<String, String> {
    let archive = build_archive(app.store.cases()).map_err(|e| e.to_string())?;
    let saved = storage::save_archive(
        &app.config.output_dir,
        &archive_name(&app.zip_name),
        &archive.bytes,
    )
    .map_err(|e| e.to_string())?;
    Ok(format!("Saved {} tests to {}", archive.entries, saved.display()))
}

fn view(app: &App) -> Element<'_, Message> {
    let header = ui::header::view(ui::header::Counters {
        total: app.store.len(),
        success: app.store.success_count(),
        failure: app.store.failure_count(),
    });

    let form = ui::test_form::view(ui::test_form::TestFormState {
        base_url: &app.base_url,
        endpoint: &app.endpoint,
        method: app.method,
        input: &app.input_editor,
    });

    let toolbar = ui::toolbar::view(ui::toolbar::ToolbarState {
        import_path: &app.import_path,
        zip_name: &app.zip_name,
        progress: app.sequencer.progress(),
    });

    let content = column![
        container(form)
            .padding(16)
            .style(|_| style::surface_style(style::SURFACE_0, 8.0)),
        container(toolbar)
            .padding(16)
            .style(|_| style::surface_style(style::SURFACE_0, 8.0)),
        ui::test_list::view(app.store.cases()),
    ]
    .spacing(12)
    .padding(16);

    let mut layout = column![header].spacing(1);
    if let Some(banner) = ui::header::banner(app.error.as_deref(), app.notice.as_deref()) {
        layout = layout.push(banner);
    }
    layout = layout.push(scrollable(content).height(Length::Fill));

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| style::flat_surface_style(style::BG))
        .into()
}
