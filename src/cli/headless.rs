use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use serde::Serialize;
use tracing::{info, warn};

use crate::http::client;
use crate::import_export::{archive_name, build_archive, parse_tests};
use crate::storage;
use crate::testing::sequencer::run_to_completion;
use crate::testing::{RunSummary, Sequencer, TestCase, TestResult, TestStore};

use super::{Command, Config, OutputFormat};

pub fn execute(command: Command, config: &Config) -> anyhow::Result<ExitCode> {
    match command {
        Command::Run { file, format } => {
            let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
            let (summary, store) = runtime.block_on(run_file(&file, config))?;
            print_report(&summary, &store, format);
            Ok(if summary.failed == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Export { file } => {
            let saved = export_file(&file, config)?;
            println!("Saved {}", saved.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_store(file: &Path, config: &Config) -> anyhow::Result<TestStore> {
    let raw = storage::read_import_file(file)?;
    let cases = parse_tests(&raw, &config.base_url)
        .with_context(|| format!("failed to import `{}`", file.display()))?;
    info!(count = cases.len(), file = %file.display(), "imported tests");
    if cases.is_empty() {
        warn!(file = %file.display(), "import file contains no tests");
    }

    let mut store = TestStore::new();
    store.replace_all(cases);
    Ok(store)
}

pub async fn run_file(file: &Path, config: &Config) -> anyhow::Result<(RunSummary, TestStore)> {
    let mut store = load_store(file, config)?;
    let mut sequencer = Sequencer::new();
    let policy = config.status_policy;

    let summary = run_to_completion(&mut store, &mut sequencer, config.delay, |index, case| {
        client::execute(index, case, policy)
    })
    .await;

    Ok((summary, store))
}

pub fn export_file(file: &Path, config: &Config) -> anyhow::Result<PathBuf> {
    let store = load_store(file, config)?;
    let archive = build_archive(store.cases())?;
    let saved = storage::save_archive(
        &config.output_dir,
        &archive_name(&config.zip_name),
        &archive.bytes,
    )?;
    info!(entries = archive.entries, "exported tests");
    Ok(saved)
}

#[derive(Serialize)]
struct Report<'a> {
    summary: &'a RunSummary,
    tests: &'a [TestCase],
}

fn print_report(summary: &RunSummary, store: &TestStore, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for (index, case) in store.cases().iter().enumerate() {
                let mark = match case.result {
                    Some(TestResult::Success) => "PASS",
                    Some(TestResult::Failure) => "FAIL",
                    None => "SKIP",
                };
                let method = case.method.map(|m| m.as_str()).unwrap_or("-");
                println!(
                    "{mark} Test {} {method} {} {}",
                    index + 1,
                    case.url(),
                    case.detail.as_deref().unwrap_or_default()
                );
            }
            println!(
                "{} tests, {} passed, {} failed ({} ms)",
                summary.total, summary.passed, summary.failed, summary.duration_ms
            );
        }
        OutputFormat::Json => {
            let report = Report {
                summary,
                tests: store.cases(),
            };
            println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
        }
    }
}
