use std::collections::HashMap;
use std::io::{Cursor, Write};

use serde_json::Value;
use tracing::warn;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::ExportError;
use crate::testing::TestCase;

pub const DEFAULT_ARCHIVE_NAME: &str = "tests.zip";
pub const SCRIPT_EXTENSION: &str = "js";

/// A finished zip held in memory.
#[derive(Debug, Clone)]
pub struct TestArchive {
    pub bytes: Vec<u8>,
    pub entries: usize,
}

/// Archive entry name for an endpoint: `/` becomes `_`, then anything
/// outside `[A-Za-z0-9_]` is dropped.
///
/// Not unique: `/a-b` and `/ab` both map to `_ab.js`.
pub fn script_file_name(endpoint: &str) -> String {
    let stem: String = endpoint
        .replace('/', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    format!("{stem}.{SCRIPT_EXTENSION}")
}

/// Download name for the archive, falling back to `tests.zip`.
pub fn archive_name(requested: &str) -> String {
    let requested = requested.trim();
    if requested.is_empty() {
        DEFAULT_ARCHIVE_NAME.to_string()
    } else if requested.contains('.') {
        requested.to_string()
    } else {
        format!("{requested}.zip")
    }
}

/// Render a Jest + axios script that replays the call and checks for 200.
pub fn render_script(case: &TestCase) -> Result<String, serde_json::Error> {
    let body: Value = serde_json::from_str(&case.input)?;
    let body = serde_json::to_string_pretty(&body)?;
    let method_line = case
        .method
        .map(|method| format!("    method: '{method}',\n"))
        .unwrap_or_default();

    Ok(format!(
        r#"import axios from 'axios';

test('Test {name}', async () => {{
  const response = await axios({{
{method_line}    url: '{url}',
    data: {body}
  }});
  // Add your assertions here
  expect(response.status).toBe(200);
  // expect(response.data).toEqual(expectedData);
}});
"#,
        name = js_escape(&case.endpoint),
        url = js_escape(&case.url()),
    ))
}

/// Package one script per test case into a zip.
///
/// A later test whose file name collides with an earlier one replaces it.
pub fn build_archive(cases: &[TestCase]) -> Result<TestArchive, ExportError> {
    let mut files: Vec<(String, String)> = Vec::with_capacity(cases.len());
    let mut positions: HashMap<String, usize> = HashMap::new();

    for (index, case) in cases.iter().enumerate() {
        let content = render_script(case).map_err(|source| ExportError::InvalidJson {
            index,
            endpoint: case.endpoint.clone(),
            source,
        })?;
        let name = script_file_name(&case.endpoint);

        match positions.get(&name) {
            Some(&position) => {
                warn!(test = index + 1, file = %name, "archive entry overwritten by a later test");
                files[position].1 = content;
            }
            None => {
                positions.insert(name.clone(), files.len());
                files.push((name, content));
            }
        }
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default();
    for (name, content) in &files {
        zip.start_file(name.as_str(), options)?;
        zip.write_all(content.as_bytes())?;
    }
    let bytes = zip.finish()?.into_inner();

    Ok(TestArchive {
        bytes,
        entries: files.len(),
    })
}

fn js_escape(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use zip::ZipArchive;

    use super::*;
    use crate::http::method::HttpMethod;

    fn case(endpoint: &str, method: Option<HttpMethod>, input: &str) -> TestCase {
        TestCase::new("https://api.x", endpoint, method, input)
    }

    fn read_entry(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn file_names_strip_separators_and_symbols() {
        assert_eq!(script_file_name("/users"), "_users.js");
        assert_eq!(script_file_name("/users/{id}/posts?x=1"), "_users_id_postsx1.js");
        assert_eq!(script_file_name("/a-b"), "_ab.js");
        assert_eq!(script_file_name(""), ".js");
    }

    #[test]
    fn archive_name_falls_back_to_default() {
        assert_eq!(archive_name(""), "tests.zip");
        assert_eq!(archive_name("   "), "tests.zip");
        assert_eq!(archive_name("smoke"), "smoke.zip");
        assert_eq!(archive_name("smoke.zip"), "smoke.zip");
    }

    #[test]
    fn script_contains_method_url_and_pretty_body() {
        let script = render_script(&case("/users", Some(HttpMethod::Post), r#"{"name":"ada"}"#)).unwrap();

        assert!(script.starts_with("import axios from 'axios';\n"));
        assert!(script.contains("test('Test /users', async () => {"));
        assert!(script.contains("    method: 'POST',\n"));
        assert!(script.contains("    url: 'https://api.x/users',\n"));
        assert!(script.contains("    data: {\n  \"name\": \"ada\"\n}\n"));
        assert!(script.contains("// Add your assertions here"));
        assert!(script.contains("expect(response.status).toBe(200);"));
    }

    #[test]
    fn script_without_method_omits_method_line() {
        let script = render_script(&case("/users", None, "{}")).unwrap();
        assert!(!script.contains("method:"));
        assert!(script.contains("url: 'https://api.x/users'"));
    }

    #[test]
    fn script_escapes_quotes() {
        let script = render_script(&case("/o'neil", Some(HttpMethod::Get), "{}")).unwrap();
        assert!(script.contains("url: 'https://api.x/o\\'neil'"));
    }

    #[test]
    fn archive_has_one_entry_per_test() {
        let cases = vec![
            case("/users", Some(HttpMethod::Get), "{}"),
            case("/orders", Some(HttpMethod::Post), r#"{"qty": 2}"#),
            case("/orders/1", Some(HttpMethod::Delete), "null"),
        ];
        let archive = build_archive(&cases).unwrap();

        assert_eq!(archive.entries, 3);
        let zip = ZipArchive::new(Cursor::new(archive.bytes.as_slice())).unwrap();
        assert_eq!(zip.len(), 3);

        let users = read_entry(&archive.bytes, "_users.js");
        assert!(users.contains("url: 'https://api.x/users'"));
        let orders = read_entry(&archive.bytes, "_orders.js");
        assert!(orders.contains("\"qty\": 2"));
        let delete = read_entry(&archive.bytes, "_orders_1.js");
        assert!(delete.contains("method: 'DELETE'"));
    }

    #[test]
    fn colliding_names_keep_the_later_test() {
        let cases = vec![
            case("/a-b", Some(HttpMethod::Get), "{}"),
            case("/ab", Some(HttpMethod::Post), "{}"),
        ];
        let archive = build_archive(&cases).unwrap();

        assert_eq!(archive.entries, 1);
        let content = read_entry(&archive.bytes, "_ab.js");
        assert!(content.contains("method: 'POST'"));
    }

    #[test]
    fn invalid_input_names_the_offending_test() {
        let cases = vec![
            case("/ok", Some(HttpMethod::Get), "{}"),
            case("/broken", Some(HttpMethod::Get), "{nope"),
        ];
        let err = build_archive(&cases).unwrap_err();
        assert!(matches!(err, ExportError::InvalidJson { index: 1, .. }));
        assert!(err.to_string().starts_with("Test 2 (/broken)"));
    }

    #[test]
    fn empty_store_builds_empty_archive() {
        let archive = build_archive(&[]).unwrap();
        assert_eq!(archive.entries, 0);
        assert_eq!(ZipArchive::new(Cursor::new(archive.bytes)).unwrap().len(), 0);
    }
}
