use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ImportError;
use crate::http::method::HttpMethod;
use crate::testing::TestCase;

/// Parse an import file into fresh test cases.
///
/// Every element must be an object with `endpoint`, `method` and `input`.
/// Any `baseUrl` or `result` in the file is ignored: each case gets
/// `base_url` and starts unrun. The first invalid element aborts the whole
/// import so the caller can leave its store untouched.
pub fn parse_tests(raw: &str, base_url: &str) -> Result<Vec<TestCase>, ImportError> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Array(items) = value else {
        return Err(ImportError::NotAnArray);
    };

    let cases = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| parse_item(index, item, base_url))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = cases.len(), "parsed import file");
    Ok(cases)
}

fn parse_item(index: usize, item: Value, base_url: &str) -> Result<TestCase, ImportError> {
    let Value::Object(mut fields) = item else {
        return Err(ImportError::NotAnObject { index });
    };

    let endpoint = take_string(&mut fields, index, "endpoint")?;
    let method = take_string(&mut fields, index, "method")?
        .parse::<HttpMethod>()
        .map_err(|message| ImportError::InvalidField { index, message })?;
    let input = fields
        .remove("input")
        .ok_or(ImportError::MissingField { index, field: "input" })?;

    Ok(TestCase::new(
        base_url,
        endpoint,
        Some(method),
        serde_json::to_string_pretty(&input)?,
    ))
}

fn take_string(
    fields: &mut Map<String, Value>,
    index: usize,
    field: &'static str,
) -> Result<String, ImportError> {
    match fields.remove(field) {
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(ImportError::InvalidField {
            index,
            message: format!("`{field}` must be a string, got {other}"),
        }),
        None => Err(ImportError::MissingField { index, field }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {"endpoint": "/users", "method": "GET", "input": {}},
        {"endpoint": "/users", "method": "post", "input": {"name": "ada", "tags": [1, 2]},
         "baseUrl": "https://ignored.example", "result": "success"},
        {"endpoint": "/health", "method": "HEAD", "input": null, "note": "extra"}
    ]"#;

    #[test]
    fn imports_every_element_with_current_base_url() {
        let cases = parse_tests(SAMPLE, "https://api.x").unwrap();

        assert_eq!(cases.len(), 3);
        assert!(cases.iter().all(|case| case.base_url == "https://api.x"));
        assert!(cases.iter().all(|case| case.result.is_none()));
        assert_eq!(cases[1].method, Some(HttpMethod::Post));
        assert_eq!(cases[2].method, Some(HttpMethod::Head));
    }

    #[test]
    fn pretty_prints_input() {
        let cases = parse_tests(SAMPLE, "").unwrap();

        assert_eq!(cases[0].input, "{}");
        assert_eq!(
            cases[1].input,
            "{\n  \"name\": \"ada\",\n  \"tags\": [\n    1,\n    2\n  ]\n}"
        );
        assert_eq!(cases[2].input, "null");
    }

    #[test]
    fn empty_array_is_a_valid_import() {
        assert!(parse_tests("[]", "https://api.x").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_array() {
        let err = parse_tests(r#"{"endpoint": "/users"}"#, "").unwrap_err();
        assert!(matches!(err, ImportError::NotAnArray));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_tests("[{\"endpoint\": ", "").unwrap_err();
        assert!(matches!(err, ImportError::Parse(_)));
    }

    #[test]
    fn rejects_missing_method_with_index() {
        let raw = r#"[{"endpoint": "/a", "method": "GET", "input": {}},
                      {"endpoint": "/b", "input": {}}]"#;
        let err = parse_tests(raw, "").unwrap_err();
        assert!(matches!(err, ImportError::MissingField { index: 1, field: "method" }));
        assert_eq!(err.to_string(), "Test 2 is missing `method`");
    }

    #[test]
    fn rejects_unknown_method_and_bad_types() {
        let err = parse_tests(r#"[{"endpoint": "/a", "method": "FETCH", "input": {}}]"#, "").unwrap_err();
        assert!(matches!(err, ImportError::InvalidField { index: 0, .. }));

        let err = parse_tests(r#"[{"endpoint": 7, "method": "GET", "input": {}}]"#, "").unwrap_err();
        assert!(err.to_string().contains("`endpoint` must be a string"));

        let err = parse_tests(r#"["/a"]"#, "").unwrap_err();
        assert!(matches!(err, ImportError::NotAnObject { index: 0 }));
    }

    #[test]
    fn rejects_missing_input() {
        let err = parse_tests(r#"[{"endpoint": "/a", "method": "GET"}]"#, "").unwrap_err();
        assert!(matches!(err, ImportError::MissingField { field: "input", .. }));
    }
}
