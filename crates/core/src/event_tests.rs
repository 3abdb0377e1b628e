use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_payload(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write payload");
    file
}

#[test]
fn test_load_pull_request_title() {
    let file = write_payload(r#"{"pull_request": {"title": "fix: resolve memory leak"}}"#);

    let title = load_pull_request_title(file.path()).unwrap();

    assert_eq!(title, "fix: resolve memory leak");
}

#[test]
fn test_load_pull_request_title_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("event.json");

    let result = load_pull_request_title(&path);

    match result {
        Err(TitleValidatorError::PayloadReadFailure { path: p, source }) => {
            assert_eq!(p, path.display().to_string());
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected PayloadReadFailure, got {:?}", other),
    }
}

#[test]
fn test_load_pull_request_title_malformed_json() {
    let file = write_payload("{ not json");

    let result = load_pull_request_title(file.path());

    assert!(matches!(
        result,
        Err(TitleValidatorError::PayloadParseFailure(_))
    ));
}

#[test]
fn test_parse_pull_request_title_without_pull_request() {
    let title = parse_pull_request_title(r#"{"action": "opened"}"#).unwrap();
    assert_eq!(title, "");
}

#[test]
fn test_parse_pull_request_title_keeps_title_verbatim() {
    let title =
        parse_pull_request_title(r#"{"pull_request": {"title": "  feat(api):  spaced  "}}"#)
            .unwrap();
    assert_eq!(title, "  feat(api):  spaced  ");
}
