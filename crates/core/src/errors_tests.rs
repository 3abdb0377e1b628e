use super::*;

#[test]
fn test_invalid_event_kind_display() {
    let err = TitleValidatorError::InvalidEventKind("push".to_string());
    assert_eq!(
        format!("{}", err),
        "Invalid event type: 'push'. Expected 'pull_request' or 'pull_request_target'."
    );
}

#[test]
fn test_missing_separator_display() {
    let err = TitleValidatorError::MissingSeparator("no colon here".to_string());
    assert_eq!(
        format!("{}", err),
        "Title 'no colon here' is missing the ':' separator between the prefix and the message"
    );
}

#[test]
fn test_missing_type_display() {
    let err = TitleValidatorError::MissingType(": msg".to_string());
    assert_eq!(
        format!("{}", err),
        "Title ': msg' is missing a type before the ':' separator"
    );
}

#[test]
fn test_type_not_allowed_display_lists_allowed_types() {
    let err = TitleValidatorError::TypeNotAllowed {
        title_type: "chore".to_string(),
        allowed: vec!["fix".to_string(), "feat".to_string()],
    };
    assert_eq!(
        format!("{}", err),
        "Type 'chore' is not allowed. Allowed types: [fix, feat]"
    );
}

#[test]
fn test_scope_not_allowed_display_lists_allowed_scopes() {
    let err = TitleValidatorError::ScopeNotAllowed {
        scope: "database".to_string(),
        allowed: vec!["api".to_string(), "ui".to_string()],
    };
    assert_eq!(
        format!("{}", err),
        "Scope 'database' is not allowed. Allowed scopes: [api, ui]"
    );
}

#[test]
fn test_payload_parse_failure_from_serde_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: TitleValidatorError = serde_err.into();
    assert!(matches!(err, TitleValidatorError::PayloadParseFailure(_)));
}

#[test]
fn test_invalid_scope_pattern_display() {
    let source = regex::Regex::new("(").unwrap_err();
    let err = TitleValidatorError::InvalidScopePattern {
        pattern: "(".to_string(),
        source,
    };
    assert!(format!("{}", err).starts_with("Scope pattern '(' is not a valid regular expression"));
}

#[test]
fn test_is_title_violation() {
    assert!(TitleValidatorError::MissingSeparator("x".to_string()).is_title_violation());
    assert!(TitleValidatorError::MissingType(":x".to_string()).is_title_violation());
    assert!(TitleValidatorError::TypeNotAllowed {
        title_type: "x".to_string(),
        allowed: vec![],
    }
    .is_title_violation());
    assert!(TitleValidatorError::ScopeNotAllowed {
        scope: "x".to_string(),
        allowed: vec![],
    }
    .is_title_violation());

    assert!(!TitleValidatorError::InvalidEventKind("push".to_string()).is_title_violation());
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    assert!(!TitleValidatorError::PayloadReadFailure {
        path: "event.json".to_string(),
        source: io_err,
    }
    .is_title_violation());
}
