use explainer_error::{
    ConfigError, ErrorCategory, ExplainerError, JsonError, ProviderError, ProviderErrorKind,
    ResponseError, ResponseErrorKind, SchemaError, StorageError, StorageErrorKind, USAGE_EXIT_CODE,
};
use std::collections::HashSet;

#[test]
fn exit_codes_are_distinct_and_nonzero() {
    let codes: HashSet<u8> = ErrorCategory::ALL.iter().map(|c| c.exit_code()).collect();
    assert_eq!(codes.len(), ErrorCategory::ALL.len());
    assert!(!codes.contains(&0));
    assert!(!codes.contains(&1));
}

#[test]
fn exit_codes_do_not_collide_with_process_codes() {
    for category in ErrorCategory::ALL {
        let code = category.exit_code();
        assert_ne!(code, USAGE_EXIT_CODE, "{category} shares the usage code");
        assert_ne!(code, 101, "{category} shares the panic code");
    }
}

#[test]
fn unauthorized_status_is_authentication_failure() {
    for status in [401, 403] {
        let kind = ProviderErrorKind::from_status(status, "bad key");
        assert!(kind.is_authentication_failure(), "status {status}");
    }
    assert!(ProviderErrorKind::MissingCredential.is_authentication_failure());
}

#[test]
fn other_statuses_are_not_authentication_failures() {
    assert_eq!(
        ProviderErrorKind::from_status(429, "slow down"),
        ProviderErrorKind::RateLimited("slow down".to_string())
    );
    let server = ProviderErrorKind::from_status(503, "overloaded");
    assert!(!server.is_authentication_failure());
    assert!(matches!(server, ProviderErrorKind::Http { status: 503, .. }));
}

#[test]
fn categories_follow_error_kind() {
    let cases: Vec<(ExplainerError, ErrorCategory)> = vec![
        (ConfigError::new("bad").into(), ErrorCategory::Config),
        (
            ProviderError::new(ProviderErrorKind::Network("dns".to_string())).into(),
            ErrorCategory::ProviderRequest,
        ),
        (
            ProviderError::new(ProviderErrorKind::Timeout(30)).into(),
            ErrorCategory::ProviderRequest,
        ),
        (
            ProviderError::new(ProviderErrorKind::from_status(401, "no")).into(),
            ErrorCategory::AuthenticationFailed,
        ),
        (
            ResponseError::new(ResponseErrorKind::Empty).into(),
            ErrorCategory::ResponseEmpty,
        ),
        (
            ResponseError::new(ResponseErrorKind::Malformed("eof".to_string())).into(),
            ErrorCategory::MalformedResponse,
        ),
        (SchemaError::script("missing").into(), ErrorCategory::InvalidScriptFormat),
        (
            SchemaError::blueprint("missing").into(),
            ErrorCategory::InvalidBlueprintFormat,
        ),
        (
            StorageError::new(StorageErrorKind::FileWrite("x".to_string())).into(),
            ErrorCategory::Storage,
        ),
        (JsonError::new("oops").into(), ErrorCategory::Serialization),
    ];

    for (err, expected) in cases {
        assert_eq!(err.category(), expected, "{err}");
        assert_eq!(err.exit_code(), expected.exit_code());
    }
}

#[test]
fn display_carries_location() {
    let err = SchemaError::script("`scenes` is missing");
    let text = err.to_string();
    assert!(text.contains("Invalid script format"));
    assert!(text.contains("error_category_test.rs"));
}
