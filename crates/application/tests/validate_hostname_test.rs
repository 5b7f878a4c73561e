use hostcheck_application::use_cases::ValidateHostnameUseCase;
use hostcheck_domain::{DomainError, InvalidReason};

#[test]
fn test_validate_use_case_accepts_valid_name() {
    let use_case = ValidateHostnameUseCase::new();

    let hostname = use_case.execute("example.com.").unwrap();

    assert_eq!(hostname.as_str(), "example.com.");
}

#[test]
fn test_validate_use_case_reports_reason() {
    let use_case = ValidateHostnameUseCase::new();

    let result = use_case.execute("-bad.com");

    assert!(matches!(
        result,
        Err(DomainError::InvalidHostname(InvalidReason::LabelHyphenBoundary))
    ));
}

#[test]
fn test_validate_use_case_error_message_is_reason_text() {
    let use_case = ValidateHostnameUseCase::new();

    let err = use_case.execute("").unwrap_err();

    assert_eq!(err.to_string(), InvalidReason::EmptyInput.to_string());
}

#[test]
fn test_validate_use_case_is_repeatable() {
    let use_case = ValidateHostnameUseCase::new();

    let first = use_case.execute("example.com").unwrap();
    let second = use_case.execute(first.as_str()).unwrap();

    assert_eq!(first, second);
}
