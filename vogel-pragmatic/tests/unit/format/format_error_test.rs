use super::*;

fn create_error(code: &str) -> FormatError {
    FormatError::new(code.to_string(), "some cause".to_string(), "some action".to_string())
}

#[test]
fn can_display_format_error() {
    assert_eq!(create_error("E1000").to_string(), "E1000, cause: 'some cause', action: 'some action'.");
}

#[test]
fn can_serialize_format_error_without_details() {
    let json = create_error("E1000").to_json();

    assert!(json.contains("\"code\": \"E1000\""));
    assert!(!json.contains("details"));
}

#[test]
fn can_serialize_format_error_with_details() {
    let error = FormatError::new_with_details(
        "E0002".to_string(),
        "cause".to_string(),
        "action".to_string(),
        "some details".to_string(),
    );

    assert!(error.to_json().contains("\"details\": \"some details\""));
}

#[test]
fn can_display_multiple_errors() {
    let errors = MultiFormatError::from(vec![create_error("E1000"), create_error("E1001")]);

    assert_eq!(errors.codes(), vec!["E1000", "E1001"]);
    assert_eq!(errors.to_string().lines().count(), 2);
    assert_eq!(errors.iter().count(), 2);
}

#[test]
fn can_serialize_multiple_errors_as_array() {
    let errors = MultiFormatError::from(create_error("E1100"));

    let json = errors.to_json();

    assert!(json.trim_start().starts_with('['));
    assert!(json.contains("E1100"));
}
