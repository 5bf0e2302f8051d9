use crate::DbError;
use crate::store::remote::error_details;

use error_location::ErrorLocation;

#[test]
fn given_row_store_error_body_when_parsed_then_code_and_message_extracted() {
    let (code, message) =
        error_details(r#"{"code":"23505","message":"duplicate key value","details":null}"#);

    assert_eq!(code, "23505");
    assert_eq!(message, "duplicate key value");
}

#[test]
fn given_auth_error_body_when_parsed_then_description_used() {
    let (code, message) = error_details(
        r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
    );

    assert_eq!(code, "invalid_grant");
    assert_eq!(message, "Invalid login credentials");
}

#[test]
fn given_plain_text_body_when_parsed_then_raw_text_is_message() {
    let (code, message) = error_details("Bad Gateway\n");

    assert_eq!(code, "UNKNOWN");
    assert_eq!(message, "Bad Gateway");
}

#[test]
fn given_api_error_when_built_then_location_is_the_calling_line() {
    let error = DbError::api(
        "profiles",
        403,
        "42501".to_string(),
        "permission denied for table profiles".to_string(),
    );

    let DbError::Api { location, status, .. } = &error else {
        panic!("expected an Api error, got {error:?}");
    };
    let location: &ErrorLocation = location;
    assert_eq!(*status, 403);
    assert!(location.file.ends_with("remote_errors.rs"));
    assert!(error.to_string().ends_with(&location.to_string()));
}
