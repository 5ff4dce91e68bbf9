//! Tests for the error payload.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), ErrorCode::InvalidRequest)]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn new_leaves_trace_id_empty_out_of_scope() {
    let error = Error::internal("boom");
    assert!(error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope(expected_trace_id: String) {
    let trace_id: TraceId = expected_trace_id.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::not_found("missing") }).await;

    assert_eq!(error.trace_id(), Some(expected_trace_id.as_str()));
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields() {
    let value = serde_json::to_value(Error::not_found("user not found")).expect("serialise");

    assert_eq!(
        value,
        json!({ "code": "not_found", "message": "user not found" })
    );
}

#[rstest]
fn serialises_trace_id_and_details(expected_trace_id: String) {
    let error = Error::invalid_request("bad")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({ "field": "name" }));
    let value = serde_json::to_value(error).expect("serialise");

    assert_eq!(
        value.get("traceId").and_then(|v| v.as_str()),
        Some(expected_trace_id.as_str())
    );
    assert_eq!(value.get("details"), Some(&json!({ "field": "name" })));
}

#[rstest]
fn display_is_the_message() {
    assert_eq!(Error::internal("error creating user").to_string(), "error creating user");
}
