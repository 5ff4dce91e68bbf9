//! Tests for users API handlers.

use super::*;
use crate::domain::ports::MockUserService;
use crate::domain::{ErrorCode, UserId};
use crate::inbound::http::configure;
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;
use serde_json::{Value, json};
use std::sync::Arc;

const KNOWN_ID: &str = "0191e2c4-7d0a-7c3e-9f1b-2a3b4c5d6e7f";

fn known_id() -> UserId {
    UserId::new(KNOWN_ID).expect("valid fixture id")
}

fn test_app(
    service: MockUserService,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(service));
    App::new()
        .app_data(web::Data::new(state))
        .configure(configure)
}

async fn send(service: MockUserService, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(service)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

#[actix_web::test]
async fn create_returns_generated_id_and_name() {
    let mut service = MockUserService::new();
    service
        .expect_create_user()
        .withf(|name| name.to_string() == "alice")
        .times(1)
        .return_once(|_| Ok(known_id()));

    let (status, body) = send(
        service,
        actix_test::TestRequest::post()
            .uri("/api/user")
            .set_json(json!({"name": "alice"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": KNOWN_ID, "name": "alice"}));
}

#[actix_web::test]
async fn get_returns_stored_name() {
    let mut service = MockUserService::new();
    service
        .expect_get_user()
        .withf(|id| id.to_string() == KNOWN_ID)
        .times(1)
        .return_once(|_| Ok("alice".to_owned()));

    let (status, body) = send(
        service,
        actix_test::TestRequest::get().uri(&format!("/api/user/{KNOWN_ID}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": KNOWN_ID, "name": "alice"}));
}

#[actix_web::test]
async fn update_echoes_new_name() {
    let mut service = MockUserService::new();
    service
        .expect_update_user()
        .withf(|id, name| id.to_string() == KNOWN_ID && name.to_string() == "alice2")
        .times(1)
        .return_once(|_, _| Ok(()));

    let (status, body) = send(
        service,
        actix_test::TestRequest::post()
            .uri(&format!("/api/user/{KNOWN_ID}"))
            .set_json(json!({"name": "alice2"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": KNOWN_ID, "name": "alice2"}));
}

#[actix_web::test]
async fn delete_returns_empty_ok() {
    let mut service = MockUserService::new();
    service
        .expect_delete_user()
        .times(1)
        .return_once(|_| Ok(()));

    let (status, body) = send(
        service,
        actix_test::TestRequest::delete().uri(&format!("/api/user/{KNOWN_ID}")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[rstest]
#[case(actix_test::TestRequest::get())]
#[case(actix_test::TestRequest::delete())]
#[actix_web::test]
async fn not_found_maps_to_404_envelope(#[case] request: actix_test::TestRequest) {
    let mut service = MockUserService::new();
    service
        .expect_get_user()
        .returning(|_| Err(UserServiceError::NotFound));
    service
        .expect_delete_user()
        .returning(|_| Err(UserServiceError::NotFound));

    let (status, body) = send(service, request.uri(&format!("/api/user/{KNOWN_ID}"))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
    assert_eq!(body["message"], "user not found");
}

#[actix_web::test]
async fn update_of_missing_user_is_404() {
    let mut service = MockUserService::new();
    service
        .expect_update_user()
        .return_once(|_, _| Err(UserServiceError::NotFound));

    let (status, body) = send(
        service,
        actix_test::TestRequest::post()
            .uri(&format!("/api/user/{KNOWN_ID}"))
            .set_json(json!({"name": "ghost"})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn read_failure_is_500_with_generic_message() {
    let mut service = MockUserService::new();
    service
        .expect_get_user()
        .return_once(|_| Err(UserServiceError::Read { id: known_id() }));

    let (status, body) = send(
        service,
        actix_test::TestRequest::get().uri(&format!("/api/user/{KNOWN_ID}")),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["message"], format!("error getting message: {KNOWN_ID}"));
}

#[actix_web::test]
async fn failed_create_reports_generated_id() {
    let mut service = MockUserService::new();
    service
        .expect_create_user()
        .return_once(|_| Err(UserServiceError::Create { id: known_id() }));

    let (status, body) = send(
        service,
        actix_test::TestRequest::post()
            .uri("/api/user")
            .set_json(json!({"name": "carol"})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "error creating user");
    assert_eq!(body["details"]["id"], KNOWN_ID);
}

#[rstest]
#[case(actix_test::TestRequest::get(), "not-a-uuid")]
#[case(actix_test::TestRequest::delete(), "12345")]
#[actix_web::test]
async fn malformed_id_is_rejected_before_the_service(
    #[case] request: actix_test::TestRequest,
    #[case] raw: &str,
) {
    let service = MockUserService::new();

    let (status, body) = send(service, request.uri(&format!("/api/user/{raw}"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(
        body["details"],
        json!({"field": "id", "value": raw, "code": "invalid_uuid"})
    );
}

#[rstest]
#[case("/api/user")]
#[case("/api/user/0191e2c4-7d0a-7c3e-9f1b-2a3b4c5d6e7f")]
#[actix_web::test]
async fn empty_name_is_rejected(#[case] uri: &str) {
    let service = MockUserService::new();

    let (status, body) = send(
        service,
        actix_test::TestRequest::post()
            .uri(uri)
            .set_json(json!({"name": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "empty_name");
}

#[actix_web::test]
async fn malformed_body_uses_error_envelope() {
    let service = MockUserService::new();

    let (status, body) = send(
        service,
        actix_test::TestRequest::post()
            .uri("/api/user")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\":"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_body");
}

#[actix_web::test]
async fn oversized_body_is_rejected() {
    let service = MockUserService::new();
    let name = "x".repeat(crate::inbound::http::JSON_BODY_LIMIT + 1);

    let (status, body) = send(
        service,
        actix_test::TestRequest::post()
            .uri("/api/user")
            .set_json(json!({ "name": name })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[case(UserServiceError::NotFound, ErrorCode::NotFound, "user not found")]
#[case(UserServiceError::IdGeneration, ErrorCode::InternalError, "error generating id")]
#[case(UserServiceError::Update { id: known_id() }, ErrorCode::InternalError, "error updating user")]
#[case(UserServiceError::Delete { id: known_id() }, ErrorCode::InternalError, "error deleting user")]
fn service_errors_map_to_codes(
    #[case] err: UserServiceError,
    #[case] code: ErrorCode,
    #[case] message: &str,
) {
    let mapped = map_user_service_error(err);
    assert_eq!(mapped.code(), code);
    assert_eq!(mapped.message(), message);
}

#[rstest]
fn failed_create_maps_with_its_id_in_details() {
    let mapped = map_user_service_error(UserServiceError::Create { id: known_id() });

    assert_eq!(mapped.code(), ErrorCode::InternalError);
    assert_eq!(mapped.message(), "error creating user");
    assert_eq!(mapped.details(), Some(&json!({ "id": known_id() })));
}
