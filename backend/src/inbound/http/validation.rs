//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, UserId};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidUuid,
    EmptyName,
    InvalidBody,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::EmptyName => "empty_name",
            ErrorCode::InvalidBody => "invalid_body",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const ID_FIELD: FieldName = FieldName::new("id");
pub(crate) const NAME_FIELD: FieldName = FieldName::new("name");

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a valid UUID"))
        .with_value(ErrorCode::InvalidUuid, value)
}

pub(crate) fn empty_name_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must not be empty"))
        .with_code(ErrorCode::EmptyName)
}

/// Map a rejected JSON payload to the error envelope.
///
/// The extractor's own message is kept since it describes the client's input
/// rather than server internals.
pub(crate) fn invalid_body_error(reason: impl std::fmt::Display) -> Error {
    Error::invalid_request(format!("invalid request body: {reason}")).with_details(json!({
        "code": ErrorCode::InvalidBody.as_str(),
    }))
}

pub(crate) fn parse_user_id(value: &str) -> Result<UserId, Error> {
    UserId::new(value).map_err(|_| invalid_uuid_error(ID_FIELD, value))
}

/// Reject blank names; anything else passes through untrimmed.
pub(crate) fn require_name(name: String) -> Result<String, Error> {
    if name.trim().is_empty() {
        return Err(empty_name_error(NAME_FIELD));
    }
    Ok(name)
}
