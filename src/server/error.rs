use crate::error::{NameError, ResolveError, ValidationError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Every failure the HTTP surface can report.
///
/// All variants map to `400 Bad Request`; the `kind` field of the payload
/// keeps the underlying cause distinguishable for clients.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Name(#[from] NameError),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: &'static str,
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Validation(err) => match err {
                ValidationError::InvalidName => "invalidName",
                ValidationError::InvalidType(_) | ValidationError::MissingType => "invalidType",
                ValidationError::DuplicateName(_) => "duplicateName",
                ValidationError::InvalidCookTime => "invalidCookTime",
                ValidationError::MissingRequiredItems
                | ValidationError::InvalidRequiredItemName { .. } => "invalidRequiredItems",
                ValidationError::InvalidQuantity { .. } => "invalidQuantity",
                ValidationError::DuplicateRequiredItem(_) => "duplicateRequiredItem",
                ValidationError::MalformedBody(_) => "malformedBody",
            },
            ApiError::Resolve(err) => match err {
                ResolveError::NotFound(_) => "notFound",
                ResolveError::NotARecipe(_) => "notARecipe",
                ResolveError::UnknownReference { .. } => "unknownReference",
                ResolveError::CyclicReference { .. } => "cyclicReference",
                ResolveError::QuantityOverflow { .. } => "quantityOverflow",
            },
            ApiError::Name(NameError::Empty) => "invalidName",
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
            kind: self.kind(),
        };
        (self.status(), Json(body)).into_response()
    }
}
