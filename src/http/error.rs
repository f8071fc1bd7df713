use log::{error, warn};
use rouille::Response;
use serde::{Deserialize, Serialize};

use crate::{domain::track::TrackValidationError, storage::error::StoreError};

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";
pub const TRACK_NOT_FOUND: &str = "Track not found";
pub const INVALID_JSON: &str = "Invalid JSON body";

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    MethodNotAllowed {
        method: String,
        allow: &'static [&'static str],
    },
    Internal(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::TrackNotFound(_) => ApiError::NotFound(TRACK_NOT_FOUND.into()),

            StoreError::Database(_) | StoreError::Serialization(_) | StoreError::Internal(_) => {
                error!("store failure: {err}");
                ApiError::Internal("internal server error".into())
            }
        }
    }
}

impl From<TrackValidationError> for ApiError {
    fn from(err: TrackValidationError) -> Self {
        warn!("rejected upload: {err}");
        ApiError::BadRequest(ALL_FIELDS_REQUIRED.into())
    }
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound(_) => 404,
            ApiError::BadRequest(_) => 400,
            ApiError::MethodNotAllowed { .. } => 405,
            ApiError::Internal(_) => 500,
        }
    }

    pub fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::MethodNotAllowed { method, allow } => {
                Response::text(format!("Method {method} Not Allowed"))
                    .with_status_code(status)
                    .with_additional_header("Allow", allow.join(", "))
            }

            ApiError::NotFound(msg) | ApiError::BadRequest(msg) | ApiError::Internal(msg) => {
                Response::json(&ErrorBody { error: msg }).with_status_code(status)
            }
        }
    }
}
