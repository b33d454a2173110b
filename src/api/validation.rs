use actix_web::{error::JsonPayloadError, http::StatusCode, web, HttpResponse, ResponseError};
use serde::Serialize;
use tracing::warn;

use crate::form::FieldErrors;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub fields: serde_json::Value,
}

impl ResponseError for FieldErrors {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        warn!("Validation error: {}", self);

        let mut fields = serde_json::Map::new();
        for (field, message) in self.iter() {
            fields.insert(
                field.to_string(),
                serde_json::json!({"errors": [message]}),
            );
        }

        HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            fields: serde_json::Value::Object(fields),
        })
    }
}

/// Creates a configured JsonConfig with standardized error handling for the entire project
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req| {
            let (status, message) = match &err {
                JsonPayloadError::Deserialize(de_err) => {
                    let err_string = de_err.to_string();

                    if de_err.is_eof() && de_err.line() == 1 && de_err.column() == 0 {
                        (StatusCode::BAD_REQUEST, "Request body is empty. Expected JSON payload")
                    } else if err_string.contains("unknown variant") {
                        (
                            StatusCode::BAD_REQUEST,
                            "Invalid enum value. Check allowed values for this field",
                        )
                    } else if de_err.is_data() {
                        (StatusCode::BAD_REQUEST, "Invalid value for one of the fields")
                    } else {
                        (StatusCode::BAD_REQUEST, "Invalid JSON format")
                    }
                }
                JsonPayloadError::ContentType => {
                    (StatusCode::BAD_REQUEST, "Expected Content-Type: application/json")
                }
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    (StatusCode::PAYLOAD_TOO_LARGE, "Request body is too large")
                }
                _ => (StatusCode::BAD_REQUEST, "Validation error"),
            };
            warn!("Rejected request payload: {}", err);

            let error_response = ErrorResponse {
                error: "Request validation failed".to_string(),
                fields: serde_json::json!({"message": message}),
            };
            actix_web::error::InternalError::from_response(
                err,
                HttpResponse::build(status).json(error_response),
            )
            .into()
        })
}
