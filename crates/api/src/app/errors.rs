//! Uniform error responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use retail_core::ApiError;

/// Map a service error to its HTTP status and uniform error body.
///
/// Not-found is the only expected failure (404); bad client input is 400;
/// every dependency failure collapses to 500 with the underlying message
/// exposed in the body.
pub fn error_response(err: &ApiError) -> axum::response::Response {
    let status = match err {
        ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        ApiError::InvalidId(_) | ApiError::IdMismatch => StatusCode::BAD_REQUEST,
        ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Store(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    json_error(status, err.to_string())
}

/// Error body: always a list of messages, exactly one entry per failure.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "errors": [ { "message": message.into() } ],
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let resp = error_response(&ApiError::not_found("no product found with id 1"));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn client_input_errors_map_to_400() {
        assert_eq!(
            error_response(&ApiError::IdMismatch).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_response(&ApiError::invalid_id("abc")).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn dependency_failures_map_to_500() {
        for err in [
            ApiError::transport("connection refused"),
            ApiError::decode("unexpected token"),
            ApiError::store("server selection timeout"),
        ] {
            assert_eq!(
                error_response(&err).status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
