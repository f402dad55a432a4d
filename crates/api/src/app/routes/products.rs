use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use retail_core::{ApiError, ProductId};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/:id", get(get_product).put(update_product))
}

/// GET `/products/{id}`: name lookup, then price fetch, then merge.
///
/// The name lookup runs first and fails the request fast when the id is
/// unknown to the catalog, regardless of store state.
pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_response(&e),
    };

    let name = match services.names.product_name(id).await {
        Ok(name) => name,
        Err(e) => return errors::error_response(&e),
    };

    let record = match services.prices.get(id).await {
        Ok(record) => record,
        Err(e) => return errors::error_response(&e),
    };

    (StatusCode::OK, Json(dto::merged(id, name, &record))).into_response()
}

/// PUT `/products/{id}`: body parse, identity check, name lookup (existence
/// validation + canonical name), price update, merge.
///
/// A body whose id disagrees with the path id is rejected before any store
/// mutation. Body-parse failures keep the wire contract's 500 with the decode
/// message in the uniform error body.
pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<dto::ProductResponse>, JsonRejection>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::error_response(&e),
    };

    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            return errors::json_error(StatusCode::INTERNAL_SERVER_ERROR, rejection.body_text())
        }
    };

    if body.id != id {
        return errors::error_response(&ApiError::IdMismatch);
    }

    let name = match services.names.product_name(id).await {
        Ok(name) => name,
        Err(e) => return errors::error_response(&e),
    };

    let record = match services.prices.update(id, body.current_price.value).await {
        Ok(record) => record,
        Err(e) => return errors::error_response(&e),
    };

    (StatusCode::OK, Json(dto::merged(id, name, &record))).into_response()
}
