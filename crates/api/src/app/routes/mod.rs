use axum::Router;

pub mod products;
pub mod system;

/// Router for all service endpoints (health is wired separately in `build_app`).
pub fn router() -> Router {
    Router::new().nest("/products", products::router())
}
