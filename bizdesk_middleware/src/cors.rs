use tower_http::cors::{Any, CorsLayer};

/// The permissive layer every public router gets; the API is consumed by a
/// browser SPA served from a different origin.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
