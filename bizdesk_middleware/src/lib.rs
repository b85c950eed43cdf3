//! Request middleware shared by bizdesk services: the bearer-token gate,
//! the CORS layer, and a wrapper that shields mutating requests from
//! client-side connection drops.

use axum::{
    body::Body,
    extract::Request,
    http::{Method, Response},
    middleware::Next,
};

pub mod auth;
pub mod cors;

/// Wraps all POST/PUT/PATCH/DELETE requests in a tokio task to prevent failure in the event the
/// connection is terminated
pub async fn connection_drop_prevention_handler(req: Request, next: Next) -> Response<Body> {
    match req.method() {
        &Method::PUT | &Method::POST | &Method::PATCH | &Method::DELETE => {
            tokio::task::spawn(next.run(req)).await.unwrap()
        }
        _ => next.run(req).await,
    }
}
