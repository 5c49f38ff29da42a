use actix_web::http::header::{HeaderValue, CACHE_CONTROL};
use actix_web::middleware::DefaultHeaders;

/// `Cache-Control: no-store` on every response in scope.
///
/// Game state changes on every flip and tick, so nothing under the game API
/// may be cached by browsers or proxies.
pub fn no_store() -> DefaultHeaders {
    DefaultHeaders::new().add((CACHE_CONTROL, HeaderValue::from_static("no-store")))
}
