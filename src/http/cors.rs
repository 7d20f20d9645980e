//! Cross-origin policy.
//!
//! Any origin, method and header is accepted and credentials are allowed.
//! Browsers refuse a literal `*` together with credentials, so each value is
//! mirrored back from the request instead.

use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Wide-open CORS layer for local development front-ends.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
