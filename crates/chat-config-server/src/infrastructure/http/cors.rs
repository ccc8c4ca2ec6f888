//! Translation of [`CorsPolicy`] into a `tower-http` [`CorsLayer`].
//!
//! | Policy                        | Allow-Origin        | Methods / headers |
//! |-------------------------------|---------------------|-------------------|
//! | any origin, credentials on    | request's `Origin`  | mirrored          |
//! | any origin, credentials off   | `*`                 | `*`               |
//! | origin list, credentials on   | matching list entry | mirrored          |
//! | origin list, credentials off  | matching list entry | `*`               |
//!
//! Browsers reject `*` together with `Access-Control-Allow-Credentials: true`
//! (and `tower-http` refuses to build such a layer), so the credentialed
//! variants mirror the request instead.

use axum::http::HeaderValue;
use thiserror::Error;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::domain::config::{AllowedOrigins, CorsPolicy};

/// The configured policy could not be turned into response headers.
#[derive(Debug, Error)]
pub enum CorsError {
    /// An origin contains characters that are not legal in an HTTP header.
    #[error("invalid CORS origin: {0:?}")]
    InvalidOrigin(String),
}

/// Builds the layer that enforces `policy` on every route.
///
/// # Errors
///
/// Returns [`CorsError::InvalidOrigin`] if a listed origin is not a valid
/// header value.
pub fn cors_layer(policy: &CorsPolicy) -> Result<CorsLayer, CorsError> {
    let layer = match &policy.origins {
        AllowedOrigins::Any if policy.allow_credentials => {
            CorsLayer::new().allow_origin(AllowOrigin::mirror_request())
        }
        AllowedOrigins::Any => CorsLayer::new().allow_origin(Any),
        AllowedOrigins::List(origins) => {
            let values = origins
                .iter()
                .map(|o| HeaderValue::from_str(o).map_err(|_| CorsError::InvalidOrigin(o.clone())))
                .collect::<Result<Vec<_>, _>>()?;
            CorsLayer::new().allow_origin(AllowOrigin::list(values))
        }
    };

    let layer = if policy.allow_credentials {
        layer
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true)
    } else {
        layer.allow_methods(Any).allow_headers(Any)
    };

    Ok(layer)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
