//! HTTP infrastructure: routes, cross-origin policy and error responses.
//!
//! ```text
//! GET  /api/config  → ConfigRepository::load → 200 ChatConfig | 500
//! POST /api/config  → ConfigRepository::save → 200 ChatConfig | 422 | 500
//! ```
//!
//! The handlers sit directly on the repository; there is no service layer in
//! between.

pub mod cors;
pub mod error;
pub mod routes;

pub use cors::{cors_layer, CorsError};
pub use error::ApiError;
pub use routes::{build_router, AppState, CONFIG_PATH};
