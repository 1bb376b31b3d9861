//! Route definitions for the `/schemas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::schemas;
use crate::state::AppState;

/// Schema document routes.
///
/// ```text
/// GET /schemas          -> list_schemas
/// GET /schemas/{name}   -> get_schema
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schemas", get(schemas::list_schemas))
        .route("/schemas/{name}", get(schemas::get_schema))
}
