//! Handlers for the `/schemas` resource (published wire contracts).

use agentdesk_core::catalog;
use agentdesk_core::validation::schema::Schema;
use axum::extract::Path;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;

/// GET /api/v1/schemas
///
/// List every inbound schema the service validates.
pub async fn list_schemas() -> Json<DataResponse<&'static [&'static Schema]>> {
    Json(DataResponse {
        data: catalog::catalog(),
    })
}

/// GET /api/v1/schemas/{name}
///
/// Fetch one schema by name. Returns 404 if the name is unknown.
pub async fn get_schema(
    Path(name): Path<String>,
) -> AppResult<Json<DataResponse<&'static Schema>>> {
    let schema = catalog::lookup(&name)?;
    Ok(Json(DataResponse { data: schema }))
}
