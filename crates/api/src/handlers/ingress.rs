//! Handlers for the `/validate` resource.
//!
//! Each inbound contract gets a dry-run endpoint: the body is validated by
//! [`ValidatedJson`] and the normalized record (defaults applied) is echoed
//! back for the caller to forward to the owning service.

use agentdesk_core::validation::ingress::Ingress;
use axum::Json;
use serde::Serialize;

use crate::extract::ValidatedJson;
use crate::response::DataResponse;

/// POST /api/v1/validate/{schema}
///
/// Returns the validated record in the standard data envelope.
pub async fn accept<T>(ValidatedJson(record): ValidatedJson<T>) -> Json<DataResponse<T>>
where
    T: Ingress + Serialize + Send,
{
    tracing::debug!(schema = T::schema().name, "Accepted ingress payload");
    Json(DataResponse { data: record })
}
