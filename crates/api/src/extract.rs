//! Request extractors.

use agentdesk_core::error::CoreError;
use agentdesk_core::validation::ingress::Ingress;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::AppError;

/// JSON body validated at ingress.
///
/// Reads the body as untyped JSON, then runs the full [`Ingress`] pipeline
/// for `T`. Rejections are returned as [`AppError`], so a failed payload
/// produces a `VALIDATION_ERROR` response listing every violation.
///
/// ```ignore
/// async fn handler(ValidatedJson(req): ValidatedJson<GenerateTestsRequest>) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: Ingress + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<serde_json::Value>::from_request(req, state).await?;

        match T::from_payload(&payload) {
            Ok(record) => Ok(Self(record)),
            Err(report) => {
                tracing::debug!(
                    schema = T::schema().name,
                    violations = report.len(),
                    "Rejected ingress payload"
                );
                Err(AppError::Core(CoreError::Invalid(report)))
            }
        }
    }
}
