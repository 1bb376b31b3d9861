pub mod health;
pub mod ingress;
pub mod schemas;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /validate/batch-test                    BatchTestRequest (POST)
/// /validate/test-case                     TestCase (POST)
/// /validate/collaborative-test            CollaborativeTestRequest (POST)
/// /validate/generate-tests                GenerateTestsRequest (POST)
/// /validate/personality-profile           PersonalityProfile (POST)
/// /validate/prompt-suggestions            PromptSuggestionsRequest (POST)
/// /validate/delegate-hitl                 DelegateHitlRequest (POST)
/// /validate/deploy-widget                 DeployWidgetRequest (POST)
/// /validate/preview-widget                PreviewWidgetRequest (POST)
/// /validate/deploy-template               DeployTemplateRequest (POST)
///
/// /schemas                                list published schemas
/// /schemas/{name}                         get one schema
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/validate", ingress::router())
        .merge(schemas::router())
}
