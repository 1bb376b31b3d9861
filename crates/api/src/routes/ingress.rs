//! Route definitions for the `/validate` resource.

use agentdesk_core::dto::agent_test::{BatchTestRequest, CollaborativeTestRequest, TestCase};
use agentdesk_core::dto::assistant::{
    GenerateTestsRequest, PersonalityProfile, PromptSuggestionsRequest,
};
use agentdesk_core::dto::hitl::DelegateHitlRequest;
use agentdesk_core::dto::widget::{
    DeployTemplateRequest, DeployWidgetRequest, PreviewWidgetRequest,
};
use agentdesk_core::validation::ingress::Ingress;
use axum::routing::post;
use axum::Router;
use serde::Serialize;

use crate::handlers::ingress;
use crate::state::AppState;

/// Routes mounted at `/validate`, one `POST /{schema-name}` per contract.
pub fn router() -> Router<AppState> {
    let router = Router::new();
    let router = mount::<BatchTestRequest>(router);
    let router = mount::<TestCase>(router);
    let router = mount::<CollaborativeTestRequest>(router);
    let router = mount::<GenerateTestsRequest>(router);
    let router = mount::<PersonalityProfile>(router);
    let router = mount::<PromptSuggestionsRequest>(router);
    let router = mount::<DelegateHitlRequest>(router);
    let router = mount::<DeployWidgetRequest>(router);
    let router = mount::<PreviewWidgetRequest>(router);
    mount::<DeployTemplateRequest>(router)
}

fn mount<T>(router: Router<AppState>) -> Router<AppState>
where
    T: Ingress + Serialize + Send + 'static,
{
    let path = format!("/{}", T::schema().name);
    router.route(&path, post(ingress::accept::<T>))
}
