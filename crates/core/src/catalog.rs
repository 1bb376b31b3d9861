//! Catalog of published ingress schemas.
//!
//! Serves as the maintained schema document for API consumers: every
//! inbound payload the service accepts is listed here by name.

use crate::dto::agent_test::{BATCH_TEST_SCHEMA, COLLABORATIVE_TEST_SCHEMA, TEST_CASE_SCHEMA};
use crate::dto::assistant::{
    GENERATE_TESTS_SCHEMA, PERSONALITY_PROFILE_SCHEMA, PROMPT_SUGGESTIONS_SCHEMA,
};
use crate::dto::hitl::DELEGATE_HITL_SCHEMA;
use crate::dto::widget::{DEPLOY_TEMPLATE_SCHEMA, DEPLOY_WIDGET_SCHEMA, PREVIEW_WIDGET_SCHEMA};
use crate::error::CoreError;
use crate::validation::schema::Schema;

static CATALOG: [&Schema; 10] = [
    &BATCH_TEST_SCHEMA,
    &TEST_CASE_SCHEMA,
    &COLLABORATIVE_TEST_SCHEMA,
    &GENERATE_TESTS_SCHEMA,
    &PERSONALITY_PROFILE_SCHEMA,
    &PROMPT_SUGGESTIONS_SCHEMA,
    &DELEGATE_HITL_SCHEMA,
    &DEPLOY_WIDGET_SCHEMA,
    &PREVIEW_WIDGET_SCHEMA,
    &DEPLOY_TEMPLATE_SCHEMA,
];

/// All published schemas, in a stable order.
pub fn catalog() -> &'static [&'static Schema] {
    &CATALOG
}

/// Find a schema by name.
pub fn find(name: &str) -> Option<&'static Schema> {
    catalog().iter().copied().find(|s| s.name == name)
}

/// Find a schema by name, or fail with [`CoreError::NotFound`].
pub fn lookup(name: &str) -> Result<&'static Schema, CoreError> {
    find(name).ok_or_else(|| CoreError::NotFound {
        entity: "Schema",
        key: name.to_string(),
    })
}
