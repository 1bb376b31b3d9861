//! Human-in-the-loop delegation contract.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::validation::ingress::Ingress;
use crate::validation::schema::{FieldSpec, FieldType, Schema};

pub static DELEGATE_HITL_SCHEMA: Schema = Schema {
    name: "delegate-hitl",
    description: "Hand a pending human review to another user.",
    fields: &[
        FieldSpec::required(
            "delegatedToId",
            FieldType::Uuid { version: None },
            "User who takes over the review.",
        ),
        FieldSpec::optional("reason", FieldType::String, "Why the review is delegated."),
        FieldSpec::optional(
            "instructions",
            FieldType::String,
            "Notes for the new reviewer.",
        ),
    ],
};

/// Request to delegate a HITL review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DelegateHitlRequest {
    pub delegated_to_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Ingress for DelegateHitlRequest {
    fn schema() -> &'static Schema {
        &DELEGATE_HITL_SCHEMA
    }
}
