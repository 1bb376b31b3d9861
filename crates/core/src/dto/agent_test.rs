//! Agent testing contracts: single and batch test runs, collaborative
//! sessions, and the integration/scenario result shapes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::types::{JsonMap, Timestamp};
use crate::validation::constraints::validate_uuid_v4_list;
use crate::validation::ingress::Ingress;
use crate::validation::schema::{FieldSpec, FieldType, Schema};

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

pub static TEST_CASE_SCHEMA: Schema = Schema {
    name: "test-case",
    description: "A single message sent to an agent under test.",
    fields: &[
        FieldSpec::required("message", FieldType::String, "Message sent to the agent."),
        FieldSpec::optional(
            "expectedResponse",
            FieldType::String,
            "Reference answer the agent output is compared against.",
        ),
        FieldSpec::optional(
            "context",
            FieldType::Map {
                values: &FieldType::Any,
            },
            "Extra conversation context forwarded to the agent.",
        ),
    ],
};

static TEST_CASE_ITEM: FieldType = FieldType::Object {
    schema: &TEST_CASE_SCHEMA,
};

pub static BATCH_TEST_SCHEMA: Schema = Schema {
    name: "batch-test",
    description: "Run several agent test cases as one batch.",
    fields: &[
        FieldSpec::required(
            "testCases",
            FieldType::Array {
                items: &TEST_CASE_ITEM,
            },
            "Test cases in execution order; may be empty.",
        ),
        FieldSpec::optional(
            "maxConcurrency",
            FieldType::Integer {
                min: None,
                max: None,
            },
            "Upper bound on parallel runs, honoured by the test runner.",
        ),
    ],
};

pub static COLLABORATIVE_TEST_SCHEMA: Schema = Schema {
    name: "collaborative-test",
    description: "Start a test session shared between several users.",
    fields: &[
        FieldSpec::required("testName", FieldType::String, "Display name of the session."),
        FieldSpec::required(
            "participants",
            FieldType::Array {
                items: &FieldType::Uuid { version: Some(4) },
            },
            "User ids invited to the session.",
        ),
        FieldSpec::required("testType", FieldType::String, "Kind of test being run."),
        FieldSpec::optional(
            "configuration",
            FieldType::Map {
                values: &FieldType::Any,
            },
            "Runner configuration, passed through untouched.",
        ),
        FieldSpec::optional("initialData", FieldType::Any, "Seed data for the session."),
    ],
};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// One agent test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<JsonMap>,
}

impl Ingress for TestCase {
    fn schema() -> &'static Schema {
        &TEST_CASE_SCHEMA
    }
}

/// A batch of agent test cases.
///
/// `max_concurrency` is carried for the runner; nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BatchTestRequest {
    #[validate(nested)]
    pub test_cases: Vec<TestCase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrency: Option<i64>,
}

impl Ingress for BatchTestRequest {
    fn schema() -> &'static Schema {
        &BATCH_TEST_SCHEMA
    }
}

/// Request to open a collaborative test session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CollaborativeTestRequest {
    pub test_name: String,
    #[validate(custom(function = "validate_uuid_v4_list"))]
    pub participants: Vec<Uuid>,
    pub test_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configuration: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_data: Option<serde_json::Value>,
}

impl Ingress for CollaborativeTestRequest {
    fn schema() -> &'static Schema {
        &COLLABORATIVE_TEST_SCHEMA
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Lifecycle state of a test execution or one of its module runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Pending,
    Running,
    Completed,
    Failed,
    Cancelled,
}

impl ExecutionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one module within an integration test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleResult {
    pub module: String,
    pub status: ExecutionStatus,
    pub output: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Milliseconds.
    pub execution_time: f64,
}

/// One hop of data between modules during an integration test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataFlowEntry {
    pub from: String,
    pub to: String,
    pub data: serde_json::Value,
    pub timestamp: Timestamp,
}

/// Result of a cross-module integration test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationTestResponse {
    pub id: String,
    pub test_name: String,
    pub modules: Vec<String>,
    pub status: ExecutionStatus,
    pub results: Vec<ModuleResult>,
    pub data_flow: Vec<DataFlowEntry>,
    /// Milliseconds.
    pub total_execution_time: f64,
    pub created_at: Timestamp,
}

/// A stored test scenario bound to a sandbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestScenarioResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sandbox_id: Uuid,
    pub test_type: String,
    pub test_data: serde_json::Value,
    pub expected_results: serde_json::Value,
    pub user_id: Uuid,
    pub organization_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::fixtures::{V1, V4_A, V4_B};
    use crate::validation::rules::RuleType;
    use chrono::TimeZone;
    use serde_json::json;

    // -- BatchTestRequest --------------------------------------------------

    #[test]
    fn batch_with_valid_cases_passes() {
        let payload = json!({
            "testCases": [
                {"message": "hello"},
                {"message": "refund please", "expectedResponse": "ok", "context": {"locale": "en"}}
            ],
            "maxConcurrency": 4
        });
        let batch = BatchTestRequest::from_payload(&payload).unwrap();
        assert_eq!(batch.test_cases.len(), 2);
        assert_eq!(batch.max_concurrency, Some(4));
        assert_eq!(batch.test_cases[1].expected_response.as_deref(), Some("ok"));
    }

    #[test]
    fn batch_accepts_empty_case_list_and_no_concurrency() {
        let batch = BatchTestRequest::from_payload(&json!({"testCases": []})).unwrap();
        assert!(batch.test_cases.is_empty());
        assert_eq!(batch.max_concurrency, None);
    }

    #[test]
    fn batch_requires_test_cases() {
        let report = BatchTestRequest::from_payload(&json!({"maxConcurrency": 2})).unwrap_err();
        assert_eq!(report.for_field("testCases").unwrap().rule_type, RuleType::Required);
    }

    #[test]
    fn one_malformed_case_fails_the_batch() {
        let payload = json!({
            "testCases": [
                {"message": "fine"},
                {"expectedResponse": "no message here"},
                {"message": "also fine"}
            ]
        });
        let report = BatchTestRequest::from_payload(&payload).unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations[0].field, "testCases[1].message");
        assert_eq!(report.violations[0].rule_type, RuleType::Required);
    }

    #[test]
    fn batch_rejects_non_integer_concurrency() {
        let report =
            BatchTestRequest::from_payload(&json!({"testCases": [], "maxConcurrency": "4"}))
                .unwrap_err();
        assert_eq!(
            report.for_field("maxConcurrency").unwrap().rule_type,
            RuleType::TypeCheck
        );
    }

    // -- CollaborativeTestRequest ------------------------------------------

    fn collaborative() -> serde_json::Value {
        json!({
            "testName": "Checkout flow",
            "participants": [V4_A, V4_B],
            "testType": "e2e"
        })
    }

    #[test]
    fn collaborative_with_required_fields_passes() {
        let req = CollaborativeTestRequest::from_payload(&collaborative()).unwrap();
        assert_eq!(req.test_name, "Checkout flow");
        assert_eq!(req.participants.len(), 2);
        assert!(req.configuration.is_none());
        assert!(req.initial_data.is_none());
    }

    #[test]
    fn collaborative_missing_test_name_is_named() {
        let mut payload = collaborative();
        payload.as_object_mut().unwrap().remove("testName");
        let report = CollaborativeTestRequest::from_payload(&payload).unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations[0].field, "testName");
        assert_eq!(report.violations[0].rule_type, RuleType::Required);
    }

    #[test]
    fn collaborative_rejects_malformed_participant() {
        let mut payload = collaborative();
        payload["participants"] = json!([V4_A, "not-a-uuid"]);
        let report = CollaborativeTestRequest::from_payload(&payload).unwrap_err();
        assert_eq!(
            report.for_field("participants[1]").unwrap().rule_type,
            RuleType::UuidFormat
        );
    }

    #[test]
    fn collaborative_rejects_non_hyphenated_participants() {
        let mut payload = collaborative();
        payload["participants"] = json!([
            "550e8400e29b41d4a716446655440000",
            format!("urn:uuid:{V4_A}"),
            format!("{{{V4_A}}}"),
        ]);
        let report = CollaborativeTestRequest::from_payload(&payload).unwrap_err();
        assert_eq!(report.len(), 3);
        for index in 0..3 {
            let v = report.for_field(&format!("participants[{index}]")).unwrap();
            assert_eq!(v.rule_type, RuleType::UuidFormat);
        }
    }

    #[test]
    fn collaborative_rejects_non_v4_participant() {
        let mut payload = collaborative();
        payload["participants"] = json!([V1, V4_B]);
        let report = CollaborativeTestRequest::from_payload(&payload).unwrap_err();
        assert_eq!(report.len(), 1);
        let v = report.for_field("participants[0]").unwrap();
        assert_eq!(v.rule_type, RuleType::UuidVersion);
        assert_eq!(v.value, Some(json!(V1)));
    }

    #[test]
    fn collaborative_passes_opaque_fields_through() {
        let mut payload = collaborative();
        payload["configuration"] = json!({"retries": 2, "tags": ["a"]});
        payload["initialData"] = json!([1, 2, 3]);
        let req = CollaborativeTestRequest::from_payload(&payload).unwrap();
        assert_eq!(req.configuration.unwrap()["retries"], 2);
        assert_eq!(req.initial_data, Some(json!([1, 2, 3])));
    }

    #[test]
    fn collaborative_reports_every_shape_violation() {
        let payload = json!({"participants": "everyone", "testType": 7});
        let report = CollaborativeTestRequest::from_payload(&payload).unwrap_err();
        assert_eq!(report.len(), 3);
        assert!(report.has_field("testName"));
        assert!(report.has_field("participants"));
        assert!(report.has_field("testType"));
    }

    // -- Responses ---------------------------------------------------------

    #[test]
    fn integration_response_uses_camel_case_wire_names() {
        let at = chrono::Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let response = IntegrationTestResponse {
            id: "it-1".into(),
            test_name: "crm sync".into(),
            modules: vec!["crm".into(), "mailer".into()],
            status: ExecutionStatus::Completed,
            results: vec![ModuleResult {
                module: "crm".into(),
                status: ExecutionStatus::Completed,
                output: json!({"rows": 3}),
                error: None,
                execution_time: 12.5,
            }],
            data_flow: vec![DataFlowEntry {
                from: "crm".into(),
                to: "mailer".into(),
                data: json!({"contact": 1}),
                timestamp: at,
            }],
            total_execution_time: 12.5,
            created_at: at,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["testName"], "crm sync");
        assert_eq!(json["status"], "completed");
        assert_eq!(json["totalExecutionTime"], 12.5);
        assert_eq!(json["results"][0]["executionTime"], 12.5);
        assert!(json["results"][0].get("error").is_none());
        assert_eq!(json["dataFlow"][0]["from"], "crm");
        assert!(json["createdAt"].as_str().unwrap().starts_with("2026-01-02T03:04:05"));
    }

    #[test]
    fn scenario_response_round_trips_ids() {
        let at = chrono::Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap();
        let id = Uuid::parse_str(V4_A).unwrap();
        let response = TestScenarioResponse {
            id,
            name: "login".into(),
            description: None,
            sandbox_id: id,
            test_type: "smoke".into(),
            test_data: json!({}),
            expected_results: json!({"ok": true}),
            user_id: id,
            organization_id: id,
            created_at: at,
            updated_at: at,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["sandboxId"], V4_A);
        assert_eq!(json["organizationId"], V4_A);
        assert!(json.get("description").is_none());
        let back: TestScenarioResponse = serde_json::from_value(json).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn execution_status_displays_wire_name() {
        assert_eq!(ExecutionStatus::Pending.to_string(), "pending");
        assert_eq!(ExecutionStatus::Cancelled.to_string(), "cancelled");
    }
}
