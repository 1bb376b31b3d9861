//! AI-assistant utility contracts: test generation, personality profiles
//! and prompt suggestions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::ingress::Ingress;
use crate::validation::schema::{DefaultValue, FieldSpec, FieldType, Schema};

/// Default number of generated tests.
pub const DEFAULT_TEST_COUNT: i64 = 5;

/// Minimum number of tests per generation request.
pub const MIN_TEST_COUNT: i64 = 1;

/// Maximum number of tests per generation request.
pub const MAX_TEST_COUNT: i64 = 20;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Kind of test the assistant should generate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedTestType {
    Unit,
    #[default]
    Integration,
    Performance,
    Quality,
}

impl GeneratedTestType {
    pub const VALUES: &'static [&'static str] = &["unit", "integration", "performance", "quality"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Integration => "integration",
            Self::Performance => "performance",
            Self::Quality => "quality",
        }
    }
}

/// Sophistication of suggested prompts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptComplexity {
    Simple,
    #[default]
    Intermediate,
    Advanced,
}

impl PromptComplexity {
    pub const VALUES: &'static [&'static str] = &["simple", "intermediate", "advanced"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

pub static GENERATE_TESTS_SCHEMA: Schema = Schema {
    name: "generate-tests",
    description: "Ask the assistant to generate test cases for an agent.",
    fields: &[
        FieldSpec::optional(
            "testType",
            FieldType::Enum {
                values: GeneratedTestType::VALUES,
            },
            "Kind of tests to generate.",
        )
        .with_default(DefaultValue::Str("integration")),
        FieldSpec::optional(
            "count",
            FieldType::Integer {
                min: Some(MIN_TEST_COUNT),
                max: Some(MAX_TEST_COUNT),
            },
            "Number of tests to generate.",
        )
        .with_default(DefaultValue::Int(DEFAULT_TEST_COUNT)),
    ],
};

pub static PERSONALITY_PROFILE_SCHEMA: Schema = Schema {
    name: "personality-profile",
    description: "Trait scores describing an assistant persona.",
    fields: &[FieldSpec::required(
        "traits",
        FieldType::Map {
            values: &FieldType::Number,
        },
        "Trait name to score, conventionally 0 to 100.",
    )],
};

pub static PROMPT_SUGGESTIONS_SCHEMA: Schema = Schema {
    name: "prompt-suggestions",
    description: "Ask the assistant for system prompt suggestions.",
    fields: &[
        FieldSpec::required("useCase", FieldType::String, "What the agent is for."),
        FieldSpec::optional("industry", FieldType::String, "Industry the agent serves."),
        FieldSpec::optional("tone", FieldType::String, "Desired voice of the agent."),
        FieldSpec::optional(
            "complexity",
            FieldType::Enum {
                values: PromptComplexity::VALUES,
            },
            "How elaborate the suggested prompts should be.",
        )
        .with_default(DefaultValue::Str("intermediate")),
    ],
};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

fn default_test_count() -> i64 {
    DEFAULT_TEST_COUNT
}

/// Request to generate agent tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTestsRequest {
    #[serde(default)]
    pub test_type: GeneratedTestType,
    #[serde(default = "default_test_count")]
    #[validate(range(min = 1, max = 20))]
    pub count: i64,
}

impl Default for GenerateTestsRequest {
    fn default() -> Self {
        Self {
            test_type: GeneratedTestType::default(),
            count: DEFAULT_TEST_COUNT,
        }
    }
}

impl Ingress for GenerateTestsRequest {
    fn schema() -> &'static Schema {
        &GENERATE_TESTS_SCHEMA
    }
}

/// Persona trait scores. The 0 to 100 scale is a convention only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    pub traits: BTreeMap<String, f64>,
}

impl Ingress for PersonalityProfile {
    fn schema() -> &'static Schema {
        &PERSONALITY_PROFILE_SCHEMA
    }
}

/// Request for prompt suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PromptSuggestionsRequest {
    pub use_case: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default)]
    pub complexity: PromptComplexity,
}

impl Ingress for PromptSuggestionsRequest {
    fn schema() -> &'static Schema {
        &PROMPT_SUGGESTIONS_SCHEMA
    }
}
