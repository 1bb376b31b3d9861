//! Widget and template deployment contracts.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::JsonMap;
use crate::validation::ingress::Ingress;
use crate::validation::schema::{DefaultValue, FieldSpec, FieldType, Schema};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Target environment of a widget deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeployEnvironment {
    Staging,
    #[default]
    Production,
}

impl DeployEnvironment {
    pub const VALUES: &'static [&'static str] = &["staging", "production"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

/// Device frame a widget preview renders in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewDevice {
    #[default]
    Desktop,
    Mobile,
    Tablet,
}

impl PreviewDevice {
    pub const VALUES: &'static [&'static str] = &["desktop", "mobile", "tablet"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
        }
    }
}

// ---------------------------------------------------------------------------
// Schemas
// ---------------------------------------------------------------------------

pub static DEPLOY_WIDGET_SCHEMA: Schema = Schema {
    name: "deploy-widget",
    description: "Publish a chat widget to an environment.",
    fields: &[
        FieldSpec::optional(
            "environment",
            FieldType::Enum {
                values: DeployEnvironment::VALUES,
            },
            "Target environment.",
        )
        .with_default(DefaultValue::Str("production")),
        FieldSpec::optional(
            "customDomain",
            FieldType::String,
            "Domain the widget is served from.",
        ),
        FieldSpec::optional(
            "enableAnalytics",
            FieldType::Boolean,
            "Collect usage analytics for the widget.",
        )
        .with_default(DefaultValue::Bool(true)),
        FieldSpec::optional(
            "enableCaching",
            FieldType::Boolean,
            "Serve widget assets through the cache.",
        )
        .with_default(DefaultValue::Bool(true)),
    ],
};

pub static PREVIEW_WIDGET_SCHEMA: Schema = Schema {
    name: "preview-widget",
    description: "Render a widget preview without deploying it.",
    fields: &[
        FieldSpec::optional(
            "device",
            FieldType::Enum {
                values: PreviewDevice::VALUES,
            },
            "Device frame for the preview.",
        )
        .with_default(DefaultValue::Str("desktop")),
        FieldSpec::optional(
            "theme",
            FieldType::Map {
                values: &FieldType::Any,
            },
            "Theme overrides applied to the preview.",
        ),
        FieldSpec::optional(
            "mockData",
            FieldType::Map {
                values: &FieldType::Any,
            },
            "Canned data the preview renders with.",
        ),
    ],
};

pub static DEPLOY_TEMPLATE_SCHEMA: Schema = Schema {
    name: "deploy-template",
    description: "Instantiate a marketplace template with customizations.",
    fields: &[FieldSpec::optional(
        "customizations",
        FieldType::Map {
            values: &FieldType::Any,
        },
        "Template overrides, passed through untouched.",
    )],
};

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

fn enabled() -> bool {
    true
}

/// Request to deploy a widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeployWidgetRequest {
    #[serde(default)]
    pub environment: DeployEnvironment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_domain: Option<String>,
    #[serde(default = "enabled")]
    pub enable_analytics: bool,
    #[serde(default = "enabled")]
    pub enable_caching: bool,
}

impl Default for DeployWidgetRequest {
    fn default() -> Self {
        Self {
            environment: DeployEnvironment::default(),
            custom_domain: None,
            enable_analytics: true,
            enable_caching: true,
        }
    }
}

impl Ingress for DeployWidgetRequest {
    fn schema() -> &'static Schema {
        &DEPLOY_WIDGET_SCHEMA
    }
}

/// Request to preview a widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PreviewWidgetRequest {
    #[serde(default)]
    pub device: PreviewDevice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<JsonMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mock_data: Option<JsonMap>,
}

impl Ingress for PreviewWidgetRequest {
    fn schema() -> &'static Schema {
        &PREVIEW_WIDGET_SCHEMA
    }
}

/// Request to deploy a template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeployTemplateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizations: Option<JsonMap>,
}

impl Ingress for DeployTemplateRequest {
    fn schema() -> &'static Schema {
        &DEPLOY_TEMPLATE_SCHEMA
    }
}
