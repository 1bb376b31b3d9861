//! Violation and report types shared by both validation phases.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The constraint a field violated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Required field absent, `null`, or an empty string.
    Required,
    /// JSON value of the wrong type.
    TypeCheck,
    /// String outside the allowed set.
    EnumValues,
    /// String that does not parse as a UUID.
    UuidFormat,
    /// Well-formed UUID of the wrong version.
    UuidVersion,
    /// Number below the lower bound.
    MinValue,
    /// Number above the upper bound.
    MaxValue,
    /// Any other typed constraint.
    Constraint,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TypeCheck => "type_check",
            Self::EnumValues => "enum_values",
            Self::UuidFormat => "uuid_format",
            Self::UuidVersion => "uuid_version",
            Self::MinValue => "min_value",
            Self::MaxValue => "max_value",
            Self::Constraint => "constraint",
        }
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field-level rule violation.
///
/// `field` is the wire path of the offending value: `testName`,
/// `participants[2]`, `testCases[0].message`, `traits.openness`. The root
/// payload itself is the empty path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: RuleType,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, rule_type: RuleType, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule_type,
            message: message.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: serde_json::Value) -> Self {
        self.value = Some(value);
        self
    }
}

/// Every violation found in one payload, in discovery order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidationReport {
    pub violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    pub fn extend(&mut self, other: ValidationReport) {
        self.violations.extend(other.violations);
    }

    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Whether any violation was recorded against exactly `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// The first violation recorded against `field`, if any.
    pub fn for_field(&self, field: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }

    /// Turn the report into `Ok(value)` when empty, `Err(self)` otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationReport> {
        if self.is_valid() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.violations.len();
        write!(f, "{n} field violation{}", if n == 1 { "" } else { "s" })?;
        for (i, v) in self.violations.iter().enumerate() {
            let sep = if i == 0 { ": " } else { ", " };
            let field = if v.field.is_empty() { "<root>" } else { &v.field };
            write!(f, "{sep}{field} ({})", v.rule_type)?;
        }
        Ok(())
    }
}
