//! Typed constraint helpers built on `validator`.
//!
//! Custom validator functions used by DTO derives, and the conversion from
//! `validator::ValidationErrors` into this crate's [`ValidationReport`] with
//! wire (camelCase) field paths.

use std::borrow::Cow;

use serde_json::{json, Value};
use uuid::{Uuid, Variant, Version};
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::rules::{FieldViolation, RuleType, ValidationReport};

/// Error code raised by [`validate_uuid_v4_list`].
pub const UUID_VERSION_CODE: &str = "uuid_version";

/// Whether `id` is an RFC 4122 version 4 (random) UUID.
pub fn is_uuid_v4(id: &Uuid) -> bool {
    id.get_version() == Some(Version::Random) && id.get_variant() == Variant::RFC4122
}

/// Require every entry of a UUID list to be version 4.
///
/// All offending entries are recorded in the `invalid` param so each one
/// can be reported against its own index.
pub fn validate_uuid_v4_list(ids: &[Uuid]) -> Result<(), ValidationError> {
    let invalid: Vec<Value> = ids
        .iter()
        .enumerate()
        .filter(|(_, id)| !is_uuid_v4(id))
        .map(|(index, id)| json!({ "index": index, "value": id.to_string() }))
        .collect();

    if invalid.is_empty() {
        return Ok(());
    }

    let mut err = ValidationError::new(UUID_VERSION_CODE);
    err.message = Some(Cow::from("must be a version 4 UUID"));
    err.add_param(Cow::from("invalid"), &invalid);
    Err(err)
}

/// Flatten nested `validator` errors into a report, sorted by field name.
pub fn flatten_errors(errors: &ValidationErrors) -> ValidationReport {
    let mut report = ValidationReport::new();
    collect(errors, "", &mut report);
    report
}

fn collect(errors: &ValidationErrors, prefix: &str, report: &mut ValidationReport) {
    let mut entries: Vec<_> = errors.errors().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (field, kind) in entries {
        let field = field.to_string();
        let path = if field == "__all__" {
            prefix.to_string()
        } else if prefix.is_empty() {
            wire_name(&field)
        } else {
            format!("{prefix}.{}", wire_name(&field))
        };

        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    push_field_error(&path, err, report);
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(inner, &path, report),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(inner, &format!("{path}[{index}]"), report);
                }
            }
        }
    }
}

fn push_field_error(path: &str, err: &ValidationError, report: &mut ValidationReport) {
    let value = err.params.get("value").cloned();

    match &*err.code {
        "range" => {
            let min = err.params.get("min");
            let max = err.params.get("max");
            let actual = value.as_ref().and_then(Value::as_f64);
            let below = match (actual, min.and_then(Value::as_f64)) {
                (Some(n), Some(lo)) => n < lo,
                _ => false,
            };
            let violation = match (below, min, max) {
                (true, Some(lo), _) => FieldViolation::new(
                    path,
                    RuleType::MinValue,
                    format!("{path} must be at least {}", bound(lo)),
                ),
                (false, _, Some(hi)) => FieldViolation::new(
                    path,
                    RuleType::MaxValue,
                    format!("{path} must be at most {}", bound(hi)),
                ),
                _ => {
                    let message = format!("{path} is out of range");
                    FieldViolation::new(path, RuleType::Constraint, message)
                }
            };
            report.push(attach(violation, value));
        }
        UUID_VERSION_CODE => {
            let invalid = err
                .params
                .get("invalid")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            for entry in invalid {
                let element = match entry.get("index").and_then(Value::as_u64) {
                    Some(index) => format!("{path}[{index}]"),
                    None => path.to_string(),
                };
                let violation = FieldViolation::new(
                    &element,
                    RuleType::UuidVersion,
                    format!("{element} must be a version 4 UUID"),
                );
                report.push(attach(violation, entry.get("value").cloned()));
            }
        }
        code => {
            let message = match &err.message {
                Some(m) => format!("{path} {m}"),
                None => format!("{path} failed {code} constraint"),
            };
            report.push(attach(
                FieldViolation::new(path, RuleType::Constraint, message),
                value,
            ));
        }
    }
}

/// Render a range bound the way the schema document publishes it: `1`, not
/// `1.0`.
fn bound(param: &Value) -> String {
    match param.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => (f as i64).to_string(),
        _ => param.to_string(),
    }
}

fn attach(violation: FieldViolation, value: Option<Value>) -> FieldViolation {
    match value {
        Some(v) => violation.with_value(v),
        None => violation,
    }
}

/// Convert a Rust `snake_case` field name to its `camelCase` wire name.
pub fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = !out.is_empty();
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
