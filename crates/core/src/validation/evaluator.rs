//! Shape evaluator: pure logic over raw JSON, no typed decoding.

use serde_json::{Map, Value};
use uuid::Uuid;

use super::rules::{FieldViolation, RuleType, ValidationReport};
use super::schema::{FieldType, Schema};

/// Walk `payload` against `schema` and collect every shape violation.
///
/// Checks presence of required fields, JSON types, enum membership and UUID
/// syntax, recursing into arrays, nested objects and maps. Keys the schema
/// does not declare are ignored.
pub fn check_payload(schema: &Schema, payload: &Value) -> ValidationReport {
    let mut report = ValidationReport::new();
    match payload.as_object() {
        Some(map) => check_object(schema, map, "", &mut report),
        None => report.push(
            FieldViolation::new(
                "",
                RuleType::TypeCheck,
                format!("{} payload must be a JSON object", schema.name),
            )
            .with_value(payload.clone()),
        ),
    }
    report
}

/// Prepare a shape-checked payload for typed decoding.
///
/// Drops `null` entries for optional fields so decoding falls back to the
/// field default, and rewrites integral floats (`5.0`) in integer fields as
/// integers. Recurses into nested objects, arrays and maps.
pub fn normalize(schema: &Schema, payload: &mut Value) {
    let Some(map) = payload.as_object_mut() else {
        return;
    };
    for field in schema.fields {
        if map.get(field.name).is_some_and(Value::is_null) {
            if !field.required {
                map.remove(field.name);
            }
            continue;
        }
        if let Some(value) = map.get_mut(field.name) {
            normalize_value(&field.ty, value);
        }
    }
}

fn normalize_value(ty: &FieldType, value: &mut Value) {
    match ty {
        FieldType::Integer { .. } => {
            if !value.is_i64() {
                if let Some(n) = as_integer(value) {
                    *value = Value::from(n);
                }
            }
        }
        FieldType::Object { schema } => normalize(schema, value),
        FieldType::Array { items } => {
            if let Some(elements) = value.as_array_mut() {
                for element in elements {
                    normalize_value(items, element);
                }
            }
        }
        FieldType::Map { values } => {
            if let Some(entries) = value.as_object_mut() {
                for entry in entries.values_mut() {
                    normalize_value(values, entry);
                }
            }
        }
        _ => {}
    }
}

/// Integer value of `value`, accepting floats with no fractional part that
/// fit in an `i64`.
fn as_integer(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Only the hyphenated 8-4-4-4-12 text form is accepted; the simple, braced
/// and URN forms `Uuid::try_parse` also understands are rejected.
fn is_hyphenated_uuid(s: &str) -> bool {
    s.len() == 36 && Uuid::try_parse(s).is_ok()
}

fn check_object(
    schema: &Schema,
    data: &Map<String, Value>,
    prefix: &str,
    report: &mut ValidationReport,
) {
    for field in schema.fields {
        let path = join_key(prefix, field.name);
        match data.get(field.name) {
            None | Some(Value::Null) => {
                if field.required {
                    report.push(required(&path));
                }
            }
            Some(Value::String(s)) if s.is_empty() && field.required => {
                report.push(required(&path).with_value(Value::String(String::new())));
            }
            Some(value) => check_value(&field.ty, value, &path, report),
        }
    }
}

fn check_value(ty: &FieldType, value: &Value, path: &str, report: &mut ValidationReport) {
    match ty {
        FieldType::Any => {}
        FieldType::String => {
            if !value.is_string() {
                report.push(type_mismatch(ty, value, path));
            }
        }
        FieldType::Integer { .. } => {
            if as_integer(value).is_none() {
                report.push(type_mismatch(ty, value, path));
            }
        }
        FieldType::Number => {
            if !value.is_number() {
                report.push(type_mismatch(ty, value, path));
            }
        }
        FieldType::Boolean => {
            if !value.is_boolean() {
                report.push(type_mismatch(ty, value, path));
            }
        }
        FieldType::Uuid { .. } => match value.as_str() {
            Some(s) if is_hyphenated_uuid(s) => {}
            Some(_) => report.push(
                FieldViolation::new(path, RuleType::UuidFormat, format!("{path} must be a UUID"))
                    .with_value(value.clone()),
            ),
            None => report.push(type_mismatch(ty, value, path)),
        },
        FieldType::Enum { values } => match value.as_str() {
            Some(s) if values.iter().any(|v| *v == s) => {}
            Some(_) => report.push(
                FieldViolation::new(
                    path,
                    RuleType::EnumValues,
                    format!("{path} must be one of: {}", values.join(", ")),
                )
                .with_value(value.clone()),
            ),
            None => report.push(type_mismatch(ty, value, path)),
        },
        FieldType::Array { items } => match value.as_array() {
            Some(elements) => {
                for (index, element) in elements.iter().enumerate() {
                    check_value(items, element, &format!("{path}[{index}]"), report);
                }
            }
            None => report.push(type_mismatch(ty, value, path)),
        },
        FieldType::Object { schema } => match value.as_object() {
            Some(map) => check_object(schema, map, path, report),
            None => report.push(type_mismatch(ty, value, path)),
        },
        FieldType::Map { values } => match value.as_object() {
            Some(map) => {
                for (key, entry) in map {
                    check_value(values, entry, &join_key(path, key), report);
                }
            }
            None => report.push(type_mismatch(ty, value, path)),
        },
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn required(path: &str) -> FieldViolation {
    FieldViolation::new(path, RuleType::Required, format!("{path} is required"))
}

fn type_mismatch(ty: &FieldType, value: &Value, path: &str) -> FieldViolation {
    let article = match ty.type_name().as_bytes().first() {
        Some(b'a' | b'e' | b'i' | b'o') => "an",
        _ => "a",
    };
    FieldViolation::new(
        path,
        RuleType::TypeCheck,
        format!("{path} must be {article} {}", ty.type_name()),
    )
    .with_value(value.clone())
}
