//! The [`Ingress`] trait: raw JSON in, typed record or violations out.

use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use super::constraints::flatten_errors;
use super::evaluator::{check_payload, normalize};
use super::rules::{FieldViolation, RuleType, ValidationReport};
use super::schema::Schema;

/// An inbound request body validated once at ingress.
pub trait Ingress: DeserializeOwned + Validate {
    /// Static descriptor of the wire shape.
    fn schema() -> &'static Schema;

    /// Validate a raw payload and build the typed record.
    ///
    /// Shape violations are reported all at once; the typed constraint phase
    /// only runs on payloads whose shape is valid.
    fn from_payload(payload: &Value) -> Result<Self, ValidationReport> {
        let report = check_payload(Self::schema(), payload);
        if !report.is_valid() {
            return Err(report);
        }

        let mut payload = payload.clone();
        normalize(Self::schema(), &mut payload);

        let record: Self = serde_json::from_value(payload).map_err(|e| {
            let mut report = ValidationReport::new();
            report.push(FieldViolation::new(
                "",
                RuleType::TypeCheck,
                format!("{} payload could not be decoded: {e}", Self::schema().name),
            ));
            report
        })?;

        record.validate().map_err(|errors| flatten_errors(&errors))?;
        Ok(record)
    }
}
