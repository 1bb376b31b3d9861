use crate::validation::rules::ValidationReport;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} '{key}'")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Invalid(ValidationReport),
}

impl From<ValidationReport> for CoreError {
    fn from(report: ValidationReport) -> Self {
        CoreError::Invalid(report)
    }
}
