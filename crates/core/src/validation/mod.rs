//! Ingress validation engine.
//!
//! Payloads are checked in two phases. The shape phase walks the raw JSON
//! against a static [`schema::Schema`] and reports every missing field,
//! type mismatch and enum miss at once. Payloads that pass are decoded with
//! serde (defaults applied) and then checked by their `validator::Validate`
//! impl for value-level constraints such as ranges and UUID versions.

pub mod constraints;
pub mod evaluator;
pub mod ingress;
pub mod rules;
pub mod schema;
