//! Domain core for the agentdesk ingress layer.
//!
//! Request and response contracts for agent testing, assistant utilities,
//! human-in-the-loop delegation and widget deployment, plus the validation
//! engine that turns raw JSON payloads into typed records.

pub mod catalog;
pub mod dto;
pub mod error;
pub mod types;
pub mod validation;
