//! Request and response contracts, grouped by product area.
//!
//! Every inbound type implements [`crate::validation::ingress::Ingress`]
//! and carries a static schema; response types are plain `Serialize`
//! records.

pub mod agent_test;
pub mod assistant;
pub mod hitl;
pub mod widget;
