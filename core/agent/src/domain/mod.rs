//! agent 固有のドメイン型（型と不変条件）

pub mod persona;
pub mod query;

pub use persona::{AgentDescriptor, Persona};
pub use query::Query;
