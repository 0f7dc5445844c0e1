//! ユースケース層

pub mod run_agent;

pub use run_agent::AgentUseCase;
