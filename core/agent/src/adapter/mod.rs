//! Adapter 層: ports の実装（端末・LLM ドライバー）

pub mod console;
pub mod llm_completion;
#[cfg(test)]
pub mod stub;

pub use console::StdConsole;
pub use llm_completion::StdLlmCompletionFactory;
#[cfg(test)]
pub use stub::{RecordingConsole, StubCompletion, StubCompletionFactory};
