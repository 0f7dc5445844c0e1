//! Outbound ポート: アプリが外界（端末・LLM）を使うための trait

pub mod console;
pub mod llm_completion;

pub use console::Console;
pub use llm_completion::{LlmCompletion, LlmCompletionFactory};
