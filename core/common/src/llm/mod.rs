//! LLMドライバーとプロバイダの実装
//!
//! OpenAI Chat Completions 互換エンドポイントへの単発呼び出しを提供します。

pub mod config;
pub mod driver;
pub mod openai_compat;
pub mod provider;

pub use config::ModelConfig;
pub use driver::LlmDriver;
pub use openai_compat::OpenAiCompatProvider;
pub use provider::{LlmProvider, Message};
