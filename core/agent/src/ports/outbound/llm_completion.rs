//! 単発 LLM 完了の Outbound ポート
//!
//! ストリーミングではなく 1 回のリクエストで全文応答を取得する。

use common::error::Error;
use common::llm::ModelConfig;
use std::sync::Arc;

/// 単発の LLM 完了（system + user で応答文字列を取得）
pub trait LlmCompletion: Send + Sync {
    fn complete(&self, system_instruction: Option<&str>, user_message: &str) -> Result<String, Error>;
}

/// 解決済みのモデル設定から LlmCompletion を組み立てる
pub trait LlmCompletionFactory: Send + Sync {
    fn create(&self, config: &ModelConfig) -> Result<Arc<dyn LlmCompletion>, Error>;
}
