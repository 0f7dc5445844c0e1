//! 単発 LLM 完了の標準実装（LlmDriver で 1 往復）

use common::error::Error;
use common::llm::{LlmDriver, LlmProvider, ModelConfig, OpenAiCompatProvider};
use std::sync::Arc;

use crate::ports::outbound::{LlmCompletion, LlmCompletionFactory};

/// LlmDriver を LlmCompletion として使うアダプタ
pub struct DriverLlmCompletion<P: LlmProvider> {
    driver: LlmDriver<P>,
}

impl<P: LlmProvider> DriverLlmCompletion<P> {
    pub fn new(provider: P) -> Self {
        Self {
            driver: LlmDriver::new(provider),
        }
    }
}

impl<P: LlmProvider + Send + Sync> LlmCompletion for DriverLlmCompletion<P> {
    fn complete(&self, system_instruction: Option<&str>, user_message: &str) -> Result<String, Error> {
        self.driver.query(user_message, system_instruction)
    }
}

/// OpenAI 互換プロバイダで DriverLlmCompletion を作る標準ファクトリ
#[derive(Debug, Clone, Default)]
pub struct StdLlmCompletionFactory;

impl LlmCompletionFactory for StdLlmCompletionFactory {
    fn create(&self, config: &ModelConfig) -> Result<Arc<dyn LlmCompletion>, Error> {
        let provider = OpenAiCompatProvider::from_config(config)?;
        Ok(Arc::new(DriverLlmCompletion::new(provider)))
    }
}
