//! 1 回の実行: バナー → 入力 1 行 → LLM 1 往復 → 応答表示
//!
//! ループはしない。LLM 呼び出しの失敗はそのまま返し、応答行は表示しない。

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

use crate::domain::{AgentDescriptor, Query};
use crate::ports::outbound::{Console, LlmCompletion};

/// 入力を促すプロンプト
pub const PROMPT: &str = "🗣️ Say something: ";

/// 起動時に表示するバナー
pub fn banner(descriptor: &AgentDescriptor) -> String {
    format!("🤖 {} Ready!", descriptor.name())
}

/// 単発実行のユースケース（I/O はすべて ports 経由）
pub struct AgentUseCase {
    console: Arc<dyn Console>,
    completion: Arc<dyn LlmCompletion>,
    log: Arc<dyn Log>,
}

impl AgentUseCase {
    pub fn new(
        console: Arc<dyn Console>,
        completion: Arc<dyn LlmCompletion>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            console,
            completion,
            log,
        }
    }

    /// 1 回の対話を実行し、モデルの応答テキストを返す
    ///
    /// * `descriptor` - 名前と指示文（指示文は system メッセージとしてそのまま送る）
    /// * `response_label` - 応答の前に表示するラベル
    pub fn run(&self, descriptor: &AgentDescriptor, response_label: &str) -> Result<String, Error> {
        self.console.print_line(&banner(descriptor))?;

        let line = self.console.read_line(PROMPT)?;
        let query = Query::from_line(&line);
        self.trace(
            LogRecord::new(LogLevel::Info, "usecase", "lifecycle", "input read")
                .field("input_len", serde_json::json!(query.chars().count())),
        );

        let response = self
            .completion
            .complete(Some(descriptor.instructions()), &query)?;
        self.trace(
            LogRecord::new(LogLevel::Info, "usecase", "lifecycle", "response received")
                .field("response_len", serde_json::json!(response.chars().count())),
        );

        self.console.print_line("")?;
        self.console.print_line(response_label)?;
        self.console.print_line(&response)?;
        Ok(response)
    }

    // ログ失敗で実行を止めない
    fn trace(&self, record: LogRecord) {
        let _ = self.log.log(&record);
    }
}
