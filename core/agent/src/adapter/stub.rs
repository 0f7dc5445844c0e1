//! テスト用: 固定応答の LlmCompletion と、入出力を記録する Console

use common::error::Error;
use common::llm::ModelConfig;
use std::sync::{Arc, Mutex};

use crate::ports::outbound::{Console, LlmCompletion, LlmCompletionFactory};

enum Reply {
    Fixed(Result<String, Error>),
    /// ユーザー入力をそのまま返す（echo 指示に忠実なモデルの代わり）
    Parrot,
}

/// テスト用: 固定の応答（またはエラー）を返し、受け取った引数を記録する
pub struct StubCompletion {
    reply: Reply,
    pub(crate) calls: Mutex<Vec<(Option<String>, String)>>,
}

impl StubCompletion {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(text: &str) -> Self {
        Self::with_reply(Reply::Fixed(Ok(text.to_string())))
    }

    pub fn parroting() -> Self {
        Self::with_reply(Reply::Parrot)
    }

    pub fn failing(err: Error) -> Self {
        Self::with_reply(Reply::Fixed(Err(err)))
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_system_instruction(&self) -> Option<String> {
        self.calls.lock().unwrap().last().and_then(|c| c.0.clone())
    }

    pub fn last_user_message(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|c| c.1.clone())
    }
}

impl LlmCompletion for StubCompletion {
    fn complete(&self, system_instruction: Option<&str>, user_message: &str) -> Result<String, Error> {
        self.calls
            .lock()
            .unwrap()
            .push((system_instruction.map(|s| s.to_string()), user_message.to_string()));
        match &self.reply {
            Reply::Fixed(r) => r.clone(),
            Reply::Parrot => Ok(user_message.to_string()),
        }
    }
}

/// テスト用: 決まった StubCompletion を渡し、受け取った設定を記録する
pub struct StubCompletionFactory {
    completion: Arc<StubCompletion>,
    pub(crate) configs: Mutex<Vec<ModelConfig>>,
}

impl StubCompletionFactory {
    pub fn new(completion: Arc<StubCompletion>) -> Self {
        Self {
            completion,
            configs: Mutex::new(Vec::new()),
        }
    }

    pub fn configs(&self) -> Vec<ModelConfig> {
        self.configs.lock().unwrap().clone()
    }
}

impl LlmCompletionFactory for StubCompletionFactory {
    fn create(&self, config: &ModelConfig) -> Result<Arc<dyn LlmCompletion>, Error> {
        self.configs.lock().unwrap().push(config.clone());
        let completion: Arc<dyn LlmCompletion> = self.completion.clone();
        Ok(completion)
    }
}

/// テスト用: 入力行を与え、表示内容とプロンプトを記録する
pub struct RecordingConsole {
    input: Option<String>,
    pub(crate) printed: Mutex<Vec<String>>,
    pub(crate) prompts: Mutex<Vec<String>>,
}

impl RecordingConsole {
    pub fn with_input(line: &str) -> Self {
        Self {
            input: Some(line.to_string()),
            printed: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// stdin が閉じている状態
    pub fn closed() -> Self {
        Self {
            input: None,
            printed: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn printed(&self) -> Vec<String> {
        self.printed.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Console for RecordingConsole {
    fn print_line(&self, line: &str) -> Result<(), Error> {
        self.printed.lock().unwrap().push(line.to_string());
        Ok(())
    }

    fn read_line(&self, prompt: &str) -> Result<String, Error> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.input
            .clone()
            .ok_or_else(|| Error::io_msg("stdin closed before a line was read"))
    }
}
