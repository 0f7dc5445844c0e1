//! モデル設定（環境変数から解決）
//!
//! 起動時に 1 回だけ解決し、値として配線に渡す。
//! これ以降のコードはプロセス環境を直接読まない。

use crate::domain::{ApiKey, BaseUrl, ModelName};
use crate::error::Error;
use crate::ports::outbound::EnvResolver;

/// モデル名を読む環境変数
pub const MODEL_ENV: &str = "GEMINI_MODEL";
/// API キーを読む環境変数
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
/// OpenAI 互換 API のベース URL を読む環境変数
pub const API_BASE_ENV: &str = "GEMINI_API_BASE";

/// 1 回の実行で使うモデル設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub model: ModelName,
    pub api_key: ApiKey,
    pub base_url: BaseUrl,
}

impl ModelConfig {
    /// 環境変数から解決する。未設定・空のものがあれば最初の 1 つを
    /// 用途付きのメッセージで Error::Env として返す。
    pub fn from_env(env: &dyn EnvResolver) -> Result<Self, Error> {
        let model = require(env, MODEL_ENV, "model name")?;
        let api_key = require(env, API_KEY_ENV, "API key")?;
        let base_url = require(env, API_BASE_ENV, "API base URL")?;
        Ok(Self {
            model: ModelName::new(model),
            api_key: ApiKey::new(api_key),
            base_url: BaseUrl::new(base_url),
        })
    }
}

fn require(env: &dyn EnvResolver, name: &str, purpose: &str) -> Result<String, Error> {
    env.var(name).ok_or_else(|| {
        Error::env(format!(
            "{} is not set (the {} for the chat completions endpoint); set it in the environment or .env",
            name, purpose
        ))
    })
}
