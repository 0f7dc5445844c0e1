//! OpenAI Chat Completions 互換 (/chat/completions) プロバイダ
//!
//! base_url で任意のエンドポイント（Gemini の OpenAI 互換 API 等）を指定する。
//! ストリーミングは行わず、1 リクエストで全文を受け取る。

use crate::domain::{ApiKey, BaseUrl, ModelName};
use crate::error::Error;
use crate::llm::config::ModelConfig;
use crate::llm::provider::{LlmProvider, Message};
use serde_json::{json, Value};

/// OpenAI Chat Completions 互換プロバイダ
pub struct OpenAiCompatProvider {
    model: ModelName,
    base_url: BaseUrl,
    api_key: ApiKey,
    temperature: Option<f64>,
    client: reqwest::blocking::Client,
}

impl OpenAiCompatProvider {
    /// 新しいプロバイダを作成
    ///
    /// * `temperature` - None のときペイロードに含めない（サーバ側のデフォルト）
    ///
    /// HTTP クライアント（TLS バックエンド）を初期化できない場合は `Error::System`。
    pub fn new(
        model: ModelName,
        base_url: BaseUrl,
        api_key: ApiKey,
        temperature: Option<f32>,
    ) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| Error::system(format!("failed to initialise HTTP client: {}", e)))?;
        Ok(Self {
            model,
            base_url,
            api_key,
            temperature: temperature.map(f64::from),
            client,
        })
    }

    /// 解決済みのモデル設定から作成
    pub fn from_config(config: &ModelConfig) -> Result<Self, Error> {
        Self::new(
            config.model.clone(),
            config.base_url.clone(),
            config.api_key.clone(),
            None,
        )
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

/// エラーレスポンス本文から `error.message` を取り出す（無ければ status と本文）
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    // Gemini の OpenAI 互換 API は [{"error": {...}}] の配列で返すことがある
    let extract = |v: &Value| v["error"]["message"].as_str().map(|s| s.to_string());
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| extract(&v).or_else(|| extract(&v[0])))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body))
}

impl LlmProvider for OpenAiCompatProvider {
    fn name(&self) -> &str {
        "openai_compat"
    }

    fn make_request_payload(
        &self,
        query: &str,
        system_instruction: Option<&str>,
    ) -> Result<Value, Error> {
        let mut messages: Vec<Message> = Vec::new();
        if let Some(s) = system_instruction {
            messages.push(Message::system(s));
        }
        messages.push(Message::user(query));

        let messages: Vec<Value> = messages
            .iter()
            .map(|m| json!({ "role": m.role, "content": m.content }))
            .collect();

        let mut payload = json!({
            "model": &*self.model,
            "messages": messages,
            "stream": false
        });
        if let Some(t) = self.temperature {
            payload["temperature"] = json!(t);
        }
        Ok(payload)
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let response = self
            .client
            .post(self.url())
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "Chat completions error: {}",
                error_message(status, &response_text)
            )));
        }

        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(err) = v.get("error") {
            let msg = err["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("API error: {}", msg)));
        }

        let content = &v["choices"][0]["message"]["content"];
        if let Some(s) = content.as_str() {
            return Ok(Some(s.to_string()));
        }
        // content parts 配列（[{"type":"text","text":"..."}]）にも対応
        if let Some(parts) = content.as_array() {
            let text: String = parts
                .iter()
                .filter_map(|p| p["text"].as_str())
                .collect();
            return Ok(Some(text));
        }
        Ok(None)
    }
}
