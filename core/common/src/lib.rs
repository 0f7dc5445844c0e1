//! エージェント CLI の共通ライブラリ
//!
//! エラー型・設定値の型・LLM 呼び出し・ログ／環境変数のポートとアダプターを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Ports（trait 定義）
pub mod ports;

/// 標準アダプター
pub mod adapter;
