//! 環境変数解決 Outbound ポート
//!
//! モデル設定（モデル名・API キー・ベース URL）を環境変数から読むための抽象。
//! usecase / 設定解決はこの trait 経由でのみ環境変数にアクセスする。

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用の `MapEnvResolver` など。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を取得する。未設定・空文字は None として扱う。
    fn var(&self, name: &str) -> Option<String>;
}
