//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。`Display` は人間向けメッセージのみで、
//! 終了コードは `exit_code()` で取り出す（sysexits 準拠）。

/// エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（usage を表示する）
    #[error("{0}")]
    InvalidArgument(String),
    /// 必須の環境変数が未設定
    #[error("{0}")]
    Env(String),
    /// HTTP 通信・API エラー
    #[error("{0}")]
    Http(String),
    /// JSON のシリアライズ・パース失敗
    #[error("{0}")]
    Json(String),
    /// 入出力エラー（stdin / stdout / ログファイル）
    #[error("{0}")]
    Io(String),
    /// その他のシステムエラー（HTTP クライアントの初期化失敗など）
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::Http(_) | Self::Json(_) | Self::Io(_) => 74,
            Self::System(_) => 70,
        }
    }

    /// usage を併せて表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());

        let err = Error::system("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 70);
        assert!(!err.is_usage());
    }

    #[test]
    fn test_env_error_is_not_usage() {
        let err = Error::env("GEMINI_API_KEY is not set");
        assert_eq!(err.exit_code(), 64);
        assert!(!err.is_usage());
    }

    #[test]
    fn test_remote_errors_exit_74() {
        assert_eq!(Error::http("x").exit_code(), 74);
        assert_eq!(Error::json("x").exit_code(), 74);
        assert_eq!(Error::io_msg("x").exit_code(), 74);
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref m) if m.contains("stdin closed")));
    }
}
