//! 端末入出力の Outbound ポート
//!
//! バナー・プロンプト・応答の表示と、1 行の入力読み取りを抽象化する。

use common::error::Error;

/// 端末（stdout / stdin）
pub trait Console: Send + Sync {
    /// 1 行を表示する（改行付き）
    fn print_line(&self, line: &str) -> Result<(), Error>;

    /// プロンプトを表示し、入力を 1 行読む（ブロッキング）。
    /// 入力が閉じていれば Error::Io。
    fn read_line(&self, prompt: &str) -> Result<String, Error>;
}
