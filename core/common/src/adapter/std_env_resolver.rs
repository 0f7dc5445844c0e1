//! 標準環境変数解決実装（std::env + `.env`）と、テスト・埋め込み用のメモリ実装

use crate::ports::outbound::EnvResolver;
use std::collections::HashMap;
use std::env;
use std::path::Path;

/// カレントディレクトリで探す `.env` のファイル名
pub const DOTENV_FILE: &str = ".env";

/// 標準環境変数解決実装
///
/// 実際の環境変数を優先し、無ければ `.env` から読んだ値を返す。
/// `.env` の値はプロセス環境に書き戻さない。
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver {
    dotenv: HashMap<String, String>,
    warnings: Vec<String>,
}

impl StdEnvResolver {
    /// `.env` を読まない（プロセス環境のみ）
    pub fn new() -> Self {
        Self::default()
    }

    /// カレントディレクトリの `.env` を読み込んでから使う。
    pub fn with_dotenv() -> Self {
        Self::from_dotenv_path(DOTENV_FILE)
    }

    /// 指定した `.env` を 1 行ずつ読み込む。
    ///
    /// ファイルが無ければ何もしない。解析できない行は飛ばして `warnings()` に残し、
    /// 以降の行は読み続ける。同じキーが複数あれば最初の値を使う。
    pub fn from_dotenv_path(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let mut resolver = Self::default();
        let iter = match dotenvy::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => return resolver,
            Err(e) => {
                resolver.warnings.push(format!("{}: {}", path.display(), e));
                return resolver;
            }
        };
        for item in iter {
            match item {
                Ok((key, value)) => {
                    resolver.dotenv.entry(key).or_insert(value);
                }
                Err(e @ dotenvy::Error::LineParse(..)) => {
                    resolver.warnings.push(format!("{}: {}", path.display(), e));
                }
                Err(e) => {
                    // 読み込み自体の失敗は以降の行も読めない
                    resolver.warnings.push(format!("{}: {}", path.display(), e));
                    break;
                }
            }
        }
        resolver
    }

    /// `.env` の読み込みで飛ばした行・失敗の説明
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

impl EnvResolver for StdEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name)
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.dotenv.get(name).filter(|s| !s.is_empty()).cloned())
    }
}

/// HashMap で環境変数を与える実装（プロセス環境を汚さずにテストするため）
#[derive(Debug, Clone, Default)]
pub struct MapEnvResolver {
    vars: HashMap<String, String>,
}

impl MapEnvResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 変数を 1 つ追加する（builder）
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvResolver for MapEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|s| !s.is_empty()).cloned()
    }
}
