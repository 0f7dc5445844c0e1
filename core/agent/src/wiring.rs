//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, StderrLog};
use common::error::Error;
use common::llm::ModelConfig;
use common::ports::outbound::{EnvResolver, Log};

use crate::cli::Config;
use crate::ports::outbound::{Console, LlmCompletionFactory};
use crate::usecase::AgentUseCase;

/// JSONL ログファイルの既定パスを読む環境変数（--log-file が優先）
pub const LOG_FILE_ENV: &str = "AGENT_LOG_FILE";

/// 組み立て済みのアプリ
pub struct App {
    pub agent_use_case: AgentUseCase,
}

/// ログ出力先を決める: --log-file > AGENT_LOG_FILE > --verbose（stderr）> なし
pub fn wire_logger(config: &Config, env: &dyn EnvResolver) -> Arc<dyn Log> {
    let path = config
        .log_file
        .clone()
        .or_else(|| env.var(LOG_FILE_ENV).map(std::path::PathBuf::from));
    match path {
        Some(p) => Arc::new(FileJsonLog::new(p)),
        None if config.verbose => Arc::new(StderrLog::new()),
        None => Arc::new(NoopLog),
    }
}

/// 解決済みのモデル設定で AgentUseCase を組み立てる
pub fn wire_agent(
    model_config: &ModelConfig,
    completion_factory: &dyn LlmCompletionFactory,
    console: Arc<dyn Console>,
    logger: Arc<dyn Log>,
) -> Result<App, Error> {
    let completion = completion_factory.create(model_config)?;
    Ok(App {
        agent_use_case: AgentUseCase::new(console, completion, logger),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::MapEnvResolver;
    use common::ports::outbound::{LogLevel, LogRecord};

    #[test]
    fn test_wire_logger_log_file_flag_wins() {
        let dir = tempfile::tempdir().unwrap();
        let flag_path = dir.path().join("flag.jsonl");
        let env_path = dir.path().join("env.jsonl");
        let config = Config {
            log_file: Some(flag_path.clone()),
            ..Default::default()
        };
        let env = MapEnvResolver::new().with(LOG_FILE_ENV, env_path.to_str().unwrap());

        let logger = wire_logger(&config, &env);
        logger
            .log(&LogRecord::new(LogLevel::Info, "cli", "lifecycle", "run started"))
            .unwrap();
        assert!(flag_path.exists());
        assert!(!env_path.exists());
    }

    #[test]
    fn test_wire_logger_env_file() {
        let dir = tempfile::tempdir().unwrap();
        let env_path = dir.path().join("env.jsonl");
        let env = MapEnvResolver::new().with(LOG_FILE_ENV, env_path.to_str().unwrap());

        let logger = wire_logger(&Config::default(), &env);
        logger
            .log(&LogRecord::new(LogLevel::Info, "cli", "lifecycle", "run started"))
            .unwrap();
        assert!(env_path.exists());
    }
}
