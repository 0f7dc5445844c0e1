mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;


use std::process;
use std::sync::Arc;

use adapter::{StdConsole, StdLlmCompletionFactory};
use cli::{parse_args, print_completion, Config, ParseOutcome};
use common::adapter::StdEnvResolver;
use common::error::Error;
use common::llm::ModelConfig;
use common::ports::outbound::{EnvResolver, Log, LogLevel, LogRecord};
use ports::inbound::UseCaseRunner;
use ports::outbound::{Console, LlmCompletionFactory};
use wiring::{wire_agent, wire_logger};

/// 設定解決 → 配線 → 1 回実行 を行う Runner
///
/// 環境変数・端末・LLM は差し替え可能（テストでは Stub を注入する）。
struct Runner {
    env_resolver: Arc<dyn EnvResolver>,
    console: Arc<dyn Console>,
    completion_factory: Arc<dyn LlmCompletionFactory>,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        if config.help {
            print_help();
            return Ok(0);
        }

        let logger = wire_logger(&config, self.env_resolver.as_ref());
        let descriptor = config.persona.descriptor();
        let _ = logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "run started")
                .field("agent", serde_json::json!(descriptor.name())),
        );

        let result = self.run_once(&config, Arc::clone(&logger));

        match &result {
            Ok(code) => {
                let _ = logger.log(
                    &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "run finished")
                        .field("exit_code", serde_json::json!(code)),
                );
            }
            Err(e) => {
                let _ = logger.log(
                    &LogRecord::new(LogLevel::Error, "cli", "error", "run failed")
                        .field("error", serde_json::json!(e.to_string()))
                        .field("exit_code", serde_json::json!(e.exit_code())),
                );
            }
        }
        result
    }
}

impl Runner {
    fn run_once(&self, config: &Config, logger: Arc<dyn Log>) -> Result<i32, Error> {
        // プロンプトより前に設定を検証する
        let model_config = ModelConfig::from_env(self.env_resolver.as_ref())?;
        let _ = logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "config", "config loaded")
                .field("model", serde_json::json!(&*model_config.model))
                .field("base_url", serde_json::json!(&*model_config.base_url)),
        );

        let app = wire_agent(
            &model_config,
            self.completion_factory.as_ref(),
            Arc::clone(&self.console),
            logger,
        )?;
        app.agent_use_case
            .run(&config.persona.descriptor(), config.persona.response_label())?;
        Ok(0)
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("agent: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let env_resolver = StdEnvResolver::with_dotenv();
    for warning in env_resolver.warnings() {
        eprintln!("agent: warning: skipped .env entry: {}", warning);
    }
    let runner = Runner {
        env_resolver: Arc::new(env_resolver),
        console: Arc::new(StdConsole::new()),
        completion_factory: Arc::new(StdLlmCompletionFactory),
    };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: agent [-a echo|assistant] [-v] [--log-file <path>]");
}

fn print_help() {
    println!("Usage: agent [options]");
    println!("Options:");
    println!("  -h, --help                 Show this help message");
    println!("  -a, --agent <agent>        Agent persona: echo (default, repeats your line verbatim) or assistant");
    println!("  -v, --verbose              Emit lifecycle logs to stderr");
    println!("      --log-file <path>      Append JSONL lifecycle logs to <path>");
    println!("      --generate <shell>     Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Environment (also read from ./.env):");
    println!("  GEMINI_MODEL     Model name sent to the chat completions endpoint (required)");
    println!("  GEMINI_API_KEY   API key, sent as a Bearer token (required)");
    println!("  GEMINI_API_BASE  OpenAI-compatible base URL, e.g. https://generativelanguage.googleapis.com/v1beta/openai (required)");
    println!("  AGENT_LOG_FILE   Default JSONL log file when --log-file is not given");
    println!();
    println!("Description:");
    println!("  Reads one line from stdin, sends it with the agent's fixed instruction");
    println!("  to the model in a single request, prints the reply and exits.");
}
