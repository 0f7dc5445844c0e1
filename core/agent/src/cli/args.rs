use crate::domain::Persona;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

const BIN_NAME: &str = "agent";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -a / --agent: 使うペルソナ（既定は echo）
    pub persona: Persona,
    /// -v / --verbose: ライフサイクルログを stderr に出す
    pub verbose: bool,
    /// --log-file: JSONL ログの出力先（AGENT_LOG_FILE より優先）
    pub log_file: Option<PathBuf>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new(BIN_NAME)
        .about("Read one line, send it to an OpenAI-compatible model with a fixed agent instruction, print the reply")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("agent")
                .short('a')
                .long("agent")
                .value_name("agent")
                .help("Agent persona: echo (repeat verbatim) or assistant")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit lifecycle logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("log-file")
                .long("log-file")
                .value_name("path")
                .help("Append JSONL lifecycle logs to this file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let persona = match matches.get_one::<String>("agent") {
        Some(s) => Persona::parse(s).ok_or_else(|| {
            Error::invalid_argument(format!(
                "Unknown agent: {} (expected echo or assistant)",
                s
            ))
        })?,
        None => Persona::default(),
    };
    Ok(Config {
        help: matches.get_flag("help"),
        persona,
        verbose: matches.get_flag("verbose"),
        log_file: matches.get_one::<PathBuf>("log-file").cloned(),
    })
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let args: Vec<String> = std::env::args().collect();
    parse_outcome_from(&args)
}

fn parse_outcome_from(args: &[String]) -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)?))
}

/// テスト用: 引数スライスから Config を解析する
#[cfg(test)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    match parse_outcome_from(args)? {
        ParseOutcome::Config(c) => Ok(c),
        ParseOutcome::GenerateCompletion(_) => Err(Error::invalid_argument("unexpected --generate")),
    }
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}
