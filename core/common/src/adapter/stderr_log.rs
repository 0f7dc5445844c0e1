//! 人間向けログ（LogRecord → stderr に 1 行で要点のみ出力）
//!
//! `--verbose` 指定時に使う。fields は巨大化防止のため短く切り詰める。

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 200;

/// fields の要点だけを短い文字列にする
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = &record.fields else {
        return String::new();
    };
    if fields.is_empty() {
        return String::new();
    }
    let s = serde_json::to_string(fields).unwrap_or_default();
    let len = s.chars().count();
    if len <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}... (len={})", truncated, len)
}

/// レコードを 1 行に整形する
pub fn format_line(record: &LogRecord) -> String {
    let mut line = format!("[agent] {} {:<5}", record.ts, record.level.as_str());
    if let Some(layer) = &record.layer {
        line.push_str(&format!(" [{}]", layer));
    }
    line.push(' ');
    line.push_str(&record.message);
    let summary = fields_summary(record);
    if !summary.is_empty() {
        line.push(' ');
        line.push_str(&summary);
    }
    line
}

/// stderr へ整形して出力する Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl StderrLog {
    pub fn new() -> Self {
        Self
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        eprintln!("{}", format_line(record));
        Ok(())
    }
}
