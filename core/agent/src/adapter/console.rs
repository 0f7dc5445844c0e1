//! 標準入出力の Console 実装

use common::error::Error;
use std::io::{self, BufRead, Write};

use crate::ports::outbound::Console;

/// stdout へ表示し、stdin から 1 行読む
#[derive(Debug, Clone, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn print_line(&self, line: &str) -> Result<(), Error> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)
            .and_then(|_| out.flush())
            .map_err(|e| Error::io_msg(format!("Failed to write stdout: {}", e)))
    }

    fn read_line(&self, prompt: &str) -> Result<String, Error> {
        {
            let mut out = io::stdout().lock();
            write!(out, "{}", prompt)
                .and_then(|_| out.flush())
                .map_err(|e| Error::io_msg(format!("Failed to write stdout: {}", e)))?;
        }
        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(format!("Failed to read stdin: {}", e)))?;
        if n == 0 {
            return Err(Error::io_msg("stdin closed before a line was read"));
        }
        Ok(line)
    }
}
