//! 対話モードの標準入力実装
//!
//! usecase は InputSource trait 経由でのみ利用する。

use std::io::{self, BufRead, Write};

use common::error::Error;

use crate::ports::outbound::InputSource;

/// 標準入力から 1 行ずつ読む。端末でなければプロンプトは出さない。
pub struct StdinInput {
    show_prompt: bool,
}

impl StdinInput {
    pub fn new(show_prompt: bool) -> Self {
        Self { show_prompt }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        use std::io::IsTerminal;
        Self::new(io::stdin().is_terminal())
    }
}

impl InputSource for StdinInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        if self.show_prompt {
            eprint!("{}", prompt);
            let _ = io::stderr().flush();
        }
        let mut line = String::new();
        let n = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| Error::io_msg(e.to_string()))?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
