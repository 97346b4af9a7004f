//! 対話モードの入力 Outbound ポート

use common::error::Error;

/// 1 行ずつ入力を読む。入力終端なら None。
pub trait InputSource {
    /// `prompt` は端末への表示用（実装によっては無視する）
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error>;
}
