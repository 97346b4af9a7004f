//! 表示の Outbound ポート
//!
//! コアは正規化済みレコード（またはエラー）とカテゴリを渡すだけで、
//! 出力の形は実装が決める。

use crate::domain::{Category, NormalizedRecord, SearchError, StateSummary};
use std::path::PathBuf;

/// 表示側のエラー。コアには伝播させず、ログに残すだけ。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// 出力先（の親ディレクトリ）が存在しない
    #[error("Output container missing: {}", .0.display())]
    ContainerMissing(PathBuf),
    #[error("Render failed: {0}")]
    Io(String),
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// 検索結果の表示先
///
/// 出力先（`-o`）に書くのは render と render_state だけ。render_error と
/// render_notice は出力先に関係なく端末（stdout / stderr）に出す。
pub trait ResultRenderer {
    fn render(&mut self, category: Category, records: &[NormalizedRecord]) -> Result<(), RenderError>;

    /// ユーザー向けの一時的なエラーメッセージ
    fn render_error(&mut self, error: &SearchError) -> Result<(), RenderError>;

    fn render_state(&mut self, summary: &StateSummary) -> Result<(), RenderError>;

    /// ヘルプ・案内など検索結果以外の短い文
    fn render_notice(&mut self, message: &str) -> Result<(), RenderError>;
}
