//! ドメイン型（Newtype）
//!
//! PathBuf を直接運ばず、意味のある型に包んで境界を明確にする。

use std::path::{Path, PathBuf};

/// ホームディレクトリ（設定・ログの置き場所）のパス
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// 設定ファイル（config.json）のパス
    pub fn config_path(&self) -> PathBuf {
        self.0.join("config.json")
    }

    /// 構造化ログ（JSONL）のパス
    pub fn log_path(&self) -> PathBuf {
        self.0.join("logs").join("digisearch.jsonl")
    }
}

impl std::ops::Deref for HomeDir {
    type Target = PathBuf;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for HomeDir {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

impl From<PathBuf> for HomeDir {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}
