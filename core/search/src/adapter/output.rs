//! 表示の出力先（stdout またはファイル）
//!
//! ファイル出力は描画のたびに作り直す（最新の結果だけが残る）。
//! 親ディレクトリが無い場合は ContainerMissing。

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use common::ports::outbound::FileSystem;

use crate::ports::outbound::RenderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// 出力先を開く
pub struct Output {
    target: OutputTarget,
    fs: Arc<dyn FileSystem>,
}

impl Output {
    pub fn new(target: OutputTarget, fs: Arc<dyn FileSystem>) -> Self {
        Self { target, fs }
    }

    /// 全体を 1 回で書き出す
    pub fn write_all(&self, text: &str) -> Result<(), RenderError> {
        match &self.target {
            OutputTarget::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(text.as_bytes())?;
                out.flush()?;
                Ok(())
            }
            OutputTarget::File(path) => {
                let parent = path
                    .parent()
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(|p| p.to_path_buf())
                    .unwrap_or_else(|| PathBuf::from("."));
                if !self.fs.is_dir(&parent) {
                    return Err(RenderError::ContainerMissing(path.clone()));
                }
                let mut w = self
                    .fs
                    .create(path)
                    .map_err(|e| RenderError::Io(e.to_string()))?;
                w.write_all(text.as_bytes())?;
                w.flush()?;
                Ok(())
            }
        }
    }
}
