//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。終了コードは sysexits.h に合わせる。

/// 共通エラー型
///
/// 各バリアントが終了コードを持ち、main はそれをそのまま exit code に使う。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（EX_USAGE）
    #[error("{0}")]
    InvalidArgument(String),
    /// 入力データ不正（EX_DATAERR）
    #[error("{0}")]
    Json(String),
    /// ファイル I/O（EX_IOERR）
    #[error("{0}")]
    Io(String),
    /// HTTP 通信・ステータス異常（EX_IOERR）
    #[error("{0}")]
    Http(String),
    /// 環境変数・設定の解決失敗
    #[error("{0}")]
    Env(String),
    /// その他の内部エラー（EX_SOFTWARE）
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) | Self::Env(_) => 64,
            Self::Json(_) => 65,
            Self::System(_) => 70,
            Self::Io(_) | Self::Http(_) => 74,
        }
    }

    /// 使い方の誤りか（main で usage を併せて表示する）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_helpers() {
        let err = Error::invalid_argument("test");
        assert_eq!(err.to_string(), "test");
        assert_eq!(err.exit_code(), 64);
        assert!(err.is_usage());

        let err = Error::system("test");
        assert_eq!(err.exit_code(), 70);
        assert!(!err.is_usage());

        assert_eq!(Error::http("down").exit_code(), 74);
        assert_eq!(Error::json("bad").exit_code(), 65);
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.exit_code(), 74);
    }
}
