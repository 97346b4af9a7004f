//! 検索パイプラインのエラー

use common::error::Error;

/// 検索コアのエラー。どれもプロセスを落とさず Idle に戻る。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// 空（空白のみ）の検索語。通信はしない。
    #[error("Please enter a search term.")]
    EmptyQuery,
    /// 非 2xx・通信失敗。キャッシュは変更しない。
    #[error("Search service unavailable: {0}")]
    RemoteUnavailable(String),
}

impl From<SearchError> for Error {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::EmptyQuery => Error::invalid_argument(e.to_string()),
            SearchError::RemoteUnavailable(_) => Error::http(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let e: Error = SearchError::EmptyQuery.into();
        assert_eq!(e.exit_code(), 64);
        let e: Error = SearchError::RemoteUnavailable("HTTP 500".to_string()).into();
        assert_eq!(e.exit_code(), 74);
        assert!(e.to_string().contains("HTTP 500"));
    }
}
