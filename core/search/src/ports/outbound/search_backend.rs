//! 検索 API の Outbound ポート

use crate::domain::RemoteRequest;
use common::error::Error;
use serde_json::Value;

/// ルーティング済みのリクエストを外部 API に投げ、生レコードの列を返す
///
/// `RemoteRequest::Empty` は呼び出し側で処理済みなので渡されない。
/// 失敗時はリトライせずに Err を返す。
pub trait SearchBackend: Send + Sync {
    fn fetch(&self, request: &RemoteRequest) -> Result<Vec<Value>, Error>;
}
