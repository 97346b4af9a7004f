//! HTTP Outbound ポート
//!
//! 外部の読み取り専用 JSON API を GET で叩く能力。2xx 以外は失敗として返す。

use crate::error::Error;
use serde_json::Value;

/// GET リクエストの組み立て結果（ベース URL + パスセグメント + クエリ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub base_url: String,
    /// ベース URL の末尾に 1 つずつ追加するパスセグメント（エンコードは実装側）
    pub path_segments: Vec<String>,
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path_segments: Vec::new(),
            query: Vec::new(),
        }
    }

    pub fn segment(mut self, s: impl Into<String>) -> Self {
        self.path_segments.push(s.into());
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// JSON を GET する Outbound ポート
///
/// 実装は `common::adapter::ReqwestHttp`（blocking reqwest）やテスト用スタブなど。
pub trait HttpGet: Send + Sync {
    /// リクエスト先の完全な URL を組み立てる（ログ・表示用にも使う）
    fn url_for(&self, request: &HttpRequest) -> Result<String, Error>;

    /// GET して JSON ボディを返す。非 2xx・通信失敗・JSON 不正は Err。
    fn get_json(&self, request: &HttpRequest) -> Result<Value, Error>;
}
