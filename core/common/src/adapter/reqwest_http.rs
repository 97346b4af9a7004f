//! blocking reqwest による HttpGet 実装

use crate::error::Error;
use crate::ports::outbound::{HttpGet, HttpRequest};
use reqwest::Url;
use serde_json::Value;

/// blocking reqwest で JSON を GET する HttpGet 実装
///
/// タイムアウト・リトライは追加しない（reqwest の既定値に従う）。
pub struct ReqwestHttp {
    client: reqwest::blocking::Client,
}

impl ReqwestHttp {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for ReqwestHttp {
    fn default() -> Self {
        Self::new()
    }
}

/// ベース URL にパスセグメントとクエリを足した URL を作る
///
/// セグメントはパス用に、クエリは form-urlencoded（空白は `+`）でエンコードされる。
pub fn build_url(request: &HttpRequest) -> Result<Url, Error> {
    let mut url = Url::parse(&request.base_url)
        .map_err(|e| Error::invalid_argument(format!("Invalid base URL '{}': {}", request.base_url, e)))?;
    if !request.path_segments.is_empty() {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| Error::invalid_argument(format!("Base URL cannot take a path: {}", request.base_url)))?;
        segments.pop_if_empty();
        for s in &request.path_segments {
            segments.push(s);
        }
    }
    if !request.query.is_empty() {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in &request.query {
            pairs.append_pair(k, v);
        }
    }
    Ok(url)
}

/// エラーレスポンスの本文から人間向けメッセージを取り出す
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(v) = serde_json::from_str::<Value>(body) {
        for key in ["ErrorMsg", "error", "message"] {
            if let Some(s) = v.get(key).and_then(Value::as_str) {
                return format!("HTTP {}: {}", status, s);
            }
        }
    }
    if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body.trim())
    }
}

impl HttpGet for ReqwestHttp {
    fn url_for(&self, request: &HttpRequest) -> Result<String, Error> {
        build_url(request).map(|u| u.to_string())
    }

    fn get_json(&self, request: &HttpRequest) -> Result<Value, Error> {
        let url = build_url(request)?;
        let response = self
            .client
            .get(url.clone())
            .header("Accept", "application/json")
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::http(error_message(status, &body)));
        }

        serde_json::from_str(&body)
            .map_err(|e| Error::json(format!("Invalid JSON from {}: {}", url, e)))
    }
}
