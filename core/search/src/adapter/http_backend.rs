//! HTTP で 2 つの検索 API を叩く SearchBackend 実装
//!
//! - クリーチャー: `GET {base}/name/{name}` / `GET {base}/level/{level}`
//! - カード: `GET {base}?n={name}&series={series}&type={type}`

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{HttpGet, HttpRequest, Log, LogLevel, LogRecord};
use serde_json::Value;

use crate::domain::RemoteRequest;
use crate::ports::outbound::SearchBackend;

/// HttpGet の上に乗る SearchBackend
pub struct HttpSearchBackend {
    http: Arc<dyn HttpGet>,
    creature_base_url: String,
    card_base_url: String,
    log: Arc<dyn Log>,
}

impl HttpSearchBackend {
    pub fn new(
        http: Arc<dyn HttpGet>,
        creature_base_url: impl Into<String>,
        card_base_url: impl Into<String>,
        log: Arc<dyn Log>,
    ) -> Self {
        Self {
            http,
            creature_base_url: creature_base_url.into(),
            card_base_url: card_base_url.into(),
            log,
        }
    }

    /// RemoteRequest を HTTP リクエストに写す（Empty は None）
    pub fn http_request(&self, request: &RemoteRequest) -> Option<HttpRequest> {
        match request {
            RemoteRequest::CreatureByName { name } => Some(
                HttpRequest::get(&self.creature_base_url)
                    .segment("name")
                    .segment(name),
            ),
            RemoteRequest::CreatureByLevel { level } => Some(
                HttpRequest::get(&self.creature_base_url)
                    .segment("level")
                    .segment(level),
            ),
            RemoteRequest::CardSearch {
                name,
                card_type,
                series,
            } => Some(
                HttpRequest::get(&self.card_base_url)
                    .param("n", name)
                    .param("series", series)
                    .param("type", card_type),
            ),
            RemoteRequest::Empty => None,
        }
    }

    /// 配列ならその要素、それ以外の 2xx 応答は 0 件として扱う
    fn into_items(&self, body: Value, url: &str) -> Vec<Value> {
        match body {
            Value::Array(items) => items,
            other => {
                let _ = self.log.log(
                    &LogRecord::new(LogLevel::Warn, "adapter", "fetch", "non-array response treated as empty")
                        .field("url", url)
                        .field("body_type", json_type_name(&other)),
                );
                Vec::new()
            }
        }
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl SearchBackend for HttpSearchBackend {
    fn fetch(&self, request: &RemoteRequest) -> Result<Vec<Value>, Error> {
        let Some(http_request) = self.http_request(request) else {
            return Ok(Vec::new());
        };
        let url = self.http.url_for(&http_request)?;
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Debug, "adapter", "fetch", "GET")
                .field("op", request.op_name())
                .field("url", url.as_str()),
        );
        let body = self.http.get_json(&http_request)?;
        Ok(self.into_items(body, &url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::adapter::NoopLog;
    use serde_json::json;
    use std::sync::Mutex;

    /// 受け取ったリクエストを記録し、固定の応答を返す HttpGet
    struct RecordingHttp {
        response: Result<Value, Error>,
        seen: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingHttp {
        fn new(response: Result<Value, Error>) -> Self {
            Self {
                response,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl HttpGet for RecordingHttp {
        fn url_for(&self, request: &HttpRequest) -> Result<String, Error> {
            common::adapter::reqwest_http::build_url(request).map(|u| u.to_string())
        }

        fn get_json(&self, request: &HttpRequest) -> Result<Value, Error> {
            self.seen.lock().unwrap().push(request.clone());
            self.response.clone()
        }
    }

    fn backend(http: Arc<RecordingHttp>) -> HttpSearchBackend {
        HttpSearchBackend::new(
            http,
            "https://digimon-api.vercel.app/api/digimon",
            "https://digimoncard.io/api-public/search.php",
            Arc::new(NoopLog),
        )
    }

    #[test]
    fn test_creature_by_level_url() {
        let http = Arc::new(RecordingHttp::new(Ok(json!([]))));
        let b = backend(http.clone());
        b.fetch(&RemoteRequest::CreatureByLevel {
            level: "Rookie".to_string(),
        })
        .unwrap();
        let seen = http.seen.lock().unwrap();
        assert_eq!(
            http.url_for(&seen[0]).unwrap(),
            "https://digimon-api.vercel.app/api/digimon/level/Rookie"
        );
    }

    #[test]
    fn test_card_search_url_has_series_and_type() {
        let http = Arc::new(RecordingHttp::new(Ok(json!([{ "name": "Omnimon" }]))));
        let b = backend(http.clone());
        let items = b
            .fetch(&RemoteRequest::CardSearch {
                name: "Omnimon".to_string(),
                card_type: "Digimon".to_string(),
                series: "Digimon Card Game".to_string(),
            })
            .unwrap();
        assert_eq!(items.len(), 1);
        let seen = http.seen.lock().unwrap();
        assert_eq!(
            http.url_for(&seen[0]).unwrap(),
            "https://digimoncard.io/api-public/search.php?n=Omnimon&series=Digimon+Card+Game&type=Digimon"
        );
    }

    #[test]
    fn test_non_array_body_is_empty() {
        let http = Arc::new(RecordingHttp::new(Ok(json!({ "error": "No cards found" }))));
        let items = backend(http)
            .fetch(&RemoteRequest::CreatureByName {
                name: "Nobody".to_string(),
            })
            .unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_http_error_propagates() {
        let http = Arc::new(RecordingHttp::new(Err(Error::http("HTTP 500 Internal Server Error"))));
        let err = backend(http)
            .fetch(&RemoteRequest::CreatureByName {
                name: "Agumon".to_string(),
            })
            .unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_empty_request_makes_no_call() {
        let http = Arc::new(RecordingHttp::new(Ok(json!([1]))));
        let items = backend(http.clone()).fetch(&RemoteRequest::Empty).unwrap();
        assert!(items.is_empty());
        assert!(http.seen.lock().unwrap().is_empty());
    }
}
