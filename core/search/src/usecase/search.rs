//! 検索ユースケース（検証 → キャッシュ → ルーティング → 取得 → 正規化 → 保存）
//!
//! 状態遷移: Idle → Validating → (CacheHit | Fetching) → (Success | Failed) → Idle
//!
//! Fetching は `begin` で入り `complete` で抜ける。間に別の `begin` を挟めるので、
//! 完了順が発行順と逆になっても古い結果はカテゴリごとの検索番号で捨てる。

use std::sync::Arc;

use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{AppState, Category, NormalizedRecord, RemoteRequest, SearchContext, SearchError};
use crate::ports::outbound::SearchBackend;
use crate::usecase::{normalizer, router};

/// 結果の出どころ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultSource {
    Cache,
    Remote,
}

/// 成功した検索の結果
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub category: Category,
    pub records: Vec<NormalizedRecord>,
    pub source: ResultSource,
}

/// 取得中の 1 件。Clone できないので complete は 1 回だけ。
#[derive(Debug)]
pub struct FetchTicket {
    context: SearchContext,
    request: RemoteRequest,
    seq: u64,
}

/// `begin` の結果
#[derive(Debug)]
pub enum SearchPlan {
    /// キャッシュヒット。検索番号は進めるが busy とキャッシュには触れない。
    Cached(SearchResult),
    /// 取得が必要（busy は立っている）
    Fetch(FetchTicket),
}

/// 検索のユースケース
pub struct SearchUseCase {
    backend: Arc<dyn SearchBackend>,
    log: Arc<dyn Log>,
}

impl SearchUseCase {
    pub fn new(backend: Arc<dyn SearchBackend>, log: Arc<dyn Log>) -> Self {
        Self { backend, log }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.log.log(&record);
    }

    /// Validating と CacheHit / Fetching への遷移
    pub fn begin(&self, state: &mut AppState) -> Result<SearchPlan, SearchError> {
        let ctx = state.context();
        let category = ctx.category();
        if ctx.is_blank() {
            self.log(
                LogRecord::new(LogLevel::Info, "usecase", "validate", "empty query rejected")
                    .field("category", category.as_str()),
            );
            return Err(SearchError::EmptyQuery);
        }

        let seq = state.issue_seq(category);
        if let Some(hit) = state.cache().get(&ctx) {
            self.log(
                LogRecord::new(LogLevel::Debug, "usecase", "cache", "cache hit")
                    .field("category", category.as_str())
                    .field("term", ctx.term())
                    .field("count", hit.len()),
            );
            return Ok(SearchPlan::Cached(SearchResult {
                category,
                records: hit.to_vec(),
                source: ResultSource::Cache,
            }));
        }

        let request = router::resolve(&ctx);
        self.log(
            LogRecord::new(LogLevel::Debug, "usecase", "cache", "cache miss")
                .field("category", category.as_str())
                .field("term", ctx.term())
                .field("op", request.op_name())
                .field("seq", seq),
        );
        state.enter_fetch();
        Ok(SearchPlan::Fetch(FetchTicket {
            context: ctx,
            request,
            seq,
        }))
    }

    /// リモート呼び出しと正規化。状態には触れない。
    pub fn fetch(&self, ticket: &FetchTicket) -> Result<Vec<NormalizedRecord>, SearchError> {
        let category = ticket.context.category();
        if ticket.request == RemoteRequest::Empty {
            return Ok(Vec::new());
        }
        let raw = self.backend.fetch(&ticket.request).map_err(|e| {
            self.log(
                LogRecord::new(LogLevel::Warn, "usecase", "fetch", "remote call failed")
                    .field("category", category.as_str())
                    .field("op", ticket.request.op_name())
                    .field("error", e.to_string()),
            );
            SearchError::RemoteUnavailable(e.to_string())
        })?;
        let records: Vec<NormalizedRecord> = raw
            .iter()
            .map(|item| normalizer::normalize(item, category))
            .collect();
        self.log(
            LogRecord::new(LogLevel::Info, "usecase", "fetch", "remote call finished")
                .field("category", category.as_str())
                .field("op", ticket.request.op_name())
                .field("count", records.len())
                .field("seq", ticket.seq),
        );
        Ok(records)
    }

    /// Fetching を抜ける。busy は結果に関係なく下ろす。
    ///
    /// 同じカテゴリでより新しい検索が発行済みなら、成功でも失敗でも捨てて None を返す。
    pub fn complete(
        &self,
        state: &mut AppState,
        ticket: FetchTicket,
        outcome: Result<Vec<NormalizedRecord>, SearchError>,
    ) -> Result<Option<SearchResult>, SearchError> {
        let category = ticket.context.category();
        if !state.is_latest(category, ticket.seq) {
            state.exit_fetch();
            self.log(
                LogRecord::new(LogLevel::Info, "usecase", "fetch", "stale completion discarded")
                    .field("category", category.as_str())
                    .field("seq", ticket.seq),
            );
            return Ok(None);
        }
        self.finish(state, ticket, outcome).map(Some)
    }

    /// 1 回分の検索を通しで実行する
    pub fn run(&self, state: &mut AppState) -> Result<SearchResult, SearchError> {
        match self.begin(state)? {
            SearchPlan::Cached(result) => Ok(result),
            SearchPlan::Fetch(ticket) => {
                let outcome = self.fetch(&ticket);
                self.finish(state, ticket, outcome)
            }
        }
    }

    /// Success ならキャッシュに書いてから返す。Failed はキャッシュを変えない。
    fn finish(
        &self,
        state: &mut AppState,
        ticket: FetchTicket,
        outcome: Result<Vec<NormalizedRecord>, SearchError>,
    ) -> Result<SearchResult, SearchError> {
        state.exit_fetch();
        let records = outcome?;
        state.cache_mut().put(&ticket.context, records.clone());
        Ok(SearchResult {
            category: ticket.context.category(),
            records,
            source: ResultSource::Remote,
        })
    }
}
