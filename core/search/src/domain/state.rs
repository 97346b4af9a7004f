//! アプリケーション状態（アクティブカテゴリ・検索語・フィルタ・キャッシュ・busy）
//!
//! フィールドは非公開。UI 由来の変更は `apply(UiEvent)`、検索中の変更は
//! SearchUseCase が使う crate 内の操作だけで行う。

use super::cache::ResultCache;
use super::category::{Category, PerCategory};
use super::context::SearchContext;
use super::filter::{CardFilter, CreatureFilter, Filters};
use serde::Serialize;

/// UI イベント（タブ切替・入力・フィルタ選択・キャッシュ破棄）
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    SelectCategory(Category),
    SetTerm(String),
    SetCreatureLevel(Option<String>),
    SetCardType(String),
    InvalidateCache(Option<Category>),
}

/// プロセス内で 1 つだけ作る検索状態
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    active_category: Category,
    search_term: String,
    filters: Filters,
    cache: ResultCache,
    busy: bool,
    /// カテゴリごとの最後に発行した検索番号
    latest_seq: PerCategory<u64>,
    /// 完了していないフェッチの数
    in_flight: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Filters::default())
    }
}

impl AppState {
    /// 既定値（Creature・空の語・空キャッシュ・busy なし）で作る。フィルタの初期値だけ指定できる。
    pub fn new(filters: Filters) -> Self {
        Self {
            active_category: Category::default(),
            search_term: String::new(),
            filters,
            cache: ResultCache::new(),
            busy: false,
            latest_seq: PerCategory::default(),
            in_flight: 0,
        }
    }

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// 現在のアクティブカテゴリで検索するときのコンテキスト
    pub fn context(&self) -> SearchContext {
        SearchContext::new(
            &self.search_term,
            self.filters.for_category(self.active_category),
        )
    }

    /// イベントを適用した次の状態を返す。
    ///
    /// カテゴリを切り替えても他カテゴリのフィルタは保持する。フィルタが実際に
    /// 変わったときはそのカテゴリのスロットを破棄する。
    pub fn apply(mut self, event: UiEvent) -> Self {
        match event {
            UiEvent::SelectCategory(c) => self.active_category = c,
            UiEvent::SetTerm(term) => self.search_term = term,
            UiEvent::SetCreatureLevel(level) => {
                let next = CreatureFilter::new(level);
                if next != self.filters.creature {
                    self.filters.creature = next;
                    self.cache.invalidate(Some(Category::Creature));
                }
            }
            UiEvent::SetCardType(card_type) => {
                let next = CardFilter::new(card_type);
                if next != self.filters.card {
                    self.filters.card = next;
                    self.cache.invalidate(Some(Category::Card));
                }
            }
            UiEvent::InvalidateCache(category) => self.cache.invalidate(category),
        }
        self
    }

    /// 表示用のスナップショット
    pub fn summary(&self) -> StateSummary {
        StateSummary {
            active_category: self.active_category,
            search_term: self.search_term.clone(),
            level: self.filters.creature.level().map(str::to_string),
            card_type: self.filters.card.card_type().to_string(),
            cached: Category::ALL
                .into_iter()
                .filter_map(|c| {
                    self.cache.slot(c).map(|s| CachedSummary {
                        category: c,
                        count: s.results().len(),
                    })
                })
                .collect(),
            busy: self.busy,
        }
    }

    pub(crate) fn cache_mut(&mut self) -> &mut ResultCache {
        &mut self.cache
    }

    /// カテゴリの次の検索番号を発行する（以前の番号はすべて古くなる）
    pub(crate) fn issue_seq(&mut self, category: Category) -> u64 {
        let seq = self.latest_seq.get_mut(category);
        *seq += 1;
        *seq
    }

    pub(crate) fn is_latest(&self, category: Category, seq: u64) -> bool {
        *self.latest_seq.get(category) == seq
    }

    /// Fetching に入る
    pub(crate) fn enter_fetch(&mut self) {
        self.in_flight += 1;
        self.busy = true;
    }

    /// Fetching を抜ける。未完了のフェッチが残っていなければ busy を下ろす。
    pub(crate) fn exit_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.busy = self.in_flight > 0;
    }
}

/// `:state` / `--json` 用の状態要約
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSummary {
    pub active_category: Category,
    pub search_term: String,
    pub level: Option<String>,
    pub card_type: String,
    pub cached: Vec<CachedSummary>,
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CachedSummary {
    pub category: Category,
    pub count: usize,
}
