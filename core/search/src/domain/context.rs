//! 検索コンテキスト（カテゴリ + 語 + フィルタ）とキャッシュキー

use super::category::Category;
use super::filter::CategoryFilter;
use serde_json::json;

/// 1 回の検索を決める組。カテゴリはフィルタのバリアントから決まる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchContext {
    term: String,
    filter: CategoryFilter,
}

impl SearchContext {
    /// 語は前後の空白を落として保持する
    pub fn new(term: impl AsRef<str>, filter: impl Into<CategoryFilter>) -> Self {
        Self {
            term: term.as_ref().trim().to_string(),
            filter: filter.into(),
        }
    }

    pub fn category(&self) -> Category {
        self.filter.category()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// 語が空（空白のみを含む）か
    pub fn is_blank(&self) -> bool {
        self.term.is_empty()
    }

    /// キャッシュの同一性キー
    pub fn derive_key(&self) -> CacheKey {
        CacheKey::derive(self)
    }
}

/// SearchContext から決定的に作る文字列キー
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// `{"category":..,"filter":{..},"term":..}` の JSON 文字列。
    /// オブジェクトのキー順は serde_json の Map が固定するので、等しい組は必ず等しいキーになる。
    pub fn derive(ctx: &SearchContext) -> Self {
        let filter = match ctx.filter() {
            CategoryFilter::Creature(f) => json!({ "level": f.level() }),
            CategoryFilter::Card(f) => json!({ "card_type": f.card_type() }),
        };
        let key = json!({
            "category": ctx.category().as_str(),
            "filter": filter,
            "term": ctx.term(),
        });
        Self(key.to_string())
    }

}

impl std::fmt::Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
