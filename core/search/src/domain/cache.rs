//! カテゴリごとに 1 スロットだけ持つ結果キャッシュ

use super::category::{Category, PerCategory};
use super::context::{CacheKey, SearchContext};
use super::record::NormalizedRecord;

/// キャッシュの 1 スロット（キー + 結果列）
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSlot {
    key: CacheKey,
    results: Vec<NormalizedRecord>,
}

impl CacheSlot {
    pub fn results(&self) -> &[NormalizedRecord] {
        &self.results
    }
}

/// 結果キャッシュ。スロット数はカテゴリ数で固定（追い出し方針は不要）。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultCache {
    slots: PerCategory<Option<CacheSlot>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// スロットのキーがコンテキストのキーと一致するときだけ結果を返す
    pub fn get(&self, ctx: &SearchContext) -> Option<&[NormalizedRecord]> {
        let slot = self.slots.get(ctx.category()).as_ref()?;
        if slot.key == ctx.derive_key() {
            Some(&slot.results)
        } else {
            None
        }
    }

    /// カテゴリのスロットを無条件に上書きする
    pub fn put(&mut self, ctx: &SearchContext, results: Vec<NormalizedRecord>) {
        *self.slots.get_mut(ctx.category()) = Some(CacheSlot {
            key: ctx.derive_key(),
            results,
        });
    }

    /// 指定カテゴリ（None なら全カテゴリ）のスロットを消す
    pub fn invalidate(&mut self, category: Option<Category>) {
        match category {
            Some(c) => *self.slots.get_mut(c) = None,
            None => {
                for c in Category::ALL {
                    *self.slots.get_mut(c) = None;
                }
            }
        }
    }

    pub fn slot(&self, category: Category) -> Option<&CacheSlot> {
        self.slots.get(category).as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::{CardFilter, CreatureFilter};
    use crate::domain::record::{CardRecord, CreatureRecord};

    fn creature_ctx(term: &str, level: Option<&str>) -> SearchContext {
        SearchContext::new(term, CreatureFilter::new(level.map(str::to_string)))
    }

    fn creature(name: &str) -> NormalizedRecord {
        NormalizedRecord::Creature(CreatureRecord {
            name: name.to_string(),
            image_url: format!("https://img.example/{}.jpg", name),
            level: "Rookie".to_string(),
        })
    }

    #[test]
    fn test_get_after_put_returns_same_results() {
        let mut cache = ResultCache::new();
        let ctx = creature_ctx("Agumon", None);
        let results = vec![creature("Agumon"), creature("Agumon X")];
        cache.put(&ctx, results.clone());
        assert_eq!(cache.get(&ctx), Some(results.as_slice()));
    }

    #[test]
    fn test_changed_term_or_filter_misses() {
        let mut cache = ResultCache::new();
        cache.put(&creature_ctx("Agumon", None), vec![creature("Agumon")]);
        assert!(cache.get(&creature_ctx("Gabumon", None)).is_none());
        assert!(cache.get(&creature_ctx("Agumon", Some("Rookie"))).is_none());
        assert!(cache.get(&creature_ctx("Agumon", None)).is_some());
    }

    #[test]
    fn test_one_slot_per_category() {
        let mut cache = ResultCache::new();
        let first = creature_ctx("Agumon", None);
        let second = creature_ctx("Gabumon", None);
        cache.put(&first, vec![creature("Agumon")]);
        cache.put(&second, vec![creature("Gabumon")]);
        assert!(cache.get(&first).is_none());
        assert!(cache.get(&second).is_some());

        let card_ctx = SearchContext::new("Gabumon", CardFilter::default());
        cache.put(
            &card_ctx,
            vec![NormalizedRecord::Card(CardRecord {
                name: "Gabumon".to_string(),
                ..Default::default()
            })],
        );
        assert!(cache.get(&second).is_some(), "card slot must not evict creature slot");
        assert!(cache.get(&card_ctx).is_some());
    }

    #[test]
    fn test_invalidate_one_or_all() {
        let mut cache = ResultCache::new();
        let c = creature_ctx("Agumon", None);
        let d = SearchContext::new("Agumon", CardFilter::default());
        cache.put(&c, vec![creature("Agumon")]);
        cache.put(&d, vec![]);

        cache.invalidate(Some(Category::Card));
        assert!(cache.get(&d).is_none());
        assert!(cache.get(&c).is_some());

        cache.put(&d, vec![]);
        cache.invalidate(None);
        assert!(cache.slot(Category::Creature).is_none());
        assert!(cache.slot(Category::Card).is_none());
    }
}
