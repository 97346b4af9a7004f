//! カテゴリごとのフィルタ

use super::catalog::DEFAULT_CARD_TYPE;
use super::category::Category;
use serde::Serialize;

/// クリーチャー検索のフィルタ（レベル指定は任意）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatureFilter {
    level: Option<String>,
}

impl CreatureFilter {
    /// 空白だけのレベルは未指定として扱う
    pub fn new(level: Option<String>) -> Self {
        let level = level
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty());
        Self { level }
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }
}

/// カード検索のフィルタ（カードタイプは常に 1 つ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardFilter {
    card_type: String,
}

impl CardFilter {
    /// 空白だけのタイプは既定値に戻す
    pub fn new(card_type: impl Into<String>) -> Self {
        let card_type = card_type.into().trim().to_string();
        if card_type.is_empty() {
            Self::default()
        } else {
            Self { card_type }
        }
    }

    pub fn card_type(&self) -> &str {
        &self.card_type
    }
}

impl Default for CardFilter {
    fn default() -> Self {
        Self {
            card_type: DEFAULT_CARD_TYPE.to_string(),
        }
    }
}

/// 検索コンテキストに載るフィルタ。バリアントがカテゴリを決める。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum CategoryFilter {
    Creature(CreatureFilter),
    Card(CardFilter),
}

impl CategoryFilter {
    pub fn category(&self) -> Category {
        match self {
            Self::Creature(_) => Category::Creature,
            Self::Card(_) => Category::Card,
        }
    }
}

impl From<CreatureFilter> for CategoryFilter {
    fn from(f: CreatureFilter) -> Self {
        Self::Creature(f)
    }
}

impl From<CardFilter> for CategoryFilter {
    fn from(f: CardFilter) -> Self {
        Self::Card(f)
    }
}

/// AppState が持つ、カテゴリごとに 1 つずつ生きているフィルタ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub creature: CreatureFilter,
    pub card: CardFilter,
}

impl Filters {
    /// 指定カテゴリの現在のフィルタ
    pub fn for_category(&self, category: Category) -> CategoryFilter {
        match category {
            Category::Creature => CategoryFilter::Creature(self.creature.clone()),
            Category::Card => CategoryFilter::Card(self.card.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_level_is_none() {
        assert_eq!(CreatureFilter::new(Some("  ".to_string())).level(), None);
        assert_eq!(CreatureFilter::new(Some(" Rookie ".to_string())).level(), Some("Rookie"));
    }

    #[test]
    fn test_card_filter_default_and_blank() {
        assert_eq!(CardFilter::default().card_type(), "Digimon");
        assert_eq!(CardFilter::new("").card_type(), "Digimon");
        assert_eq!(CardFilter::new("Tamer").card_type(), "Tamer");
    }

    #[test]
    fn test_filters_for_category() {
        let filters = Filters {
            creature: CreatureFilter::new(Some("Mega".to_string())),
            card: CardFilter::new("Option"),
        };
        assert_eq!(filters.for_category(Category::Creature).category(), Category::Creature);
        assert_eq!(
            filters.for_category(Category::Card),
            CategoryFilter::Card(CardFilter::new("Option"))
        );
    }
}
