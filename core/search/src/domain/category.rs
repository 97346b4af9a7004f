//! 検索カテゴリ（閉じた列挙）と、カテゴリごとの値の入れ物

use serde::Serialize;

/// 検索対象のカテゴリ。3 つ目を足すと全 match がコンパイルエラーになる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Creature,
    Card,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Creature, Category::Card];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creature => "creature",
            Self::Card => "card",
        }
    }

    /// CLI / 対話コマンドの表記から解決する（大文字小文字は無視）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "creature" | "creatures" | "digimon" => Some(Self::Creature),
            "card" | "cards" => Some(Self::Card),
            _ => None,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Creature
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// カテゴリごとに 1 つずつ値を持つ。アクセスは必ず Category 経由。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerCategory<T> {
    creature: T,
    card: T,
}

impl<T> PerCategory<T> {
    pub fn get(&self, category: Category) -> &T {
        match category {
            Category::Creature => &self.creature,
            Category::Card => &self.card,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut T {
        match category {
            Category::Creature => &mut self.creature,
            Category::Card => &mut self.card,
        }
    }
}
