//! 表示用に正規化したレコード

use super::catalog::DARK_BACKGROUND_COLORS;
use serde::Serialize;

/// カード番号が無いときに表示する値
pub const MISSING_CARD_NUMBER: &str = "N/A";

/// クリーチャー 1 件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatureRecord {
    pub name: String,
    pub image_url: String,
    pub level: String,
}

/// カード 1 件。`id` と `legacy_card_number` は API の版違いで同じ概念。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardRecord {
    pub name: String,
    pub id: Option<String>,
    pub legacy_card_number: Option<String>,
    /// `id` から組み立てる（API 応答には含まれない）
    pub image_url: Option<String>,
    pub stage: Option<String>,
    pub color: Option<String>,
    pub main_effect: Option<String>,
    pub source_effect: Option<String>,
}

impl CardRecord {
    /// 表示用のカード番号: id → legacy_card_number → "N/A"
    pub fn display_number(&self) -> &str {
        self.id
            .as_deref()
            .or(self.legacy_card_number.as_deref())
            .unwrap_or(MISSING_CARD_NUMBER)
    }

    pub fn foreground(&self) -> Foreground {
        Foreground::for_color(self.color.as_deref())
    }
}

/// カード色に対する文字色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Foreground {
    /// 暗い背景なので明るい文字
    Light,
    Default,
}

impl Foreground {
    /// 完全一致（大文字小文字も区別）で暗色セットを引く
    pub fn for_color(color: Option<&str>) -> Self {
        match color {
            Some(c) if DARK_BACKGROUND_COLORS.contains(&c) => Self::Light,
            _ => Self::Default,
        }
    }
}

/// 正規化済みレコード（カテゴリごとの形）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NormalizedRecord {
    Creature(CreatureRecord),
    Card(CardRecord),
}
