//! API 生レコード → 表示用レコードの正規化
//!
//! 失敗しない（全域関数）。欠けたフィールドは None / 空文字になる。

use crate::domain::catalog::card_image_url;
use crate::domain::{CardRecord, Category, CreatureRecord, NormalizedRecord};
use serde_json::Value;

/// 出力フィールドごとの、読む順番つき候補フィールド名（新しい API 名 → 旧名）
const CARD_ID_FIELDS: &[&str] = &["id"];
const CARD_LEGACY_NUMBER_FIELDS: &[&str] = &["cardnumber"];
const CARD_MAIN_EFFECT_FIELDS: &[&str] = &["main_effect", "maineffect"];
const CARD_SOURCE_EFFECT_FIELDS: &[&str] = &["source_effect", "soureeffect"];

/// 文字列はそのまま、数値は文字列化。null・空文字・その他の型は無いものとする。
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 候補を順に見て最初に値があるもの
fn first_field(raw: &Value, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find_map(|name| raw.get(*name).and_then(scalar_text))
}

fn text_field(raw: &Value, name: &str) -> Option<String> {
    first_field(raw, &[name])
}

pub fn normalize_creature(raw: &Value) -> CreatureRecord {
    CreatureRecord {
        name: text_field(raw, "name").unwrap_or_default(),
        image_url: text_field(raw, "img").unwrap_or_default(),
        level: text_field(raw, "level").unwrap_or_default(),
    }
}

pub fn normalize_card(raw: &Value) -> CardRecord {
    let id = first_field(raw, CARD_ID_FIELDS);
    let legacy_card_number = match id {
        Some(_) => None,
        None => first_field(raw, CARD_LEGACY_NUMBER_FIELDS),
    };
    CardRecord {
        name: text_field(raw, "name").unwrap_or_default(),
        image_url: id.as_deref().map(card_image_url),
        id,
        legacy_card_number,
        stage: text_field(raw, "stage"),
        color: text_field(raw, "color"),
        main_effect: first_field(raw, CARD_MAIN_EFFECT_FIELDS),
        source_effect: first_field(raw, CARD_SOURCE_EFFECT_FIELDS),
    }
}

/// カテゴリに応じた形へ正規化する
pub fn normalize(raw: &Value, category: Category) -> NormalizedRecord {
    match category {
        Category::Creature => NormalizedRecord::Creature(normalize_creature(raw)),
        Category::Card => NormalizedRecord::Card(normalize_card(raw)),
    }
}
