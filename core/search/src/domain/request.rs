//! ルーティング結果（どのリモート操作を、どの引数で呼ぶか）

use serde::Serialize;

/// 呼び出すリモート操作
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RemoteRequest {
    /// クリーチャーを名前で引く
    CreatureByName { name: String },
    /// クリーチャーをレベルで引く（語は使わない）
    CreatureByLevel { level: String },
    /// カード検索（シリーズ指定は常に付く）
    CardSearch {
        name: String,
        card_type: String,
        series: String,
    },
    /// 通信せずに 0 件
    Empty,
}

impl RemoteRequest {
    /// ログ用の短い名前
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::CreatureByName { .. } => "creature_by_name",
            Self::CreatureByLevel { .. } => "creature_by_level",
            Self::CardSearch { .. } => "card_search",
            Self::Empty => "empty",
        }
    }
}
