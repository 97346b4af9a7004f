//! 検索コンテキスト → リモート操作の選択

use crate::domain::catalog::CARD_SERIES;
use crate::domain::{CategoryFilter, RemoteRequest, SearchContext};

/// どの API をどの引数で呼ぶかを決める
///
/// クリーチャーはレベル指定があれば語を無視してレベルで引く。
pub fn resolve(ctx: &SearchContext) -> RemoteRequest {
    match ctx.filter() {
        CategoryFilter::Creature(filter) => {
            if let Some(level) = filter.level().filter(|l| !l.is_empty()) {
                RemoteRequest::CreatureByLevel {
                    level: level.to_string(),
                }
            } else if !ctx.term().is_empty() {
                RemoteRequest::CreatureByName {
                    name: ctx.term().to_string(),
                }
            } else {
                RemoteRequest::Empty
            }
        }
        CategoryFilter::Card(filter) => RemoteRequest::CardSearch {
            name: ctx.term().to_string(),
            card_type: filter.card_type().to_string(),
            series: CARD_SERIES.to_string(),
        },
    }
}
