//! digisearch コマンドの enum（Command Pattern）
//!
//! 一覧表示・単発検索・対話セッションの分岐を enum で明示する。

use super::category::Category;
use super::filter::{CardFilter, CreatureFilter, Filters};
use super::state::{AppState, UiEvent};

/// 起動時の初期状態（カテゴリとフィルタ）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitialState {
    pub category: Option<Category>,
    pub level: Option<String>,
    pub card_type: Option<String>,
}

impl InitialState {
    /// 起動時の AppState を作る。カードタイプ未指定なら `default_card_type`。
    pub fn into_state(self, default_card_type: &str) -> AppState {
        let filters = Filters {
            creature: CreatureFilter::new(self.level),
            card: CardFilter::new(self.card_type.unwrap_or_else(|| default_card_type.to_string())),
        };
        AppState::new(filters).apply(UiEvent::SelectCategory(self.category.unwrap_or_default()))
    }
}

/// digisearch の実行モード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    /// ヘルプ表示
    Help,
    /// 既知のクリーチャーレベル一覧
    ListLevels,
    /// 既知のカードタイプ一覧
    ListCardTypes,
    /// 1 回だけ検索して表示する
    Search { initial: InitialState, term: String },
    /// 標準入力から 1 行ずつコマンド・検索語を読む
    Interactive { initial: InitialState },
}

/// 対話セッションの 1 行分の入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// 空行（何もしない）
    Nothing,
    Help,
    Quit,
    State,
    SelectCategory(Category),
    /// `:level` 単独で解除
    SetLevel(Option<String>),
    SetCardType(String),
    /// `:clear` 単独で全カテゴリ
    ClearCache(Option<Category>),
    /// コロン以外で始まる行は検索語
    Search(String),
    /// 解釈できないコマンド（メッセージ付き）
    Invalid(String),
}

impl SessionCommand {
    /// 1 行を解釈する。`:` で始まればコマンド、それ以外は検索語。
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Nothing;
        }
        let Some(rest) = line.strip_prefix(':') else {
            return Self::Search(line.to_string());
        };
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((n, a)) => (n, a.trim()),
            None => (rest, ""),
        };
        let arg = (!arg.is_empty()).then(|| arg.to_string());
        match (name.to_ascii_lowercase().as_str(), arg) {
            ("help" | "h" | "?", _) => Self::Help,
            ("quit" | "q" | "exit", _) => Self::Quit,
            ("state", _) => Self::State,
            ("level", level) => Self::SetLevel(level),
            ("type", Some(t)) => Self::SetCardType(t),
            ("type", None) => Self::Invalid(":type needs a card type (e.g. :type Tamer)".to_string()),
            ("clear", None) => Self::ClearCache(None),
            ("clear", Some(c)) => match Category::parse(&c) {
                Some(c) => Self::ClearCache(Some(c)),
                None => Self::Invalid(format!("Unknown category: {}", c)),
            },
            (other, None) => match Category::parse(other) {
                Some(c) => Self::SelectCategory(c),
                None => Self::Invalid(format!("Unknown command: :{}", other)),
            },
            (other, Some(_)) => Self::Invalid(format!("Unknown command: :{}", other)),
        }
    }
}
