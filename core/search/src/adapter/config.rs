//! 設定の読み込み（adapter 層）
//!
//! `<home>/config.json` と環境変数から API のベース URL などを決める。
//! ファイルが無ければ既定値、壊れていれば警告を出して既定値。

use common::domain::HomeDir;
use common::ports::outbound::{EnvResolver, FileSystem};
use serde::Deserialize;

use crate::domain::catalog::DEFAULT_CARD_TYPE;

pub const DEFAULT_CREATURE_API: &str = "https://digimon-api.vercel.app/api/digimon";
pub const DEFAULT_CARD_API: &str = "https://digimoncard.io/api-public/search.php";

/// 解決済みの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub creature_base_url: String,
    pub card_base_url: String,
    pub default_card_type: String,
    /// JSONL ログをファイルに書くか
    pub log_file: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            creature_base_url: DEFAULT_CREATURE_API.to_string(),
            card_base_url: DEFAULT_CARD_API.to_string(),
            default_card_type: DEFAULT_CARD_TYPE.to_string(),
            log_file: true,
        }
    }
}

/// config.json の生の形（未知のキーは無視）
#[derive(Debug, Default, Deserialize)]
struct SearchConfigRaw {
    #[serde(alias = "creature_api")]
    creature_base_url: Option<String>,
    #[serde(alias = "card_api")]
    card_base_url: Option<String>,
    default_card_type: Option<String>,
    log_file: Option<bool>,
}

impl SearchConfig {
    /// JSON 文字列からパース（ファイル読みは load で行う）
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: SearchConfigRaw = serde_json::from_str(json)?;
        Ok(Self::default().merged(raw))
    }

    fn merged(mut self, raw: SearchConfigRaw) -> Self {
        let non_empty = |s: Option<String>| s.filter(|v| !v.trim().is_empty());
        if let Some(v) = non_empty(raw.creature_base_url) {
            self.creature_base_url = v;
        }
        if let Some(v) = non_empty(raw.card_base_url) {
            self.card_base_url = v;
        }
        if let Some(v) = non_empty(raw.default_card_type) {
            self.default_card_type = v;
        }
        if let Some(v) = raw.log_file {
            self.log_file = v;
        }
        self
    }

    /// 環境変数の上書きを適用する
    pub fn with_env_overrides(mut self, env: &dyn EnvResolver) -> Self {
        if let Some(url) = env.creature_api_override() {
            self.creature_base_url = url;
        }
        if let Some(url) = env.card_api_override() {
            self.card_base_url = url;
        }
        self
    }
}

/// 設定ファイルを読み、環境変数の上書きを適用した設定を返す
pub fn load_search_config(
    fs: &dyn FileSystem,
    env: &dyn EnvResolver,
    home: Option<&HomeDir>,
) -> SearchConfig {
    let from_file = home
        .map(|h| h.config_path())
        .filter(|p| fs.exists(p))
        .and_then(|path| {
            let parsed = fs
                .read_to_string(&path)
                .and_then(|s| SearchConfig::parse(&s).map_err(Into::into));
            match parsed {
                Ok(cfg) => Some(cfg),
                Err(e) => {
                    eprintln!("Warning: Failed to load {}: {}", path.display(), e);
                    None
                }
            }
        });
    from_file.unwrap_or_default().with_env_overrides(env)
}
