//! 標準環境変数解決実装（std::env を委譲）

use crate::domain::HomeDir;
use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::env;
use std::path::PathBuf;

/// 標準環境変数解決実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|s| !s.trim().is_empty())
}

/// 変数参照関数からホームディレクトリを解決する（優先順位は EnvResolver を参照）
pub(crate) fn resolve_home_with(lookup: impl Fn(&str) -> Option<String>) -> Result<HomeDir, Error> {
    if let Some(home) = lookup("DIGISEARCH_HOME") {
        return Ok(HomeDir::new(PathBuf::from(home)));
    }

    let config_base = lookup("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| lookup("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or_else(|| Error::env("HOME is not set"))?;

    Ok(HomeDir::new(config_base.join("digisearch")))
}

impl EnvResolver for StdEnvResolver {
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        resolve_home_with(non_empty_var)
    }

    fn creature_api_override(&self) -> Option<String> {
        non_empty_var("DIGISEARCH_CREATURE_API")
    }

    fn card_api_override(&self) -> Option<String> {
        non_empty_var("DIGISEARCH_CARD_API")
    }
}
