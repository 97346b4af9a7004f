//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリと API ベース URL の上書きを環境変数から解決する。
//! usecase / wiring はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. DIGISEARCH_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/digisearch（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/digisearch
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// クリーチャー API のベース URL 上書き（DIGISEARCH_CREATURE_API）
    fn creature_api_override(&self) -> Option<String>;

    /// カード API のベース URL 上書き（DIGISEARCH_CARD_API）
    fn card_api_override(&self) -> Option<String>;
}
