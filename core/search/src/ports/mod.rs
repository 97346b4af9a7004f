//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（検索 API・表示・入力）を使うための trait

pub mod inbound;
pub mod outbound;
