//! Ports & Adapters のポート定義
//!
//! - inbound: なし（common はライブラリのためアプリの入り口を持たない）
//! - outbound: アプリが外界（FS・環境変数・HTTP・ログ）を使うための trait

pub mod outbound;
