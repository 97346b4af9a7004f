//! アダプター（ポートの標準実装）
//!
//! usecase はポートの trait 経由でのみファイル・環境変数・HTTP・ログに触れる。
//! 実装は標準実装（Std* / Reqwest*）やテスト用のモックを注入する。

pub mod file_json_log;
pub mod reqwest_http;
pub mod std_env_resolver;
pub mod std_fs;
pub mod stderr_log;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use reqwest_http::ReqwestHttp;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use stderr_log::{StderrLog, TeeLog};
