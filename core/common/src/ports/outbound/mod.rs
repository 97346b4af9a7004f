//! Outbound ポート: アプリが外界（FS・環境変数・HTTP・ログ）を使うための trait

pub mod env_resolver;
pub mod fs;
pub mod http;
pub mod log;

pub use env_resolver::EnvResolver;
pub use fs::{FileMetadata, FileSystem};
pub use http::{HttpGet, HttpRequest};
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
