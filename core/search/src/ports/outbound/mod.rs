//! Outbound ポート: アプリが外界（検索 API・表示・入力）を使うための trait

pub mod input_source;
pub mod renderer;
pub mod search_backend;

pub use input_source::InputSource;
pub use renderer::{RenderError, ResultRenderer};
pub use search_backend::SearchBackend;
