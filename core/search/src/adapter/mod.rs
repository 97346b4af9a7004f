pub mod config;
pub mod http_backend;
pub mod json_renderer;
pub mod output;
pub mod stdin_input;
mod stub_backend;
pub mod text_renderer;

pub use config::{load_search_config, SearchConfig};
pub use http_backend::HttpSearchBackend;
pub use json_renderer::JsonRenderer;
pub use output::{Output, OutputTarget};
pub use stdin_input::StdinInput;
#[cfg(test)]
pub use stub_backend::{MemoryRenderer, ScriptedInput, StubBackend};
pub use text_renderer::TextRenderer;
