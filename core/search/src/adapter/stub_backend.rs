//! テスト用: 固定の応答を返す SearchBackend と、その周辺のスタブ


#[cfg(test)]
pub use stub::{MemoryRenderer, ScriptedInput, StubBackend};
