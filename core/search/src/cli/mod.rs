//! CLI 層（引数解析と Command への変換）

mod args;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
#[allow(unused_imports)]
pub use args::parse_args_from;
