//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, ReqwestHttp, StderrLog, StdEnvResolver, StdFileSystem, TeeLog};
use common::domain::HomeDir;
use common::ports::outbound::{EnvResolver, FileSystem, HttpGet, Log, LogLevel};

use crate::adapter::{
    load_search_config, HttpSearchBackend, JsonRenderer, Output, OutputTarget, SearchConfig, TextRenderer,
};
use crate::cli::Config;
use crate::ports::outbound::{ResultRenderer, SearchBackend};
use crate::usecase::SearchUseCase;

/// main の Runner が使う依存一式
pub struct App {
    pub search: SearchUseCase,
    pub logger: Arc<dyn Log>,
    pub config: SearchConfig,
    pub fs: Arc<dyn FileSystem>,
}

/// ログの出力先を組み立てる。verbose なら stderr にも出す。
fn build_logger(
    fs: &Arc<dyn FileSystem>,
    home: Option<&HomeDir>,
    config: &SearchConfig,
    verbose: bool,
) -> Arc<dyn Log> {
    let file: Arc<dyn Log> = match home {
        Some(h) if config.log_file => Arc::new(FileJsonLog::new(Arc::clone(fs), h.log_path())),
        _ => Arc::new(NoopLog),
    };
    if verbose {
        Arc::new(TeeLog::new(vec![file, Arc::new(StderrLog::new(LogLevel::Debug))]))
    } else {
        file
    }
}

/// 配線: 標準アダプタ（reqwest・環境変数・ファイル）で App を組み立てる
pub fn wire_search(verbose: bool) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env = StdEnvResolver;
    let home = env.resolve_home_dir().ok();
    let config = load_search_config(fs.as_ref(), &env, home.as_ref());
    let logger = build_logger(&fs, home.as_ref(), &config, verbose);
    let http: Arc<dyn HttpGet> = Arc::new(ReqwestHttp::new());
    let backend: Arc<dyn SearchBackend> = Arc::new(HttpSearchBackend::new(
        http,
        config.creature_base_url.clone(),
        config.card_base_url.clone(),
        Arc::clone(&logger),
    ));
    wire_with_backend(backend, logger, config, fs)
}

/// 任意の SearchBackend で App を組み立てる（テストではスタブを渡す）
pub fn wire_with_backend(
    backend: Arc<dyn SearchBackend>,
    logger: Arc<dyn Log>,
    config: SearchConfig,
    fs: Arc<dyn FileSystem>,
) -> App {
    App {
        search: SearchUseCase::new(backend, Arc::clone(&logger)),
        logger,
        config,
        fs,
    }
}

/// CLI 設定に合う ResultRenderer を作る
pub fn make_renderer(config: &Config, fs: &Arc<dyn FileSystem>) -> Box<dyn ResultRenderer> {
    let target = match &config.output {
        Some(path) => OutputTarget::File(path.clone()),
        None => OutputTarget::Stdout,
    };
    let ansi = !config.no_color && target == OutputTarget::Stdout && {
        use std::io::IsTerminal;
        std::io::stdout().is_terminal()
    };
    let output = Output::new(target, Arc::clone(fs));
    if config.json {
        Box::new(JsonRenderer::new(output))
    } else {
        Box::new(TextRenderer::new(output, ansi))
    }
}
