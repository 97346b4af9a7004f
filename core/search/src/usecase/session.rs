//! 対話セッションのユースケース
//!
//! 入力 1 行ごとに状態遷移・検索・表示を行う。AppState はセッションの間生き続けるので、
//! 同じ検索の繰り返しはキャッシュから返る。

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{AppState, SearchError, SessionCommand, UiEvent};
use crate::ports::outbound::{InputSource, RenderError, ResultRenderer};
use crate::usecase::search::{SearchResult, SearchUseCase};

pub const PROMPT: &str = "digisearch> ";

pub const SESSION_HELP: &str = "\
Commands:
  <term>              Search the active category
  :creature | :card   Switch category
  :level [name]       Set (or clear) the creature level filter
  :type <name>        Set the card type filter
  :clear [category]   Drop cached results (all categories if omitted)
  :state              Show the current state
  :help               Show this help
  :quit               Leave the session";

/// 表示の失敗はログに残して続行する（コアには伝えない）
pub fn report_render_error(log: &dyn Log, result: Result<(), RenderError>) {
    if let Err(e) = result {
        let _ = log.log(
            &LogRecord::new(LogLevel::Warn, "adapter", "error", e.to_string())
                .field("container_missing", matches!(e, RenderError::ContainerMissing(_))),
        );
        eprintln!("digisearch: {}", e);
    }
}

/// 検索結果を表示する
pub fn present(log: &dyn Log, renderer: &mut dyn ResultRenderer, result: &SearchResult) {
    report_render_error(log, renderer.render(result.category, &result.records));
}

/// 対話セッション
pub struct SessionUseCase<'a> {
    search: &'a SearchUseCase,
    log: &'a dyn Log,
}

impl<'a> SessionUseCase<'a> {
    pub fn new(search: &'a SearchUseCase, log: &'a dyn Log) -> Self {
        Self { search, log }
    }

    /// 入力が尽きるか :quit まで回し、最終状態を返す
    pub fn run(
        &self,
        mut state: AppState,
        input: &mut dyn InputSource,
        renderer: &mut dyn ResultRenderer,
    ) -> Result<AppState, Error> {
        while let Some(line) = input.read_line(PROMPT)? {
            let command = SessionCommand::parse(&line);
            if command == SessionCommand::Quit {
                break;
            }
            state = self.step(state, command, renderer);
        }
        Ok(state)
    }

    /// 1 コマンド分の遷移
    pub fn step(
        &self,
        state: AppState,
        command: SessionCommand,
        renderer: &mut dyn ResultRenderer,
    ) -> AppState {
        match command {
            SessionCommand::Nothing | SessionCommand::Quit => state,
            SessionCommand::Help => {
                report_render_error(self.log, renderer.render_notice(SESSION_HELP));
                state
            }
            SessionCommand::State => {
                report_render_error(self.log, renderer.render_state(&state.summary()));
                state
            }
            SessionCommand::Invalid(msg) => {
                report_render_error(self.log, renderer.render_notice(&msg));
                state
            }
            SessionCommand::SelectCategory(c) => state.apply(UiEvent::SelectCategory(c)),
            SessionCommand::SetLevel(level) => state.apply(UiEvent::SetCreatureLevel(level)),
            SessionCommand::SetCardType(t) => state.apply(UiEvent::SetCardType(t)),
            SessionCommand::ClearCache(c) => state.apply(UiEvent::InvalidateCache(c)),
            SessionCommand::Search(term) => {
                let mut state = state.apply(UiEvent::SetTerm(term));
                match self.search.run(&mut state) {
                    Ok(result) => present(self.log, renderer, &result),
                    Err(e) => self.report_search_error(renderer, &e),
                }
                state
            }
        }
    }

    fn report_search_error(&self, renderer: &mut dyn ResultRenderer, error: &SearchError) {
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "usecase", "error", error.to_string()),
        );
        report_render_error(self.log, renderer.render_error(error));
    }
}
