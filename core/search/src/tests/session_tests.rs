//! 対話セッション（1 行ずつの入力）のテスト

use std::sync::Arc;

use common::adapter::NoopLog;
use common::error::Error;
use serde_json::json;

use crate::adapter::{MemoryRenderer, ScriptedInput, StubBackend};
use crate::domain::{AppState, Category, SearchError};
use crate::ports::outbound::RenderError;
use crate::usecase::{SearchUseCase, SessionUseCase};

fn run_session(backend: &Arc<StubBackend>, lines: &[&str], renderer: &mut MemoryRenderer) -> AppState {
    let search = SearchUseCase::new(backend.clone(), Arc::new(NoopLog));
    let log = NoopLog;
    let session = SessionUseCase::new(&search, &log);
    session
        .run(AppState::default(), &mut ScriptedInput::new(lines), renderer)
        .unwrap()
}

#[test]
fn test_repeated_search_hits_cache() {
    let backend = Arc::new(StubBackend::with_items(vec![json!({ "name": "Agumon", "level": "Rookie" })]));
    let mut renderer = MemoryRenderer::default();
    run_session(&backend, &["Agumon", "Agumon"], &mut renderer);
    assert_eq!(renderer.results.len(), 2);
    assert_eq!(renderer.results[0], renderer.results[1]);
    assert_eq!(backend.call_count(), 1);
}

#[test]
fn test_commands_change_state() {
    let backend = Arc::new(StubBackend::empty());
    let mut renderer = MemoryRenderer::default();
    let state = run_session(
        &backend,
        &[":card", ":type Tamer", ":level Mega", "Tai", ":state"],
        &mut renderer,
    );
    assert_eq!(state.active_category(), Category::Card);
    assert_eq!(state.filters().card.card_type(), "Tamer");
    assert_eq!(state.filters().creature.level(), Some("Mega"));
    assert_eq!(renderer.results, vec![(Category::Card, vec![])]);
    assert_eq!(renderer.states.len(), 1);
    assert_eq!(renderer.states[0].search_term, "Tai");
    assert_eq!(renderer.states[0].cached.len(), 1);
}

#[test]
fn test_quit_stops_reading() {
    let backend = Arc::new(StubBackend::empty());
    let mut renderer = MemoryRenderer::default();
    run_session(&backend, &[":quit", "Agumon"], &mut renderer);
    assert!(renderer.results.is_empty());
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn test_errors_are_shown_and_session_continues() {
    let backend = Arc::new(StubBackend::empty());
    backend.fail_with(Error::http("HTTP 502 Bad Gateway"));
    let mut renderer = MemoryRenderer::default();
    run_session(&backend, &["Agumon", ":bogus", ":help"], &mut renderer);
    assert!(matches!(renderer.errors[0], SearchError::RemoteUnavailable(_)));
    assert!(renderer.notices[0].contains("Unknown command"));
    assert!(renderer.notices[1].contains(":quit"));
}

#[test]
fn test_clear_then_search_refetches() {
    let backend = Arc::new(StubBackend::with_items(vec![json!({ "name": "Agumon" })]));
    let mut renderer = MemoryRenderer::default();
    run_session(&backend, &["Agumon", ":clear creature", "Agumon"], &mut renderer);
    assert_eq!(backend.call_count(), 2);
}

#[test]
fn test_render_failure_does_not_abort_session() {
    let backend = Arc::new(StubBackend::with_items(vec![json!({ "name": "Agumon" })]));
    let mut renderer = MemoryRenderer {
        fail_with: Some(RenderError::ContainerMissing("/no/such/dir/out.txt".into())),
        ..Default::default()
    };
    let state = run_session(&backend, &["Agumon", ":state"], &mut renderer);
    // 検索そのものは成功してキャッシュされている
    assert!(state.cache().slot(Category::Creature).is_some());
    assert_eq!(renderer.states.len(), 1);
}
