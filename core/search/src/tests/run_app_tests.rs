use std::sync::Arc;

use common::adapter::{NoopLog, StdFileSystem};
use common::error::Error;
use common::ports::outbound::FileSystem;
use serde_json::{json, Value};

use crate::adapter::{ScriptedInput, SearchConfig, StubBackend};
use crate::cli::Config;
use crate::domain::{Category, RemoteRequest};
use crate::ports::inbound::UseCaseRunner;
use crate::ports::outbound::InputSource;
use crate::wiring;

/// スタブの検索 API で App を組み立て、Runner で run する（テスト用の入口）
fn run_app(backend: &Arc<StubBackend>, config: Config) -> Result<i32, Error> {
    run_app_with_input(backend, config, &[])
}

fn run_app_with_input(backend: &Arc<StubBackend>, config: Config, lines: &'static [&'static str]) -> Result<i32, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let app = wiring::wire_with_backend(backend.clone(), Arc::new(NoopLog), SearchConfig::default(), fs);
    let runner = crate::Runner {
        app,
        input: Box::new(move || Box::new(ScriptedInput::new(lines)) as Box<dyn InputSource>),
    };
    runner.run(config)
}

#[test]
fn test_run_app_with_help() {
    let config = Config {
        help: true,
        ..Default::default()
    };
    assert_eq!(run_app(&Arc::new(StubBackend::empty()), config).unwrap(), 0);
}

#[test]
fn test_run_app_list_levels() {
    let backend = Arc::new(StubBackend::empty());
    let config = Config {
        list_levels: true,
        ..Default::default()
    };
    assert_eq!(run_app(&backend, config).unwrap(), 0);
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn test_run_app_without_term() {
    let backend = Arc::new(StubBackend::empty());
    let err = run_app(&backend, Config::default()).unwrap_err();
    assert!(err.to_string().contains("Please enter a search term"));
    assert_eq!(err.exit_code(), 64);
    assert!(err.is_usage());
    assert_eq!(backend.call_count(), 0);
}

#[test]
fn test_run_app_remote_failure_exit_code() {
    let backend = Arc::new(StubBackend::empty());
    backend.fail_with(Error::http("HTTP 500 Internal Server Error"));
    let config = Config {
        message_args: vec!["Agumon".to_string()],
        ..Default::default()
    };
    let err = run_app(&backend, config).unwrap_err();
    assert_eq!(err.exit_code(), 74);
    assert!(err.to_string().contains("500"));
}

#[test]
fn test_run_app_json_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cards.json");
    let backend = Arc::new(StubBackend::with_items(vec![json!({
        "name": "Tai Kamiya",
        "cardnumber": "ST1-12",
        "color": "Red",
        "type": "Tamer"
    })]));
    let config = Config {
        category: Some(Category::Card),
        card_type: Some("Tamer".to_string()),
        json: true,
        output: Some(out.clone()),
        message_args: vec!["Tai".to_string()],
        ..Default::default()
    };
    assert_eq!(run_app(&backend, config).unwrap(), 0);
    assert_eq!(
        backend.requests(),
        vec![RemoteRequest::CardSearch {
            name: "Tai".to_string(),
            card_type: "Tamer".to_string(),
            series: "Digimon Card Game".to_string(),
        }]
    );

    let doc: Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(doc["category"], "card");
    assert_eq!(doc["count"], 1);
    assert_eq!(doc["records"][0]["display_number"], "ST1-12");
    assert_eq!(doc["records"][0]["foreground"], "light");
}

#[test]
fn test_run_app_text_empty_results() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let config = Config {
        output: Some(out.clone()),
        message_args: vec!["Nobody".to_string()],
        ..Default::default()
    };
    assert_eq!(run_app(&Arc::new(StubBackend::empty()), config).unwrap(), 0);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "No results found.\n");
}

#[test]
fn test_run_app_missing_output_dir_is_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("out.txt");
    let backend = Arc::new(StubBackend::with_items(vec![json!({ "name": "Agumon" })]));
    let config = Config {
        output: Some(out.clone()),
        message_args: vec!["Agumon".to_string()],
        ..Default::default()
    };
    assert_eq!(run_app(&backend, config).unwrap(), 0);
    assert!(!out.exists());
}

#[test]
fn test_run_app_interactive_uses_cache() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.txt");
    let backend = Arc::new(StubBackend::with_items(vec![json!({ "name": "Agumon", "level": "Rookie" })]));
    let config = Config {
        interactive: true,
        output: Some(out.clone()),
        ..Default::default()
    };
    let code = run_app_with_input(&backend, config, &["Agumon", "", "Agumon", ":quit"]).unwrap();
    assert_eq!(code, 0);
    assert_eq!(backend.call_count(), 1);
    assert!(std::fs::read_to_string(&out).unwrap().contains("Agumon  [Rookie]"));
}
