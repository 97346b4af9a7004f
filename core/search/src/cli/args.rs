use std::path::PathBuf;

use crate::domain::{Category, InitialState, SearchCommand};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -C / --category: 最初にアクティブにするカテゴリ
    pub category: Option<Category>,
    /// -l / --level: クリーチャーのレベル絞り込み
    pub level: Option<String>,
    /// -t / --type: カードタイプ（未指定なら設定の既定値）
    pub card_type: Option<String>,
    /// --json: 結果を JSON で出す
    pub json: bool,
    /// -o / --output: 結果の書き出し先ファイル
    pub output: Option<PathBuf>,
    /// -i / --interactive: 標準入力から 1 行ずつ読む
    pub interactive: bool,
    /// -v / --verbose: 不具合調査用の冗長ログを stderr にも出す
    pub verbose: bool,
    pub no_color: bool,
    pub list_levels: bool,
    pub list_card_types: bool,
    pub message_args: Vec<String>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::parse(s).ok_or_else(|| format!("unknown category '{}' (expected creature or card)", s))
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("digisearch")
        .about("Search creatures and trading cards from the command line")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("category")
                .short('C')
                .long("category")
                .value_name("category")
                .help("Category to search (creature or card)")
                .value_parser(parse_category)
                .num_args(1),
        )
        .arg(
            clap::Arg::new("level")
                .short('l')
                .long("level")
                .value_name("level")
                .help("Filter creatures by level (e.g. Rookie)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("type")
                .short('t')
                .long("type")
                .value_name("card type")
                .help("Card type to search (e.g. Digimon, Tamer)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("json")
                .long("json")
                .help("Print results as JSON")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("file")
                .help("Write results to a file instead of stdout")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Read search terms and commands from stdin")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit verbose debug logs to stderr (for troubleshooting)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-color")
                .long("no-color")
                .help("Do not color card colors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-levels")
                .long("list-levels")
                .help("List known creature levels")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-card-types")
                .long("list-card-types")
                .help("List known card types")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("term")
                .index(1)
                .help("Search term (words are joined with spaces)")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        category: matches.get_one::<Category>("category").copied(),
        level: matches.get_one::<String>("level").cloned(),
        card_type: matches.get_one::<String>("type").cloned(),
        json: matches.get_flag("json"),
        output: matches.get_one::<PathBuf>("output").cloned(),
        interactive: matches.get_flag("interactive"),
        verbose: matches.get_flag("verbose"),
        no_color: matches.get_flag("no-color"),
        list_levels: matches.get_flag("list-levels"),
        list_card_types: matches.get_flag("list-card-types"),
        message_args: matches
            .get_many::<String>("term")
            .map(|i| i.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "digisearch", &mut std::io::stdout());
}

/// Config を SearchCommand に変換する
pub fn config_to_command(config: Config) -> SearchCommand {
    if config.help {
        return SearchCommand::Help;
    }

    if config.list_levels {
        return SearchCommand::ListLevels;
    }

    if config.list_card_types {
        return SearchCommand::ListCardTypes;
    }

    let initial = InitialState {
        category: config.category,
        level: config.level,
        card_type: config.card_type,
    };

    if config.interactive {
        return SearchCommand::Interactive { initial };
    }

    SearchCommand::Search {
        initial,
        term: config.message_args.join(" "),
    }
}
