mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::catalog::{CARD_TYPES, CREATURE_LEVELS};
use domain::{SearchCommand, UiEvent};
use ports::inbound::UseCaseRunner;
use ports::outbound::InputSource;
use usecase::session::present;
use usecase::SessionUseCase;
use wiring::{make_renderer, wire_search, App};

/// SearchCommand をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
    /// 対話モードの入力元（テストでは差し替える）
    input: Box<dyn Fn() -> Box<dyn InputSource>>,
}

impl Runner {
    fn new(app: App) -> Self {
        Self {
            app,
            input: Box::new(|| Box::new(adapter::StdinInput::default()) as Box<dyn InputSource>),
        }
    }
}

fn cmd_name_for_log(cmd: &SearchCommand) -> &'static str {
    match cmd {
        SearchCommand::Help => "help",
        SearchCommand::ListLevels => "list_levels",
        SearchCommand::ListCardTypes => "list_card_types",
        SearchCommand::Search { .. } => "search",
        SearchCommand::Interactive { .. } => "interactive",
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let mut renderer = make_renderer(&config, &self.app.fs);
        let cmd = config_to_command(config);
        let command_name = cmd_name_for_log(&cmd);
        let _ = self.app.logger.log(
            &LogRecord::new(LogLevel::Info, "cli", "lifecycle", "command started").field("command", command_name),
        );

        let result = match cmd {
            SearchCommand::Help => {
                print_help();
                Ok(0)
            }
            SearchCommand::ListLevels => {
                for level in CREATURE_LEVELS {
                    println!("{}", level);
                }
                Ok(0)
            }
            SearchCommand::ListCardTypes => {
                for card_type in CARD_TYPES {
                    println!("{}", card_type);
                }
                Ok(0)
            }
            SearchCommand::Search { initial, term } => {
                let mut state = initial
                    .into_state(&self.app.config.default_card_type)
                    .apply(UiEvent::SetTerm(term));
                self.app
                    .search
                    .run(&mut state)
                    .map_err(Error::from)
                    .map(|found| {
                        present(self.app.logger.as_ref(), renderer.as_mut(), &found);
                        0
                    })
            }
            SearchCommand::Interactive { initial } => {
                let state = initial.into_state(&self.app.config.default_card_type);
                let mut input = (self.input)();
                SessionUseCase::new(&self.app.search, self.app.logger.as_ref())
                    .run(state, input.as_mut(), renderer.as_mut())
                    .map(|_| 0)
            }
        };

        let (level, code) = match &result {
            Ok(code) => (LogLevel::Info, *code),
            Err(e) => (LogLevel::Error, e.exit_code()),
        };
        let mut record = LogRecord::new(level, "cli", "lifecycle", "command finished")
            .field("command", command_name)
            .field("exit_code", code);
        if let Err(e) = &result {
            record = record.field("error", e.to_string());
        }
        let _ = self.app.logger.log(&record);
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("digisearch: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_search(config.verbose);
    let runner = Runner::new(app);
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: digisearch [options] [term...]");
}

fn print_help() {
    println!("Usage: digisearch [options] [term...]");
    println!("Options:");
    println!("  -h, --help                  Show this help message");
    println!("  -C, --category <category>   Category to search: creature (default) or card");
    println!("  -l, --level <level>         Filter creatures by level (see --list-levels)");
    println!("  -t, --type <card type>      Card type to search (see --list-card-types). Default: Digimon");
    println!("  --json                      Print results as JSON");
    println!("  -o, --output <file>         Write results to a file instead of stdout");
    println!("  -i, --interactive           Read search terms and :commands from stdin (type :help)");
    println!("  -v, --verbose               Emit verbose debug logs to stderr");
    println!("  --no-color                  Do not color card colors");
    println!("  --list-levels               List known creature levels");
    println!("  --list-card-types           List known card types");
    println!("  --generate <shell>          Generate shell completion script (bash, zsh, fish, ...)");
    println!();
    println!("Environment:");
    println!("  DIGISEARCH_HOME          Home directory for config.json and logs/.");
    println!("                           If unset, $XDG_CONFIG_HOME/digisearch (e.g. ~/.config/digisearch) is used.");
    println!("  DIGISEARCH_CREATURE_API  Override the creature API base URL");
    println!("  DIGISEARCH_CARD_API      Override the card API base URL");
    println!();
    println!("Examples:");
    println!("  digisearch Agumon");
    println!("  digisearch -l Rookie Agumon");
    println!("  digisearch -C card -t Tamer Tai");
    println!("  digisearch -C card --json Omnimon");
}
