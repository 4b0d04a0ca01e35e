// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::cmd::add::add_card;
use crate::cmd::check::check_deck;
use crate::cmd::list::ListOrder;
use crate::cmd::list::list_cards;
use crate::cmd::review::review_deck;
use crate::cmd::session::run_session;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_deck_stats;
use crate::config::Config;
use crate::console::Console;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults to `pipecards.toml` if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Path to the deck file. Overrides the config file.
    #[arg(long, global = true)]
    deck: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Review every card once, weakest first, and save the new scores.
    Review {
        /// Learner name. Asked for interactively if not given here or in the config.
        #[arg(long)]
        name: Option<String>,
    },
    /// Add a card to the deck.
    Add {
        question: String,
        answer: String,
    },
    /// List the cards in the deck with their scores.
    List {
        #[arg(long, default_value_t = ListOrder::Storage)]
        order: ListOrder,
    },
    /// Print deck statistics.
    Stats {
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Check that the deck file parses.
    Check,
    /// Interactive menu: add cards, review, save and exit.
    Session {
        #[arg(long)]
        name: Option<String>,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let deck_path: PathBuf = config.deck_path(cli.deck);
    log::debug!("Using deck file {}.", deck_path.display());
    match cli.command {
        Command::Review { name } => {
            let mut console = Console::stdio();
            review_deck(&deck_path, config.learner_name(name), &mut console)
        }
        Command::Add { question, answer } => add_card(&deck_path, question, answer),
        Command::List { order } => {
            let mut console = Console::stdio();
            list_cards(&deck_path, order, &mut console.output)
        }
        Command::Stats { format } => print_deck_stats(&deck_path, format),
        Command::Check => check_deck(&deck_path),
        Command::Session { name } => {
            let mut console = Console::stdio();
            run_session(&deck_path, config.learner_name(name), &mut console)
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_review() {
        let cli = Cli::parse_from(["pipecards", "--deck", "d.txt", "review", "--name", "Ada"]);
        assert_eq!(cli.deck, Some(PathBuf::from("d.txt")));
        match cli.command {
            Command::Review { name } => assert_eq!(name.as_deref(), Some("Ada")),
            _ => panic!("Expected review"),
        }
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::parse_from(["pipecards", "add", "2+2", "4"]);
        match cli.command {
            Command::Add { question, answer } => {
                assert_eq!(question, "2+2");
                assert_eq!(answer, "4");
            }
            _ => panic!("Expected add"),
        }
    }

    #[test]
    fn test_parse_stats_json() {
        let cli = Cli::parse_from(["pipecards", "stats", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Command::Stats {
                format: StatsFormat::Json
            }
        ));
    }

    #[test]
    fn test_global_flag_after_subcommand() {
        let cli = Cli::parse_from(["pipecards", "check", "--deck", "x.txt"]);
        assert_eq!(cli.deck, Some(PathBuf::from("x.txt")));
    }
}
