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

use std::io::BufRead;
use std::io::Write;
use std::path::Path;

use crate::cmd::add::new_card;
use crate::console::Console;
use crate::error::Fallible;
use crate::storage::load_deck;
use crate::storage::save_deck;
use crate::types::profile::LearnerProfile;

const MENU: [&str; 3] = ["1) Add card", "2) Review", "3) Save and exit"];

enum Choice {
    Add,
    Review,
    SaveAndExit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Choice::Add),
            "2" => Some(Choice::Review),
            "3" => Some(Choice::SaveAndExit),
            _ => None,
        }
    }
}

/// The interactive menu: add cards and review them until the learner saves.
///
/// Changes only reach the deck file on "Save and exit". Running out of input
/// before that discards them.
pub fn run_session<R, W>(
    deck_path: &Path,
    name: Option<String>,
    console: &mut Console<R, W>,
) -> Fallible<()>
where
    R: BufRead,
    W: Write,
{
    let mut deck = load_deck(deck_path)?;
    let name = match name {
        Some(name) => name,
        None => console.prompt("Enter your name:")?,
    };
    console.emit(&format!("Welcome, {name}. {} cards loaded.", deck.len()))?;
    // One profile for the whole session, so accuracy accumulates across reviews.
    let mut profile = LearnerProfile::new(name);
    loop {
        for line in MENU {
            console.emit(line)?;
        }
        let input = console.prompt("Choose an option:")?;
        match Choice::parse(&input) {
            Some(Choice::Add) => {
                let question = console.prompt("Question:")?;
                let answer = console.prompt("Answer:")?;
                match new_card(question, answer) {
                    Ok(card) => {
                        deck.add(card);
                        console.emit("Card added.")?;
                    }
                    Err(e) => {
                        console.emit(&format!("Card not added: {}", e.message()))?;
                    }
                }
            }
            Some(Choice::Review) => {
                deck.run_review(&mut profile, &mut console.input, &mut console.output)?;
            }
            Some(Choice::SaveAndExit) => {
                if let Some(accuracy) = profile.accuracy() {
                    console.emit(&format!("Session accuracy: {:.0}%.", accuracy * 100.0))?;
                }
                save_deck(deck_path, &deck)?;
                console.emit(&format!("Saved {} cards. Goodbye!", deck.len()))?;
                return Ok(());
            }
            None => {
                console.emit("Invalid choice.")?;
            }
        }
    }
}
