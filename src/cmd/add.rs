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

use std::path::Path;

use crate::error::Fallible;
use crate::error::fail;
use crate::storage::load_deck;
use crate::storage::save_deck;
use crate::types::card::Card;

/// Build a new card, rejecting text the deck file cannot hold.
pub fn new_card(question: String, answer: String) -> Fallible<Card> {
    validate_field("question", &question)?;
    validate_field("answer", &answer)?;
    Ok(Card::new(question, answer))
}

fn validate_field(field: &str, text: &str) -> Fallible<()> {
    if text.contains('|') {
        return fail(format!("the {field} cannot contain '|'."));
    }
    if text.contains(['\n', '\r']) {
        return fail(format!("the {field} cannot contain a line break."));
    }
    Ok(())
}

pub fn add_card(deck_path: &Path, question: String, answer: String) -> Fallible<()> {
    let card = new_card(question, answer)?;
    let mut deck = load_deck(deck_path)?;
    deck.add(card);
    save_deck(deck_path, &deck)?;
    println!("Added card #{}.", deck.len());
    Ok(())
}
