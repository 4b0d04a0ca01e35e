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

use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;

use clap::ValueEnum;

use crate::console::OutputSink;
use crate::deck::Deck;
use crate::error::Fallible;
use crate::storage::load_deck;

#[derive(ValueEnum, Clone, Copy)]
pub enum ListOrder {
    /// The order of the deck file.
    Storage,
    /// The order the next review would ask the cards in.
    Review,
}

impl Display for ListOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ListOrder::Storage => write!(f, "storage"),
            ListOrder::Review => write!(f, "review"),
        }
    }
}

pub fn list_cards<S>(deck_path: &Path, order: ListOrder, sink: &mut S) -> Fallible<()>
where
    S: OutputSink + ?Sized,
{
    let deck = load_deck(deck_path)?;
    for line in render_list(&deck, order) {
        sink.emit(&line)?;
    }
    Ok(())
}

fn render_list(deck: &Deck, order: ListOrder) -> Vec<String> {
    let indices: Vec<usize> = match order {
        ListOrder::Storage => (0..deck.len()).collect(),
        ListOrder::Review => deck.review_order(),
    };
    indices
        .into_iter()
        .map(|idx| {
            let card = &deck.cards()[idx];
            format!("{:>5}  {}", card.score(), card.question())
        })
        .collect()
}
