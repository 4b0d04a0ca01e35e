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
use serde::Serialize;

use crate::deck::Deck;
use crate::error::Fallible;
use crate::storage::load_deck;

#[derive(ValueEnum, Clone, Copy)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_deck_stats(deck_path: &Path, format: StatsFormat) -> Fallible<()> {
    let deck = load_deck(deck_path)?;
    let stats = get_stats(&deck);
    match format {
        StatsFormat::Text => {
            for line in stats.to_lines() {
                println!("{line}");
            }
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{stats_json}");
        }
    }
    Ok(())
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    card_count: usize,
    /// Cards that have never been answered correctly on balance.
    unlearned_count: usize,
    total_score: u64,
    mean_score: Option<f64>,
    min_score: Option<u32>,
    max_score: Option<u32>,
}

impl Stats {
    fn to_lines(&self) -> Vec<String> {
        let opt = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
        vec![
            format!("Cards:       {}", self.card_count),
            format!("Unlearned:   {}", self.unlearned_count),
            format!("Total score: {}", self.total_score),
            format!("Mean score:  {}", opt(self.mean_score.map(|m| format!("{m:.2}")))),
            format!("Min score:   {}", opt(self.min_score.map(|s| s.to_string()))),
            format!("Max score:   {}", opt(self.max_score.map(|s| s.to_string()))),
        ]
    }
}

pub fn get_stats(deck: &Deck) -> Stats {
    let scores: Vec<u32> = deck.cards().iter().map(|card| card.score()).collect();
    let total_score: u64 = scores.iter().map(|&s| s as u64).sum();
    let mean_score = if scores.is_empty() {
        None
    } else {
        Some(total_score as f64 / scores.len() as f64)
    };
    Stats {
        card_count: scores.len(),
        unlearned_count: scores.iter().filter(|&&s| s == 0).count(),
        total_score,
        mean_score,
        min_score: scores.iter().copied().min(),
        max_score: scores.iter().copied().max(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::card::Card;

    #[test]
    fn test_empty_deck_stats() {
        let stats = get_stats(&Deck::new());
        assert_eq!(stats.card_count, 0);
        assert_eq!(stats.unlearned_count, 0);
        assert_eq!(stats.mean_score, None);
        assert_eq!(stats.min_score, None);
        assert_eq!(stats.max_score, None);
    }

    #[test]
    fn test_stats() {
        let deck = Deck::from_cards(vec![
            Card::with_score("a", "a", 3),
            Card::with_score("b", "b", 0),
            Card::with_score("c", "c", 1),
            Card::with_score("d", "d", 0),
        ]);
        let stats = get_stats(&deck);
        assert_eq!(stats.card_count, 4);
        assert_eq!(stats.unlearned_count, 2);
        assert_eq!(stats.total_score, 4);
        assert_eq!(stats.mean_score, Some(1.0));
        assert_eq!(stats.min_score, Some(0));
        assert_eq!(stats.max_score, Some(3));
    }

    #[test]
    fn test_stats_json() -> Fallible<()> {
        let deck = Deck::from_cards(vec![Card::with_score("a", "a", 2)]);
        let json = serde_json::to_value(get_stats(&deck))?;
        assert_eq!(json["cardCount"], 1);
        assert_eq!(json["unlearnedCount"], 0);
        assert_eq!(json["meanScore"], 2.0);
        assert_eq!(json["maxScore"], 2);
        Ok(())
    }

    #[test]
    fn test_text_lines() {
        let lines = get_stats(&Deck::new()).to_lines();
        assert_eq!(lines[0], "Cards:       0");
        assert_eq!(lines[3], "Mean score:  -");
    }
}
