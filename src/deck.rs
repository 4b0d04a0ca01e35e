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

use crate::console::AnswerSource;
use crate::console::OutputSink;
use crate::error::Fallible;
use crate::types::card::Card;
use crate::types::profile::LearnerProfile;

/// An ordered collection of cards. Order is working order, not identity, and
/// duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// What happened to a single card during a review.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewOutcome {
    pub question: String,
    pub given: String,
    pub correct: bool,
    pub score_before: u32,
    pub score_after: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ReviewReport {
    /// The deck had no cards. Nothing was asked and nothing changed.
    Empty,
    /// Every card was asked once, in review order.
    Completed(Vec<ReviewOutcome>),
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Indices into `cards()` in the order a review would ask them: lowest
    /// score first, ties in storage order.
    pub fn review_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.cards.len()).collect();
        order.sort_by_key(|&idx| self.cards[idx].score());
        order
    }

    /// Ask every card once, weakest first, and score the answers.
    ///
    /// The deck is stably re-sorted by score in place before the first
    /// question, so a later save writes the review order. Running out of
    /// answers aborts the review; cards already answered keep their new
    /// scores.
    pub fn run_review<A, S>(
        &mut self,
        profile: &mut LearnerProfile,
        answers: &mut A,
        sink: &mut S,
    ) -> Fallible<ReviewReport>
    where
        A: AnswerSource + ?Sized,
        S: OutputSink + ?Sized,
    {
        if self.is_empty() {
            sink.emit("No cards to review.")?;
            return Ok(ReviewReport::Empty);
        }

        self.cards.sort_by_key(Card::score);
        log::debug!("Reviewing {} cards.", self.cards.len());

        let mut outcomes = Vec::with_capacity(self.cards.len());
        for card in self.cards.iter_mut() {
            sink.emit(&format!("Q: {}", card.question()))?;
            let given = answers.next_answer()?;
            let correct = card.check_answer(&given);
            if correct {
                sink.emit("Correct!")?;
            } else {
                sink.emit(&format!("Wrong. The answer was: {}", card.answer()))?;
            }
            let score_before = card.score();
            card.adjust_score(correct);
            profile.record_attempt(correct);
            outcomes.push(ReviewOutcome {
                question: card.question().to_string(),
                given,
                correct,
                score_before,
                score_after: card.score(),
            });
        }

        let (correct, attempts) = profile.accuracy_summary();
        sink.emit(&format!("{}: {correct}/{attempts} correct.", profile.name()))?;
        Ok(ReviewReport::Completed(outcomes))
    }
}
