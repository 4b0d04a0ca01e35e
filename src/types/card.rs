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

/// A question/answer flashcard with a mastery score.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    question: String,
    answer: String,
    /// How well the card is known. Lower scores are reviewed first.
    score: u32,
}

impl Card {
    /// Create a card that has never been reviewed.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::with_score(question, answer, 0)
    }

    /// Create a card with a prior mastery score, e.g. when loading a deck.
    pub fn with_score(question: impl Into<String>, answer: impl Into<String>, score: u32) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            score,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Exact comparison against the stored answer. Case and whitespace
    /// matter: `"paris"` does not match `"Paris"`.
    pub fn check_answer(&self, candidate: &str) -> bool {
        candidate == self.answer
    }

    /// Raise the score by one on a correct answer, lower it by one otherwise.
    /// The score never drops below zero.
    pub fn adjust_score(&mut self, was_correct: bool) {
        self.score = if was_correct {
            self.score.saturating_add(1)
        } else {
            self.score.saturating_sub(1)
        };
    }
}
