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

//! The deck file format: one `question|answer|score` record per line.
//!
//! The delimiter is never escaped. A line is split at the first `|` and at
//! the next `|` after it, so a pipe inside the answer ends the answer early
//! and the remainder lands in the score field.

use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::card::Card;

const DELIMITER: char = '|';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    message: String,
    /// 1-based.
    line_num: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, line_num: usize) -> Self {
        Self {
            message: message.into(),
            line_num,
        }
    }

    #[cfg(test)]
    pub fn line_num(&self) -> usize {
        self.line_num
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error at line {}: {}", self.line_num, self.message)
    }
}

impl std::error::Error for ParseError {}

pub fn encode_card(card: &Card) -> String {
    format!(
        "{}{DELIMITER}{}{DELIMITER}{}",
        card.question(),
        card.answer(),
        card.score()
    )
}

/// Encode each card as one line, in order.
pub fn encode<'a>(cards: impl IntoIterator<Item = &'a Card>) -> Vec<String> {
    cards.into_iter().map(encode_card).collect()
}

/// Decode every line into a card. Stops at the first malformed line.
pub fn decode<I>(lines: I) -> Result<Vec<Card>, ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut cards = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        cards.push(decode_line(line.as_ref(), idx + 1)?);
    }
    Ok(cards)
}

fn decode_line(line: &str, line_num: usize) -> Result<Card, ParseError> {
    let (question, rest) = line
        .split_once(DELIMITER)
        .ok_or_else(|| ParseError::new("expected `question|answer|score`", line_num))?;
    let (answer, score) = rest
        .split_once(DELIMITER)
        .ok_or_else(|| ParseError::new("missing score field", line_num))?;
    let score = parse_score(score)
        .ok_or_else(|| ParseError::new(format!("invalid score: {score:?}"), line_num))?;
    Ok(Card::with_score(question, answer, score))
}

/// Scores are unsigned decimal integers with no sign and no padding.
fn parse_score(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
