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

use crate::console::Console;
use crate::deck::ReviewReport;
use crate::error::Fallible;
use crate::storage::load_deck;
use crate::storage::save_deck;
use crate::types::profile::LearnerProfile;

/// Load the deck, review every card once, and save the new scores.
///
/// If input runs out mid-review the error is returned and nothing is saved.
pub fn review_deck<R, W>(
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
    let mut profile = LearnerProfile::new(name);
    match deck.run_review(&mut profile, &mut console.input, &mut console.output)? {
        ReviewReport::Empty => {}
        ReviewReport::Completed(outcomes) => {
            for outcome in &outcomes {
                log::debug!(
                    "{:?}: answered {:?}, {} ({} -> {})",
                    outcome.question,
                    outcome.given,
                    if outcome.correct { "correct" } else { "wrong" },
                    outcome.score_before,
                    outcome.score_after
                );
            }
            save_deck(deck_path, &deck)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;
    use std::fs::write;
    use std::io::Cursor;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_review_saves_scores() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashcards.txt");
        write(&path, "Capital of France|Paris|2\n2+2|4|0\n")?;
        let mut console = Console::new(Cursor::new("Ada\n4\nparis\n"), Vec::new());
        review_deck(&path, None, &mut console)?;
        assert_eq!(
            read_to_string(&path)?,
            "2+2|4|1\nCapital of France|Paris|1\n"
        );
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(
            output,
            "Enter your name:\nQ: 2+2\nCorrect!\nQ: Capital of France\nWrong. The answer was: Paris\nAda: 1/2 correct.\n"
        );
        Ok(())
    }

    #[test]
    fn test_review_with_name_does_not_prompt() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashcards.txt");
        write(&path, "q|a|0\n")?;
        let mut console = Console::new(Cursor::new("a\n"), Vec::new());
        review_deck(&path, Some("Ada".to_string()), &mut console)?;
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert!(output.starts_with("Q: q\n"));
        assert_eq!(read_to_string(&path)?, "q|a|1\n");
        Ok(())
    }

    #[test]
    fn test_review_empty_deck() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashcards.txt");
        let mut console = Console::new(Cursor::new(""), Vec::new());
        review_deck(&path, Some("Ada".to_string()), &mut console)?;
        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "No cards to review.\n");
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn test_end_of_input_saves_nothing() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashcards.txt");
        write(&path, "a|1|0\nb|2|0\n")?;
        let mut console = Console::new(Cursor::new("1\n"), Vec::new());
        assert!(review_deck(&path, Some("Ada".to_string()), &mut console).is_err());
        assert_eq!(read_to_string(&path)?, "a|1|0\nb|2|0\n");
        Ok(())
    }
}
