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

use std::fs::read_to_string;
use std::fs::rename;
use std::fs::write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use crate::codec::decode;
use crate::codec::encode;
use crate::deck::Deck;
use crate::error::Fallible;

/// Load a deck from disk. A file that does not exist yet is an empty deck.
pub fn load_deck(path: &Path) -> Fallible<Deck> {
    if !path.exists() {
        log::debug!("No deck file at {}, starting empty.", path.display());
        return Ok(Deck::new());
    }
    log::debug!("Loading deck...");
    let start = Instant::now();
    let content = read_to_string(path)?;
    let cards = decode(content.lines())?;
    let duration = start.elapsed().as_millis();
    log::debug!("Loaded {} cards in {duration}ms.", cards.len());
    Ok(Deck::from_cards(cards))
}

/// Replace the deck file with the deck's current contents.
pub fn save_deck(path: &Path, deck: &Deck) -> Fallible<()> {
    let mut content = String::new();
    for line in encode(deck.cards()) {
        content.push_str(&line);
        content.push('\n');
    }
    // Replaced atomically via a sibling temp file.
    let tmp = tmp_path(path);
    write(&tmp, content)?;
    rename(&tmp, path)?;
    log::debug!("Saved {} cards to {}.", deck.len(), path.display());
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::types::card::Card;

    #[test]
    fn test_missing_file_is_empty_deck() -> Fallible<()> {
        let dir = tempdir()?;
        let deck = load_deck(&dir.path().join("flashcards.txt"))?;
        assert!(deck.is_empty());
        Ok(())
    }

    #[test]
    fn test_save_and_load() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashcards.txt");
        let deck = Deck::from_cards(vec![
            Card::new("2+2", "4"),
            Card::with_score("Capital of France", "Paris", 2),
        ]);
        save_deck(&path, &deck)?;
        assert_eq!(
            read_to_string(&path)?,
            "2+2|4|0\nCapital of France|Paris|2\n"
        );
        assert_eq!(load_deck(&path)?, deck);
        assert!(!dir.path().join("flashcards.txt.tmp").exists());
        Ok(())
    }

    #[test]
    fn test_save_replaces_file() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashcards.txt");
        write(&path, "old|card|9\nanother|one|1\n")?;
        save_deck(&path, &Deck::from_cards(vec![Card::new("new", "card")]))?;
        assert_eq!(read_to_string(&path)?, "new|card|0\n");
        Ok(())
    }

    #[test]
    fn test_load_crlf() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashcards.txt");
        write(&path, "a|b|1\r\nc|d|2\r\n")?;
        let deck = load_deck(&path)?;
        assert_eq!(deck.cards()[1], Card::with_score("c", "d", 2));
        Ok(())
    }

    #[test]
    fn test_load_malformed() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("flashcards.txt");
        write(&path, "a|b|1\nonlyonepart\n")?;
        let err = load_deck(&path).unwrap_err();
        assert_eq!(
            err.message(),
            "Parse error at line 2: expected `question|answer|score`"
        );
        Ok(())
    }
}
