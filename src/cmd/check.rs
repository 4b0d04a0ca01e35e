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

pub fn check_deck(deck_path: &Path) -> Fallible<()> {
    if !deck_path.exists() {
        return fail("deck file does not exist.");
    }
    let _ = load_deck(deck_path)?;
    println!("ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::check_deck;

    #[test]
    fn test_non_existent_file() {
        assert!(check_deck(&PathBuf::from("./derpherp.txt")).is_err());
    }

    #[test]
    fn test_valid_deck() {
        assert!(check_deck(&PathBuf::from("./test/flashcards.txt")).is_ok());
    }

    #[test]
    fn test_malformed_deck() {
        assert!(check_deck(&PathBuf::from("./test/malformed.txt")).is_err());
    }
}
