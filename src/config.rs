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
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;

/// Looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "pipecards.toml";

pub const DEFAULT_DECK_FILE: &str = "flashcards.txt";

/// The contents of the optional config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Path to the deck file.
    pub deck_file: Option<PathBuf>,
    /// Default learner name, so `review` doesn't have to ask.
    pub name: Option<String>,
}

impl Config {
    pub fn parse(content: &str) -> Fallible<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the config. An explicit path must exist; the default one may not.
    pub fn load(explicit: Option<&Path>) -> Fallible<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return fail(format!("config file does not exist: {}", path.display()));
                }
                Self::parse(&read_to_string(path)?)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    log::debug!("Using config file {DEFAULT_CONFIG_FILE}.");
                    Self::parse(&read_to_string(path)?)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// The deck path: the flag wins over the config file, which wins over the
    /// default.
    pub fn deck_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.deck_file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DECK_FILE))
    }

    /// The learner name, if the flag or the config file provides one.
    pub fn learner_name(&self, flag: Option<String>) -> Option<String> {
        flag.or_else(|| self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_parse_full() -> Fallible<()> {
        let config = Config::parse("deck_file = \"cards.txt\"\nname = \"Ada\"\n")?;
        assert_eq!(config.deck_file, Some(PathBuf::from("cards.txt")));
        assert_eq!(config.name.as_deref(), Some("Ada"));
        Ok(())
    }

    #[test]
    fn test_parse_empty() -> Fallible<()> {
        assert_eq!(Config::parse("")?, Config::default());
        Ok(())
    }

    #[test]
    fn test_unknown_key() {
        assert!(Config::parse("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_deck_path_precedence() {
        let config = Config {
            deck_file: Some(PathBuf::from("from_config.txt")),
            name: None,
        };
        assert_eq!(
            config.deck_path(Some(PathBuf::from("from_flag.txt"))),
            PathBuf::from("from_flag.txt")
        );
        assert_eq!(config.deck_path(None), PathBuf::from("from_config.txt"));
        assert_eq!(
            Config::default().deck_path(None),
            PathBuf::from(DEFAULT_DECK_FILE)
        );
    }

    #[test]
    fn test_learner_name_precedence() {
        let config = Config {
            deck_file: None,
            name: Some("Ada".to_string()),
        };
        assert_eq!(config.learner_name(Some("Bob".to_string())).as_deref(), Some("Bob"));
        assert_eq!(config.learner_name(None).as_deref(), Some("Ada"));
        assert_eq!(Config::default().learner_name(None), None);
    }

    #[test]
    fn test_load_explicit() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("custom.toml");
        write(&path, "name = \"Ada\"\n")?;
        let config = Config::load(Some(path.as_path()))?;
        assert_eq!(config.name.as_deref(), Some("Ada"));
        Ok(())
    }

    #[test]
    fn test_load_explicit_missing() -> Fallible<()> {
        let dir = tempdir()?;
        assert!(Config::load(Some(dir.path().join("nope.toml").as_path())).is_err());
        Ok(())
    }
}
