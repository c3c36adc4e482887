use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub suggestion_count: usize,
    pub allow_transpose: bool,
    pub corpus_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            suggestion_count: 10,
            allow_transpose: true,
            corpus_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, confy::ConfyError> {
        match confy::load("spellfix", Some("config")) {
            Ok(config) => Ok(config),
            Err(err) => {
                eprintln!("Failed to load config, using defaults: {err}");
                Ok(Self::default())
            }
        }
    }

    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store("spellfix", Some("config"), self)
    }
}
