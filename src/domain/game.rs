use crate::error::{ManifestError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Release year as written in `game.json`: either a bare number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(serde_json::Number),
    Text(String),
}

impl Default for Year {
    fn default() -> Self {
        Year::Text(String::new())
    }
}

/// Optional overrides read from a game folder's `game.json`.
///
/// Keys are read independently: a key holding the wrong JSON type is dropped
/// and listed in `invalid_keys`, the other keys still apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameMetadata {
    pub title: Option<String>,
    pub system: Option<String>,
    pub year: Option<Year>,
    pub tags: Option<Vec<String>>,
    pub author: Option<String>,
    pub invalid_keys: Vec<&'static str>,
}

impl GameMetadata {
    /// Parses a metadata document. Anything other than a JSON object is rejected.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(mut map) = value else {
            return Err(ManifestError::Other(
                "metadata must be a JSON object".to_string(),
            ));
        };

        let mut metadata = Self::default();
        metadata.title = metadata.take(&mut map, "title");
        metadata.system = metadata.take(&mut map, "system");
        metadata.year = metadata.take(&mut map, "year");
        metadata.tags = metadata.take(&mut map, "tags");
        metadata.author = metadata.take(&mut map, "author");
        Ok(metadata)
    }

    fn take<T: DeserializeOwned>(
        &mut self,
        map: &mut Map<String, Value>,
        key: &'static str,
    ) -> Option<T> {
        let value = map.remove(key).filter(|value| !value.is_null())?;
        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                self.invalid_keys.push(key);
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestEntry {
    pub id: String,
    pub title: String,
    pub entry: String,
    pub system: String,
    pub year: Year,
    pub tags: Vec<String>,
    pub author: String,
}

impl ManifestEntry {
    pub fn new(id: String, entry: String, metadata: GameMetadata) -> Self {
        let title = metadata.title.unwrap_or_else(|| title_from_folder(&id));

        Self {
            id,
            title,
            entry,
            system: metadata.system.unwrap_or_default(),
            year: metadata.year.unwrap_or_default(),
            tags: metadata.tags.unwrap_or_default(),
            author: metadata.author.unwrap_or_default(),
        }
    }
}

/// Turns a folder name into a display title: hyphens become spaces and every
/// run of letters is capitalized, so `space-invaders` reads `Space Invaders`.
pub fn title_from_folder(name: &str) -> String {
    let mut title = String::with_capacity(name.len());
    let mut in_word = false;

    for c in name.replace('-', " ").chars() {
        if c.is_alphabetic() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(c);
            in_word = false;
        }
    }

    title
}
