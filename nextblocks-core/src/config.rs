/// Page configuration loaded from JSON
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Overridable page content. Missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub github_url: String,
    pub telegram_url: String,
    pub twitter_url: String,
    pub logo_src: String,
    pub logo_alt: String,
    pub word: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            github_url: "https://github.com/yourusername".to_string(),
            telegram_url: "https://t.me/yourusername".to_string(),
            twitter_url: "https://twitter.com/yourusername".to_string(),
            logo_src: "/AI.png".to_string(),
            logo_alt: "Your Image".to_string(),
            word: "NEXT".to_string(),
        }
    }
}

impl PageConfig {
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(Error::Config)
    }

    pub fn letters(&self) -> Vec<char> {
        self.word.chars().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = PageConfig::from_json(r#"{"github_url": "https://github.com/nextblocks"}"#).unwrap();
        assert_eq!(config.github_url, "https://github.com/nextblocks");
        assert_eq!(config.telegram_url, PageConfig::default().telegram_url);
        assert_eq!(config.letters(), vec!['N', 'E', 'X', 'T']);
    }

    #[test]
    fn test_invalid_json() {
        assert!(PageConfig::from_json("{not json").is_err());
    }
}
