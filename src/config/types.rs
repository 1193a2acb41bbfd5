use serde::{Deserialize, Serialize};

/// TMDB lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TmdbConfig {
    /// API key (v3). Empty disables lookups.
    pub api_key: String,
    /// Language tag sent with every request
    pub language: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: "en-US".to_string(),
            timeout_secs: 15,
        }
    }
}

/// Release defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseConfig {
    /// Source used when none is given and none is detected from the filename
    pub default_source: Option<String>,
    /// Notes written when none are given
    pub notes: Option<String>,
    /// Directory for generated NFO files (defaults to the video's directory)
    pub output_directory: Option<String>,
}
