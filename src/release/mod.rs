pub mod episode;
pub mod source;
pub mod tmdb;

pub use episode::{EpisodeNumber, parse_episode};
pub use source::resolve_source;
pub use tmdb::{LookupResult, TmdbClient};

use crate::config::Settings;
use crate::error::AppError;
use std::time::Duration;
use tracing::info;

/// Release provenance written to the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseInfo {
    pub title: String,
    pub url: String,
    pub source: String,
}

/// Remote lookup requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Movie(u64),
    Episode { show_id: u64, number: EpisodeNumber },
}

/// Caller-supplied release fields
#[derive(Debug, Clone, Default)]
pub struct ReleaseRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub lookup: Option<Lookup>,
}

impl ReleaseRequest {
    /// Fill in title and URL, querying TMDB when a lookup was requested.
    /// Values given by the caller take precedence over looked-up ones.
    pub async fn resolve(&self, settings: &Settings, source: String) -> Result<ReleaseInfo, AppError> {
        let looked_up = match self.lookup {
            Some(lookup) => Some(run_lookup(lookup, settings).await?),
            None => None,
        };
        Ok(merge(self, looked_up, source))
    }
}

/// Build the TV lookup from a show id and either explicit numbers or the filename
pub fn episode_lookup(
    show_id: u64,
    season: Option<u32>,
    episode: Option<u32>,
    filename: &str,
) -> Result<Lookup, AppError> {
    let parsed = parse_episode(filename);
    let season = season.or(parsed.map(|p| p.season));
    let episode = episode.or(parsed.map(|p| p.episode));

    match (season, episode) {
        (Some(season), Some(episode)) => Ok(Lookup::Episode {
            show_id,
            number: EpisodeNumber { season, episode },
        }),
        _ => Err(AppError::InvalidInput(format!(
            "Cannot find season/episode in '{}'; pass --season and --episode",
            filename
        ))),
    }
}

async fn run_lookup(lookup: Lookup, settings: &Settings) -> Result<LookupResult, AppError> {
    let api_key = settings.tmdb_api_key.clone().ok_or_else(|| {
        AppError::InvalidInput(
            "A TMDB lookup needs an API key (--tmdb-api-key, NFO_TMDB_API_KEY or config)".to_string(),
        )
    })?;
    let client = TmdbClient::new(
        api_key,
        settings.tmdb_language.clone(),
        Duration::from_secs(settings.tmdb_timeout_secs),
    )?;

    let result = match lookup {
        Lookup::Movie(id) => client.movie(id).await?,
        Lookup::Episode { show_id, number } => client.episode(show_id, number).await?,
    };
    info!("TMDB lookup resolved '{}'", result.title);
    Ok(result)
}

fn merge(request: &ReleaseRequest, looked_up: Option<LookupResult>, source: String) -> ReleaseInfo {
    let (lookup_title, lookup_url) = looked_up
        .map(|r| (Some(r.title), Some(r.url)))
        .unwrap_or((None, None));

    let pick = |given: &Option<String>, fetched: Option<String>| {
        given
            .as_ref()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .or(fetched)
            .unwrap_or_default()
    };

    ReleaseInfo {
        title: pick(&request.title, lookup_title),
        url: pick(&request.url, lookup_url),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched() -> Option<LookupResult> {
        Some(LookupResult {
            title: "The Matrix (1999)".to_string(),
            url: "https://www.themoviedb.org/movie/603".to_string(),
        })
    }

    #[test]
    fn test_manual_values_pass_through() {
        let request = ReleaseRequest {
            title: Some("Home Movie".to_string()),
            url: None,
            lookup: None,
        };
        let info = merge(&request, None, "Web".to_string());
        assert_eq!(info.title, "Home Movie");
        assert_eq!(info.url, "");
        assert_eq!(info.source, "Web");
    }

    #[test]
    fn test_caller_title_overrides_lookup() {
        let request = ReleaseRequest {
            title: Some("The Matrix (Remastered)".to_string()),
            ..Default::default()
        };
        let info = merge(&request, fetched(), String::new());
        assert_eq!(info.title, "The Matrix (Remastered)");
        assert_eq!(info.url, "https://www.themoviedb.org/movie/603");
    }

    #[test]
    fn test_blank_caller_value_uses_lookup() {
        let request = ReleaseRequest {
            title: Some(" ".to_string()),
            ..Default::default()
        };
        assert_eq!(merge(&request, fetched(), String::new()).title, "The Matrix (1999)");
    }

    #[test]
    fn test_episode_lookup_from_filename() {
        let lookup = episode_lookup(42, None, None, "Show.S02E05.1080p.mkv").unwrap();
        assert_eq!(
            lookup,
            Lookup::Episode {
                show_id: 42,
                number: EpisodeNumber { season: 2, episode: 5 }
            }
        );
    }

    #[test]
    fn test_episode_lookup_explicit_override() {
        let lookup = episode_lookup(42, Some(3), None, "Show.S02E05.1080p.mkv").unwrap();
        assert_eq!(
            lookup,
            Lookup::Episode {
                show_id: 42,
                number: EpisodeNumber { season: 3, episode: 5 }
            }
        );
    }

    #[test]
    fn test_episode_lookup_without_numbers_is_invalid() {
        let err = episode_lookup(42, None, None, "Show.Special.mkv").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_lookup_without_api_key_is_invalid_input() {
        let settings = Settings {
            tmdb_api_key: None,
            tmdb_language: "en-US".to_string(),
            tmdb_timeout_secs: 5,
            source: None,
            default_source: None,
            notes: String::new(),
            output_directory: None,
            layout: Default::default(),
        };
        let request = ReleaseRequest {
            lookup: Some(Lookup::Movie(603)),
            ..Default::default()
        };
        let err = request.resolve(&settings, String::new()).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
