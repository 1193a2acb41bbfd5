//! TMDB (The Movie Database) lookups.
//!
//! One GET per endpoint with a fixed timeout and no retry. Any transport
//! error, error status, malformed body or missing title is fatal for the run.

use crate::error::AppError;
use crate::release::episode::EpisodeNumber;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

const TMDB_API_URL: &str = "https://api.themoviedb.org/3";
const TMDB_SITE_URL: &str = "https://www.themoviedb.org";

/// Title and reference URL returned by a lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupResult {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct MovieDetail {
    title: Option<String>,
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TvDetail {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EpisodeDetail {
    name: Option<String>,
}

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(api_key: String, language: String, timeout: Duration) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Lookup(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            language,
        })
    }

    /// Look up a movie by TMDB id
    pub async fn movie(&self, id: u64) -> Result<LookupResult, AppError> {
        let detail: MovieDetail = self.get(&format!("/movie/{}", id)).await?;
        movie_result(id, detail)
    }

    /// Look up one episode of a show by TMDB id
    pub async fn episode(&self, show_id: u64, number: EpisodeNumber) -> Result<LookupResult, AppError> {
        let show: TvDetail = self.get(&format!("/tv/{}", show_id)).await?;
        let episode: EpisodeDetail = self
            .get(&format!(
                "/tv/{}/season/{}/episode/{}",
                show_id, number.season, number.episode
            ))
            .await?;
        episode_result(show_id, number, show, episode)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = format!("{}{}", TMDB_API_URL, path);
        debug!("TMDB GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", self.language.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Lookup(format!("TMDB request to {} failed: {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Lookup(format!(
                "TMDB returned {} for {}",
                status, path
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::Lookup(format!("Invalid TMDB response for {}: {}", path, e)))
    }
}

fn required(field: Option<String>, what: &str) -> Result<String, AppError> {
    field
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Lookup(format!("TMDB response has no {}", what)))
}

fn movie_result(id: u64, detail: MovieDetail) -> Result<LookupResult, AppError> {
    let title = required(detail.title, "movie title")?;
    let year = detail
        .release_date
        .as_deref()
        .and_then(|d| d.get(..4))
        .filter(|y| y.chars().all(|c| c.is_ascii_digit()));

    let title = match year {
        Some(year) => format!("{} ({})", title, year),
        None => title,
    };

    Ok(LookupResult {
        title,
        url: format!("{}/movie/{}", TMDB_SITE_URL, id),
    })
}

fn episode_result(
    show_id: u64,
    number: EpisodeNumber,
    show: TvDetail,
    episode: EpisodeDetail,
) -> Result<LookupResult, AppError> {
    let show_name = required(show.name, "show name")?;
    let tag = format!("S{:02}E{:02}", number.season, number.episode);

    let title = match episode.name.map(|n| n.trim().to_string()) {
        Some(name) if !name.is_empty() => format!("{} {} - {}", show_name, tag, name),
        _ => format!("{} {}", show_name, tag),
    };

    Ok(LookupResult {
        title,
        url: format!(
            "{}/tv/{}/season/{}/episode/{}",
            TMDB_SITE_URL, show_id, number.season, number.episode
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(json: &str) -> MovieDetail {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_movie_with_year() {
        let detail = movie(r#"{"id": 603, "title": "The Matrix", "release_date": "1999-03-30"}"#);
        assert_eq!(
            movie_result(603, detail).unwrap(),
            LookupResult {
                title: "The Matrix (1999)".to_string(),
                url: "https://www.themoviedb.org/movie/603".to_string(),
            }
        );
    }

    #[test]
    fn test_movie_without_release_date() {
        let detail = movie(r#"{"title": "Untitled Project", "release_date": ""}"#);
        assert_eq!(movie_result(1, detail).unwrap().title, "Untitled Project");
    }

    #[test]
    fn test_movie_missing_title_is_lookup_error() {
        let detail = movie(r#"{"release_date": "2001-01-01"}"#);
        assert!(matches!(movie_result(1, detail), Err(AppError::Lookup(_))));
    }

    #[test]
    fn test_episode_title_and_url() {
        let show: TvDetail = serde_json::from_str(r#"{"name": "Severance"}"#).unwrap();
        let episode: EpisodeDetail =
            serde_json::from_str(r#"{"name": "Half Loop", "season_number": 1}"#).unwrap();
        let number = EpisodeNumber { season: 1, episode: 2 };

        let result = episode_result(95396, number, show, episode).unwrap();
        assert_eq!(result.title, "Severance S01E02 - Half Loop");
        assert_eq!(
            result.url,
            "https://www.themoviedb.org/tv/95396/season/1/episode/2"
        );
    }

    #[test]
    fn test_episode_without_name() {
        let show = TvDetail { name: Some("Show".to_string()) };
        let episode = EpisodeDetail { name: None };
        let number = EpisodeNumber { season: 10, episode: 3 };
        assert_eq!(episode_result(1, number, show, episode).unwrap().title, "Show S10E03");
    }

    #[test]
    fn test_episode_missing_show_name() {
        let show = TvDetail { name: Some("  ".to_string()) };
        let episode = EpisodeDetail { name: Some("Pilot".to_string()) };
        let number = EpisodeNumber { season: 1, episode: 1 };
        assert!(matches!(
            episode_result(1, number, show, episode),
            Err(AppError::Lookup(_))
        ));
    }
}
