mod analyzer;
mod cli;
mod config;
mod error;
mod release;
mod report;
mod tracks;
mod utils;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use cli::Cli;
use config::{AppConfig, Settings};
use error::AppError;
use release::{Lookup, ReleaseRequest, episode_lookup, resolve_source};
use report::Report;
use std::process::ExitCode;
use tracing::info;
use utils::{DependencyStatus, init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    let _guard = init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:?}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);

    if cli.init_config {
        AppConfig::default()
            .save(&config_path)
            .context("Failed to write default config")?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    let config = AppConfig::load(&config_path).context("Failed to load config")?;
    let settings = Settings::resolve(&cli, config);

    let video = cli
        .file
        .as_deref()
        .ok_or_else(|| AppError::InvalidInput("No video file given".to_string()))?;
    if !video.is_file() {
        return Err(AppError::InvalidInput(format!("{} is not a file", video.display())).into());
    }
    let filename = video
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    // Caller input is validated before anything is probed or fetched
    let source = resolve_source(
        settings.source.as_deref(),
        &filename,
        settings.default_source.as_deref(),
    )?;
    let release_date = release_date(cli.date.as_deref())?;
    let request = ReleaseRequest {
        title: cli.title.clone(),
        url: cli.url.clone(),
        lookup: requested_lookup(&cli, &settings, &filename)?,
    };

    if !DependencyStatus::check() {
        return Err(AppError::Probe("mediainfo was not found in PATH".to_string()).into());
    }
    let probe = analyzer::analyze(video)
        .with_context(|| format!("Failed to probe {}", video.display()))?;
    let blocks = tracks::render_tracks(&probe.audio_tracks, &probe.subtitle_tracks, &settings.layout);

    let release = request
        .resolve(&settings, source)
        .await
        .context("Failed to resolve release metadata")?;

    let report = Report {
        release_name: report::release_name(video),
        release_date,
        summary: probe.summary,
        tracks: blocks,
        release,
        notes: settings.notes.clone(),
    };

    if cli.stdout {
        print!("{}", report.render());
        return Ok(());
    }

    let output = cli.output.clone().unwrap_or_else(|| {
        report::default_output_path(video, settings.output_directory.as_deref())
    });
    let written = report
        .write(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Report for {} done", video.display());
    println!("{}", written.display());
    Ok(())
}

/// Validate a caller-supplied date, or use today's
fn release_date(date: Option<&str>) -> Result<String, AppError> {
    match date {
        Some(date) => NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map(|d| d.format("%Y-%m-%d").to_string())
            .map_err(|_| AppError::InvalidInput(format!("Invalid date '{}', expected YYYY-MM-DD", date))),
        None => Ok(Local::now().format("%Y-%m-%d").to_string()),
    }
}

/// Pick the TMDB lookup the caller asked for; a lookup without an API key is rejected here
fn requested_lookup(
    cli: &Cli,
    settings: &Settings,
    filename: &str,
) -> Result<Option<Lookup>, AppError> {
    let lookup = match (cli.tmdb_movie, cli.tmdb_tv) {
        (Some(id), _) => Lookup::Movie(id),
        (None, Some(show_id)) => episode_lookup(show_id, cli.season, cli.episode, filename)?,
        (None, None) => return Ok(None),
    };
    if settings.tmdb_api_key.is_none() {
        return Err(AppError::InvalidInput(
            "A TMDB lookup needs an API key (--tmdb-api-key, NFO_TMDB_API_KEY or config)".to_string(),
        ));
    }
    Ok(Some(lookup))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_date_validation() {
        assert_eq!(release_date(Some("2024-02-29")).unwrap(), "2024-02-29");
        assert!(matches!(release_date(Some("29/02/2024")), Err(AppError::InvalidInput(_))));
        assert_eq!(release_date(None).unwrap().len(), 10);
    }

    fn settings_with_key(cli: &Cli) -> Settings {
        let mut settings = Settings::resolve(cli, AppConfig::default());
        settings.tmdb_api_key = Some("key".to_string());
        settings
    }

    #[test]
    fn test_requested_lookup() {
        let cli = Cli::parse_from(["nfomaker", "--tmdb-movie", "603", "a.mkv"]);
        let settings = settings_with_key(&cli);
        assert_eq!(
            requested_lookup(&cli, &settings, "a.mkv").unwrap(),
            Some(Lookup::Movie(603))
        );

        let cli = Cli::parse_from(["nfomaker", "--tmdb-tv", "9", "a.mkv"]);
        let settings = settings_with_key(&cli);
        assert!(requested_lookup(&cli, &settings, "Show.S01E04.mkv").unwrap().is_some());
        assert!(requested_lookup(&cli, &settings, "Show.mkv").is_err());

        let cli = Cli::parse_from(["nfomaker", "a.mkv"]);
        let settings = settings_with_key(&cli);
        assert_eq!(requested_lookup(&cli, &settings, "a.mkv").unwrap(), None);
    }

    #[test]
    fn test_requested_lookup_without_key() {
        let cli = Cli::parse_from(["nfomaker", "--tmdb-tv", "9", "a.mkv"]);
        let mut settings = settings_with_key(&cli);
        settings.tmdb_api_key = None;
        assert!(matches!(
            requested_lookup(&cli, &settings, "Show.S01E04.mkv"),
            Err(AppError::InvalidInput(_))
        ));

        // No lookup requested, no key needed
        let cli = Cli::parse_from(["nfomaker", "a.mkv"]);
        assert_eq!(requested_lookup(&cli, &settings, "a.mkv").unwrap(), None);
    }

    #[tokio::test]
    async fn test_run_rejects_lookup_without_key_before_reading_media() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("Movie.2024.1080p.mkv");
        std::fs::write(&video, b"not a real video").unwrap();
        let config = dir.path().join("absent.toml");

        let args: Vec<std::ffi::OsString> = vec![
            "nfomaker".into(),
            "--tmdb-movie".into(),
            "603".into(),
            "--stdout".into(),
            "--config".into(),
            config.clone().into(),
            video.into(),
        ];
        let mut cli = Cli::parse_from(args);
        cli.tmdb_api_key = None;
        cli.source = None;

        let err = run(cli).await.unwrap_err();
        assert!(
            matches!(err.downcast_ref::<AppError>(), Some(AppError::InvalidInput(_))),
            "unexpected error: {:?}",
            err
        );
        assert!(!config.exists());
    }
}
