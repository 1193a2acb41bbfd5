use crate::analyzer::metadata::MediaSummary;
use crate::error::AppError;
use crate::tracks::{AudioTrack, SubtitleTrack};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Full probe result with all tracks in container order
#[derive(Debug, Clone, Default)]
pub struct ProbeResult {
    pub summary: MediaSummary,
    pub audio_tracks: Vec<AudioTrack>,
    pub subtitle_tracks: Vec<SubtitleTrack>,
}

/// Probe a video file using mediainfo
pub fn analyze(input_path: &Path) -> Result<ProbeResult, AppError> {
    let output = run_mediainfo(input_path)?;
    let result = parse_mediainfo(&output)?;
    debug!(
        "Probed {}: {} audio, {} subtitle tracks",
        input_path.display(),
        result.audio_tracks.len(),
        result.subtitle_tracks.len()
    );
    Ok(result)
}

/// Build a probe result from `mediainfo --Full --Output=JSON` output
pub fn parse_mediainfo(output: &str) -> Result<ProbeResult, AppError> {
    let data: MediaInfoOutput = serde_json::from_str(output)
        .map_err(|e| AppError::Probe(format!("Failed to parse mediainfo output: {}", e)))?;
    let tracks = data
        .media
        .ok_or_else(|| AppError::Probe("mediainfo reported no media".to_string()))?
        .track;

    let general = tracks
        .iter()
        .find(|t| t.track_type == "General")
        .ok_or_else(|| AppError::Probe("No General track found".to_string()))?;
    let video = tracks.iter().find(|t| t.track_type == "Video");

    let file_size = general
        .file_size
        .as_deref()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);

    let duration_secs = general
        .duration
        .as_deref()
        .or_else(|| video.and_then(|v| v.duration.as_deref()))
        .and_then(|d| d.trim().parse::<f64>().ok())
        .unwrap_or(0.0);

    let video_bitrate = video
        .and_then(|v| v.bit_rate_string.clone())
        .or_else(|| general.overall_bit_rate_string.clone())
        .unwrap_or_default();

    let summary = MediaSummary {
        file_size,
        duration_secs,
        video_format: video.and_then(|v| v.format.clone()).unwrap_or_default(),
        video_bitrate,
        width: video.and_then(|v| parse_dimension(v.width.as_deref())),
        height: video.and_then(|v| parse_dimension(v.height.as_deref())),
    };

    let audio_tracks = tracks
        .iter()
        .filter(|t| t.track_type == "Audio")
        .map(|t| AudioTrack {
            language: t.language(),
            title: t.title.clone().unwrap_or_default(),
            format: t.format.clone().unwrap_or_default(),
            bitrate: t
                .bit_rate_string
                .clone()
                .or_else(|| t.bit_rate_maximum_string.clone())
                .unwrap_or_default(),
            channels: t.channels.clone().unwrap_or_default(),
            commercial_name: t.format_commercial.clone().unwrap_or_default(),
        })
        .collect();

    let subtitle_tracks = tracks
        .iter()
        .filter(|t| t.track_type == "Text")
        .map(|t| SubtitleTrack::new(t.language(), t.title.clone().unwrap_or_default()))
        .collect();

    Ok(ProbeResult {
        summary,
        audio_tracks,
        subtitle_tracks,
    })
}

/// mediainfo reports dimensions like `1920` or, in some builds, `1 920 pixels`
fn parse_dimension(value: Option<&str>) -> Option<u32> {
    let digits: String = value?.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<u32>().ok()
}

/// Run mediainfo and return its stdout
fn run_mediainfo(input_path: &Path) -> Result<String, AppError> {
    let output = Command::new("mediainfo")
        .args(["--Full", "--Output=JSON"])
        .arg(input_path)
        .output()
        .map_err(|e| AppError::Probe(format!("Failed to execute mediainfo: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AppError::Probe(format!("mediainfo failed: {}", stderr)));
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

// JSON deserialization structures

#[derive(Debug, Deserialize)]
struct MediaInfoOutput {
    media: Option<MediaInfoMedia>,
}

#[derive(Debug, Deserialize)]
struct MediaInfoMedia {
    #[serde(default)]
    track: Vec<MediaInfoTrack>,
}

#[derive(Debug, Deserialize)]
struct MediaInfoTrack {
    #[serde(rename = "@type")]
    track_type: String,
    #[serde(rename = "FileSize")]
    file_size: Option<String>,
    #[serde(rename = "Duration")]
    duration: Option<String>,
    #[serde(rename = "OverallBitRate_String")]
    overall_bit_rate_string: Option<String>,
    #[serde(rename = "Format")]
    format: Option<String>,
    #[serde(rename = "Format_Commercial_IfAny")]
    format_commercial: Option<String>,
    #[serde(rename = "BitRate_String")]
    bit_rate_string: Option<String>,
    #[serde(rename = "BitRate_Maximum_String")]
    bit_rate_maximum_string: Option<String>,
    #[serde(rename = "Channels")]
    channels: Option<String>,
    #[serde(rename = "Width")]
    width: Option<String>,
    #[serde(rename = "Height")]
    height: Option<String>,
    #[serde(rename = "Language")]
    language: Option<String>,
    #[serde(rename = "Language_String")]
    language_string: Option<String>,
    #[serde(rename = "Title")]
    title: Option<String>,
}

impl MediaInfoTrack {
    /// Prefer the full language name over the raw code
    fn language(&self) -> String {
        self.language_string
            .clone()
            .or_else(|| self.language.clone())
            .unwrap_or_default()
    }
}
