//! NFO document assembly.

use crate::analyzer::MediaSummary;
use crate::error::AppError;
use crate::release::ReleaseInfo;
use crate::tracks::TrackBlocks;
use crate::tracks::render::field_prefix;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything that goes into one NFO file
#[derive(Debug, Clone)]
pub struct Report {
    pub release_name: String,
    pub release_date: String,
    pub summary: MediaSummary,
    pub tracks: TrackBlocks,
    pub release: ReleaseInfo,
    pub notes: String,
}

impl Report {
    /// Render the fixed-layout document, one field per line
    pub fn render(&self) -> String {
        let fields: [(&str, String); 8] = [
            ("Release name", self.release_name.clone()),
            ("Release Date", self.release_date.clone()),
            ("Title", self.release.title.clone()),
            ("Size", self.summary.size_string()),
            ("Duration", self.summary.duration_string()),
            ("Video", self.summary.video_string()),
            ("Bitrate", self.summary.bitrate_string()),
            ("Resolution", self.summary.resolution_string()),
        ];

        let mut lines: Vec<String> = fields
            .iter()
            .map(|(label, value)| field_line(label, value))
            .collect();
        lines.push(self.tracks.audio.clone());
        lines.push(self.tracks.subs.clone());
        lines.push(field_line("Source", &self.release.source));
        lines.push(field_line("URL", &self.release.url));
        lines.push(field_line("Notes", &self.notes));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Write the document, returning the path written
    pub fn write(&self, path: &Path) -> Result<PathBuf, AppError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render())?;
        info!("Wrote {}", path.display());
        Ok(path.to_path_buf())
    }
}

/// `Label        : value`, without trailing spaces for empty values
fn field_line(label: &str, value: &str) -> String {
    format!("{}{}", field_prefix(label), value).trim_end().to_string()
}

/// File stem of the video, used as the release name
pub fn release_name(video: &Path) -> String {
    video
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// `<dir>/<stem>.nfo`, where dir is the configured output directory or the video's own
pub fn default_output_path(video: &Path, output_directory: Option<&Path>) -> PathBuf {
    let dir = output_directory
        .map(Path::to_path_buf)
        .or_else(|| video.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(format!("{}.nfo", release_name(video)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracks::{AudioTrack, SubtitleTrack, WrapPolicy, render_tracks};

    fn report() -> Report {
        let audio = vec![AudioTrack {
            language: "english".to_string(),
            title: String::new(),
            format: "AC-3".to_string(),
            bitrate: "640 kb/s".to_string(),
            channels: "6".to_string(),
            commercial_name: "Dolby Digital".to_string(),
        }];
        let subs = vec![
            SubtitleTrack::new("English", ""),
            SubtitleTrack::new("Spanish", "Latin America (Latino)"),
            SubtitleTrack::new("English", "[SDH]"),
        ];

        Report {
            release_name: "Movie.2020.1080p.AMZN.WEB-DL".to_string(),
            release_date: "2026-10-18".to_string(),
            summary: MediaSummary {
                file_size: 1024 * 1024,
                duration_secs: 6724.0,
                video_format: "AVC".to_string(),
                video_bitrate: "5 000 kb/s".to_string(),
                width: Some(1920),
                height: Some(1080),
            },
            tracks: render_tracks(&audio, &subs, &WrapPolicy::default()),
            release: ReleaseInfo {
                title: "Movie (2020)".to_string(),
                url: "https://www.themoviedb.org/movie/1".to_string(),
                source: "Amazon".to_string(),
            },
            notes: String::new(),
        }
    }

    #[test]
    fn test_render_layout() {
        let expected = "\
Release name : Movie.2020.1080p.AMZN.WEB-DL
Release Date : 2026-10-18
Title        : Movie (2020)
Size         : 1 MiB
Duration     : 1h 52min 04s
Video        : AVC
Bitrate      : 5 000 kb/s
Resolution   : 1920x1080
Audio        : English AC-3 640 kb/s @ 6 channels (Dolby Digital)
Subs         : 3: English, Spanish (Latino), English (SDH)
Source       : Amazon
URL          : https://www.themoviedb.org/movie/1
Notes        :
";
        assert_eq!(report().render(), expected);
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("movie.nfo");
        let written = report().write(&path).unwrap();
        assert_eq!(written, path);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), report().render());
    }

    #[test]
    fn test_default_output_path() {
        let video = Path::new("/media/Movie.2020.mkv");
        assert_eq!(
            default_output_path(video, None),
            PathBuf::from("/media/Movie.2020.nfo")
        );
        assert_eq!(
            default_output_path(video, Some(Path::new("/srv/nfo"))),
            PathBuf::from("/srv/nfo/Movie.2020.nfo")
        );
    }
}
