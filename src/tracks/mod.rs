pub mod classifier;
pub mod render;

pub use classifier::{TrackLabel, classify};
pub use render::{TrackBlocks, WrapPolicy, render_tracks};

/// Audio track as reported by the probe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioTrack {
    pub language: String,
    pub title: String,
    pub format: String,
    pub bitrate: String,
    pub channels: String,
    /// Commercial format name, empty when the probe reports none
    pub commercial_name: String,
}

impl AudioTrack {
    pub fn label(&self) -> TrackLabel {
        classify(&self.language, &self.title)
    }

    /// Technical part of the audio line, e.g. `AC-3 640 kb/s @ 6 channels (Dolby Digital)`
    pub fn format_string(&self) -> String {
        let mut parts: Vec<String> = [self.format.trim(), self.bitrate.trim()]
            .into_iter()
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect();

        let channels = self.channels.trim();
        if !channels.is_empty() {
            parts.push(format!("@ {} channels", channels));
        }

        let mut out = parts.join(" ");
        let commercial = self.commercial_name.trim();
        if !commercial.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&format!("({})", commercial));
        }
        out
    }
}

/// Subtitle track as reported by the probe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleTrack {
    pub language: String,
    pub title: String,
}

impl SubtitleTrack {
    pub fn new(language: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            title: title.into(),
        }
    }

    pub fn label(&self) -> TrackLabel {
        classify(&self.language, &self.title)
    }
}
