use super::{AudioTrack, SubtitleTrack};
use serde::{Deserialize, Serialize};

/// Width of the report label column, before the `": "` separator
pub const LABEL_WIDTH: usize = 13;

/// Line-length policy for the subtitle list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapPolicy {
    /// Longest subtitle line emitted without wrapping
    pub single_line_limit: usize,
    /// Maximum length of each wrapped line, indentation included
    pub wrap_width: usize,
}

impl Default for WrapPolicy {
    fn default() -> Self {
        Self {
            single_line_limit: 85,
            wrap_width: 75,
        }
    }
}

/// Pre-formatted audio and subtitle blocks ready for the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackBlocks {
    pub audio: String,
    pub subs: String,
}

/// Render both track blocks
pub fn render_tracks(
    audio: &[AudioTrack],
    subtitles: &[SubtitleTrack],
    policy: &WrapPolicy,
) -> TrackBlocks {
    TrackBlocks {
        audio: render_audio(audio),
        subs: render_subtitles(subtitles, policy),
    }
}

/// Label column for a report field, e.g. `Audio        : `
pub fn field_prefix(label: &str) -> String {
    format!("{:<width$}: ", label, width = LABEL_WIDTH)
}

/// Blank indent matching [`field_prefix`]
pub fn field_indent() -> String {
    " ".repeat(LABEL_WIDTH + 2)
}

/// One line per audio track, in probe order
pub fn render_audio(tracks: &[AudioTrack]) -> String {
    let prefix = field_prefix("Audio");
    if tracks.is_empty() {
        return format!("{}None", prefix);
    }

    let indent = field_indent();
    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| {
            let lead = if i == 0 { &prefix } else { &indent };
            let format = track.format_string();
            if format.is_empty() {
                format!("{}{}", lead, track.label())
            } else {
                format!("{}{} {}", lead, track.label(), format)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Comma-joined subtitle labels under a `Subs : {count}: ` prefix
pub fn render_subtitles(tracks: &[SubtitleTrack], policy: &WrapPolicy) -> String {
    let label = field_prefix("Subs");
    if tracks.is_empty() {
        return format!("{}None", label);
    }

    let prefix = format!("{}{}: ", label, tracks.len());
    let text = tracks
        .iter()
        .map(|t| t.label().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    let single_line = format!("{}{}", prefix, text);
    if single_line.chars().count() <= policy.single_line_limit {
        return single_line;
    }

    let prefix_len = prefix.chars().count();
    let available = policy.wrap_width.saturating_sub(prefix_len).max(1);
    let indent = " ".repeat(prefix_len);

    wrap_words(&text, available)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let lead = if i == 0 { &prefix } else { &indent };
            format!("{}{}", lead, line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Greedy word wrap on whitespace, counting characters.
/// A word longer than `width` gets a line of its own.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
