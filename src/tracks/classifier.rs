//! Track label classification
//!
//! Turns a probe-reported `(language, title)` pair into a descriptive label.
//! Rules are evaluated in a fixed order and the first one that fires wins:
//! Norwegian written standards, Chinese scripts, accessibility markers for a
//! handful of Western languages, then any parenthesized qualifier in the title.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Label used when neither language nor title carry anything
const UNKNOWN_LABEL: &str = "Unknown";

/// Languages for which accessibility/format markers are looked up in the title
const MARKER_LANGUAGES: [&str; 4] = ["english", "italian", "french", "spanish"];

static MARKER_PATTERNS: Lazy<Vec<(Marker, Regex)>> = Lazy::new(|| {
    [
        (Marker::Sdh, "SDH"),
        (Marker::Cc, "CC"),
        (Marker::Forced, "FORCED"),
        (Marker::British, "BRITISH"),
    ]
    .into_iter()
    .map(|(marker, token)| {
        let pattern = format!(r"(?:^|[\s\[\](){{}}（）]){}(?:$|[\s\[\](){{}}（）])", token);
        let regex = Regex::new(&pattern).expect("marker regex should compile");
        (marker, regex)
    })
    .collect()
});

static PAREN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^()]*)\)").expect("parenthetical regex should compile"));

static FULLWIDTH_PAREN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"（([^（）]*)）").expect("full-width parenthetical regex should compile"));

/// Qualifier attached to a track language
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Simplified,
    Traditional,
    Cantonese,
    Bokmal,
    Nynorsk,
    Sdh,
    Cc,
    Forced,
    British,
    /// Free text taken from a parenthesized part of the title
    Other(String),
}

impl Marker {
    pub fn as_str(&self) -> &str {
        match self {
            Marker::Simplified => "Simplified",
            Marker::Traditional => "Traditional",
            Marker::Cantonese => "Cantonese",
            Marker::Bokmal => "Bokmal",
            Marker::Nynorsk => "Nynorsk",
            Marker::Sdh => "SDH",
            Marker::Cc => "CC",
            Marker::Forced => "Forced",
            Marker::British => "British",
            Marker::Other(text) => text.as_str(),
        }
    }

    /// Norwegian written standards read as part of the language name
    fn is_language_suffix(&self) -> bool {
        matches!(self, Marker::Bokmal | Marker::Nynorsk)
    }
}

/// Classified label for one track
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackLabel {
    /// Language with no detected variant
    Plain(String),
    /// Language plus qualifier
    Variant { language: String, marker: Marker },
    /// Raw token used verbatim when no language is reported
    Fallback(String),
}

impl fmt::Display for TrackLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackLabel::Plain(language) => f.write_str(&capitalize(language)),
            TrackLabel::Variant { language, marker } if marker.is_language_suffix() => {
                write!(f, "{} {}", capitalize(language), marker.as_str())
            }
            TrackLabel::Variant { language, marker } => {
                write!(f, "{} ({})", capitalize(language), marker.as_str())
            }
            TrackLabel::Fallback(token) => f.write_str(token),
        }
    }
}

/// Classify a track from its reported language and title.
///
/// Total over its inputs: ambiguous or missing data degrades to the plain
/// language, or to the first token of the title when the language is empty.
pub fn classify(language: &str, title: &str) -> TrackLabel {
    let language = language.trim();
    let title = title.trim();

    if language.is_empty() {
        return fallback_label(title);
    }
    if title.is_empty() {
        return TrackLabel::Plain(language.to_string());
    }

    let marker = norwegian_marker(language, title)
        .or_else(|| chinese_marker(language, title))
        .or_else(|| accessibility_marker(language, title))
        .or_else(|| parenthetical(&PAREN_PATTERN, title))
        .or_else(|| parenthetical(&FULLWIDTH_PAREN_PATTERN, title));

    match marker {
        Some(marker) => TrackLabel::Variant {
            language: language.to_string(),
            marker,
        },
        None => TrackLabel::Plain(language.to_string()),
    }
}

fn fallback_label(raw: &str) -> TrackLabel {
    let token = raw.split_whitespace().next().unwrap_or(UNKNOWN_LABEL);
    TrackLabel::Fallback(token.to_string())
}

fn norwegian_marker(language: &str, title: &str) -> Option<Marker> {
    if language != "Norwegian" {
        return None;
    }
    let lower = title.to_lowercase();
    if lower.contains("bokmal") || lower.contains("bokmål") {
        Some(Marker::Bokmal)
    } else if lower.contains("nynorsk") {
        Some(Marker::Nynorsk)
    } else {
        None
    }
}

fn chinese_marker(language: &str, title: &str) -> Option<Marker> {
    if language != "Chinese" {
        return None;
    }
    let lower = title.to_lowercase();
    let has_any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    if has_any(&["simplified", "简体", "简"]) {
        Some(Marker::Simplified)
    } else if has_any(&["traditional", "繁體", "繁"]) {
        Some(Marker::Traditional)
    } else if has_any(&["cantonese", "廣東話", "粤语"]) {
        Some(Marker::Cantonese)
    } else {
        None
    }
}

fn accessibility_marker(language: &str, title: &str) -> Option<Marker> {
    let lower = language.to_lowercase();
    if !MARKER_LANGUAGES.contains(&lower.as_str()) {
        return None;
    }
    let upper = title.to_uppercase();
    MARKER_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(&upper))
        .map(|(marker, _)| marker.clone())
}

fn parenthetical(pattern: &Regex, title: &str) -> Option<Marker> {
    pattern
        .captures_iter(title)
        .filter_map(|caps| caps.get(1))
        .map(|inner| inner.as_str().trim())
        .find(|inner| !inner.is_empty())
        .map(|inner| Marker::Other(inner.to_string()))
}

/// Uppercase the first character, leave the rest as reported
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
