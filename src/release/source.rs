//! Source platform names and scene tags.

use crate::error::AppError;

/// A release source with its scene tag and display name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    pub tag: &'static str,
    pub name: &'static str,
}

/// Known platforms. Generic sources come last so a filename carrying both a
/// service tag and `WEB` resolves to the service.
pub const PLATFORMS: &[Platform] = &[
    Platform { tag: "AMZN", name: "Amazon" },
    Platform { tag: "NF", name: "Netflix" },
    Platform { tag: "DSNP", name: "Disney+" },
    Platform { tag: "ATVP", name: "Apple TV+" },
    Platform { tag: "HMAX", name: "HBO Max" },
    Platform { tag: "MAX", name: "Max" },
    Platform { tag: "HULU", name: "Hulu" },
    Platform { tag: "PMTP", name: "Paramount+" },
    Platform { tag: "PCOK", name: "Peacock" },
    Platform { tag: "iT", name: "iTunes" },
    Platform { tag: "CR", name: "Crunchyroll" },
    Platform { tag: "YT", name: "YouTube" },
    Platform { tag: "iP", name: "BBC iPlayer" },
    Platform { tag: "BluRay", name: "Blu-ray" },
    Platform { tag: "WEB", name: "Web" },
];

/// Look up a caller-supplied source by tag or name, ignoring case
pub fn parse_platform(input: &str) -> Result<Platform, AppError> {
    let input = input.trim();
    PLATFORMS
        .iter()
        .find(|p| p.tag.eq_ignore_ascii_case(input) || p.name.eq_ignore_ascii_case(input))
        .copied()
        .ok_or_else(|| {
            let known: Vec<&str> = PLATFORMS.iter().map(|p| p.name).collect();
            AppError::InvalidInput(format!(
                "Unknown source '{}'. Known sources: {}",
                input,
                known.join(", ")
            ))
        })
}

/// Detect a platform from the scene tags in a release filename
pub fn detect_platform(filename: &str) -> Option<Platform> {
    let tokens: Vec<&str> = filename
        .split(|c: char| matches!(c, '.' | '_' | '-' | ' ' | '[' | ']' | '(' | ')'))
        .filter(|t| !t.is_empty())
        .collect();

    PLATFORMS
        .iter()
        .find(|p| tokens.contains(&p.tag))
        .copied()
}

/// Pick the source name: explicit value, then filename detection, then the
/// configured default. An explicit or default value that names no known
/// platform is rejected.
pub fn resolve_source(
    explicit: Option<&str>,
    filename: &str,
    default: Option<&str>,
) -> Result<String, AppError> {
    if let Some(explicit) = explicit {
        return parse_platform(explicit).map(|p| p.name.to_string());
    }
    if let Some(platform) = detect_platform(filename) {
        return Ok(platform.name.to_string());
    }
    match default {
        Some(default) => parse_platform(default).map(|p| p.name.to_string()),
        None => Ok(String::new()),
    }
}
