use once_cell::sync::Lazy;
use regex::Regex;

static SEASON_EPISODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bS(\d{1,3})[ ._-]?E(\d{1,4})\b").expect("season/episode regex should compile")
});

static CROSS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\d{1,2})x(\d{2,3})\b").expect("NxNN regex should compile")
});

/// Season and episode number parsed from a release filename
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeNumber {
    pub season: u32,
    pub episode: u32,
}

/// Parse `S01E02` (any case, optional separator) or `1x02` from a filename
pub fn parse_episode(filename: &str) -> Option<EpisodeNumber> {
    let caps = SEASON_EPISODE_PATTERN
        .captures(filename)
        .or_else(|| CROSS_PATTERN.captures(filename))?;
    let season = caps.get(1)?.as_str().parse().ok()?;
    let episode = caps.get(2)?.as_str().parse().ok()?;
    Some(EpisodeNumber { season, episode })
}
