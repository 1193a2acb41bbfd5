use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nfomaker")]
#[command(version)]
#[command(about = "Generate a release NFO for a video file")]
#[command(long_about = "Probes a video file with mediainfo and writes a fixed-layout NFO next to it.

EXAMPLES:
    nfomaker Movie.2020.1080p.AMZN.WEB-DL.mkv
    nfomaker --tmdb-movie 603 --notes \"Proper\" The.Matrix.1999.mkv
    nfomaker --tmdb-tv 95396 Severance.S01E02.1080p.ATVP.WEB-DL.mkv
    nfomaker --title \"Home Movie\" --source WEB --stdout clip.mkv

CONFIGURATION:
    Settings are read from flags, then NFO_* environment variables, then
    config.toml in the user config directory (see --init-config).")]
pub struct Cli {
    /// Video file to describe
    #[arg(value_name = "FILE", required_unless_present = "init_config")]
    pub file: Option<PathBuf>,

    /// Release title, overrides any lookup
    #[arg(long)]
    pub title: Option<String>,

    /// Reference URL, overrides any lookup
    #[arg(long)]
    pub url: Option<String>,

    /// Source platform name or tag (e.g. Amazon, AMZN)
    #[arg(long, env = "NFO_SOURCE")]
    pub source: Option<String>,

    /// Free-text notes
    #[arg(long, env = "NFO_NOTES")]
    pub notes: Option<String>,

    /// Release date as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<String>,

    /// Look up title and URL for this TMDB movie id
    #[arg(long, value_name = "ID", conflicts_with = "tmdb_tv")]
    pub tmdb_movie: Option<u64>,

    /// Look up title and URL for this TMDB show id, episode taken from the filename
    #[arg(long, value_name = "ID")]
    pub tmdb_tv: Option<u64>,

    /// Season number, overrides the filename
    #[arg(long, requires = "tmdb_tv")]
    pub season: Option<u32>,

    /// Episode number, overrides the filename
    #[arg(long, requires = "tmdb_tv")]
    pub episode: Option<u32>,

    /// TMDB API key
    #[arg(long, env = "NFO_TMDB_API_KEY", hide_env_values = true)]
    pub tmdb_api_key: Option<String>,

    /// Output path (defaults to <video stem>.nfo)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the NFO instead of writing it
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Config file path
    #[arg(long, value_name = "PATH", env = "NFO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long)]
    pub init_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_required_unless_init_config() {
        assert!(Cli::try_parse_from(["nfomaker"]).is_err());
        assert!(Cli::try_parse_from(["nfomaker", "--init-config"]).is_ok());
    }

    #[test]
    fn test_movie_and_tv_lookups_conflict() {
        let result =
            Cli::try_parse_from(["nfomaker", "--tmdb-movie", "1", "--tmdb-tv", "2", "a.mkv"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_season_requires_tv_lookup() {
        assert!(Cli::try_parse_from(["nfomaker", "--season", "1", "a.mkv"]).is_err());
        let cli =
            Cli::try_parse_from(["nfomaker", "--tmdb-tv", "7", "--season", "1", "a.mkv"]).unwrap();
        assert_eq!(cli.season, Some(1));
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        assert!(Cli::try_parse_from(["nfomaker", "--stdout", "-o", "x.nfo", "a.mkv"]).is_err());
    }
}
