use thiserror::Error;

/// Errors surfaced by the NFO pipeline.
///
/// Track classification and rendering never fail; every variant here comes
/// from caller input, the probe, a remote lookup or the filesystem.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Release lookup failed: {0}")]
    Lookup(String),

    #[error("Media probe failed: {0}")]
    Probe(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}
