use std::path::PathBuf;

use reqwest::Url;

/// Where the tournament JSON lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Remote(Url),
    File(PathBuf),
}

impl DataSource {
    /// Interprets `raw` as a URL when it has an `http`/`https` scheme and as a
    /// filesystem path otherwise.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Remote(url),
            _ => Self::File(PathBuf::from(trimmed)),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Remote(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
