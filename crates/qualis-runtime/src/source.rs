use reqwest::Url;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::FetchError;

/// Where the report is read from when nothing else is configured.
pub const DEFAULT_REPORT_SOURCE: &str = "./output.json";

/// Fixed location of a report document: an HTTP(S) endpoint or a static file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSource {
    Http(Url),
    File(PathBuf),
}

impl ReportSource {
    pub fn parse(raw: &str) -> Result<Self, FetchError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FetchError::InvalidSource("empty source".to_string()));
        }

        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let url = Url::parse(raw).map_err(|e| FetchError::InvalidSource(e.to_string()))?;
            return Ok(ReportSource::Http(url));
        }

        if lower.starts_with("file://") {
            let url = Url::parse(raw).map_err(|e| FetchError::InvalidSource(e.to_string()))?;
            let path = url
                .to_file_path()
                .map_err(|_| FetchError::InvalidSource(format!("not a local file URL: {}", raw)))?;
            return Ok(ReportSource::File(path));
        }

        if let Some((scheme, _)) = raw.split_once("://") {
            return Err(FetchError::InvalidSource(format!(
                "unsupported scheme '{}'",
                scheme
            )));
        }

        Ok(ReportSource::File(PathBuf::from(raw)))
    }
}

impl Default for ReportSource {
    fn default() -> Self {
        ReportSource::File(PathBuf::from(DEFAULT_REPORT_SOURCE))
    }
}

impl FromStr for ReportSource {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ReportSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportSource::Http(url) => write!(f, "{}", url),
            ReportSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_sources() {
        let source = ReportSource::parse("https://dq.example.com/output.json").unwrap();
        assert!(matches!(source, ReportSource::Http(ref url) if url.path() == "/output.json"));

        let source = ReportSource::parse("HTTP://localhost:8080/api/v1/dashboard-data").unwrap();
        assert!(matches!(source, ReportSource::Http(_)));
    }

    #[test]
    fn test_paths_are_file_sources() {
        assert_eq!(
            ReportSource::parse("./output.json").unwrap(),
            ReportSource::File(PathBuf::from("./output.json"))
        );
        assert_eq!(ReportSource::default().to_string(), "./output.json");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url() {
        assert_eq!(
            ReportSource::parse("file:///srv/dq/output.json").unwrap(),
            ReportSource::File(PathBuf::from("/srv/dq/output.json"))
        );
    }

    #[test]
    fn test_rejects_unusable_sources() {
        assert!(matches!(
            ReportSource::parse("   "),
            Err(FetchError::InvalidSource(_))
        ));
        assert!(matches!(
            ReportSource::parse("ftp://host/output.json"),
            Err(FetchError::InvalidSource(_))
        ));
    }
}
