use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;

/// Hosted course API the client talks to unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "https://mist460-course-recommender-apis-surendra.azurewebsites.net";

/// Terminal client for the course recommender API.
#[derive(Debug, Parser)]
#[command(name = "course-recommender", version, about)]
pub struct Cli {
    /// Origin of the course API; endpoints are appended as `{base}/{endpoint}`
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Write logs to this file (the terminal UI owns stdout)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `info` or `course_recommender_tui=debug`
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL without trailing slash
    pub base_url: String,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let trimmed = cli.base_url.trim().trim_end_matches('/');
        let valid_scheme = ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.len() > scheme.len() && trimmed.starts_with(scheme));
        if !valid_scheme {
            return Err(ConfigError::InvalidBaseUrl(cli.base_url));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            log_file: cli.log_file,
            log_level: cli.log_level,
        })
    }

    /// Host part of the base URL, for the header bar.
    pub fn host(&self) -> &str {
        let without_scheme = self
            .base_url
            .split_once("://")
            .map_or(self.base_url.as_str(), |(_, rest)| rest);
        without_scheme.split('/').next().unwrap_or(without_scheme)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("course-recommender").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_point_at_hosted_api() {
        let config = Config::from_cli(parse(&[])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.log_file.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn trailing_slash_stripped() {
        let config = Config::from_cli(parse(&["--base-url", "http://localhost:8000/"])).unwrap();
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn rejects_missing_scheme() {
        let err = Config::from_cli(parse(&["--base-url", "localhost:8000"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl(url) if url == "localhost:8000"));
    }

    #[test]
    fn rejects_bare_scheme() {
        assert!(Config::from_cli(parse(&["--base-url", "https://"])).is_err());
    }

    #[test]
    fn log_options_parsed() {
        let config = Config::from_cli(parse(&[
            "--log-file",
            "/tmp/recommender.log",
            "--log-level",
            "debug",
        ]))
        .unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/recommender.log")));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn host_strips_scheme_and_path() {
        let config = Config {
            base_url: "https://api.example.edu/v1".into(),
            ..Config::default()
        };
        assert_eq!(config.host(), "api.example.edu");
    }
}
