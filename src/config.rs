use axum::http::HeaderValue;
use std::{env, path::PathBuf};

pub const DEFAULT_SAMPLE_DATA_PATH: &str = "/tmp/test.bin";
pub const SAMPLE_SIZE: usize = 100 * 1024 * 1024;
pub const LISTEN_ADDR: &str = "0.0.0.0:8080";

const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:4200", "http://lenovo.me.local:4200"];

/// Settings resolved once at startup and shared read-only with every handler.
#[derive(Debug, Clone)]
pub struct Config {
    pub sample_data_path: PathBuf,
    pub sample_size: usize,
    pub allowed_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::new(sample_data_path(env::var("SAMPLE_DATA_PATH").ok()))
    }

    pub fn new(sample_data_path: impl Into<PathBuf>) -> Self {
        Self {
            sample_data_path: sample_data_path.into(),
            sample_size: SAMPLE_SIZE,
            allowed_origins: ALLOWED_ORIGINS
                .into_iter()
                .map(HeaderValue::from_static)
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn is_allowed_origin(&self, origin: &HeaderValue) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }
}

/// Unset and empty both fall back to the default path.
fn sample_data_path(value: Option<String>) -> PathBuf {
    value
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLE_DATA_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_hundred_mebibytes() {
        let config = Config::new("/data/test.bin");
        assert_eq!(config.sample_size, 104_857_600);
        assert_eq!(config.sample_data_path, PathBuf::from("/data/test.bin"));
    }

    #[test]
    fn allow_list_matches_exact_origins_only() {
        let config = Config::new("/data/test.bin");
        assert!(config.is_allowed_origin(&HeaderValue::from_static("http://localhost:4200")));
        assert!(config.is_allowed_origin(&HeaderValue::from_static(
            "http://lenovo.me.local:4200"
        )));
        assert!(!config.is_allowed_origin(&HeaderValue::from_static("http://localhost:4201")));
        assert!(!config.is_allowed_origin(&HeaderValue::from_static("http://evil.example")));
    }

    #[test]
    fn sample_path_falls_back_when_unset_or_empty() {
        assert_eq!(sample_data_path(None), PathBuf::from("/tmp/test.bin"));
        assert_eq!(
            sample_data_path(Some(String::new())),
            PathBuf::from("/tmp/test.bin")
        );
        assert_eq!(
            sample_data_path(Some("/srv/speedtest/sample.bin".to_string())),
            PathBuf::from("/srv/speedtest/sample.bin")
        );
    }

    // Only test that touches SAMPLE_DATA_PATH, so the cases run in sequence.
    #[test]
    fn from_env_reads_sample_data_path() {
        env::remove_var("SAMPLE_DATA_PATH");
        assert_eq!(
            Config::from_env().sample_data_path,
            PathBuf::from(DEFAULT_SAMPLE_DATA_PATH)
        );

        env::set_var("SAMPLE_DATA_PATH", "");
        assert_eq!(
            Config::from_env().sample_data_path,
            PathBuf::from(DEFAULT_SAMPLE_DATA_PATH)
        );

        env::set_var("SAMPLE_DATA_PATH", "/srv/speedtest/sample.bin");
        let config = Config::from_env();
        env::remove_var("SAMPLE_DATA_PATH");

        assert_eq!(
            config.sample_data_path,
            PathBuf::from("/srv/speedtest/sample.bin")
        );
        assert_eq!(config.sample_size, SAMPLE_SIZE);
    }
}
