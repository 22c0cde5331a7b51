use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost";
const DOWNLOAD_FILE_PATH: &str = "index.php/documents/download_file";

/// Per-invocation context handed to every command.
///
/// The library never reads the base URL from the environment on its own; the
/// CLI resolves flags and environment variables and builds this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub home_override: Option<PathBuf>,
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(home_override: Option<PathBuf>, base_url: Option<&str>) -> Self {
        Self {
            home_override,
            base_url: normalize_base_url(base_url.unwrap_or(DEFAULT_BASE_URL)),
        }
    }

    pub fn download_url(&self, file_guid: &str) -> String {
        format!("{}/{DOWNLOAD_FILE_PATH}/{file_guid}", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return DEFAULT_BASE_URL.to_string();
    }
    trimmed.to_string()
}
