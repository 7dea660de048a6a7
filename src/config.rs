use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::domain::ClientError;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: Url,
    pub profile: String,
    pub session_file: PathBuf,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ClientError> {
        let profile = env::var("PROFILE").unwrap_or_else(|_| "default".to_string());
        Self::for_profile(profile)
    }

    /// Build from the environment with an explicit profile (the `--profile` flag)
    pub fn for_profile(profile: String) -> Result<Self, ClientError> {
        check_profile(&profile)?;

        let raw_url = env::var("API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(raw_url.trim())
            .map_err(|e| ClientError::Config(format!("API_URL '{}': {}", raw_url, e)))?;

        let session_file = match env::var("SESSION_FILE") {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_session_path(&profile)?,
        };

        Ok(Self {
            api_url,
            session_file,
            timeout: Duration::from_secs(
                env::var("HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            profile,
        })
    }
}

/// Profile names end up in a file name: no separators, no dot-only names
fn check_profile(profile: &str) -> Result<(), ClientError> {
    let trimmed = profile.trim();
    if trimmed.is_empty()
        || trimmed.chars().all(|c| c == '.')
        || profile.contains(['/', '\\'])
    {
        return Err(ClientError::Config(format!(
            "Invalid profile name '{}'",
            profile
        )));
    }
    Ok(())
}

fn session_file_name(profile: &str) -> String {
    if profile == "default" {
        "session.json".to_string()
    } else {
        format!("session_{}.json", profile)
    }
}

/// Per-OS cache location of the session file
fn default_session_path(profile: &str) -> Result<PathBuf, ClientError> {
    let filename = session_file_name(profile);
    // On macOS: ~/Library/Caches/LibraryDesk/session.json
    // On Linux: ~/.cache/library-desk/session.json
    // On Windows: %LOCALAPPDATA%\LibraryDesk\session.json

    #[cfg(target_os = "macos")]
    {
        let home = env::var("HOME").map_err(|_| ClientError::Config("HOME not set".into()))?;
        Ok(PathBuf::from(home)
            .join("Library")
            .join("Caches")
            .join("LibraryDesk")
            .join(filename))
    }

    #[cfg(target_os = "windows")]
    {
        let appdata = env::var("LOCALAPPDATA")
            .map_err(|_| ClientError::Config("LOCALAPPDATA not set".into()))?;
        Ok(PathBuf::from(appdata).join("LibraryDesk").join(filename))
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let home = env::var("HOME").map_err(|_| ClientError::Config("HOME not set".into()))?;
        Ok(PathBuf::from(home)
            .join(".cache")
            .join("library-desk")
            .join(filename))
    }
}
