//! Configuration handling for the TUI

use anyhow::Result;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment override for the server address
const SERVER_ENV: &str = "RESUME_FORM_SERVER";

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SUBMIT_PATH: &str = "/submit";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Base URL of the resume server
    pub server_url: Option<String>,
    /// Path the validated form is posted to
    pub submit_path: Option<String>,
    /// Upper bound for every outgoing request
    pub request_timeout_secs: Option<u64>,
    /// Where `resume.pdf` is saved
    pub download_dir: Option<PathBuf>,
    /// Apply the Name rule to the name field while typing
    pub realtime_name_check: Option<bool>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "resume-form", "resume-form-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file location, if the platform has a data dir
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("resume-form-tui.log"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: FormConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Server URL: environment, then file, then default
    pub fn server_url(&self) -> String {
        std::env::var(SERVER_ENV)
            .ok()
            .filter(|s| !s.is_empty())
            .or_else(|| self.server_url.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    pub fn submit_path(&self) -> &str {
        self.submit_path.as_deref().unwrap_or(DEFAULT_SUBMIT_PATH)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        )
    }

    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(|| UserDirs::new().and_then(|dirs| dirs.download_dir().map(PathBuf::from)))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn realtime_name_check(&self) -> bool {
        self.realtime_name_check.unwrap_or(false)
    }
}
