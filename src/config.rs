//! Backend connection settings.
//!
//! The managed backend is configured from a JSON file shaped like the
//! project settings its console hands out:
//!
//! ```json
//! {
//!   "apiKey": "AIza...",
//!   "authDomain": "taskdeck.example.com",
//!   "projectId": "taskdeck",
//!   "storageBucket": "taskdeck.appspot.com",
//!   "messagingSenderId": "1234567890",
//!   "appId": "1:1234567890:web:abc",
//!   "tasksCollection": "tasks"
//! }
//! ```
//!
//! `tasksCollection` is optional.

use crate::task::adapters::document::TASKS_COLLECTION;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading [`BackendConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be opened or read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path that was parsed.
        path: String,
        /// Underlying decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// A required setting is empty.
    #[error("config setting `{0}` must not be empty")]
    Invalid(&'static str),
}

/// Connection settings for the managed identity and document backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    /// Public API key.
    pub api_key: String,
    /// Authentication domain.
    #[serde(default)]
    pub auth_domain: String,
    /// Backend project identifier.
    pub project_id: String,
    /// File storage bucket.
    #[serde(default)]
    pub storage_bucket: String,
    /// Messaging sender identifier.
    #[serde(default)]
    pub messaging_sender_id: String,
    /// Application identifier.
    #[serde(default)]
    pub app_id: String,
    /// Collection holding task documents.
    #[serde(default = "default_tasks_collection")]
    pub tasks_collection: String,
}

fn default_tasks_collection() -> String {
    TASKS_COLLECTION.to_owned()
}

impl BackendConfig {
    /// Settings for a local, in-process backend.
    #[must_use]
    pub fn local() -> Self {
        Self {
            api_key: "local".to_owned(),
            auth_domain: "localhost".to_owned(),
            project_id: "taskdeck-local".to_owned(),
            storage_bucket: String::new(),
            messaging_sender_id: String::new(),
            app_id: String::new(),
            tasks_collection: default_tasks_collection(),
        }
    }

    /// Reads and validates settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, is not valid
    /// JSON, or leaves a required setting empty.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let contents = read_file(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&contents).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_string(),
                source,
            },
            other => other,
        })
    }

    /// Parses and validates settings from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] for empty required settings.
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents).map_err(|source| ConfigError::Parse {
            path: "<inline>".to_owned(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the required settings are present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first empty setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Invalid("apiKey"));
        }
        if self.project_id.trim().is_empty() {
            return Err(ConfigError::Invalid("projectId"));
        }
        if self.tasks_collection.trim().is_empty() {
            return Err(ConfigError::Invalid("tasksCollection"));
        }
        Ok(())
    }
}

fn read_file(path: &Utf8Path) -> std::io::Result<String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| std::io::Error::other("config path must include a file name"))?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.read_to_string(file_name)
}
