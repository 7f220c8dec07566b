//! Configuration and request-assembly errors.

use std::path::{Path, PathBuf};

/// A rejected configuration value or an unreadable config file.
///
/// `path` names the config file when the error came from one, and `setting`
/// names the dotted key (`generation.temperature`) that failed validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Config file the error was found in
    pub path: Option<PathBuf>,
    /// Dotted key of the rejected setting
    pub setting: Option<&'static str>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use postcraft_error::ConfigError;
    ///
    /// let err = ConfigError::new("must be between 0 and 2")
    ///     .with_setting("generation.temperature")
    ///     .with_path("postcraft.toml");
    /// let shown = err.to_string();
    /// assert!(shown.contains("generation.temperature"));
    /// assert!(shown.contains("postcraft.toml"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            path: None,
            setting: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the config file the error came from.
    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Attach the dotted key of the rejected setting.
    pub fn with_setting(mut self, setting: &'static str) -> Self {
        self.setting = Some(setting);
        self
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration Error: ")?;
        if let Some(setting) = self.setting {
            write!(f, "{}: ", setting)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(path) = &self.path {
            write!(f, " (config file {})", path.display())?;
        }
        write!(f, " at line {} in {}", self.line, self.file)
    }
}

impl std::error::Error for ConfigError {}
