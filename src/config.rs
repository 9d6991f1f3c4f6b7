//! Runtime configuration for sway-setup.
//!
//! `SetupConfig` is built once at startup (defaults, optionally overlaid by a
//! JSON file) and passed by reference to everything that needs it. Nothing in
//! it changes while the UI is running.

use crate::error::{Result, SwaySetupError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Line appended to the shell profile by "Set Environment"
pub const XDG_RUNTIME_EXPORT: &str = "\nexport XDG_RUNTIME_DIR=/tmp/xdg-runtime-$(id -u)\n";

/// Immutable settings for every action and the command runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetupConfig {
    /// Package manager binary (`pkg` on FreeBSD)
    pub package_manager: String,
    /// Packages passed to `<package_manager> install -y`
    pub packages: Vec<String>,
    /// File copy binary used to install the Sway template
    pub copy_command: String,
    /// System-wide Sway config copied into place when the user has none
    pub sway_template: PathBuf,
    /// rc.conf editing tool
    pub sysrc_command: String,
    /// Service control tool
    pub service_command: String,
    /// Name of the seat management service
    pub seatd_service: String,
    /// Wall-clock limit for every external command
    pub command_timeout_secs: u64,
    /// Home directory the user-level files live under
    pub home_dir: Option<PathBuf>,
    /// Log commands instead of running them
    pub dry_run: bool,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            package_manager: "pkg".to_string(),
            packages: ["sway", "swaylock", "swayidle", "seatd", "wayland"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            copy_command: "cp".to_string(),
            sway_template: PathBuf::from("/usr/local/etc/sway/config"),
            sysrc_command: "sysrc".to_string(),
            service_command: "service".to_string(),
            seatd_service: "seatd".to_string(),
            command_timeout_secs: 10,
            home_dir: std::env::home_dir(),
            dry_run: false,
        }
    }
}

impl SetupConfig {
    /// Load a configuration overlay from a JSON file.
    ///
    /// Fields missing from the file keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            SwaySetupError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: SetupConfig = serde_json::from_str(&content)?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Reject settings that would make every action fail in confusing ways
    pub fn validate(&self) -> Result<()> {
        if self.command_timeout_secs == 0 {
            return Err(SwaySetupError::config("command_timeout_secs must be positive"));
        }
        if self.packages.is_empty() {
            return Err(SwaySetupError::config("packages must not be empty"));
        }
        let programs = [
            ("package_manager", &self.package_manager),
            ("copy_command", &self.copy_command),
            ("sysrc_command", &self.sysrc_command),
            ("service_command", &self.service_command),
            ("seatd_service", &self.seatd_service),
        ];
        for (field, value) in programs {
            if value.trim().is_empty() {
                return Err(SwaySetupError::config(format!("{} must not be empty", field)));
            }
        }
        Ok(())
    }

    /// Same settings rooted at a different home directory
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }

    /// `~/.config/sway`
    pub fn sway_config_dir(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|h| h.join(".config").join("sway"))
    }

    /// `~/.config/sway/config`
    pub fn sway_config_file(&self) -> Option<PathBuf> {
        self.sway_config_dir().map(|d| d.join("config"))
    }

    /// `~/.profile`
    pub fn profile_path(&self) -> Option<PathBuf> {
        self.home_dir.as_ref().map(|h| h.join(".profile"))
    }
}
