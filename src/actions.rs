//! The four setup actions and their dispatcher.
//!
//! `SetupAction` is a closed set: each variant is bound to exactly one
//! operation, so there is no way to select an entry that does nothing.
//! `dispatch` runs the operation and turns the outcome into the status line
//! shown under the menu.

use crate::command_runner::CommandRunner;
use crate::commands::files::CopyFileArgs;
use crate::commands::packages::PackageInstallArgs;
use crate::commands::services::{ServiceAction, ServiceArgs, SysrcArgs};
use crate::config::{SetupConfig, XDG_RUNTIME_EXPORT};
use crate::error::ActionError;
use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{ErrorKind, Write};
use std::os::unix::fs::{DirBuilderExt, OpenOptionsExt};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, error, info};

/// Signature shared by every action operation
pub type Operation = fn(&ActionContext<'_>) -> Result<(), ActionError>;

/// Menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum SetupAction {
    #[strum(serialize = "Install Packages")]
    InstallPackages,
    #[strum(serialize = "Configure Sway")]
    ConfigureSway,
    #[strum(serialize = "Setup seatd")]
    SetupSeatd,
    #[strum(serialize = "Set Environment")]
    SetEnvironment,
}

impl SetupAction {
    /// All actions in menu order
    pub fn all() -> Vec<SetupAction> {
        Self::iter().collect()
    }

    /// Look up an action by its menu title.
    ///
    /// An unknown title is an error, never a silent no-op.
    pub fn from_title(title: &str) -> Result<Self, ActionError> {
        title
            .parse()
            .map_err(|_| ActionError::UnknownAction(title.to_string()))
    }

    pub fn title(&self) -> String {
        self.to_string()
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::InstallPackages => "Install Sway, Wayland, and dependencies",
            Self::ConfigureSway => "Set up initial Sway configuration",
            Self::SetupSeatd => "Enable and start seatd service",
            Self::SetEnvironment => "Set necessary environment variables",
        }
    }

    /// The operation bound to this action
    pub fn operation(&self) -> Operation {
        match self {
            Self::InstallPackages => install_packages,
            Self::ConfigureSway => configure_sway,
            Self::SetupSeatd => setup_seatd,
            Self::SetEnvironment => set_environment,
        }
    }

    pub fn run(&self, ctx: &ActionContext<'_>) -> Result<(), ActionError> {
        (self.operation())(ctx)
    }
}

/// Everything an operation may touch
#[derive(Debug, Clone, Copy)]
pub struct ActionContext<'a> {
    pub config: &'a SetupConfig,
    pub runner: &'a CommandRunner,
}

impl<'a> ActionContext<'a> {
    pub fn new(config: &'a SetupConfig, runner: &'a CommandRunner) -> Self {
        Self { config, runner }
    }
}

// ============================================================================
// Status messages
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
    /// An action is in flight
    Pending,
}

/// One line of feedback shown under the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    /// Failure text is flattened to a single line
    pub fn failure(text: impl AsRef<str>) -> Self {
        Self {
            kind: StatusKind::Failure,
            text: text.as_ref().split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }

    pub fn pending(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Pending,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

/// Run `action` and describe the outcome for the status line.
///
/// Errors stop here; nothing an action does can end the UI loop.
pub fn dispatch(action: SetupAction, ctx: &ActionContext<'_>) -> StatusMessage {
    info!("Dispatching action: {}", action);
    match action.run(ctx) {
        Ok(()) => {
            info!("Action {} completed", action);
            StatusMessage::success(format!("Success: {} completed!", action))
        }
        Err(e) => {
            error!("Action {} failed: {}", action, e);
            StatusMessage::failure(format!("Error: {}", e))
        }
    }
}

// ============================================================================
// Operations
// ============================================================================

/// `pkg install -y sway swaylock swayidle seatd wayland`
fn install_packages(ctx: &ActionContext<'_>) -> Result<(), ActionError> {
    let args = PackageInstallArgs {
        package_manager: ctx.config.package_manager.clone(),
        packages: ctx.config.packages.clone(),
    };
    ctx.runner.run_typed(&args)?;
    Ok(())
}

/// Copy the system Sway template into `~/.config/sway/config` unless the
/// user already has one. Never overwrites.
fn configure_sway(ctx: &ActionContext<'_>) -> Result<(), ActionError> {
    let (config_dir, config_file) = ctx
        .config
        .sway_config_dir()
        .zip(ctx.config.sway_config_file())
        .ok_or(ActionError::HomeDirUnavailable)?;

    if ctx.runner.is_dry_run() {
        info!("[DRY RUN] Would create {}", config_dir.display());
    } else {
        DirBuilder::new()
            .recursive(true)
            .mode(0o755)
            .create(&config_dir)?;
    }

    match fs::metadata(&config_file) {
        Ok(_) => {
            info!("{} already exists, leaving it untouched", config_file.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let args = CopyFileArgs {
                copy_command: ctx.config.copy_command.clone(),
                source: ctx.config.sway_template.clone(),
                destination: config_file,
            };
            ctx.runner.run_typed(&args)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Enable seatd at boot, then start it unless it is already running
fn setup_seatd(ctx: &ActionContext<'_>) -> Result<(), ActionError> {
    let service = ctx.config.seatd_service.clone();

    let enable = SysrcArgs {
        sysrc_command: ctx.config.sysrc_command.clone(),
        service: service.clone(),
    };
    ctx.runner
        .run_typed(&enable)
        .map_err(ActionError::EnableSeatd)?;

    let status = ServiceArgs {
        service_command: ctx.config.service_command.clone(),
        service,
        action: ServiceAction::Status,
    };
    match ctx.runner.run_typed(&status) {
        Ok(_) => {
            info!("{} is already running", status.service);
            return Ok(());
        }
        Err(e) => debug!("{} status check failed, starting it: {}", status.service, e),
    }

    let start = ServiceArgs {
        action: ServiceAction::Start,
        ..status
    };
    ctx.runner
        .run_typed(&start)
        .map_err(ActionError::StartSeatd)?;
    Ok(())
}

/// Append the XDG_RUNTIME_DIR export to `~/.profile`.
///
/// Append-only: repeated runs add the line again.
fn set_environment(ctx: &ActionContext<'_>) -> Result<(), ActionError> {
    let profile = ctx
        .config
        .profile_path()
        .ok_or(ActionError::HomeDirUnavailable)?;

    if ctx.runner.is_dry_run() {
        info!("[DRY RUN] Would append XDG_RUNTIME_DIR export to {}", profile.display());
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .mode(0o644)
        .open(&profile)?;
    file.write_all(XDG_RUNTIME_EXPORT.as_bytes())?;
    info!("Appended XDG_RUNTIME_DIR export to {}", profile.display());
    Ok(())
}
