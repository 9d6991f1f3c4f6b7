//! Integration tests for the four setup actions
//!
//! The system tools (`pkg`, `sysrc`, `service`) are replaced by small shell
//! scripts that record their arguments, so each action runs end to end
//! against a temporary home directory.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use swaysetup::config::XDG_RUNTIME_EXPORT;
use swaysetup::{ActionContext, CommandRunner, SetupAction, SetupConfig, StatusKind, dispatch};
use tempfile::TempDir;

/// Scripts are written and executed under one lock so no concurrent fork
/// inherits a write handle to a script about to be exec'd (ETXTBSY).
static SERIAL: Mutex<()> = Mutex::new(());

fn serial() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

struct Fixture {
    dir: TempDir,
    config: SetupConfig,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        fs::create_dir(&home).unwrap();
        let config = SetupConfig {
            command_timeout_secs: 5,
            ..SetupConfig::default()
        }
        .with_home_dir(home);
        Self { dir, config }
    }

    fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    /// Path of the file a fake tool appends its arguments to
    fn log(&self, tool: &str) -> PathBuf {
        self.dir.path().join(format!("{}.log", tool))
    }

    /// Install an executable script that logs "$@" and then runs `body`
    fn fake_tool(&self, tool: &str, body: &str) -> String {
        let path = self.dir.path().join(tool);
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> '{}'\n{}\n",
            self.log(tool).display(),
            body
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.display().to_string()
    }

    fn logged(&self, tool: &str) -> Vec<String> {
        fs::read_to_string(self.log(tool))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn dispatch(&self, action: SetupAction) -> swaysetup::StatusMessage {
        let runner = CommandRunner::from_config(&self.config);
        let ctx = ActionContext::new(&self.config, &runner);
        dispatch(action, &ctx)
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

// =============================================================================
// Install Packages
// =============================================================================

#[test]
fn test_install_packages_passes_package_list() {
    let _guard = serial();
    let mut fx = Fixture::new();
    fx.config.package_manager = fx.fake_tool("pkg", "exit 0");

    let message = fx.dispatch(SetupAction::InstallPackages);

    assert_eq!(message.kind, StatusKind::Success);
    assert_eq!(message.text, "Success: Install Packages completed!");
    assert_eq!(
        fx.logged("pkg"),
        vec!["install -y sway swaylock swayidle seatd wayland"]
    );
}

#[test]
fn test_install_packages_failure_includes_output() {
    let _guard = serial();
    let mut fx = Fixture::new();
    fx.config.package_manager =
        fx.fake_tool("pkg", "echo 'pkg: No packages available'\nexit 70");

    let message = fx.dispatch(SetupAction::InstallPackages);

    assert_eq!(message.kind, StatusKind::Failure);
    assert!(message.text.starts_with("Error: command failed"));
    assert!(message.text.contains("No packages available"));
    assert!(!message.text.contains('\n'));
}

#[test]
fn test_install_packages_times_out() {
    let _guard = serial();
    let mut fx = Fixture::new();
    fx.config.command_timeout_secs = 1;
    fx.config.package_manager = fx.fake_tool("pkg", "sleep 10");

    let started = std::time::Instant::now();
    let message = fx.dispatch(SetupAction::InstallPackages);

    assert_eq!(message.kind, StatusKind::Failure);
    assert!(message.text.contains("timed out"), "{}", message.text);
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}

// =============================================================================
// Configure Sway
// =============================================================================

#[test]
fn test_configure_sway_copies_template() {
    let _guard = serial();
    let mut fx = Fixture::new();
    let template = fx.dir.path().join("sway.template");
    fs::write(&template, "set $mod Mod4\n").unwrap();
    fx.config.sway_template = template;

    let message = fx.dispatch(SetupAction::ConfigureSway);

    assert_eq!(message.kind, StatusKind::Success, "{}", message.text);
    let installed = fx.home().join(".config/sway/config");
    assert_eq!(read(&installed), "set $mod Mod4\n");
}

#[test]
fn test_configure_sway_leaves_existing_config_untouched() {
    let _guard = serial();
    let mut fx = Fixture::new();
    let sway_dir = fx.home().join(".config/sway");
    fs::create_dir_all(&sway_dir).unwrap();
    fs::write(sway_dir.join("config"), "# mine\n").unwrap();
    // Any copy attempt would fail the action
    fx.config.copy_command = "false".to_string();

    let message = fx.dispatch(SetupAction::ConfigureSway);

    assert_eq!(message.kind, StatusKind::Success, "{}", message.text);
    assert_eq!(read(&sway_dir.join("config")), "# mine\n");
}

#[test]
fn test_configure_sway_missing_template_fails() {
    let _guard = serial();
    let mut fx = Fixture::new();
    fx.config.sway_template = fx.dir.path().join("does-not-exist");

    let message = fx.dispatch(SetupAction::ConfigureSway);

    assert_eq!(message.kind, StatusKind::Failure);
    assert!(message.text.contains("command failed"));
    // The directory is still created
    assert!(fx.home().join(".config/sway").is_dir());
    assert!(!fx.home().join(".config/sway/config").exists());
}

// =============================================================================
// Setup seatd
// =============================================================================

#[test]
fn test_setup_seatd_already_running() {
    let _guard = serial();
    let mut fx = Fixture::new();
    fx.config.sysrc_command = fx.fake_tool("sysrc", "exit 0");
    fx.config.service_command = fx.fake_tool("service", "exit 0");

    let message = fx.dispatch(SetupAction::SetupSeatd);

    assert_eq!(message.text, "Success: Setup seatd completed!");
    assert_eq!(fx.logged("sysrc"), vec!["seatd_enable=YES"]);
    assert_eq!(fx.logged("service"), vec!["seatd status"]);
}

#[test]
fn test_setup_seatd_starts_stopped_service() {
    let _guard = serial();
    let mut fx = Fixture::new();
    fx.config.sysrc_command = fx.fake_tool("sysrc", "exit 0");
    fx.config.service_command = fx.fake_tool("service", "[ \"$2\" = start ]");

    let message = fx.dispatch(SetupAction::SetupSeatd);

    assert_eq!(message.kind, StatusKind::Success, "{}", message.text);
    assert_eq!(fx.logged("service"), vec!["seatd status", "seatd start"]);
}

#[test]
fn test_setup_seatd_enable_failure_skips_service() {
    let _guard = serial();
    let mut fx = Fixture::new();
    fx.config.sysrc_command = fx.fake_tool("sysrc", "echo 'sysrc: permission denied'\nexit 1");
    fx.config.service_command = fx.fake_tool("service", "exit 0");

    let message = fx.dispatch(SetupAction::SetupSeatd);

    assert_eq!(message.kind, StatusKind::Failure);
    assert!(message.text.starts_with("Error: failed to enable seatd"));
    assert!(message.text.contains("permission denied"));
    assert!(fx.logged("service").is_empty());
}

#[test]
fn test_setup_seatd_start_failure() {
    let _guard = serial();
    let mut fx = Fixture::new();
    fx.config.sysrc_command = fx.fake_tool("sysrc", "exit 0");
    fx.config.service_command =
        fx.fake_tool("service", "echo \"seatd does not exist in /etc/rc.d\"\nexit 1");

    let message = fx.dispatch(SetupAction::SetupSeatd);

    assert_eq!(message.kind, StatusKind::Failure);
    assert!(message.text.starts_with("Error: failed to start seatd"));
    assert!(message.text.contains("does not exist"));
    assert_eq!(fx.logged("service"), vec!["seatd status", "seatd start"]);
}

// =============================================================================
// Set Environment
// =============================================================================

#[test]
fn test_set_environment_appends_export() {
    let fx = Fixture::new();
    let profile = fx.home().join(".profile");
    fs::write(&profile, "export EDITOR=vi\n").unwrap();

    let message = fx.dispatch(SetupAction::SetEnvironment);

    assert_eq!(message.text, "Success: Set Environment completed!");
    assert_eq!(read(&profile), format!("export EDITOR=vi\n{}", XDG_RUNTIME_EXPORT));
}

#[test]
fn test_set_environment_twice_appends_twice() {
    let fx = Fixture::new();

    fx.dispatch(SetupAction::SetEnvironment);
    fx.dispatch(SetupAction::SetEnvironment);

    let contents = read(&fx.home().join(".profile"));
    assert_eq!(
        contents.matches("export XDG_RUNTIME_DIR=/tmp/xdg-runtime-$(id -u)").count(),
        2
    );
}

#[test]
fn test_set_environment_creates_profile_mode_0644() {
    let fx = Fixture::new();
    fx.dispatch(SetupAction::SetEnvironment);

    let mode = fs::metadata(fx.home().join(".profile"))
        .unwrap()
        .permissions()
        .mode();
    // umask may only clear bits
    assert_eq!(mode & 0o7133, 0);
    assert_ne!(mode & 0o600, 0);
}

// =============================================================================
// Dry run
// =============================================================================

#[test]
fn test_dry_run_changes_nothing() {
    let _guard = serial();
    let mut fx = Fixture::new();
    fx.config.package_manager = fx.fake_tool("pkg", "exit 0");
    fx.config.sysrc_command = fx.fake_tool("sysrc", "exit 0");
    fx.config.service_command = fx.fake_tool("service", "exit 0");
    fx.config.dry_run = true;

    for action in SetupAction::all() {
        let message = fx.dispatch(action);
        assert!(message.is_success(), "{}: {}", action, message.text);
    }

    assert!(fx.logged("pkg").is_empty());
    assert!(fx.logged("sysrc").is_empty());
    assert!(fx.logged("service").is_empty());
    assert!(!fx.home().join(".config").exists());
    assert!(!fx.home().join(".profile").exists());
}
