//! Type-safe arguments for the package manager.

use crate::command_traits::CommandArgs;

/// `<package_manager> install -y <packages...>`
///
/// `-y` is always passed; the TUI has no way to answer pkg's prompt.
#[derive(Debug, Clone)]
pub struct PackageInstallArgs {
    /// Package manager executable (e.g., `pkg`)
    pub package_manager: String,
    /// Packages to install, in order
    pub packages: Vec<String>,
}

impl CommandArgs for PackageInstallArgs {
    fn program(&self) -> &str {
        &self.package_manager
    }

    fn to_cli_args(&self) -> Vec<String> {
        let mut args = vec!["install".to_string(), "-y".to_string()];
        args.extend(self.packages.iter().cloned());
        args
    }
}
