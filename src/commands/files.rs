//! Type-safe arguments for file copy commands.

use std::path::PathBuf;

use crate::command_traits::CommandArgs;

/// `<copy_command> <source> <destination>`
#[derive(Debug, Clone)]
pub struct CopyFileArgs {
    /// Copy executable (e.g., `cp`)
    pub copy_command: String,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl CommandArgs for CopyFileArgs {
    fn program(&self) -> &str {
        &self.copy_command
    }

    fn to_cli_args(&self) -> Vec<String> {
        vec![
            self.source.display().to_string(),
            self.destination.display().to_string(),
        ]
    }
}
