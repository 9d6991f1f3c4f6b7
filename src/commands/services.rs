//! Type-safe arguments for rc.conf and service control tools.
//!
//! - `SysrcArgs` for `sysrc <name>_enable=YES`
//! - `ServiceArgs` for `service <name> <status|start>`

use strum::{Display, EnumString};

use crate::command_traits::CommandArgs;

// ============================================================================
// sysrc
// ============================================================================

/// Persist `<service>_enable=YES` in rc.conf so the service starts at boot.
#[derive(Debug, Clone)]
pub struct SysrcArgs {
    /// sysrc executable
    pub sysrc_command: String,
    /// Service whose `_enable` knob is set
    pub service: String,
}

impl CommandArgs for SysrcArgs {
    fn program(&self) -> &str {
        &self.sysrc_command
    }

    fn to_cli_args(&self) -> Vec<String> {
        vec![format!("{}_enable=YES", self.service)]
    }
}

// ============================================================================
// service
// ============================================================================

/// Verbs passed to `service(8)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum ServiceAction {
    /// Exit status 0 when the service is running
    Status,
    Start,
}

/// `<service_command> <service> <action>`
#[derive(Debug, Clone)]
pub struct ServiceArgs {
    /// service executable
    pub service_command: String,
    pub service: String,
    pub action: ServiceAction,
}

impl CommandArgs for ServiceArgs {
    fn program(&self) -> &str {
        &self.service_command
    }

    fn to_cli_args(&self) -> Vec<String> {
        vec![self.service.clone(), self.action.to_string()]
    }
}
