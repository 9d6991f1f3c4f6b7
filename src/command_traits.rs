//! Type-safe command argument contracts.
//!
//! Every external program sway-setup invokes is described by a struct that
//! implements `CommandArgs`. The struct definition is the contract: the
//! compiler catches a missing `-y` or a misspelled service verb, not the
//! user's terminal.

/// Trait for typed external command invocations.
///
/// # Contract
///
/// - `program()`: the executable, resolved through `PATH` at spawn time.
/// - `to_cli_args()`: arguments exactly as the program expects them.
/// - `describe()`: the full command line for logs and dry-run output.
pub trait CommandArgs {
    /// Executable name or path
    fn program(&self) -> &str;

    /// Convert struct fields to command-line arguments.
    ///
    /// Example: `["install", "-y", "sway", "seatd"]`
    fn to_cli_args(&self) -> Vec<String>;

    /// Human-readable command line
    fn describe(&self) -> String {
        let mut line = self.program().to_string();
        for arg in self.to_cli_args() {
            line.push(' ');
            line.push_str(&arg);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl CommandArgs for Echo {
        fn program(&self) -> &str {
            "echo"
        }

        fn to_cli_args(&self) -> Vec<String> {
            vec!["hello".to_string(), "world".to_string()]
        }
    }

    #[test]
    fn test_describe_joins_program_and_args() {
        assert_eq!(Echo.describe(), "echo hello world");
    }
}
