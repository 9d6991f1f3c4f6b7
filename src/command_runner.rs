//! Bounded execution of external commands.
//!
//! `CommandRunner` is the only place sway-setup spawns processes. Each call:
//!
//! - starts the program in its own process group (`CommandProcessGroup`)
//! - registers the PID with `ChildRegistry::global()` while it runs
//! - captures stdout and stderr through one shared pipe, interleaved as the
//!   program wrote them
//! - enforces a wall-clock deadline, killing the whole group when it passes
//!
//! Errors are never retried; callers surface them as-is.

use crate::command_traits::CommandArgs;
use crate::config::SetupConfig;
use crate::error::CommandError;
use crate::process_guard::{ChildRegistry, CommandProcessGroup, signal_group};
use nix::sys::signal::Signal;
use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// How often a running child is checked for exit
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Minimum wait for the output reader after the child exits
const OUTPUT_GRACE: Duration = Duration::from_millis(50);

/// Runs external programs under a fixed timeout
#[derive(Debug, Clone)]
pub struct CommandRunner {
    timeout: Duration,
    dry_run: bool,
}

impl CommandRunner {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            dry_run: false,
        }
    }

    /// Runner using the configured timeout and dry-run setting
    pub fn from_config(config: &SetupConfig) -> Self {
        Self::new(config.command_timeout()).with_dry_run(config.dry_run)
    }

    /// In dry-run mode commands are logged and reported as successful
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run a typed command.
    ///
    /// Returns the combined output on exit status 0.
    pub fn run_typed<T: CommandArgs>(&self, command: &T) -> Result<String, CommandError> {
        debug!("Command line: {}", command.describe());
        self.run(command.program(), &command.to_cli_args())
    }

    /// Run `program` with `args`.
    ///
    /// # Returns
    ///
    /// - `Ok(output)` - exit status 0; output is combined stdout/stderr
    /// - `Err(TimedOut)` - the deadline passed; the process group was killed
    /// - `Err(CommandFailed)` - spawn failure, non-zero exit, or signal death
    pub fn run(&self, program: &str, args: &[String]) -> Result<String, CommandError> {
        info!(
            "run: {} args={:?} timeout={}s",
            program,
            args,
            self.timeout.as_secs_f32()
        );

        if self.dry_run {
            info!("[DRY RUN] Skipped: {} {}", program, args.join(" "));
            return Ok(String::new());
        }

        let (mut reader, writer) =
            std::io::pipe().map_err(|e| CommandError::spawn(program, &e))?;
        let writer_err = writer
            .try_clone()
            .map_err(|e| CommandError::spawn(program, &e))?;

        // The Command owns the parent's copies of the write end; it must be
        // dropped before reading or EOF never arrives.
        let mut child = {
            let mut cmd = Command::new(program);
            cmd.args(args)
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(writer_err)
                .in_new_process_group();
            cmd.spawn().map_err(|e| {
                warn!("Failed to spawn {}: {}", program, e);
                CommandError::spawn(program, &e)
            })?
        };
        let _registration = Registration::new(child.id());

        let (output_tx, output_rx) = mpsc::channel();
        thread::spawn(move || {
            let mut buf = Vec::new();
            let _ = reader.read_to_end(&mut buf);
            let _ = output_tx.send(buf);
        });

        let deadline = Instant::now() + self.timeout;
        let status = match wait_until(&mut child, deadline) {
            Ok(Some(status)) => status,
            Ok(None) => {
                warn!("{} exceeded {}s, killing process group", program, self.timeout.as_secs());
                kill_group(child.id());
                let _ = child.wait();
                return Err(self.timed_out(program));
            }
            Err(e) => {
                kill_group(child.id());
                let _ = child.wait();
                return Err(CommandError::spawn(program, &e));
            }
        };

        // A descendant that inherited the pipe can hold it open after the
        // direct child exits; the deadline still applies.
        let remaining = deadline
            .saturating_duration_since(Instant::now())
            .max(OUTPUT_GRACE);
        let output = match output_rx.recv_timeout(remaining) {
            Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => {
                warn!("{} left output pipe open past the deadline", program);
                kill_group(child.id());
                return Err(self.timed_out(program));
            }
        };

        if status.success() {
            debug!("{} completed successfully", program);
            Ok(output)
        } else {
            info!("{} failed: {}", program, status);
            Err(CommandError::CommandFailed {
                program: program.to_string(),
                reason: status.to_string(),
                output,
            })
        }
    }

    fn timed_out(&self, program: &str) -> CommandError {
        CommandError::TimedOut {
            program: program.to_string(),
            timeout: self.timeout,
        }
    }
}

/// Poll `child` until it exits or `deadline` passes (`Ok(None)`)
fn wait_until(
    child: &mut std::process::Child,
    deadline: Instant,
) -> std::io::Result<Option<ExitStatus>> {
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok(Some(status));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn kill_group(pgid: u32) {
    if let Err(e) = signal_group(pgid, Signal::SIGKILL) {
        debug!("SIGKILL to process group {}: {}", pgid, e);
    }
}

/// Keeps a PID in the global child registry for the guard's lifetime
struct Registration {
    pid: u32,
}

impl Registration {
    fn new(pid: u32) -> Self {
        if let Ok(mut registry) = ChildRegistry::global().lock() {
            registry.register(pid);
        }
        Self { pid }
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        if let Ok(mut registry) = ChildRegistry::global().lock() {
            registry.unregister(self.pid);
        }
    }
}
