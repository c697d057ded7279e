//! Post-generation hook execution.
//!
//! Hooks are opaque shell commands run sequentially in the output directory.
//! A failing hook does not stop subsequent hooks; every hook always runs and
//! the caller inspects the result list. No timeout is enforced: a hanging
//! command blocks the runner indefinitely.

use crate::config::Hook;
use std::path::Path;
use std::process::Command;
use std::time::{Duration, Instant};

/// Outcome of one hook execution.
#[derive(Debug, Clone, PartialEq)]
pub struct HookResult {
    pub command: String,
    pub description: String,
    pub success: bool,
    /// Wall-clock time from spawn to exit.
    pub duration: Duration,
    /// Captured error output, or a generic message when none was produced.
    pub error: Option<String>,
}

/// Optional observers invoked synchronously around each hook. They must not
/// alter the command.
#[derive(Default)]
pub struct HookCallbacks<'a> {
    pub on_start: Option<&'a mut dyn FnMut(&Hook)>,
    pub on_complete: Option<&'a mut dyn FnMut(&HookResult)>,
}

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

fn execute(command: &str, cwd: &Path) -> std::result::Result<(), String> {
    let output = shell_command(command)
        .current_dir(cwd)
        .output()
        .map_err(|e| format!("failed to execute '{command}': {e}"))?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        Err(format!("command exited with {}", output.status))
    } else {
        Err(stderr)
    }
}

/// Runs `hooks` sequentially in `cwd`, returning one result per hook in
/// input order.
///
/// Each hook's process runs to completion before the next starts. Execution
/// failures are captured in the corresponding result entry, never returned
/// as an error.
pub fn run_hooks(hooks: &[Hook], cwd: &Path, mut callbacks: HookCallbacks) -> Vec<HookResult> {
    let mut results = Vec::with_capacity(hooks.len());

    for hook in hooks {
        if let Some(on_start) = callbacks.on_start.as_mut() {
            on_start(hook);
        }

        let start = Instant::now();
        let outcome = execute(&hook.command, cwd);
        let duration = start.elapsed();

        let result = HookResult {
            command: hook.command.clone(),
            description: hook.description.clone(),
            success: outcome.is_ok(),
            duration,
            error: outcome.err(),
        };

        if let Some(on_complete) = callbacks.on_complete.as_mut() {
            on_complete(&result);
        }
        results.push(result);
    }

    results
}
