use crate::shared::Result;
use std::ffi::{OsStr, OsString};
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;

/// One external tool invocation: a program and its argument list
///
/// Arguments are passed as a list, never through a shell. The child runs to
/// completion with no timeout. Its stdout goes straight to ours so long tool
/// runs stay visible; only stderr is captured, to describe a failure in a
/// single error log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    program: String,
    args: Vec<OsString>,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Human-readable command line, for error messages only
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().map(|a| a.to_string_lossy().into_owned()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the tool and waits for it to exit
    ///
    /// # Errors
    /// Returns an error if the program cannot be spawned (e.g. not installed)
    /// or exits with a non-zero status.
    pub async fn run(&self) -> Result<()> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                anyhow::anyhow!(
                    "Failed to start '{}': {}. Is it installed and on PATH?",
                    self.program,
                    e
                )
            })?;

        let output = child.wait_with_output().await.map_err(|e| {
            anyhow::anyhow!("Failed to wait for '{}': {}", self.command_line(), e)
        })?;

        if output.status.success() {
            return Ok(());
        }

        anyhow::bail!(
            "Command '{}' {}",
            self.command_line(),
            describe_failure(output.status, &output.stderr)
        )
    }
}

/// Exit status plus the last non-empty stderr line, if any
fn describe_failure(status: ExitStatus, stderr: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    match stderr.lines().map(str::trim).filter(|l| !l.is_empty()).last() {
        Some(line) => format!("returned non-zero {}: {}", status, line),
        None => format!("returned non-zero {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_rendering() {
        let invocation = ToolInvocation::new("git")
            .arg("clone")
            .arg("--depth=1")
            .arg("https://example.com/a.git");
        assert_eq!(
            invocation.command_line(),
            "git clone --depth=1 https://example.com/a.git"
        );
        assert_eq!(invocation.program(), "git");
        assert_eq!(invocation.args().len(), 3);
    }

    #[tokio::test]
    async fn test_run_missing_program() {
        let invocation = ToolInvocation::new("repo-sbom-definitely-not-installed");
        let err = invocation.run().await.unwrap_err();
        assert!(err
            .to_string()
            .contains("Failed to start 'repo-sbom-definitely-not-installed'"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_success() {
        let invocation = ToolInvocation::new("sh").arg("-c").arg("exit 0");
        assert!(invocation.run().await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_failure_reports_last_stderr_line() {
        let invocation = ToolInvocation::new("sh")
            .arg("-c")
            .arg("echo first >&2; echo 'fatal: repository not found' >&2; exit 3");
        let err = invocation.run().await.unwrap_err().to_string();
        assert!(err.contains("returned non-zero"));
        assert!(err.contains("3"));
        assert!(err.ends_with("fatal: repository not found"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_passes_stdout_through() {
        // More output than one pipe buffer holds
        let invocation = ToolInvocation::new("sh")
            .arg("-c")
            .arg("i=0; while [ $i -lt 2000 ]; do echo \"scanning file $i of 2000 ..............................\"; i=$((i+1)); done");
        assert!(invocation.run().await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_failure_ignores_stdout() {
        let invocation = ToolInvocation::new("sh")
            .arg("-c")
            .arg("echo 'progress 100%'; echo 'ERROR: no such revision' >&2; echo 'done'; exit 1");
        let err = invocation.run().await.unwrap_err().to_string();
        assert!(err.ends_with("ERROR: no such revision"));
        assert!(!err.contains("progress"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_failure_without_stderr() {
        let invocation = ToolInvocation::new("sh").arg("-c").arg("exit 1");
        let err = invocation.run().await.unwrap_err().to_string();
        assert!(err.starts_with("Command 'sh -c exit 1' returned non-zero exit status: 1"));
    }
}
