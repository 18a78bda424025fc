//! External tool invocation
//!
//! Every shell/build-tool call made by the console goes through a
//! [`ToolInvoker`]. The process implementation blocks the calling thread until
//! the child exits; failures come back as data, never as errors.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, warn};

use crate::error::{CoreError, Result};

/// A command line plus the directory it runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    quiet: bool,
}

impl ToolCommand {
    /// Create a new command for `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            quiet: false,
        }
    }

    /// Append one argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in `dir` instead of the console's working directory
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Capture output without echoing the command or its output
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Program followed by its arguments
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().join(" "))?;
        if let Some(cwd) = &self.cwd {
            write!(f, " (in {})", cwd.display())?;
        }
        Ok(())
    }
}

/// Outcome of one tool invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Exit code, `None` when the process did not start or was killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
    /// Why the process could not be started
    pub spawn_error: Option<String>,
}

impl Invocation {
    /// A process that ran and exited with `code`
    pub fn exited(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
            spawn_error: None,
        }
    }

    /// A process that could not be started
    pub fn not_started(reason: impl Into<String>) -> Self {
        Self {
            spawn_error: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn success(&self) -> bool {
        self.spawn_error.is_none() && self.code == Some(0)
    }

    /// Short human readable reason for a failure
    pub fn failure_reason(&self) -> String {
        match (&self.spawn_error, self.code) {
            (Some(reason), _) => reason.clone(),
            (None, Some(code)) => format!("exited with status {}", code),
            (None, None) => "terminated by signal".to_string(),
        }
    }
}

/// Runs external tools on behalf of components and build steps
pub trait ToolInvoker: Send + Sync {
    /// Run `command` to completion
    fn invoke(&self, command: &ToolCommand) -> Invocation;
}

/// [`ToolInvoker`] backed by real child processes.
///
/// Both output streams are read concurrently on a private current-thread
/// runtime, so the console stays single-threaded.
pub struct ProcessInvoker {
    runtime: Runtime,
}

impl ProcessInvoker {
    pub fn new() -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CoreError::Runtime(e.to_string()))?;
        Ok(Self { runtime })
    }
}

impl ToolInvoker for ProcessInvoker {
    fn invoke(&self, command: &ToolCommand) -> Invocation {
        if !command.is_quiet() {
            println!(">> {}", command);
        }
        debug!("Running: {:?}", command.argv());

        let invocation = self.runtime.block_on(run_child(command));
        if !invocation.success() {
            warn!("{} failed: {}", command.program(), invocation.failure_reason());
        }
        invocation
    }
}

async fn run_child(command: &ToolCommand) -> Invocation {
    let mut cmd = Command::new(command.program());
    cmd.args(command.get_args())
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    if let Some(cwd) = command.cwd() {
        cmd.current_dir(cwd);
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Invocation::not_started(format!(
                "`{}` was not found in PATH",
                command.program()
            ));
        }
        Err(e) => {
            return Invocation::not_started(format!(
                "failed to start `{}`: {}",
                command.program(),
                e
            ));
        }
    };

    let echo = !command.is_quiet();
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let (stdout, stderr, status) = tokio::join!(
        collect_lines(stdout, echo, Stream::Stdout),
        collect_lines(stderr, echo, Stream::Stderr),
        child.wait(),
    );

    match status {
        Ok(status) => Invocation {
            code: status.code(),
            stdout,
            stderr,
            spawn_error: None,
        },
        Err(e) => Invocation {
            code: None,
            stdout,
            stderr,
            spawn_error: Some(format!("failed to wait for `{}`: {}", command.program(), e)),
        },
    }
}

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Read `reader` to EOF, decoding each line lossily.
///
/// A read error stops capturing but the pipe is still drained, so the child
/// never sees a closed pipe.
async fn collect_lines<R>(reader: Option<R>, echo: bool, stream: Stream) -> String
where
    R: AsyncRead + Unpin,
{
    let Some(reader) = reader else {
        return String::new();
    };

    let mut reader = BufReader::new(reader);
    let mut captured = String::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let text = String::from_utf8_lossy(&buf);
                let line = text.trim_end_matches(['\n', '\r']);
                if echo {
                    match stream {
                        Stream::Stdout => println!("{}", line),
                        Stream::Stderr => eprintln!("{}", line),
                    }
                }
                captured.push_str(line);
                captured.push('\n');
            }
            Err(e) => {
                debug!("Stopped capturing output: {}", e);
                let _ = tokio::io::copy(&mut reader, &mut tokio::io::sink()).await;
                break;
            }
        }
    }
    captured
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        let command = ToolCommand::new("cargo")
            .args(["ndk", "-t", "x86_64"])
            .arg("build")
            .current_dir("/work/core");

        assert_eq!(
            command.argv(),
            vec!["cargo", "ndk", "-t", "x86_64", "build"]
        );
        assert_eq!(
            command.to_string(),
            "cargo ndk -t x86_64 build (in /work/core)"
        );
        assert!(!command.is_quiet());
        assert!(command.clone().quiet().is_quiet());
    }

    #[test]
    fn test_invocation_success() {
        assert!(Invocation::exited(0, "", "").success());
        assert!(!Invocation::exited(2, "", "").success());
        assert!(!Invocation::not_started("missing").success());
        assert_eq!(
            Invocation::exited(2, "", "").failure_reason(),
            "exited with status 2"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_process_invoker_captures_output_and_status() {
        let invoker = ProcessInvoker::new().unwrap();
        let command = ToolCommand::new("sh")
            .args(["-c", "echo out; echo err >&2; exit 3"])
            .quiet();

        let invocation = invoker.invoke(&command);
        assert_eq!(invocation.code, Some(3));
        assert_eq!(invocation.stdout, "out\n");
        assert_eq!(invocation.stderr, "err\n");
        assert!(!invocation.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_process_invoker_runs_in_cwd() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "").unwrap();
        let invoker = ProcessInvoker::new().unwrap();

        let invocation = invoker.invoke(&ToolCommand::new("ls").current_dir(dir.path()).quiet());
        assert!(invocation.success());
        assert!(invocation.stdout.contains("marker.txt"));
    }

    #[test]
    fn test_process_invoker_reports_missing_program() {
        let invoker = ProcessInvoker::new().unwrap();
        let invocation =
            invoker.invoke(&ToolCommand::new("devconsole-no-such-program-7f3a").quiet());

        assert!(!invocation.success());
        assert!(invocation
            .spawn_error
            .as_deref()
            .unwrap()
            .contains("not found in PATH"));
    }

    #[cfg(unix)]
    #[test]
    fn test_process_invoker_tolerates_invalid_utf8() {
        let invoker = ProcessInvoker::new().unwrap();
        let command = ToolCommand::new("sh")
            .args([
                "-c",
                "printf 'a\\377b\\n'; i=0; while [ $i -lt 20000 ]; do echo line; i=$((i+1)); done; exit 0",
            ])
            .quiet();

        let invocation = invoker.invoke(&command);
        assert_eq!(invocation.code, Some(0));
        assert!(invocation.success());

        let mut lines = invocation.stdout.lines();
        assert_eq!(lines.next(), Some("a\u{FFFD}b"));
        assert_eq!(lines.count(), 20000);
    }
}
