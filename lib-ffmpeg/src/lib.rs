use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;

mod settings;

pub use settings::{EncodeSettings, WEB_OPTIMIZED};

/// What came back from one encoder run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stderr: String,
}

impl Invocation {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Something that can run the encoder with a list of arguments.
///
/// A non-zero exit is a normal `Ok(Invocation)`; `Err` is reserved for not
/// being able to run the encoder at all.
#[async_trait]
pub trait Transcoder: Send + Sync {
    async fn invoke(&self, args: &[OsString]) -> Result<Invocation>;

    async fn transcode(
        &self,
        settings: &EncodeSettings,
        input: &Path,
        output: &Path,
    ) -> Result<Invocation> {
        self.invoke(&settings.args(input, output)).await
    }
}

/// The `ffmpeg` command line tool, run as a child process.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    program: PathBuf,
}

impl Ffmpeg {
    pub fn new(program: impl Into<PathBuf>) -> Ffmpeg {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

#[async_trait]
impl Transcoder for Ffmpeg {
    async fn invoke(&self, args: &[OsString]) -> Result<Invocation> {
        tracing::debug!(program = %self.program.display(), ?args, "spawning encoder");

        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("failed to execute {}", self.program.display()))?;

        Ok(Invocation {
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn os_args(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[tokio::test]
    async fn zero_exit_is_success() {
        let invocation = Ffmpeg::new("true").invoke(&[]).await.unwrap();
        assert!(invocation.success());
        assert_eq!(invocation.status, Some(0));
    }

    #[tokio::test]
    async fn non_zero_exit_captures_stderr() {
        let sh = Ffmpeg::new("sh");
        let invocation = sh
            .invoke(&os_args(&["-c", "echo invalid data >&2; exit 1"]))
            .await
            .unwrap();

        assert!(!invocation.success());
        assert_eq!(invocation.status, Some(1));
        assert_eq!(invocation.stderr.trim(), "invalid data");
    }

    #[tokio::test]
    async fn stdout_is_not_mixed_into_stderr() {
        let sh = Ffmpeg::new("sh");
        let invocation = sh
            .invoke(&os_args(&["-c", "echo progress; echo oops >&2; exit 3"]))
            .await
            .unwrap();

        assert_eq!(invocation.status, Some(3));
        assert_eq!(invocation.stderr, "oops\n");
    }

    #[tokio::test]
    async fn missing_program_is_an_error() {
        let missing = Ffmpeg::new("/nonexistent/bin/ffmpeg");
        let err = missing.invoke(&[]).await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bin/ffmpeg"));
    }

    #[tokio::test]
    async fn signal_kill_is_not_success() {
        let sh = Ffmpeg::new("sh");
        let invocation = sh.invoke(&os_args(&["-c", "kill -9 $$"])).await.unwrap();
        assert_eq!(invocation.status, None);
        assert!(!invocation.success());
    }
}
