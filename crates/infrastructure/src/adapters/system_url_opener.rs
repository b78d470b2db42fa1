//! URL opener - Implements UrlOpenerPort by launching the platform opener

use std::process::Stdio;

use application::error::ApplicationError;
use application::ports::UrlOpenerPort;
use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, instrument};

/// Opens URLs with `xdg-open`, `open` or `start` depending on the platform
///
/// The launcher is awaited until it exits. Platform openers hand the URL to
/// the browser and return right away, so this resolves quickly and no child
/// process is left behind.
#[derive(Debug, Clone)]
pub struct SystemUrlOpener {
    program: String,
    args: Vec<String>,
}

impl Default for SystemUrlOpener {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self::with_command("open", &[])
        } else if cfg!(windows) {
            Self::with_command("cmd", &["/C", "start", ""])
        } else {
            Self::with_command("xdg-open", &[])
        }
    }
}

impl SystemUrlOpener {
    /// Use a custom launcher; the URL is appended after `args`
    #[must_use]
    pub fn with_command(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// The launcher program
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl UrlOpenerPort for SystemUrlOpener {
    #[instrument(skip(self, url), fields(program = %self.program))]
    async fn open(&self, url: &str) -> Result<(), ApplicationError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                ApplicationError::ExternalService(format!("Failed to launch {}: {e}", self.program))
            })?;

        if !status.success() {
            return Err(ApplicationError::ExternalService(format!(
                "{} exited with {status}",
                self.program
            )));
        }

        debug!("URL opener finished");
        Ok(())
    }
}
