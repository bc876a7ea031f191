//! Handing URLs to the operating system's default browser.
//!
//! Best-effort: the platform opener is spawned and not waited on.

use std::process::{Command, Stdio};

use crate::error::{AppError, Result};

/// Something that can show a URL to the user.
pub trait BrowserLauncher {
    /// Open `url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Browser`] if the launch could not be started.
    fn open(&self, url: &str) -> Result<()>;
}

impl<T: BrowserLauncher + ?Sized> BrowserLauncher for &T {
    fn open(&self, url: &str) -> Result<()> {
        (**self).open(url)
    }
}

/// The platform's default browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserLauncher for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        let mut command = opener_command(url);
        tracing::debug!(?command, "launching browser");

        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| AppError::Browser {
                url: url.to_owned(),
                reason: e.to_string(),
            })
    }
}

/// The command that opens `url` on this platform.
pub fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("rundll32");
        cmd.args(["url.dll,FileProtocolHandler", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}
