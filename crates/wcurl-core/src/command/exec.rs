//! Terminal action: print the command (dry run) or hand the process over to curl.

use anyhow::{Context, Result};
use std::convert::Infallible;
use std::io::Write;

use super::CurlCommand;

impl CurlCommand {
    /// Replaces the current process with curl. Returns only on failure.
    #[cfg(unix)]
    pub fn exec(&self) -> Result<Infallible> {
        use std::os::unix::process::CommandExt;

        tracing::info!(program = %self.program, "handing off to curl");
        let err = self.to_command().exec();
        Err::<Infallible, _>(err).with_context(|| format!("failed to execute {}", self.program))
    }

    /// Runs curl to completion and exits with its status.
    #[cfg(not(unix))]
    pub fn exec(&self) -> Result<Infallible> {
        tracing::info!(program = %self.program, "running curl");
        let status = self
            .to_command()
            .status()
            .with_context(|| format!("failed to execute {}", self.program))?;
        std::process::exit(status.code().unwrap_or(1));
    }
}

/// Runs the terminal action for `cmd`.
///
/// In dry-run mode the command line is written to `out` and this returns
/// `Ok(())`. Otherwise the process is replaced by curl and this only returns
/// if that fails.
pub fn hand_off<W: Write>(cmd: &CurlCommand, dry_run: bool, out: &mut W) -> Result<()> {
    if dry_run {
        writeln!(out, "{}", cmd).context("write dry-run command")?;
        return Ok(());
    }
    match cmd.exec()? {}
}
