//! Assembly of the single curl invocation that performs every download.
//!
//! Each URL becomes one curl "operation"; operations are chained with
//! `--next` so the whole batch runs in one curl process. Every operation
//! carries the same robustness flags and its own `--output`.

mod exec;
mod render;

pub use exec::hand_off;

use std::fmt;

use crate::capability::Capabilities;
use crate::config::WcurlConfig;
use crate::invocation::Invocation;
use crate::url_model::derive_output_name;

/// Separator between curl operations.
pub const NEXT_OPERATION: &str = "--next";

/// Flags applied to every operation, before `--retry`.
pub const OPERATION_FLAGS: &[&str] = &[
    "--fail",
    "--globoff",
    "--location",
    "--proto-default",
    "https",
    "--remote-time",
];

/// A fully assembled curl command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlCommand {
    program: String,
    args: Vec<String>,
}

impl CurlCommand {
    /// Builds the chained command for `invocation`.
    ///
    /// `--parallel` is only requested for more than one URL. Config-level
    /// curl options come before the command-line passthrough options.
    pub fn assemble(invocation: Invocation, caps: Capabilities, cfg: &WcurlConfig) -> Self {
        let mut args = Vec::new();
        if caps.parallel && invocation.urls.len() > 1 {
            args.push("--parallel".to_string());
        }

        let passthrough: Vec<String> = cfg
            .curl_options
            .iter()
            .map(String::as_str)
            .chain(invocation.passthrough_args())
            .map(str::to_string)
            .collect();

        for (idx, url) in invocation.urls.iter().enumerate() {
            if idx > 0 {
                args.push(NEXT_OPERATION.to_string());
            }
            args.extend(OPERATION_FLAGS.iter().map(|f| f.to_string()));
            args.push("--retry".to_string());
            args.push(cfg.retry.to_string());
            if caps.no_clobber {
                args.push("--no-clobber".to_string());
            }
            args.extend(passthrough.iter().cloned());
            let output = match &invocation.output {
                Some(path) => path.clone(),
                None => derive_output_name(url, invocation.decode_filename),
            };
            args.push("--output".to_string());
            args.push(output);
            args.push(url.clone());
        }

        let cmd = Self {
            program: cfg.curl.clone(),
            args,
        };
        tracing::debug!(urls = invocation.urls.len(), ?caps, "assembled: {}", cmd);
        cmd
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Values following each `--output` flag, in order.
    pub fn outputs(&self) -> Vec<&str> {
        self.args
            .windows(2)
            .filter(|w| w[0] == "--output")
            .map(|w| w[1].as_str())
            .collect()
    }

    fn to_command(&self) -> std::process::Command {
        let mut command = std::process::Command::new(&self.program);
        command.args(&self.args);
        command
    }
}

/// Shell-pasteable command line.
impl fmt::Display for CurlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render::shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", render::shell_quote(arg))?;
        }
        Ok(())
    }
}
