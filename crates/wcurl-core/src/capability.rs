//! Feature detection against the installed curl.
//!
//! Runs `curl --version` once and turns the reported `major.minor` into two
//! advisory flags. Detection failures only ever disable features.

use std::fmt;
use std::process::Command;

/// `--no-clobber` appeared in curl 7.83.
const NO_CLOBBER_SINCE: CurlVersion = CurlVersion::new(7, 83);
/// `--parallel` appeared in curl 7.66.
const PARALLEL_SINCE: CurlVersion = CurlVersion::new(7, 66);

/// The `major.minor` part of a curl release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CurlVersion {
    pub major: u32,
    pub minor: u32,
}

impl CurlVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parses a version such as `8.5.0` or `7.83.1-DEV`.
    pub fn parse(version: &str) -> Option<Self> {
        let mut parts = version.split('.');
        let major = leading_number(parts.next()?)?;
        let minor = leading_number(parts.next()?)?;
        Some(Self::new(major, minor))
    }

    /// Extracts the version from `curl --version` output
    /// (`curl 8.5.0 (x86_64-pc-linux-gnu) libcurl/8.5.0 ...`).
    pub fn from_version_output(output: &str) -> Option<Self> {
        let first_line = output.lines().next()?;
        Self::parse(first_line.split_whitespace().nth(1)?)
    }
}

impl fmt::Display for CurlVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

fn leading_number(s: &str) -> Option<u32> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

/// Optional curl features wcurl can request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// `--parallel` is available.
    pub parallel: bool,
    /// `--no-clobber` is available.
    pub no_clobber: bool,
}

impl Capabilities {
    pub fn for_version(version: CurlVersion) -> Self {
        Self {
            parallel: version >= PARALLEL_SINCE,
            no_clobber: version >= NO_CLOBBER_SINCE,
        }
    }

    /// Runs `<program> --version` and derives the capabilities.
    ///
    /// If curl cannot be run or its output is not understood, every feature is
    /// reported as unsupported.
    pub fn detect(program: &str) -> Self {
        let output = match Command::new(program).arg("--version").output() {
            Ok(output) => output,
            Err(err) => {
                tracing::warn!(program, error = %err, "could not query curl version");
                return Self::default();
            }
        };
        let text = String::from_utf8_lossy(&output.stdout);
        match CurlVersion::from_version_output(&text) {
            Some(version) => {
                let caps = Self::for_version(version);
                tracing::debug!(%version, ?caps, "detected curl capabilities");
                caps
            }
            None => {
                tracing::warn!(program, "unrecognized curl --version output");
                Self::default()
            }
        }
    }
}
