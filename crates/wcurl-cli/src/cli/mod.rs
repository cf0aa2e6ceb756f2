//! CLI for wcurl.

use anyhow::Result;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::io::{self, Write};
use wcurl_core::config::{self, WcurlConfig};
use wcurl_core::{hand_off, ArgsError, Capabilities, CurlCommand, Invocation};

const AFTER_HELP: &str = "\
Each URL is downloaded by its own curl operation, chained with --next in a single curl process.
Every operation gets --fail --globoff --location --proto-default https --remote-time --retry 5,
plus --no-clobber (curl >= 7.83) and, for more than one URL, --parallel (curl >= 7.66).

Without --output, files are named after the last segment of the URL path, percent-decoded,
or index.html when the URL has no path. Use -- to pass URLs that begin with a dash.";

/// A simple wrapper around curl to easily download files.
#[derive(Debug, Parser)]
#[command(name = "wcurl", version)]
#[command(about = "A simple wrapper around curl to easily download files", long_about = None)]
#[command(after_help = AFTER_HELP, args_override_self = true)]
pub struct Cli {
    /// Extra options passed to curl for every URL. May be given more than once.
    #[arg(long = "curl-options", value_name = "OPTS", action = ArgAction::Append, allow_hyphen_values = true)]
    pub curl_options: Vec<String>,

    /// Save every download to PATH instead of a name derived from the URL.
    #[arg(short = 'o', long = "output", short_alias = 'O', value_name = "PATH", action = ArgAction::Append, allow_hyphen_values = true)]
    pub output: Vec<String>,

    /// Keep percent-encoded sequences in derived filenames.
    #[arg(long)]
    pub no_decode_filename: bool,

    /// Print the curl command instead of running it.
    #[arg(long)]
    pub dry_run: bool,

    /// URLs to download.
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,
}

impl Cli {
    /// Turns the raw parse into an [`Invocation`]; the last `--output` wins.
    pub fn into_invocation(mut self) -> Result<Invocation, ArgsError> {
        Ok(Invocation {
            output: self.output.pop(),
            curl_options: self.curl_options,
            decode_filename: !self.no_decode_filename,
            dry_run: self.dry_run,
            ..Invocation::with_urls(self.urls)?
        })
    }
}

/// Parses `args` (program name first) into an [`Invocation`].
///
/// Help and version requests come back as the original `clap::Error`; every
/// other failure is an [`ArgsError`] with a one-line message.
pub(crate) fn parse_invocation<I, T>(args: I) -> Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let cli = Cli::try_parse_from(&args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => anyhow::Error::new(err),
        _ => anyhow::Error::new(usage_error(&err, &args)),
    })?;
    Ok(cli.into_invocation()?)
}

fn usage_error(err: &clap::Error, args: &[OsString]) -> ArgsError {
    if err.kind() == ErrorKind::UnknownArgument {
        if let Some(ContextValue::String(name)) = err.get(ContextKind::InvalidArg) {
            return ArgsError::UnknownOption(typed_token(args, name));
        }
    }
    let rendered = err.to_string();
    let line = rendered.lines().next().unwrap_or_default();
    ArgsError::Malformed(line.trim_start_matches("error: ").to_string())
}

/// The argument as the user typed it: clap reports `--name` for `--name=value`
/// and `-x` for `-xyz`.
fn typed_token(args: &[OsString], name: &str) -> String {
    args.iter()
        .skip(1)
        .map(|a| a.to_string_lossy())
        .take_while(|a| a != "--")
        .find(|a| {
            if name.starts_with("--") {
                *a == name || a.strip_prefix(name).map_or(false, |rest| rest.starts_with('='))
            } else {
                a.starts_with(name)
            }
        })
        .map(|a| a.into_owned())
        .unwrap_or_else(|| name.to_string())
}

/// Parses the process arguments. Help and version print and exit 0 here,
/// before anything else is set up.
pub fn parse_from_env() -> Result<Invocation> {
    match parse_invocation(std::env::args_os()) {
        Ok(invocation) => Ok(invocation),
        Err(err) => match err.downcast_ref::<clap::Error>() {
            Some(info) => info.exit(),
            None => Err(err),
        },
    }
}

/// Exit status for an error that ended the run: 2 for argument errors, 1 otherwise.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ArgsError>().is_some() {
        2
    } else {
        1
    }
}

/// Loads the config and runs `invocation`. Only returns on dry run or failure.
pub fn run(invocation: Invocation) -> Result<()> {
    let cfg = config::load()?;
    run_with_config(invocation, &cfg, &mut io::stdout().lock())
}

pub(crate) fn run_with_config<W: Write>(
    invocation: Invocation,
    cfg: &WcurlConfig,
    out: &mut W,
) -> Result<()> {
    tracing::debug!(
        urls = invocation.urls.len(),
        output = ?invocation.output,
        dry_run = invocation.dry_run,
        "parsed invocation"
    );
    let caps = Capabilities::detect(&cfg.curl);
    let dry_run = invocation.dry_run;
    let cmd = CurlCommand::assemble(invocation, caps, cfg);
    hand_off(&cmd, dry_run, out)
}

#[cfg(test)]
mod tests;
