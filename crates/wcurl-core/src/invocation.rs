//! The parsed-arguments record handed from the CLI to the command assembler.

use thiserror::Error;

use crate::url_model::normalize_url;

/// Argument errors that end the run before curl is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// A token starting with `-` that is not a known option.
    #[error("Unknown option: '{0}'.")]
    UnknownOption(String),
    /// Parsing finished without a single URL.
    #[error("You must provide at least one URL to download.")]
    MissingUrl,
    /// Any other malformed argument, e.g. an option missing its value.
    #[error("{0}")]
    Malformed(String),
}

/// One wcurl run: which URLs to fetch and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// URLs in command-line order, spaces already encoded.
    pub urls: Vec<String>,
    /// Explicit output path shared by every URL (last `--output` wins).
    pub output: Option<String>,
    /// Raw `--curl-options` values in the order given.
    pub curl_options: Vec<String>,
    /// Percent-decode derived filenames.
    pub decode_filename: bool,
    /// Print the command instead of executing it.
    pub dry_run: bool,
}

impl Invocation {
    /// Builds an invocation with default flags, normalizing each URL.
    ///
    /// Fails with [`ArgsError::MissingUrl`] if `urls` is empty.
    pub fn with_urls<I, S>(urls: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let urls: Vec<String> = urls
            .into_iter()
            .map(|u| normalize_url(u.as_ref()))
            .collect();
        if urls.is_empty() {
            return Err(ArgsError::MissingUrl);
        }
        Ok(Self {
            urls,
            output: None,
            curl_options: Vec::new(),
            decode_filename: true,
            dry_run: false,
        })
    }

    /// Passthrough options split into individual curl arguments.
    ///
    /// Each `--curl-options` value is split on ASCII whitespace; quotes are not
    /// interpreted.
    pub fn passthrough_args(&self) -> impl Iterator<Item = &str> + '_ {
        self.curl_options
            .iter()
            .flat_map(|opts| opts.split_ascii_whitespace())
    }
}
