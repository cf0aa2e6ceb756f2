//! CLI parse tests, split by concern.

use super::parse_invocation;
use wcurl_core::{ArgsError, Invocation};

pub(super) fn parse(args: &[&str]) -> Invocation {
    parse_invocation(args).unwrap()
}

pub(super) fn parse_err(args: &[&str]) -> ArgsError {
    parse_invocation(args)
        .unwrap_err()
        .downcast::<ArgsError>()
        .unwrap()
}

mod options;
