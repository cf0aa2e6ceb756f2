use wcurl_core::logging;

mod cli;

fn main() {
    // Parse first: help and version exit before logging touches the state dir.
    let invocation = cli::parse_from_env().unwrap_or_else(|err| fail(err));

    // Fall back to stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Only returns on dry run or failure.
    if let Err(err) = cli::run(invocation) {
        fail(err);
    }
}

fn fail(err: anyhow::Error) -> ! {
    eprintln!("wcurl: {:#}", err);
    std::process::exit(cli::exit_code(&err));
}
