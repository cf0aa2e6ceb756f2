//! Tests for --curl-options, --output and the boolean flags.

use super::parse;

#[test]
fn cli_parse_curl_options_accumulate() {
    let inv = parse(&[
        "wcurl",
        "--curl-options",
        "--limit-rate 1M",
        "--curl-options=--insecure",
        "--curl-options",
        "--limit-rate 1M",
        "https://example.com/f",
    ]);
    assert_eq!(
        inv.curl_options,
        vec!["--limit-rate 1M", "--insecure", "--limit-rate 1M"]
    );
}

#[test]
fn cli_parse_curl_options_empty_value() {
    let inv = parse(&["wcurl", "--curl-options=", "https://example.com/f"]);
    assert_eq!(inv.curl_options, vec![""]);
    assert_eq!(inv.passthrough_args().count(), 0);
}

#[test]
fn cli_parse_output_forms() {
    for args in [
        ["wcurl", "--output", "out.bin", "https://example.com/f"].as_slice(),
        ["wcurl", "--output=out.bin", "https://example.com/f"].as_slice(),
        ["wcurl", "-o", "out.bin", "https://example.com/f"].as_slice(),
        ["wcurl", "-O", "out.bin", "https://example.com/f"].as_slice(),
        ["wcurl", "-oout.bin", "https://example.com/f"].as_slice(),
        ["wcurl", "-Oout.bin", "https://example.com/f"].as_slice(),
    ] {
        let inv = parse(args);
        assert_eq!(inv.output.as_deref(), Some("out.bin"), "args: {:?}", args);
        assert_eq!(inv.urls, vec!["https://example.com/f"]);
    }
}

#[test]
fn cli_parse_output_last_wins() {
    let inv = parse(&[
        "wcurl",
        "-o",
        "first.bin",
        "https://example.com/f",
        "--output=second.bin",
    ]);
    assert_eq!(inv.output.as_deref(), Some("second.bin"));
}

#[test]
fn cli_parse_output_empty_value() {
    let inv = parse(&["wcurl", "--output=", "https://example.com/f"]);
    assert_eq!(inv.output.as_deref(), Some(""));
}

#[test]
fn cli_parse_no_decode_and_dry_run() {
    let inv = parse(&[
        "wcurl",
        "--no-decode-filename",
        "--dry-run",
        "https://example.com/f",
    ]);
    assert!(!inv.decode_filename);
    assert!(inv.dry_run);
}

#[test]
fn cli_parse_repeated_flags_accepted() {
    let inv = parse(&[
        "wcurl",
        "--dry-run",
        "--no-decode-filename",
        "https://example.com/f",
        "--dry-run",
        "--no-decode-filename",
    ]);
    assert!(!inv.decode_filename);
    assert!(inv.dry_run);
}
