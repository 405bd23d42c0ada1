//! End-to-end tests: quote files on disk through the full pipeline.

use std::io::Write as _;

use spreadbook::{Config, Error, engine};
use tempfile::NamedTempFile;

fn write_fixture(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run_to_string(file: &NamedTempFile, config: &Config) -> Result<String, Error> {
    let mut out = Vec::new();
    engine::run(file.path(), config, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

// ============================================================================
// Happy path
// ============================================================================

#[test]
fn worked_example_produces_exact_reports() {
    let file = write_fixture(
        "09:00;ABC;10.00;10.10\n\
         09:01;ABC;10.00;10.20\n\
         09:02;XYZ;5.00;5.05\n",
    );
    let text = run_to_string(&file, &Config::default()).unwrap();

    let expected = format!(
        "Summary:\n\
         \tSymbol  | Qty     | Min %   | Max %   | Avg %   \n\
         \t    XYZ |       1 |    0.99 |    0.99 |    0.99\n\
         \t    ABC |       2 |    0.99 |    1.96 |    1.48\n\
         \n\
         Histogram #1:\n\
         \t    XYZ {half}\n\
         \t    ABC {full}\n\
         \n\
         Histogram #2:\n\
         \t    XYZ {half}\n\
         \t    ABC {full}\n\
         \n",
        half = "#".repeat(50),
        full = "#".repeat(100),
    );
    assert_eq!(text, expected);
}

#[test]
fn reports_appear_in_fixed_order() {
    let file = write_fixture("09:00;ABC;10.00;10.10\n");
    let text = run_to_string(&file, &Config::default()).unwrap();

    let summary = text.find("Summary:").unwrap();
    let h1 = text.find("Histogram #1:").unwrap();
    let h2 = text.find("Histogram #2:").unwrap();
    assert!(summary < h1 && h1 < h2);
}

#[test]
fn file_without_trailing_newline() {
    let file = write_fixture("09:00;ABC;10.00;10.10");
    let text = run_to_string(&file, &Config::default()).unwrap();
    assert!(text.contains("\t    ABC |       1 |"));
}

#[test]
fn interleaved_histogram_with_five_symbols() {
    // Counts 1..5, so the ranked order is A, B, C, D, E.
    let mut contents = String::new();
    for (symbol, count) in [("A", 1), ("B", 2), ("C", 3), ("D", 4), ("E", 5)] {
        for i in 0..count {
            contents.push_str(&format!("09:{i:02};{symbol};10.00;10.10\n"));
        }
    }
    let file = write_fixture(&contents);
    let text = run_to_string(&file, &Config::default()).unwrap();

    let h2 = text.split("Histogram #2:\n").nth(1).unwrap();
    let symbols: Vec<&str> = h2
        .lines()
        .filter(|l| l.starts_with('\t'))
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(symbols, ["A", "C", "E", "D", "B"]);
}

// ============================================================================
// Blank and empty input
// ============================================================================

#[test]
fn blank_lines_only_produce_header_only_reports() {
    let file = write_fixture("\n   \n\t\n");
    let text = run_to_string(&file, &Config::default()).unwrap();

    assert_eq!(
        text,
        "Summary:\n\
         \tSymbol  | Qty     | Min %   | Max %   | Avg %   \n\
         \n\
         Histogram #1:\n\
         \n\
         Histogram #2:\n\
         \n"
    );
}

#[test]
fn empty_file_is_not_an_error() {
    let file = write_fixture("");
    assert!(run_to_string(&file, &Config::default()).is_ok());
}

// ============================================================================
// Fatal errors produce no partial output
// ============================================================================

#[test]
fn short_record_aborts_with_no_output() {
    let file = write_fixture("09:00;ABC;10.00;10.10\n09:01;ABC\n");
    let mut out = Vec::new();
    let err = engine::run(file.path(), &Config::default(), &mut out).unwrap_err();

    assert!(matches!(err, Error::FieldCount { line: 2, found: 2 }));
    assert!(out.is_empty());
}

#[test]
fn non_numeric_price_aborts_with_no_output() {
    let file = write_fixture("09:00;ABC;ten;10.10\n");
    let mut out = Vec::new();
    let err = engine::run(file.path(), &Config::default(), &mut out).unwrap_err();

    assert!(matches!(err, Error::InvalidNumber { field: "bid", .. }));
    assert!(out.is_empty());
}

#[test]
fn zero_ask_aborts() {
    let file = write_fixture("09:00;ABC;10.00;0\n");
    let err = run_to_string(&file, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::ZeroAsk { line: 1 }));
}

#[test]
fn missing_file_is_classified() {
    let mut out = Vec::new();
    let err = engine::run(
        std::path::Path::new("/no/such/quotes.txt"),
        &Config::default(),
        &mut out,
    )
    .unwrap_err();
    assert!(matches!(err, Error::SourceNotFound { .. }));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn config_file_changes_delimiter_and_separator() {
    let config_file = write_fixture(
        "[input]\n\
         delimiter = \"|\"\n\
         \n\
         [format]\n\
         decimal_separator = \",\"\n",
    );
    let config = Config::load(config_file.path()).unwrap();

    let file = write_fixture("09:00|ABC|10.00|10.10\n");
    let text = run_to_string(&file, &config).unwrap();
    assert!(text.contains("\t    ABC |       1 |    0,99 |    0,99 |    0,99\n"));
}

#[test]
fn invalid_config_is_rejected_before_the_run() {
    let config_file = write_fixture("[input]\ndelimiter = \".\"\n");
    let err = Config::load(config_file.path()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn missing_config_file_is_a_read_error() {
    let err = Config::load(std::path::Path::new("/no/such/config.toml")).unwrap_err();
    assert!(matches!(err, Error::ConfigRead { .. }));
}
