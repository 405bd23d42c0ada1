//! Record parsing and the per-line fold into the store.
//!
//! One record per non-blank line, fields at fixed positions separated by a
//! single-character delimiter: `timestamp;symbol;bid;ask`. Field 0 is the
//! timestamp, required positionally but never read. Trailing extra fields
//! are ignored.

use crate::error::{Error, Result};
use crate::formula;
use crate::store::AggregateStore;

const FIELD_SYMBOL: usize = 1;
const FIELD_BID: usize = 2;
const FIELD_ASK: usize = 3;
const MIN_FIELDS: usize = 4;

/// One parsed quote record. The symbol borrows from the input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuoteRecord<'a> {
    pub symbol: &'a str,
    pub bid: f64,
    pub ask: f64,
}

/// Split a non-blank line into a [`QuoteRecord`].
///
/// Fails if the line has fewer than 4 fields, if bid or ask is not a finite
/// number, or if the ask is exactly zero (the spread division would be
/// undefined). `line_no` is 1-based and only used for error messages.
pub fn parse_record(line: &str, delimiter: char, line_no: usize) -> Result<QuoteRecord<'_>> {
    let fields: Vec<&str> = line.split(delimiter).collect();
    if fields.len() < MIN_FIELDS {
        return Err(Error::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    }

    let bid = parse_price(fields[FIELD_BID], "bid", line_no)?;
    let ask = parse_price(fields[FIELD_ASK], "ask", line_no)?;
    if ask == 0.0 {
        return Err(Error::ZeroAsk { line: line_no });
    }

    Ok(QuoteRecord {
        symbol: fields[FIELD_SYMBOL],
        bid,
        ask,
    })
}

fn parse_price(raw: &str, field: &'static str, line_no: usize) -> Result<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::InvalidNumber {
            line: line_no,
            field,
            value: raw.to_string(),
        }),
    }
}

/// Ingest one raw line: skip it if blank, otherwise parse, compute the
/// spread, and fold it into the store.
pub fn ingest_line(
    store: &mut AggregateStore,
    line_no: usize,
    line: &str,
    delimiter: char,
) -> Result<()> {
    if line.trim().is_empty() {
        return Ok(());
    }

    let record = parse_record(line, delimiter, line_no)?;
    store.fold(record.symbol, formula::spread(record.bid, record.ask));
    Ok(())
}
