//! The three text reporters: summary table and two histogram layouts.
//!
//! Each reporter consumes the ranked aggregates read-only and renders into
//! any [`io::Write`] sink. Number formatting is driven by an explicit
//! [`Format`] value instead of process-wide locale state.

use std::io::{self, Write};

use crate::aggregate::SymbolAggregate;
use crate::formula;

/// Minimum cell width for symbols, counts, and stats.
pub const CELL_WIDTH: usize = 7;

const SUMMARY_HEADER: &str = "Symbol  | Qty     | Min %   | Max %   | Avg %   ";

/// Number-formatting configuration passed into the reporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    pub decimal_separator: char,
}

impl Default for Format {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
        }
    }
}

impl Format {
    /// A spread statistic with exactly two decimal digits.
    fn stat(&self, value: f64) -> String {
        let s = format!("{value:.2}");
        if self.decimal_separator == '.' {
            s
        } else {
            s.replace('.', &self.decimal_separator.to_string())
        }
    }
}

/// Summary table: one line per aggregate in ranked order.
pub fn summary<W: Write>(
    items: &[SymbolAggregate],
    format: &Format,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Summary:")?;
    writeln!(out, "\t{SUMMARY_HEADER}")?;
    for agg in items {
        writeln!(
            out,
            "\t{:>CELL_WIDTH$} | {:>CELL_WIDTH$} | {:>CELL_WIDTH$} | {:>CELL_WIDTH$} | {:>CELL_WIDTH$}",
            agg.symbol,
            agg.count,
            format.stat(agg.min),
            format.stat(agg.max),
            format.stat(agg.average),
        )?;
    }
    writeln!(out)
}

/// Histogram #1: one bar per aggregate, strictly in ranked order.
pub fn histogram1<W: Write>(
    items: &[SymbolAggregate],
    max_count: u64,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Histogram #1:")?;
    for agg in items {
        histogram_line(agg, max_count, out)?;
    }
    writeln!(out)
}

/// Histogram #2: interleaved rendering order.
///
/// Even-indexed aggregates print immediately in ascending index order;
/// odd-indexed ones are collected and printed afterwards in reverse, so the
/// tallest bars meet in the middle. With 0 or 1 aggregates this degenerates
/// to plain ascending output.
pub fn histogram2<W: Write>(
    items: &[SymbolAggregate],
    max_count: u64,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Histogram #2:")?;

    let mut deferred = Vec::new();
    for (idx, agg) in items.iter().enumerate() {
        if idx % 2 == 0 {
            histogram_line(agg, max_count, out)?;
        } else {
            deferred.push(agg);
        }
    }
    for agg in deferred.iter().rev() {
        histogram_line(agg, max_count, out)?;
    }

    writeln!(out)
}

fn histogram_line<W: Write>(agg: &SymbolAggregate, max_count: u64, out: &mut W) -> io::Result<()> {
    let bar = "#".repeat(formula::normalize(agg.count, max_count));
    writeln!(out, "\t{:>CELL_WIDTH$} {bar}", agg.symbol)
}
