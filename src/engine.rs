//! Single-pass consolidation pipeline: ingest, rank, render.

use std::io::Write;
use std::path::Path;

use log::info;

use crate::config::Config;
use crate::error::Result;
use crate::ingest;
use crate::report;
use crate::source::QuoteFile;
use crate::store::AggregateStore;

/// Fold every line into a fresh store, then rank it once.
///
/// Line numbers in errors are 1-based. The first error aborts the pass.
pub fn consolidate<I>(lines: I, delimiter: char) -> Result<AggregateStore>
where
    I: IntoIterator<Item = Result<String>>,
{
    let mut store = AggregateStore::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let line = line?;
        ingest::ingest_line(&mut store, idx + 1, &line, delimiter)?;
    }
    store.rank();
    Ok(store)
}

/// Run the full pipeline: open `path`, consolidate every record, and render
/// the three reports in fixed order (Summary, Histogram #1, Histogram #2).
///
/// Any error aborts before the first report line is written, so a failed run
/// produces no partial output.
pub fn run<W: Write>(path: &Path, config: &Config, out: &mut W) -> Result<()> {
    let source = QuoteFile::open(path)?;
    let store = consolidate(source, config.input.delimiter)?;
    info!(
        "consolidated {} symbols (max count {})",
        store.len(),
        store.max_count()
    );

    let format = config.report_format();
    report::summary(store.items(), &format, out)?;
    report::histogram1(store.items(), store.max_count(), out)?;
    report::histogram2(store.items(), store.max_count(), out)?;
    Ok(())
}
