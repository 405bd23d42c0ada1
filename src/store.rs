//! Ordered collection of per-symbol aggregates.

use rustc_hash::FxHashMap;

use crate::aggregate::SymbolAggregate;

/// Owns every [`SymbolAggregate`] for a run, in first-seen order until
/// ranked, plus the running maximum count used for histogram scaling.
///
/// Symbols are matched exactly as parsed: case-sensitive, no trimming.
/// The hash index replaces a linear scan but preserves those semantics.
#[derive(Debug, Default)]
pub struct AggregateStore {
    items: Vec<SymbolAggregate>,
    index: FxHashMap<String, usize>,
    max_count: u64,
}

impl AggregateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one spread observation into the store.
    ///
    /// An unseen symbol is appended in first-seen order with `count = 1`;
    /// a known symbol is updated in place. `max_count` never decreases.
    pub fn fold(&mut self, symbol: &str, spread: f64) {
        match self.index.get(symbol) {
            Some(&i) => {
                let agg = &mut self.items[i];
                agg.update(spread);
                if agg.count > self.max_count {
                    self.max_count = agg.count;
                }
            }
            None => {
                self.index.insert(symbol.to_string(), self.items.len());
                self.items
                    .push(SymbolAggregate::new(symbol.to_string(), spread));
                if self.max_count == 0 {
                    self.max_count = 1;
                }
            }
        }
    }

    /// Sort aggregates ascending by count, ties broken by ascending
    /// byte-wise symbol order. The `(count, symbol)` key is unique per
    /// symbol, so an unstable sort is sufficient.
    pub fn rank(&mut self) {
        self.items
            .sort_unstable_by(|a, b| a.count.cmp(&b.count).then_with(|| a.symbol.cmp(&b.symbol)));
        for (i, agg) in self.items.iter().enumerate() {
            self.index.insert(agg.symbol.clone(), i);
        }
    }

    /// All aggregates, in first-seen order before [`rank`](Self::rank) and in
    /// rank order after.
    pub fn items(&self) -> &[SymbolAggregate] {
        &self.items
    }

    /// Maximum count across all aggregates, `0` while empty.
    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    pub fn get(&self, symbol: &str) -> Option<&SymbolAggregate> {
        self.index.get(symbol).map(|&i| &self.items[i])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
