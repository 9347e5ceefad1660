//! Ordered threshold tables for mapping a measurement onto a category.
//!
//! A table is a list of half-open bands sorted by ascending upper bound.
//! Classification walks the list top to bottom and returns the first band
//! whose exclusive upper bound lies above the value; anything at or beyond
//! the last bound falls through to the table's `otherwise` value. Every
//! real number therefore maps to exactly one entry.

/// One band: applies to values strictly below `below` that no earlier band claimed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band<T> {
    pub below: f64,
    pub value: T,
}

/// An ordered band table with a catch-all for the open top interval.
#[derive(Clone, Copy, Debug)]
pub struct BandTable<T: 'static> {
    bands: &'static [Band<T>],
    otherwise: T,
}

impl<T: Copy + 'static> BandTable<T> {
    pub const fn new(bands: &'static [Band<T>], otherwise: T) -> Self {
        Self { bands, otherwise }
    }

    /// Classify a value against the table (first match wins).
    ///
    /// NaN compares below no bound and therefore yields `otherwise`;
    /// callers validate inputs before they get here.
    pub fn classify(&self, value: f64) -> T {
        self.bands
            .iter()
            .find(|band| value < band.below)
            .map(|band| band.value)
            .unwrap_or(self.otherwise)
    }

    /// Half-open `[lower, upper)` interval of every entry, in table order.
    ///
    /// The first lower bound is `-inf` and the last upper bound is `+inf`.
    pub fn intervals(&self) -> Vec<(f64, f64, T)> {
        let mut lower = f64::NEG_INFINITY;
        let mut out = Vec::with_capacity(self.bands.len() + 1);
        for band in self.bands {
            out.push((lower, band.below, band.value));
            lower = band.below;
        }
        out.push((lower, f64::INFINITY, self.otherwise));
        out
    }

    /// True when the bounds are strictly ascending.
    pub fn is_ordered(&self) -> bool {
        self.bands.windows(2).all(|w| w[0].below < w[1].below)
    }
}
