//! Expansion of a frequency table into one row per observation.
//!
//! Downstream consumers that assume one row per case (a KDE, describe-style tooling) can
//! stream the grouped table through [Expand] instead of holding every observation in memory.
use std::iter::FusedIterator;

use fraglen_core::errors::Result;
use fraglen_core::models::{Frequency, GroupedDistribution};

///
/// Lazy iterator repeating each row's case payload `frequency` times.
///
/// Rows are emitted in source order. A zero frequency emits nothing for its row. An invalid
/// frequency (negative, fractional, non-finite) is yielded once as an `Err`, after which the
/// iterator is exhausted.
///
pub struct Expand<I, C> {
    rows: I,
    current: Option<(C, u64)>,
    index: usize,
    failed: bool,
}

impl<I, C> Expand<I, C> {
    pub fn new(rows: I) -> Self {
        Expand {
            rows,
            current: None,
            index: 0,
            failed: false,
        }
    }
}

impl<I, C, F> Iterator for Expand<I, C>
where
    I: Iterator<Item = (C, F)>,
    C: Clone,
    F: Frequency,
{
    type Item = Result<C>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.failed {
                return None;
            }

            match self.current.take() {
                Some((case, 1)) => return Some(Ok(case)),
                Some((case, remaining)) if remaining > 1 => {
                    let out = case.clone();
                    self.current = Some((case, remaining - 1));
                    return Some(Ok(out));
                }
                _ => {}
            }

            let (case, frequency) = self.rows.next()?;
            let index = self.index;
            self.index += 1;

            match frequency.to_count(index) {
                Ok(count) => self.current = Some((case, count)),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let pending = self
            .current
            .as_ref()
            .map(|(_, remaining)| *remaining as usize)
            .unwrap_or(0);
        (pending, None)
    }
}

impl<I, C, F> FusedIterator for Expand<I, C>
where
    I: Iterator<Item = (C, F)>,
    C: Clone,
    F: Frequency,
{
}

///
/// Expand `(case, frequency)` rows lazily.
///
/// # Arguments
/// - rows: source rows; `case` is the payload to repeat (a value, a tuple of columns, ...)
pub fn expand_rows<I, C, F>(rows: I) -> Expand<I::IntoIter, C>
where
    I: IntoIterator<Item = (C, F)>,
    C: Clone,
    F: Frequency,
{
    Expand::new(rows.into_iter())
}

///
/// Expand `(case, frequency)` rows into a materialised table, failing on the first invalid
/// frequency.
///
pub fn expand_table<I, C, F>(rows: I) -> Result<Vec<C>>
where
    I: IntoIterator<Item = (C, F)>,
    C: Clone,
    F: Frequency,
{
    expand_rows(rows).collect()
}

/// Adds `.expand()` to any iterator of `(case, frequency)` rows.
pub trait ExpandExt<C, F>: Iterator<Item = (C, F)> + Sized {
    fn expand(self) -> Expand<Self, C> {
        Expand::new(self)
    }
}

impl<I, C, F> ExpandExt<C, F> for I
where
    I: Iterator<Item = (C, F)>,
    C: Clone,
    F: Frequency,
{
}

/// The individual observations of an already validated distribution.
pub trait Observations {
    fn observations(&self) -> impl Iterator<Item = f64> + '_;
}

impl Observations for GroupedDistribution {
    fn observations(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter()
            .flat_map(|(value, frequency)| std::iter::repeat_n(value, frequency as usize))
    }
}
