//! Prescription-range filtering.
//!
//! Each product carries a range string such as `"-1.00~-4.00, -6.00"` listing
//! the diopters it is manufactured in. [`filter`] narrows the master option
//! list to those values, keeping master order.

use serde::{Deserialize, Serialize};

use crate::numeric::{format_centi, format_hundredths, leading_decimal};

/// Characters separating entries in a range string.
const ENTRY_SEPARATORS: [char; 2] = ['、', ','];

/// Builds the master option list, strongest-last.
///
/// `0.00` and `-0.50`, then `-1.00` to `-6.00` in quarter steps, then `-6.50`
/// to `-10.00` in half steps. Values are generated from integer hundredths so
/// the spelling is exact.
#[must_use]
pub fn master_options() -> Vec<String> {
    let quarters = (100..=600).step_by(25).map(|c: i32| -c);
    let halves = (650..=1000).step_by(50).map(|c: i32| -c);

    [0, -50]
        .into_iter()
        .chain(quarters)
        .chain(halves)
        .map(format_centi)
        .collect()
}

/// One comma-separated entry of a range string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RangeEntry {
    /// Inclusive numeric span; endpoints are stored sorted.
    Span { low: f64, high: f64 },
    /// Single value already formatted with two fraction digits.
    Exact { value: String },
}

impl RangeEntry {
    /// Parses one trimmed entry, or `None` if it holds no usable number.
    ///
    /// A span uses the text on either side of the first `~`; anything after a
    /// second `~` is ignored.
    #[must_use]
    pub fn parse(piece: &str) -> Option<Self> {
        if let Some((start, rest)) = piece.split_once('~') {
            let end = rest.split('~').next().unwrap_or(rest);
            let (a, b) = (leading_decimal(start)?, leading_decimal(end)?);
            return Some(Self::Span {
                low: a.min(b),
                high: a.max(b),
            });
        }

        leading_decimal(piece).map(|v| Self::Exact {
            value: format_hundredths(v),
        })
    }

    /// Whether the master option `option` is admitted by this entry.
    ///
    /// Spans compare numerically; exact values compare by spelling, so `"-1"`
    /// admits `"-1.00"` because it was formatted at parse time.
    #[must_use]
    pub fn admits(&self, option: &str) -> bool {
        match self {
            Self::Span { low, high } => {
                leading_decimal(option).is_some_and(|v| *low <= v && v <= *high)
            }
            Self::Exact { value } => value == option,
        }
    }
}

/// Parsed form of a product's range string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "restriction", rename_all = "camelCase")]
pub enum DiopterRange {
    /// Empty range text: every master option is offered.
    Unrestricted,
    /// Only options admitted by at least one entry are offered. May be empty
    /// when every entry was malformed.
    Entries { entries: Vec<RangeEntry> },
}

impl DiopterRange {
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::Unrestricted;
        }

        let mut entries = Vec::new();
        for piece in text.split(ENTRY_SEPARATORS).map(str::trim) {
            match RangeEntry::parse(piece) {
                Some(entry) => entries.push(entry),
                None => {
                    tracing::debug!(piece, "unreadable diopter entry; skipped");
                }
            }
        }
        Self::Entries { entries }
    }

    /// Whether `option` is offered under this range.
    #[must_use]
    pub fn admits(&self, option: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Entries { entries } => entries.iter().any(|e| e.admits(option)),
        }
    }

    /// The subsequence of `master` this range offers.
    #[must_use]
    pub fn apply<S: AsRef<str>>(&self, master: &[S]) -> Vec<String> {
        master
            .iter()
            .map(AsRef::as_ref)
            .filter(|opt| self.admits(opt))
            .map(str::to_owned)
            .collect()
    }
}

/// Filters `master` down to the options `range_text` allows.
///
/// Empty text means no restriction and returns `master` unchanged. Non-empty
/// text whose entries are all malformed returns an empty list.
#[must_use]
pub fn filter<S: AsRef<str>>(range_text: &str, master: &[S]) -> Vec<String> {
    DiopterRange::parse(range_text).apply(master)
}

#[cfg(test)]
#[path = "diopter_test.rs"]
mod tests;
