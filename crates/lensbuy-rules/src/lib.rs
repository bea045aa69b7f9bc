//! Interpreters for the merchandising strings attached to catalog products.
//!
//! - [`promo`] reads promotional rules (`"買3送1,5盒折100"`) into gift counts
//!   and next-discount hints.
//! - [`diopter`] reads prescription ranges (`"-1.00~-4.00, -6.00"`) and filters
//!   the master option list.
//!
//! Both are pure and total: malformed text degrades to an empty result.

pub mod diopter;
pub mod numeric;
pub mod promo;

pub use diopter::{filter as filter_diopters, master_options, DiopterRange, RangeEntry};
pub use promo::{evaluate as evaluate_promo, PromoEvaluation, PromoHint, PromoRules};
