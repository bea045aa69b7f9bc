//! Promotional-rule interpretation.
//!
//! Merchandisers attach a free-text rule string to each product, e.g.
//! `"買3送1,5盒折100"`. Two clause families are recognised anywhere in the
//! text, any number of times:
//!
//! - **gift** clauses, `<buy>送<free>`: `free` bonus units per `buy` units;
//! - **discount** clauses, `<threshold>盒折<amount>`: a flat discount once the
//!   line reaches `threshold` units.
//!
//! Everything else in the string is ignored. Parsing never fails; text with no
//! recognisable clause evaluates to zero gifts and no hints.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::numeric::parse_count;

static GIFT_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)送([0-9]+)").expect("valid gift clause regex"));

static DISCOUNT_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)盒折([0-9]+)").expect("valid discount clause regex"));

/// A buy-X-get-Y-free clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftRule {
    /// Units that must be bought to earn one batch of gifts. Never zero.
    pub buy: u32,
    /// Free units granted per batch.
    pub free: u32,
}

impl GiftRule {
    /// Gift units earned at `qty`, or `None` when `qty` is below the threshold.
    #[must_use]
    pub fn earned(&self, qty: u32) -> Option<u32> {
        (qty >= self.buy).then(|| (qty / self.buy).saturating_mul(self.free))
    }
}

/// A quantity-discount clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountTier {
    /// Units at which the discount applies.
    pub threshold: u32,
    /// Flat discount in whole currency units.
    pub amount: u32,
}

/// Upcoming discount threshold the buyer has not reached yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoHint {
    pub next_threshold: u32,
    pub savings: u32,
    /// Display text, e.g. `"再買 3 盒折 100 元"`.
    pub message: String,
}

/// Outcome of evaluating a rule string at a given quantity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoEvaluation {
    pub earned_gift_count: u32,
    /// Hints in the order their clauses appear in the rule text.
    pub hints: Vec<PromoHint>,
}

/// All clauses recognised in one rule string, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoRules {
    pub gift_rules: Vec<GiftRule>,
    pub discount_tiers: Vec<DiscountTier>,
}

impl PromoRules {
    /// Scans `text` for every gift and discount clause.
    ///
    /// Clauses whose numbers overflow `u32` are dropped, as are gift clauses
    /// with a zero buy threshold.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut gift_rules = Vec::new();
        for caps in GIFT_CLAUSE.captures_iter(text) {
            let (Some(buy), Some(free)) = (parse_count(&caps[1]), parse_count(&caps[2])) else {
                tracing::debug!(clause = &caps[0], "gift clause out of range; skipped");
                continue;
            };
            if buy == 0 {
                tracing::debug!(clause = &caps[0], "gift clause with zero threshold; skipped");
                continue;
            }
            gift_rules.push(GiftRule { buy, free });
        }

        let mut discount_tiers = Vec::new();
        for caps in DISCOUNT_CLAUSE.captures_iter(text) {
            let (Some(threshold), Some(amount)) = (parse_count(&caps[1]), parse_count(&caps[2]))
            else {
                tracing::debug!(clause = &caps[0], "discount clause out of range; skipped");
                continue;
            };
            discount_tiers.push(DiscountTier { threshold, amount });
        }

        Self {
            gift_rules,
            discount_tiers,
        }
    }

    /// Returns `true` when no clause was recognised.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gift_rules.is_empty() && self.discount_tiers.is_empty()
    }

    /// Gift units earned at `qty`.
    ///
    /// Gift clauses are not combined: each clause whose threshold `qty`
    /// reaches replaces the running total, so the last reachable clause in the
    /// text decides the result.
    #[must_use]
    pub fn earned_gifts(&self, qty: u32) -> u32 {
        self.gift_rules
            .iter()
            .fold(0, |earned, rule| rule.earned(qty).unwrap_or(earned))
    }

    /// Hints for every discount tier `qty` has not reached yet.
    #[must_use]
    pub fn hints(&self, qty: u32) -> Vec<PromoHint> {
        self.discount_tiers
            .iter()
            .filter(|tier| qty < tier.threshold)
            .map(|tier| {
                let remaining = tier.threshold - qty;
                PromoHint {
                    next_threshold: tier.threshold,
                    savings: tier.amount,
                    message: format!("再買 {remaining} 盒折 {} 元", tier.amount),
                }
            })
            .collect()
    }

    /// Earned gifts and outstanding hints at `qty`.
    #[must_use]
    pub fn evaluate(&self, qty: u32) -> PromoEvaluation {
        PromoEvaluation {
            earned_gift_count: self.earned_gifts(qty),
            hints: self.hints(qty),
        }
    }
}

/// Parses `rule_text` and evaluates it at `requested_qty` in one step.
#[must_use]
pub fn evaluate(rule_text: &str, requested_qty: u32) -> PromoEvaluation {
    PromoRules::parse(rule_text).evaluate(requested_qty)
}

#[cfg(test)]
#[path = "promo_test.rs"]
mod tests;
