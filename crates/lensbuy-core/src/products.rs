//! Records exchanged with the remote ordering backend.
//!
//! Field names serialize as camelCase to match the backend's JSON.

use lensbuy_rules::{DiopterRange, PromoEvaluation, PromoRules};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Diopter recorded on a cart line when the buyer does not choose one.
pub const DEFAULT_DIOPTER: &str = "0.00";

/// A purchasable lens: one brand / style / color combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub brand: String,
    pub style: String,
    pub color: String,
    /// Unit price per box.
    pub price: Decimal,
    /// Promotional rule text, e.g. `"買3送1,5盒折100"`.
    #[serde(default)]
    pub promo_rules: String,
    /// Prescription range text, e.g. `"-1.00~-4.00, -6.00"`. Empty means
    /// every master option is offered.
    #[serde(default)]
    pub diopter_range: String,
    #[serde(default)]
    pub product_url: String,
}

impl Product {
    /// Promotion outcome for buying `qty` boxes of this product.
    #[must_use]
    pub fn promo_evaluation(&self, qty: u32) -> PromoEvaluation {
        PromoRules::parse(&self.promo_rules).evaluate(qty)
    }

    /// The options of `master` this product is made in.
    #[must_use]
    pub fn diopter_options<S: AsRef<str>>(&self, master: &[S]) -> Vec<String> {
        DiopterRange::parse(&self.diopter_range).apply(master)
    }

    /// `"{brand} {style} - {color}"`, as shown on cart lines.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {} - {}", self.brand, self.style, self.color)
    }
}

/// A friend or family member the logged-in user orders for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubBuyer {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// The logged-in user placing the group order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub line_uid: String,
    pub display_name: String,
}

/// One free unit claimed against a line's gift allowance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
    pub product_id: String,
    pub diopter: String,
}

/// A cart line: one product at one diopter for one sub-buyer.
///
/// Brand, style, color and price are snapshotted from the product when the
/// line is added so historic orders stay readable if the catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub buyer_id: String,
    pub product_id: String,
    pub brand: String,
    pub style: String,
    pub color: String,
    pub price: Decimal,
    pub quantity: u32,
    pub diopter: String,
    #[serde(default)]
    pub gifts: Vec<Gift>,
}

impl CartItem {
    /// Price of the paid units on this line; gifts are free.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// A submitted (or historic) group order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub buyers: Vec<SubBuyer>,
    pub items: Vec<CartItem>,
    pub total_price: Decimal,
    /// RFC 3339 timestamp with millisecond precision.
    pub timestamp: String,
}
